//! Pure math for pointer coordinates in Dragkit
//!
//! Page coordinates, element origins and drag deltas all share the same
//! logical-pixel `Point` type.

mod geometry;

pub use geometry::*;
