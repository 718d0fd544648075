//! Hash collections used across the workspace. `rustc-hash` by default, std
//! hashing with the `std-hash` feature.

#[cfg(not(feature = "std-hash"))]
pub mod map {
    pub use rustc_hash::FxHashSet as HashSet;
}

#[cfg(feature = "std-hash")]
pub mod map {
    pub use std::collections::HashSet;
}
