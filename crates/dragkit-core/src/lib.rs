//! Host-agnostic primitives shared by the Dragkit gesture crates.

pub mod collections;
pub mod owned;

pub use owned::Owned;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier the host toolkit uses for one element of its tree.
pub type ElementId = usize;

/// Tag for a group of document-level listeners installed together.
///
/// Each drag session allocates its own scope so that tearing its listeners
/// down never disturbs listeners installed by anyone else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerScope(u64);

impl ListenerScope {
    /// Allocates a scope that has never been handed out before.
    pub fn next() -> Self {
        static NEXT_SCOPE: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_SCOPE.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListenerScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".drag#{}", self.0)
    }
}
