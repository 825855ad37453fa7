//! Depth type for search.
//!
//! Type-safe wrapper for the remaining search depth in plies.

use std::ops::Sub;

/// Search depth (in plies).
///
/// The search has no pruning, so cost is branching-factor^depth; keep this
/// small. The service default is 2.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
#[repr(transparent)]
pub struct Depth(pub i32);

impl Depth {
    pub const ZERO: Depth = Depth(0);

    #[inline]
    pub const fn new(d: i32) -> Self {
        Depth(d)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Check if this is a leaf of the search (no plies remaining)
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 <= 0
    }
}

impl Sub<i32> for Depth {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: i32) -> Self {
        Depth(self.0 - rhs)
    }
}

impl From<i32> for Depth {
    #[inline]
    fn from(d: i32) -> Self {
        Depth(d)
    }
}
