//! Score type for search.
//!
//! Scores are whole-pawn material sums with special values for terminal
//! positions. Mate scores use a magnitude far above any reachable material
//! sum (the full starting material is 78 pawns) so they dominate every
//! non-terminal evaluation.

use std::fmt;
use std::ops::Neg;

/// Score of a position where the side to move is checkmated
pub const SCORE_MATE: i32 = 9999;
/// Sentinel bound: strictly outside the range of any real score
pub const SCORE_INFINITY: i32 = 10000;
/// Score of a drawn position (stalemate, insufficient material)
pub const SCORE_DRAW: i32 = 0;

/// A search score.
///
/// Positive mate scores mean Black is mated, negative mean White is mated;
/// everything in between is a material sum.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Score(pub i32);

impl Score {
    /// Create a score from a raw material sum
    #[inline]
    pub const fn new(value: i32) -> Self {
        Score(value)
    }

    /// Draw score
    #[inline]
    pub const fn draw() -> Self {
        Score(SCORE_DRAW)
    }

    /// White is checkmated
    #[inline]
    pub const fn mate_for_black() -> Self {
        Score(-SCORE_MATE)
    }

    /// Black is checkmated
    #[inline]
    pub const fn mate_for_white() -> Self {
        Score(SCORE_MATE)
    }

    /// Upper bound (for minimizing initialization)
    #[inline]
    pub const fn infinity() -> Self {
        Score(SCORE_INFINITY)
    }

    /// Lower bound (for maximizing initialization)
    #[inline]
    pub const fn neg_infinity() -> Self {
        Score(-SCORE_INFINITY)
    }

    /// Get the raw value
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Check if this is a checkmate score (either side)
    #[inline]
    pub const fn is_mate(self) -> bool {
        self.0 == SCORE_MATE || self.0 == -SCORE_MATE
    }
}

impl Neg for Score {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Score(-self.0)
    }
}

impl From<i32> for Score {
    #[inline]
    fn from(v: i32) -> Self {
        Score(v)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_mate() {
            // Name the mated side rather than printing the sentinel value
            write!(f, "mate {}", if self.0 > 0 { "black" } else { "white" })
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Debug for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mate_dominates_material() {
        // No material sum can reach the mate band
        let full_board_material = Score::new(78);
        assert!(Score::mate_for_white() > full_board_material);
        assert!(Score::mate_for_black() < -full_board_material);
        assert!(!full_board_material.is_mate());
        assert!(Score::mate_for_white().is_mate());
    }

    #[test]
    fn test_infinity_bounds() {
        assert!(Score::infinity() > Score::mate_for_white());
        assert!(Score::neg_infinity() < Score::mate_for_black());
    }
}
