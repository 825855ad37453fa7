//! Core types for the chess service.
//!
//! # Design Principles
//! - Re-export `chess` crate types as the canonical source for board/move
//!   types (the crate is our rule provider: legal moves, terminal status,
//!   FEN round-tripping)
//! - Define engine-specific types (`Score`, `Depth`) used by search

mod score;
mod depth;

pub use score::{Score, SCORE_INFINITY, SCORE_MATE, SCORE_DRAW};
pub use depth::Depth;

// Re-export chess crate types as canonical types
// This gives us a single source of truth and avoids confusion
pub use chess::{
    Board,
    ChessMove as Move,
    Square,
    Piece,
    Color,
    BitBoard,
    MoveGen,
    BoardStatus,
    EMPTY,
};

/// Material value type (whole pawns, not centipawns)
pub type Value = i32;

// Piece values in pawn units
pub const PAWN_VALUE: Value = 1;
pub const KNIGHT_VALUE: Value = 3;
pub const BISHOP_VALUE: Value = 3;
pub const ROOK_VALUE: Value = 5;
pub const QUEEN_VALUE: Value = 9;
// King is never captured; checkmate is a terminal signal, not material
pub const KING_VALUE: Value = 0;

/// Get the material value of a piece in pawn units
#[inline]
pub const fn piece_value(piece: Piece) -> Value {
    match piece {
        Piece::Pawn => PAWN_VALUE,
        Piece::Knight => KNIGHT_VALUE,
        Piece::Bishop => BISHOP_VALUE,
        Piece::Rook => ROOK_VALUE,
        Piece::Queen => QUEEN_VALUE,
        Piece::King => KING_VALUE,
    }
}
