//! Error types for the chess service.
//!
//! All invalid-input conditions are recoverable and leave the game state
//! untouched; the live position only changes on fully validated moves.

use thiserror::Error;

/// Errors surfaced by game operations
#[derive(Error, Debug)]
pub enum GameError {
    /// Move text cannot be parsed into a from/to/promotion triple
    #[error("malformed move token: {token:?}")]
    MalformedToken { token: String },

    /// Well-formed move that is not legal in the current position
    #[error("illegal move: {token}")]
    IllegalMove { token: String },

    /// Move selection was requested on a position with zero legal moves
    #[error("no legal moves available")]
    NoMoveAvailable,

    /// A position string could not be parsed as FEN
    #[error("invalid FEN: {fen:?}")]
    InvalidFen { fen: String },

    /// The external UCI engine process failed
    #[error("engine error: {0}")]
    Engine(#[from] std::io::Error),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
