//! chessd — a minimal two-sided chess service.
//!
//! A board state that accepts and validates moves, plus an automated
//! opponent that picks its reply by fixed-depth minimax over a
//! material-only evaluation. Legal-move generation, terminal-state
//! detection and FEN round-tripping come from the `chess` crate; the
//! `rules` module presents exactly the surface the engine consumes.
//!
//! # Layout
//! - [`types`]: board/move re-exports, `Score`, `Depth`, material table
//! - [`rules`]: rule-provider surface and move-token parsing
//! - [`eval`]: static evaluation
//! - [`search`]: minimax and root move selection
//! - [`game`]: the live position with commit/takeback and the
//!   move-application boundary
//! - [`uci`]: client for an optional external UCI engine
//! - [`server`]: HTTP glue (axum)

pub mod config;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod server;
pub mod types;
pub mod uci;

pub use config::Config;
pub use error::{GameError, GameResult};
pub use eval::evaluate;
pub use game::{EngineMove, Game};
pub use search::{minimax, select_best_move};
pub use types::{Depth, Score};
