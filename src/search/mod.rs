//! Search module for the chess service.
//!
//! # Architecture
//! - `minimax`: fixed-depth adversarial search over the rule provider's
//!   legal-move enumeration, scoring leaves with the static evaluator
//! - `select_best_move`: root-level iteration that tracks the maximum
//!
//! Deliberately unsophisticated: no pruning, no transposition table, no
//! move ordering. Every node visits all legal children, so cost grows as
//! branching-factor^depth; the service runs at depth 2.

mod minimax;

pub use minimax::{minimax, select_best_move};
