//! Fixed-depth minimax search.

use crate::error::{GameError, GameResult};
use crate::eval;
use crate::rules;
use crate::types::{Board, Depth, Move, Score};

/// Recursive minimax over the position.
///
/// Returns the static evaluation once `depth` reaches zero or the rule
/// provider reports the game over; otherwise the maximum (or minimum, for
/// the minimizing side) of the child scores.
///
/// The `chess` crate is copy-make, so each candidate move produces a child
/// board and the parent is never mutated: sibling branches always search
/// from an intact position, on every exit path.
pub fn minimax(board: &Board, depth: Depth, maximizing: bool) -> Score {
    if depth.is_zero() || rules::is_game_over(board) {
        return eval::evaluate(board);
    }

    if maximizing {
        let mut best = Score::neg_infinity();
        for m in rules::legal_moves(board) {
            let child = board.make_move_new(m);
            let score = minimax(&child, depth - 1, false);
            best = best.max(score);
        }
        best
    } else {
        let mut best = Score::infinity();
        for m in rules::legal_moves(board) {
            let child = board.make_move_new(m);
            let score = minimax(&child, depth - 1, true);
            best = best.min(score);
        }
        best
    }
}

/// Pick the engine's move for the position.
///
/// Iterates the root legal moves, scores each with `minimax(depth - 1)`
/// with the opponent to reply (minimizing), and keeps the maximum. Ties
/// break to the first move reaching the extremal score, in the rule
/// provider's enumeration order, so selection is deterministic.
///
/// Fails with `NoMoveAvailable` when the position has no legal moves.
pub fn select_best_move(board: &Board, depth: Depth) -> GameResult<(Move, Score)> {
    let mut best: Option<(Move, Score)> = None;

    for m in rules::legal_moves(board) {
        let child = board.make_move_new(m);
        let score = minimax(&child, depth - 1, false);

        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((m, score)),
        }
    }

    best.ok_or(GameError::NoMoveAvailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{board_from_fen, fen, format_move, legal_moves};
    use crate::types::Color;

    #[test]
    fn test_depth_zero_equals_evaluate() {
        let positions = [
            Board::default(),
            board_from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap(),
            board_from_fen("k6r/8/8/8/8/8/8/1QK5 w - - 0 1").unwrap(),
        ];
        for board in positions {
            assert_eq!(minimax(&board, Depth::ZERO, true), eval::evaluate(&board));
            assert_eq!(minimax(&board, Depth::ZERO, false), eval::evaluate(&board));
        }
    }

    #[test]
    fn test_search_does_not_mutate_position() {
        let board = Board::default();
        let before = fen(&board);
        let _ = minimax(&board, Depth::new(2), true);
        assert_eq!(fen(&board), before);
    }

    #[test]
    fn test_selector_returns_legal_move_from_start() {
        let board = Board::default();
        let (m, _) = select_best_move(&board, Depth::new(2)).unwrap();
        assert!(legal_moves(&board).any(|lm| lm == m));

        // Committing the move flips the side to move
        let after = board.make_move_new(m);
        assert_eq!(after.side_to_move(), Color::Black);
    }

    #[test]
    fn test_selector_finds_mate_in_one() {
        // Ra8 is back-rank mate; +9999 dominates every quiet reply
        let board = board_from_fen("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1").unwrap();
        let (m, score) = select_best_move(&board, Depth::new(2)).unwrap();
        assert_eq!(format_move(m), "a1a8");
        assert_eq!(score, Score::mate_for_white());
    }

    #[test]
    fn test_selector_with_single_legal_move() {
        // White's only legal move is Kxb2; score is irrelevant
        let board = board_from_fen("k7/8/8/8/8/8/1r6/K7 w - - 0 1").unwrap();
        assert_eq!(legal_moves(&board).len(), 1);
        let (m, _) = select_best_move(&board, Depth::new(2)).unwrap();
        assert_eq!(format_move(m), "a1b2");
    }

    #[test]
    fn test_selector_no_moves_available() {
        // Stalemate: zero legal moves for the side to move
        let board = board_from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(matches!(
            select_best_move(&board, Depth::new(2)),
            Err(GameError::NoMoveAvailable)
        ));
    }

    #[test]
    fn test_selector_is_deterministic() {
        let board = Board::default();
        let (first, _) = select_best_move(&board, Depth::new(2)).unwrap();
        let (second, _) = select_best_move(&board, Depth::new(2)).unwrap();
        assert_eq!(first, second);
    }
}
