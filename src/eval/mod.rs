//! Static board evaluation.
//!
//! Terminal positions dominate: checkmate scores ±9999 from White's
//! perspective, draws score exactly 0. Everything else is a material sum.

use crate::rules;
use crate::types::{piece_value, Board, Color, Piece, Score, Value};

/// All capturable piece kinds plus the king (valued 0)
const ALL_PIECES: [Piece; 6] = [
    Piece::Pawn,
    Piece::Knight,
    Piece::Bishop,
    Piece::Rook,
    Piece::Queen,
    Piece::King,
];

/// Evaluate the position.
///
/// - Checkmate: -9999 when White is the mated side to move, +9999 when
///   Black is. The side to move with no legal response while in check has
///   lost; no material sum can outweigh this.
/// - Stalemate or insufficient material: 0.
/// - Otherwise the sum of the material values of every piece on the board.
///   Note the sum is color-blind — both sides' material is added rather
///   than differenced, matching the behavior of the system this service
///   reproduces. See DESIGN.md before "fixing" this.
///
/// Deterministic and side-effect free; never mutates the position.
pub fn evaluate(board: &Board) -> Score {
    if rules::is_checkmate(board) {
        return match board.side_to_move() {
            Color::White => Score::mate_for_black(),
            Color::Black => Score::mate_for_white(),
        };
    }

    if rules::is_stalemate(board) || rules::insufficient_material(board) {
        return Score::draw();
    }

    Score::new(total_material(board))
}

/// Sum the material value of every piece on the board, both colors
fn total_material(board: &Board) -> Value {
    let mut total: Value = 0;
    for piece in ALL_PIECES {
        total += piece_value(piece) * board.pieces(piece).popcnt() as Value;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::board_from_fen;

    #[test]
    fn test_starting_position_material() {
        // 2 * (8*1 + 2*3 + 2*3 + 2*5 + 9) = 78 pawns of material
        let board = Board::default();
        assert_eq!(evaluate(&board).raw(), 78);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let board = Board::default();
        let first = evaluate(&board);
        assert_eq!(evaluate(&board), first);
        assert_eq!(rules::fen(&board), rules::fen(&Board::default()));
    }

    #[test]
    fn test_white_mated_scores_negative() {
        // Fool's mate: White to move, checkmated. A nearly full board of
        // material must not leak into the score.
        let board = board_from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 3")
            .unwrap();
        assert_eq!(evaluate(&board), Score::mate_for_black());
        assert_eq!(evaluate(&board).raw(), -9999);
    }

    #[test]
    fn test_black_mated_scores_positive() {
        // Scholar's mate: Black to move, checkmated
        let board =
            board_from_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4")
                .unwrap();
        assert_eq!(evaluate(&board), Score::mate_for_white());
    }

    #[test]
    fn test_stalemate_scores_zero() {
        let board = board_from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(evaluate(&board), Score::draw());
    }

    #[test]
    fn test_insufficient_material_scores_zero() {
        let board = board_from_fen("8/8/8/8/8/8/1N6/K6k w - - 0 1").unwrap();
        assert_eq!(evaluate(&board), Score::draw());
    }

    #[test]
    fn test_material_sum_is_color_blind() {
        // One white queen vs one black rook: 9 + 5, not 9 - 5
        let board = board_from_fen("k6r/8/8/8/8/8/8/1QK5 w - - 0 1").unwrap();
        assert_eq!(evaluate(&board).raw(), 14);
    }
}
