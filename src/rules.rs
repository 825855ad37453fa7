//! Rule-provider surface over the `chess` crate.
//!
//! The crate supplies legal-move generation, check/checkmate/stalemate
//! detection and FEN round-tripping; this module presents exactly the
//! operations the engine consumes, plus the pieces the crate is missing
//! (insufficient-material detection, two-stage move-token parsing).

use crate::error::{GameError, GameResult};
use crate::types::{BitBoard, Board, BoardStatus, Move, MoveGen, Piece, Square, EMPTY};
use std::str::FromStr;

/// Dark squares of the board (a1 is dark)
const DARK_SQUARES: BitBoard = BitBoard(0xAA55_AA55_AA55_AA55);

/// Enumerate all legal moves in the position.
///
/// Iteration order is the generator's order; move selection uses it as the
/// deterministic tie-break (first move achieving the extremal score wins).
#[inline]
pub fn legal_moves(board: &Board) -> MoveGen {
    MoveGen::new_legal(board)
}

/// Check if the side to move is checkmated
#[inline]
pub fn is_checkmate(board: &Board) -> bool {
    board.status() == BoardStatus::Checkmate
}

/// Check if the side to move is stalemated
#[inline]
pub fn is_stalemate(board: &Board) -> bool {
    board.status() == BoardStatus::Stalemate
}

/// Check if neither side retains mating material.
///
/// True when there are no pawns, rooks or queens and either at most one
/// minor piece remains, or only bishops remain and all stand on squares of
/// one color.
pub fn insufficient_material(board: &Board) -> bool {
    if *board.pieces(Piece::Pawn) != EMPTY
        || *board.pieces(Piece::Rook) != EMPTY
        || *board.pieces(Piece::Queen) != EMPTY
    {
        return false;
    }

    let knights = *board.pieces(Piece::Knight);
    let bishops = *board.pieces(Piece::Bishop);

    if (knights | bishops).popcnt() <= 1 {
        // K vs K, KN vs K, KB vs K
        return true;
    }

    // Any-number-of-bishops endings are dead when every bishop shares a
    // square color
    knights == EMPTY
        && ((bishops & DARK_SQUARES) == bishops || (bishops & DARK_SQUARES) == EMPTY)
}

/// Check if the game is over (checkmate, stalemate, or dead position)
#[inline]
pub fn is_game_over(board: &Board) -> bool {
    board.status() != BoardStatus::Ongoing || insufficient_material(board)
}

/// Serialize the position as a FEN state token.
///
/// The token is complete and round-trippable: piece placement, side to
/// move, castling rights, en-passant target and move counters.
#[inline]
pub fn fen(board: &Board) -> String {
    board.to_string()
}

/// Parse a FEN state token back into a position
pub fn board_from_fen(fen: &str) -> GameResult<Board> {
    Board::from_str(fen).map_err(|_| GameError::InvalidFen {
        fen: fen.to_string(),
    })
}

/// Parse a UCI move token (e.g. "e2e4", "e7e8q") into a from/to/promotion
/// triple. Fails with `MalformedToken` without consulting the position.
pub fn parse_move_token(token: &str) -> GameResult<(Square, Square, Option<Piece>)> {
    let malformed = || GameError::MalformedToken {
        token: token.to_string(),
    };

    let token = token.trim();
    // Length check is in bytes; reject non-ASCII before slicing
    if !token.is_ascii() || token.len() < 4 || token.len() > 5 {
        return Err(malformed());
    }

    let from = Square::from_str(&token[0..2]).map_err(|_| malformed())?;
    let to = Square::from_str(&token[2..4]).map_err(|_| malformed())?;

    let promotion = match token.chars().nth(4) {
        None => None,
        Some('q') | Some('Q') => Some(Piece::Queen),
        Some('r') | Some('R') => Some(Piece::Rook),
        Some('b') | Some('B') => Some(Piece::Bishop),
        Some('n') | Some('N') => Some(Piece::Knight),
        Some(_) => return Err(malformed()),
    };

    Ok((from, to, promotion))
}

/// Find the legal move matching a parsed triple, if any.
///
/// A move token is meaningful only relative to the position it is applied
/// to, so the match is always done against the current legal-move set.
pub fn find_legal_move(
    board: &Board,
    from: Square,
    to: Square,
    promotion: Option<Piece>,
) -> Option<Move> {
    legal_moves(board)
        .find(|m| m.get_source() == from && m.get_dest() == to && m.get_promotion() == promotion)
}

/// Format a move to UCI notation (e.g. "e2e4", "e7e8q")
pub fn format_move(m: Move) -> String {
    let mut s = format!("{}{}", m.get_source(), m.get_dest());
    if let Some(promo) = m.get_promotion() {
        let c = match promo {
            Piece::Queen => 'q',
            Piece::Rook => 'r',
            Piece::Bishop => 'b',
            Piece::Knight => 'n',
            _ => unreachable!(),
        };
        s.push(c);
    }
    s
}
