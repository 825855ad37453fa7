//! A live game: the committed position plus its history.
//!
//! The search engine never touches this type; it works on child boards of
//! its own. `Game` owns the one position that moves are committed to, so a
//! process can run any number of independent games by owning multiple
//! `Game` values. Nothing here is global.

use crate::error::{GameError, GameResult};
use crate::rules;
use crate::search;
use crate::types::{Board, Color, Depth, Move, Score};

/// A move the engine committed, with the score search assigned to it
#[derive(Clone)]
pub struct EngineMove {
    pub mv: Move,
    pub score: Score,
    /// State token of the position after the move
    pub state: String,
}

/// One game of chess.
///
/// Holds the live position and a stack of prior positions so committed
/// moves can be taken back. Invalid input never mutates the position.
#[derive(Clone)]
pub struct Game {
    board: Board,
    history: Vec<Board>,
}

impl Game {
    /// Start a game from the standard starting position
    pub fn new() -> Self {
        Self {
            board: Board::default(),
            history: Vec::new(),
        }
    }

    /// Start a game from a FEN state token
    pub fn from_fen(fen: &str) -> GameResult<Self> {
        Ok(Self {
            board: rules::board_from_fen(fen)?,
            history: Vec::new(),
        })
    }

    /// The current position
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Serialized state token for the current position
    pub fn fen(&self) -> String {
        rules::fen(&self.board)
    }

    /// Whose turn it is
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Whether the game has ended (checkmate, stalemate, dead position)
    pub fn is_over(&self) -> bool {
        rules::is_game_over(&self.board)
    }

    /// Commit a move. The caller must pass a move generated for the
    /// current position.
    pub fn push(&mut self, mv: Move) {
        self.history.push(self.board.clone());
        self.board = self.board.make_move_new(mv);
    }

    /// Take back the most recently committed move. Returns false when
    /// there is nothing to undo.
    pub fn pop(&mut self) -> bool {
        match self.history.pop() {
            Some(prev) => {
                self.board = prev;
                true
            }
            None => false,
        }
    }

    /// Apply an externally supplied move token.
    ///
    /// The token is parsed first (`MalformedToken` on failure), then
    /// matched against the legal-move set of the current position
    /// (`IllegalMove` when absent). Only a fully validated move mutates
    /// the game; on success the new state token is returned.
    pub fn apply_move_token(&mut self, token: &str) -> GameResult<String> {
        let (from, to, promotion) = rules::parse_move_token(token)?;

        let mv = rules::find_legal_move(&self.board, from, to, promotion).ok_or_else(|| {
            GameError::IllegalMove {
                token: token.trim().to_string(),
            }
        })?;

        self.push(mv);
        Ok(self.fen())
    }

    /// Let the built-in search pick and commit a reply at the given depth.
    ///
    /// Advances the game by exactly one ply. Fails with `NoMoveAvailable`
    /// when the side to move has no legal moves.
    pub fn engine_reply(&mut self, depth: Depth) -> GameResult<EngineMove> {
        let (mv, score) = search::select_best_move(&self.board, depth)?;
        self.push(mv);
        Ok(EngineMove {
            mv,
            score,
            state: self.fen(),
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_restores_position() {
        let mut game = Game::new();
        let before = game.fen();

        for mv in rules::legal_moves(game.board()).collect::<Vec<_>>() {
            game.push(mv);
            assert_ne!(game.fen(), before);
            assert!(game.pop());
            assert_eq!(game.fen(), before);
        }
        assert!(!game.pop());
    }

    #[test]
    fn test_apply_valid_token() {
        let mut game = Game::new();
        let state = game.apply_move_token("e2e4").unwrap();
        // Pawn moved from e2 to e4, Black to move
        assert!(state.starts_with("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b"));
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn test_illegal_token_leaves_board_unchanged() {
        let mut game = Game::new();
        let before = game.fen();
        let err = game.apply_move_token("e2e5").unwrap_err();
        assert!(matches!(err, GameError::IllegalMove { .. }));
        assert_eq!(game.fen(), before);
    }

    #[test]
    fn test_malformed_token_leaves_board_unchanged() {
        let mut game = Game::new();
        let before = game.fen();
        let err = game.apply_move_token("zz99").unwrap_err();
        assert!(matches!(err, GameError::MalformedToken { .. }));
        assert_eq!(game.fen(), before);
    }

    #[test]
    fn test_engine_reply_advances_one_ply() {
        let mut game = Game::new();
        let reply = game.engine_reply(Depth::new(2)).unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(reply.state, game.fen());
    }

    #[test]
    fn test_from_fen_rejects_garbage() {
        assert!(matches!(
            Game::from_fen("not a position"),
            Err(GameError::InvalidFen { .. })
        ));
    }

    #[test]
    fn test_promotion_token() {
        let mut game = Game::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
        game.apply_move_token("a7a8q").unwrap();
        assert!(game.fen().starts_with("Q7/"));
    }
}
