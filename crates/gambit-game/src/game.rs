//! The game controller: board, side to move, status, and history as one
//! value.

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, error, info};

use gambit_core::{Board, Color, Move, MoveResult, check_move, has_legal_move, is_in_check};

use crate::error::GameError;

/// Where the game stands for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The side to move has at least one legal move.
    InProgress,
    /// The side to move is in check with no legal move.
    Checkmate {
        /// The side that delivered mate.
        winner: Color,
    },
    /// The side to move is not in check and has no legal move. A draw.
    Stalemate,
    /// A king was taken off the board.
    KingCaptured {
        /// The side whose king survives.
        winner: Color,
    },
}

impl GameStatus {
    /// Return `true` once no further moves are accepted.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning side, or `None` while in progress or after a stalemate.
    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } | GameStatus::KingCaptured { winner } => Some(winner),
            GameStatus::InProgress | GameStatus::Stalemate => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => f.write_str("in progress"),
            GameStatus::Checkmate { winner } => write!(f, "{winner} wins by checkmate"),
            GameStatus::Stalemate => f.write_str("draw by stalemate"),
            GameStatus::KingCaptured { winner } => write!(f, "{winner} wins by king capture"),
        }
    }
}

/// The outcome of one accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// The side that moved.
    pub mover: Color,
    /// The move played.
    pub mv: Move,
    /// What the board reported for the move.
    pub result: MoveResult,
    /// Status after the move, for the new side to move.
    pub status: GameStatus,
    /// Whether the new side to move is in check.
    pub gives_check: bool,
}

/// A chess game in progress.
///
/// All state lives in this value, so several games can run side by side and
/// tests need no reset hooks.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    status: GameStatus,
    history: Vec<(Move, MoveResult)>,
}

impl Game {
    /// Start a game from the initial position with White to move.
    pub fn new() -> Game {
        Game::from_board(Board::starting_position(), Color::White)
    }

    /// Start a game from an arbitrary position.
    ///
    /// The status is evaluated immediately, so a position that is already
    /// mate, stalemate, or missing a king reports it before any move.
    pub fn from_board(board: Board, side_to_move: Color) -> Game {
        let status = evaluate(&board, side_to_move);
        if status.is_over() {
            info!(%status, "game starts in a finished position");
        }
        Game {
            board,
            side_to_move,
            status,
            history: Vec::new(),
        }
    }

    /// Restore the initial position with White to move and clear the history.
    pub fn reset(&mut self) {
        self.board.setup_initial();
        self.side_to_move = Color::White;
        self.history.clear();
        self.status = evaluate(&self.board, self.side_to_move);
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Accepted moves so far, oldest first.
    pub fn history(&self) -> &[(Move, MoveResult)] {
        &self.history
    }

    /// Return `true` if the side to move is in check.
    pub fn in_check(&self) -> bool {
        is_in_check(&self.board, self.side_to_move)
    }

    /// Every legal move for the side to move.
    pub fn legal_moves(&self) -> HashSet<Move> {
        gambit_core::legal_moves(&self.board, self.side_to_move)
    }

    /// Play `mv` for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] once the game has ended and
    /// [`GameError::Illegal`] for a rejected move. The game is unchanged in
    /// both cases.
    pub fn play(&mut self, mv: Move) -> Result<Turn, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        let mover = self.side_to_move;
        if let Err(reason) = check_move(&self.board, mover, mv) {
            debug!(%mover, %mv, %reason, "move rejected");
            return Err(reason.into());
        }

        let result = self.board.apply_move(mv).map_err(|err| {
            error!(%mover, %mv, %err, "validated move could not be applied");
            GameError::from(err)
        })?;
        debug!(%mover, %mv, captured = ?result.captured, promoted = ?result.promoted_to, "move played");

        self.history.push((mv, result));
        self.side_to_move = mover.flip();
        self.status = match result.captured_king() {
            Some(_) => GameStatus::KingCaptured { winner: mover },
            None => evaluate(&self.board, self.side_to_move),
        };
        if self.status.is_over() {
            info!(status = %self.status, moves = self.history.len(), "game over");
        }

        Ok(Turn {
            mover,
            mv,
            result,
            status: self.status,
            gives_check: self.in_check(),
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

/// Status of `board` with `side` to move.
fn evaluate(board: &Board, side: Color) -> GameStatus {
    if !board.has_king(side) {
        return GameStatus::KingCaptured {
            winner: side.flip(),
        };
    }
    if !board.has_king(side.flip()) {
        return GameStatus::KingCaptured { winner: side };
    }
    if has_legal_move(board, side) {
        GameStatus::InProgress
    } else if is_in_check(board, side) {
        GameStatus::Checkmate {
            winner: side.flip(),
        }
    } else {
        GameStatus::Stalemate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gambit_core::{IllegalMove, Piece, PieceKind, Square};

    fn mv(from: Square, to: Square) -> Move {
        Move::new(from, to)
    }

    #[test]
    fn new_game_is_in_progress() {
        let game = Game::new();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.in_check());
        assert_eq!(game.legal_moves().len(), 20);
        assert!(game.history().is_empty());
    }

    #[test]
    fn play_alternates_sides() {
        let mut game = Game::new();
        let turn = game.play(mv(Square::E2, Square::E4)).unwrap();
        assert_eq!(turn.mover, Color::White);
        assert_eq!(turn.result.moved, Piece::WHITE_PAWN);
        assert!(!turn.result.is_capture());
        assert_eq!(game.side_to_move(), Color::Black);

        game.play(mv(Square::E7, Square::E5)).unwrap();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn illegal_move_changes_nothing() {
        let mut game = Game::new();
        let before = *game.board();
        assert_eq!(
            game.play(mv(Square::E7, Square::E5)),
            Err(GameError::Illegal(IllegalMove::NotYourPiece))
        );
        assert_eq!(*game.board(), before);
        assert_eq!(game.side_to_move(), Color::White);
        assert!(game.history().is_empty());
    }

    #[test]
    fn status_helpers() {
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::Stalemate.is_over());
        assert_eq!(GameStatus::Stalemate.winner(), None);
        assert_eq!(
            GameStatus::Checkmate {
                winner: Color::Black
            }
            .winner(),
            Some(Color::Black)
        );
        assert_eq!(
            GameStatus::KingCaptured {
                winner: Color::White
            }
            .to_string(),
            "White wins by king capture"
        );
    }

    #[test]
    fn from_board_detects_finished_positions() {
        let mate: Board = "R5k1/5ppp/8/8/8/8/8/6K1".parse().unwrap();
        let game = Game::from_board(mate, Color::Black);
        assert_eq!(
            game.status(),
            GameStatus::Checkmate {
                winner: Color::White
            }
        );

        let no_black_king: Board = "8/8/8/8/8/8/8/4K3".parse().unwrap();
        let game = Game::from_board(no_black_king, Color::White);
        assert_eq!(
            game.status(),
            GameStatus::KingCaptured {
                winner: Color::White
            }
        );
    }

    #[test]
    fn finished_game_rejects_moves() {
        let stalemate: Board = "7k/5Q2/6K1/8/8/8/8/8".parse().unwrap();
        let mut game = Game::from_board(stalemate, Color::Black);
        assert_eq!(game.status(), GameStatus::Stalemate);
        assert_eq!(
            game.play(mv(Square::H8, Square::H7)),
            Err(GameError::GameOver)
        );
    }

    #[test]
    fn promotion_reported_in_turn() {
        let board: Board = "7k/P7/8/8/8/8/8/K7".parse().unwrap();
        let mut game = Game::from_board(board, Color::White);
        let turn = game.play(mv(Square::A7, Square::A8)).unwrap();
        assert_eq!(turn.result.promoted_to, Some(PieceKind::Queen));
        assert_eq!(game.board().piece_at(Square::A8), Some(Piece::WHITE_QUEEN));
        assert!(turn.gives_check);
    }

    #[test]
    fn reset_restores_start() {
        let mut game = Game::new();
        game.play(mv(Square::G1, Square::F3)).unwrap();
        game.reset();
        assert_eq!(*game.board(), Board::starting_position());
        assert_eq!(game.side_to_move(), Color::White);
        assert!(game.history().is_empty());
        assert_eq!(game.status(), GameStatus::InProgress);
    }
}
