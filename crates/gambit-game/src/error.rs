//! Game controller errors.

use gambit_core::{BoardError, IllegalMove};

/// Errors returned by [`Game::play`](crate::Game::play).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The game has already ended; no further moves are accepted.
    #[error("the game is over")]
    GameOver,

    /// The move was rejected by the validator. Nothing was changed.
    #[error(transparent)]
    Illegal(#[from] IllegalMove),

    /// The board refused a move the validator accepted.
    #[error("board rejected a validated move: {0}")]
    Board(#[from] BoardError),
}

#[cfg(test)]
mod tests {
    use super::GameError;
    use gambit_core::{BoardError, IllegalMove, Square};

    #[test]
    fn illegal_is_transparent() {
        let err = GameError::from(IllegalMove::PathBlocked);
        assert_eq!(err.to_string(), "path is blocked");
    }

    #[test]
    fn board_error_wraps() {
        let err = GameError::from(BoardError::EmptySource { square: Square::A1 });
        assert!(err.to_string().contains("no piece on source square A1"));
    }
}
