//! Error types for square notation, board mutation, placement parsing, and
//! move rejection.

use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Errors raised by [`Board`](crate::board::Board) and [`Square`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Coordinate text is not a file letter A–H followed by a rank digit 1–8.
    #[error("invalid square \"{notation}\": expected a file A-H followed by a rank 1-8")]
    InvalidNotation {
        /// The rejected text.
        notation: String,
    },
    /// A move was applied from an empty square. Only reachable when a caller
    /// skips legality checking.
    #[error("no piece on source square {square}")]
    EmptySource {
        /// The empty source square.
        square: Square,
    },
}

/// Errors that occur when parsing a piece-placement string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The placement does not have exactly 8 `/`-separated ranks.
    #[error("expected 8 ranks in placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank} describes {length} squares, expected 8")]
    BadRankLength {
        /// Rank number (8 for the first group, 1 for the last).
        rank: u8,
        /// Number of squares described.
        length: usize,
    },
    /// A character is neither a piece letter nor a digit 1–8.
    #[error("invalid placement character: '{character}'")]
    InvalidChar {
        /// The invalid character.
        character: char,
    },
}

/// Why a move was rejected by [`validate`](crate::validate).
///
/// These are ordinary outcomes of checking player input, not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("no piece at source position")]
    NoPiece,
    #[error("that's not your piece")]
    NotYourPiece,
    #[error("source and destination are the same")]
    SameSquare,
    #[error("cannot capture your own piece")]
    OwnPieceCapture,
    /// The destination is not reachable by this kind's movement pattern.
    #[error("a {kind} cannot move that way")]
    InvalidPattern {
        /// Kind of the piece that was asked to move.
        kind: PieceKind,
    },
    #[error("path is blocked")]
    PathBlocked,
    #[error("pawn cannot capture forward")]
    PawnForwardBlocked,
    #[error("pawn can only move diagonally to capture")]
    PawnDiagonalNeedsCapture,
    #[error("move would leave your king in check")]
    LeavesKingInCheck,
}

#[cfg(test)]
mod tests {
    use super::{BoardError, IllegalMove, PlacementError};
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn illegal_move_display() {
        assert_eq!(
            IllegalMove::InvalidPattern {
                kind: PieceKind::Knight
            }
            .to_string(),
            "a knight cannot move that way"
        );
        assert_eq!(IllegalMove::NotYourPiece.to_string(), "that's not your piece");
    }

    #[test]
    fn board_error_display() {
        let err = BoardError::EmptySource { square: Square::E4 };
        assert_eq!(format!("{err}"), "no piece on source square E4");

        let err = BoardError::InvalidNotation {
            notation: "Z9".to_string(),
        };
        assert!(format!("{err}").contains("\"Z9\""));
    }

    #[test]
    fn placement_error_display() {
        let err = PlacementError::WrongRankCount { found: 7 };
        assert_eq!(format!("{err}"), "expected 8 ranks in placement, found 7");
    }
}
