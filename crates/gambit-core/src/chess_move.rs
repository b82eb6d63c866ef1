//! Moves and the outcome of applying them.

use std::fmt;

use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A move from one square to another.
///
/// A move carries no validity of its own; legality is decided against a board
/// and a side to move by [`validate`](crate::validate).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    /// Source square.
    #[inline]
    pub const fn source(self) -> Square {
        self.from
    }

    /// Destination square.
    #[inline]
    pub const fn dest(self) -> Square {
        self.to
    }

    /// Row and column distance travelled, as signed deltas.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        (
            self.to.row() as i8 - self.from.row() as i8,
            self.to.col() as i8 - self.from.col() as i8,
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

/// What happened when a move was applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// The piece that moved, as it stood on the source square.
    pub moved: Piece,
    /// The piece removed from the destination square, if any.
    pub captured: Option<Piece>,
    /// The kind the mover was replaced with on promotion. Always a queen.
    pub promoted_to: Option<PieceKind>,
}

impl MoveResult {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promoted_to.is_some()
    }

    /// Return the captured king, if this move took one.
    pub fn captured_king(&self) -> Option<Piece> {
        self.captured.filter(|p| p.kind() == PieceKind::King)
    }
}
