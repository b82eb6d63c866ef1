//! The 8x8 board: piece placement, move application, and text rendering.

use std::fmt;

use tracing::trace;

use crate::chess_move::{Move, MoveResult};
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Piece placement for all 64 squares.
///
/// The grid is a flat array indexed by [`Square::index`], so a board is a
/// plain value: `Copy` produces a fully independent snapshot that can be
/// mutated for speculative move testing without touching the original.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// A board with no pieces on it.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// Return a board holding the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        board.setup_initial();
        board
    }

    /// Reset the board to the standard starting position.
    ///
    /// Any pieces already on the board are cleared first, so calling this
    /// repeatedly always yields the same 32-piece layout.
    pub fn setup_initial(&mut self) {
        self.squares = [None; Square::COUNT];
        for (col, kind) in PieceKind::BACK_RANK.into_iter().enumerate() {
            let col = col as u8;
            self.place(0, col, Piece::new(kind, Color::Black));
            self.place(1, col, Piece::BLACK_PAWN);
            self.place(6, col, Piece::WHITE_PAWN);
            self.place(7, col, Piece::new(kind, Color::White));
        }
    }

    fn place(&mut self, row: u8, col: u8, piece: Piece) {
        self.squares[(row * 8 + col) as usize] = Some(piece);
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Put `piece` on `sq`, returning whatever stood there before.
    pub fn put(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.squares[sq.index()].replace(piece)
    }

    /// Remove and return the piece on `sq`.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Iterate over every occupied square and its piece, A8 through H1.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Iterate over the pieces belonging to `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }

    /// Squares holding any piece.
    pub fn occupied(&self) -> SquareSet {
        self.pieces().map(|(sq, _)| sq).collect()
    }

    /// Apply a move whose legality the caller has already established.
    ///
    /// Moves the piece, removes anything on the destination square, and
    /// replaces a pawn reaching its far rank with a queen of the same color.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptySource`] if the source square is empty. The
    /// board is left untouched in that case.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveResult, BoardError> {
        let moved = self
            .remove(mv.source())
            .ok_or(BoardError::EmptySource {
                square: mv.source(),
            })?;

        let promotes =
            moved.kind() == PieceKind::Pawn && mv.dest().row() == moved.color().promotion_row();
        let landed = if promotes {
            Piece::new(PieceKind::Queen, moved.color())
        } else {
            moved
        };
        let captured = self.put(mv.dest(), landed);

        trace!(%mv, piece = ?moved, ?captured, promotes, "move applied");

        Ok(MoveResult {
            moved,
            captured,
            promoted_to: promotes.then_some(PieceKind::Queen),
        })
    }

    /// Return an independent snapshot of this board.
    #[inline]
    pub fn copy(&self) -> Board {
        *self
    }

    /// Return `true` if a king of `color` is still on the board.
    pub fn has_king(&self, color: Color) -> bool {
        self.pieces_of(color)
            .any(|(_, piece)| piece.kind() == PieceKind::King)
    }

    /// Render the board as a text grid with rank 8 at the top.
    pub fn render(&self) -> String {
        self.pretty().to_string()
    }

    /// Return a displayable wrapper that draws the board as a grid.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self.placement())
    }
}

/// Wrapper for drawing a board as a bordered 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

const FILE_LABELS: &str = "    A   B   C   D   E   F   G   H";
const RULE: &str = "  ---------------------------------";

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{FILE_LABELS}")?;
        writeln!(f, "{RULE}")?;
        for row in 0u8..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0u8..8 {
                let symbol = Square::from_row_col(row, col)
                    .and_then(|sq| self.0.piece_at(sq))
                    .map_or(' ', Piece::symbol);
                write!(f, "| {symbol} ")?;
            }
            writeln!(f, "|")?;
            writeln!(f, "{RULE}")?;
        }
        write!(f, "{FILE_LABELS}")
    }
}
