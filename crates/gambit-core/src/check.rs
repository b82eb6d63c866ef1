//! Check detection.

use crate::board::Board;
use crate::color::Color;
use crate::movegen::attack_targets;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Locate the king of `color`, or `None` once it has been captured.
///
/// Boards composed by hand may hold several kings of one color; the first in
/// square order (A8 through H1) is returned.
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board
        .pieces_of(color)
        .find(|(_, piece)| piece.kind() == PieceKind::King)
        .map(|(sq, _)| sq)
}

/// Return `true` if `sq` is threatened by any piece of `by_color`.
///
/// Pawns count as threatening their forward diagonals regardless of what
/// stands there.
pub fn is_square_attacked(board: &Board, sq: Square, by_color: Color) -> bool {
    board
        .pieces_of(by_color)
        .any(|(from, piece)| attack_targets(board, from, piece).contains(sq))
}

/// Return `true` if the king of `color` is attacked.
///
/// A side whose king has been captured is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    king_square(board, color).is_some_and(|king| is_square_attacked(board, king, color.flip()))
}
