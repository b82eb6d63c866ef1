//! Knight geometry.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_set::SquareSet;

use super::step_targets;

/// The eight L-shaped jumps as (row, column) deltas.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Knight jumps ignore anything standing in between.
pub(super) fn targets(board: &Board, from: Square, color: Color) -> SquareSet {
    step_targets(board, from, color, &KNIGHT_OFFSETS)
}
