//! Sliding piece (bishop, rook, queen) rays.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_set::SquareSet;

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub(super) fn rook_targets(board: &Board, from: Square, color: Color) -> SquareSet {
    ray_targets(board, from, color, &ROOK_DIRECTIONS)
}

pub(super) fn bishop_targets(board: &Board, from: Square, color: Color) -> SquareSet {
    ray_targets(board, from, color, &BISHOP_DIRECTIONS)
}

/// Walk each direction until the edge or the first occupied square. That
/// square is included only when it holds an enemy piece.
fn ray_targets(board: &Board, from: Square, color: Color, directions: &[(i8, i8)]) -> SquareSet {
    let mut out = SquareSet::EMPTY;
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(next) = cursor.offset(d_row, d_col) {
            match board.piece_at(next) {
                None => out.insert(next),
                Some(piece) => {
                    if piece.color() != color {
                        out.insert(next);
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
    out
}

/// Squares strictly between `a` and `b` when they share a rank, file, or
/// diagonal. Returns `None` when they are not aligned or are the same square.
pub fn between(a: Square, b: Square) -> Option<SquareSet> {
    let d_row = b.row() as i8 - a.row() as i8;
    let d_col = b.col() as i8 - a.col() as i8;
    let aligned = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
    if a == b || !aligned {
        return None;
    }

    let step = (d_row.signum(), d_col.signum());
    let mut out = SquareSet::EMPTY;
    let mut cursor = a.offset(step.0, step.1)?;
    while cursor != b {
        out.insert(cursor);
        cursor = cursor.offset(step.0, step.1)?;
    }
    Some(out)
}
