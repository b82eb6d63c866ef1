//! Pawn geometry: pushes, captures, and the squares a pawn threatens.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Forward steps onto empty squares: one step, or two from the start row
/// when both squares ahead are empty.
pub(super) fn pushes(board: &Board, from: Square, color: Color) -> SquareSet {
    let mut out = SquareSet::EMPTY;
    let forward = color.forward();

    let Some(one) = from.offset(forward, 0).filter(|&sq| !board.is_occupied(sq)) else {
        return out;
    };
    out.insert(one);

    if from.row() == color.pawn_start_row() {
        if let Some(two) = one.offset(forward, 0).filter(|&sq| !board.is_occupied(sq)) {
            out.insert(two);
        }
    }
    out
}

/// Forward diagonals that currently hold an enemy piece.
pub(super) fn captures(board: &Board, from: Square, color: Color) -> SquareSet {
    attacks(from, color)
        .filter(|&sq| board.piece_at(sq).is_some_and(|p| p.color() != color))
        .collect()
}

/// Both forward diagonals, occupied or not.
pub(super) fn attacks(from: Square, color: Color) -> SquareSet {
    let forward = color.forward();
    [-1, 1]
        .into_iter()
        .filter_map(|d_col| from.offset(forward, d_col))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{attacks, captures, pushes};
    use crate::board::Board;
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn double_step_from_start_row() {
        let board = Board::starting_position();
        let white = pushes(&board, Square::E2, Color::White);
        assert!(white.contains(Square::E3) && white.contains(Square::E4));
        let black = pushes(&board, Square::D7, Color::Black);
        assert!(black.contains(Square::D6) && black.contains(Square::D5));
    }

    #[test]
    fn no_double_step_after_leaving_start() {
        let board: Board = "8/8/8/8/8/4P3/8/8".parse().unwrap();
        let moves = pushes(&board, Square::E3, Color::White);
        assert_eq!(moves.count(), 1);
        assert!(moves.contains(Square::E4));
    }

    #[test]
    fn double_step_needs_both_squares_empty() {
        let near: Board = "8/8/8/8/8/4n3/4P3/8".parse().unwrap();
        assert!(pushes(&near, Square::E2, Color::White).is_empty());

        let far: Board = "8/8/8/8/4n3/8/4P3/8".parse().unwrap();
        let moves = pushes(&far, Square::E2, Color::White);
        assert_eq!(moves.count(), 1);
        assert!(moves.contains(Square::E3));
    }

    #[test]
    fn captures_need_an_enemy() {
        let board: Board = "8/8/8/8/3p1P2/4P3/8/8".parse().unwrap();
        let taken = captures(&board, Square::E3, Color::White);
        assert_eq!(taken.count(), 1);
        assert!(taken.contains(Square::D4));
        assert!(captures(&Board::empty(), Square::E3, Color::White).is_empty());
    }

    #[test]
    fn attacks_ignore_occupancy() {
        let squares = attacks(Square::E7, Color::Black);
        assert_eq!(squares.count(), 2);
        assert!(squares.contains(Square::D6) && squares.contains(Square::F6));
        assert_eq!(attacks(Square::A2, Color::White).count(), 1);
    }

    #[test]
    fn last_row_pawn_has_nowhere_to_go() {
        let board: Board = "4P3/8/8/8/8/8/8/8".parse().unwrap();
        assert!(pushes(&board, Square::E8, Color::White).is_empty());
        assert!(attacks(Square::E8, Color::White).is_empty());
    }
}
