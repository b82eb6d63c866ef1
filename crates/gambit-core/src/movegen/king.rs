//! King geometry. Stepping into check is filtered later by the validator.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_set::SquareSet;

use super::step_targets;

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(super) fn targets(board: &Board, from: Square, color: Color) -> SquareSet {
    step_targets(board, from, color, &KING_OFFSETS)
}

#[cfg(test)]
mod tests {
    use super::targets;
    use crate::board::Board;
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn open_board_king() {
        let board = Board::empty();
        assert_eq!(targets(&board, Square::E4, Color::Black).count(), 8);
        assert_eq!(targets(&board, Square::H8, Color::Black).count(), 3);
        assert_eq!(targets(&board, Square::E1, Color::White).count(), 5);
    }

    #[test]
    fn boxed_in_at_start() {
        let board = Board::starting_position();
        assert!(targets(&board, Square::E1, Color::White).is_empty());
    }

    #[test]
    fn may_step_next_to_enemy_king() {
        // Only geometry here: adjacency to the other king is not forbidden.
        let board: Board = "8/8/8/3k4/8/3K4/8/8".parse().unwrap();
        assert!(targets(&board, Square::D3, Color::White).contains(Square::D4));
    }
}
