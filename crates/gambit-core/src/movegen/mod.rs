//! Pseudo-legal piece geometry.
//!
//! Every function here answers "which squares could this piece reach or
//! attack from here on this board", ignoring whether doing so would leave the
//! mover's own king in check. That filtering belongs to
//! [`validate`](crate::validate). Off-board steps are silently dropped.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

pub use self::sliders::between;

/// Squares the piece on `from` may move to, captures included.
///
/// Pawns contribute forward pushes onto empty squares and diagonal steps
/// only onto enemy pieces. Every other kind contributes its attack pattern
/// minus squares held by its own side.
pub fn move_targets(board: &Board, from: Square, piece: Piece) -> SquareSet {
    let color = piece.color();
    match piece.kind() {
        PieceKind::Pawn => pawns::pushes(board, from, color) | pawns::captures(board, from, color),
        PieceKind::Knight => knights::targets(board, from, color),
        PieceKind::Bishop => sliders::bishop_targets(board, from, color),
        PieceKind::Rook => sliders::rook_targets(board, from, color),
        PieceKind::Queen => {
            sliders::rook_targets(board, from, color) | sliders::bishop_targets(board, from, color)
        }
        PieceKind::King => king::targets(board, from, color),
    }
}

/// Squares the piece on `from` threatens.
///
/// Identical to [`move_targets`] except for pawns, which threaten both
/// forward diagonals whether or not anything stands there and never threaten
/// the squares they push to.
pub fn attack_targets(board: &Board, from: Square, piece: Piece) -> SquareSet {
    match piece.kind() {
        PieceKind::Pawn => pawns::attacks(from, piece.color()),
        _ => move_targets(board, from, piece),
    }
}

/// Collect single-step destinations not held by `color`.
fn step_targets(board: &Board, from: Square, color: Color, offsets: &[(i8, i8)]) -> SquareSet {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|&sq| is_open_to(board, sq, color))
        .collect()
}

/// A square is open to `color` if it is empty or holds an enemy piece.
#[inline]
fn is_open_to(board: &Board, sq: Square, color: Color) -> bool {
    board.piece_at(sq).is_none_or(|p| p.color() != color)
}

#[cfg(test)]
mod tests {
    use super::{attack_targets, move_targets};
    use crate::board::Board;
    use crate::piece::Piece;
    use crate::square::Square;
    use crate::square_set::SquareSet;

    fn set(squares: &[Square]) -> SquareSet {
        squares.iter().copied().collect()
    }

    #[test]
    fn starting_position_mobility() {
        let board = Board::starting_position();
        let total: u32 = board
            .pieces()
            .map(|(sq, piece)| move_targets(&board, sq, piece).count())
            .sum();
        // 16 pawn pushes and 4 knight jumps per side
        assert_eq!(total, 40);
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let board: Board = "8/8/1p6/8/3Q1P2/8/8/8".parse().unwrap();
        let queen = move_targets(&board, Square::D4, Piece::WHITE_QUEEN);
        let rook = move_targets(&board, Square::D4, Piece::WHITE_ROOK);
        let bishop = move_targets(&board, Square::D4, Piece::WHITE_BISHOP);
        assert_eq!(queen, rook | bishop);
        assert!(queen.contains(Square::B6));
        assert!(!queen.contains(Square::A7));
        assert!(!queen.contains(Square::F4));
        assert!(queen.contains(Square::E4));
    }

    #[test]
    fn pawn_attacks_differ_from_moves() {
        let board = Board::starting_position();
        assert_eq!(
            move_targets(&board, Square::E2, Piece::WHITE_PAWN),
            set(&[Square::E3, Square::E4])
        );
        assert_eq!(
            attack_targets(&board, Square::E2, Piece::WHITE_PAWN),
            set(&[Square::D3, Square::F3])
        );
    }

    #[test]
    fn non_pawn_attacks_equal_moves() {
        let board: Board = "r3k3/8/8/3N4/8/8/8/4K2R".parse().unwrap();
        for (sq, piece) in board.pieces() {
            if piece.kind() != crate::piece_kind::PieceKind::Pawn {
                assert_eq!(
                    attack_targets(&board, sq, piece),
                    move_targets(&board, sq, piece),
                    "{piece:?} on {sq}"
                );
            }
        }
    }
}
