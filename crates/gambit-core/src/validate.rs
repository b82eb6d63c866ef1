//! Move validation: pseudo-legality, full legality, and legal move
//! enumeration.
//!
//! Full legality is decided by simulation. The candidate move is applied to
//! a copy of the board and the mover's king is checked for attack in the
//! resulting position, which covers pins and discovered attacks without any
//! special casing. The caller's board is never modified.

use std::collections::HashSet;

use tracing::trace;

use crate::board::Board;
use crate::check::is_in_check;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::IllegalMove;
use crate::movegen::{between, move_targets};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// Check ownership, movement pattern, path clearance, and capture rules,
/// reporting the first rule the move breaks.
///
/// Accepts exactly the destinations produced by
/// [`move_targets`](crate::movegen::move_targets) for the moving piece.
pub fn check_pseudo_legal(board: &Board, color: Color, mv: Move) -> Result<(), IllegalMove> {
    let piece = board.piece_at(mv.source()).ok_or(IllegalMove::NoPiece)?;
    if piece.color() != color {
        return Err(IllegalMove::NotYourPiece);
    }
    if mv.source() == mv.dest() {
        return Err(IllegalMove::SameSquare);
    }
    let target = board.piece_at(mv.dest());
    if target.is_some_and(|t| t.color() == color) {
        return Err(IllegalMove::OwnPieceCapture);
    }

    let (d_row, d_col) = mv.delta();
    let (abs_row, abs_col) = (d_row.abs(), d_col.abs());
    match piece.kind() {
        PieceKind::Pawn => check_pawn(board, piece, mv, target),
        PieceKind::Knight if (abs_row, abs_col) == (1, 2) || (abs_row, abs_col) == (2, 1) => Ok(()),
        PieceKind::King if abs_row <= 1 && abs_col <= 1 => Ok(()),
        PieceKind::Bishop if abs_row == abs_col => check_path(board, mv),
        PieceKind::Rook if d_row == 0 || d_col == 0 => check_path(board, mv),
        PieceKind::Queen if abs_row == abs_col || d_row == 0 || d_col == 0 => check_path(board, mv),
        kind => Err(IllegalMove::InvalidPattern { kind }),
    }
}

fn check_pawn(board: &Board, pawn: Piece, mv: Move, target: Option<Piece>) -> Result<(), IllegalMove> {
    let color = pawn.color();
    let forward = color.forward();
    let invalid = Err(IllegalMove::InvalidPattern {
        kind: PieceKind::Pawn,
    });

    match mv.delta() {
        (d_row, 0) if d_row == forward => {
            if target.is_some() {
                Err(IllegalMove::PawnForwardBlocked)
            } else {
                Ok(())
            }
        }
        (d_row, 0) if d_row == 2 * forward => {
            if mv.source().row() != color.pawn_start_row() {
                return invalid;
            }
            check_path(board, mv)?;
            if target.is_some() {
                Err(IllegalMove::PawnForwardBlocked)
            } else {
                Ok(())
            }
        }
        (d_row, d_col) if d_row == forward && d_col.abs() == 1 => {
            if target.is_some() {
                Ok(())
            } else {
                Err(IllegalMove::PawnDiagonalNeedsCapture)
            }
        }
        _ => invalid,
    }
}

/// Every square strictly between source and destination must be empty.
fn check_path(board: &Board, mv: Move) -> Result<(), IllegalMove> {
    let path = between(mv.source(), mv.dest()).ok_or(IllegalMove::PathBlocked)?;
    if !(path & board.occupied()).is_empty() {
        return Err(IllegalMove::PathBlocked);
    }
    Ok(())
}

/// Full legality with a reason: pseudo-legal and the mover's king is not
/// attacked once the move has been played.
pub fn check_move(board: &Board, color: Color, mv: Move) -> Result<(), IllegalMove> {
    check_pseudo_legal(board, color, mv)?;
    if leaves_king_in_check(board, color, mv) {
        return Err(IllegalMove::LeavesKingInCheck);
    }
    Ok(())
}

/// Simulate `mv` on a scratch copy and report whether `color`'s king ends up
/// attacked.
fn leaves_king_in_check(board: &Board, color: Color, mv: Move) -> bool {
    let mut scratch = board.copy();
    match scratch.apply_move(mv) {
        Ok(_) => is_in_check(&scratch, color),
        // Nothing moved, so nothing can have been exposed.
        Err(_) => is_in_check(board, color),
    }
}

/// Return `true` if `mv` obeys the moving piece's geometry and occupancy
/// rules for `color`, ignoring self-check.
pub fn is_pseudo_legal(board: &Board, color: Color, mv: Move) -> bool {
    check_pseudo_legal(board, color, mv).is_ok()
}

/// Return `true` if `mv` is pseudo-legal and does not leave `color`'s king
/// in check.
pub fn is_legal(board: &Board, color: Color, mv: Move) -> bool {
    check_move(board, color, mv).is_ok()
}

/// Every fully legal move for `color`.
///
/// The result is a set; callers must not rely on any ordering.
pub fn legal_moves(board: &Board, color: Color) -> HashSet<Move> {
    let moves: HashSet<Move> = pseudo_legal_moves(board, color)
        .filter(|&mv| !leaves_king_in_check(board, color, mv))
        .collect();
    trace!(%color, count = moves.len(), "legal moves enumerated");
    moves
}

/// Return `true` if `color` has at least one legal move. Stops at the first
/// one found.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    pseudo_legal_moves(board, color).any(|mv| !leaves_king_in_check(board, color, mv))
}

fn pseudo_legal_moves(board: &Board, color: Color) -> impl Iterator<Item = Move> + '_ {
    board.pieces_of(color).flat_map(move |(from, piece)| {
        move_targets(board, from, piece).map(move |to| Move::new(from, to))
    })
}
