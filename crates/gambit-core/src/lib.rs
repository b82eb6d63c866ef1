//! Core chess rules: board representation, piece geometry, check detection,
//! and move validation.

mod board;
mod check;
mod chess_move;
mod color;
mod error;
mod file;
pub mod movegen;
mod piece;
mod piece_kind;
mod placement;
mod rank;
mod square;
mod square_set;
pub mod validate;

pub use board::{Board, PrettyBoard};
pub use check::{is_in_check, is_square_attacked, king_square};
pub use chess_move::{Move, MoveResult};
pub use color::Color;
pub use error::{BoardError, IllegalMove, PlacementError};
pub use file::File;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use placement::STARTING_PLACEMENT;
pub use rank::Rank;
pub use square::Square;
pub use square_set::SquareSet;
pub use validate::{
    check_move, check_pseudo_legal, has_legal_move, is_legal, is_pseudo_legal, legal_moves,
};
