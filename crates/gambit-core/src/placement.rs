//! Piece-placement text for [`Board`]: eight `/`-separated ranks, rank 8 first.
//!
//! This is the first field of a FEN record. Uppercase letters are White,
//! lowercase Black, and a digit stands for that many empty squares.

use std::str::FromStr;

use crate::board::Board;
use crate::error::PlacementError;
use crate::piece::Piece;
use crate::square::Square;

/// Placement text for the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl FromStr for Board {
    type Err = PlacementError;

    fn from_str(text: &str) -> Result<Board, PlacementError> {
        let ranks: Vec<&str> = text.trim().split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (row, rank_text) in ranks.iter().enumerate() {
            let rank = 8 - row as u8;
            let mut col = 0usize;

            for c in rank_text.chars() {
                if let Some(run) = c.to_digit(10) {
                    if !(1..=8).contains(&run) {
                        return Err(PlacementError::InvalidChar { character: c });
                    }
                    col += run as usize;
                    continue;
                }

                let piece =
                    Piece::from_symbol(c).ok_or(PlacementError::InvalidChar { character: c })?;
                let sq = Square::from_row_col(row as u8, col as u8).ok_or(
                    PlacementError::BadRankLength {
                        rank,
                        length: col + 1,
                    },
                )?;
                board.put(sq, piece);
                col += 1;
            }

            if col != 8 {
                return Err(PlacementError::BadRankLength { rank, length: col });
            }
        }

        Ok(board)
    }
}

impl Board {
    /// Return the placement text for this board.
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(71);
        for row in 0u8..8 {
            let mut empty_run = 0u8;
            for col in 0u8..8 {
                match Square::from_row_col(row, col).and_then(|sq| self.piece_at(sq)) {
                    Some(piece) => {
                        if empty_run > 0 {
                            out.push(char::from(b'0' + empty_run));
                            empty_run = 0;
                        }
                        out.push(piece.symbol());
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                out.push(char::from(b'0' + empty_run));
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.placement())
    }
}
