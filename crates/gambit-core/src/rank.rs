//! Board ranks (1–8) and their mapping onto grid rows.

use std::fmt;

/// A rank on the board. Rank 8 is drawn at the top and sits on grid row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Rank1 = 0,
    Rank2 = 1,
    Rank3 = 2,
    Rank4 = 3,
    Rank5 = 4,
    Rank6 = 5,
    Rank7 = 6,
    Rank8 = 7,
}

impl Rank {
    /// All ranks from 1 to 8.
    pub const ALL: [Rank; 8] = [
        Rank::Rank1,
        Rank::Rank2,
        Rank::Rank3,
        Rank::Rank4,
        Rank::Rank5,
        Rank::Rank6,
        Rank::Rank7,
        Rank::Rank8,
    ];

    /// Return the rank number (1..8).
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Return the grid row: rank 8 is row 0, rank 1 is row 7.
    #[inline]
    pub const fn row(self) -> u8 {
        7 - self as u8
    }


    /// Parse a rank digit `1`–`8`.
    pub fn from_char(c: char) -> Option<Rank> {
        match c.to_digit(10) {
            Some(n @ 1..=8) => Some(Rank::ALL[n as usize - 1]),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
