//! Board files (columns A–H).

use std::fmt;

/// A file (column) on the board. FileA is column 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    FileA = 0,
    FileB = 1,
    FileC = 2,
    FileD = 3,
    FileE = 4,
    FileF = 5,
    FileG = 6,
    FileH = 7,
}

impl File {
    /// All files from A to H.
    pub const ALL: [File; 8] = [
        File::FileA,
        File::FileB,
        File::FileC,
        File::FileD,
        File::FileE,
        File::FileF,
        File::FileG,
        File::FileH,
    ];

    /// Return the grid column (0..7).
    #[inline]
    pub const fn col(self) -> u8 {
        self as u8
    }

    /// Create a file from a grid column.
    #[inline]
    pub const fn from_col(col: u8) -> Option<File> {
        if col < 8 {
            Some(File::ALL[col as usize])
        } else {
            None
        }
    }

    /// Parse a file letter, accepting `A`–`H` in either case.
    pub fn from_char(c: char) -> Option<File> {
        let upper = c.to_ascii_uppercase();
        if ('A'..='H').contains(&upper) {
            File::from_col(upper as u8 - b'A')
        } else {
            None
        }
    }

    /// Uppercase letter for this file.
    #[inline]
    pub const fn letter(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::File;

    #[test]
    fn col_roundtrip() {
        for file in File::ALL {
            assert_eq!(File::from_col(file.col()), Some(file));
        }
        assert_eq!(File::from_col(8), None);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(File::from_char('a'), Some(File::FileA));
        assert_eq!(File::from_char('H'), Some(File::FileH));
        assert_eq!(File::from_char('e'), Some(File::FileE));
        assert_eq!(File::from_char('i'), None);
        assert_eq!(File::from_char('1'), None);
    }

    #[test]
    fn display_uppercase() {
        assert_eq!(format!("{}", File::FileA), "A");
        assert_eq!(format!("{}", File::FileH), "H");
    }
}
