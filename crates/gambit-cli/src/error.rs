//! Front-end errors.

use gambit_core::BoardError;

/// Errors that can occur while reading and interpreting player input.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The input is not two squares joined by a recognised delimiter.
    #[error("invalid move format: \"{input}\"")]
    InvalidFormat {
        /// The rejected input, trimmed.
        input: String,
    },

    /// One side of the move is not a square.
    #[error(transparent)]
    Notation(#[from] BoardError),

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
