//! Player input parsing.

use gambit_core::{Move, Square};

use crate::error::CliError;

/// Delimiters accepted between the two squares of a move, tried in order.
const DELIMITERS: [&str; 3] = [", ", ",", "-"];

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the session (`quit` or `exit`).
    Quit,
    /// Draw the board again (`board`).
    Board,
    /// List the legal moves for the side to move (`moves`).
    Moves,
    /// Show the input format (`help`).
    Help,
    /// Anything else is read as a move.
    Play(Move),
}

/// Parse one line of player input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    match line.trim().to_ascii_lowercase().as_str() {
        "quit" | "exit" => Ok(Command::Quit),
        "board" => Ok(Command::Board),
        "moves" => Ok(Command::Moves),
        "help" => Ok(Command::Help),
        _ => parse_move(line).map(Command::Play),
    }
}

/// Parse a move written as two squares, e.g. `E2 E4`, `e2-e4`, `E2,E4` or
/// `e2, e4`.
///
/// The first delimiter present in the input decides how it is split;
/// whitespace is the fallback. Exactly two non-empty parts are required.
pub fn parse_move(input: &str) -> Result<Move, CliError> {
    let input = input.trim();
    let invalid = || CliError::InvalidFormat {
        input: input.to_string(),
    };

    let parts: Vec<&str> = match DELIMITERS.iter().find(|d| input.contains(**d)) {
        Some(delimiter) => input.split(*delimiter).collect(),
        None if input.contains(char::is_whitespace) => input.split_whitespace().collect(),
        None => return Err(invalid()),
    };
    let &[from, to] = parts.as_slice() else {
        return Err(invalid());
    };
    if from.trim().is_empty() || to.trim().is_empty() {
        return Err(invalid());
    }

    Ok(Move::new(
        Square::from_notation(from)?,
        Square::from_notation(to)?,
    ))
}
