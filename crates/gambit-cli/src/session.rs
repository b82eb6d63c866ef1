//! Interactive two-player session over any line reader and writer.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use gambit_core::{Color, Move, PieceKind};
use gambit_game::{Game, GameError, GameStatus, Turn};

use crate::command::{Command, parse_command};
use crate::error::CliError;

const FORMAT_HINT: &str = "Invalid move format. Use format like: E2 E4";

/// Presentation switches for a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Draw the board at the start and after every accepted move.
    pub render_board: bool,
    /// Print the number of moves played after every accepted move.
    pub show_move_count: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            render_board: true,
            show_move_count: false,
        }
    }
}

/// A game played by two people sharing one input stream.
///
/// Prompts the side to move, reads one line per attempt, and reports check,
/// captures, promotion and the final result. Rejected input never changes
/// the game.
pub struct Session<R, W> {
    game: Game,
    input: R,
    output: W,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, input: R, output: W, config: SessionConfig) -> Self {
        Self {
            game,
            input,
            output,
            config,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consume the session and return its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the game ends, the player quits, or input closes.
    ///
    /// Returns the game status at that point.
    pub fn run(&mut self) -> Result<GameStatus, CliError> {
        info!(side = %self.game.side_to_move(), "session started");
        self.banner()?;
        if self.config.render_board {
            self.draw_board()?;
        }

        loop {
            let status = self.game.status();
            if status.is_over() {
                self.announce_result(status)?;
                break;
            }

            let side = self.game.side_to_move();
            if self.game.in_check() {
                writeln!(self.output, "\n{side} is in check!")?;
            }
            write!(self.output, "\n{side}'s move: ")?;
            self.output.flush()?;

            // Non-UTF-8 bytes are decoded lossily and rejected as bad input.
            let mut raw = Vec::new();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                info!("input closed");
                break;
            }
            let line = String::from_utf8_lossy(&raw);

            match parse_command(&line) {
                Ok(Command::Quit) => {
                    info!("player quit");
                    break;
                }
                Ok(Command::Board) => self.draw_board()?,
                Ok(Command::Moves) => self.list_moves()?,
                Ok(Command::Help) => self.help()?,
                Ok(Command::Play(mv)) => self.play(mv)?,
                Err(CliError::InvalidFormat { input }) => {
                    warn!(%input, "unparsable move");
                    writeln!(self.output, "{FORMAT_HINT}")?;
                }
                Err(CliError::Notation(err)) => {
                    warn!(%err, "bad square in move");
                    writeln!(self.output, "Illegal move: {err}")?;
                }
                Err(err) => return Err(err),
            }
        }

        let status = self.game.status();
        info!(%status, moves = self.game.history().len(), "session finished");
        Ok(status)
    }

    fn play(&mut self, mv: Move) -> Result<(), CliError> {
        let turn = match self.game.play(mv) {
            Ok(turn) => turn,
            Err(GameError::Illegal(reason)) => {
                writeln!(self.output, "Illegal move: {reason}")?;
                return Ok(());
            }
            Err(err) => {
                writeln!(self.output, "Move not played: {err}")?;
                return Ok(());
            }
        };

        if self.config.render_board {
            writeln!(self.output)?;
            self.draw_board()?;
        }
        self.report(&turn)?;
        if self.config.show_move_count {
            writeln!(self.output, "Moves played: {}", self.game.history().len())?;
        }
        Ok(())
    }

    fn report(&mut self, turn: &Turn) -> Result<(), CliError> {
        let mover = turn.mover;
        // A captured king is announced with the result instead.
        if let Some(captured) = turn.result.captured.filter(|p| p.kind() != PieceKind::King) {
            writeln!(
                self.output,
                "\n{mover} captured {}'s {}!",
                captured.color().name(),
                captured.kind()
            )?;
        }
        if turn.result.is_promotion() {
            writeln!(self.output, "{mover}'s pawn was promoted to a queen!")?;
        }
        Ok(())
    }

    fn announce_result(&mut self, status: GameStatus) -> Result<(), CliError> {
        match status {
            GameStatus::InProgress => Ok(()),
            GameStatus::Checkmate { winner } => {
                writeln!(self.output, "\n{winner} won with check mate!")?;
                Ok(())
            }
            GameStatus::Stalemate => {
                let side = self.game.side_to_move();
                writeln!(self.output, "\n{side} has no legal moves, game ends in a draw!")?;
                Ok(())
            }
            GameStatus::KingCaptured { winner } => {
                let loser: Color = !winner;
                writeln!(self.output, "\n{winner} wins! {loser} king has been captured!")?;
                Ok(())
            }
        }
    }

    fn banner(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "Welcome to Chess!")?;
        writeln!(self.output, "Enter moves like: E2 (initial position) E4 (source destination)")?;
        writeln!(self.output, "The game ends by checkmate, stalemate, or king capture.")?;
        writeln!(self.output, "White = Uppercase letters, Black = Lowercase letters.")?;
        writeln!(self.output, "{} plays first.", self.game.side_to_move())?;
        writeln!(self.output)?;
        Ok(())
    }

    fn draw_board(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "{}", self.game.board().pretty())?;
        Ok(())
    }

    fn list_moves(&mut self) -> Result<(), CliError> {
        let mut moves: Vec<Move> = self.game.legal_moves().into_iter().collect();
        moves.sort();
        let listed: Vec<String> = moves.iter().map(Move::to_string).collect();
        writeln!(self.output, "{} legal moves: {}", moves.len(), listed.join(" "))?;
        Ok(())
    }

    fn help(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "Enter a move as two squares: E2 E4, e2-e4, E2,E4 or e2, e4.")?;
        writeln!(self.output, "Other commands: board, moves, help, quit.")?;
        Ok(())
    }
}
