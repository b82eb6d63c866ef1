//! Text front end for gambit: move parsing and the interactive session.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, parse_command, parse_move};
pub use error::CliError;
pub use session::{Session, SessionConfig};
