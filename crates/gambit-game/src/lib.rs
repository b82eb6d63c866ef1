//! Turn-by-turn game control on top of the gambit rules engine.

pub mod error;
pub mod game;

pub use error::GameError;
pub use game::{Game, GameStatus, Turn};
