//! Text-command driver for playing plies against the minimax engine.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, MAX_DEPTH, PlayerType, parse_command};
pub use error::CliError;
pub use session::{GameConfig, GameSession};
