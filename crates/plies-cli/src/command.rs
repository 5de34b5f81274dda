//! Driver command parsing.

use std::fmt;

use plies_core::{Color, Coordinate};

use crate::error::CliError;

/// Deepest search the driver accepts.
pub use plies_engine::MAX_DEPTH;

/// Who chooses the moves for one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerType {
    /// Moves are typed in.
    Human,
    /// Moves come from the minimax search.
    Computer,
}

impl fmt::Display for PlayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerType::Human => write!(f, "human"),
            PlayerType::Computer => write!(f, "computer"),
        }
    }
}

/// A parsed driver command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new` -- reset to the standard layout.
    New,
    /// `show` -- print the board.
    Show,
    /// `moves` -- list the side to move's legal moves.
    Moves,
    /// `move e2 e4` or `move e2e4` -- play a move for the side to move.
    Move {
        /// Origin square.
        from: Coordinate,
        /// Destination square.
        to: Coordinate,
    },
    /// `go` -- search for the side to move and play the result.
    Go,
    /// `stop` -- abandon the running search.
    Stop,
    /// `depth <n>` -- set the search depth.
    Depth(u32),
    /// `player <white|black> <human|computer>` -- assign a side.
    Player {
        /// The side being assigned.
        color: Color,
        /// Who plays it.
        player_type: PlayerType,
    },
    /// `status` -- report check, checkmate or stalemate.
    Status,
    /// `quit` -- exit.
    Quit,
    /// Unrecognized command.
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    let malformed = || CliError::MalformedCommand {
        line: line.trim().to_string(),
    };

    match (tokens[0], &tokens[1..]) {
        ("new", []) => Ok(Command::New),
        ("show", []) => Ok(Command::Show),
        ("moves", []) => Ok(Command::Moves),
        ("go", []) => Ok(Command::Go),
        ("stop", []) => Ok(Command::Stop),
        ("status", []) => Ok(Command::Status),
        ("quit", []) => Ok(Command::Quit),
        ("move", args) => parse_move(args).unwrap_or_else(|| Err(malformed())),
        ("depth", [value]) => parse_depth(value),
        ("player", [color, player_type]) => Ok(Command::Player {
            color: parse_color(color)?,
            player_type: parse_player_type(player_type)?,
        }),
        ("new" | "show" | "moves" | "go" | "stop" | "status" | "quit" | "depth" | "player", _) => {
            Err(malformed())
        }
        (other, _) => Ok(Command::Unknown(other.to_string())),
    }
}

/// Parse `e2 e4` or `e2e4`. Returns `None` when the argument count is wrong.
fn parse_move(args: &[&str]) -> Option<Result<Command, CliError>> {
    let (from, to) = match args {
        [from, to] => (*from, *to),
        [joined] if joined.len() == 4 && joined.is_ascii() => joined.split_at(2),
        _ => return None,
    };
    Some(parse_square(from).and_then(|from| {
        let to = parse_square(to)?;
        Ok(Command::Move { from, to })
    }))
}

fn parse_square(square: &str) -> Result<Coordinate, CliError> {
    Coordinate::from_algebraic(&square.to_ascii_lowercase()).ok_or_else(|| {
        CliError::UnknownSquare {
            square: square.to_string(),
        }
    })
}

fn parse_depth(value: &str) -> Result<Command, CliError> {
    match value.parse::<u32>() {
        Ok(depth) if (1..=MAX_DEPTH).contains(&depth) => Ok(Command::Depth(depth)),
        _ => Err(CliError::InvalidDepth {
            value: value.to_string(),
        }),
    }
}

fn parse_color(value: &str) -> Result<Color, CliError> {
    match value.to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        _ => Err(CliError::UnknownColor {
            value: value.to_string(),
        }),
    }
}

fn parse_player_type(value: &str) -> Result<PlayerType, CliError> {
    match value.to_ascii_lowercase().as_str() {
        "human" => Ok(PlayerType::Human),
        "computer" | "cpu" => Ok(PlayerType::Computer),
        _ => Err(CliError::UnknownPlayerType {
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use plies_core::{Color, Coordinate};

    use super::{Command, PlayerType, parse_command};
    use crate::error::CliError;

    #[test]
    fn parse_bare_commands() {
        assert_eq!(parse_command("new").unwrap(), Command::New);
        assert_eq!(parse_command("show").unwrap(), Command::Show);
        assert_eq!(parse_command("moves").unwrap(), Command::Moves);
        assert_eq!(parse_command("go").unwrap(), Command::Go);
        assert_eq!(parse_command("stop").unwrap(), Command::Stop);
        assert_eq!(parse_command("status").unwrap(), Command::Status);
        assert_eq!(parse_command("  quit  ").unwrap(), Command::Quit);
    }

    #[test]
    fn parse_move_two_squares() {
        assert_eq!(
            parse_command("move e2 e4").unwrap(),
            Command::Move {
                from: Coordinate::E2,
                to: Coordinate::E4
            }
        );
    }

    #[test]
    fn parse_move_joined() {
        assert_eq!(
            parse_command("move G1F3").unwrap(),
            Command::Move {
                from: Coordinate::G1,
                to: Coordinate::F3
            }
        );
    }

    #[test]
    fn parse_move_bad_square() {
        let err = parse_command("move e2 e9").unwrap_err();
        assert!(matches!(err, CliError::UnknownSquare { ref square } if square == "e9"));
    }

    #[test]
    fn parse_move_missing_argument() {
        assert!(matches!(
            parse_command("move e2").unwrap_err(),
            CliError::MalformedCommand { .. }
        ));
    }

    #[test]
    fn parse_depth_range() {
        assert_eq!(parse_command("depth 6").unwrap(), Command::Depth(6));
        assert_eq!(parse_command("depth 20").unwrap(), Command::Depth(20));
        for bad in ["depth 0", "depth 21", "depth deep"] {
            assert!(
                matches!(parse_command(bad).unwrap_err(), CliError::InvalidDepth { .. }),
                "{bad}"
            );
        }
    }

    #[test]
    fn parse_player() {
        assert_eq!(
            parse_command("player black computer").unwrap(),
            Command::Player {
                color: Color::Black,
                player_type: PlayerType::Computer
            }
        );
        assert!(matches!(
            parse_command("player red human").unwrap_err(),
            CliError::UnknownColor { .. }
        ));
        assert!(matches!(
            parse_command("player white robot").unwrap_err(),
            CliError::UnknownPlayerType { .. }
        ));
    }

    #[test]
    fn extra_arguments_are_malformed() {
        assert!(matches!(
            parse_command("go now").unwrap_err(),
            CliError::MalformedCommand { .. }
        ));
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            parse_command("castle").unwrap(),
            Command::Unknown("castle".to_string())
        );
        assert_eq!(parse_command("").unwrap(), Command::Unknown(String::new()));
    }
}
