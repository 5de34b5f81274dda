//! Driver errors.

use plies_engine::SearchError;

/// Errors that can occur while reading and handling driver commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A known command is missing arguments or has too many.
    #[error("malformed command: {line}")]
    MalformedCommand {
        /// The offending input line.
        line: String,
    },

    /// A square name is not in algebraic notation.
    #[error("unknown square: {square}")]
    UnknownSquare {
        /// The square string that failed to parse.
        square: String,
    },

    /// A color is neither `white` nor `black`.
    #[error("unknown color: {value}")]
    UnknownColor {
        /// The color string that failed to parse.
        value: String,
    },

    /// A player type is neither `human` nor `computer`.
    #[error("unknown player type: {value}")]
    UnknownPlayerType {
        /// The player type string that failed to parse.
        value: String,
    },

    /// The depth in `depth <n>` is not a number in the accepted range.
    #[error("invalid depth: {value}")]
    InvalidDepth {
        /// The depth string that failed to parse.
        value: String,
    },

    /// The search could not be configured.
    #[error("search error: {source}")]
    Search {
        /// The underlying search error.
        #[from]
        source: SearchError,
    },

    /// An I/O error occurred while reading from stdin.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
