//! Evaluation and minimax search for plies.

pub mod error;
pub mod eval;
pub mod search;

pub use error::SearchError;
pub use eval::{BoardEvaluator, StandardEvaluator, evaluate};
pub use search::minimax::{MAX_DEPTH, MiniMax};
pub use search::{MoveStrategy, SearchResult};
