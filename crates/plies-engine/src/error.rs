//! Error types for search configuration.

/// Errors from configuring a search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Minimax needs at least one ply to pick a move, and at most `max`.
    #[error("search depth must be between 1 and {max}, got {depth}")]
    InvalidDepth {
        /// The rejected depth.
        depth: u32,
        /// The deepest accepted search.
        max: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::SearchError;

    #[test]
    fn search_error_display() {
        let err = SearchError::InvalidDepth { depth: 0, max: 20 };
        assert_eq!(format!("{err}"), "search depth must be between 1 and 20, got 0");
    }
}
