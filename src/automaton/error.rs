//! Malformed automaton errors

use thiserror::Error;

/// An automaton whose tables cannot be converted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    #[error("Row '{input}' has {actual} entries, expected {expected}")]
    RowLength {
        input: String,
        expected: usize,
        actual: usize,
    },
    #[error("Duplicate state: {0}")]
    DuplicateState(String),
    #[error("Unknown state referenced in transition table: {0}")]
    UnknownState(String),
    #[error("State name must not be empty")]
    EmptyStateName,
}

impl AutomatonError {
    pub(crate) fn row_length(input: &str, expected: usize, actual: usize) -> Self {
        Self::RowLength {
            input: input.to_string(),
            expected,
            actual,
        }
    }
}
