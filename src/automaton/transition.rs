//! Transition value type

use serde::{Deserialize, Serialize};
use std::fmt;

/// One outgoing edge of a Mealy state: where it goes and what it emits
///
/// Ordering is by `(next_state, output)`, which is the tie-break used when
/// naming Moore states.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Transition {
    next_state: String,
    output: String,
}

impl Transition {
    pub fn new(next_state: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            next_state: next_state.into(),
            output: output.into(),
        }
    }

    pub fn next_state(&self) -> &str {
        &self.next_state
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.next_state, self.output)
    }
}
