//! Moore automaton: output on states

use super::{check_state_names, AutomatonError};
use serde::{Deserialize, Serialize};

/// A Moore state and the output it emits on entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MooreState {
    pub name: String,
    pub output: String,
}

impl MooreState {
    pub fn new(name: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            output: output.into(),
        }
    }
}

/// One row of a Moore table: the input symbol and one next state per state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MooreRow {
    pub input: String,
    pub next_states: Vec<String>,
}

impl MooreRow {
    pub fn new(input: impl Into<String>, next_states: Vec<String>) -> Self {
        Self {
            input: input.into(),
            next_states,
        }
    }
}

/// A deterministic Moore machine
///
/// Column `i` of every row belongs to `states_info[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MooreAutomaton {
    states_info: Vec<MooreState>,
    transition_table: Vec<MooreRow>,
}

impl MooreAutomaton {
    /// Build an automaton, checking that every row has one entry per state.
    ///
    /// # Errors
    ///
    /// Returns [`AutomatonError`] for empty or duplicate state names and for
    /// rows whose length differs from the number of states.
    pub fn new(
        states_info: Vec<MooreState>,
        transition_table: Vec<MooreRow>,
    ) -> Result<Self, AutomatonError> {
        check_state_names(states_info.iter().map(|state| state.name.as_str()))?;
        for row in &transition_table {
            if row.next_states.len() != states_info.len() {
                return Err(AutomatonError::row_length(
                    &row.input,
                    states_info.len(),
                    row.next_states.len(),
                ));
            }
        }
        Ok(Self {
            states_info,
            transition_table,
        })
    }

    pub fn states_info(&self) -> &[MooreState] {
        &self.states_info
    }

    pub fn input_symbols(&self) -> impl Iterator<Item = &str> {
        self.transition_table.iter().map(|row| row.input.as_str())
    }

    pub fn transition_table(&self) -> &[MooreRow] {
        &self.transition_table
    }

    /// Hand the tables over to a converter.
    pub fn into_parts(self) -> (Vec<MooreState>, Vec<MooreRow>) {
        (self.states_info, self.transition_table)
    }
}
