//! Mealy automaton: output on transitions

use super::{check_state_names, AutomatonError, Transition};
use serde::{Deserialize, Serialize};

/// One row of a Mealy table: the input symbol and one transition per state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealyRow {
    pub input: String,
    pub transitions: Vec<Transition>,
}

impl MealyRow {
    pub fn new(input: impl Into<String>, transitions: Vec<Transition>) -> Self {
        Self {
            input: input.into(),
            transitions,
        }
    }
}

/// A deterministic Mealy machine
///
/// Column `i` of every row belongs to `states[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealyAutomaton {
    states: Vec<String>,
    transition_table: Vec<MealyRow>,
}

impl MealyAutomaton {
    /// Build an automaton, checking that every row has one transition per state.
    ///
    /// # Errors
    ///
    /// Returns [`AutomatonError`] for empty or duplicate state names and for
    /// rows whose length differs from the number of states.
    pub fn new(states: Vec<String>, transition_table: Vec<MealyRow>) -> Result<Self, AutomatonError> {
        check_state_names(states.iter().map(String::as_str))?;
        for row in &transition_table {
            if row.transitions.len() != states.len() {
                return Err(AutomatonError::row_length(
                    &row.input,
                    states.len(),
                    row.transitions.len(),
                ));
            }
        }
        Ok(Self {
            states,
            transition_table,
        })
    }

    pub fn states(&self) -> &[String] {
        &self.states
    }

    pub fn input_symbols(&self) -> impl Iterator<Item = &str> {
        self.transition_table.iter().map(|row| row.input.as_str())
    }

    pub fn transition_table(&self) -> &[MealyRow] {
        &self.transition_table
    }

    /// Hand the tables over to a converter.
    pub fn into_parts(self) -> (Vec<String>, Vec<MealyRow>) {
        (self.states, self.transition_table)
    }
}
