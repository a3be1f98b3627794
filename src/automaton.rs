//! Mealy and Moore automaton models
//!
//! Both models are passive holders of their transition tables. Constructors
//! check the table shape so converters can rely on positional alignment.

mod error;
mod mealy;
mod moore;
mod transition;

pub use error::AutomatonError;
pub use mealy::{MealyAutomaton, MealyRow};
pub use moore::{MooreAutomaton, MooreRow, MooreState};
pub use transition::Transition;

use std::collections::HashSet;

/// Reject empty and repeated state names.
fn check_state_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<(), AutomatonError> {
    let mut seen = HashSet::new();
    for name in names {
        if name.is_empty() {
            return Err(AutomatonError::EmptyStateName);
        }
        if !seen.insert(name) {
            return Err(AutomatonError::DuplicateState(name.to_string()));
        }
    }
    Ok(())
}
