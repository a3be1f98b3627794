//! Moore → Mealy conversion
//!
//! Each Moore state maps to exactly one Mealy state; the output of the state
//! a transition enters moves onto the transition itself.

use crate::automaton::{
    AutomatonError, MealyAutomaton, MealyRow, MooreAutomaton, MooreRow, MooreState, Transition,
};
use std::collections::HashMap;

/// Replaces the first character of every Moore state name (`q3` → `F3`)
pub const MEALY_STATE_MARKER: char = 'F';

/// Convert a Moore automaton into an equivalent Mealy automaton.
///
/// # Errors
///
/// Returns [`AutomatonError::UnknownState`] if the table references a state
/// missing from the states info, and [`AutomatonError::DuplicateState`] if two
/// Moore names collapse onto the same Mealy name.
pub fn moore_to_mealy(moore: MooreAutomaton) -> Result<MealyAutomaton, AutomatonError> {
    let (states_info, table) = moore.into_parts();

    let states: Vec<String> = states_info.iter().map(|s| rename_state(&s.name)).collect();
    let outputs = output_lookup(&states_info);
    let transition_table = mealy_transition_table(&table, &outputs)?;

    tracing::debug!(
        moore_states = states_info.len(),
        rows = transition_table.len(),
        "Converted Moore automaton to Mealy"
    );

    MealyAutomaton::new(states, transition_table)
}

/// Swap the leading character for [`MEALY_STATE_MARKER`], keeping the suffix.
fn rename_state(name: &str) -> String {
    let mut chars = name.chars();
    chars.next();
    let mut renamed = String::with_capacity(name.len());
    renamed.push(MEALY_STATE_MARKER);
    renamed.push_str(chars.as_str());
    renamed
}

fn output_lookup(states_info: &[MooreState]) -> HashMap<&str, &str> {
    states_info
        .iter()
        .map(|s| (s.name.as_str(), s.output.as_str()))
        .collect()
}

fn mealy_transition_table(
    table: &[MooreRow],
    outputs: &HashMap<&str, &str>,
) -> Result<Vec<MealyRow>, AutomatonError> {
    table
        .iter()
        .map(|row| -> Result<MealyRow, AutomatonError> {
            let transitions = row
                .next_states
                .iter()
                .map(|next| -> Result<Transition, AutomatonError> {
                    let output = outputs
                        .get(next.as_str())
                        .ok_or_else(|| AutomatonError::UnknownState(next.clone()))?;
                    Ok(Transition::new(rename_state(next), *output))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(MealyRow::new(row.input.as_str(), transitions))
        })
        .collect()
}
