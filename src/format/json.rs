//! JSON representation of automata
//!
//! ```json
//! {"states": ["A"], "table": [{"input": "x", "transitions": [{"next_state": "A", "output": "0"}]}]}
//! {"states": [{"name": "q0", "output": "0"}], "table": [{"input": "x", "next_states": ["q0"]}]}
//! ```
//!
//! Documents are validated by the automaton constructors after decoding.

use super::FormatResult;
use crate::automaton::{MealyAutomaton, MealyRow, MooreAutomaton, MooreRow, MooreState};
use serde::{Deserialize, Serialize};

/// Top-level object; owned when decoding, borrowed when encoding
#[derive(Debug, Serialize, Deserialize)]
struct Document<S, R> {
    states: S,
    table: R,
}

/// Decode a Mealy automaton.
///
/// # Errors
///
/// Fails on invalid JSON or a malformed automaton.
pub fn parse_mealy(text: &str) -> FormatResult<MealyAutomaton> {
    let doc: Document<Vec<String>, Vec<MealyRow>> = serde_json::from_str(text)?;
    Ok(MealyAutomaton::new(doc.states, doc.table)?)
}

/// Decode a Moore automaton.
///
/// # Errors
///
/// Fails on invalid JSON or a malformed automaton.
pub fn parse_moore(text: &str) -> FormatResult<MooreAutomaton> {
    let doc: Document<Vec<MooreState>, Vec<MooreRow>> = serde_json::from_str(text)?;
    Ok(MooreAutomaton::new(doc.states, doc.table)?)
}

/// Encode a Mealy automaton as pretty-printed JSON.
///
/// # Errors
///
/// Fails only if serialization itself fails.
pub fn render_mealy(mealy: &MealyAutomaton) -> FormatResult<String> {
    let doc = Document {
        states: mealy.states(),
        table: mealy.transition_table(),
    };
    Ok(serde_json::to_string_pretty(&doc)? + "\n")
}

/// Encode a Moore automaton as pretty-printed JSON.
///
/// # Errors
///
/// Fails only if serialization itself fails.
pub fn render_moore(moore: &MooreAutomaton) -> FormatResult<String> {
    let doc = Document {
        states: moore.states_info(),
        table: moore.transition_table(),
    };
    Ok(serde_json::to_string_pretty(&doc)? + "\n")
}
