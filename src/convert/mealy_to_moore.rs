//! Mealy → Moore conversion by state splitting
//!
//! Every distinct `(next_state, output)` pair in the Mealy table becomes its
//! own Moore state carrying that output. The conversion runs as a pipeline:
//!
//! unique transitions → grouping by next state → naming → states info → table

use crate::automaton::{
    AutomatonError, MealyAutomaton, MealyRow, MooreAutomaton, MooreRow, MooreState, Transition,
};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Prefix of generated Moore state names (`q0`, `q1`, ...)
pub const MOORE_STATE_PREFIX: char = 'q';

/// Distinct transitions sharing a next state, in `Transition` order
type Grouping = BTreeMap<String, BTreeSet<Transition>>;

/// A Moore state created for one unique transition
#[derive(Debug, Clone, PartialEq, Eq)]
struct NamedState {
    index: usize,
    name: String,
    transition: Transition,
}

/// Convert a Mealy automaton into an equivalent Moore automaton.
///
/// # Errors
///
/// Returns [`AutomatonError::UnknownState`] if a transition targets a state
/// the automaton does not declare.
pub fn mealy_to_moore(mealy: MealyAutomaton) -> Result<MooreAutomaton, AutomatonError> {
    let (states, table) = mealy.into_parts();
    check_targets(&states, &table)?;

    let unique = unique_transitions(&table, &states);
    let grouping = group_by_next_state(&unique);
    let named = assign_state_names(&states, &grouping);
    let states_info = moore_states_info(&named);
    let transition_table = moore_transition_table(&table, &states, &grouping, &named)?;

    tracing::debug!(
        mealy_states = states.len(),
        unique_transitions = unique.len(),
        moore_states = states_info.len(),
        "Converted Mealy automaton to Moore"
    );

    MooreAutomaton::new(states_info, transition_table)
}

fn check_targets(states: &[String], table: &[MealyRow]) -> Result<(), AutomatonError> {
    let declared: HashSet<&str> = states.iter().map(String::as_str).collect();
    table
        .iter()
        .flat_map(|row| &row.transitions)
        .find(|t| !declared.contains(t.next_state()))
        .map_or(Ok(()), |t| {
            Err(AutomatonError::UnknownState(t.next_state().to_string()))
        })
}

/// Distinct transitions in row-major first-seen order, followed by a
/// `(state, "")` placeholder for every state no transition reaches.
fn unique_transitions(table: &[MealyRow], states: &[String]) -> Vec<Transition> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for transition in table.iter().flat_map(|row| &row.transitions) {
        if seen.insert(transition) {
            unique.push(transition.clone());
        }
    }

    let reached: HashSet<&str> = unique.iter().map(Transition::next_state).collect();
    let placeholders: Vec<Transition> = states
        .iter()
        .filter(|state| !reached.contains(state.as_str()))
        .map(|state| Transition::new(state.as_str(), ""))
        .collect();

    unique.extend(placeholders);
    unique
}

fn group_by_next_state(transitions: &[Transition]) -> Grouping {
    let mut grouping = Grouping::new();
    for transition in transitions {
        grouping
            .entry(transition.next_state().to_string())
            .or_default()
            .insert(transition.clone());
    }
    grouping
}

/// Number the grouped transitions state by state with one shared counter.
fn assign_state_names(states: &[String], grouping: &Grouping) -> Vec<NamedState> {
    states
        .iter()
        .filter_map(|state| grouping.get(state))
        .flatten()
        .enumerate()
        .map(|(index, transition)| NamedState {
            index,
            name: format!("{MOORE_STATE_PREFIX}{index}"),
            transition: transition.clone(),
        })
        .collect()
}

fn moore_states_info(named: &[NamedState]) -> Vec<MooreState> {
    let mut ordered: Vec<&NamedState> = named.iter().collect();
    ordered.sort_by_key(|state| state.index);
    ordered
        .into_iter()
        .map(|state| MooreState::new(state.name.as_str(), state.transition.output()))
        .collect()
}

/// Each Mealy column expands into as many Moore columns as its source state
/// was split into, all sharing the same next state.
fn moore_transition_table(
    table: &[MealyRow],
    states: &[String],
    grouping: &Grouping,
    named: &[NamedState],
) -> Result<Vec<MooreRow>, AutomatonError> {
    let names: HashMap<&Transition, &str> = named
        .iter()
        .map(|state| (&state.transition, state.name.as_str()))
        .collect();

    table
        .iter()
        .map(|row| -> Result<MooreRow, AutomatonError> {
            let mut next_states = Vec::new();
            for (state, transition) in states.iter().zip(&row.transitions) {
                let name = names.get(transition).ok_or_else(|| {
                    AutomatonError::UnknownState(transition.next_state().to_string())
                })?;
                let repeat = grouping.get(state).map_or(0, BTreeSet::len);
                next_states.extend(std::iter::repeat_n((*name).to_string(), repeat));
            }
            Ok(MooreRow::new(row.input.as_str(), next_states))
        })
        .collect()
}
