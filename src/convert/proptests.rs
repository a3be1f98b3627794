//! Property-based tests for the converters
//!
//! These tests verify that conversion preserves behavior and table shape
//! across randomly generated automata.

use super::*;
use crate::automaton::{MealyAutomaton, MealyRow, MooreAutomaton, MooreRow, MooreState, Transition};
use proptest::prelude::*;
use std::collections::HashSet;

// ============================================================================
// Test Helpers
// ============================================================================

/// Run a Mealy machine from `start`, collecting the output of every step.
fn run_mealy(mealy: &MealyAutomaton, start: usize, word: &[usize]) -> Vec<String> {
    let mut state = start;
    let mut outputs = Vec::new();
    for &symbol in word {
        let transition = &mealy.transition_table()[symbol].transitions[state];
        outputs.push(transition.output().to_string());
        state = mealy
            .states()
            .iter()
            .position(|s| s == transition.next_state())
            .unwrap();
    }
    outputs
}

/// Run a Moore machine from `start`, collecting the output of every state entered.
fn run_moore(moore: &MooreAutomaton, start: usize, word: &[usize]) -> Vec<String> {
    let mut state = start;
    let mut outputs = Vec::new();
    for &symbol in word {
        let next = &moore.transition_table()[symbol].next_states[state];
        state = moore
            .states_info()
            .iter()
            .position(|s| &s.name == next)
            .unwrap();
        outputs.push(moore.states_info()[state].output.clone());
    }
    outputs
}

fn build_mealy(states: usize, rows: &[Vec<(usize, &str)>]) -> MealyAutomaton {
    MealyAutomaton::new(
        (0..states).map(|i| format!("s{i}")).collect(),
        rows.iter()
            .enumerate()
            .map(|(i, cells)| {
                MealyRow::new(
                    format!("x{i}"),
                    cells
                        .iter()
                        .map(|(next, out)| Transition::new(format!("s{next}"), *out))
                        .collect(),
                )
            })
            .collect(),
    )
    .unwrap()
}

fn build_moore(outputs: &[&str], rows: &[Vec<usize>]) -> MooreAutomaton {
    MooreAutomaton::new(
        outputs
            .iter()
            .enumerate()
            .map(|(i, out)| MooreState::new(format!("q{i}"), *out))
            .collect(),
        rows.iter()
            .enumerate()
            .map(|(i, next)| {
                MooreRow::new(format!("x{i}"), next.iter().map(|n| format!("q{n}")).collect())
            })
            .collect(),
    )
    .unwrap()
}

/// Distinct `(next_state, output)` pairs plus one per state never reached
fn expected_moore_state_count(mealy: &MealyAutomaton) -> usize {
    let pairs: HashSet<&Transition> = mealy
        .transition_table()
        .iter()
        .flat_map(|row| &row.transitions)
        .collect();
    let reached: HashSet<&str> = pairs.iter().map(|t| t.next_state()).collect();
    let unreached = mealy
        .states()
        .iter()
        .filter(|s| !reached.contains(s.as_str()))
        .count();
    pairs.len() + unreached
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_output() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(""), Just("0"), Just("1"), Just("y")]
}

fn arb_mealy() -> impl Strategy<Value = MealyAutomaton> {
    (1usize..=4, 1usize..=3).prop_flat_map(|(states, inputs)| {
        proptest::collection::vec(
            proptest::collection::vec((0..states, arb_output()), states),
            inputs,
        )
        .prop_map(move |rows| build_mealy(states, &rows))
    })
}

fn arb_mealy_with_word() -> impl Strategy<Value = (MealyAutomaton, Vec<usize>)> {
    arb_mealy().prop_flat_map(|mealy| {
        let inputs = mealy.transition_table().len();
        (Just(mealy), proptest::collection::vec(0..inputs, 0..16))
    })
}

fn arb_moore() -> impl Strategy<Value = MooreAutomaton> {
    (1usize..=5, 1usize..=3).prop_flat_map(|(states, inputs)| {
        (
            proptest::collection::vec(arb_output(), states),
            proptest::collection::vec(proptest::collection::vec(0..states, states), inputs),
        )
            .prop_map(|(outputs, rows)| build_moore(&outputs, &rows))
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_mealy_to_moore_preserves_behavior((mealy, word) in arb_mealy_with_word()) {
        let moore = mealy_to_moore(mealy.clone()).unwrap();

        // s0 is named first, so q0 is one of its copies
        prop_assert_eq!(run_mealy(&mealy, 0, &word), run_moore(&moore, 0, &word));
    }

    #[test]
    fn prop_round_trip_preserves_behavior((mealy, word) in arb_mealy_with_word()) {
        let back = moore_to_mealy(mealy_to_moore(mealy.clone()).unwrap()).unwrap();

        prop_assert_eq!(run_mealy(&mealy, 0, &word), run_mealy(&back, 0, &word));
    }

    #[test]
    fn prop_moore_state_count(mealy in arb_mealy()) {
        let expected = expected_moore_state_count(&mealy);

        let moore = mealy_to_moore(mealy).unwrap();

        prop_assert_eq!(moore.states_info().len(), expected);
    }

    #[test]
    fn prop_moore_rows_cover_every_split_state(mealy in arb_mealy()) {
        let expected = expected_moore_state_count(&mealy);

        let moore = mealy_to_moore(mealy).unwrap();

        for row in moore.transition_table() {
            prop_assert_eq!(row.next_states.len(), expected);
        }
    }

    #[test]
    fn prop_mealy_to_moore_is_deterministic(mealy in arb_mealy()) {
        let first = mealy_to_moore(mealy.clone()).unwrap();
        let second = mealy_to_moore(mealy).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_moore_states_named_in_sequence(mealy in arb_mealy()) {
        let moore = mealy_to_moore(mealy).unwrap();

        for (i, state) in moore.states_info().iter().enumerate() {
            prop_assert_eq!(&state.name, &format!("{MOORE_STATE_PREFIX}{i}"));
        }
    }

    #[test]
    fn prop_moore_to_mealy_keeps_row_length(moore in arb_moore()) {
        let width = moore.states_info().len();
        let rows = moore.transition_table().len();

        let mealy = moore_to_mealy(moore).unwrap();

        prop_assert_eq!(mealy.states().len(), width);
        prop_assert_eq!(mealy.transition_table().len(), rows);
        for row in mealy.transition_table() {
            prop_assert_eq!(row.transitions.len(), width);
        }
    }

    #[test]
    fn prop_moore_to_mealy_preserves_behavior(
        (moore, start, word) in arb_moore().prop_flat_map(|moore| {
            let states = moore.states_info().len();
            let inputs = moore.transition_table().len();
            (Just(moore), 0..states, proptest::collection::vec(0..inputs, 0..16))
        })
    ) {
        let mealy = moore_to_mealy(moore.clone()).unwrap();

        prop_assert_eq!(run_moore(&moore, start, &word), run_mealy(&mealy, start, &word));
    }

    #[test]
    fn prop_moore_to_mealy_cells_carry_target_output(moore in arb_moore()) {
        let mealy = moore_to_mealy(moore.clone()).unwrap();

        for (moore_row, mealy_row) in moore.transition_table().iter().zip(mealy.transition_table()) {
            for (next, transition) in moore_row.next_states.iter().zip(&mealy_row.transitions) {
                let target = moore.states_info().iter().find(|s| &s.name == next).unwrap();
                prop_assert_eq!(transition.output(), target.output.as_str());
                let suffix: String = next.chars().skip(1).collect();
                prop_assert_eq!(transition.next_state(), format!("{MEALY_STATE_MARKER}{suffix}"));
            }
        }
    }
}
