//! Mealy ↔ Moore automaton conversion
//!
//! [`convert`] holds the two pure converters; [`automaton`] the models they
//! work on; [`format`] and [`command`] move automata between files and the
//! converters.

pub mod automaton;
pub mod command;
pub mod config;
pub mod convert;
pub mod format;

pub use automaton::{AutomatonError, MealyAutomaton, MooreAutomaton, Transition};
pub use convert::{mealy_to_moore, moore_to_mealy};
