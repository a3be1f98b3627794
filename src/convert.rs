//! Mealy/Moore conversion
//!
//! Both directions are pure functions: they take ownership of the source
//! automaton and build a new one, failing before any output is produced when
//! the source references states it does not declare.

mod mealy_to_moore;
mod moore_to_mealy;

#[cfg(test)]
mod proptests;

pub use mealy_to_moore::{mealy_to_moore, MOORE_STATE_PREFIX};
pub use moore_to_mealy::{moore_to_mealy, MEALY_STATE_MARKER};
