//! Conversion commands: read, convert, write

use crate::automaton::AutomatonError;
use crate::config::ConvertConfig;
use crate::convert::{mealy_to_moore, moore_to_mealy};
use crate::format::{self, FormatError};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Direction of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Command {
    MealyToMoore,
    MooreToMealy,
}

impl Command {
    /// Human-readable direction, e.g. "Mealy to Moore"
    pub fn description(self) -> &'static str {
        match self {
            Self::MealyToMoore => "Mealy to Moore",
            Self::MooreToMealy => "Moore to Mealy",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MealyToMoore => "mealy-to-moore",
            Self::MooreToMealy => "moore-to-mealy",
        })
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Failed to read input: {0}")]
    Read(#[source] FormatError),
    #[error("Failed to convert: {0}")]
    Convert(#[from] AutomatonError),
    #[error("Failed to write output: {0}")]
    Write(#[source] FormatError),
}

/// Sizes of both sides of a finished conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub input_states: usize,
    pub output_states: usize,
    pub input_symbols: usize,
}

/// Run one conversion from `input` to `output`.
///
/// # Errors
///
/// Returns the first failure of the read, convert or write step. Nothing is
/// written when reading or converting fails.
pub fn run(
    command: Command,
    input: &Path,
    output: &Path,
    config: &ConvertConfig,
) -> Result<Summary, CommandError> {
    match command {
        Command::MealyToMoore => {
            tracing::info!(path = %input.display(), "Reading Mealy automaton from file");
            let mealy = format::read_mealy(input, config).map_err(CommandError::Read)?;
            let input_states = mealy.states().len();
            let input_symbols = mealy.transition_table().len();

            let moore = mealy_to_moore(mealy)?;

            tracing::info!(path = %output.display(), "Writing Moore automaton to file");
            format::write_moore(&moore, output, config).map_err(CommandError::Write)?;
            Ok(Summary {
                input_states,
                output_states: moore.states_info().len(),
                input_symbols,
            })
        }
        Command::MooreToMealy => {
            tracing::info!(path = %input.display(), "Reading Moore automaton from file");
            let moore = format::read_moore(input, config).map_err(CommandError::Read)?;
            let input_states = moore.states_info().len();
            let input_symbols = moore.transition_table().len();

            let mealy = moore_to_mealy(moore)?;

            tracing::info!(path = %output.display(), "Writing Mealy automaton to file");
            format::write_mealy(&mealy, output, config).map_err(CommandError::Write)?;
            Ok(Summary {
                input_states,
                output_states: mealy.states().len(),
                input_symbols,
            })
        }
    }
}
