//! Reading and writing automata files
//!
//! `.json` files use the serde representation, everything else the
//! delimited table layout.

pub mod json;
pub mod table;

use crate::automaton::{AutomatonError, MealyAutomaton, MooreAutomaton};
use crate::config::ConvertConfig;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("Cannot write {value:?} as a table cell: {reason}")]
    Unrepresentable { value: String, reason: &'static str },
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Malformed automaton: {0}")]
    Automaton(#[from] AutomatonError),
}

impl FormatError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn unrepresentable(value: &str, reason: &'static str) -> Self {
        Self::Unrepresentable {
            value: value.to_string(),
            reason,
        }
    }

    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type FormatResult<T> = Result<T, FormatError>;

/// On-disk representation, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Table,
    Json,
}

impl FileFormat {
    pub fn for_path(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Table,
        }
    }
}

fn read_text(path: &Path) -> FormatResult<String> {
    fs::read_to_string(path).map_err(|e| FormatError::io(path, e))
}

fn write_text(path: &Path, text: &str) -> FormatResult<()> {
    fs::write(path, text).map_err(|e| FormatError::io(path, e))
}

/// Load a Mealy automaton from `path`.
///
/// # Errors
///
/// Fails if the file cannot be read, does not parse, or describes a
/// malformed automaton.
pub fn read_mealy(path: &Path, config: &ConvertConfig) -> FormatResult<MealyAutomaton> {
    let text = read_text(path)?;
    match FileFormat::for_path(path) {
        FileFormat::Table => table::parse_mealy(&text, config.delimiter),
        FileFormat::Json => json::parse_mealy(&text),
    }
}

/// Load a Moore automaton from `path`.
///
/// # Errors
///
/// Fails if the file cannot be read, does not parse, or describes a
/// malformed automaton.
pub fn read_moore(path: &Path, config: &ConvertConfig) -> FormatResult<MooreAutomaton> {
    let text = read_text(path)?;
    match FileFormat::for_path(path) {
        FileFormat::Table => table::parse_moore(&text, config.delimiter),
        FileFormat::Json => json::parse_moore(&text),
    }
}

/// Write a Mealy automaton to `path`, replacing any existing file.
///
/// # Errors
///
/// Fails if the automaton cannot be represented in the target format or the
/// file cannot be written.
pub fn write_mealy(mealy: &MealyAutomaton, path: &Path, config: &ConvertConfig) -> FormatResult<()> {
    let text = match FileFormat::for_path(path) {
        FileFormat::Table => table::render_mealy(mealy, config.delimiter)?,
        FileFormat::Json => json::render_mealy(mealy)?,
    };
    write_text(path, &text)
}

/// Write a Moore automaton to `path`, replacing any existing file.
///
/// # Errors
///
/// Fails if the automaton cannot be represented in the target format or the
/// file cannot be written.
pub fn write_moore(moore: &MooreAutomaton, path: &Path, config: &ConvertConfig) -> FormatResult<()> {
    let text = match FileFormat::for_path(path) {
        FileFormat::Table => table::render_moore(moore, config.delimiter)?,
        FileFormat::Json => json::render_moore(moore)?,
    };
    write_text(path, &text)
}
