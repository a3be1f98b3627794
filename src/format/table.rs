//! Delimited table layout
//!
//! Mealy files have one header line of state names followed by one line per
//! input symbol whose cells are `next/output`:
//!
//! ```text
//! ;A;B
//! x1;A/0;B/1
//! ```
//!
//! Moore files have an output line and a state name line, then one line per
//! input symbol listing next states:
//!
//! ```text
//! ;0;1
//! ;q0;q1
//! x1;q1;q0
//! ```
//!
//! The first cell of each header line is ignored.

use super::{FormatError, FormatResult};
use crate::automaton::{MealyAutomaton, MealyRow, MooreAutomaton, MooreRow, MooreState, Transition};
use std::fmt::Write;

/// Separates next state from output inside a Mealy cell
const CELL_SEPARATOR: char = '/';

/// A non-blank line split into trimmed cells
struct Line<'a> {
    number: usize,
    cells: Vec<&'a str>,
}

impl<'a> Line<'a> {
    /// First cell and the rest.
    fn split_label(&self) -> (&'a str, &[&'a str]) {
        match self.cells.split_first() {
            Some((label, rest)) => (*label, rest),
            None => ("", &[]),
        }
    }
}

fn lines(text: &str, delimiter: char) -> impl Iterator<Item = Line<'_>> {
    text.lines()
        .enumerate()
        // A line of bare delimiters is a row of empty cells, not a blank line
        .filter(move |(_, line)| !(line.trim().is_empty() && !line.contains(delimiter)))
        .map(move |(index, line)| Line {
            number: index + 1,
            cells: line.split(delimiter).map(str::trim).collect(),
        })
}

fn header_cells(line: &Line<'_>) -> Vec<String> {
    line.split_label().1.iter().map(ToString::to_string).collect()
}

fn check_width(line: &Line<'_>, expected: usize) -> FormatResult<()> {
    let actual = line.cells.len().saturating_sub(1);
    if actual == expected {
        Ok(())
    } else {
        Err(FormatError::parse(
            line.number,
            format!("expected {expected} cells after the input symbol, found {actual}"),
        ))
    }
}

fn parse_transition(cell: &str, line: usize) -> FormatResult<Transition> {
    cell.split_once(CELL_SEPARATOR)
        .map(|(next, output)| Transition::new(next.trim(), output.trim()))
        .ok_or_else(|| {
            FormatError::parse(
                line,
                format!("expected next{CELL_SEPARATOR}output, found {cell:?}"),
            )
        })
}

/// Parse a Mealy automaton from table text.
///
/// # Errors
///
/// Fails on a missing header, a row with the wrong number of cells, a cell
/// without `/`, or state names the automaton model rejects.
pub fn parse_mealy(text: &str, delimiter: char) -> FormatResult<MealyAutomaton> {
    let mut lines = lines(text, delimiter);
    let header = lines
        .next()
        .ok_or_else(|| FormatError::parse(1, "missing state header"))?;
    let states = header_cells(&header);
    if states.is_empty() {
        return Err(FormatError::parse(header.number, "header declares no states"));
    }

    let mut rows = Vec::new();
    for line in lines {
        check_width(&line, states.len())?;
        let (input, cells) = line.split_label();
        let transitions = cells
            .iter()
            .map(|cell| parse_transition(cell, line.number))
            .collect::<FormatResult<Vec<_>>>()?;
        rows.push(MealyRow::new(input, transitions));
    }

    Ok(MealyAutomaton::new(states, rows)?)
}

/// Parse a Moore automaton from table text.
///
/// # Errors
///
/// Fails on missing or mismatched header lines, a row with the wrong number
/// of cells, or state names the automaton model rejects.
pub fn parse_moore(text: &str, delimiter: char) -> FormatResult<MooreAutomaton> {
    let mut lines = lines(text, delimiter);
    let output_line = lines
        .next()
        .ok_or_else(|| FormatError::parse(1, "missing output header"))?;
    let state_line = lines
        .next()
        .ok_or_else(|| FormatError::parse(output_line.number + 1, "missing state header"))?;

    let outputs = header_cells(&output_line);
    let names = header_cells(&state_line);
    if names.is_empty() {
        return Err(FormatError::parse(state_line.number, "header declares no states"));
    }
    if outputs.len() != names.len() {
        return Err(FormatError::parse(
            state_line.number,
            format!("{} outputs declared for {} states", outputs.len(), names.len()),
        ));
    }
    let states_info = names
        .into_iter()
        .zip(outputs)
        .map(|(name, output)| MooreState::new(name, output))
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for line in lines {
        check_width(&line, states_info.len())?;
        let (input, cells) = line.split_label();
        rows.push(MooreRow::new(
            input,
            cells.iter().map(ToString::to_string).collect(),
        ));
    }

    Ok(MooreAutomaton::new(states_info, rows)?)
}

/// Reject text the table layout cannot carry unchanged: parsing trims cells
/// and splits on the delimiter.
fn check_cell(value: &str, delimiter: char) -> FormatResult<()> {
    let reason = if value.contains(delimiter) {
        "contains the delimiter"
    } else if value.contains(['\n', '\r']) {
        "contains a line break"
    } else if value.trim() != value {
        "has leading or trailing whitespace"
    } else {
        return Ok(());
    };
    Err(FormatError::unrepresentable(value, reason))
}

/// State names in Mealy cells must not contain the `/` separator.
fn check_state_cell(value: &str, delimiter: char) -> FormatResult<()> {
    if value.contains(CELL_SEPARATOR) {
        return Err(FormatError::unrepresentable(
            value,
            "contains the next/output separator",
        ));
    }
    check_cell(value, delimiter)
}

fn push_line<'a>(
    out: &mut String,
    delimiter: char,
    label: &str,
    cells: impl IntoIterator<Item = &'a str>,
) -> FormatResult<()> {
    check_cell(label, delimiter)?;
    out.push_str(label);
    for cell in cells {
        check_cell(cell, delimiter)?;
        out.push(delimiter);
        out.push_str(cell);
    }
    out.push('\n');
    Ok(())
}

/// Render a Mealy automaton as table text.
///
/// # Errors
///
/// Fails with [`FormatError::Unrepresentable`] for names or outputs that
/// would not parse back unchanged.
pub fn render_mealy(mealy: &MealyAutomaton, delimiter: char) -> FormatResult<String> {
    for state in mealy.states() {
        check_state_cell(state, delimiter)?;
    }
    let mut out = String::new();
    push_line(&mut out, delimiter, "", mealy.states().iter().map(String::as_str))?;
    for row in mealy.transition_table() {
        check_cell(&row.input, delimiter)?;
        out.push_str(&row.input);
        for transition in &row.transitions {
            check_state_cell(transition.next_state(), delimiter)?;
            check_cell(transition.output(), delimiter)?;
            // Writing into a String cannot fail
            let _ = write!(out, "{delimiter}{transition}");
        }
        out.push('\n');
    }
    Ok(out)
}

/// Render a Moore automaton as table text.
///
/// # Errors
///
/// Fails with [`FormatError::Unrepresentable`] for names or outputs that
/// would not parse back unchanged.
pub fn render_moore(moore: &MooreAutomaton, delimiter: char) -> FormatResult<String> {
    let mut out = String::new();
    let states = moore.states_info();
    push_line(&mut out, delimiter, "", states.iter().map(|s| s.output.as_str()))?;
    push_line(&mut out, delimiter, "", states.iter().map(|s| s.name.as_str()))?;
    for row in moore.transition_table() {
        push_line(
            &mut out,
            delimiter,
            &row.input,
            row.next_states.iter().map(String::as_str),
        )?;
    }
    Ok(out)
}
