//! Core data model for the rover simulator.
//!
//! These types describe a single run: the plateau, the headings a rover can
//! face, the instructions it understands, and the state it reports.

mod heading;
mod instruction;
mod plateau;
mod rover;

pub use heading::Heading;
pub use instruction::{Instruction, InstructionPolicy, parse_instructions};
pub use plateau::Plateau;
pub use rover::RoverState;

/// Errors from parsing a line of the rover protocol.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("missing {0}")]
    MissingField(&'static str),

    #[error("invalid {field}: '{value}' is not an integer")]
    InvalidNumber { field: &'static str, value: String },

    #[error("unknown heading '{0}'")]
    UnknownHeading(String),

    #[error("unexpected trailing field '{0}'")]
    TrailingField(String),

    #[error("unknown instruction '{0}'")]
    UnknownInstruction(char),
}

/// Split a protocol line into its whitespace-separated fields.
///
/// Both spaces and tabs separate fields; runs of separators count as one.
fn fields(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

/// Take the next field and parse it as a signed base-10 integer.
fn next_int<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> Result<i64, ParseError> {
    let value = fields.next().ok_or(ParseError::MissingField(field))?;
    value.parse().map_err(|_| ParseError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Fail if any fields remain after a complete description.
fn expect_end<'a>(fields: &mut impl Iterator<Item = &'a str>) -> Result<(), ParseError> {
    match fields.next() {
        Some(extra) => Err(ParseError::TrailingField(extra.to_string())),
        None => Ok(()),
    }
}
