//! Rover instructions and instruction-line decoding.

use super::ParseError;

/// A single rover instruction, decoded from its letter before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Move one cell forward along the current heading (`M`).
    Move,
    /// Rotate 90 degrees left in place (`L`).
    TurnLeft,
    /// Rotate 90 degrees right in place (`R`).
    TurnRight,
}

impl Instruction {
    /// Decode an instruction letter, case-insensitively.
    pub fn decode(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'M' => Some(Self::Move),
            'L' => Some(Self::TurnLeft),
            'R' => Some(Self::TurnRight),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Self::Move => 'M',
            Self::TurnLeft => 'L',
            Self::TurnRight => 'R',
        }
    }
}

/// What to do with a character that is not an instruction letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InstructionPolicy {
    /// Reject the line with [`ParseError::UnknownInstruction`].
    #[default]
    Strict,
    /// Drop the character; it has no effect on the rover.
    Ignore,
}

/// Decode an instruction line into instructions.
///
/// Surrounding whitespace is trimmed. An empty line is a valid, empty
/// instruction list.
pub fn parse_instructions(
    line: &str,
    policy: InstructionPolicy,
) -> Result<Vec<Instruction>, ParseError> {
    let mut instructions = Vec::with_capacity(line.len());
    for code in line.trim().chars() {
        match (Instruction::decode(code), policy) {
            (Some(instruction), _) => instructions.push(instruction),
            (None, InstructionPolicy::Ignore) => {
                log::debug!("ignoring unknown instruction '{code}'");
            }
            (None, InstructionPolicy::Strict) => {
                return Err(ParseError::UnknownInstruction(code));
            }
        }
    }
    Ok(instructions)
}
