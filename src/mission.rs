//! The rover protocol: one plateau, then rovers one at a time.
//!
//! ```text
//! 5 5          # plateau upper-right corner
//! 1 2 N        # rover 1 start
//! LMLMLMLMM    # rover 1 instructions
//! 3 3 E        # rover 2 start
//! MMRMMRMRRM   # rover 2 instructions
//! ```
//!
//! Each rover runs to completion, joins the fleet, and has its final state
//! written and flushed before the next rover's start line is read.

use std::io::{self, BufRead, Write};

use crate::fleet::Fleet;
use crate::model::{InstructionPolicy, ParseError, Plateau, RoverState, parse_instructions};
use crate::motion::MotionTable;
use crate::sequence::{Halt, sequence};

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Errors that stop a mission.
#[derive(Debug, thiserror::Error)]
pub enum MissionError {
    #[error("input is empty: expected a plateau line")]
    MissingPlateau,

    #[error("line {line}: {source}")]
    Parse { line: usize, source: ParseError },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = core::result::Result<T, MissionError>;

/// Counts from a finished mission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub rovers: usize,
    /// Rovers stopped short by the plateau edge or another rover.
    pub blocked: usize,
    /// Rovers whose starting state was already illegal.
    pub started_invalid: usize,
}

pub struct Mission<'a> {
    table: &'a MotionTable,
    policy: InstructionPolicy,
}

impl<'a> Mission<'a> {
    pub fn new(table: &'a MotionTable, policy: InstructionPolicy) -> Self {
        Self { table, policy }
    }

    /// Read the whole protocol from `input`, writing one line per rover to `output`.
    ///
    /// Blank lines where a rover's start is expected are skipped. A start line
    /// at end of input with no instruction line still produces a rover.
    pub fn run(&self, input: impl BufRead, mut output: impl Write) -> Result<Summary> {
        let mut lines = input
            .lines()
            .enumerate()
            .map(|(index, line)| line.map(|line| (index + 1, line)));

        let (number, line) = lines
            .next()
            .transpose()?
            .ok_or(MissionError::MissingPlateau)?;
        let plateau = Plateau::parse(&line).map_err(|source| MissionError::Parse {
            line: number,
            source,
        })?;
        log::debug!("plateau {plateau}");

        let mut fleet = Fleet::new(plateau);
        let mut summary = Summary::default();

        while let Some((number, line)) = lines.next().transpose()? {
            if line.trim().is_empty() {
                continue;
            }
            let start = RoverState::parse(&line, self.table).map_err(|source| {
                MissionError::Parse {
                    line: number,
                    source,
                }
            })?;

            let instructions = match lines.next().transpose()? {
                Some((number, line)) => {
                    parse_instructions(&line, self.policy).map_err(|source| {
                        MissionError::Parse {
                            line: number,
                            source,
                        }
                    })?
                }
                None => Vec::new(),
            };

            let traverse = sequence(start, &instructions, &fleet, self.table);
            let rover = fleet.complete(traverse.state);
            summary.rovers += 1;

            match traverse.halt {
                Halt::Completed => {
                    log::debug!("rover {rover}: executed all {} instructions", traverse.executed);
                }
                Halt::Blocked { at, obstruction } => {
                    summary.blocked += 1;
                    log::info!(
                        "rover {rover}: halted at instruction {} of {}: next cell {obstruction}",
                        at + 1,
                        instructions.len()
                    );
                }
                Halt::StartedInvalid(obstruction) => {
                    summary.started_invalid += 1;
                    log::info!("rover {rover}: starting cell {obstruction}, not moved");
                }
            }

            write!(output, "{}{LINE_ENDING}", traverse.state.format(self.table))?;
            output.flush()?;
        }

        Ok(summary)
    }
}
