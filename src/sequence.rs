//! Driving one rover through its instructions.
//!
//! Each instruction produces a candidate state which is checked against the
//! fleet before it is committed. The first rejected candidate ends the
//! sequence; the rover stays at its last legal state and the remaining
//! instructions are dropped. A rover that starts in an illegal state does not
//! move at all.

use crate::fleet::{Fleet, Obstruction};
use crate::model::{Instruction, RoverState};
use crate::motion::MotionTable;

/// How a sequence ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// Every instruction was executed.
    Completed,
    /// The starting state was already illegal, so nothing was executed.
    StartedInvalid(Obstruction),
    /// Instruction `at` (0-based) would have produced an illegal state.
    Blocked { at: usize, obstruction: Obstruction },
}

/// The result of running a rover's instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Traverse {
    /// Final state; legal unless the rover started illegal.
    pub state: RoverState,
    /// Number of instructions committed.
    pub executed: usize,
    pub halt: Halt,
}

/// Run `instructions` from `start`, validating every step against `fleet`.
pub fn sequence(
    start: RoverState,
    instructions: &[Instruction],
    fleet: &Fleet,
    table: &MotionTable,
) -> Traverse {
    if let Some(obstruction) = fleet.check(&start) {
        return Traverse {
            state: start,
            executed: 0,
            halt: Halt::StartedInvalid(obstruction),
        };
    }

    let mut state = start;
    for (at, &instruction) in instructions.iter().enumerate() {
        let candidate = state.apply(instruction, table);
        if let Some(obstruction) = fleet.check(&candidate) {
            return Traverse {
                state,
                executed: at,
                halt: Halt::Blocked { at, obstruction },
            };
        }
        state = candidate;
    }

    Traverse {
        state,
        executed: instructions.len(),
        halt: Halt::Completed,
    }
}
