//! # rover
//!
//! Drive rovers across a rectangular plateau from a line-oriented command
//! stream and report where each one ends up.
//!
//! Rovers run strictly one after another. Each instruction is applied to a
//! copy of the rover's state and committed only if the result stays on the
//! plateau and off every rover that has already finished; the first illegal
//! step ends that rover's run.

pub mod fleet;
pub mod mission;
pub mod model;
pub mod motion;
pub mod sequence;

pub use fleet::{Fleet, Obstruction};
pub use mission::{Mission, MissionError, Summary};
pub use model::{
    Heading, Instruction, InstructionPolicy, ParseError, Plateau, RoverState, parse_instructions,
};
pub use motion::{MotionRule, MotionTable, MotionTableError};
pub use sequence::{Halt, Traverse, sequence};
