//! The fleet: the plateau plus every rover that has finished moving.
//!
//! A candidate state is legal when the plateau contains it and no completed
//! rover occupies its cell. Rovers still executing are never obstacles; a
//! rover only joins the fleet once its final state is fixed.

use std::fmt;

use crate::model::{Plateau, RoverState};

/// Why a state is not allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Obstruction {
    /// The cell is off the plateau.
    OutOfBounds,
    /// The cell is held by a completed rover (1-based, in input order).
    Collision { rover: usize },
}

impl fmt::Display for Obstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("off the plateau"),
            Self::Collision { rover } => write!(f, "occupied by rover {rover}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Fleet {
    plateau: Plateau,
    completed: Vec<RoverState>,
}

impl Fleet {
    pub fn new(plateau: Plateau) -> Self {
        Self {
            plateau,
            completed: Vec::new(),
        }
    }

    pub fn plateau(&self) -> &Plateau {
        &self.plateau
    }

    /// Final states of completed rovers, in the order they finished.
    pub fn completed(&self) -> &[RoverState] {
        &self.completed
    }

    /// What, if anything, makes `state` illegal. Bounds are checked first.
    pub fn check(&self, state: &RoverState) -> Option<Obstruction> {
        if !self.plateau.contains(state.x, state.y) {
            return Some(Obstruction::OutOfBounds);
        }
        self.completed
            .iter()
            .position(|other| other.same_cell(state))
            .map(|index| Obstruction::Collision { rover: index + 1 })
    }

    pub fn is_valid(&self, state: &RoverState) -> bool {
        self.check(state).is_none()
    }

    /// Record a rover's final state. Returns its rover number.
    pub fn complete(&mut self, state: RoverState) -> usize {
        self.completed.push(state);
        self.completed.len()
    }
}
