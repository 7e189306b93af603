//! Compass headings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The direction a rover is facing.
///
/// What each heading means (how it turns, which way it moves, how it is
/// written) lives in the [`MotionTable`](crate::motion::MotionTable), not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Every heading, clockwise from north.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(name)
    }
}
