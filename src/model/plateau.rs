//! The plateau: the rectangle rovers must stay on.

use std::fmt;

use super::{ParseError, expect_end, fields, next_int};

/// An axis-aligned rectangle with its lower-left corner at the origin.
///
/// Both corners are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plateau {
    x1: i64,
    y1: i64,
}

impl Plateau {
    pub fn new(x1: i64, y1: i64) -> Self {
        Self { x1, y1 }
    }

    /// Parse the upper-right corner from an `x1 y1` line.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut fields = fields(line);
        let x1 = next_int(&mut fields, "plateau x")?;
        let y1 = next_int(&mut fields, "plateau y")?;
        expect_end(&mut fields)?;
        Ok(Self { x1, y1 })
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        (0..=self.x1).contains(&x) && (0..=self.y1).contains(&y)
    }
}

impl fmt::Display for Plateau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(0, 0)..=({}, {})", self.x1, self.y1)
    }
}
