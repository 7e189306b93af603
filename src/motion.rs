//! The motion table: what each heading means.
//!
//! For every heading the table records the heading reached by turning left,
//! the heading reached by turning right, the displacement of one forward move,
//! and the single-letter code used on the wire. The built-in table is the
//! standard compass; a replacement can be loaded from JSON:
//!
//! ```json
//! {
//!   "north": { "left": "west", "right": "east", "dx": 0, "dy": 1, "code": "N" },
//!   ...
//! }
//! ```
//!
//! A table is validated once when it is built and is read-only afterwards.

use std::collections::BTreeMap;
use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};

use crate::model::Heading;

/// Errors from building or loading a motion table.
#[derive(Debug, thiserror::Error)]
pub enum MotionTableError {
    #[error("no entry for heading {0}")]
    MissingHeading(Heading),

    #[error("turning {turn} from {heading} to {to} does not turn back")]
    AsymmetricTurn {
        heading: Heading,
        turn: &'static str,
        to: Heading,
    },

    #[error("heading {heading} must move along exactly one axis, got ({dx}, {dy})")]
    BadDisplacement { heading: Heading, dx: i64, dy: i64 },

    #[error("headings {heading} and {right} move along the same axis")]
    NoAlternation { heading: Heading, right: Heading },

    #[error("turning right twice from {0} returns to it")]
    ShortCycle(Heading),

    #[error("code '{code}' for heading {heading} is not an ASCII letter")]
    InvalidCode { heading: Heading, code: char },

    #[error("code '{code}' is used by both {first} and {second}")]
    DuplicateCode {
        code: char,
        first: Heading,
        second: Heading,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, MotionTableError>;

/// How a rover facing one heading turns and moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotionRule {
    /// Heading after turning left.
    pub left: Heading,
    /// Heading after turning right.
    pub right: Heading,
    /// Eastward displacement of one forward move.
    pub dx: i64,
    /// Northward displacement of one forward move.
    pub dy: i64,
    /// Wire code for this heading.
    pub code: char,
}

impl MotionRule {
    fn is_horizontal(&self) -> bool {
        self.dy == 0
    }
}

/// A validated, immutable heading table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotionTable {
    rules: [MotionRule; 4],
}

impl Default for MotionTable {
    fn default() -> Self {
        Self::compass()
    }
}

impl MotionTable {
    /// The standard compass: x grows eastward, y grows northward.
    pub fn compass() -> Self {
        let rule = |left, right, dx, dy, code| MotionRule {
            left,
            right,
            dx,
            dy,
            code,
        };
        Self {
            rules: [
                rule(Heading::West, Heading::East, 0, 1, 'N'),
                rule(Heading::North, Heading::South, 1, 0, 'E'),
                rule(Heading::East, Heading::West, 0, -1, 'S'),
                rule(Heading::South, Heading::North, -1, 0, 'W'),
            ],
        }
    }

    /// Build a table from per-heading rules, validating its symmetry.
    ///
    /// Every heading needs an entry. Left and right must undo each other,
    /// each heading must move along exactly one axis, and those axes must
    /// alternate around the cycle. Codes are stored upper-case and must be
    /// distinct letters.
    pub fn from_entries(entries: &BTreeMap<Heading, MotionRule>) -> Result<Self> {
        for heading in Heading::ALL {
            let rule = entries
                .get(&heading)
                .ok_or(MotionTableError::MissingHeading(heading))?;
            if !rule.code.is_ascii_alphabetic() {
                return Err(MotionTableError::InvalidCode {
                    heading,
                    code: rule.code,
                });
            }
            if (rule.dx == 0) == (rule.dy == 0) {
                return Err(MotionTableError::BadDisplacement {
                    heading,
                    dx: rule.dx,
                    dy: rule.dy,
                });
            }
        }

        let table = Self {
            rules: Heading::ALL.map(|heading| {
                let rule = entries[&heading];
                MotionRule {
                    code: rule.code.to_ascii_uppercase(),
                    ..rule
                }
            }),
        };
        table.validate()?;
        Ok(table)
    }

    /// Parse and validate a table from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: BTreeMap<Heading, MotionRule> = serde_json::from_str(json)?;
        Self::from_entries(&entries)
    }

    /// Load and validate a table from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        log::debug!("loading motion table from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Render the table in the same JSON form [`from_json`](Self::from_json) reads.
    pub fn to_json(&self) -> Result<String> {
        let entries: BTreeMap<Heading, MotionRule> = Heading::ALL
            .into_iter()
            .map(|heading| (heading, *self.lookup(heading)))
            .collect();
        Ok(serde_json::to_string_pretty(&entries)?)
    }

    pub fn lookup(&self, heading: Heading) -> &MotionRule {
        &self.rules[heading as usize]
    }

    /// The wire code for a heading.
    pub fn code(&self, heading: Heading) -> char {
        self.lookup(heading).code
    }

    /// The heading written as `code`, matched case-insensitively.
    pub fn heading_for(&self, code: char) -> Option<Heading> {
        let code = code.to_ascii_uppercase();
        Heading::ALL
            .into_iter()
            .find(|&heading| self.code(heading) == code)
    }

    fn validate(&self) -> Result<()> {
        for heading in Heading::ALL {
            let rule = self.lookup(heading);

            let left = self.lookup(rule.left);
            if left.right != heading {
                return Err(MotionTableError::AsymmetricTurn {
                    heading,
                    turn: "left",
                    to: rule.left,
                });
            }

            let right = self.lookup(rule.right);
            if right.left != heading {
                return Err(MotionTableError::AsymmetricTurn {
                    heading,
                    turn: "right",
                    to: rule.right,
                });
            }

            if rule.is_horizontal() == right.is_horizontal() {
                return Err(MotionTableError::NoAlternation {
                    heading,
                    right: rule.right,
                });
            }

            if right.right == heading {
                return Err(MotionTableError::ShortCycle(heading));
            }

            if let Some(other) = Heading::ALL
                .into_iter()
                .find(|&other| other < heading && self.code(other) == rule.code)
            {
                return Err(MotionTableError::DuplicateCode {
                    code: rule.code,
                    first: other,
                    second: heading,
                });
            }
        }
        Ok(())
    }
}
