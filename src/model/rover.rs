//! Rover state: where a rover is and which way it faces.

use crate::motion::MotionTable;

use super::{Heading, Instruction, ParseError, expect_end, fields, next_int};

/// A rover's position and heading.
///
/// `Copy`, so applying an instruction always yields a fresh candidate and the
/// live state is untouched until the caller commits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoverState {
    pub x: i64,
    pub y: i64,
    pub heading: Heading,
}

impl RoverState {
    pub fn new(x: i64, y: i64, heading: Heading) -> Self {
        Self { x, y, heading }
    }

    /// Parse an `x y H` description, resolving `H` through the table's codes.
    pub fn parse(line: &str, table: &MotionTable) -> Result<Self, ParseError> {
        let mut fields = fields(line);
        let x = next_int(&mut fields, "rover x")?;
        let y = next_int(&mut fields, "rover y")?;
        let code = fields.next().ok_or(ParseError::MissingField("heading"))?;
        let heading = single_char(code)
            .and_then(|c| table.heading_for(c))
            .ok_or_else(|| ParseError::UnknownHeading(code.to_string()))?;
        expect_end(&mut fields)?;
        Ok(Self { x, y, heading })
    }

    /// The state after performing `instruction`.
    ///
    /// A move that overflows wraps, which always lands outside the plateau.
    #[must_use]
    pub fn apply(self, instruction: Instruction, table: &MotionTable) -> Self {
        let rule = table.lookup(self.heading);
        match instruction {
            Instruction::Move => Self {
                x: self.x.wrapping_add(rule.dx),
                y: self.y.wrapping_add(rule.dy),
                ..self
            },
            Instruction::TurnLeft => Self {
                heading: rule.left,
                ..self
            },
            Instruction::TurnRight => Self {
                heading: rule.right,
                ..self
            },
        }
    }

    /// Render as `x y H`, the same form [`parse`](Self::parse) reads.
    pub fn format(&self, table: &MotionTable) -> String {
        format!("{} {} {}", self.x, self.y, table.code(self.heading))
    }

    pub fn same_cell(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::Instruction::{Move, TurnLeft, TurnRight};

    fn table() -> MotionTable {
        MotionTable::compass()
    }

    #[test]
    fn parses_position_and_heading() {
        let state = RoverState::parse("1 2 N", &table()).unwrap();
        assert_eq!(state, RoverState::new(1, 2, Heading::North));
    }

    #[test]
    fn heading_is_case_insensitive_and_signs_allowed() {
        let state = RoverState::parse("-3\t+4  w", &table()).unwrap();
        assert_eq!(state, RoverState::new(-3, 4, Heading::West));
    }

    #[test]
    fn rejects_missing_fields() {
        assert_eq!(
            RoverState::parse("1 2", &table()).unwrap_err(),
            ParseError::MissingField("heading")
        );
        assert_eq!(
            RoverState::parse("", &table()).unwrap_err(),
            ParseError::MissingField("rover x")
        );
    }

    #[test]
    fn rejects_non_numeric_coordinates() {
        let err = RoverState::parse("1 two N", &table()).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                field: "rover y",
                value: "two".into()
            }
        );
    }

    #[test]
    fn rejects_unknown_or_long_heading() {
        assert_eq!(
            RoverState::parse("1 2 Q", &table()).unwrap_err(),
            ParseError::UnknownHeading("Q".into())
        );
        assert_eq!(
            RoverState::parse("1 2 North", &table()).unwrap_err(),
            ParseError::UnknownHeading("North".into())
        );
    }

    #[test]
    fn rejects_trailing_fields() {
        assert_eq!(
            RoverState::parse("1 2 N M", &table()).unwrap_err(),
            ParseError::TrailingField("M".into())
        );
    }

    #[test]
    fn move_follows_heading() {
        let t = table();
        let start = RoverState::new(2, 2, Heading::North);
        assert_eq!(start.apply(Move, &t), RoverState::new(2, 3, Heading::North));

        let east = RoverState::new(2, 2, Heading::East);
        assert_eq!(east.apply(Move, &t), RoverState::new(3, 2, Heading::East));

        let south = RoverState::new(2, 2, Heading::South);
        assert_eq!(south.apply(Move, &t), RoverState::new(2, 1, Heading::South));

        let west = RoverState::new(2, 2, Heading::West);
        assert_eq!(west.apply(Move, &t), RoverState::new(1, 2, Heading::West));
    }

    #[test]
    fn apply_leaves_the_original_untouched() {
        let t = table();
        let start = RoverState::new(0, 0, Heading::North);
        let moved = start.apply(Move, &t);
        assert_eq!(start, RoverState::new(0, 0, Heading::North));
        assert_ne!(moved, start);
    }

    #[test]
    fn turns_undo_each_other() {
        let t = table();
        for heading in Heading::ALL {
            let state = RoverState::new(7, -2, heading);
            assert_eq!(state.apply(TurnLeft, &t).apply(TurnRight, &t), state);
            assert_eq!(state.apply(TurnRight, &t).apply(TurnLeft, &t), state);
        }
    }

    #[test]
    fn turns_keep_position() {
        let t = table();
        let state = RoverState::new(4, 1, Heading::East);
        let left = state.apply(TurnLeft, &t);
        assert_eq!((left.x, left.y, left.heading), (4, 1, Heading::North));
        let right = state.apply(TurnRight, &t);
        assert_eq!((right.x, right.y, right.heading), (4, 1, Heading::South));
    }

    #[test]
    fn move_then_turns_restores_heading_only() {
        let t = table();
        let start = RoverState::new(1, 1, Heading::North);
        let end = start
            .apply(Move, &t)
            .apply(TurnLeft, &t)
            .apply(TurnRight, &t)
            .apply(TurnLeft, &t)
            .apply(TurnRight, &t);
        assert_eq!(end.heading, start.heading);
        assert_ne!((end.x, end.y), (start.x, start.y));
    }

    #[test]
    fn overflowing_move_wraps_negative() {
        let t = table();
        let state = RoverState::new(i64::MAX, 0, Heading::East);
        assert!(state.apply(Move, &t).x < 0);
    }

    #[test]
    fn format_inverts_parse() {
        let t = table();
        for line in ["1 3 N", "5 1 E", "0 0 S", "-4 12 W"] {
            assert_eq!(RoverState::parse(line, &t).unwrap().format(&t), line);
        }
        assert_eq!(RoverState::parse(" 1\t3 n ", &t).unwrap().format(&t), "1 3 N");
    }

    #[test]
    fn format_inverts_parse_after_apply() {
        let t = table();
        let mut state = RoverState::new(3, 3, Heading::East);
        for instruction in [Move, TurnLeft, Move, TurnRight, TurnRight, Move] {
            state = state.apply(instruction, &t);
            assert_eq!(RoverState::parse(&state.format(&t), &t).unwrap(), state);
        }
    }

    #[test]
    fn same_cell_ignores_heading() {
        let a = RoverState::new(1, 2, Heading::North);
        let b = RoverState::new(1, 2, Heading::South);
        assert!(a.same_cell(&b));
        assert!(!a.same_cell(&RoverState::new(2, 1, Heading::North)));
    }
}
