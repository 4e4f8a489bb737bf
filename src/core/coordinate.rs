//! Contains the representation of a chessboard's square.
//!
//! A `Coordinate` is a (file, rank) pair, both zero based, mapping to the board like so:
//!
//! ```md,ignore
//! 8 | (0,7) (1,7) ... (7,7)
//! ...
//! 2 | (0,1) (1,1) ... (7,1)
//! 1 | (0,0) (1,0) ... (7,0)
//!   -----------------------
//!      a     b   ...   h
//! ```
//!
//! Arithmetic on coordinates is unchecked: stepping off the board produces a coordinate for
//! which [`Coordinate::is_okay`] returns false. Callers are expected to bounds-check.
//!
//! # Examples
//!
//! ```rust
//! use chess_rules::core::coordinate::Coordinate;
//! use chess_rules::core::Direction;
//!
//! let e4: Coordinate = "e4".parse().unwrap();
//! assert_eq!(e4, Coordinate::new(4, 3));
//! assert_eq!(e4.in_direction(Direction::UpLeft).to_string(), "d5");
//! assert!(!Coordinate::new(0, 0).in_direction(Direction::Down).is_okay());
//! ```

use std::fmt;
use std::str::FromStr;

use super::{Direction, BOARD_SIZE};
use crate::error::ParseError;

/// File letters, indexed by file.
pub static FILE_DISPLAYS: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Rank digits, indexed by rank.
pub static RANK_DISPLAYS: [char; 8] = ['1', '2', '3', '4', '5', '6', '7', '8'];

/// Represents a singular square of a chessboard.
#[derive(Copy, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub file: i8,
    pub rank: i8,
}

impl Coordinate {
    /// Creates a coordinate. Out-of-range values are allowed.
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Coordinate {
        Coordinate { file, rank }
    }

    /// Returns if the coordinate lies on the board.
    #[inline]
    pub fn is_okay(self) -> bool {
        (0..BOARD_SIZE).contains(&self.file) && (0..BOARD_SIZE).contains(&self.rank)
    }

    /// Parses two-character algebraic notation, such as `e4`. Case-insensitive.
    pub fn from_notation(notation: &str) -> Result<Coordinate, ParseError> {
        let lower = notation.to_ascii_lowercase();
        let chars: Vec<char> = lower.chars().collect();
        if chars.len() != 2 {
            return Err(ParseError::CoordinateLength {
                input: notation.to_string(),
            });
        }

        let file = FILE_DISPLAYS.iter().position(|c| *c == chars[0]);
        let rank = RANK_DISPLAYS.iter().position(|c| *c == chars[1]);
        match (file, rank) {
            (Some(f), Some(r)) => Ok(Coordinate::new(f as i8, r as i8)),
            _ => Err(ParseError::CoordinateRange {
                input: notation.to_string(),
            }),
        }
    }

    /// Returns the algebraic notation of an on-board coordinate.
    pub fn to_notation(self) -> Option<String> {
        if !self.is_okay() {
            return None;
        }
        let mut s = String::with_capacity(2);
        s.push(FILE_DISPLAYS[self.file as usize]);
        s.push(RANK_DISPLAYS[self.rank as usize]);
        Some(s)
    }

    /// Returns the adjacent coordinate in a direction. May be off the board.
    #[inline]
    pub fn in_direction(self, direction: Direction) -> Coordinate {
        let (df, dr) = direction.delta();
        self.offset(df, dr)
    }

    /// Returns this coordinate shifted by a file and rank delta. May be off the board.
    #[inline]
    pub fn offset(self, files: i8, ranks: i8) -> Coordinate {
        Coordinate::new(self.file + files, self.rank + ranks)
    }

    /// Returns the coordinates strictly between `self` and `other` when both share a rank,
    /// file or diagonal, ordered from `self` towards `other`. Empty if not aligned.
    pub fn line_to(self, other: Coordinate) -> Vec<Coordinate> {
        let df = other.file - self.file;
        let dr = other.rank - self.rank;
        if (df == 0 && dr == 0) || !(df == 0 || dr == 0 || df.abs() == dr.abs()) {
            return Vec::new();
        }

        let step = (df.signum(), dr.signum());
        let mut line = Vec::new();
        let mut pos = self.offset(step.0, step.1);
        while pos != other {
            line.push(pos);
            pos = pos.offset(step.0, step.1);
        }
        line
    }

    /// Returns the larger of the file or rank distance between two coordinates.
    #[inline]
    pub fn distance(self, other: Coordinate) -> u8 {
        let df = (self.file - other.file).unsigned_abs();
        let dr = (self.rank - other.rank).unsigned_abs();
        df.max(dr)
    }
}

impl FromStr for Coordinate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coordinate::from_notation(s)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.to_notation() {
            Some(s) => f.pad(&s),
            None => write!(f, "({},{})", self.file, self.rank),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notation_round_trip() {
        for file in 0..8 {
            for rank in 0..8 {
                let c = Coordinate::new(file, rank);
                let s = c.to_notation().unwrap();
                assert_eq!(Coordinate::from_notation(&s), Ok(c));
            }
        }
    }

    #[test]
    fn notation_is_case_insensitive() {
        assert_eq!(Coordinate::from_notation("E4"), Coordinate::from_notation("e4"));
        assert_eq!("H8".parse::<Coordinate>().unwrap(), Coordinate::new(7, 7));
    }

    #[test]
    fn bad_notation() {
        assert!(matches!(
            Coordinate::from_notation("e"),
            Err(ParseError::CoordinateLength { .. })
        ));
        assert!(matches!(
            Coordinate::from_notation("e10"),
            Err(ParseError::CoordinateLength { .. })
        ));
        assert!(matches!(
            Coordinate::from_notation("i1"),
            Err(ParseError::CoordinateRange { .. })
        ));
        assert!(matches!(
            Coordinate::from_notation("a9"),
            Err(ParseError::CoordinateRange { .. })
        ));
    }

    #[test]
    fn off_board_is_representable() {
        let c = Coordinate::new(7, 7).in_direction(Direction::UpRight);
        assert_eq!(c, Coordinate::new(8, 8));
        assert!(!c.is_okay());
        assert_eq!(c.to_notation(), None);
        assert_eq!(c.to_string(), "(8,8)");
    }

    #[test]
    fn lines() {
        let a1 = Coordinate::new(0, 0);
        let d4 = Coordinate::new(3, 3);
        assert_eq!(a1.line_to(d4), vec![Coordinate::new(1, 1), Coordinate::new(2, 2)]);
        assert_eq!(d4.line_to(a1), vec![Coordinate::new(2, 2), Coordinate::new(1, 1)]);

        let a4 = Coordinate::new(0, 3);
        assert_eq!(d4.line_to(a4).len(), 2);
        assert!(a1.line_to(Coordinate::new(1, 2)).is_empty());
        assert!(a1.line_to(a1).is_empty());
        assert!(a1.line_to(Coordinate::new(1, 1)).is_empty());
    }

    #[test]
    fn distances() {
        assert_eq!(Coordinate::new(0, 0).distance(Coordinate::new(1, 2)), 2);
        assert_eq!(Coordinate::new(4, 4).distance(Coordinate::new(4, 4)), 0);
    }
}
