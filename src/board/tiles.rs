//! The cosmetic squares of a board, in the order a viewer sitting on the bottom side reads them.

use std::fmt;

use crate::core::coordinate::Coordinate;
use crate::core::{Color, BOARD_SIZE};

/// A single square of the board and its shade. a1 is dark.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub coordinate: Coordinate,
    pub color: Color,
}

impl Tile {
    pub fn new(coordinate: Coordinate) -> Tile {
        let color = if (coordinate.file + coordinate.rank) % 2 == 0 {
            Color::Black
        } else {
            Color::White
        };
        Tile { coordinate, color }
    }

    #[inline]
    pub fn is_dark(&self) -> bool {
        self.color == Color::Black
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let shade = if self.is_dark() { "dark" } else { "light" };
        write!(f, "{} ({})", self.coordinate, shade)
    }
}

/// Builds the 64 tiles of a board.
///
/// With White at the bottom the order is a1, b1 .. h1, a2 .. h8. With Black at the bottom the
/// board is turned around: h8, g8 .. a8, h7 .. a1.
pub fn build(bottom: Color) -> Vec<Tile> {
    let size = BOARD_SIZE;
    let squares: Vec<Coordinate> = match bottom {
        Color::White => (0..size)
            .flat_map(|rank| (0..size).map(move |file| Coordinate::new(file, rank)))
            .collect(),
        Color::Black => (0..size)
            .rev()
            .flat_map(|rank| (0..size).rev().map(move |file| Coordinate::new(file, rank)))
            .collect(),
    };
    squares.into_iter().map(Tile::new).collect()
}
