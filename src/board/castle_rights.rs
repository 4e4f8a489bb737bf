//! Module for the `Castling` structure, the castling availability field of a FEN string.
//!
//! A board never stores a [`Castling`]: the right to castle is derived from whether the king and
//! the corner rooks have moved. `Castling` is the bridge between that and the FEN field, read
//! while parsing to mark pieces as moved and written while serializing.
//!
//! [`Castling`]: struct.Castling.html

use std::fmt;

use bitflags::bitflags;

use crate::core::{CastleType, Color};
use crate::error::ParseError;

bitflags! {
    /// Structure to help with recognizing the various possibilities of castling.
    ///
    /// Keeps track of what sides are possible to castle from for each color. Does not guarantee
    /// that the color containing a castling bit can castle at that time, only that neither its
    /// king nor the rook on that side has moved.
    #[derive(Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Castling: u8 {
        const WHITE_K      = 0b0000_0001; // White has King-side Castling ability
        const WHITE_Q      = 0b0000_0010; // White has Queen-side Castling ability
        const BLACK_K      = 0b0000_0100; // Black has King-side Castling ability
        const BLACK_Q      = 0b0000_1000; // Black has Queen-side Castling ability
        const WHITE_ALL    = Self::WHITE_K.bits // White can castle for both sides
                           | Self::WHITE_Q.bits;
        const BLACK_ALL    = Self::BLACK_K.bits // Black can castle for both sides
                           | Self::BLACK_Q.bits;
    }
}

impl Castling {
    /// The flag for a single color and side.
    #[inline]
    pub fn flag(color: Color, side: CastleType) -> Castling {
        match (color, side) {
            (Color::White, CastleType::KingSide) => Castling::WHITE_K,
            (Color::White, CastleType::QueenSide) => Castling::WHITE_Q,
            (Color::Black, CastleType::KingSide) => Castling::BLACK_K,
            (Color::Black, CastleType::QueenSide) => Castling::BLACK_Q,
        }
    }

    /// Returns if a color can castle for a given side.
    #[inline]
    pub fn castle_rights(self, color: Color, side: CastleType) -> bool {
        self.contains(Castling::flag(color, side))
    }

    /// Returns if a color keeps at least one castling right.
    #[inline]
    pub fn player_can_castle(self, color: Color) -> bool {
        let all = match color {
            Color::White => Castling::WHITE_ALL,
            Color::Black => Castling::BLACK_ALL,
        };
        self.intersects(all)
    }

    /// Returns if both colors have lost their ability to castle.
    #[inline]
    pub fn no_castling(self) -> bool {
        self.is_empty()
    }

    /// Adds the right to castle based on a `char`.
    ///
    /// ```md
    /// `K` -> Add White King-side Castling bit.
    /// `Q` -> Add White Queen-side Castling bit.
    /// `k` -> Add Black King-side Castling bit.
    /// `q` -> Add Black Queen-side Castling bit.
    /// `-` -> Do nothing.
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `UnrecognizedCastling` for any other character.
    pub fn add_castling_char(&mut self, c: char) -> Result<(), ParseError> {
        let right = match c {
            'K' => Castling::WHITE_K,
            'Q' => Castling::WHITE_Q,
            'k' => Castling::BLACK_K,
            'q' => Castling::BLACK_Q,
            '-' => Castling::empty(),
            _ => return Err(ParseError::UnrecognizedCastling { right: c }),
        };
        self.insert(right);
        Ok(())
    }

    /// Reads a whole FEN castling field.
    pub fn from_fen_field(field: &str) -> Result<Castling, ParseError> {
        let mut castling = Castling::empty();
        for c in field.chars() {
            castling.add_castling_char(c)?;
        }
        Ok(castling)
    }

    /// Returns a pretty String representing the castling state
    ///
    /// Used for FEN Strings, with (`K` | `Q`) representing white castling abilities,
    /// and (`k` | `q`) representing black castling abilities. If there are no bits set,
    /// returns a String containing "-".
    pub fn pretty_string(self) -> String {
        if self.no_castling() {
            return "-".to_owned();
        }
        [
            (Castling::WHITE_K, 'K'),
            (Castling::WHITE_Q, 'Q'),
            (Castling::BLACK_K, 'k'),
            (Castling::BLACK_Q, 'q'),
        ]
        .iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, c)| *c)
        .collect()
    }
}

impl fmt::Display for Castling {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty_string())
    }
}
