//! Contains the value types a chessboard is built from: `Color`, `PieceType`, `Direction`,
//! `KingState` and `CastleType`, together with the [`Coordinate`] and [`Move`] types in the
//! submodules.
//!
//! [`Coordinate`]: coordinate/struct.Coordinate.html
//! [`Move`]: piece_move/struct.Move.html

pub mod coordinate;
pub mod piece_move;

use std::fmt;
use std::ops::Not;

/// Number of files (and ranks) on the board.
pub const BOARD_SIZE: i8 = 8;

/// Array of all possible piece types, in ascending value order.
pub const ALL_PIECE_TYPES: [PieceType; 6] = [
    PieceType::Pawn,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Rook,
    PieceType::Queen,
    PieceType::King,
];

/// The piece types a pawn may be replaced with.
pub const PROMOTION_CHOICES: [PieceType; 4] = [
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Knight,
];

/// Array of both colors.
pub const ALL_COLORS: [Color; 2] = [Color::White, Color::Black];

/// Enum to represent the two sides, White & Black.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the other color.
    ///
    /// ```rust
    /// use chess_rules::core::Color;
    ///
    /// assert_eq!(Color::Black.other(), Color::White);
    /// ```
    #[inline]
    pub fn other(self) -> Color {
        !self
    }

    /// The FEN character for this side to move.
    #[inline]
    pub fn fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match *self {
            Color::White => "White",
            Color::Black => "Black",
        })
    }
}

/// All possible types of pieces on a chessboard.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// Returns the material value of a piece. Kings are worth nothing, as they are never taken.
    #[inline]
    pub fn value(self) -> i32 {
        match self {
            PieceType::Pawn => 1,
            PieceType::Knight | PieceType::Bishop => 3,
            PieceType::Rook => 5,
            PieceType::Queen => 8,
            PieceType::King => 0,
        }
    }

    /// Return the lowercase character of a `PieceType`.
    #[inline]
    pub fn char_lower(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }

    /// Return the uppercase character of a `PieceType`.
    #[inline]
    pub fn char_upper(self) -> char {
        self.char_lower().to_ascii_uppercase()
    }

    /// The FEN symbol of this piece for the given color: uppercase for White.
    #[inline]
    pub fn fen_char(self, color: Color) -> char {
        match color {
            Color::White => self.char_upper(),
            Color::Black => self.char_lower(),
        }
    }

    /// The letter used in move notation. Pawns have none.
    pub fn notation_symbol(self) -> &'static str {
        match self {
            PieceType::Pawn => "",
            PieceType::Knight => "N",
            PieceType::Bishop => "B",
            PieceType::Rook => "R",
            PieceType::Queen => "Q",
            PieceType::King => "K",
        }
    }

    /// Reads a FEN piece letter, returning its type and color (uppercase is White).
    pub fn from_fen_char(c: char) -> Option<(PieceType, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceType::Pawn,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'r' => PieceType::Rook,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            _ => return None,
        };
        Some((kind, color))
    }

    /// Returns if a pawn may be promoted to this type.
    #[inline]
    pub fn is_promotion_choice(self) -> bool {
        PROMOTION_CHOICES.contains(&self)
    }

    /// Returns if this piece has no line of attack between itself and its target.
    #[inline]
    pub fn is_leaper(self) -> bool {
        matches!(self, PieceType::Pawn | PieceType::Knight)
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match *self {
            PieceType::Pawn => "Pawn",
            PieceType::Knight => "Knight",
            PieceType::Bishop => "Bishop",
            PieceType::Rook => "Rook",
            PieceType::Queen => "Queen",
            PieceType::King => "King",
        };
        f.pad(s)
    }
}

/// The eight directions a piece can step in. "Up" is towards rank 8.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Rook directions.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Bishop directions.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Every direction, used by the queen and the king.
    pub const ALL: [Direction; 8] = [
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
    ];

    /// The (file, rank) step of this direction.
    #[inline]
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpLeft => (-1, 1),
            Direction::UpRight => (1, 1),
            Direction::DownLeft => (-1, -1),
            Direction::DownRight => (1, -1),
        }
    }
}

/// Castling sides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastleType {
    /// Towards the h-file.
    KingSide,
    /// Towards the a-file.
    QueenSide,
}

impl CastleType {
    /// File offset from the king to the rook it castles with.
    #[inline]
    pub fn rook_offset(self) -> i8 {
        match self {
            CastleType::KingSide => 3,
            CastleType::QueenSide => -4,
        }
    }

    /// File direction the king travels in.
    #[inline]
    pub fn file_step(self) -> i8 {
        match self {
            CastleType::KingSide => 1,
            CastleType::QueenSide => -1,
        }
    }

    /// Number of squares between the king and the rook.
    #[inline]
    pub fn gap(self) -> i8 {
        match self {
            CastleType::KingSide => 2,
            CastleType::QueenSide => 3,
        }
    }
}

/// The state of a king, derived after every move for the side about to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KingState {
    Normal,
    Checked,
    CheckMated,
    StaleMated,
}

impl KingState {
    /// Returns if the king is attacked, mated or not.
    #[inline]
    pub fn is_in_check(self) -> bool {
        matches!(self, KingState::Checked | KingState::CheckMated)
    }

    /// Returns if the game is over for the side owning this king.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, KingState::CheckMated | KingState::StaleMated)
    }
}

impl Default for KingState {
    fn default() -> Self {
        KingState::Normal
    }
}
