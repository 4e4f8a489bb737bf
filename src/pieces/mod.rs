//! The piece catalog.
//!
//! Every piece on a board is a [`Piece`]: a kind, a color, where it started, where it stands now
//! and whether it has moved. The movement rules of each kind live behind the [`PieceRules`]
//! trait, implemented by one zero-sized type per kind ([`Pawn`], [`Knight`], [`Bishop`],
//! [`Rook`], [`Queen`], [`King`]). `Piece` dispatches to them by matching on its kind, so the set
//! of kinds stays closed.
//!
//! Pieces hold no reference to the board. Move generation receives the occupancy it needs through
//! a [`MoveContext`].
//!
//! [`Pawn`]: pawn/struct.Pawn.html
//! [`Knight`]: knight/struct.Knight.html
//! [`Bishop`]: sliding/struct.Bishop.html
//! [`Rook`]: sliding/struct.Rook.html
//! [`Queen`]: sliding/struct.Queen.html
//! [`King`]: king/struct.King.html

pub mod king;
pub mod knight;
pub mod pawn;
pub mod sliding;

use std::fmt;

use crate::board::piece_locations::PieceLocations;
use crate::core::coordinate::Coordinate;
use crate::core::piece_move::{Destination, Move};
use crate::core::{Color, PieceType};

use self::king::King;
use self::knight::Knight;
use self::pawn::Pawn;
use self::sliding::{Bishop, Queen, Rook};

/// Everything a piece may look at while generating its moves.
#[derive(Copy, Clone)]
pub struct MoveContext<'a> {
    pub locations: &'a PieceLocations,
    /// The most recently logged move, consulted for en passant.
    pub last_move: Option<&'a Move>,
}

/// Movement rules shared by every kind of piece.
pub trait PieceRules {
    /// The kind these rules belong to.
    const KIND: PieceType;

    /// Moves consistent with the piece's movement pattern and the board's occupancy, without
    /// regard to the safety of its own king.
    fn pseudo_legal_moves(piece: &Piece, ctx: &MoveContext) -> Vec<Destination>;

    /// Squares the piece threatens, used for king safety.
    fn attacked_squares(piece: &Piece, locations: &PieceLocations) -> Vec<Coordinate>;
}

/// A piece on the board.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub kind: PieceType,
    pub color: Color,
    /// Where the piece was created. Never changes.
    pub start: Coordinate,
    /// Where the piece stands now. Only the board moves it.
    pub current: Coordinate,
    /// Set the first time the piece moves, never cleared.
    pub moved: bool,
}

impl Piece {
    /// Creates an unmoved piece.
    #[inline]
    pub fn new(kind: PieceType, color: Color, at: Coordinate) -> Piece {
        Piece {
            kind,
            color,
            start: at,
            current: at,
            moved: false,
        }
    }

    /// Returns the same piece with its moved flag set as given.
    #[inline]
    pub fn with_moved(mut self, moved: bool) -> Piece {
        self.moved = moved;
        self
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.kind.value()
    }

    /// The FEN letter for this piece.
    #[inline]
    pub fn fen_char(&self) -> char {
        self.kind.fen_char(self.color)
    }

    /// Moves available to this piece before king-safety filtering.
    pub fn pseudo_legal_moves(&self, ctx: &MoveContext) -> Vec<Destination> {
        match self.kind {
            PieceType::Pawn => self.moves_by::<Pawn>(ctx),
            PieceType::Knight => self.moves_by::<Knight>(ctx),
            PieceType::Bishop => self.moves_by::<Bishop>(ctx),
            PieceType::Rook => self.moves_by::<Rook>(ctx),
            PieceType::Queen => self.moves_by::<Queen>(ctx),
            PieceType::King => self.moves_by::<King>(ctx),
        }
    }

    /// Squares this piece threatens.
    pub fn attacked_squares(&self, locations: &PieceLocations) -> Vec<Coordinate> {
        match self.kind {
            PieceType::Pawn => self.attacks_by::<Pawn>(locations),
            PieceType::Knight => self.attacks_by::<Knight>(locations),
            PieceType::Bishop => self.attacks_by::<Bishop>(locations),
            PieceType::Rook => self.attacks_by::<Rook>(locations),
            PieceType::Queen => self.attacks_by::<Queen>(locations),
            PieceType::King => self.attacks_by::<King>(locations),
        }
    }

    #[inline]
    fn moves_by<R: PieceRules>(&self, ctx: &MoveContext) -> Vec<Destination> {
        debug_assert_eq!(self.kind, R::KIND);
        R::pseudo_legal_moves(self, ctx)
    }

    #[inline]
    fn attacks_by<R: PieceRules>(&self, locations: &PieceLocations) -> Vec<Coordinate> {
        debug_assert_eq!(self.kind, R::KIND);
        R::attacked_squares(self, locations)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} on {}", self.color, self.kind, self.current)
    }
}

/// Returns the squares strictly between two pieces on a shared rank, file or diagonal, ordered
/// from `from` towards `to`.
///
/// Knights and pawns have no line of attack, so any pair involving one yields nothing.
pub fn between(from: &Piece, to: &Piece) -> Vec<Coordinate> {
    if from.kind.is_leaper() || to.kind.is_leaper() {
        return Vec::new();
    }
    from.current.line_to(to.current)
}

/// Keeps the destinations that are on the board and not blocked by a piece of `color`,
/// marking captures of enemy non-king pieces as attacks. Used by the leaping pieces.
pub(crate) fn step_destinations<I>(
    color: Color,
    targets: I,
    locations: &PieceLocations,
) -> Vec<Destination>
where
    I: IntoIterator<Item = Coordinate>,
{
    use crate::core::piece_move::MoveKind;

    targets
        .into_iter()
        .filter(|c| locations.in_bounds(*c))
        .filter_map(|c| match locations.piece_at(c) {
            None => Some(Destination::new(c, MoveKind::Move)),
            Some(p) if p.color != color && p.kind != PieceType::King => {
                Some(Destination::new(c, MoveKind::Attack))
            }
            Some(_) => None,
        })
        .collect()
}
