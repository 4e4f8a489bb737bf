//! Module for the definition of a move, both as a candidate ([`Destination`]) and as an applied,
//! logged transition ([`Move`]).
//!
//! A `Destination` pairs a target square with the [`MoveKind`] that reaching it implies. The
//! kinds are:
//!
//! ```md,ignore
//! Move                     ===> Quiet move, including a pawn's double push
//! Attack                   ===> Capture of the piece on the destination
//! EnPassant                ===> Pawn capture of the pawn beside it
//! CastleKingSide           ===> King moves two files towards the h-file
//! CastleQueenSide          ===> King moves two files towards the a-file
//! PawnPromotion            ===> Quiet move onto the far rank
//! PawnPromotionWithAttack  ===> Capture onto the far rank
//! ```
//!
//! A `Move` is only ever created by the `Board` when a move is applied, and is never changed once
//! the board hands control back to the caller.

use std::fmt;

use super::coordinate::Coordinate;
use super::{KingState, PieceType};
use crate::pieces::Piece;

/// Selected meta-data classifying a move.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    Move,
    Attack,
    EnPassant,
    CastleKingSide,
    CastleQueenSide,
    PawnPromotion,
    PawnPromotionWithAttack,
}

impl MoveKind {
    /// Returns if the move removes an opposing piece.
    #[inline]
    pub fn is_capture(self) -> bool {
        matches!(
            self,
            MoveKind::Attack | MoveKind::EnPassant | MoveKind::PawnPromotionWithAttack
        )
    }

    /// Returns if the move is a castle.
    #[inline]
    pub fn is_castle(self) -> bool {
        matches!(self, MoveKind::CastleKingSide | MoveKind::CastleQueenSide)
    }

    /// Returns if the move ends with a pawn being replaced.
    #[inline]
    pub fn is_promotion(self) -> bool {
        matches!(
            self,
            MoveKind::PawnPromotion | MoveKind::PawnPromotionWithAttack
        )
    }
}

/// A square a piece can move to, along with the kind of move that gets it there.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Destination {
    pub to: Coordinate,
    pub kind: MoveKind,
}

impl Destination {
    #[inline]
    pub const fn new(to: Coordinate, kind: MoveKind) -> Destination {
        Destination { to, kind }
    }
}

/// Represents a singular applied move.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub from: Coordinate,
    pub to: Coordinate,
    /// The moving piece as it stood before the move.
    pub piece: Piece,
    pub kind: MoveKind,
    /// State of the opponent's king once the move was made.
    pub king_state: KingState,
    /// The piece a pawn was promoted to, if any.
    pub promoted: Option<PieceType>,
}

impl Move {
    /// Returns if this move was a pawn advancing two ranks.
    #[inline]
    pub fn is_double_push(&self) -> bool {
        self.piece.kind == PieceType::Pawn && (self.to.rank - self.from.rank).abs() == 2
    }

    /// Renders the move in the notation used for display. Not meant to be parsed back.
    pub fn notation(&self) -> String {
        let symbol = self.piece.kind.notation_symbol();
        let promoted = self.promoted.map_or("", |p| p.notation_symbol());
        let mut s = match self.kind {
            MoveKind::Move if self.piece.kind == PieceType::Pawn => format!("{}", self.to),
            MoveKind::Move => format!("{}{}{}", symbol, self.from, self.to),
            MoveKind::Attack => format!("{}{}x{}", symbol, self.from, self.to),
            MoveKind::EnPassant => format!("{}x{} e.p.", self.from, self.to),
            MoveKind::CastleKingSide => "O-O".to_string(),
            MoveKind::CastleQueenSide => "O-O-O".to_string(),
            MoveKind::PawnPromotion => format!("{}={}", self.to, promoted),
            MoveKind::PawnPromotionWithAttack => {
                format!("{}x{}={}", self.from, self.to, promoted)
            }
        };

        match self.king_state {
            KingState::Checked => s.push('+'),
            KingState::CheckMated => s.push('#'),
            _ => {}
        }
        s
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&self.notation())
    }
}
