//! Error types returned by the board, the pieces and the FEN codec.
//!
//! Errors fall into two groups. [`ParseError`], [`ChessError::IllegalMove`] and the other
//! caller-facing variants are expected: the caller corrects the input and tries again.
//! [`ChessError::MissingExpectedPiece`] and [`ChessError::InvariantViolation`] mean the board
//! reached a state the rules should have made impossible, and the operation is aborted.

use std::num;

use thiserror::Error;

use crate::core::coordinate::Coordinate;
use crate::core::piece_move::MoveKind;
use crate::core::{CastleType, Color, PieceType};

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ChessError>;

/// Represents possible errors encountered while reading a coordinate or a FEN string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("coordinate `{input}` must be exactly two characters")]
    CoordinateLength { input: String },
    #[error("coordinate `{input}` is outside the board, expected a1 through h8")]
    CoordinateRange { input: String },
    #[error("invalid number of fen sections: {sections}, expected 6")]
    NotEnoughSections { sections: usize },
    #[error("invalid number of ranks: {ranks}, expected 8")]
    IncorrectRankAmounts { ranks: usize },
    #[error("invalid turn: {turn}, expected 'w' or 'b'")]
    UnrecognizedTurn { turn: String },
    #[error("square count too small for rank {rank}: `{section}`")]
    SquareSmallerRank { rank: usize, section: String },
    #[error("square count too large for rank {rank}: `{section}`")]
    SquareLargerRank { rank: usize, section: String },
    #[error("unrecognized piece: {piece}")]
    UnrecognizedPiece { piece: char },
    #[error("unrecognized castling right: {right}")]
    UnrecognizedCastling { right: char },
    #[error("unreadable en-passant square: {ep}")]
    EPSquareUnreadable { ep: String },
    #[error("invalid en-passant square: {ep}")]
    EPSquareInvalid { ep: String },
    #[error("unreadable move counter: {0}")]
    UnreadableMoves(#[from] num::ParseIntError),
    #[error("expected exactly one {color} king, found {count}")]
    IncorrectKingCount { color: Color, count: usize },
    #[error("pawn on first or last rank")]
    PawnOnLastRank,
    #[error("unreadable move `{input}`")]
    UnreadableMove { input: String },
}

/// Every failure the crate can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The requested destination is not in the piece's current legal set.
    #[error("illegal move {from}{to} ({kind:?})")]
    IllegalMove {
        from: Coordinate,
        to: Coordinate,
        kind: MoveKind,
    },

    #[error("no piece on {0}")]
    NoPieceAt(Coordinate),

    /// A piece handed to a board constructor stands off the board.
    #[error("square {0} is off the board")]
    OffBoard(Coordinate),

    /// Two pieces handed to a board constructor share a square.
    #[error("square {0} holds more than one piece")]
    SquareOccupied(Coordinate),

    #[error("it is not {0}'s turn")]
    WrongTurn(Color),

    /// A pawn reached the far rank and is waiting for its replacement piece.
    #[error("a pawn promotion on {at} is waiting for a piece choice")]
    PromotionPending { at: Coordinate },

    #[error("no pawn promotion is pending")]
    NoPromotionPending,

    #[error("a pawn cannot promote to a {0}")]
    InvalidPromotion(PieceType),

    /// Castling found no unmoved rook of the right color where one was required.
    #[error("expected an unmoved rook on {at} while castling {side:?}")]
    MissingExpectedPiece { at: Coordinate, side: CastleType },

    /// Check detection found an attacker count the rules cannot produce.
    #[error("king on {king} reported {attackers} checking pieces while {context}")]
    InvariantViolation {
        king: Coordinate,
        attackers: usize,
        context: &'static str,
    },
}

impl ChessError {
    /// Returns `true` for errors the caller can recover from by retrying with
    /// different input, `false` for internal invariant failures.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            ChessError::MissingExpectedPiece { .. } | ChessError::InvariantViolation { .. }
        )
    }
}
