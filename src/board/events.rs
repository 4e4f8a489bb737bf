//! What a board reports back after a mutation.
//!
//! Every call to [`Board::apply_move`] or [`Board::complete_promotion`] returns a
//! [`MoveOutcome`] listing the [`BoardEvent`]s it caused, in the order they happened. Callers
//! that render the board replay the events instead of diffing snapshots.
//!
//! [`Board::apply_move`]: ../struct.Board.html#method.apply_move
//! [`Board::complete_promotion`]: ../struct.Board.html#method.complete_promotion
//! [`MoveOutcome`]: struct.MoveOutcome.html
//! [`BoardEvent`]: enum.BoardEvent.html

use std::fmt;

use crate::core::coordinate::Coordinate;
use crate::core::piece_move::{Move, MoveKind};
use crate::core::{Color, KingState};
use crate::pieces::Piece;

/// Why a game ended without a winner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawReason {
    /// The side to move has no legal move and is not in check.
    Stalemate,
    /// Only the kings remain, or the kings and a single bishop or knight.
    InsufficientMaterial,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match *self {
            DrawReason::Stalemate => "stalemate",
            DrawReason::InsufficientMaterial => "insufficient material",
        })
    }
}

/// A single observable change of the board.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardEvent {
    /// A piece was created on the board, by promotion.
    PieceAdded(Piece),
    /// A piece left the board, captured or replaced by its promotion.
    PieceRemoved { piece: Piece, by_promotion: bool },
    /// A move was appended to the log.
    MoveApplied(Move),
    /// The king state of the side about to move was recomputed.
    KingStateChanged { color: Color, state: KingState },
    /// A pawn reached the far rank. The board waits for
    /// [`Board::complete_promotion`](../struct.Board.html#method.complete_promotion).
    PromotionPending {
        from: Coordinate,
        to: Coordinate,
        kind: MoveKind,
    },
    TurnChanged(Color),
    Drawn(DrawReason),
}

/// The result of applying a move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub events: Vec<BoardEvent>,
    /// State of the side now to move. `None` while a promotion is pending.
    pub king_state: Option<KingState>,
    pub draw: Option<DrawReason>,
}

impl MoveOutcome {
    pub(crate) fn new() -> MoveOutcome {
        MoveOutcome {
            events: Vec::new(),
            king_state: None,
            draw: None,
        }
    }

    pub(crate) fn push(&mut self, event: BoardEvent) {
        self.events.push(event);
    }

    /// Returns if the move stopped to wait for a promotion choice.
    pub fn is_promotion_pending(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, BoardEvent::PromotionPending { .. }))
    }

    /// The logged move, if the move completed.
    pub fn applied(&self) -> Option<&Move> {
        self.events.iter().find_map(|e| match e {
            BoardEvent::MoveApplied(m) => Some(m),
            _ => None,
        })
    }

    /// Pieces that left the board because they were captured.
    pub fn captured(&self) -> Vec<Piece> {
        self.events
            .iter()
            .filter_map(|e| match e {
                BoardEvent::PieceRemoved { piece, by_promotion: false } => Some(*piece),
                _ => None,
            })
            .collect()
    }
}

/// Where a game stands, from the side to move's point of view.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress { to_move: Color, in_check: bool },
    /// A pawn of `color` waits on the far rank for its replacement.
    AwaitingPromotion { color: Color },
    Won { winner: Color },
    Drawn(DrawReason),
}

impl GameStatus {
    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Won { .. } | GameStatus::Drawn(_))
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GameStatus::InProgress { to_move, in_check: false } => write!(f, "{} to move", to_move),
            GameStatus::InProgress { to_move, in_check: true } => {
                write!(f, "{} to move, in check", to_move)
            }
            GameStatus::AwaitingPromotion { color } => write!(f, "{} to choose a promotion", color),
            GameStatus::Won { winner } => write!(f, "{} wins by checkmate", winner),
            GameStatus::Drawn(reason) => write!(f, "draw by {}", reason),
        }
    }
}
