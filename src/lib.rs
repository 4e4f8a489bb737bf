//! A chess rules library.
//!
//! Generates the legal moves of any piece, applies moves with all their side effects (captures,
//! en passant, castling, promotion), derives check, checkmate, stalemate and the
//! insufficient-material draw, and reads and writes positions as FEN strings.
//!
//! The board can be laid out with either color at the bottom. Pawns of the bottom color advance
//! towards rank 8, pawns of the top color towards rank 1.
//!
//! # Usage
//!
//! Add `chess_rules` to the dependencies in your project's `Cargo.toml`. Enable the `serde`
//! feature to serialize the value types.
//!
//! The library reports what it does through `tracing` and never installs a subscriber.
//!
//! # Examples
//!
//! You can create a [`Board`] with the starting position like so:
//!
//! ```
//! use chess_rules::Board;
//! let board = Board::default();
//! ```
//!
//! Asking for the legal moves of a piece and applying one:
//!
//! ```
//! use chess_rules::Board;
//!
//! let mut board = Board::default();
//! let g1 = "g1".parse().unwrap();
//! let moves = board.legal_positions(g1).unwrap();
//! assert_eq!(moves.len(), 2);
//!
//! let outcome = board.apply_move(g1, moves[0].to, moves[0].kind).unwrap();
//! assert!(outcome.applied().is_some());
//! ```
//!
//! Using fen strings is also supported:
//!
//! ```
//! use chess_rules::Board;
//!
//! let start_position = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
//! let board = Board::from_fen(start_position).unwrap();
//! assert_eq!(board.fen(), start_position);
//! ```
//!
//! [`Board`]: board/struct.Board.html

pub mod board;
pub mod core;
pub mod error;
pub mod pieces;

#[doc(no_inline)]
pub use crate::board::events::{BoardEvent, DrawReason, GameStatus, MoveOutcome};
#[doc(no_inline)]
pub use crate::board::fen::Orientation;
#[doc(no_inline)]
pub use crate::board::Board;
#[doc(no_inline)]
pub use crate::core::coordinate::Coordinate;
#[doc(no_inline)]
pub use crate::core::piece_move::{Destination, Move, MoveKind};
#[doc(no_inline)]
pub use crate::core::{CastleType, Color, KingState, PieceType};
#[doc(no_inline)]
pub use crate::error::{ChessError, ParseError, Result};
#[doc(no_inline)]
pub use crate::pieces::Piece;
