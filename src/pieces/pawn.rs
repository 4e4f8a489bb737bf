//! Pawn move generation.
//!
//! Pawns push forward into empty squares, capture diagonally forward, capture en passant and
//! promote on the far rank. "Forward" depends on which color sits at the bottom of the board.

use super::{MoveContext, Piece, PieceRules};
use crate::board::piece_locations::PieceLocations;
use crate::core::coordinate::Coordinate;
use crate::core::piece_move::{Destination, MoveKind};
use crate::core::PieceType;

pub struct Pawn;

impl Pawn {
    /// The two squares diagonally in front of the pawn, on the board.
    fn capture_squares(piece: &Piece, locations: &PieceLocations) -> Vec<Coordinate> {
        let forward = locations.forward(piece.color);
        [-1, 1]
            .iter()
            .map(|df| piece.current.offset(*df, forward))
            .filter(|c| locations.in_bounds(*c))
            .collect()
    }

    /// Returns the en passant target square, if the last move allows one.
    ///
    /// The last logged move must be an enemy pawn advancing two ranks and landing directly beside
    /// this pawn, with the square it skipped over still empty.
    pub fn en_passant_target(piece: &Piece, ctx: &MoveContext) -> Option<Coordinate> {
        let last = ctx.last_move?;
        if !last.is_double_push() || last.piece.color == piece.color {
            return None;
        }
        if last.to.rank != piece.current.rank || (last.to.file - piece.current.file).abs() != 1 {
            return None;
        }
        match ctx.locations.piece_at(last.to) {
            Some(p) if p.kind == PieceType::Pawn && p.color != piece.color => {}
            _ => return None,
        }

        let target = last.to.offset(0, ctx.locations.forward(piece.color));
        if ctx.locations.in_bounds(target) && ctx.locations.is_empty(target) {
            Some(target)
        } else {
            None
        }
    }
}

impl PieceRules for Pawn {
    const KIND: PieceType = PieceType::Pawn;

    fn pseudo_legal_moves(piece: &Piece, ctx: &MoveContext) -> Vec<Destination> {
        let locations = ctx.locations;
        let forward = locations.forward(piece.color);
        let promotion_rank = locations.promotion_rank(piece.color);
        let mut moves = Vec::with_capacity(4);

        if let Some(target) = Pawn::en_passant_target(piece, ctx) {
            moves.push(Destination::new(target, MoveKind::EnPassant));
        }

        let one = piece.current.offset(0, forward);
        if locations.in_bounds(one) && locations.is_empty(one) {
            let kind = if one.rank == promotion_rank {
                MoveKind::PawnPromotion
            } else {
                MoveKind::Move
            };
            moves.push(Destination::new(one, kind));

            let two = one.offset(0, forward);
            if !piece.moved && locations.in_bounds(two) && locations.is_empty(two) {
                moves.push(Destination::new(two, MoveKind::Move));
            }
        }

        for target in Pawn::capture_squares(piece, locations) {
            match locations.piece_at(target) {
                Some(p) if p.color != piece.color && p.kind != PieceType::King => {
                    let kind = if target.rank == promotion_rank {
                        MoveKind::PawnPromotionWithAttack
                    } else {
                        MoveKind::Attack
                    };
                    moves.push(Destination::new(target, kind));
                }
                _ => {}
            }
        }

        moves
    }

    fn attacked_squares(piece: &Piece, locations: &PieceLocations) -> Vec<Coordinate> {
        Pawn::capture_squares(piece, locations)
    }
}
