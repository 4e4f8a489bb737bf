//! Knight move generation.
//! Jumps to eight fixed offsets, ignoring anything in between.

use super::{step_destinations, MoveContext, Piece, PieceRules};
use crate::board::piece_locations::PieceLocations;
use crate::core::coordinate::Coordinate;
use crate::core::piece_move::Destination;
use crate::core::PieceType;

/// (file, rank) jumps of a knight.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
];

pub struct Knight;

impl Knight {
    fn jumps(from: Coordinate) -> impl Iterator<Item = Coordinate> {
        KNIGHT_OFFSETS
            .iter()
            .map(move |&(df, dr)| from.offset(df, dr))
    }
}

impl PieceRules for Knight {
    const KIND: PieceType = PieceType::Knight;

    fn pseudo_legal_moves(piece: &Piece, ctx: &MoveContext) -> Vec<Destination> {
        step_destinations(piece.color, Knight::jumps(piece.current), ctx.locations)
    }

    fn attacked_squares(piece: &Piece, locations: &PieceLocations) -> Vec<Coordinate> {
        Knight::jumps(piece.current)
            .filter(|c| locations.in_bounds(*c))
            .collect()
    }
}
