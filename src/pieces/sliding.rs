//! Sliding pieces: bishops, rooks and queens.
//!
//! All three cast rays from their square until leaving the board or meeting a piece. The only
//! difference between them is the set of directions.

use super::{MoveContext, Piece, PieceRules};
use crate::board::piece_locations::PieceLocations;
use crate::core::coordinate::Coordinate;
use crate::core::piece_move::Destination;
use crate::core::{Direction, PieceType};

fn ray_moves(piece: &Piece, directions: &[Direction], locations: &PieceLocations) -> Vec<Destination> {
    directions
        .iter()
        .flat_map(|dir| locations.ray_destinations(piece, *dir))
        .collect()
}

fn ray_attacks(piece: &Piece, directions: &[Direction], locations: &PieceLocations) -> Vec<Coordinate> {
    directions
        .iter()
        .flat_map(|dir| locations.attack_ray(piece, *dir))
        .collect()
}

/// Moves along the four diagonals.
pub struct Bishop;

impl PieceRules for Bishop {
    const KIND: PieceType = PieceType::Bishop;

    fn pseudo_legal_moves(piece: &Piece, ctx: &MoveContext) -> Vec<Destination> {
        ray_moves(piece, &Direction::DIAGONAL, ctx.locations)
    }

    fn attacked_squares(piece: &Piece, locations: &PieceLocations) -> Vec<Coordinate> {
        ray_attacks(piece, &Direction::DIAGONAL, locations)
    }
}

/// Moves along ranks and files.
pub struct Rook;

impl PieceRules for Rook {
    const KIND: PieceType = PieceType::Rook;

    fn pseudo_legal_moves(piece: &Piece, ctx: &MoveContext) -> Vec<Destination> {
        ray_moves(piece, &Direction::ORTHOGONAL, ctx.locations)
    }

    fn attacked_squares(piece: &Piece, locations: &PieceLocations) -> Vec<Coordinate> {
        ray_attacks(piece, &Direction::ORTHOGONAL, locations)
    }
}

/// Bishop and rook combined.
pub struct Queen;

impl PieceRules for Queen {
    const KIND: PieceType = PieceType::Queen;

    fn pseudo_legal_moves(piece: &Piece, ctx: &MoveContext) -> Vec<Destination> {
        ray_moves(piece, &Direction::ALL, ctx.locations)
    }

    fn attacked_squares(piece: &Piece, locations: &PieceLocations) -> Vec<Coordinate> {
        ray_attacks(piece, &Direction::ALL, locations)
    }
}
