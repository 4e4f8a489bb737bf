//! King move generation
//! Steps to any adjacent square the opponent does not attack, and castles.

use super::{step_destinations, MoveContext, Piece, PieceRules};
use crate::board::piece_locations::PieceLocations;
use crate::core::coordinate::Coordinate;
use crate::core::piece_move::{Destination, MoveKind};
use crate::core::{CastleType, Direction, PieceType};

pub struct King;

impl King {
    fn neighbours(from: Coordinate) -> impl Iterator<Item = Coordinate> {
        Direction::ALL.iter().map(move |dir| from.in_direction(*dir))
    }

    /// Returns if `king` may castle towards `side`.
    ///
    /// The king must be unmoved and not in check. Every square between king and rook must be
    /// empty and unattacked, and the rook must be an unmoved rook of the king's color.
    pub fn can_castle(king: &Piece, side: CastleType, locations: &PieceLocations) -> bool {
        if king.kind != PieceType::King || king.moved {
            return false;
        }
        let opponent = king.color.other();
        if locations.is_attacked(king.current, opponent) {
            return false;
        }

        let path_clear = (1..=side.gap())
            .map(|i| king.current.offset(i * side.file_step(), 0))
            .all(|c| {
                locations.in_bounds(c) && locations.is_empty(c) && !locations.is_attacked(c, opponent)
            });
        if !path_clear {
            return false;
        }

        match locations.piece_at(king.current.offset(side.rook_offset(), 0)) {
            Some(rook) => rook.kind == PieceType::Rook && rook.color == king.color && !rook.moved,
            None => false,
        }
    }
}

impl PieceRules for King {
    const KIND: PieceType = PieceType::King;

    fn pseudo_legal_moves(piece: &Piece, ctx: &MoveContext) -> Vec<Destination> {
        let locations = ctx.locations;
        let opponent = piece.color.other();
        let safe = King::neighbours(piece.current)
            .filter(|c| locations.in_bounds(*c) && !locations.is_attacked(*c, opponent));
        let mut moves = step_destinations(piece.color, safe, locations);

        if King::can_castle(piece, CastleType::KingSide, locations) {
            moves.push(Destination::new(
                piece.current.offset(2, 0),
                MoveKind::CastleKingSide,
            ));
        }
        if King::can_castle(piece, CastleType::QueenSide, locations) {
            moves.push(Destination::new(
                piece.current.offset(-2, 0),
                MoveKind::CastleQueenSide,
            ));
        }
        moves
    }

    fn attacked_squares(piece: &Piece, locations: &PieceLocations) -> Vec<Coordinate> {
        King::neighbours(piece.current)
            .filter(|c| locations.in_bounds(*c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    fn at(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    fn piece(kind: PieceType, color: Color, s: &str) -> Piece {
        Piece::new(kind, color, at(s))
    }

    fn moves_of(king: &Piece, locations: &PieceLocations) -> Vec<Destination> {
        let ctx = MoveContext { locations, last_move: None };
        King::pseudo_legal_moves(king, &ctx)
    }

    #[test]
    fn test_king_in_center() {
        let king = piece(PieceType::King, Color::White, "e4");
        let locations = PieceLocations::from_pieces(Color::White, vec![king]);
        assert_eq!(moves_of(&king, &locations).len(), 8);
    }

    #[test]
    fn test_king_avoids_attacked_squares() {
        let king = piece(PieceType::King, Color::White, "e1").with_moved(true);
        let rook = piece(PieceType::Rook, Color::Black, "a2");
        let locations = PieceLocations::from_pieces(Color::White, vec![king, rook]);
        let moves = moves_of(&king, &locations);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|d| d.to.rank == 0));
    }

    #[test]
    fn test_king_cannot_retreat_along_check() {
        let king = piece(PieceType::King, Color::White, "e2").with_moved(true);
        let rook = piece(PieceType::Rook, Color::Black, "e8");
        let locations = PieceLocations::from_pieces(Color::White, vec![king, rook]);
        let moves = moves_of(&king, &locations);
        assert!(!moves.iter().any(|d| d.to == at("e1")));
        assert!(!moves.iter().any(|d| d.to == at("e3")));
        assert_eq!(moves.len(), 6);
    }

    #[test]
    fn test_king_cannot_take_defended_piece() {
        let king = piece(PieceType::King, Color::White, "e1").with_moved(true);
        let knight = piece(PieceType::Knight, Color::Black, "e2");
        let defender = piece(PieceType::Bishop, Color::Black, "c4");
        let locations = PieceLocations::from_pieces(Color::White, vec![king, knight, defender]);
        assert!(!moves_of(&king, &locations).iter().any(|d| d.to == at("e2")));

        let locations = PieceLocations::from_pieces(Color::White, vec![king, knight]);
        assert!(moves_of(&king, &locations).contains(&Destination::new(at("e2"), MoveKind::Attack)));
    }

    #[test]
    fn test_castling() {
        let king = piece(PieceType::King, Color::White, "e1");
        let h_rook = piece(PieceType::Rook, Color::White, "h1");
        let a_rook = piece(PieceType::Rook, Color::White, "a1");
        let locations = PieceLocations::from_pieces(Color::White, vec![king, h_rook, a_rook]);
        assert!(King::can_castle(&king, CastleType::KingSide, &locations));
        assert!(King::can_castle(&king, CastleType::QueenSide, &locations));
        let moves = moves_of(&king, &locations);
        assert!(moves.contains(&Destination::new(at("g1"), MoveKind::CastleKingSide)));
        assert!(moves.contains(&Destination::new(at("c1"), MoveKind::CastleQueenSide)));
    }

    #[test]
    fn test_castling_preconditions() {
        let king = piece(PieceType::King, Color::White, "e1");
        let h_rook = piece(PieceType::Rook, Color::White, "h1");

        let moved_rook = h_rook.with_moved(true);
        let locations = PieceLocations::from_pieces(Color::White, vec![king, moved_rook]);
        assert!(!King::can_castle(&king, CastleType::KingSide, &locations));

        let blocker = piece(PieceType::Knight, Color::White, "g1");
        let locations = PieceLocations::from_pieces(Color::White, vec![king, h_rook, blocker]);
        assert!(!King::can_castle(&king, CastleType::KingSide, &locations));

        let attacker = piece(PieceType::Rook, Color::Black, "f8");
        let locations = PieceLocations::from_pieces(Color::White, vec![king, h_rook, attacker]);
        assert!(!King::can_castle(&king, CastleType::KingSide, &locations));

        let checker = piece(PieceType::Rook, Color::Black, "e8");
        let locations = PieceLocations::from_pieces(Color::White, vec![king, h_rook, checker]);
        assert!(!King::can_castle(&king, CastleType::KingSide, &locations));

        let enemy_rook = piece(PieceType::Rook, Color::Black, "h1");
        let locations = PieceLocations::from_pieces(Color::White, vec![king, enemy_rook]);
        assert!(!King::can_castle(&king, CastleType::KingSide, &locations));

        let locations = PieceLocations::from_pieces(Color::White, vec![king.with_moved(true), h_rook]);
        assert!(!King::can_castle(&king.with_moved(true), CastleType::KingSide, &locations));
    }
}
