//! Reading and writing boards as FEN strings.
//!
//! FEN stands for Forsyth-Edwards Notation: six whitespace separated fields holding the piece
//! placement, the side to move, castling availability, the en passant target, the halfmove clock
//! and the fullmove number.
//!
//! A [`Board`] stores none of the last four directly. Castling availability is derived from
//! whether kings and rooks have moved, and the en passant target from the last logged move, so
//! parsing translates those fields into moved flags and a synthesized log entry. The clocks are
//! checked for being numbers and otherwise dropped.
//!
//! [`Board`]: ../struct.Board.html

use lazy_static::lazy_static;
use tracing::debug;

use super::castle_rights::Castling;
use super::piece_locations::PieceLocations;
use super::Board;
use crate::core::coordinate::Coordinate;
use crate::core::piece_move::{Move, MoveKind};
use crate::core::{CastleType, Color, KingState, PieceType, ALL_COLORS, BOARD_SIZE};
use crate::error::{ParseError, Result};
use crate::pieces::Piece;

/// The standard opening position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// The opening position as laid out with Black at the bottom of the board.
pub const START_FEN_BLACK_BOTTOM: &str = "RNBQKBNR/PPPPPPPP/8/8/8/8/pppppppp/rnbqkbnr w KQkq - 0 1";

/// Placement field that makes an inferred orientation put Black at the bottom.
const BLACK_BOTTOM_PLACEMENT: &str = "RNBQKBNR/PPPPPPPP/8/8/8/8/pppppppp/rnbqkbnr";

pub static STANDARD_FENS_MIDDLE_POS: [&str; 14] = [
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "4rrk1/pp1n3p/3q2pQ/2p1pb2/2PP4/2P3N1/P2B2PP/4RRK1 b - - 0 1",
    "r3r1k1/2p2ppp/p1p1bn2/8/1q2P3/2NPQN2/PPP3PP/R4RK1 b - - 0 1",
    "r1bbk1nr/pp3p1p/2n5/1N4p1/2Np1B2/8/PPP2PPP/2KR1B1R w kq - 0 1",
    "r1bq1rk1/ppp1nppp/4n3/3p3Q/3P4/1BP1B3/PP1N2PP/R4RK1 w - - 0 1",
    "4r1k1/r1q2ppp/ppp2n2/4P3/5Rb1/1N1BQ3/PPP3PP/R5K1 w - - 0 1",
    "2rqkb1r/ppp2p2/2npb1p1/1N1Nn2p/2P1PP2/8/PP2B1PP/R1BQK2R b KQ - 0 1",
    "r1bq1r1k/b1p1npp1/p2p3p/1p6/3PP3/1B2NN2/PP3PPP/R2Q1RK1 w - - 0 1",
    "3r1rk1/p5pp/bpp1pp2/8/q1PP1P2/b3P3/P2NQRPP/1R2B1K1 b - - 0 1",
    "r1q2rk1/2p1bppp/2Pp4/p6b/Q1PNp3/4B3/PP1R1PPP/2K4R w - - 0 1",
    "4k2r/1pb2ppp/1p2p3/1R1p4/3P4/2r1PN2/P4PPP/1R4K1 b k - 0 1",
    "3q2k1/pb3p1p/4pbp1/2r5/PpN2N2/1P2P2P/5PP1/Q2R2K1 b - - 0 1",
    "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 1",
];

pub static STANDARD_FENS_ENDGAME_POS: [&str; 10] = [
    "6k1/6p1/6Pp/ppp5/3pn2P/1P3K2/1PP2P2/3N4 b - - 0 1",
    "3b4/5kp1/1p1p1p1p/pP1PpP1P/P1P1P3/3KN3/8/8 w - - 0 1",
    "8/6pk/1p6/8/PP3p1p/5P2/4KP1q/3Q4 w - - 0 1",
    "8/2p5/8/2kPKp1p/2p4P/2P5/3P4/8 w - - 0 1",
    "5k2/7R/4P2p/5K2/p1r2P1p/8/8/8 b - - 0 1",
    "8/8/8/8/5kp1/P7/8/1K1N4 w - - 0 1",
    "8/3k4/8/8/8/4B3/4KB2/2B5 w - - 0 1",
    "8/8/1P6/5pr1/8/4R3/7k/2K5 w - - 0 1",
    "8/8/3P3k/8/1p6/8/1P6/1K3n2 b - - 0 1",
    "8/R7/2q5/8/6k1/8/1P5p/K6R w - - 0 1",
];

pub static STANDARD_FEN_MATE_STALEMATE: [&str; 4] = [
    "6k1/3b3r/1p1p4/p1n2p2/1PPNpP1q/P3Q1p1/1R1RB1P1/5K2 b - - 0 1",
    "r2r1n2/pp2bk2/2p1p2p/3q4/3PN1QP/2P3R1/P4PP1/5RK1 w - - 0 1",
    "8/8/8/8/8/6k1/6p1/6K1 w - - 0 1",
    "7k/7P/6K1/8/3B4/8/8/8 b - - 0 1",
];

lazy_static! {
    /// Every position above, in canonical form: `Board::from_fen(fen)?.fen() == fen`.
    pub static ref ALL_FENS: Vec<&'static str> = {
        let mut vec = vec![START_FEN];
        vec.extend(STANDARD_FENS_MIDDLE_POS.iter());
        vec.extend(STANDARD_FENS_ENDGAME_POS.iter());
        vec.extend(STANDARD_FEN_MATE_STALEMATE.iter());
        vec
    };
}

/// Which color to put at the bottom of a board read from FEN.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Black at the bottom only when the placement is exactly the opening layout with White's
    /// pieces on ranks 7 and 8. White otherwise.
    Infer,
    Fixed(Color),
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Infer
    }
}

impl Orientation {
    fn resolve(self, placement: &str) -> Color {
        match self {
            Orientation::Fixed(color) => color,
            Orientation::Infer if placement == BLACK_BOTTOM_PLACEMENT => Color::Black,
            Orientation::Infer => Color::White,
        }
    }
}

/// Constructs a board from a FEN string.
///
/// # Errors
///
/// Returns a [`ParseError`] wrapped in `ChessError::Parse` for any malformed field, or for a
/// placement without exactly one king per side or with a pawn on the first or last rank.
///
/// [`ParseError`]: ../../error/enum.ParseError.html
pub fn parse(fen: &str, orientation: Orientation) -> Result<Board> {
    // [ Piece Placement, Side to Move, Castling Ability, En Passant square, Half moves, full moves]
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(ParseError::NotEnoughSections { sections: fields.len() }.into());
    }

    let ranks: Vec<&str> = fields[0].split('/').collect();
    if ranks.len() != BOARD_SIZE as usize {
        return Err(ParseError::IncorrectRankAmounts { ranks: ranks.len() }.into());
    }

    let bottom = orientation.resolve(fields[0]);
    let mut locations = parse_placement(&ranks, bottom)?;
    validate(&locations)?;

    let turn = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(ParseError::UnrecognizedTurn { turn: other.to_string() }.into());
        }
    };

    let castling = Castling::from_fen_field(fields[2])?;
    apply_castling(&mut locations, castling);

    let mut moves = Vec::new();
    if let Some(double_push) = parse_en_passant(fields[3], turn, &locations)? {
        moves.push(double_push);
    }

    // Clocks must be numbers, their values are not kept.
    fields[4].parse::<u32>().map_err(ParseError::from)?;
    fields[5].parse::<u32>().map_err(ParseError::from)?;

    let mut board = Board::from_parts(locations, turn, moves);
    if !board.moves().is_empty() {
        let state = board.king_state(turn)?;
        board.set_last_king_state(state);
    }
    debug!(fen, bottom = %bottom, "board read from fen");
    Ok(board)
}

/// Reads the eight ranks of the placement field, rank 8 first.
fn parse_placement(ranks: &[&str], bottom: Color) -> std::result::Result<PieceLocations, ParseError> {
    let mut locations = PieceLocations::blank(bottom);
    for (i, section) in ranks.iter().enumerate() {
        let rank = BOARD_SIZE - 1 - i as i8;
        let larger = || ParseError::SquareLargerRank {
            rank: rank as usize + 1,
            section: section.to_string(),
        };
        let mut file: i8 = 0;
        for ch in section.chars() {
            if ('1'..='8').contains(&ch) {
                file += (ch as u8 - b'0') as i8;
                if file > BOARD_SIZE {
                    return Err(larger());
                }
                continue;
            }
            // 0 and 9 are never valid skips.
            if ch.is_ascii_digit() {
                return Err(ParseError::UnrecognizedPiece { piece: ch });
            }
            if file >= BOARD_SIZE {
                return Err(larger());
            }
            let (kind, color) =
                PieceType::from_fen_char(ch).ok_or(ParseError::UnrecognizedPiece { piece: ch })?;
            let at = Coordinate::new(file, rank);
            let moved = kind == PieceType::Pawn && rank != locations.pawn_start_rank(color);
            locations.place(Piece::new(kind, color, at).with_moved(moved));
            file += 1;
        }
        if file < BOARD_SIZE {
            return Err(ParseError::SquareSmallerRank {
                rank: rank as usize + 1,
                section: section.to_string(),
            });
        }
    }
    Ok(locations)
}

fn validate(locations: &PieceLocations) -> std::result::Result<(), ParseError> {
    for color in ALL_COLORS.iter() {
        let count = locations
            .pieces_of(*color)
            .filter(|p| p.kind == PieceType::King)
            .count();
        if count != 1 {
            return Err(ParseError::IncorrectKingCount { color: *color, count });
        }
    }
    let last_ranks = [0, BOARD_SIZE - 1];
    if locations
        .iter()
        .any(|p| p.kind == PieceType::Pawn && last_ranks.contains(&p.current.rank))
    {
        return Err(ParseError::PawnOnLastRank);
    }
    Ok(())
}

/// The corner a rook castling on `side` starts from.
fn corner(locations: &PieceLocations, color: Color, side: CastleType) -> Coordinate {
    let file = match side {
        CastleType::KingSide => BOARD_SIZE - 1,
        CastleType::QueenSide => 0,
    };
    Coordinate::new(file, locations.home_rank(color))
}

/// Marks rooks without a castling right as moved, and kings whose side has no right at all.
fn apply_castling(locations: &mut PieceLocations, castling: Castling) {
    for &color in ALL_COLORS.iter() {
        for &side in [CastleType::KingSide, CastleType::QueenSide].iter() {
            if castling.castle_rights(color, side) {
                continue;
            }
            let at = corner(locations, color, side);
            if let Some(rook) = locations.piece_at_mut(at) {
                if rook.kind == PieceType::Rook && rook.color == color {
                    rook.moved = true;
                }
            }
        }
        if !castling.player_can_castle(color) {
            let at = locations.king(color).map(|k| k.current);
            if let Some(king) = at.and_then(|at| locations.piece_at_mut(at)) {
                king.moved = true;
            }
        }
    }
}

/// Turns the en passant field into the two-square advance that allowed it.
fn parse_en_passant(
    field: &str,
    turn: Color,
    locations: &PieceLocations,
) -> std::result::Result<Option<Move>, ParseError> {
    if field == "-" {
        return Ok(None);
    }
    let invalid = || ParseError::EPSquareInvalid { ep: field.to_string() };
    let target = Coordinate::from_notation(field)
        .map_err(|_| ParseError::EPSquareUnreadable { ep: field.to_string() })?;
    if target.rank != 2 && target.rank != 5 {
        return Err(invalid());
    }

    // The side that just moved is the one not on turn.
    let mover = turn.other();
    let forward = locations.forward(mover);
    if target.rank != locations.pawn_start_rank(mover) + forward || !locations.is_empty(target) {
        return Err(invalid());
    }
    let landed = target.offset(0, forward);
    let from = target.offset(0, -forward);
    let pawn = match locations.piece_at(landed) {
        Some(p) if p.kind == PieceType::Pawn && p.color == mover => *p,
        _ => return Err(invalid()),
    };
    if !locations.is_empty(from) {
        return Err(invalid());
    }

    let mut before = pawn;
    before.current = from;
    before.moved = false;
    Ok(Some(Move {
        from,
        to: landed,
        piece: before,
        kind: MoveKind::Move,
        king_state: KingState::Normal,
        promoted: None,
    }))
}

/// Creates a FEN string of the given board.
///
/// Ranks are written from 8 to 1 and files from a to h, whatever the orientation. The halfmove
/// clock is always 0 and the fullmove number is derived from the length of the move log.
pub fn serialize(board: &Board) -> String {
    let locations = board.piece_locations();
    let mut s = String::with_capacity(90);

    for rank in (0..BOARD_SIZE).rev() {
        let mut blanks = 0;
        for file in 0..BOARD_SIZE {
            match locations.piece_at(Coordinate::new(file, rank)) {
                None => blanks += 1,
                Some(piece) => {
                    if blanks != 0 {
                        s.push_str(&blanks.to_string());
                        blanks = 0;
                    }
                    s.push(piece.fen_char());
                }
            }
        }
        if blanks != 0 {
            s.push_str(&blanks.to_string());
        }
        if rank != 0 {
            s.push('/');
        }
    }

    s.push(' ');
    s.push(board.turn().fen_char());
    s.push(' ');
    s.push_str(&castling_rights(locations).pretty_string());
    s.push(' ');

    match board.last_move().filter(|m| m.is_double_push()) {
        Some(m) => {
            let target = Coordinate::new(m.from.file, (m.from.rank + m.to.rank) / 2);
            s.push_str(&target.to_string());
        }
        None => s.push('-'),
    }

    s.push_str(" 0 ");
    s.push_str(&(board.moves().len() / 2 + 1).to_string());
    s
}

/// Castling availability as seen from the pieces: an unmoved king and an unmoved rook of the
/// same color on the corner the king castles towards.
pub fn castling_rights(locations: &PieceLocations) -> Castling {
    let mut castling = Castling::empty();
    for &color in ALL_COLORS.iter() {
        let king = match locations.king(color) {
            Some(k) if !k.moved => *k,
            _ => continue,
        };
        for &side in [CastleType::KingSide, CastleType::QueenSide].iter() {
            let rook_at = king.current.offset(side.rook_offset(), 0);
            if let Some(rook) = locations.piece_at(rook_at) {
                if rook.kind == PieceType::Rook && rook.color == color && !rook.moved {
                    castling.insert(Castling::flag(color, side));
                }
            }
        }
    }
    castling
}
