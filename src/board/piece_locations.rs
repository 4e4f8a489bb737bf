//! Contains a structure that maps from squares of a board to the piece standing on that square.

use std::fmt;

use crate::core::coordinate::Coordinate;
use crate::core::piece_move::{Destination, MoveKind};
use crate::core::{Color, Direction, PieceType, BOARD_SIZE};
use crate::pieces::Piece;

const SQUARE_CNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Struct to allow fast lookups for any square. Given a square, returns the piece there, if any.
///
/// Also knows which color sits at the bottom of the board, as that decides which way pawns
/// advance. Squares are indexed `rank * 8 + file`, so iteration goes a1, b1 .. h8.
#[derive(Clone, PartialEq, Eq)]
pub struct PieceLocations {
    data: [Option<Piece>; SQUARE_CNT],
    bottom: Color,
}

impl PieceLocations {
    /// Constructs a new `PieceLocations` with no pieces on the board.
    pub fn blank(bottom: Color) -> PieceLocations {
        PieceLocations {
            data: [None; SQUARE_CNT],
            bottom,
        }
    }

    /// Constructs a `PieceLocations` holding the given pieces, each at its current square.
    ///
    /// # Panics
    ///
    /// Panics if a piece stands off the board.
    pub fn from_pieces<I>(bottom: Color, pieces: I) -> PieceLocations
    where
        I: IntoIterator<Item = Piece>,
    {
        let mut locations = PieceLocations::blank(bottom);
        for piece in pieces {
            locations.place(piece);
        }
        locations
    }

    /// The color whose pieces start on ranks 1 and 2.
    #[inline]
    pub fn bottom(&self) -> Color {
        self.bottom
    }

    #[inline]
    pub fn in_bounds(&self, at: Coordinate) -> bool {
        at.is_okay()
    }

    #[inline]
    fn index(at: Coordinate) -> usize {
        at.rank as usize * BOARD_SIZE as usize + at.file as usize
    }

    /// Returns the piece at `at`, or None if the square is empty or off the board.
    #[inline]
    pub fn piece_at(&self, at: Coordinate) -> Option<&Piece> {
        if !at.is_okay() {
            return None;
        }
        self.data[PieceLocations::index(at)].as_ref()
    }

    #[inline]
    pub fn piece_at_mut(&mut self, at: Coordinate) -> Option<&mut Piece> {
        if !at.is_okay() {
            return None;
        }
        self.data[PieceLocations::index(at)].as_mut()
    }

    /// Returns if there is no piece at `at`. Squares off the board count as empty.
    #[inline]
    pub fn is_empty(&self, at: Coordinate) -> bool {
        self.piece_at(at).is_none()
    }

    /// Places a piece at its current square, returning whatever stood there before.
    ///
    /// # Panics
    ///
    /// Panics if the piece's square is off the board.
    #[inline]
    pub fn place(&mut self, piece: Piece) -> Option<Piece> {
        assert!(piece.current.is_okay(), "{} is off the board", piece.current);
        self.data[PieceLocations::index(piece.current)].replace(piece)
    }

    /// Removes and returns the piece at `at`.
    #[inline]
    pub fn remove(&mut self, at: Coordinate) -> Option<Piece> {
        if !at.is_okay() {
            return None;
        }
        self.data[PieceLocations::index(at)].take()
    }

    /// Moves the piece at `from` to `to`, marking it as moved. Anything standing on `to` is
    /// overwritten. Returns the piece in its new position.
    pub fn move_piece(&mut self, from: Coordinate, to: Coordinate) -> Option<Piece> {
        if !to.is_okay() {
            return None;
        }
        let mut piece = self.remove(from)?;
        piece.current = to;
        piece.moved = true;
        self.place(piece);
        Some(piece)
    }

    /// A copy of these locations with the square `at` emptied.
    pub fn without(&self, at: Coordinate) -> PieceLocations {
        let mut copy = self.clone();
        copy.remove(at);
        copy
    }

    /// Iterates over every piece, rank by rank from a1.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.data.iter().filter_map(|p| p.as_ref())
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.iter().filter(move |p| p.color == color)
    }

    /// Returns the king of `color`, if it is on the board.
    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.pieces_of(color).find(|p| p.kind == PieceType::King)
    }

    /// Number of pieces on the board.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_board_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// The rank step a pawn of `color` advances by.
    #[inline]
    pub fn forward(&self, color: Color) -> i8 {
        if color == self.bottom {
            1
        } else {
            -1
        }
    }

    /// The rank the pieces of `color` start on.
    #[inline]
    pub fn home_rank(&self, color: Color) -> i8 {
        if color == self.bottom {
            0
        } else {
            BOARD_SIZE - 1
        }
    }

    /// The rank the pawns of `color` start on.
    #[inline]
    pub fn pawn_start_rank(&self, color: Color) -> i8 {
        self.home_rank(color) + self.forward(color)
    }

    /// The rank a pawn of `color` promotes on.
    #[inline]
    pub fn promotion_rank(&self, color: Color) -> i8 {
        self.home_rank(color.other())
    }

    /// Walks from `piece` in `direction` until leaving the board or meeting a piece.
    ///
    /// Empty squares become plain moves. A blocking enemy becomes an attack, unless it is the
    /// king, which is never a destination. A blocking friend ends the ray.
    pub fn ray_destinations(&self, piece: &Piece, direction: Direction) -> Vec<Destination> {
        let mut moves = Vec::new();
        let mut at = piece.current.in_direction(direction);
        while at.is_okay() {
            match self.piece_at(at) {
                None => moves.push(Destination::new(at, MoveKind::Move)),
                Some(other) => {
                    if other.color != piece.color && other.kind != PieceType::King {
                        moves.push(Destination::new(at, MoveKind::Attack));
                    }
                    break;
                }
            }
            at = at.in_direction(direction);
        }
        moves
    }

    /// Squares threatened by `piece` along `direction`.
    ///
    /// The first blocker is included, whatever its color. The opposing king does not block, so a
    /// king in check cannot step back along the line it is attacked on.
    pub fn attack_ray(&self, piece: &Piece, direction: Direction) -> Vec<Coordinate> {
        let mut attacked = Vec::new();
        let mut at = piece.current.in_direction(direction);
        while at.is_okay() {
            attacked.push(at);
            match self.piece_at(at) {
                Some(other) if other.kind == PieceType::King && other.color != piece.color => {}
                Some(_) => break,
                None => {}
            }
            at = at.in_direction(direction);
        }
        attacked
    }

    /// Pieces of color `by` that attack the square `at`.
    pub fn attackers_of(&self, at: Coordinate, by: Color) -> Vec<Piece> {
        self.pieces_of(by)
            .filter(|p| p.attacked_squares(self).contains(&at))
            .copied()
            .collect()
    }

    /// Returns if any piece of color `by` attacks the square `at`.
    pub fn is_attacked(&self, at: Coordinate, by: Color) -> bool {
        self.pieces_of(by)
            .any(|p| p.attacked_squares(self).contains(&at))
    }

    /// Every square attacked by a piece of `color`, without duplicates, in board order.
    pub fn attacked_by(&self, color: Color) -> Vec<Coordinate> {
        let mut seen = [false; SQUARE_CNT];
        for piece in self.pieces_of(color) {
            for at in piece.attacked_squares(self) {
                seen[PieceLocations::index(at)] = true;
            }
        }
        (0..SQUARE_CNT)
            .filter(|i| seen[*i])
            .map(|i| Coordinate::new((i % 8) as i8, (i / 8) as i8))
            .collect()
    }

    /// Enemy pieces, other than the king, attacking the king of `color`. Empty when `color`
    /// has no king on the board.
    pub fn checkers(&self, color: Color) -> Vec<Piece> {
        match self.king(color) {
            Some(king) => self
                .attackers_of(king.current, color.other())
                .into_iter()
                .filter(|p| p.kind != PieceType::King)
                .collect(),
            None => Vec::new(),
        }
    }
}

impl fmt::Display for PieceLocations {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in (0..BOARD_SIZE).rev() {
            for file in 0..BOARD_SIZE {
                let c = self
                    .piece_at(Coordinate::new(file, rank))
                    .map_or('-', |p| p.fen_char());
                write!(f, "{} ", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for PieceLocations {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}
