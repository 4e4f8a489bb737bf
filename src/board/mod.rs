//! This module contains [`Board`], the object representing the current state of a chessboard.
//! All modifications to the current state of the board are done through this object, as well as
//! gathering information about the current state of the board.
//!
//! This module also contains the structures used by the board: [`PieceLocations`] for looking up
//! pieces by square, the cosmetic [`Tile`]s, the [`BoardEvent`]s reported after each move, and
//! the FEN codec with its [`Castling`] rights.
//!
//! [`Board`]: struct.Board.html
//! [`PieceLocations`]: piece_locations/struct.PieceLocations.html
//! [`Tile`]: tiles/struct.Tile.html
//! [`BoardEvent`]: events/enum.BoardEvent.html
//! [`Castling`]: castle_rights/struct.Castling.html

pub mod castle_rights;
pub mod events;
pub mod fen;
pub mod piece_locations;
pub mod tiles;

use std::fmt;

use lazy_static::lazy_static;
use tracing::{debug, error, trace, warn};

use self::events::{BoardEvent, DrawReason, GameStatus, MoveOutcome};
use self::fen::Orientation;
use self::piece_locations::PieceLocations;
use self::tiles::Tile;
use crate::core::coordinate::Coordinate;
use crate::core::piece_move::{Destination, Move, MoveKind};
use crate::core::{CastleType, Color, KingState, PieceType, ALL_COLORS};
use crate::error::{ChessError, ParseError, Result};
use crate::pieces::king::King;
use crate::pieces::{between, MoveContext, Piece};

/// Piece types of the back rank, from the a-file to the h-file.
const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

lazy_static! {
    /// Opening layouts, built once. Nothing will ever be mutated in here.
    static ref START_WHITE_BOTTOM: PieceLocations = standard_layout(Color::White);
    static ref START_BLACK_BOTTOM: PieceLocations = standard_layout(Color::Black);
}

fn standard_layout(bottom: Color) -> PieceLocations {
    let mut locations = PieceLocations::blank(bottom);
    for &color in ALL_COLORS.iter() {
        let home = locations.home_rank(color);
        let pawns = locations.pawn_start_rank(color);
        for (file, kind) in BACK_RANK.iter().enumerate() {
            let file = file as i8;
            locations.place(Piece::new(*kind, color, Coordinate::new(file, home)));
            locations.place(Piece::new(PieceType::Pawn, color, Coordinate::new(file, pawns)));
        }
    }
    locations
}

/// A pawn standing still on its far-rank move, waiting for the piece it becomes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingPromotion {
    pub from: Coordinate,
    pub to: Coordinate,
    pub kind: MoveKind,
    /// The pawn as it stands on `from`.
    pub pawn: Piece,
}

/// Represents a Chessboard through a `Board`.
///
/// Board contains everything that needs to be known about the current state of the game: which
/// color sits at the bottom, whose turn it is, every piece and the log of applied moves.
///
/// # Examples
///
/// ```
/// use chess_rules::Board;
/// use chess_rules::core::piece_move::MoveKind;
///
/// let mut board = Board::start_pos();
/// let e2 = "e2".parse().unwrap();
/// let e4 = "e4".parse().unwrap();
///
/// board.apply_move(e2, e4, MoveKind::Move).unwrap();
/// assert_eq!(board.moves().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    turn: Color,
    tiles: Vec<Tile>,
    locations: PieceLocations,
    moves: Vec<Move>,
    pending: Option<PendingPromotion>,
}

impl Default for Board {
    fn default() -> Self {
        Board::start_pos()
    }
}

impl Board {
    /// Constructs a board with no pieces on it. White moves first.
    pub fn new(bottom: Color) -> Board {
        Board::from_parts(PieceLocations::blank(bottom), Color::White, Vec::new())
    }

    /// Constructs a board in the standard opening position, White at the bottom.
    pub fn start_pos() -> Board {
        Board::start_pos_with(Color::White)
    }

    /// Constructs a board in the standard opening position with `bottom` at the bottom.
    pub fn start_pos_with(bottom: Color) -> Board {
        let locations = match bottom {
            Color::White => START_WHITE_BOTTOM.clone(),
            Color::Black => START_BLACK_BOTTOM.clone(),
        };
        Board::from_parts(locations, Color::White, Vec::new())
    }

    /// Constructs a board from an arbitrary set of pieces.
    ///
    /// # Errors
    ///
    /// Returns `OffBoard` if a piece stands outside the board, and `SquareOccupied` if two pieces
    /// share a square.
    pub fn with_pieces<I>(bottom: Color, turn: Color, pieces: I) -> Result<Board>
    where
        I: IntoIterator<Item = Piece>,
    {
        let mut locations = PieceLocations::blank(bottom);
        for piece in pieces {
            if !locations.in_bounds(piece.current) {
                return Err(ChessError::OffBoard(piece.current));
            }
            if !locations.is_empty(piece.current) {
                return Err(ChessError::SquareOccupied(piece.current));
            }
            locations.place(piece);
        }
        Ok(Board::from_parts(locations, turn, Vec::new()))
    }

    /// Constructs a board from a FEN string, inferring the orientation.
    ///
    /// ```
    /// use chess_rules::Board;
    ///
    /// let board = Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    /// assert_eq!(board.pieces().len(), 32);
    /// ```
    pub fn from_fen(fen: &str) -> Result<Board> {
        fen::parse(fen, Orientation::Infer)
    }

    pub fn from_fen_oriented(fen: &str, orientation: Orientation) -> Result<Board> {
        fen::parse(fen, orientation)
    }

    /// Creates a FEN string of the board.
    pub fn fen(&self) -> String {
        fen::serialize(self)
    }

    pub(crate) fn from_parts(locations: PieceLocations, turn: Color, moves: Vec<Move>) -> Board {
        Board {
            turn,
            tiles: tiles::build(locations.bottom()),
            locations,
            moves,
            pending: None,
        }
    }

    pub(crate) fn set_last_king_state(&mut self, state: KingState) {
        if let Some(last) = self.moves.last_mut() {
            last.king_state = state;
        }
    }

    // ------- Accessors -------

    /// The color whose pieces start on ranks 1 and 2.
    #[inline]
    pub fn bottom(&self) -> Color {
        self.locations.bottom()
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The 64 squares. With Black at the bottom the order is reversed, h8 first.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    pub fn piece_locations(&self) -> &PieceLocations {
        &self.locations
    }

    /// A snapshot of every piece on the board.
    pub fn pieces(&self) -> Vec<Piece> {
        self.locations.iter().copied().collect()
    }

    #[inline]
    pub fn piece_at(&self, at: Coordinate) -> Option<Piece> {
        self.locations.piece_at(at).copied()
    }

    #[inline]
    pub fn king(&self, color: Color) -> Option<Piece> {
        self.locations.king(color).copied()
    }

    /// Number of pieces of a given color and type.
    pub fn count_piece(&self, color: Color, kind: PieceType) -> usize {
        self.locations
            .pieces_of(color)
            .filter(|p| p.kind == kind)
            .count()
    }

    /// Sum of the values of every piece of `color`.
    pub fn material(&self, color: Color) -> i32 {
        self.locations.pieces_of(color).map(|p| p.value()).sum()
    }

    /// Every move applied so far, oldest first.
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.moves.last()
    }

    #[inline]
    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.pending
    }

    fn context(&self) -> MoveContext {
        MoveContext {
            locations: &self.locations,
            last_move: self.moves.last(),
        }
    }

    // ------- Queries -------

    /// Pieces of the opponent, other than the king, attacking the king of `color`.
    pub fn checkers(&self, color: Color) -> Vec<Piece> {
        self.locations.checkers(color)
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        !self.checkers(color).is_empty()
    }

    /// Every square attacked by a piece of `color`.
    pub fn attacked_squares(&self, color: Color) -> Vec<Coordinate> {
        self.locations.attacked_by(color)
    }

    /// Moves of the piece at `at` before king-safety filtering. Empty if the square is empty.
    pub fn pseudo_legal_moves(&self, at: Coordinate) -> Vec<Destination> {
        match self.locations.piece_at(at) {
            Some(piece) => piece.pseudo_legal_moves(&self.context()),
            None => Vec::new(),
        }
    }

    /// Returns the legal destinations of the piece at `at`.
    ///
    /// A king's own moves already avoid attacked squares. Any other piece is checked for a pin by
    /// looking at the board with the piece lifted off it, and then for an existing check. En
    /// passant captures are verified by playing them out on a copy of the board.
    ///
    /// # Errors
    ///
    /// `NoPieceAt` if the square is empty. `InvariantViolation` if the own king is reported in
    /// check by no piece or by more than two.
    pub fn legal_positions(&self, at: Coordinate) -> Result<Vec<Destination>> {
        let piece = *self
            .locations
            .piece_at(at)
            .ok_or(ChessError::NoPieceAt(at))?;
        let candidates = piece.pseudo_legal_moves(&self.context());
        if piece.kind == PieceType::King {
            return Ok(candidates);
        }
        let king = match self.locations.king(piece.color) {
            Some(king) => *king,
            None => return Ok(candidates),
        };

        let (en_passant, ordinary): (Vec<Destination>, Vec<Destination>) = candidates
            .into_iter()
            .partition(|d| d.kind == MoveKind::EnPassant);

        let mut legal: Vec<Destination> = en_passant
            .into_iter()
            .filter(|d| self.en_passant_is_safe(&piece, d.to))
            .collect();
        legal.extend(self.restrict_to_king_safety(&piece, &king, ordinary)?);
        trace!(piece = %piece, count = legal.len(), "legal destinations");
        Ok(legal)
    }

    fn restrict_to_king_safety(
        &self,
        piece: &Piece,
        king: &Piece,
        candidates: Vec<Destination>,
    ) -> Result<Vec<Destination>> {
        let lifted = self.locations.without(piece.current);
        let pinners = lifted.checkers(piece.color);
        match pinners.len() {
            0 => {}
            1 => {
                trace!(piece = %piece, by = %pinners[0], "pinned or checked");
                return Ok(block_or_capture(&pinners[0], king, candidates));
            }
            _ => return Ok(Vec::new()),
        }

        let checkers = self.locations.checkers(piece.color);
        match checkers.len() {
            0 => Ok(candidates),
            1 => Ok(block_or_capture(&checkers[0], king, candidates)),
            2 => Ok(Vec::new()),
            n => {
                error!(king = %king.current, attackers = n, "impossible number of checking pieces");
                Err(ChessError::InvariantViolation {
                    king: king.current,
                    attackers: n,
                    context: "resolving check",
                })
            }
        }
    }

    fn en_passant_is_safe(&self, pawn: &Piece, to: Coordinate) -> bool {
        let mut after = self.locations.clone();
        after.remove(Coordinate::new(to.file, pawn.current.rank));
        after.move_piece(pawn.current, to);
        after.checkers(pawn.color).is_empty()
    }

    /// Every legal move of `color`, as (origin, destination) pairs in board order.
    pub fn all_legal_moves(&self, color: Color) -> Result<Vec<(Coordinate, Destination)>> {
        let origins: Vec<Coordinate> = self.locations.pieces_of(color).map(|p| p.current).collect();
        let mut moves = Vec::new();
        for from in origins {
            for dest in self.legal_positions(from)? {
                moves.push((from, dest));
            }
        }
        Ok(moves)
    }

    /// Returns if `color` has at least one legal move.
    pub fn has_legal_move(&self, color: Color) -> Result<bool> {
        for piece in self.locations.pieces_of(color) {
            if !self.legal_positions(piece.current)?.is_empty() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Returns if `color` may castle towards `side` right now.
    pub fn can_castle(&self, color: Color, side: CastleType) -> bool {
        match self.locations.king(color) {
            Some(king) => King::can_castle(king, side, &self.locations),
            None => false,
        }
    }

    /// Derives the state of the king of `color`.
    pub fn king_state(&self, color: Color) -> Result<KingState> {
        let in_check = self.is_in_check(color);
        let can_move = self.has_legal_move(color)?;
        Ok(match (in_check, can_move) {
            (true, false) => KingState::CheckMated,
            (false, false) => KingState::StaleMated,
            (true, true) => KingState::Checked,
            (false, true) => KingState::Normal,
        })
    }

    /// Returns if neither side can mate: only the kings remain, or the kings and a single
    /// bishop or knight.
    pub fn is_insufficient_material(&self) -> bool {
        match self.locations.len() {
            2 => true,
            3 => self
                .locations
                .iter()
                .any(|p| matches!(p.kind, PieceType::Bishop | PieceType::Knight)),
            _ => false,
        }
    }

    /// Where the game stands for the side to move.
    pub fn status(&self) -> Result<GameStatus> {
        if let Some(pending) = self.pending {
            return Ok(GameStatus::AwaitingPromotion { color: pending.pawn.color });
        }
        let status = match self.king_state(self.turn)? {
            KingState::CheckMated => GameStatus::Won { winner: self.turn.other() },
            KingState::StaleMated => GameStatus::Drawn(DrawReason::Stalemate),
            _ if self.is_insufficient_material() => {
                GameStatus::Drawn(DrawReason::InsufficientMaterial)
            }
            state => GameStatus::InProgress {
                to_move: self.turn,
                in_check: state.is_in_check(),
            },
        };
        Ok(status)
    }

    // ------- Mutation -------

    /// Applies a move of the piece on `from` to `to`.
    ///
    /// `kind` must match one of the piece's legal destinations. Captures remove the taken piece,
    /// castling brings the rook along, and a pawn reaching the far rank stops the move until
    /// [`complete_promotion`] names its replacement.
    ///
    /// # Errors
    ///
    /// `PromotionPending` while a promotion waits, `NoPieceAt`, `WrongTurn`, `IllegalMove`,
    /// and `MissingExpectedPiece` when the castling rook is not where it must be.
    ///
    /// [`complete_promotion`]: #method.complete_promotion
    pub fn apply_move(&mut self, from: Coordinate, to: Coordinate, kind: MoveKind) -> Result<MoveOutcome> {
        if let Some(pending) = self.pending {
            warn!(at = %pending.to, "move attempted while a promotion is pending");
            return Err(ChessError::PromotionPending { at: pending.to });
        }
        let piece = match self.locations.piece_at(from) {
            Some(piece) => *piece,
            None => {
                warn!(%from, "no piece to move");
                return Err(ChessError::NoPieceAt(from));
            }
        };
        if piece.color != self.turn {
            warn!(piece = %piece, turn = %self.turn, "moved out of turn");
            return Err(ChessError::WrongTurn(piece.color));
        }
        if !self.legal_positions(from)?.contains(&Destination::new(to, kind)) {
            warn!(%from, %to, ?kind, "illegal move rejected");
            return Err(ChessError::IllegalMove { from, to, kind });
        }

        let mut outcome = MoveOutcome::new();
        match kind {
            MoveKind::PawnPromotion | MoveKind::PawnPromotionWithAttack => {
                self.pending = Some(PendingPromotion { from, to, kind, pawn: piece });
                outcome.push(BoardEvent::PromotionPending { from, to, kind });
                debug!(%from, %to, "promotion pending");
                return Ok(outcome);
            }
            MoveKind::Attack => self.capture(to, &mut outcome),
            MoveKind::EnPassant => self.capture(Coordinate::new(to.file, from.rank), &mut outcome),
            MoveKind::CastleKingSide => self.castle_rook(&piece, CastleType::KingSide)?,
            MoveKind::CastleQueenSide => self.castle_rook(&piece, CastleType::QueenSide)?,
            MoveKind::Move => {}
        }
        self.locations.move_piece(from, to);

        let record = Move {
            from,
            to,
            piece,
            kind,
            king_state: KingState::Normal,
            promoted: None,
        };
        self.finish_move(record, outcome)
    }

    /// Finishes a pending promotion by replacing the pawn with a piece of type `choice`.
    ///
    /// # Errors
    ///
    /// `InvalidPromotion` unless `choice` is a queen, rook, bishop or knight, and
    /// `NoPromotionPending` if no pawn is waiting.
    pub fn complete_promotion(&mut self, choice: PieceType) -> Result<MoveOutcome> {
        if !choice.is_promotion_choice() {
            warn!(%choice, "invalid promotion choice");
            return Err(ChessError::InvalidPromotion(choice));
        }
        let pending = self.pending.take().ok_or(ChessError::NoPromotionPending)?;

        let mut outcome = MoveOutcome::new();
        if pending.kind == MoveKind::PawnPromotionWithAttack {
            self.capture(pending.to, &mut outcome);
        }
        if let Some(pawn) = self.locations.remove(pending.from) {
            outcome.push(BoardEvent::PieceRemoved { piece: pawn, by_promotion: true });
        }
        let promoted = Piece::new(choice, pending.pawn.color, pending.from);
        self.locations.place(promoted);
        outcome.push(BoardEvent::PieceAdded(promoted));
        self.locations.move_piece(pending.from, pending.to);

        let record = Move {
            from: pending.from,
            to: pending.to,
            piece: pending.pawn,
            kind: pending.kind,
            king_state: KingState::Normal,
            promoted: Some(choice),
        };
        self.finish_move(record, outcome)
    }

    /// Applies a move written in UCI long algebraic form, such as `e2e4` or `e7e8q`.
    ///
    /// The move kind is looked up among the legal destinations. A trailing promotion letter
    /// completes the promotion in the same call.
    pub fn apply_uci_move(&mut self, uci: &str) -> Result<MoveOutcome> {
        let unreadable = || ChessError::from(ParseError::UnreadableMove { input: uci.to_string() });
        if !uci.is_ascii() || !(4..=5).contains(&uci.len()) {
            return Err(unreadable());
        }
        let from = Coordinate::from_notation(&uci[0..2]).map_err(|_| unreadable())?;
        let to = Coordinate::from_notation(&uci[2..4]).map_err(|_| unreadable())?;
        let promotion = match uci[4..].chars().next() {
            None => None,
            Some(c) => match PieceType::from_fen_char(c) {
                Some((kind, _)) if kind.is_promotion_choice() => Some(kind),
                _ => return Err(unreadable()),
            },
        };

        let kind = self
            .legal_positions(from)
            .ok()
            .and_then(|legal| legal.iter().find(|d| d.to == to).map(|d| d.kind))
            .unwrap_or(MoveKind::Move);
        if promotion.is_some() && !kind.is_promotion() {
            warn!(uci, "promotion letter on a move that does not promote");
            return Err(ChessError::IllegalMove { from, to, kind });
        }

        let mut outcome = self.apply_move(from, to, kind)?;
        if let Some(choice) = promotion {
            let rest = self.complete_promotion(choice)?;
            outcome.events.extend(rest.events);
            outcome.king_state = rest.king_state;
            outcome.draw = rest.draw;
        }
        Ok(outcome)
    }

    fn capture(&mut self, at: Coordinate, outcome: &mut MoveOutcome) {
        if let Some(victim) = self.locations.remove(at) {
            outcome.push(BoardEvent::PieceRemoved { piece: victim, by_promotion: false });
        }
    }

    /// Moves the rook of a castling king. The rook lands on the square the king crosses.
    fn castle_rook(&mut self, king: &Piece, side: CastleType) -> Result<()> {
        let rook_from = king.current.offset(side.rook_offset(), 0);
        let rook_to = king.current.offset(side.file_step(), 0);
        match self.locations.piece_at(rook_from) {
            Some(rook) if rook.kind == PieceType::Rook && rook.color == king.color && !rook.moved => {}
            _ => {
                error!(at = %rook_from, ?side, "castling rook missing");
                return Err(ChessError::MissingExpectedPiece { at: rook_from, side });
            }
        }
        self.locations.move_piece(rook_from, rook_to);
        Ok(())
    }

    fn finish_move(&mut self, record: Move, mut outcome: MoveOutcome) -> Result<MoveOutcome> {
        let opponent = record.piece.color.other();
        self.moves.push(record);
        self.turn = opponent;

        let state = self.king_state(opponent)?;
        self.set_last_king_state(state);
        let logged = Move { king_state: state, ..record };

        let draw = if state == KingState::StaleMated {
            Some(DrawReason::Stalemate)
        } else if self.is_insufficient_material() {
            Some(DrawReason::InsufficientMaterial)
        } else {
            None
        };

        debug!(notation = %logged, ?state, "move applied");
        outcome.push(BoardEvent::MoveApplied(logged));
        outcome.push(BoardEvent::KingStateChanged { color: opponent, state });
        outcome.push(BoardEvent::TurnChanged(opponent));
        if let Some(reason) = draw {
            debug!(%reason, "game drawn");
            outcome.push(BoardEvent::Drawn(reason));
        }
        outcome.king_state = Some(state);
        outcome.draw = draw;
        Ok(outcome)
    }

    /// Returns a pretty String of the board, rank 8 on top, with `-` for empty squares.
    pub fn pretty_string(&self) -> String {
        self.locations.to_string()
    }
}

/// Keeps only the destinations that take `attacker` or stand between it and `king`.
fn block_or_capture(attacker: &Piece, king: &Piece, candidates: Vec<Destination>) -> Vec<Destination> {
    let line = between(attacker, king);
    candidates
        .into_iter()
        .filter(|d| d.to == attacker.current || line.contains(&d.to))
        .collect()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty_string())
    }
}
