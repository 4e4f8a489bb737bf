extern crate chess_rules;

use chess_rules::board::events::{BoardEvent, DrawReason, GameStatus};
use chess_rules::board::fen::Orientation;
use chess_rules::board::Board;
use chess_rules::core::coordinate::Coordinate;
use chess_rules::core::piece_move::MoveKind;
use chess_rules::core::*;
use chess_rules::{ChessError, ParseError};

fn at(s: &str) -> Coordinate {
    s.parse().unwrap()
}

fn play(board: &mut Board, from: &str, to: &str, kind: MoveKind) {
    board.apply_move(at(from), at(to), kind).unwrap();
}

#[test]
fn scholars_mate() {
    let mut board = Board::start_pos();
    play(&mut board, "e2", "e4", MoveKind::Move);
    play(&mut board, "e7", "e5", MoveKind::Move);
    play(&mut board, "f1", "c4", MoveKind::Move);
    play(&mut board, "b8", "c6", MoveKind::Move);
    play(&mut board, "d1", "h5", MoveKind::Move);
    play(&mut board, "g8", "f6", MoveKind::Move);
    let outcome = board.apply_move(at("h5"), at("f7"), MoveKind::Attack).unwrap();

    assert_eq!(outcome.king_state, Some(KingState::CheckMated));
    assert_eq!(outcome.draw, None);
    let captured = outcome.captured();
    assert_eq!(captured.len(), 1);
    assert_eq!((captured[0].kind, captured[0].color), (PieceType::Pawn, Color::Black));

    assert!(matches!(outcome.events[0], BoardEvent::PieceRemoved { by_promotion: false, .. }));
    assert!(matches!(outcome.events[1], BoardEvent::MoveApplied(_)));
    assert_eq!(
        outcome.events[2],
        BoardEvent::KingStateChanged { color: Color::Black, state: KingState::CheckMated }
    );
    assert_eq!(outcome.events[3], BoardEvent::TurnChanged(Color::Black));
    assert_eq!(outcome.events.len(), 4);

    let last = board.last_move().unwrap();
    assert_eq!(last.notation(), "Qh5xf7#");
    assert_eq!(last.king_state, KingState::CheckMated);
    assert_eq!(board.moves().len(), 7);
    assert_eq!(board.turn(), Color::Black);
    assert_eq!(board.status().unwrap(), GameStatus::Won { winner: Color::White });
    assert!(board.all_legal_moves(Color::Black).unwrap().is_empty());
}

#[test]
fn en_passant_capture() {
    let mut board = Board::start_pos();
    play(&mut board, "e2", "e4", MoveKind::Move);
    play(&mut board, "a7", "a6", MoveKind::Move);
    play(&mut board, "e4", "e5", MoveKind::Move);
    play(&mut board, "d7", "d5", MoveKind::Move);
    let outcome = board.apply_move(at("e5"), at("d6"), MoveKind::EnPassant).unwrap();

    assert!(board.piece_at(at("d5")).is_none());
    assert_eq!(board.piece_at(at("d6")).unwrap().color, Color::White);
    assert_eq!(board.count_piece(Color::Black, PieceType::Pawn), 7);
    assert_eq!(outcome.captured()[0].current, at("d5"));
    assert_eq!(board.last_move().unwrap().notation(), "e5xd6 e.p.");
}

#[test]
fn castling_moves_the_rook() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let outcome = board.apply_move(at("e1"), at("g1"), MoveKind::CastleKingSide).unwrap();
    assert_eq!(board.piece_at(at("g1")).unwrap().kind, PieceType::King);
    let rook = board.piece_at(at("f1")).unwrap();
    assert_eq!(rook.kind, PieceType::Rook);
    assert!(rook.moved);
    assert!(board.piece_at(at("h1")).is_none());
    assert_eq!(outcome.events.len(), 3);
    assert_eq!(board.moves().len(), 1);
    assert_eq!(board.last_move().unwrap().notation(), "O-O");

    board.apply_move(at("e8"), at("c8"), MoveKind::CastleQueenSide).unwrap();
    assert_eq!(board.piece_at(at("c8")).unwrap().kind, PieceType::King);
    assert_eq!(board.piece_at(at("d8")).unwrap().kind, PieceType::Rook);
    assert!(board.piece_at(at("a8")).is_none());
    assert_eq!(board.last_move().unwrap().notation(), "O-O-O");
    assert_eq!(board.fen(), "2kr3r/8/8/8/8/8/8/R4RK1 w - - 0 2");
}

#[test]
fn castling_with_black_at_bottom() {
    let fen = "R3K2R/8/8/8/8/8/8/r3k2r w KQkq - 0 1";
    let mut board = Board::from_fen_oriented(fen, Orientation::Fixed(Color::Black)).unwrap();
    assert!(board.can_castle(Color::White, CastleType::KingSide));
    assert!(board.can_castle(Color::Black, CastleType::QueenSide));

    board.apply_uci_move("e8g8").unwrap();
    assert_eq!(board.piece_at(at("f8")).unwrap().kind, PieceType::Rook);
    assert_eq!(board.last_move().unwrap().kind, MoveKind::CastleKingSide);

    board.apply_uci_move("e1c1").unwrap();
    assert_eq!(board.piece_at(at("d1")).unwrap().kind, PieceType::Rook);
    assert_eq!(board.last_move().unwrap().kind, MoveKind::CastleQueenSide);
}

#[test]
fn promotion_waits_for_choice() {
    let mut board = Board::from_fen("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let outcome = board.apply_move(at("b7"), at("b8"), MoveKind::PawnPromotion).unwrap();
    assert!(outcome.is_promotion_pending());
    assert_eq!(outcome.king_state, None);
    assert_eq!(board.turn(), Color::White);
    assert!(board.moves().is_empty());
    assert_eq!(board.status().unwrap(), GameStatus::AwaitingPromotion { color: Color::White });

    assert_eq!(
        board.apply_move(at("e1"), at("e2"), MoveKind::Move),
        Err(ChessError::PromotionPending { at: at("b8") })
    );
    assert_eq!(
        board.complete_promotion(PieceType::King),
        Err(ChessError::InvalidPromotion(PieceType::King))
    );
    assert!(board.pending_promotion().is_some());

    let outcome = board.complete_promotion(PieceType::Queen).unwrap();
    assert!(matches!(outcome.events[0], BoardEvent::PieceRemoved { by_promotion: true, .. }));
    assert!(matches!(outcome.events[1], BoardEvent::PieceAdded(_)));
    assert_eq!(outcome.king_state, Some(KingState::Checked));

    let queen = board.piece_at(at("b8")).unwrap();
    assert_eq!(queen.kind, PieceType::Queen);
    assert_eq!(queen.start, at("b7"));
    assert!(queen.moved);
    assert!(board.piece_at(at("b7")).is_none());

    let last = board.last_move().unwrap();
    assert_eq!(last.piece.kind, PieceType::Pawn);
    assert_eq!(last.promoted, Some(PieceType::Queen));
    assert_eq!(last.notation(), "b8=Q+");
    assert_eq!(board.turn(), Color::Black);
    assert_eq!(board.complete_promotion(PieceType::Queen), Err(ChessError::NoPromotionPending));
}

#[test]
fn promotion_with_capture_in_one_call() {
    let mut board = Board::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let outcome = board.apply_uci_move("a7b8n").unwrap();
    assert_eq!(board.count_piece(Color::Black, PieceType::Rook), 0);
    assert_eq!(board.piece_at(at("b8")).unwrap().kind, PieceType::Knight);
    assert_eq!(outcome.captured().len(), 1);
    assert!(outcome.applied().is_some());
    assert_eq!(board.last_move().unwrap().notation(), "a7xb8=N");
    assert_eq!(board.turn(), Color::Black);
}

#[test]
fn insufficient_material() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/3r4/4K3 w - - 0 1").unwrap();
    let outcome = board.apply_move(at("e1"), at("d2"), MoveKind::Attack).unwrap();
    assert_eq!(outcome.draw, Some(DrawReason::InsufficientMaterial));
    assert_eq!(outcome.events.last(), Some(&BoardEvent::Drawn(DrawReason::InsufficientMaterial)));
    assert_eq!(board.status().unwrap(), GameStatus::Drawn(DrawReason::InsufficientMaterial));

    let mut board = Board::from_fen("4k3/8/8/8/8/8/3r4/4KB2 w - - 0 1").unwrap();
    let outcome = board.apply_move(at("e1"), at("d2"), MoveKind::Attack).unwrap();
    assert_eq!(outcome.draw, Some(DrawReason::InsufficientMaterial));

    let mut board = Board::from_fen("4k3/8/8/8/8/8/3r4/4KR2 w - - 0 1").unwrap();
    let outcome = board.apply_move(at("e1"), at("d2"), MoveKind::Attack).unwrap();
    assert_eq!(outcome.draw, None);
    assert!(!board.is_insufficient_material());
}

#[test]
fn stalemate() {
    let mut board = Board::from_fen("7k/5K2/8/6Q1/8/8/8/8 w - - 0 1").unwrap();
    let outcome = board.apply_move(at("g5"), at("g6"), MoveKind::Move).unwrap();
    assert_eq!(outcome.king_state, Some(KingState::StaleMated));
    assert_eq!(outcome.draw, Some(DrawReason::Stalemate));
    assert_eq!(board.last_move().unwrap().notation(), "Qg5g6");
    assert_eq!(board.status().unwrap(), GameStatus::Drawn(DrawReason::Stalemate));
}

#[test]
fn rejected_moves_leave_board_untouched() {
    let mut board = Board::start_pos();
    let before = board.clone();

    assert_eq!(
        board.apply_move(at("e7"), at("e5"), MoveKind::Move),
        Err(ChessError::WrongTurn(Color::Black))
    );
    assert_eq!(
        board.apply_move(at("e3"), at("e4"), MoveKind::Move),
        Err(ChessError::NoPieceAt(at("e3")))
    );
    assert_eq!(
        board.apply_move(at("e2"), at("e5"), MoveKind::Move),
        Err(ChessError::IllegalMove { from: at("e2"), to: at("e5"), kind: MoveKind::Move })
    );
    assert_eq!(
        board.apply_move(at("e2"), at("e4"), MoveKind::Attack),
        Err(ChessError::IllegalMove { from: at("e2"), to: at("e4"), kind: MoveKind::Attack })
    );
    assert_eq!(board, before);
}

#[test]
fn uci_moves() {
    let mut board = Board::start_pos();
    let unreadable = |s: &str| ChessError::Parse(ParseError::UnreadableMove { input: s.to_string() });
    assert_eq!(board.apply_uci_move("e2"), Err(unreadable("e2")));
    assert_eq!(board.apply_uci_move("z9e4"), Err(unreadable("z9e4")));
    assert_eq!(board.apply_uci_move("e2e4k"), Err(unreadable("e2e4k")));
    assert!(matches!(board.apply_uci_move("e2e4q"), Err(ChessError::IllegalMove { .. })));

    let outcome = board.apply_uci_move("g1f3").unwrap();
    assert_eq!(outcome.applied().unwrap().to, at("f3"));
    assert_eq!(board.apply_uci_move("e2e4"), Err(ChessError::WrongTurn(Color::White)));
}
