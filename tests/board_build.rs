extern crate chess_rules;

use chess_rules::board::Board;
use chess_rules::core::coordinate::Coordinate;
use chess_rules::core::*;
use chess_rules::pieces::Piece;
use chess_rules::ChessError;

fn at(s: &str) -> Coordinate {
    s.parse().unwrap()
}

#[test]
fn test_init_counts() {
    let board = Board::start_pos();
    for &color in ALL_COLORS.iter() {
        assert_eq!(board.count_piece(color, PieceType::Pawn), 8);
        assert_eq!(board.count_piece(color, PieceType::Knight), 2);
        assert_eq!(board.count_piece(color, PieceType::Bishop), 2);
        assert_eq!(board.count_piece(color, PieceType::Rook), 2);
        assert_eq!(board.count_piece(color, PieceType::Queen), 1);
        assert_eq!(board.count_piece(color, PieceType::King), 1);
        assert_eq!(board.material(color), 8 + 6 + 6 + 10 + 8);
    }
    assert_eq!(board.pieces().len(), 32);
    assert!(board.moves().is_empty());
    assert!(board.pieces().iter().all(|p| !p.moved && p.start == p.current));
}

#[test]
fn test_tiles() {
    let board = Board::start_pos();
    let tiles = board.tiles();
    assert_eq!(tiles.len(), 64);
    assert_eq!(tiles[0].coordinate, at("a1"));
    assert!(tiles[0].is_dark());
    assert_eq!(tiles[63].coordinate, at("h8"));

    let flipped = Board::start_pos_with(Color::Black);
    assert_eq!(flipped.tiles()[0].coordinate, at("h8"));
    assert_eq!(flipped.tiles()[63].coordinate, at("a1"));
}

#[test]
fn test_black_bottom_layout() {
    let board = Board::start_pos_with(Color::Black);
    assert_eq!(board.bottom(), Color::Black);
    assert_eq!(board.turn(), Color::White);
    for file in 0..8 {
        let black_pawn = board.piece_at(Coordinate::new(file, 1)).unwrap();
        assert_eq!((black_pawn.kind, black_pawn.color), (PieceType::Pawn, Color::Black));
        let white_pawn = board.piece_at(Coordinate::new(file, 6)).unwrap();
        assert_eq!((white_pawn.kind, white_pawn.color), (PieceType::Pawn, Color::White));
    }
    // the white pawns walk down the board
    let moves = board.legal_positions(at("e7")).unwrap();
    let targets: Vec<Coordinate> = moves.iter().map(|d| d.to).collect();
    assert_eq!(targets, vec![at("e6"), at("e5")]);
}

#[test]
fn test_custom_pieces() {
    let pieces = vec![
        Piece::new(PieceType::King, Color::White, at("a1")),
        Piece::new(PieceType::King, Color::Black, at("h8")),
        Piece::new(PieceType::Rook, Color::White, at("b7")).with_moved(true),
    ];
    let board = Board::with_pieces(Color::White, Color::Black, pieces).unwrap();
    assert_eq!(board.turn(), Color::Black);
    assert_eq!(board.pieces().len(), 3);
    assert!(board.piece_at(at("b7")).unwrap().moved);
    assert!(board.piece_at(at("c3")).is_none());
    assert_eq!(board.king(Color::Black).unwrap().current, at("h8"));
}

#[test]
fn test_empty_board() {
    let board = Board::new(Color::White);
    assert!(board.pieces().is_empty());
    assert_eq!(board.legal_positions(at("e2")), Err(ChessError::NoPieceAt(at("e2"))));
    assert!(board.pseudo_legal_moves(at("e2")).is_empty());
    assert!(!board.is_insufficient_material());
}

#[test]
fn test_pretty_string() {
    let board = Board::start_pos();
    let pretty = board.pretty_string();
    let lines: Vec<&str> = pretty.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0].trim_end(), "r n b q k b n r");
    assert_eq!(lines[7].trim_end(), "R N B Q K B N R");

    let flipped = Board::start_pos_with(Color::Black).pretty_string();
    let lines: Vec<&str> = flipped.lines().collect();
    assert_eq!(lines[0].trim_end(), "R N B Q K B N R");
    assert_eq!(lines[7].trim_end(), "r n b q k b n r");
}
