use super::*;

fn board(fen: &str) -> Board {
    Board::from_fen(fen).unwrap()
}

fn outcome(fen: &str) -> GameOutcome {
    let mut b = board(fen);
    let side = b.side_to_move;
    classify(&mut b, side)
}

#[test]
fn test_startpos_is_ongoing() {
    let mut b = Board::startpos();
    assert_eq!(classify(&mut b, Color::White), GameOutcome::Ongoing);
    assert_eq!(classify(&mut b, Color::Black), GameOutcome::Ongoing);
}

#[test]
fn test_fools_mate_is_checkmate() {
    // 1.f3 e5 2.g4 Qh4#
    let fen = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";
    assert_eq!(outcome(fen), GameOutcome::Checkmate);
}

#[test]
fn test_check_with_single_escape_is_check() {
    assert_eq!(outcome("k7/8/8/8/8/8/6qP/7K w - - 0 1"), GameOutcome::Check);
}

#[test]
fn test_stalemate() {
    assert_eq!(outcome("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1"), GameOutcome::Stalemate);
    assert_eq!(outcome("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1"), GameOutcome::Stalemate);
}

#[test]
fn test_checkmate_beats_insufficient_material_check() {
    // Scholar's mate: in check, no moves, plenty of material.
    let fen = "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4";
    assert_eq!(outcome(fen), GameOutcome::Checkmate);
}

#[test]
fn test_bare_kings_draw_for_either_side() {
    let mut b = board("8/8/8/4k3/8/4K3/8/8 w - - 0 1");
    assert_eq!(classify(&mut b, Color::White), GameOutcome::DrawInsufficientMaterial);
    assert_eq!(classify(&mut b, Color::Black), GameOutcome::DrawInsufficientMaterial);
}

#[test]
fn test_insufficient_material_single_minor() {
    for fen in [
        "8/8/8/4k3/8/4KB2/8/8 w - - 0 1",
        "8/8/8/4k3/8/4KN2/8/8 w - - 0 1",
        "8/8/4b3/4k3/8/4K3/8/8 w - - 0 1",
        "8/8/4n3/4k3/8/4K3/8/8 w - - 0 1",
    ] {
        assert!(is_insufficient_material(&board(fen)), "{fen}");
    }
}

#[test]
fn test_sufficient_material() {
    for fen in [
        // pawn, rook, queen
        "8/8/8/4k3/8/4K3/4P3/8 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/4R3 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/4Q3 w - - 0 1",
        // two minors, same side or split
        "8/8/8/4k3/8/4K3/3NN3/8 w - - 0 1",
        "5b2/8/8/4k3/8/4K3/8/2B5 w - - 0 1",
        "8/8/4n3/4k3/8/4KB2/8/8 w - - 0 1",
    ] {
        assert!(!is_insufficient_material(&board(fen)), "{fen}");
    }
}

#[test]
fn test_check_is_reported_when_moves_remain() {
    let fen = "rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2";
    assert_eq!(outcome(fen), GameOutcome::Check);
}

#[test]
fn test_classify_leaves_board_untouched() {
    let mut b = board("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    let before = b.clone();
    classify(&mut b, Color::White);
    assert_eq!(b, before);
}
