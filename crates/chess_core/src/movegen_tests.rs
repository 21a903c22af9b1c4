use super::*;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn board(fen: &str) -> Board {
    Board::from_fen(fen).unwrap()
}

fn sorted(mut v: Vec<Square>) -> Vec<Square> {
    v.sort();
    v
}

#[test]
fn test_startpos_moves() {
    let mut b = Board::startpos();
    // Starting position has 20 legal moves
    assert_eq!(all_legal_moves(&mut b, Color::White).len(), 20);
    assert_eq!(all_legal_moves(&mut b, Color::Black).len(), 20);
    assert_eq!(b, Board::startpos());
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let mut b = board("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
    assert_eq!(all_legal_moves(&mut b, Color::White).len(), 48);
}

#[test]
fn test_king_pawn_double_step() {
    let b = Board::startpos();
    let dests = legal_moves(&b, sq("e2"));
    assert!(dests.contains(&sq("e3")));
    assert!(dests.contains(&sq("e4")));
    assert!(!dests.contains(&sq("e5")));
    assert_eq!(dests.len(), 2);
}

#[test]
fn test_pawn_double_step_needs_both_squares_empty() {
    let b = board("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
    assert!(legal_moves(&b, sq("e2")).is_empty());

    let b = board("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1");
    assert_eq!(legal_moves(&b, sq("e2")), vec![sq("e3")]);
}

#[test]
fn test_pawn_captures_only_enemies() {
    let b = board("4k3/8/8/3p1P2/4P3/8/8/4K3 w - - 0 1");
    let dests = sorted(legal_moves(&b, sq("e4")));
    assert_eq!(dests, sorted(vec![sq("e5"), sq("d5")]));
}

#[test]
fn test_no_en_passant() {
    // Black just played d7-d5 next to the e5 pawn; capturing on d6 is not offered.
    let b = board("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    assert_eq!(legal_moves(&b, sq("e5")), vec![sq("e6")]);
}

#[test]
fn test_enemy_king_is_never_a_destination() {
    let b = board("8/8/8/8/8/8/8/k6R w - - 0 1");
    let dests = pseudo_moves(&b, sq("h1"));
    assert!(!dests.contains(&sq("a1")));
    assert!(dests.contains(&sq("b1")));
}

#[test]
fn test_slider_stops_at_first_piece() {
    let b = board("4k3/8/8/8/r2R3P/8/8/4K3 w - - 0 1");
    let dests = legal_moves(&b, sq("d4"));
    assert!(dests.contains(&sq("a4")));
    assert!(dests.contains(&sq("g4")));
    assert!(!dests.contains(&sq("h4")));
    assert!(dests.contains(&sq("d8")));
    assert!(dests.contains(&sq("d1")));
    assert_eq!(dests.len(), 13);
}

#[test]
fn test_pinned_piece_cannot_leave_the_line() {
    // The e4 knight shields its king from the e8 rook.
    let b = board("4r1k1/8/8/8/4N3/8/8/4K3 w - - 0 1");
    assert!(legal_moves(&b, sq("e4")).is_empty());
    assert!(!pseudo_moves(&b, sq("e4")).is_empty());
}

#[test]
fn test_king_cannot_step_into_attack() {
    let b = board("4k3/8/8/8/8/8/r7/4K3 w - - 0 1");
    let dests = sorted(legal_moves(&b, sq("e1")));
    assert_eq!(dests, sorted(vec![sq("d1"), sq("f1")]));
}

#[test]
fn test_single_escape_is_capturing_the_checker() {
    // The undefended queen on g2 checks; Kxg2 is the only legal move.
    let mut b = board("k7/8/8/8/8/8/6qP/7K w - - 0 1");
    assert_eq!(legal_moves(&b, sq("h1")), vec![sq("g2")]);
    assert_eq!(all_legal_moves(&mut b, Color::White).len(), 1);
}

#[test]
fn test_legal_moves_leave_board_untouched() {
    let b = board("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
    let mut work = b.clone();
    let mut out = Vec::new();
    for (from, _) in b.pieces(Color::White) {
        legal_moves_into(&mut work, from, &mut out);
        assert_eq!(work, b);
    }
}

#[test]
fn test_every_legal_move_keeps_own_king_safe() {
    let positions = [
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
        "rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2",
    ];
    for fen in positions {
        let mut b = board(fen);
        let side = b.side_to_move;
        for mv in all_legal_moves(&mut b, side) {
            let snap = b.snapshot();
            b.apply(mv);
            assert!(!in_check(&b, side), "{mv} leaves the king in check in {fen}");
            b.restore(&snap);
        }
    }
}

// =============================================================================
// Castling
// =============================================================================

const CASTLE_READY: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

#[test]
fn test_castling_offered_when_all_prerequisites_hold() {
    let b = board(CASTLE_READY);
    let dests = legal_moves(&b, sq("e1"));
    assert!(dests.contains(&sq("g1")));
    assert!(dests.contains(&sq("c1")));
}

#[test]
fn test_castling_withdrawn_once_rook_has_moved() {
    let mut b = board(CASTLE_READY);
    b.castling.mark_rook_moved(Color::White, CastleSide::Kingside);
    let dests = legal_moves(&b, sq("e1"));
    assert!(!dests.contains(&sq("g1")));
    assert!(dests.contains(&sq("c1")));
}

#[test]
fn test_castling_withdrawn_once_king_has_moved() {
    let mut b = board(CASTLE_READY);
    b.castling.mark_king_moved(Color::White);
    let dests = legal_moves(&b, sq("e1"));
    assert!(!dests.contains(&sq("g1")));
    assert!(!dests.contains(&sq("c1")));
}

#[test]
fn test_castling_needs_rook_on_corner() {
    let b = board("r3k2r/8/8/8/8/8/8/R3K3 w KQkq - 0 1");
    assert!(!legal_moves(&b, sq("e1")).contains(&sq("g1")));
}

#[test]
fn test_castling_needs_empty_path() {
    let b = board("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1");
    let dests = legal_moves(&b, sq("e1"));
    assert!(!dests.contains(&sq("g1")));
    assert!(!dests.contains(&sq("c1")));
}

#[test]
fn test_castling_not_out_of_check() {
    let b = board("r3k2r/8/8/8/8/8/4r3/R3K2R w KQkq - 0 1");
    let dests = legal_moves(&b, sq("e1"));
    assert!(!dests.contains(&sq("g1")));
    assert!(!dests.contains(&sq("c1")));
}

#[test]
fn test_castling_not_through_attacked_square() {
    // Black rook on f8 covers f1, the square the king passes on the kingside.
    let b = board("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let dests = legal_moves(&b, sq("e1"));
    assert!(!dests.contains(&sq("g1")));
    assert!(dests.contains(&sq("c1")));
}

#[test]
fn test_castling_not_into_attacked_square() {
    let b = board("4k1r1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(!legal_moves(&b, sq("e1")).contains(&sq("g1")));
}

#[test]
fn test_queenside_b_file_may_be_attacked() {
    // b1 must be empty but may be attacked; only e1, d1 and c1 matter.
    let b = board("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
    assert!(legal_moves(&b, sq("e1")).contains(&sq("c1")));
}
