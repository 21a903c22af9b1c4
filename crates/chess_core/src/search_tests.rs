use super::*;
use crate::{
    movegen::legal_moves,
    types::{MoveFlag, PieceKind, Square},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn board(fen: &str) -> Board {
    Board::from_fen(fen).unwrap()
}

#[test]
fn test_choose_move_start_position() {
    let b = Board::startpos();
    let mut rng = StdRng::seed_from_u64(7);
    let result = choose_move(&b, Color::White, DEFAULT_DEPTH, &mut rng).unwrap();

    let dests = legal_moves(&b, result.best_move.from);
    assert!(dests.contains(&result.best_move.to));
    assert_eq!(result.score, 0);
    // Every opening move ties at depth 2.
    assert_eq!(result.tied, 20);
    assert!(result.nodes > 20);
}

#[test]
fn test_takes_hanging_queen() {
    // Rxd5 wins a queen nothing defends; no other move comes close.
    let b = board("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1");
    for seed in 0..8 {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = choose_move(&b, Color::White, 2, &mut rng).unwrap();
        assert_eq!(result.best_move.from, sq("d1"));
        assert_eq!(result.best_move.to, sq("d5"));
        assert_eq!(result.tied, 1);
        assert_eq!(result.score, 5);
    }
}

#[test]
fn test_finds_mate_in_one() {
    // Back-rank mate: Re8#.
    let b = board("6k1/5ppp/8/8/8/8/8/4R1K1 w - - 0 1");
    let mut rng = StdRng::seed_from_u64(1);
    let result = choose_move(&b, Color::White, 2, &mut rng).unwrap();
    assert_eq!(result.best_move.to, sq("e8"));
    assert_eq!(result.score, MATE_SCORE);
}

#[test]
fn test_black_searches_for_itself() {
    let b = board("3rk3/8/8/3Q4/8/8/8/4K3 b - - 0 1");
    let mut rng = StdRng::seed_from_u64(3);
    let result = choose_move(&b, Color::Black, 2, &mut rng).unwrap();
    assert_eq!(result.best_move.from, sq("d8"));
    assert_eq!(result.best_move.to, sq("d5"));
}

#[test]
fn test_no_move_available() {
    let mated = board("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    let mut rng = StdRng::seed_from_u64(0);
    assert!(choose_move(&mated, Color::White, 2, &mut rng).is_none());

    let stalemated = board("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert!(choose_move(&stalemated, Color::Black, 2, &mut rng).is_none());
}

#[test]
fn test_score_matches_independent_minimax() {
    let fens = [
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4",
        "4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1",
    ];
    for fen in fens {
        let b = board(fen);
        let color = b.side_to_move;
        let mut rng = StdRng::seed_from_u64(11);
        let result = choose_move(&b, color, 2, &mut rng).unwrap();

        let mut work = b.clone();
        let mut nodes = 0;
        let best = all_legal_moves(&mut work, color)
            .into_iter()
            .map(|mv| {
                let snap = work.snapshot();
                work.apply(mv);
                let s = minimax(&mut work, 1, color.other(), color, &mut nodes);
                work.restore(&snap);
                s
            })
            .max()
            .unwrap();
        assert_eq!(result.score, best, "{fen}");
        assert_eq!(
            score_root_move(&mut work, result.best_move, color, 2, &mut nodes),
            best
        );
        assert_eq!(work, b);
    }
}

#[test]
fn test_engine_always_promotes_to_queen() {
    let b = board("7k/P7/8/8/8/8/8/K7 w - - 0 1");
    let mut rng = StdRng::seed_from_u64(5);
    let result = choose_move(&b, Color::White, 2, &mut rng).unwrap();
    assert_eq!(result.best_move.from, sq("a7"));
    assert_eq!(
        result.best_move.flag,
        MoveFlag::Promotion(Some(PieceKind::Queen))
    );
}

#[test]
fn test_search_leaves_board_untouched() {
    let b = board("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
    let before = b.clone();
    let mut rng = StdRng::seed_from_u64(9);
    choose_move(&b, Color::White, 1, &mut rng).unwrap();
    assert_eq!(b, before);
}

#[test]
fn test_leaf_is_material() {
    let mut b = board("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1");
    let mut nodes = 0;
    assert_eq!(minimax(&mut b, 0, Color::White, Color::White, &mut nodes), -4);
    assert_eq!(minimax(&mut b, 0, Color::White, Color::Black, &mut nodes), 4);
    assert_eq!(nodes, 2);
}
