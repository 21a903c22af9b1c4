//! Search cost by depth, to make the cost of unpruned minimax visible.
//!
//! Usage:
//!   cargo run --release --example search_bench -p chess_core -- [max_depth] [fen]
//!
//! Examples:
//!   # Default: depths 1..=3 over the built-in positions
//!   cargo run --release --example search_bench -p chess_core
//!
//!   # One position, up to depth 4 (expect this to take a while)
//!   cargo run --release --example search_bench -p chess_core -- 4 "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -"

use chess_core::{Board, choose_move};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::time::Instant;

const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
    ),
    ("Rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"),
];

fn main() {
    let args: Vec<String> = env::args().collect();
    let max_depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);

    if let Some(fen) = args.get(2) {
        run_position("custom", fen, max_depth);
    } else {
        for (name, fen) in TEST_POSITIONS {
            run_position(name, fen, max_depth);
        }
    }
}

fn run_position(name: &str, fen: &str, max_depth: u8) {
    let board = match Board::from_fen(fen) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("{name}: {e}");
            return;
        }
    };
    println!("=== {name} ===");

    let mut rng = StdRng::seed_from_u64(0);
    for depth in 1..=max_depth {
        let start = Instant::now();
        let Some(result) = choose_move(&board, board.side_to_move, depth, &mut rng) else {
            println!("no legal move");
            return;
        };
        let elapsed = start.elapsed();
        let nps = if elapsed.as_secs_f64() > 0.0 {
            result.nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };
        println!(
            "depth {depth}: {:>6} score {:>7} {:>12} nodes in {elapsed:>9.3?} ({nps:>10.0} nps)",
            result.best_move.to_string(),
            result.score,
            result.nodes
        );
    }
    println!();
}
