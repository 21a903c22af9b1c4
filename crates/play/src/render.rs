//! Plain-text board and status output.

use chess_core::{Board, Color, GameOutcome, Square};
use game::{GameSession, StatusReport};

/// Draws the board from `view`'s side, marking `highlights` with `*`.
pub fn board_text(board: &Board, view: Color, highlights: &[Square]) -> String {
    let rows: Vec<u8> = match view {
        Color::White => (0..8).collect(),
        Color::Black => (0..8).rev().collect(),
    };
    let cols: Vec<u8> = match view {
        Color::White => (0..8).collect(),
        Color::Black => (0..8).rev().collect(),
    };

    let mut out = String::new();
    for &row in &rows {
        out.push_str(&format!("{} ", 8 - row));
        for &col in &cols {
            let sq = Square::new(row, col);
            let ch = match board.piece_at(sq) {
                Some(pc) => pc.fen_char(),
                None if highlights.contains(&sq) => '*',
                None => '.',
            };
            out.push(' ');
            out.push(ch);
        }
        out.push('\n');
    }
    out.push_str("  ");
    for &col in &cols {
        out.push(' ');
        out.push((b'a' + col) as char);
    }
    out.push('\n');
    out
}

pub fn status_line(status: &StatusReport) -> String {
    let side = color_name(status.side_to_move);
    if let Some(p) = status.pending_promotion {
        return format!("{} pawn on {} promotes to? [q/r/b/n]", color_name(p.color), p.square);
    }
    match status.outcome {
        GameOutcome::Ongoing => format!("{side} to move"),
        GameOutcome::Check => format!("{side} to move, in check"),
        GameOutcome::Checkmate => format!("checkmate, {} wins", color_name(status.side_to_move.other())),
        GameOutcome::Stalemate => "stalemate, draw".to_string(),
        GameOutcome::DrawInsufficientMaterial => "draw by insufficient material".to_string(),
    }
}

pub fn score_line(session: &GameSession) -> String {
    let (white, black) = session.scores();
    format!("captured material  white {white}  black {black}")
}

pub fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
