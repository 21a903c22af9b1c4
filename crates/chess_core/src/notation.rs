//! Algebraic squares, coordinate moves ("e7e8q") and FEN positions.

use std::fmt;

use thiserror::Error;

use crate::{board::Board, types::*};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("invalid square '{0}'")]
    InvalidSquare(String),
    #[error("invalid move '{0}'")]
    InvalidMove(String),
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        write!(f, "{file}{rank}")
    }
}

impl std::str::FromStr for Square {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 || !(b'a'..=b'h').contains(&b[0]) || !(b'1'..=b'8').contains(&b[1]) {
            return Err(NotationError::InvalidSquare(s.to_string()));
        }
        Ok(Square::new(b'8' - b[1], b[0] - b'a'))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion() {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}

/// Splits "e2e4" / "e7e8q" into squares and an optional promotion kind.
/// Flags are not inferred here; see [`Board::build_move`].
pub fn parse_coord_move(txt: &str) -> Result<(Square, Square, Option<PieceKind>), NotationError> {
    let bad = || NotationError::InvalidMove(txt.to_string());
    if !txt.is_ascii() || !(4..=5).contains(&txt.len()) {
        return Err(bad());
    }
    let from: Square = txt[0..2].parse().map_err(|_| bad())?;
    let to: Square = txt[2..4].parse().map_err(|_| bad())?;
    let promo = match txt[4..].chars().next() {
        None => None,
        Some(ch) => Some(PieceKind::from_letter(ch).ok_or_else(bad)?),
    };
    Ok((from, to, promo))
}

impl Board {
    /// Reads piece placement, side to move and castling rights. Remaining
    /// fields (en passant, clocks) are accepted and ignored.
    pub fn from_fen(fen: &str) -> Result<Self, NotationError> {
        let bad = |why: &str| NotationError::InvalidFen(format!("{why} in '{fen}'"));
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 3 {
            return Err(bad("expected at least 3 fields"));
        }

        let mut board = Board::empty();
        let rows: Vec<&str> = parts[0].split('/').collect();
        if rows.len() != 8 {
            return Err(bad("expected 8 ranks"));
        }
        // FEN lists rank 8 first, which is row 0 in storage order.
        for (row, row_str) in rows.iter().enumerate() {
            let mut col: u8 = 0;
            for ch in row_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as u8;
                } else {
                    let kind = PieceKind::from_letter(ch).ok_or_else(|| bad("unknown piece"))?;
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if col >= 8 {
                        return Err(bad("too many files"));
                    }
                    board.set_piece(Square::new(row as u8, col), Some(Piece::new(color, kind)));
                    col += 1;
                }
                if col > 8 {
                    return Err(bad("too many files"));
                }
            }
            if col != 8 {
                return Err(bad("not enough files"));
            }
        }

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(bad("bad side to move")),
        };

        if parts[2] != "-" {
            for ch in parts[2].chars() {
                let (color, side) = match ch {
                    'K' => (Color::White, CastleSide::Kingside),
                    'Q' => (Color::White, CastleSide::Queenside),
                    'k' => (Color::Black, CastleSide::Kingside),
                    'q' => (Color::Black, CastleSide::Queenside),
                    _ => return Err(bad("bad castling field")),
                };
                board.castling.grant(color, side);
            }
        }

        Ok(board)
    }

    /// FEN with en passant always `-` and clocks fixed at `0 1`.
    pub fn to_fen(&self) -> String {
        let mut out = String::new();
        for row in 0..8u8 {
            let mut empty = 0;
            for col in 0..8u8 {
                match self.piece_at(Square::new(row, col)) {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }

        out.push_str(match self.side_to_move {
            Color::White => " w ",
            Color::Black => " b ",
        });

        let mut castle = String::new();
        for (color, side, ch) in [
            (Color::White, CastleSide::Kingside, 'K'),
            (Color::White, CastleSide::Queenside, 'Q'),
            (Color::Black, CastleSide::Kingside, 'k'),
            (Color::Black, CastleSide::Queenside, 'q'),
        ] {
            if self.castling.allows(color, side) {
                castle.push(ch);
            }
        }
        if castle.is_empty() {
            castle.push('-');
        }
        out.push_str(&castle);
        out.push_str(" - 0 1");
        out
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
