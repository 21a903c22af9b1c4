//! Parsing of the lines typed at the prompt.

use anyhow::{Result, anyhow, bail};
use chess_core::{Color, PieceKind, Square, parse_coord_move};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `e2 e4`, `e2e4`, or `e7e8q` to promote in one go
    Move {
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    },
    /// `e2` or `select e2`: show where a piece can go
    Select(Square),
    /// `to e4`: move the selected piece
    To(Square),
    /// `q`, `queen` or `promote q`
    Promote(PieceKind),
    /// `new`, `new black`
    NewGame(Option<Color>),
    Board,
    Status,
    Fen,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  e2 e4 | e2e4      move a piece (e7e8q promotes at once)
  e2 | select e2    show the legal destinations of a piece
  to e4             move the selected piece
  q | r | b | n     choose a promotion piece
  new [white|black] start over, optionally switching sides
  board | status | fen | help | quit";

/// Parses one input line. Blank lines give `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let words: Vec<String> = line.split_whitespace().map(str::to_lowercase).collect();
    let words: Vec<&str> = words.iter().map(String::as_str).collect();

    let cmd = match words.as_slice() {
        [] => return Ok(None),
        ["quit" | "exit"] => Command::Quit,
        ["help" | "?"] => Command::Help,
        ["board"] => Command::Board,
        ["status"] => Command::Status,
        ["fen"] => Command::Fen,
        ["new"] => Command::NewGame(None),
        ["new", color] => Command::NewGame(Some(parse_color(color)?)),
        ["promote", kind] | [kind @ ("q" | "r" | "b" | "n" | "queen" | "rook" | "bishop" | "knight")] => {
            Command::Promote(parse_promotion(kind)?)
        }
        ["select", sq] => Command::Select(sq.parse()?),
        ["to", sq] => Command::To(sq.parse()?),
        [from, to] => Command::Move {
            from: from.parse()?,
            to: to.parse()?,
            promotion: None,
        },
        [word] if word.len() == 2 => Command::Select(word.parse()?),
        [word] => {
            let (from, to, promotion) = parse_coord_move(word)?;
            Command::Move {
                from,
                to,
                promotion,
            }
        }
        _ => bail!("unrecognised input {line:?}, type help"),
    };
    Ok(Some(cmd))
}

pub fn parse_color(word: &str) -> Result<Color> {
    match word.to_lowercase().as_str() {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        other => bail!("unknown color {other:?}"),
    }
}

fn parse_promotion(word: &str) -> Result<PieceKind> {
    let kind = match word {
        "queen" => PieceKind::Queen,
        "rook" => PieceKind::Rook,
        "bishop" => PieceKind::Bishop,
        "knight" => PieceKind::Knight,
        _ => word
            .chars()
            .next()
            .filter(|_| word.len() == 1)
            .and_then(PieceKind::from_letter)
            .ok_or_else(|| anyhow!("unknown piece {word:?}"))?,
    };
    Ok(kind)
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod command_tests;
