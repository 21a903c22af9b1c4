//! Terminal host for a human-versus-engine game.
//!
//! Reads commands from stdin. With `--json` every event is printed as one
//! JSON object per line, for driving the game from another program.

mod command;
mod render;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chess_core::{Board, Color, PieceKind, Square};
use clap::Parser;
use game::{EngineKind, GameConfig, GameError, GameSession, MoveReport, StatusReport};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::command::{Command, HELP, parse_color, parse_command};

#[derive(Debug, Parser)]
#[command(name = "play", about = "Play chess against a minimax or random opponent")]
struct Cli {
    /// TOML config file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search depth in plies
    #[arg(long, short)]
    depth: Option<u8>,

    /// Opponent: minimax or random
    #[arg(long, value_parser = parse_engine)]
    engine: Option<EngineKind>,

    /// Side the human plays: white or black
    #[arg(long, value_parser = parse_color)]
    color: Option<Color>,

    /// RNG seed for reproducible engine play
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before each engine move, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Start from this FEN instead of the opening position
    #[arg(long)]
    fen: Option<String>,

    /// Emit one JSON event per line instead of text
    #[arg(long)]
    json: bool,
}

fn parse_engine(s: &str) -> Result<EngineKind, String> {
    match s.to_lowercase().as_str() {
        "minimax" => Ok(EngineKind::Minimax),
        "random" => Ok(EngineKind::Random),
        other => Err(format!("unknown engine {other:?} (expected minimax or random)")),
    }
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(depth) = self.depth {
            config.search_depth = depth;
        }
        if let Some(engine) = self.engine {
            config.engine = engine;
        }
        if let Some(color) = self.color {
            config.human_color = color;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(delay) = self.delay_ms {
            config.think_delay_ms = delay;
        }
        Ok(config)
    }
}

/// Everything the host reports, one JSON object per line in `--json` mode.
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event {
    Move(MoveReport),
    Status(StatusReport),
    Selection {
        square: Square,
        destinations: Vec<Square>,
    },
    Position {
        fen: String,
    },
    Error {
        message: String,
    },
}

struct Host<W: Write> {
    session: GameSession,
    config: GameConfig,
    json: bool,
    out: W,
}

impl<W: Write> Host<W> {
    fn emit(&mut self, event: Event) -> Result<()> {
        if self.json {
            serde_json::to_writer(&mut self.out, &event)?;
            writeln!(self.out)?;
        } else {
            self.write_text(&event)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn write_text(&mut self, event: &Event) -> Result<()> {
        match event {
            Event::Move(report) => {
                let who = if report.mover == self.session.human_color() {
                    "you"
                } else {
                    self.session.engine_name()
                };
                write!(self.out, "{who} played {}", report.mv)?;
                if let Some(kind) = report.captured {
                    write!(self.out, ", capturing a {kind:?}")?;
                }
                writeln!(self.out)?;
                self.write_board(&[])?;
                writeln!(self.out, "{}", render::status_line(&report.status))?;
            }
            Event::Status(status) => {
                self.write_board(&[])?;
                writeln!(self.out, "{}", render::status_line(status))?;
                writeln!(self.out, "{}", render::score_line(&self.session))?;
            }
            Event::Selection {
                square,
                destinations,
            } => {
                self.write_board(destinations)?;
                let list: Vec<String> = destinations.iter().map(Square::to_string).collect();
                writeln!(self.out, "{square} can move to: {}", list.join(" "))?;
            }
            Event::Position { fen } => writeln!(self.out, "{fen}")?,
            Event::Error { message } => writeln!(self.out, "error: {message}")?,
        }
        Ok(())
    }

    fn write_board(&mut self, highlights: &[Square]) -> Result<()> {
        let text = render::board_text(self.session.board(), self.session.human_color(), highlights);
        write!(self.out, "{text}")?;
        Ok(())
    }

    fn report_error(&mut self, err: impl std::fmt::Display) -> Result<()> {
        self.emit(Event::Error {
            message: err.to_string(),
        })
    }

    /// Lets the engine move for as long as it is its turn.
    fn engine_replies(&mut self) -> Result<()> {
        while self.session.is_engine_turn() {
            if self.config.think_delay_ms > 0 {
                thread::sleep(Duration::from_millis(self.config.think_delay_ms));
            }
            match self.session.opponent_move() {
                Ok(Some(report)) => self.emit(Event::Move(report))?,
                Ok(None) => break,
                Err(e) => {
                    self.report_error(e)?;
                    break;
                }
            }
        }
        Ok(())
    }

    fn after_human_move(&mut self, result: Result<MoveReport, GameError>) -> Result<()> {
        match result {
            Ok(report) => {
                self.emit(Event::Move(report))?;
                self.engine_replies()
            }
            Err(e) => self.report_error(e),
        }
    }

    /// Runs one command. Returns false when the host should exit.
    fn handle(&mut self, cmd: Command) -> Result<bool> {
        match cmd {
            Command::Move {
                from,
                to,
                promotion,
            } => {
                let result = self.session.play(from, to);
                let pending = matches!(&result, Ok(r) if r.status.pending_promotion.is_some());
                match (pending, promotion) {
                    (true, Some(kind)) => {
                        if let Ok(report) = result {
                            self.emit(Event::Move(report))?;
                        }
                        self.promote(kind)?;
                    }
                    _ => self.after_human_move(result)?,
                }
            }
            Command::Select(square) => match self.session.select(square) {
                Some(dests) => {
                    let destinations = dests.to_vec();
                    self.emit(Event::Selection {
                        square,
                        destinations,
                    })?;
                }
                None => self.report_error(format!("cannot select {square}"))?,
            },
            Command::To(square) => {
                let result = self.session.move_selected(square);
                self.after_human_move(result)?;
            }
            Command::Promote(kind) => self.promote(kind)?,
            Command::NewGame(color) => {
                let color = color.unwrap_or(self.session.human_color());
                self.session.new_game(color);
                let status = self.session.status();
                self.emit(Event::Status(status))?;
                self.engine_replies()?;
            }
            Command::Board | Command::Status => {
                let status = self.session.status();
                self.emit(Event::Status(status))?;
            }
            Command::Fen => {
                let fen = self.session.board().to_fen();
                self.emit(Event::Position { fen })?;
            }
            Command::Help => {
                if self.json {
                    self.report_error("help is only available in text mode")?;
                } else {
                    writeln!(self.out, "{HELP}")?;
                }
            }
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn promote(&mut self, kind: PieceKind) -> Result<()> {
        match self.session.promote(kind) {
            Ok(status) => {
                self.emit(Event::Status(status))?;
                self.engine_replies()
            }
            Err(e) => self.report_error(e),
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = cli.game_config().context("loading configuration")?;
    info!(?config, "starting");

    let session = match &cli.fen {
        Some(fen) => {
            let board = Board::from_fen(fen).context("parsing --fen")?;
            GameSession::from_board(
                board,
                config.human_color,
                config.build_engine(),
                config.search_depth,
            )
        }
        None => GameSession::new(&config),
    };

    let mut host = Host {
        session,
        config,
        json: cli.json,
        out: io::stdout().lock(),
    };

    if !host.json {
        writeln!(host.out, "{HELP}\n")?;
    }
    let status = host.session.status();
    host.emit(Event::Status(status))?;
    host.engine_replies()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Some(cmd)) => {
                if !host.handle(cmd)? {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => host.report_error(e)?,
        }
        if host.session.status().outcome.is_terminal() && !host.json {
            writeln!(host.out, "type new to play again, or quit")?;
        }
    }
    Ok(())
}
