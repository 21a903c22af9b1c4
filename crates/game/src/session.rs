//! One human-versus-engine game: whose turn it is, the human's current
//! selection, the promotion handshake and the capture tally.

use chess_core::{
    Board, Color, Engine, GameOutcome, Move, PieceKind, Square, classify, legal_moves,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};

/// A pawn that reached its last rank and is waiting for the human to pick
/// what it becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PendingPromotion {
    pub color: Color,
    pub square: Square,
}

/// Session phase. While a promotion is pending nothing else may happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Normal,
    AwaitingPromotion(PendingPromotion),
}

/// What the host needs to render after every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub outcome: GameOutcome,
    pub side_to_move: Color,
    pub pending_promotion: Option<PendingPromotion>,
}

/// A move that was played, by either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    pub mover: Color,
    #[serde(rename = "move")]
    pub mv: Move,
    pub captured: Option<PieceKind>,
    pub status: StatusReport,
}

pub struct GameSession {
    board: Board,
    human: Color,
    engine: Box<dyn Engine>,
    depth: u8,
    phase: Phase,
    selected: Option<Square>,
    highlights: Vec<Square>,
    /// Captured material per color, indexed by `Color::idx`
    scores: [i32; 2],
}

impl GameSession {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_engine(config.human_color, config.build_engine(), config.search_depth)
    }

    pub fn with_engine(human: Color, engine: Box<dyn Engine>, depth: u8) -> Self {
        let mut session = Self {
            board: Board::startpos(),
            human,
            engine,
            depth,
            phase: Phase::Normal,
            selected: None,
            highlights: Vec::new(),
            scores: [0; 2],
        };
        session.new_game(human);
        session
    }

    /// Continue from an arbitrary position instead of the opening.
    pub fn from_board(board: Board, human: Color, engine: Box<dyn Engine>, depth: u8) -> Self {
        let mut session = Self::with_engine(human, engine, depth);
        session.board = board;
        session
    }

    /// Resets to the opening position with White to move, full castling
    /// rights and zeroed scores. The human plays `human_color`.
    pub fn new_game(&mut self, human_color: Color) {
        self.board = Board::startpos();
        self.human = human_color;
        self.phase = Phase::Normal;
        self.selected = None;
        self.highlights.clear();
        self.scores = [0; 2];
        self.engine.new_game();
        info!(human = ?human_color, engine = self.engine.name(), "new game");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human_color(&self) -> Color {
        self.human
    }

    pub fn engine_color(&self) -> Color {
        self.human.other()
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Legal destinations of the selected piece.
    pub fn highlights(&self) -> &[Square] {
        &self.highlights
    }

    /// Material the given color has captured so far.
    pub fn score(&self, color: Color) -> i32 {
        self.scores[color.idx()]
    }

    /// Captured material as (white, black).
    pub fn scores(&self) -> (i32, i32) {
        (self.score(Color::White), self.score(Color::Black))
    }

    pub fn status(&self) -> StatusReport {
        let pending_promotion = match self.phase {
            Phase::AwaitingPromotion(p) => Some(p),
            Phase::Normal => None,
        };
        StatusReport {
            outcome: self.outcome(),
            side_to_move: self.board.side_to_move,
            pending_promotion,
        }
    }

    /// The game cannot end mid-promotion; the position is classified once
    /// the piece is chosen and the turn has passed.
    fn outcome(&self) -> GameOutcome {
        if let Phase::AwaitingPromotion(_) = self.phase {
            return GameOutcome::Ongoing;
        }
        let mut work = self.board.clone();
        let side = work.side_to_move;
        classify(&mut work, side)
    }

    /// True when the opponent should be asked for a move.
    pub fn is_engine_turn(&self) -> bool {
        self.phase == Phase::Normal
            && self.board.side_to_move == self.engine_color()
            && !self.outcome().is_terminal()
    }

    /// Legal destinations of the piece on `sq`, empty for an empty square.
    pub fn legal_destinations(&self, sq: Square) -> Vec<Square> {
        legal_moves(&self.board, sq)
    }

    /// Selects one of the human's own pieces and returns its legal
    /// destinations. Returns `None` and changes nothing when the square is
    /// not the human's piece or the human cannot act right now.
    pub fn select(&mut self, sq: Square) -> Option<&[Square]> {
        if self.check_human_can_act().is_err() {
            return None;
        }
        match self.board.piece_at(sq) {
            Some(pc) if pc.color == self.human => {
                self.selected = Some(sq);
                self.highlights = legal_moves(&self.board, sq);
                Some(self.highlights.as_slice())
            }
            _ => None,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.highlights.clear();
    }

    /// Moves the selected piece to `to`. The selection is cleared whether or
    /// not the move is legal.
    pub fn move_selected(&mut self, to: Square) -> GameResult<MoveReport> {
        let from = self.selected.ok_or(GameError::NoPieceSelected)?;
        self.clear_selection();
        self.play(from, to)
    }

    /// Plays a human move. A pawn reaching its last rank leaves the session
    /// waiting for [`GameSession::promote`].
    pub fn play(&mut self, from: Square, to: Square) -> GameResult<MoveReport> {
        self.check_human_can_act()?;

        let own_piece = self
            .board
            .piece_at(from)
            .is_some_and(|pc| pc.color == self.human);
        if !own_piece || !legal_moves(&self.board, from).contains(&to) {
            warn!(%from, %to, "illegal move rejected");
            return Err(GameError::IllegalMove { from, to });
        }
        let mv = self
            .board
            .build_move(from, to, None)
            .ok_or(GameError::IllegalMove { from, to })?;

        self.clear_selection();
        self.apply(mv)
    }

    /// Resolves a pending promotion and passes the turn to the opponent.
    pub fn promote(&mut self, kind: PieceKind) -> GameResult<StatusReport> {
        let Phase::AwaitingPromotion(pending) = self.phase else {
            warn!(?kind, "promotion without a pending pawn");
            return Err(GameError::NoPromotionPending);
        };
        if !kind.is_promotion_choice() {
            warn!(?kind, "invalid promotion choice");
            return Err(GameError::InvalidPromotion(kind));
        }
        if !self.board.complete_promotion(pending.square, kind) {
            return Err(GameError::InvalidPromotion(kind));
        }
        self.phase = Phase::Normal;
        info!(square = %pending.square, ?kind, "pawn promoted");

        let status = self.status();
        self.log_if_over(status.outcome);
        Ok(status)
    }

    /// Asks the engine for its move and plays it. `Ok(None)` means the
    /// engine has no legal move.
    pub fn opponent_move(&mut self) -> GameResult<Option<MoveReport>> {
        if let Phase::AwaitingPromotion(p) = self.phase {
            return Err(GameError::PromotionPending { square: p.square });
        }
        let color = self.engine_color();
        if self.board.side_to_move != color {
            return Err(GameError::NotYourTurn);
        }
        let outcome = self.outcome();
        if outcome.is_terminal() {
            return Err(GameError::GameOver(outcome));
        }

        let Some(result) = self.engine.search(&self.board, color, self.depth) else {
            return Ok(None);
        };
        self.apply(result.best_move).map(Some)
    }

    fn check_human_can_act(&self) -> GameResult<()> {
        if let Phase::AwaitingPromotion(p) = self.phase {
            return Err(GameError::PromotionPending { square: p.square });
        }
        if self.board.side_to_move != self.human {
            return Err(GameError::NotYourTurn);
        }
        let outcome = self.outcome();
        if outcome.is_terminal() {
            return Err(GameError::GameOver(outcome));
        }
        Ok(())
    }

    /// Plays an already validated move and updates scores and phase.
    fn apply(&mut self, mv: Move) -> GameResult<MoveReport> {
        let mover = self.board.side_to_move;
        let applied = self.board.apply(mv).ok_or(GameError::IllegalMove {
            from: mv.from,
            to: mv.to,
        })?;

        if let Some(kind) = applied.captured {
            self.scores[mover.idx()] += kind.value();
        }
        if applied.promotion_pending {
            self.phase = Phase::AwaitingPromotion(PendingPromotion {
                color: mover,
                square: mv.to,
            });
        }
        debug!(?mover, mv = %mv, captured = ?applied.captured, "move applied");

        let status = self.status();
        self.log_if_over(status.outcome);
        Ok(MoveReport {
            mover,
            mv,
            captured: applied.captured,
            status,
        })
    }

    fn log_if_over(&self, outcome: GameOutcome) {
        if self.phase == Phase::Normal && outcome.is_terminal() {
            info!(?outcome, side_to_move = ?self.board.side_to_move, "game over");
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
