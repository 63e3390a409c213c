//! [`TrainingSession`] - the move arbiter
//!
//! # Commit protocol
//!
//! Every move, whoever played it, goes through `commit`:
//!
//! 1. Execute it on the rules engine and append its SAN to the history
//! 2. Clear selection and any suspended promotion
//! 3. Classify the move if the trainee played it
//! 4. Detect the end of the game; a finished game goes `Terminal` and stops
//! 5. Otherwise hand the turn over: the trainee gets a fresh primary analysis
//!    and the book hint, the computer gets an `OpponentTurn` wakeup after the
//!    settle delay
//!
//! # Analysis replies
//!
//! Replies carry the FEN they were computed for. A primary reply is accepted
//! only while a primary request for that FEN is pending and the FEN is still
//! the live position; everything else is a stale reply and is dropped. An
//! accepted primary reply on the trainee's turn is cached as the
//! recommendation and triggers a reply prediction for the position after the
//! recommended move.
//!
//! # Examples
//!
//! ```rust,ignore
//! let mut session = TrainingSession::new(ChessBoard::new(), handle, config)?;
//! session.attempt_player_move(Square::E2, Square::E4)?;
//! for scheduled in session.take_scheduled() {
//!     // after scheduled.delay:
//!     session.on_wakeup(scheduled.wakeup);
//! }
//! ```

use super::policy::{self, FallbackSource};
use super::view::{position_label, BookHint, SessionView};
use super::{EngineStatus, Scheduled, SessionConfig, SessionPhase, Wakeup};
use crate::game::ai::{
    AnalysisPort, AnalysisPurpose, AnalysisRequest, AnalysisResult, EngineEvent, Evaluation,
    SkillLevel,
};
use crate::game::error::{TrainerError, TrainerResult};
use crate::game::feedback::{classify, Feedback, OpeningContext, PlayedMove, Severity};
use crate::game::repertoire::{self, Line, Opening};
use crate::game::resources::{
    is_promotion_choice, GameOverState, HintBoard, HintPair, MoveHistory, PendingAnalyses,
    PendingPromotion, PendingRequest, Selection,
};
use crate::game::rules::{resolve_token, MoveRecord, RulesEngine};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shakmaty::{Color, File, Rank, Role, Square};
use std::time::Duration;
use tracing::{debug, error, info, trace, warn};

/// Engine answer cached for one position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub fen: String,
    /// UCI text
    pub best_move: Option<String>,
    /// SAN of `best_move` in `fen`
    pub san: Option<String>,
    pub evaluation: Option<Evaluation>,
    pub depth: Option<u32>,
}

/// Expected opponent reply after the recommended move
#[derive(Debug, Clone, PartialEq, Eq)]
struct Prediction {
    /// The hypothetical position the reply was computed for
    fen: String,
    best_move: Option<String>,
}

/// Result of a trainee move attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Committed(MoveRecord),
    /// Pawn reached the last rank; waiting for [`TrainingSession::choose_promotion`]
    PromotionRequired,
}

/// Result of clicking a square
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected { targets: usize },
    Cleared,
    Moved(MoveOutcome),
}

/// Result of a hint request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintResponse {
    /// Recommendation already cached for this position
    Ready { san: String, uci: String },
    /// Analysis requested; the hint arrives as feedback with the reply
    Pending,
    /// No engine this session
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mover {
    Trainee,
    Opponent,
}

/// One training game plus everything needed to start the next
pub struct TrainingSession<R: RulesEngine, P: AnalysisPort> {
    rules: R,
    port: P,
    opening: &'static Opening,
    line: &'static Line,
    phase: SessionPhase,
    flipped: bool,
    history: MoveHistory,
    selection: Selection,
    hints: HintBoard,
    promotion: Option<PendingPromotion>,
    pending: PendingAnalyses,
    game_over: GameOverState,
    skill: SkillLevel,
    engine: EngineStatus,
    recommendation: Option<Recommendation>,
    prediction: Option<Prediction>,
    feedback: Option<Feedback>,
    /// FEN the computer is waiting on an engine answer for
    opponent_wait: Option<String>,
    hint_requested: bool,
    /// Bumped on every position change; wakeups from older epochs are void
    epoch: u64,
    scheduled: Vec<Scheduled>,
    rng: StdRng,
    settle_delay: Duration,
    engine_timeout: Duration,
}

impl<R: RulesEngine, P: AnalysisPort> TrainingSession<R, P> {
    /// Start a session on the configured opening. If the trainee plays Black
    /// the computer's first move is already scheduled on return.
    pub fn new(rules: R, port: P, config: SessionConfig) -> TrainerResult<Self> {
        let opening = repertoire::opening(&config.opening)?;
        let line = match config.line.as_deref() {
            Some(key) => opening.line(key)?,
            None => opening.main()?,
        };
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut session = Self {
            rules,
            port,
            opening,
            line,
            phase: SessionPhase::AwaitingTraineeInput,
            flipped: false,
            history: MoveHistory::default(),
            selection: Selection::default(),
            hints: HintBoard::default(),
            promotion: None,
            pending: PendingAnalyses::default(),
            game_over: GameOverState::Playing,
            skill: config.skill,
            engine: EngineStatus::Starting,
            recommendation: None,
            prediction: None,
            feedback: None,
            opponent_wait: None,
            hint_requested: false,
            epoch: 0,
            scheduled: Vec::new(),
            rng,
            settle_delay: config.settle_delay,
            engine_timeout: config.engine_timeout,
        };
        session.reset_game();
        Ok(session)
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Switch to `key`'s main line and start a new game
    pub fn select_opening(&mut self, key: &str) -> TrainerResult<()> {
        let opening = repertoire::opening(key)?;
        let line = opening.main()?;
        self.opening = opening;
        self.line = line;
        self.reset_game();
        Ok(())
    }

    /// Switch to another line of the current opening and start a new game
    pub fn select_line(&mut self, key: &str) -> TrainerResult<()> {
        self.line = self.opening.line(key)?;
        self.reset_game();
        Ok(())
    }

    /// Restart the current opening and line
    pub fn new_game(&mut self) {
        self.reset_game();
    }

    /// Play the trainee's move from `from` to `to`
    pub fn attempt_player_move(&mut self, from: Square, to: Square) -> TrainerResult<MoveOutcome> {
        self.ensure_trainee_input()?;

        let candidates: Vec<_> = self
            .rules
            .legal_moves_from(from)
            .into_iter()
            .filter(|m| m.to == to)
            .collect();
        if candidates.is_empty() {
            return Err(reject(format!("{}{} is not a legal move", from, to)));
        }

        if candidates.iter().any(|m| m.promotion.is_some()) {
            info!("[SESSION] Promotion on {} awaiting piece choice", to);
            self.selection.clear();
            self.promotion = Some(PendingPromotion::new(from, to));
            self.phase = SessionPhase::AwaitingPromotionChoice;
            self.refresh_hints();
            return Ok(MoveOutcome::PromotionRequired);
        }

        self.commit(from, to, None, Mover::Trainee)
            .map(MoveOutcome::Committed)
    }

    /// Play a trainee move given as UCI text (`e2e4`, `e7e8q`)
    pub fn attempt_uci(&mut self, text: &str) -> TrainerResult<MoveOutcome> {
        let text = text.trim().to_lowercase();
        let from: Square = parse_square(text.get(0..2))?;
        let to: Square = parse_square(text.get(2..4))?;
        let role = match text.get(4..) {
            None | Some("") => None,
            Some(suffix) => {
                let role = suffix
                    .chars()
                    .next()
                    .and_then(Role::from_char)
                    .filter(|role| is_promotion_choice(*role))
                    .ok_or_else(|| reject(format!("`{}` is not a promotion piece", suffix)))?;
                Some(role)
            }
        };

        match (self.attempt_player_move(from, to)?, role) {
            (MoveOutcome::PromotionRequired, Some(role)) => self
                .choose_promotion(role)
                .map(MoveOutcome::Committed),
            (outcome, _) => Ok(outcome),
        }
    }

    /// Click semantics: pick up an own piece, drop it on a highlighted
    /// square, pick up another, or clear
    pub fn select_square(&mut self, square: Square) -> TrainerResult<SelectOutcome> {
        self.ensure_trainee_input()?;

        if let Some(from) = self.selection.square {
            if self.selection.is_target(square) {
                return self
                    .attempt_player_move(from, square)
                    .map(SelectOutcome::Moved);
            }
        }

        let own = self
            .rules
            .piece_at(square)
            .is_some_and(|piece| piece.color == self.opening.trainee);
        if own && self.selection.square != Some(square) {
            let moves = self.rules.legal_moves_from(square);
            let targets = moves.len();
            self.selection.select(square, moves);
            trace!("[SESSION] Selected {} ({} targets)", square, targets);
            return Ok(SelectOutcome::Selected { targets });
        }

        self.selection.clear();
        Ok(SelectOutcome::Cleared)
    }

    /// Finish a suspended promotion
    pub fn choose_promotion(&mut self, role: Role) -> TrainerResult<MoveRecord> {
        let Some(pending) = self.promotion else {
            return Err(reject("No promotion is pending"));
        };
        if !is_promotion_choice(role) {
            return Err(reject(format!("Cannot promote to {:?}", role)));
        }
        self.commit(pending.from, pending.to, Some(role), Mover::Trainee)
    }

    /// Abandon a suspended promotion
    pub fn cancel_promotion(&mut self) -> TrainerResult<()> {
        if self.promotion.take().is_none() {
            return Err(reject("No promotion is pending"));
        }
        debug!("[SESSION] Promotion cancelled");
        self.phase = SessionPhase::AwaitingTraineeInput;
        self.refresh_hints();
        Ok(())
    }

    /// Surface the engine's recommendation for the trainee's position
    pub fn request_hint(&mut self) -> TrainerResult<HintResponse> {
        if self.phase != SessionPhase::AwaitingTraineeInput {
            return Err(reject("Hints are available on your turn"));
        }

        let live = self.rules.fen();
        if let Some(rec) = self.recommendation.as_ref().filter(|r| r.fen == live) {
            if let (Some(uci), Some(san)) = (rec.best_move.clone(), rec.san.clone()) {
                self.feedback = Some(Feedback::info(format!("Engine suggests: {}", san)));
                return Ok(HintResponse::Ready { san, uci });
            }
        }

        if self.engine == EngineStatus::Unavailable {
            self.feedback = Some(Feedback::new(
                Severity::Warning,
                "No engine available - hints are disabled",
            ));
            return Ok(HintResponse::Unavailable);
        }

        self.hint_requested = true;
        let already_pending = self
            .pending
            .get(AnalysisPurpose::Primary)
            .is_some_and(|r| r.fen == live);
        if !already_pending {
            self.request_analysis(AnalysisPurpose::Primary, live, None);
        }
        self.feedback = Some(Feedback::info("Analyzing position..."));
        Ok(HintResponse::Pending)
    }

    /// Take back the trainee's last move and the computer's reply
    pub fn undo_last_exchange(&mut self) -> TrainerResult<()> {
        let can_undo = matches!(
            self.phase,
            SessionPhase::AwaitingTraineeInput | SessionPhase::Terminal
        ) && self.trainee_to_move()
            && self.history.len() >= 2;
        if !can_undo {
            return Err(reject("No full exchange to undo"));
        }

        for _ in 0..2 {
            if self.rules.undo().is_none() {
                error!("[SESSION] Rules engine had fewer plies than the history");
                break;
            }
            self.history.pop();
        }

        self.epoch += 1;
        self.selection.clear();
        self.promotion = None;
        self.pending.clear();
        self.prediction = None;
        self.opponent_wait = None;
        self.hint_requested = false;
        self.game_over = GameOverState::Playing;
        self.feedback = Some(Feedback::info("Last move undone"));
        info!("[SESSION] Undid last exchange, {} plies remain", self.history.len());
        self.enter_turn();
        Ok(())
    }

    /// Change engine strength and book adherence for the rest of the session
    pub fn set_skill_level(&mut self, level: u8) -> TrainerResult<SkillLevel> {
        let skill = SkillLevel::try_new(level)?;
        self.skill = skill;
        self.port.configure(skill);

        let message = if skill.limits_strength() {
            format!("Engine level set to {} (~{} Elo)", skill.get(), skill.elo())
        } else {
            format!("Engine level set to {} (Maximum Strength)", skill.get())
        };
        info!("[SETTINGS] {}", message);
        self.feedback = Some(Feedback::info(message));
        Ok(skill)
    }

    pub fn flip_board(&mut self) {
        self.flipped = !self.flipped;
    }

    // ------------------------------------------------------------------
    // Asynchronous input
    // ------------------------------------------------------------------

    pub fn on_engine_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::Ready => {
                if self.engine == EngineStatus::Starting {
                    info!("[SESSION] Engine ready");
                    self.engine = EngineStatus::Ready;
                }
            }
            EngineEvent::Unavailable { message } => self.engine_lost(message),
            EngineEvent::Analysis(result) => match result.purpose {
                AnalysisPurpose::Primary => self.on_primary(result),
                AnalysisPurpose::ReplyPrediction => self.on_prediction(result),
            },
        }
    }

    pub fn on_wakeup(&mut self, wakeup: Wakeup) {
        match wakeup {
            Wakeup::OpponentTurn { epoch } => {
                if epoch != self.epoch || self.phase != SessionPhase::AwaitingOpponentMove {
                    trace!("[SESSION] Ignoring stale opponent wakeup");
                    return;
                }
                self.play_opponent_turn();
            }
            Wakeup::AnalysisDeadline { epoch, fen } => {
                if epoch != self.epoch || self.opponent_wait.as_deref() != Some(fen.as_str()) {
                    trace!("[SESSION] Ignoring stale analysis deadline");
                    return;
                }
                let timeout = TrainerError::EngineTimeout {
                    fen,
                    elapsed: self.engine_timeout,
                };
                warn!("[ENGINE] {}", timeout);
                self.pending.cancel(AnalysisPurpose::Primary);
                self.play_fallback();
            }
        }
    }

    /// Drain the wakeups requested since the last call
    pub fn take_scheduled(&mut self) -> Vec<Scheduled> {
        std::mem::take(&mut self.scheduled)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn opening(&self) -> &'static Opening {
        self.opening
    }

    pub fn line(&self) -> &'static Line {
        self.line
    }

    pub fn trainee(&self) -> Color {
        self.opening.trainee
    }

    pub fn trainee_to_move(&self) -> bool {
        self.rules.turn() == self.opening.trainee
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn fen(&self) -> String {
        self.rules.fen()
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn hints(&self) -> &HintBoard {
        &self.hints
    }

    pub fn pending(&self) -> &PendingAnalyses {
        &self.pending
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        self.recommendation.as_ref()
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn game_over(&self) -> GameOverState {
        self.game_over
    }

    pub fn skill(&self) -> SkillLevel {
        self.skill
    }

    pub fn engine_status(&self) -> EngineStatus {
        self.engine
    }

    /// Snapshot for the renderer
    pub fn view(&self) -> SessionView {
        let live = self.rules.fen();
        let trainee_to_move = self.trainee_to_move();
        let recommendation = self.recommendation.as_ref().filter(|r| r.fen == live);

        let mut pieces = Vec::with_capacity(32);
        for rank in 0..8 {
            for file in 0..8 {
                let square = Square::from_coords(File::new(file), Rank::new(rank));
                if let Some(piece) = self.rules.piece_at(square) {
                    pieces.push((square, piece));
                }
            }
        }

        SessionView {
            pieces,
            flipped: self.flipped,
            trainee: self.opening.trainee,
            turn: self.rules.turn(),
            phase: self.phase,
            selected: self.selection.square,
            targets: self.selection.targets().collect(),
            hints: self.hints.clone(),
            promotion: self.promotion,
            opening_name: self.opening.name,
            opening_description: self.opening.description,
            line_key: self.line.key,
            moves: self.history.numbered_pairs(),
            full_moves: self.history.full_moves(),
            position_label: position_label(self.history.len(), self.line.len(), self.opening.name),
            book: if self.phase == SessionPhase::Terminal {
                None
            } else {
                BookHint::at(self.line, self.history.len(), trainee_to_move)
            },
            evaluation: recommendation.and_then(|r| r.evaluation),
            depth: recommendation.and_then(|r| r.depth),
            feedback: self.feedback.clone(),
            skill: self.skill,
            engine: self.engine,
            result: self
                .game_over
                .is_game_over()
                .then(|| self.game_over.message(self.opening.trainee)),
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn reset_game(&mut self) {
        self.rules.reset();
        self.epoch += 1;
        self.history.clear();
        self.selection.clear();
        self.hints.clear();
        self.promotion = None;
        self.pending.clear();
        self.recommendation = None;
        self.prediction = None;
        self.opponent_wait = None;
        self.hint_requested = false;
        self.game_over = GameOverState::Playing;
        self.flipped = self.opening.trainee == Color::Black;

        let side = match self.opening.trainee {
            Color::White => "White",
            Color::Black => "Black",
        };
        info!(
            "[SESSION] New game: {} ({} line) as {}",
            self.opening.name, self.line.key, side
        );
        self.feedback = Some(Feedback::info(format!(
            "Training {} as {}",
            self.opening.name, side
        )));
        self.enter_turn();
    }

    fn ensure_trainee_input(&self) -> TrainerResult<()> {
        match self.phase {
            SessionPhase::AwaitingTraineeInput => Ok(()),
            SessionPhase::AwaitingPromotionChoice => Err(reject("Choose a promotion piece first")),
            SessionPhase::AwaitingOpponentMove => Err(reject("Not your turn")),
            SessionPhase::Terminal => Err(reject("The game is over")),
        }
    }

    fn commit(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Role>,
        mover: Mover,
    ) -> TrainerResult<MoveRecord> {
        let ply = self.history.len();
        let record = self.rules.play(from, to, promotion)?;
        self.history.add_move(record.san.clone());
        self.epoch += 1;
        self.selection.clear();
        self.promotion = None;
        self.opponent_wait = None;
        self.hint_requested = false;
        info!("[SESSION] {:?} played {} ({})", mover, record.san, record.uci);

        if mover == Mover::Trainee {
            let classification = classify(
                PlayedMove {
                    san: &record.san,
                    uci: &record.uci,
                },
                self.line.token(ply),
                &OpeningContext {
                    name: self.opening.name,
                    alternatives: self.opening.alternatives,
                    ply: ply + 1,
                    line_len: self.line.len(),
                },
            );
            debug!(
                "[FEEDBACK] {} -> {:?}: {}",
                record.san, classification.verdict, classification.message
            );
            self.feedback = Some(classification.into_feedback());
        }

        self.game_over = GameOverState::detect(&self.rules);
        if self.game_over.is_game_over() {
            let trainee = self.opening.trainee;
            let message = self.game_over.message(trainee);
            info!("[SESSION] {}", message);
            self.phase = SessionPhase::Terminal;
            self.pending.clear();
            self.hints.clear();
            self.feedback = Some(Feedback::new(self.game_over.severity(trainee), message));
            return Ok(record);
        }

        self.enter_turn();
        Ok(record)
    }

    /// Hand the turn to whoever is to move in the live position
    fn enter_turn(&mut self) {
        if self.trainee_to_move() {
            self.phase = SessionPhase::AwaitingTraineeInput;
            let fen = self.rules.fen();
            self.request_analysis(AnalysisPurpose::Primary, fen, None);
        } else {
            self.phase = SessionPhase::AwaitingOpponentMove;
            self.schedule(
                self.settle_delay,
                Wakeup::OpponentTurn { epoch: self.epoch },
            );
        }
        self.refresh_hints();
    }

    fn play_opponent_turn(&mut self) {
        let legal = self.rules.legal_moves();
        let ply = self.history.len();
        let roll: f64 = self.rng.random();

        match policy::book_move(self.opening, self.line, ply, &legal, self.skill, roll) {
            Ok(Some(book)) => {
                info!("[BOOK] Opponent follows the book with {}", book.san);
                self.commit_opponent(book.from, book.to, book.promotion);
                return;
            }
            Ok(None) => {}
            Err(inconsistency) => warn!("[BOOK] {}", inconsistency),
        }

        if self.engine == EngineStatus::Unavailable {
            self.play_fallback();
            return;
        }

        let fen = self.rules.fen();
        debug!("[SESSION] Asking the engine for the opponent move");
        self.opponent_wait = Some(fen.clone());
        self.request_analysis(AnalysisPurpose::Primary, fen.clone(), None);
        self.schedule(
            self.engine_timeout,
            Wakeup::AnalysisDeadline {
                epoch: self.epoch,
                fen,
            },
        );
    }

    /// Cached recommendation for this exact position, else a random move
    fn play_fallback(&mut self) {
        self.opponent_wait = None;
        let legal = self.rules.legal_moves();
        let live = self.rules.fen();
        let cached = self
            .recommendation
            .as_ref()
            .filter(|r| r.fen == live)
            .and_then(|r| r.best_move.clone());

        match policy::fallback_move(&legal, cached.as_deref(), &mut self.rng) {
            Some((chosen, source)) => {
                match source {
                    FallbackSource::Cached => {
                        info!("[SESSION] Replaying cached engine move {}", chosen.san)
                    }
                    FallbackSource::Random => info!("[SESSION] Playing random move {}", chosen.san),
                }
                self.commit_opponent(chosen.from, chosen.to, chosen.promotion);
            }
            None => warn!("[SESSION] Opponent has no legal move"),
        }
    }

    fn commit_opponent(&mut self, from: Square, to: Square, promotion: Option<Role>) {
        if let Err(e) = self.commit(from, to, promotion, Mover::Opponent) {
            error!("[SESSION] Opponent move {}{} failed: {}", from, to, e);
        }
    }

    fn on_primary(&mut self, result: AnalysisResult) {
        let live = self.rules.fen();
        let matched = self
            .pending
            .take_matching(AnalysisPurpose::Primary, &result.fen)
            .is_some();
        if !matched || result.fen != live {
            discard(result.fen);
            return;
        }

        let legal = self.rules.legal_moves();
        let engine_move = result
            .best_move
            .as_deref()
            .and_then(|uci| policy::resolve_engine_move(&legal, uci))
            .cloned();
        debug!(
            "[ENGINE] Recommendation for {}: {:?} ({:?}, depth {:?})",
            live, result.best_move, result.evaluation, result.depth
        );
        self.recommendation = Some(Recommendation {
            fen: result.fen,
            best_move: result.best_move.clone(),
            san: engine_move.as_ref().map(|m| m.san.clone()),
            evaluation: result.evaluation,
            depth: result.depth,
        });

        match self.phase {
            SessionPhase::AwaitingOpponentMove
                if self.opponent_wait.as_deref() == Some(live.as_str()) =>
            {
                self.opponent_wait = None;
                match engine_move {
                    Some(chosen) => {
                        info!("[ENGINE] Opponent plays {}", chosen.san);
                        self.commit_opponent(chosen.from, chosen.to, chosen.promotion);
                    }
                    None => {
                        warn!(
                            "[ENGINE] Engine move {:?} is not legal here",
                            result.best_move
                        );
                        self.play_fallback();
                    }
                }
            }
            SessionPhase::AwaitingTraineeInput | SessionPhase::AwaitingPromotionChoice => {
                if self.hint_requested {
                    self.hint_requested = false;
                    if let Some(san) = engine_move.as_ref().map(|m| m.san.as_str()) {
                        self.feedback = Some(Feedback::info(format!("Engine suggests: {}", san)));
                    }
                }
                if let Some(chosen) = engine_move {
                    self.request_prediction(chosen.from, chosen.to, chosen.promotion, live);
                }
                self.refresh_hints();
            }
            _ => {}
        }
    }

    /// Ask for the opponent's reply to the recommended move
    fn request_prediction(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Role>,
        base_fen: String,
    ) {
        match self.rules.fen_after(from, to, promotion) {
            Ok(hypothetical) => {
                self.request_analysis(AnalysisPurpose::ReplyPrediction, hypothetical, Some(base_fen))
            }
            Err(e) => debug!("[ENGINE] No prediction: {}", e),
        }
    }

    fn on_prediction(&mut self, result: AnalysisResult) {
        let live = self.rules.fen();
        let Some(request) = self
            .pending
            .take_matching(AnalysisPurpose::ReplyPrediction, &result.fen)
        else {
            discard(result.fen);
            return;
        };
        let relevant = request.base_fen.as_deref() == Some(live.as_str()) || result.fen == live;
        if !relevant {
            discard(result.fen);
            return;
        }

        debug!("[ENGINE] Predicted reply: {:?}", result.best_move);
        self.prediction = Some(Prediction {
            fen: result.fen,
            best_move: result.best_move,
        });
        self.refresh_hints();
    }

    fn engine_lost(&mut self, message: String) {
        if self.engine == EngineStatus::Unavailable {
            return;
        }
        let failure = TrainerError::EngineUnavailable { message };
        info!("[SESSION] {}; the opponent plays random moves", failure);
        self.engine = EngineStatus::Unavailable;
        self.pending.clear();
        self.hint_requested = false;
        self.feedback = Some(Feedback::new(
            Severity::Warning,
            "Engine unavailable - the computer will play random moves",
        ));

        if self.phase == SessionPhase::AwaitingOpponentMove && self.opponent_wait.is_some() {
            self.play_fallback();
        }
    }

    fn request_analysis(&mut self, purpose: AnalysisPurpose, fen: String, base_fen: Option<String>) {
        if self.engine == EngineStatus::Unavailable {
            return;
        }
        let superseded = self.pending.issue(
            purpose,
            PendingRequest {
                fen: fen.clone(),
                base_fen,
            },
        );
        if let Some(old) = superseded {
            trace!("[ENGINE] {:?} request for {} superseded", purpose, old.fen);
        }
        self.port
            .submit(AnalysisRequest::new(purpose, fen, self.skill));
    }

    /// Recompute which highlight pairs are live
    fn refresh_hints(&mut self) {
        self.hints.clear();
        if self.phase == SessionPhase::Terminal {
            return;
        }

        let live = self.rules.fen();
        let legal = self.rules.legal_moves();
        if self.trainee_to_move() {
            let ply = self.history.len();
            self.hints.book = self
                .line
                .token(ply)
                .and_then(|token| resolve_token(&legal, token))
                .map(HintPair::from);
            self.hints.engine = self
                .recommendation
                .as_ref()
                .filter(|r| r.fen == live)
                .and_then(|r| r.best_move.as_deref())
                .and_then(|uci| policy::resolve_engine_move(&legal, uci))
                .map(HintPair::from);
        } else {
            self.hints.predicted = self
                .prediction
                .as_ref()
                .filter(|p| p.fen == live)
                .and_then(|p| p.best_move.as_deref())
                .and_then(|uci| policy::resolve_engine_move(&legal, uci))
                .map(HintPair::from);
        }
    }

    fn schedule(&mut self, delay: Duration, wakeup: Wakeup) {
        self.scheduled.push(Scheduled { delay, wakeup });
    }
}

fn reject(reason: impl Into<String>) -> TrainerError {
    let rejection = TrainerError::rejected(reason);
    debug!("[SESSION] {}", rejection);
    rejection
}

fn discard(fen: String) {
    let stale = TrainerError::StaleReply { fen };
    debug!("[ENGINE] {}", stale);
}

fn parse_square(text: Option<&str>) -> TrainerResult<Square> {
    text.and_then(|t| t.parse().ok())
        .ok_or_else(|| reject(format!("`{}` is not a square", text.unwrap_or(""))))
}
