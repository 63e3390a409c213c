//! Async driver for a training session
//!
//! The session itself is synchronous. This module feeds it from three
//! sources on one task:
//!
//! ```text
//! stdin task --Command--> +---------+ <--EngineEvent-- engine worker
//!                         | Runtime |
//!       timer queue ----> +---------+ ----SessionView----> Presenter
//! ```
//!
//! Wakeups the session schedules are kept in a deadline-ordered queue and
//! delivered when due. After each input the view is rebuilt and handed to
//! the [`Presenter`] if anything visible changed.

use crate::game::ai::uci::is_uci_move;
use crate::game::ai::{AnalysisPort, EngineEvents};
use crate::game::error::{TrainerError, TrainerResult};
use crate::game::repertoire;
use crate::game::resources::is_promotion_choice;
use crate::game::rules::RulesEngine;
use crate::game::session::{MoveOutcome, SelectOutcome, SessionView, TrainingSession, Wakeup};
use shakmaty::{Color, Role, Square};
use std::str::FromStr;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info};

/// Help text for the terminal front end
pub const HELP: &str = "\
Commands:
  e2e4 / e7e8q      play a move (UCI squares, optional promotion piece)
  select <square>   click a square
  promote <q|r|b|n> finish a promotion     cancel  abandon it
  hint              ask the engine for a move
  undo              take back your last move and the reply
  new               restart the current line
  flip              turn the board around
  opening <key>     switch opening         openings  list openings
  line <key>        switch line            lines     list lines
  skill <1-25>      engine strength
  quit";

/// One trainee command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(String),
    Select(Square),
    Promote(Role),
    CancelPromotion,
    Hint,
    Undo,
    NewGame,
    Flip,
    Opening(String),
    Line(String),
    Skill(u8),
    ListOpenings,
    ListLines,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = TrainerError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut words = input.split_whitespace();
        let Some(head) = words.next() else {
            return Err(TrainerError::rejected("Empty command"));
        };
        let argument = words.next();

        let command = match (head.to_lowercase().as_str(), argument) {
            ("quit" | "exit", _) => Command::Quit,
            ("help" | "?", _) => Command::Help,
            ("hint", _) => Command::Hint,
            ("undo", _) => Command::Undo,
            ("new", _) => Command::NewGame,
            ("flip", _) => Command::Flip,
            ("cancel", _) => Command::CancelPromotion,
            ("openings", _) => Command::ListOpenings,
            ("lines", _) => Command::ListLines,
            ("select", Some(square)) => Command::Select(
                square
                    .to_lowercase()
                    .parse()
                    .map_err(|_| TrainerError::rejected(format!("`{}` is not a square", square)))?,
            ),
            ("promote", Some(piece)) => Command::Promote(
                piece
                    .chars()
                    .next()
                    .and_then(Role::from_char)
                    .filter(|role| is_promotion_choice(*role))
                    .ok_or_else(|| {
                        TrainerError::rejected(format!("`{}` is not a promotion piece", piece))
                    })?,
            ),
            ("opening", Some(key)) => Command::Opening(key.to_string()),
            ("line", Some(key)) => Command::Line(key.to_string()),
            ("skill", Some(level)) => Command::Skill(
                level
                    .parse()
                    .map_err(|_| TrainerError::rejected(format!("`{}` is not a level", level)))?,
            ),
            (text, None) if is_uci_move(text) => Command::Move(text.to_string()),
            _ => return Err(TrainerError::rejected(format!("Unknown command: {}", input.trim()))),
        };
        Ok(command)
    }
}

/// Whether the runtime keeps going after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Done,
    /// Informational text for the trainee
    Text(String),
    Quit,
}

/// Output side of the driver
pub trait Presenter {
    /// Paint the session
    fn present(&mut self, view: &SessionView);

    /// Show a one-off message (listings, rejected input)
    fn notice(&mut self, text: &str);
}

/// Wakeups waiting for their deadline
#[derive(Debug, Default)]
struct TimerQueue {
    entries: Vec<(Instant, Wakeup)>,
}

impl TimerQueue {
    fn push(&mut self, at: Instant, wakeup: Wakeup) {
        let index = self.entries.partition_point(|(due, _)| *due <= at);
        self.entries.insert(index, (at, wakeup));
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.entries.first().map(|(due, _)| *due)
    }

    fn pop_due(&mut self, now: Instant) -> Vec<Wakeup> {
        let due = self.entries.partition_point(|(at, _)| *at <= now);
        self.entries.drain(..due).map(|(_, wakeup)| wakeup).collect()
    }
}

/// Owns a session and its pending wakeups
pub struct Runtime<R: RulesEngine, P: AnalysisPort> {
    session: TrainingSession<R, P>,
    timers: TimerQueue,
}

impl<R: RulesEngine, P: AnalysisPort> Runtime<R, P> {
    pub fn new(session: TrainingSession<R, P>) -> Self {
        let mut runtime = Self {
            session,
            timers: TimerQueue::default(),
        };
        runtime.absorb_scheduled();
        runtime
    }

    pub fn session(&self) -> &TrainingSession<R, P> {
        &self.session
    }

    /// Apply one trainee command
    pub fn apply(&mut self, command: Command) -> TrainerResult<Reply> {
        debug!("[RUNTIME] {:?}", command);
        let session = &mut self.session;
        let reply = match command {
            Command::Move(text) => match session.attempt_uci(&text)? {
                MoveOutcome::PromotionRequired => Reply::Text(promotion_prompt()),
                MoveOutcome::Committed(_) => Reply::Done,
            },
            Command::Select(square) => match session.select_square(square)? {
                SelectOutcome::Moved(MoveOutcome::PromotionRequired) => {
                    Reply::Text(promotion_prompt())
                }
                _ => Reply::Done,
            },
            Command::Promote(role) => {
                session.choose_promotion(role)?;
                Reply::Done
            }
            Command::CancelPromotion => {
                session.cancel_promotion()?;
                Reply::Done
            }
            Command::Hint => {
                session.request_hint()?;
                Reply::Done
            }
            Command::Undo => {
                session.undo_last_exchange()?;
                Reply::Done
            }
            Command::NewGame => {
                session.new_game();
                Reply::Done
            }
            Command::Flip => {
                session.flip_board();
                Reply::Done
            }
            Command::Opening(key) => {
                session.select_opening(&key)?;
                Reply::Done
            }
            Command::Line(key) => {
                session.select_line(&key)?;
                Reply::Done
            }
            Command::Skill(level) => {
                session.set_skill_level(level)?;
                Reply::Done
            }
            Command::ListOpenings => Reply::Text(list_openings()),
            Command::ListLines => {
                let opening = session.opening();
                let active = session.line().key;
                let lines: Vec<String> = opening
                    .line_keys()
                    .map(|key| {
                        let marker = if key == active { "*" } else { " " };
                        format!("{} {}", marker, key)
                    })
                    .collect();
                Reply::Text(format!("{} lines:\n{}", opening.name, lines.join("\n")))
            }
            Command::Help => Reply::Text(HELP.to_string()),
            Command::Quit => Reply::Quit,
        };
        self.absorb_scheduled();
        Ok(reply)
    }

    /// Drive the session until `Quit` or until the command stream ends.
    /// Returns the runtime so callers can inspect the final state.
    pub async fn run<V: Presenter>(
        mut self,
        mut commands: mpsc::UnboundedReceiver<Command>,
        mut events: EngineEvents,
        presenter: &mut V,
    ) -> Self {
        let mut events_open = true;
        let mut last_view = self.session.view();
        presenter.present(&last_view);

        loop {
            let deadline = self.timers.next_deadline();
            tokio::select! {
                command = commands.recv() => match command {
                    Some(command) => match self.apply(command) {
                        Ok(Reply::Quit) => break,
                        Ok(Reply::Text(text)) => presenter.notice(&text),
                        Ok(Reply::Done) => {}
                        Err(e) => presenter.notice(&e.to_string()),
                    },
                    None => break,
                },
                event = events.recv(), if events_open => match event {
                    Some(event) => {
                        self.session.on_engine_event(event);
                        self.absorb_scheduled();
                    }
                    None => {
                        debug!("[RUNTIME] Engine event stream closed");
                        events_open = false;
                    }
                },
                _ = sleep_until(deadline) => self.fire_due(Instant::now()),
            }

            let view = self.session.view();
            if view != last_view {
                presenter.present(&view);
                last_view = view;
            }
        }

        info!("[RUNTIME] Session finished after {} plies", self.session.history().len());
        self
    }

    fn fire_due(&mut self, now: Instant) {
        for wakeup in self.timers.pop_due(now) {
            self.session.on_wakeup(wakeup);
            self.absorb_scheduled();
        }
    }

    fn absorb_scheduled(&mut self) {
        let now = Instant::now();
        for scheduled in self.session.take_scheduled() {
            self.timers.push(now + scheduled.delay, scheduled.wakeup);
        }
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}

fn promotion_prompt() -> String {
    "Promote to? (promote q|r|b|n, or cancel)".to_string()
}

fn list_openings() -> String {
    repertoire::openings()
        .iter()
        .map(|opening| {
            let side = match opening.trainee {
                Color::White => "White",
                Color::Black => "Black",
            };
            format!("{:<14} {} ({})", opening.key, opening.name, side)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ai::{EngineEvent, NoEngine, SkillLevel};
    use crate::game::rules::ChessBoard;
    use crate::game::session::SessionConfig;
    use std::time::Duration;

    #[test]
    fn test_command_parsing() {
        assert_eq!("e2e4".parse::<Command>().unwrap(), Command::Move("e2e4".to_string()));
        assert_eq!("  QUIT ".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!(
            "select E2".parse::<Command>().unwrap(),
            Command::Select(Square::E2)
        );
        assert_eq!(
            "promote n".parse::<Command>().unwrap(),
            Command::Promote(Role::Knight)
        );
        assert_eq!("skill 7".parse::<Command>().unwrap(), Command::Skill(7));
        assert!("promote k".parse::<Command>().is_err());
        assert!("skill high".parse::<Command>().is_err());
        assert!("dance".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
    }

    #[test]
    fn test_timer_queue_orders_by_deadline() {
        let mut timers = TimerQueue::default();
        let now = Instant::now();
        timers.push(now + Duration::from_secs(2), Wakeup::OpponentTurn { epoch: 2 });
        timers.push(now + Duration::from_secs(1), Wakeup::OpponentTurn { epoch: 1 });
        assert_eq!(timers.next_deadline(), Some(now + Duration::from_secs(1)));
        assert_eq!(
            timers.pop_due(now + Duration::from_secs(1)),
            vec![Wakeup::OpponentTurn { epoch: 1 }]
        );
        assert_eq!(timers.entries.len(), 1);
    }

    /// Presenter that records views and quits once the computer has moved
    struct QuitAfterFirstMove {
        views: Vec<SessionView>,
        notices: Vec<String>,
        quit: mpsc::UnboundedSender<Command>,
    }

    impl Presenter for QuitAfterFirstMove {
        fn present(&mut self, view: &SessionView) {
            if !view.moves.is_empty() {
                let _ = self.quit.send(Command::Quit);
            }
            self.views.push(view.clone());
        }

        fn notice(&mut self, text: &str) {
            self.notices.push(text.to_string());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_black_trainee_sees_opponent_move_after_settle_delay() {
        let config = SessionConfig {
            opening: "philidor".to_string(),
            skill: SkillLevel::MAX,
            rng_seed: Some(3),
            ..SessionConfig::default()
        };
        let session = TrainingSession::new(ChessBoard::new(), NoEngine, config).unwrap();
        let runtime = Runtime::new(session);

        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        events_tx
            .send(EngineEvent::Unavailable {
                message: "disabled".to_string(),
            })
            .unwrap();
        drop(events_tx);

        commands_tx.send(Command::ListOpenings).unwrap();
        let mut presenter = QuitAfterFirstMove {
            views: Vec::new(),
            notices: Vec::new(),
            quit: commands_tx,
        };
        let runtime = runtime.run(commands_rx, events_rx, &mut presenter).await;

        assert_eq!(runtime.session().history().last_move(), Some("e4"));
        assert!(presenter.views[0].flipped);
        assert!(presenter.notices[0].contains("philidor"));
    }

    #[test]
    fn test_rejected_commands_surface_as_errors() {
        let session = TrainingSession::new(
            ChessBoard::new(),
            NoEngine,
            SessionConfig {
                opening: "italian".to_string(),
                ..SessionConfig::default()
            },
        )
        .unwrap();
        let mut runtime = Runtime::new(session);
        assert!(matches!(
            runtime.apply(Command::Move("e2e5".to_string())),
            Err(TrainerError::InputRejected { .. })
        ));
        assert!(matches!(
            runtime.apply(Command::Opening("grob".to_string())),
            Err(TrainerError::UnknownOpening { .. })
        ));
        assert_eq!(runtime.apply(Command::Quit).unwrap(), Reply::Quit);
    }
}
