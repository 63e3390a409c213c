//! Analysis engine adapter - async worker around a UCI process
//!
//! The session never touches the engine process. It submits
//! [`AnalysisRequest`]s through an [`AnalysisPort`] and later receives
//! [`EngineEvent`]s on a channel. A single tokio task owns the pipes.
//!
//! # Architecture
//!
//! ```text
//! TrainingSession --EngineCommand--> worker task --stdin--> engine
//!        ^                               |
//!        +---------EngineEvent-----------+<--stdout-- engine
//! ```
//!
//! 1. Handshake: `uci` ... `uciok`, strength options, `isready` ... `readyok`,
//!    each bounded by the init timeout. Failure reports `Unavailable` once and
//!    the worker exits; the session falls back to random moves for good.
//! 2. One search in flight at a time (`position fen` + `go`). The engine is
//!    single-threaded and its replies carry no request id, so the worker
//!    remembers which request the current search belongs to and tags the
//!    `bestmove` with that request's purpose and FEN.
//! 3. While a search runs, new requests wait in a queue holding at most one
//!    request per purpose. A newer request replaces a queued older one of the
//!    same purpose. Primary requests go first.
//! 4. Strength changes are applied between searches, never during one.
//!
//! There is no abort: a superseded search runs to completion and its result
//! is tagged with the old FEN, which the session then discards.

use super::uci::{parse_reply, strength_commands, EngineReply, Evaluation, UciCommand};
use super::{AnalysisPurpose, SearchLimits, SkillLevel};
use crate::game::error::{EngineError, EngineResult};
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, Lines};
use tokio::process::{Child, Command};
use tokio::sync::mpsc;
use tracing::{debug, error, info, trace, warn};

/// "Evaluate this position" for one purpose
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub purpose: AnalysisPurpose,
    pub fen: String,
    pub limits: SearchLimits,
}

impl AnalysisRequest {
    /// A request with the search limits `level` assigns to `purpose`
    pub fn new(purpose: AnalysisPurpose, fen: impl Into<String>, level: SkillLevel) -> Self {
        Self {
            purpose,
            fen: fen.into(),
            limits: level.search_limits(purpose),
        }
    }
}

/// Outcome of one completed search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub purpose: AnalysisPurpose,
    /// FEN of the request this search answered
    pub fen: String,
    /// UCI text, `None` if the position has no legal moves
    pub best_move: Option<String>,
    pub evaluation: Option<Evaluation>,
    pub depth: Option<u32>,
}

/// Messages from the worker to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Handshake finished; requests will be served
    Ready,
    /// The engine cannot be used for the rest of the session
    Unavailable { message: String },
    Analysis(AnalysisResult),
}

/// Messages from the session to the worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    Analyse(AnalysisRequest),
    Configure(SkillLevel),
    Shutdown,
}

/// Where the session sends analysis intents
pub trait AnalysisPort {
    fn submit(&mut self, request: AnalysisRequest);

    /// Change engine strength for subsequent searches
    fn configure(&mut self, level: SkillLevel);
}

/// Sending half connected to a running worker
#[derive(Debug, Clone)]
pub struct EngineHandle {
    commands: mpsc::UnboundedSender<EngineCommand>,
}

impl EngineHandle {
    /// Ask the worker to send `quit` and stop
    pub fn shutdown(&self) {
        let _ = self.commands.send(EngineCommand::Shutdown);
    }

    fn send(&self, command: EngineCommand) {
        if self.commands.send(command).is_err() {
            debug!("[ENGINE] Worker has stopped, dropping command");
        }
    }
}

impl AnalysisPort for EngineHandle {
    fn submit(&mut self, request: AnalysisRequest) {
        self.send(EngineCommand::Analyse(request));
    }

    fn configure(&mut self, level: SkillLevel) {
        self.send(EngineCommand::Configure(level));
    }
}

/// Port for sessions running without an engine; every request is dropped
#[derive(Debug, Default, Clone, Copy)]
pub struct NoEngine;

impl AnalysisPort for NoEngine {
    fn submit(&mut self, request: AnalysisRequest) {
        trace!("[ENGINE] No engine, dropping {:?} request", request.purpose);
    }

    fn configure(&mut self, _level: SkillLevel) {}
}

/// Receiving half of the worker's event stream
pub type EngineEvents = mpsc::UnboundedReceiver<EngineEvent>;

/// Spawns engine workers
pub struct EngineAdapter;

impl EngineAdapter {
    /// Launch the engine executable and start a worker talking to it.
    ///
    /// Launch failures are not returned: they arrive as
    /// [`EngineEvent::Unavailable`] like every other start-up failure.
    pub fn spawn(
        path: &Path,
        level: SkillLevel,
        init_timeout: Duration,
    ) -> (EngineHandle, EngineEvents) {
        let (handle, commands, events_tx, events_rx) = channels();

        match launch(path) {
            Ok((child, stdin, stdout)) => {
                info!("[ENGINE] Launched {:?}", path);
                tokio::spawn(async move {
                    let worker = Worker::new(stdout, stdin, commands, events_tx, level);
                    worker.run(init_timeout).await;
                    drop(child);
                });
            }
            Err(e) => {
                error!("[ENGINE] {}", e);
                let _ = events_tx.send(EngineEvent::Unavailable {
                    message: e.to_string(),
                });
            }
        }

        (handle, events_rx)
    }

    /// Start a worker over arbitrary pipes, e.g. an in-memory duplex standing
    /// in for the engine process
    pub fn spawn_with_io<R, W>(
        reader: R,
        writer: W,
        level: SkillLevel,
        init_timeout: Duration,
    ) -> (EngineHandle, EngineEvents)
    where
        R: AsyncRead + Unpin + Send + 'static,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (handle, commands, events_tx, events_rx) = channels();
        tokio::spawn(async move {
            Worker::new(reader, writer, commands, events_tx, level)
                .run(init_timeout)
                .await;
        });
        (handle, events_rx)
    }
}

fn channels() -> (
    EngineHandle,
    mpsc::UnboundedReceiver<EngineCommand>,
    mpsc::UnboundedSender<EngineEvent>,
    EngineEvents,
) {
    let (commands_tx, commands_rx) = mpsc::unbounded_channel();
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    (
        EngineHandle {
            commands: commands_tx,
        },
        commands_rx,
        events_tx,
        events_rx,
    )
}

fn launch(
    path: &Path,
) -> EngineResult<(Child, tokio::process::ChildStdin, tokio::process::ChildStdout)> {
    let mut child = Command::new(path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| EngineError::Spawn {
            path: path.display().to_string(),
            source,
        })?;
    let stdin = child
        .stdin
        .take()
        .ok_or(EngineError::MissingPipe { stream: "stdin" })?;
    let stdout = child
        .stdout
        .take()
        .ok_or(EngineError::MissingPipe { stream: "stdout" })?;
    Ok((child, stdin, stdout))
}

/// Search currently running in the engine
struct InFlight {
    request: AnalysisRequest,
    evaluation: Option<Evaluation>,
    depth: Option<u32>,
}

/// At most one waiting request per purpose
#[derive(Default)]
struct RequestQueue {
    primary: Option<AnalysisRequest>,
    prediction: Option<AnalysisRequest>,
}

impl RequestQueue {
    fn push(&mut self, request: AnalysisRequest) {
        let slot = match request.purpose {
            AnalysisPurpose::Primary => &mut self.primary,
            AnalysisPurpose::ReplyPrediction => &mut self.prediction,
        };
        if let Some(old) = slot.replace(request) {
            debug!("[ENGINE] Queued {:?} request for {} superseded", old.purpose, old.fen);
        }
    }

    fn pop(&mut self) -> Option<AnalysisRequest> {
        self.primary.take().or_else(|| self.prediction.take())
    }
}

struct Worker<R, W> {
    lines: Lines<BufReader<R>>,
    writer: W,
    commands: mpsc::UnboundedReceiver<EngineCommand>,
    events: mpsc::UnboundedSender<EngineEvent>,
    level: SkillLevel,
    strength_dirty: bool,
    in_flight: Option<InFlight>,
    queue: RequestQueue,
}

impl<R, W> Worker<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    fn new(
        reader: R,
        writer: W,
        commands: mpsc::UnboundedReceiver<EngineCommand>,
        events: mpsc::UnboundedSender<EngineEvent>,
        level: SkillLevel,
    ) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
            writer,
            commands,
            events,
            level,
            strength_dirty: false,
            in_flight: None,
            queue: RequestQueue::default(),
        }
    }

    async fn run(mut self, init_timeout: Duration) {
        if let Err(e) = self.handshake(init_timeout).await {
            error!("[ENGINE] Engine unavailable: {}", e);
            let _ = self.events.send(EngineEvent::Unavailable {
                message: e.to_string(),
            });
            return;
        }
        info!("[ENGINE] Ready at {}", self.level);
        let _ = self.events.send(EngineEvent::Ready);

        if let Err(e) = self.serve().await {
            error!("[ENGINE] Engine lost: {}", e);
            let _ = self.events.send(EngineEvent::Unavailable {
                message: e.to_string(),
            });
        }
    }

    async fn handshake(&mut self, init_timeout: Duration) -> EngineResult<()> {
        self.send(&UciCommand::Uci).await?;
        self.expect(EngineReply::UciOk, "uciok", init_timeout).await?;

        for command in strength_commands(self.level) {
            self.send(&command).await?;
        }
        self.send(&UciCommand::IsReady).await?;
        self.expect(EngineReply::ReadyOk, "readyok", init_timeout)
            .await
    }

    /// Wait up to `limit` for `wanted`
    async fn expect(
        &mut self,
        wanted: EngineReply,
        name: &'static str,
        limit: Duration,
    ) -> EngineResult<()> {
        tokio::time::timeout(limit, self.read_until(&wanted))
            .await
            .map_err(|_| EngineError::HandshakeTimeout { expected: name })?
    }

    /// Read lines until `wanted` arrives, ignoring everything else
    async fn read_until(&mut self, wanted: &EngineReply) -> EngineResult<()> {
        loop {
            match self.lines.next_line().await? {
                Some(line) if parse_reply(&line).as_ref() == Some(wanted) => return Ok(()),
                Some(line) => trace!("[ENGINE] <- {}", line),
                None => return Err(EngineError::Closed),
            }
        }
    }

    /// Main loop; returns when the session goes away or the engine fails
    async fn serve(&mut self) -> EngineResult<()> {
        loop {
            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(EngineCommand::Analyse(request)) => self.queue.push(request),
                    Some(EngineCommand::Configure(level)) => {
                        self.level = level;
                        self.strength_dirty = true;
                    }
                    Some(EngineCommand::Shutdown) | None => {
                        debug!("[ENGINE] Shutting down");
                        let _ = self.send(&UciCommand::Quit).await;
                        return Ok(());
                    }
                },
                line = self.lines.next_line() => match line? {
                    Some(line) => self.on_line(&line),
                    None => return Err(EngineError::Closed),
                },
            }

            if self.in_flight.is_none() {
                self.start_next().await?;
            }
        }
    }

    fn on_line(&mut self, line: &str) {
        trace!("[ENGINE] <- {}", line);
        match parse_reply(line) {
            Some(EngineReply::Info { depth, score }) => {
                if let Some(search) = self.in_flight.as_mut() {
                    search.depth = depth.or(search.depth);
                    search.evaluation = score.or(search.evaluation);
                }
            }
            Some(EngineReply::BestMove { best }) => match self.in_flight.take() {
                Some(search) => {
                    debug!(
                        "[ENGINE] {:?} result for {}: {:?}",
                        search.request.purpose, search.request.fen, best
                    );
                    let _ = self.events.send(EngineEvent::Analysis(AnalysisResult {
                        purpose: search.request.purpose,
                        fen: search.request.fen,
                        best_move: best,
                        evaluation: search.evaluation,
                        depth: search.depth,
                    }));
                }
                None => warn!("[ENGINE] bestmove with no search running: {}", line),
            },
            _ => {}
        }
    }

    /// Apply pending strength changes, then start the next queued search
    async fn start_next(&mut self) -> EngineResult<()> {
        if self.strength_dirty {
            self.strength_dirty = false;
            info!("[ENGINE] Strength set to {}", self.level);
            for command in strength_commands(self.level) {
                self.send(&command).await?;
            }
        }

        let Some(request) = self.queue.pop() else {
            return Ok(());
        };
        self.send(&UciCommand::Position {
            fen: request.fen.clone(),
        })
        .await?;
        self.send(&UciCommand::Go {
            depth: request.limits.depth,
            movetime_ms: request.limits.movetime_ms,
        })
        .await?;
        self.in_flight = Some(InFlight {
            request,
            evaluation: None,
            depth: None,
        });
        Ok(())
    }

    async fn send(&mut self, command: &UciCommand) -> EngineResult<()> {
        trace!("[ENGINE] -> {}", command);
        self.writer
            .write_all(format!("{}\n", command).as_bytes())
            .await?;
        self.writer.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{duplex, DuplexStream};

    const FEN_A: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";
    const FEN_B: &str = "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2";

    /// The far end of the pipes: what the engine would read and write
    struct FakeEngine {
        input: Lines<BufReader<DuplexStream>>,
        output: DuplexStream,
    }

    impl FakeEngine {
        async fn read(&mut self) -> String {
            self.input.next_line().await.unwrap().unwrap()
        }

        async fn write(&mut self, line: &str) {
            self.output
                .write_all(format!("{}\n", line).as_bytes())
                .await
                .unwrap();
        }

        async fn handshake(&mut self, level: SkillLevel) {
            assert_eq!(self.read().await, "uci");
            self.write("id name Fake").await;
            self.write("uciok").await;
            for command in strength_commands(level) {
                assert_eq!(self.read().await, command.to_string());
            }
            assert_eq!(self.read().await, "isready");
            self.write("readyok").await;
        }
    }

    fn start(level: SkillLevel) -> (EngineHandle, EngineEvents, FakeEngine) {
        let (adapter_out, engine_in) = duplex(4096);
        let (engine_out, adapter_in) = duplex(4096);
        let (handle, events) =
            EngineAdapter::spawn_with_io(adapter_in, adapter_out, level, Duration::from_secs(5));
        let fake = FakeEngine {
            input: BufReader::new(engine_in).lines(),
            output: engine_out,
        };
        (handle, events, fake)
    }

    #[tokio::test]
    async fn test_handshake_sends_strength_then_ready() {
        let level = SkillLevel::new(5).unwrap();
        let (_handle, mut events, mut fake) = start(level);
        fake.handshake(level).await;
        assert_eq!(events.recv().await, Some(EngineEvent::Ready));
    }

    #[tokio::test]
    async fn test_result_is_tagged_with_request() {
        let level = SkillLevel::MAX;
        let (mut handle, mut events, mut fake) = start(level);
        fake.handshake(level).await;
        assert_eq!(events.recv().await, Some(EngineEvent::Ready));

        handle.submit(AnalysisRequest::new(AnalysisPurpose::Primary, FEN_A, level));
        assert_eq!(fake.read().await, format!("position fen {}", FEN_A));
        assert_eq!(fake.read().await, "go depth 22 movetime 5000");

        fake.write("info depth 12 score cp 31 pv e7e5").await;
        fake.write("info garbage").await;
        fake.write("bestmove e7e5 ponder g1f3").await;

        assert_eq!(
            events.recv().await,
            Some(EngineEvent::Analysis(AnalysisResult {
                purpose: AnalysisPurpose::Primary,
                fen: FEN_A.to_string(),
                best_move: Some("e7e5".to_string()),
                evaluation: Some(Evaluation::Centipawns(31)),
                depth: Some(12),
            }))
        );
    }

    #[tokio::test]
    async fn test_queue_keeps_newest_per_purpose() {
        let level = SkillLevel::MAX;
        let (mut handle, mut events, mut fake) = start(level);
        fake.handshake(level).await;
        assert_eq!(events.recv().await, Some(EngineEvent::Ready));

        handle.submit(AnalysisRequest::new(AnalysisPurpose::Primary, FEN_A, level));
        assert_eq!(fake.read().await, format!("position fen {}", FEN_A));
        fake.read().await;

        // Both arrive while FEN_A is searching; only FEN_B survives the queue
        handle.submit(AnalysisRequest::new(AnalysisPurpose::Primary, "stale", level));
        handle.submit(AnalysisRequest::new(AnalysisPurpose::Primary, FEN_B, level));
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }

        fake.write("bestmove e7e5").await;
        let first = events.recv().await;
        assert!(matches!(
            first,
            Some(EngineEvent::Analysis(AnalysisResult { ref fen, .. })) if fen == FEN_A
        ));

        assert_eq!(fake.read().await, format!("position fen {}", FEN_B));
        fake.read().await;
        fake.write("bestmove g1f3").await;
        let second = events.recv().await;
        assert!(matches!(
            second,
            Some(EngineEvent::Analysis(AnalysisResult { ref fen, .. })) if fen == FEN_B
        ));
    }

    #[tokio::test]
    async fn test_malformed_bestmove_ends_search() {
        let level = SkillLevel::MAX;
        let (mut handle, mut events, mut fake) = start(level);
        fake.handshake(level).await;
        assert_eq!(events.recv().await, Some(EngineEvent::Ready));

        handle.submit(AnalysisRequest::new(AnalysisPurpose::Primary, FEN_A, level));
        assert_eq!(fake.read().await, format!("position fen {}", FEN_A));
        fake.read().await;
        fake.write("bestmove e1e9").await;

        match events.recv().await {
            Some(EngineEvent::Analysis(result)) => {
                assert_eq!(result.fen, FEN_A);
                assert_eq!(result.best_move, None);
            }
            other => panic!("expected an analysis result, got {:?}", other),
        }

        // The worker is idle again and serves the next request
        handle.submit(AnalysisRequest::new(AnalysisPurpose::Primary, FEN_B, level));
        let next = tokio::time::timeout(Duration::from_secs(1), fake.read()).await;
        assert_eq!(next.unwrap(), format!("position fen {}", FEN_B));
    }

    #[tokio::test]
    async fn test_configure_waits_for_idle_engine() {
        let level = SkillLevel::MAX;
        let (mut handle, mut events, mut fake) = start(level);
        fake.handshake(level).await;
        assert_eq!(events.recv().await, Some(EngineEvent::Ready));

        let weaker = SkillLevel::new(10).unwrap();
        handle.configure(weaker);
        handle.submit(AnalysisRequest::new(AnalysisPurpose::ReplyPrediction, FEN_B, weaker));

        assert_eq!(fake.read().await, "setoption name UCI_LimitStrength value true");
        assert_eq!(fake.read().await, "setoption name UCI_Elo value 1700");
        assert_eq!(fake.read().await, format!("position fen {}", FEN_B));
        assert_eq!(fake.read().await, "go depth 10 movetime 1000");
    }

    #[tokio::test(start_paused = true)]
    async fn test_silent_engine_is_unavailable() {
        let (_handle, mut events, mut fake) = start(SkillLevel::DEFAULT);
        assert_eq!(fake.read().await, "uci");
        match events.recv().await {
            Some(EngineEvent::Unavailable { message }) => assert!(message.contains("uciok")),
            other => panic!("expected Unavailable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_executable_is_unavailable() {
        let (_handle, mut events) = EngineAdapter::spawn(
            Path::new("/nonexistent/opening-trainer-engine"),
            SkillLevel::DEFAULT,
            Duration::from_secs(1),
        );
        assert!(matches!(
            events.recv().await,
            Some(EngineEvent::Unavailable { .. })
        ));
    }

    #[tokio::test]
    async fn test_closed_engine_reports_unavailable() {
        let level = SkillLevel::MAX;
        let (_handle, mut events, mut fake) = start(level);
        fake.handshake(level).await;
        assert_eq!(events.recv().await, Some(EngineEvent::Ready));
        drop(fake);
        assert!(matches!(
            events.recv().await,
            Some(EngineEvent::Unavailable { .. })
        ));
    }
}
