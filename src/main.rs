use anyhow::Result;
use clap::Parser;
use opening_trainer::core::{load_settings, save_settings, TrainerSettings};
use opening_trainer::game::ai::{
    AnalysisPort, EngineAdapter, EngineEvent, EngineEvents, NoEngine,
};
use opening_trainer::game::rules::ChessBoard;
use opening_trainer::game::runtime::{Command, Presenter, Runtime, HELP};
use opening_trainer::game::{SessionConfig, TrainingSession};
use opening_trainer::render::TerminalRenderer;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "opening-trainer")]
#[command(about = "Practise chess openings against a UCI engine", long_about = None)]
struct Cli {
    /// UCI engine executable
    #[arg(long)]
    engine: Option<PathBuf>,

    /// Opening to train (see the `openings` command)
    #[arg(long)]
    opening: Option<String>,

    /// Line of the opening; its main line when omitted
    #[arg(long)]
    line: Option<String>,

    /// Engine strength, 1-25
    #[arg(long)]
    skill: Option<u8>,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Play without an engine: book moves, then random moves
    #[arg(long)]
    no_engine: bool,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    save: bool,
}

impl Cli {
    fn apply(&self, settings: &mut TrainerSettings) {
        if let Some(engine) = &self.engine {
            settings.engine_path = engine.clone();
        }
        if let Some(opening) = &self.opening {
            settings.opening = opening.clone();
        }
        if let Some(skill) = self.skill {
            settings.skill_level = skill;
        }
        if self.seed.is_some() {
            settings.rng_seed = self.seed;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("opening_trainer=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = load_settings();
    cli.apply(&mut settings);
    let skill = settings.skill()?;

    if cli.save {
        let path = save_settings(&settings)?;
        info!("[SETTINGS] Saved to {:?}", path);
    }

    let mut config = SessionConfig::from_settings(&settings)?;
    config.line = cli.line.clone();

    if cli.no_engine {
        let (events_tx, events) = mpsc::unbounded_channel();
        let _ = events_tx.send(EngineEvent::Unavailable {
            message: "disabled with --no-engine".to_string(),
        });
        play(NoEngine, events, config).await?;
    } else {
        let (handle, events) = EngineAdapter::spawn(
            &settings.engine_path,
            skill,
            settings.engine_init_timeout(),
        );
        let runtime = play(handle, events, config).await?;
        runtime.session().port().shutdown();
    }

    Ok(())
}

async fn play<P: AnalysisPort>(
    port: P,
    events: EngineEvents,
    config: SessionConfig,
) -> Result<Runtime<ChessBoard, P>> {
    let session = TrainingSession::new(ChessBoard::new(), port, config)?;

    let (commands_tx, commands_rx) = mpsc::unbounded_channel();
    tokio::spawn(read_commands(commands_tx));

    let mut renderer = TerminalRenderer::new(std::io::stdout());
    renderer.notice(HELP);
    Ok(Runtime::new(session)
        .run(commands_rx, events, &mut renderer)
        .await)
}

/// Forward parsed stdin lines until EOF
async fn read_commands(commands: mpsc::UnboundedSender<Command>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) if line.trim().is_empty() => continue,
            Ok(Some(line)) => match line.parse::<Command>() {
                Ok(command) => {
                    if commands.send(command).is_err() {
                        break;
                    }
                }
                Err(e) => println!("{}", e),
            },
            Ok(None) => break,
            Err(e) => {
                warn!("[RUNTIME] Failed to read stdin: {}", e);
                break;
            }
        }
    }
}
