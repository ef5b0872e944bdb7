use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::PathBuf,
    sync::Mutex,
};

use clap::Parser;
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use vertical_pong::{GameConfig, PongError};

mod app;
mod helpers;
mod render;
mod theme;

use crate::{app::App, theme::GameTheme};

#[derive(Parser, Debug)]
#[command(name = "vertical-pong", version, about = "Vertical pong in the terminal")]
struct Cli {
    /// JSON file with game settings; missing fields keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write logs (the terminal is busy drawing the game)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Game tick period in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Serve in a random horizontal direction
    #[arg(long)]
    random_serve: bool,

    #[arg(long, value_enum, default_value_t = GameTheme::Classic)]
    theme: GameTheme,
}

fn init_logging(path: Option<PathBuf>) -> io::Result<()> {
    let path = path.unwrap_or_else(|| std::env::temp_dir().join("vertical-pong.log"));
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_config(cli: &Cli) -> Result<GameConfig, PongError> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(tick_ms) = cli.tick_ms {
        config.game_tick_ms = tick_ms;
    }
    if cli.random_serve {
        config.random_serve = true;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), PongError> {
    let cli = Cli::parse();
    init_logging(cli.log_file.clone())?;
    let config = load_config(&cli)?;
    info!(?config, theme = ?cli.theme, "starting");

    let terminal = ratatui::init();

    // Without release events held keys fall back to a timeout.
    let key_releases = terminal::supports_keyboard_enhancement().unwrap_or(false);
    info!(key_releases, "keyboard capabilities detected");
    let mut stdout = io::stdout();
    if key_releases {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }

    let mut app = App::new(config, cli.theme, key_releases);
    let app_result = app.run(terminal);

    if key_releases {
        stdout.lock().execute(PopKeyboardEnhancementFlags)?;
    }
    ratatui::restore();

    match &app_result {
        Ok(()) => {
            let mut out = io::stdout().lock();
            writeln!(out, "Thanks for playing vertical pong!")?;
            let machine = app.machine();
            let scores = machine
                .game()
                .map(|game| *game.scores())
                .or_else(|| machine.last_scores().map(|(_, scores)| scores));
            if let Some(scores) = scores {
                writeln!(
                    out,
                    "Final Score: Top {} - Bottom {}",
                    scores.score_top(),
                    scores.score_bottom()
                )?;
            }
        }
        Err(e) => {
            error!(error = %e, "game loop failed");
            eprintln!("Game ended with error: {}", e);
        }
    }

    Ok(app_result?)
}
