//! Terminal Snake runner (default binary).
//!
//! Configuration comes from the environment (see [`GameConfig`]); an invalid
//! value stops the program before the terminal is touched. Set `SNAKE_LOG` to a
//! file path to record a trace of the session (`RUST_LOG` filters it).

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_snake::engine::{FileScoreStore, GameConfig, GameController, ThreadPacer};
use tui_snake::input::CrosstermInput;
use tui_snake::term::TerminalCanvas;

const ENV_LOG_FILE: &str = "SNAKE_LOG";

fn main() -> Result<()> {
    let config = GameConfig::from_env().context("invalid configuration")?;
    init_logging()?;

    let geometry = config.geometry();
    let columns = u16::try_from(geometry.columns()).context("grid too wide for a terminal")?;
    let rows = u16::try_from(geometry.rows()).context("grid too tall for a terminal")?;
    info!(
        width = config.width,
        height = config.height,
        difficulty = config.difficulty.as_str(),
        high_score_path = %config.high_score_path.display(),
        "starting"
    );

    let mut canvas = TerminalCanvas::stdout(columns, rows);
    canvas.enter()?;

    let result = GameController::new(
        config.difficulty,
        geometry,
        &mut canvas,
        CrosstermInput::new(),
        FileScoreStore::new(&config.high_score_path),
        ThreadPacer,
    )
    .run();

    // Always try to restore terminal state.
    let _ = canvas.exit();

    let reason = result?;
    info!(?reason, "exited");
    Ok(())
}

/// Log to the file named by `SNAKE_LOG`; stdout belongs to the game.
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os(ENV_LOG_FILE) else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| {
        format!("cannot create log file {}", path.to_string_lossy())
    })?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
