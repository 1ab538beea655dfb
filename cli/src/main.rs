//! sysdash binary - entry point and terminal session management.
//!
//! # Architecture
//!
//! The binary bridges [`sysdash_engine`] (application state) and
//! [`sysdash_tui`] (rendering), providing RAII-based terminal management
//! with guaranteed cleanup.
//!
//! ```text
//! main() -> DashConfig::load() -> App::start() -> TerminalSession -> run()
//! ```
//!
//! # Event Loop
//!
//! A fixed ~30 FPS cadence keeps the loading spinner moving:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`sysdash_tui::InputPump`])
//! 3. Advance application state (`app.tick()` polls the fetch)
//! 4. Render frame

use std::{
    fs::{self, OpenOptions},
    io::{Stdout, stdout},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use sysdash_engine::{App, DashConfig};
use sysdash_tui::{InputPump, draw};

const FRAME_INTERVAL: Duration = Duration::from_millis(33);

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // If we can't open a log file, prefer "no logs" over corrupting the TUI
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                warnings.push(format!(
                    "Failed to create log dir {}: {err}",
                    parent.display()
                ));
                continue;
            }
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(err) => {
                warnings.push(format!(
                    "Failed to open log file {}: {err}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.sysdash/logs/sysdash.log, next to the config file.
    if let Some(config_path) = DashConfig::path() {
        if let Some(config_dir) = config_path.parent() {
            candidates.push(config_dir.join("logs").join("sysdash.log"));
        }
    }

    // Fallback: ./.sysdash/logs/sysdash.log (useful in constrained environments)
    candidates.push(PathBuf::from(".sysdash").join("logs").join("sysdash.log"));

    candidates
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode and the alternate screen are entered on construction and
/// restored on drop, so the terminal stays usable after panics or early
/// returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = match DashConfig::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            tracing::warn!("ignoring unusable config: {err}");
            DashConfig::default()
        }
    };

    let mut app = App::start(&config)?;
    let mut input = InputPump::spawn();

    let mut session = TerminalSession::new()?;
    let result = run(&mut session.terminal, &mut app, &mut input).await;
    drop(session);

    if let Err(err) = &result {
        eprintln!("Error: {err:?}");
    }
    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    input: &mut InputPump,
) -> Result<()> {
    let mut frames = tokio::time::interval(FRAME_INTERVAL);
    loop {
        frames.tick().await;

        input.drain_into(app);
        app.tick();
        terminal.draw(|frame| draw(frame, app))?;

        if app.should_quit() {
            return Ok(());
        }
    }
}
