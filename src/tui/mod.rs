//! Terminal UI for tictactoe_duel.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::Path;
use std::time::Duration;
use tictactoe_duel::Settings;
use tracing::{error, info, instrument};

use app::App;

/// How long to wait for a key before checking for due automated moves.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// File the TUI logs to, so output doesn't interfere with the terminal.
pub const LOG_FILE: &str = "tictactoe_tui.log";

/// Installs the global subscriber writing to `path`.
///
/// Call before anything else logs; earlier events would be dropped.
pub fn init_file_logging(path: impl AsRef<Path>) -> Result<()> {
    let log_file = std::fs::File::create(path.as_ref()).context("Failed to create log file")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Run the TUI client.
pub async fn run_tui(settings: Settings) -> Result<()> {
    info!(mode = %settings.mode(), think_delay_ms = settings.think_delay_ms(), "Starting TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&settings);
    let res = run_game(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Render, play due automated moves, read keys; until the user quits.
#[instrument(skip_all)]
async fn run_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.tick();
        app.sync();
        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit() {
            info!("Leaving game loop");
            return Ok(());
        }

        if event::poll(INPUT_POLL)? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                app.handle_key(key.code);
            }
        } else {
            // Let timer tasks deliver tickets.
            tokio::task::yield_now().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_logging_captures_events() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE);

        init_file_logging(&path).unwrap();
        let _ = Settings::load_or_default(dir.path().join("absent.toml")).unwrap();

        let logged = std::fs::read_to_string(&path).unwrap();
        assert!(logged.contains("Settings file not found"), "log was: {logged}");
    }
}
