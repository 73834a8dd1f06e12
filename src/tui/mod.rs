//! Terminal UI for playing with time travel.

mod app;
mod input;
mod ui;

pub use app::{App, HitMap};
pub use input::Focus;

use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Run the TUI until the user quits.
pub fn run_tui(config: AppConfig) -> Result<()> {
    // Log to a file so output never lands on the alternate screen.
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting Strictly Timetravel TUI");

    enable_raw_mode()?;
    let mut terminal = setup_or_restore(setup_terminal, restore_terminal)?;

    let app = App::new(&config);
    let res = run_app(&mut terminal, app);

    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Runs `setup`; if it fails, runs `restore` before returning the setup error.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    match setup() {
        Ok(value) => Ok(value),
        Err(err) => {
            if let Err(restore_err) = restore() {
                error!(error = ?restore_err, "Failed to restore terminal");
            }
            Err(err)
        }
    }
}

/// Draw, wait for one event, handle it; repeat until quit.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
            _ => {}
        }

        if app.should_quit() {
            info!(moves = app.history().move_count(), "Leaving game");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let res: Result<()> = setup_or_restore(
            || Err(anyhow::anyhow!("no alternate screen")),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(restored.get());
        assert_eq!(res.unwrap_err().to_string(), "no alternate screen");
    }

    #[test]
    fn test_successful_setup_keeps_terminal() {
        let restored = Cell::new(false);
        let res = setup_or_restore(
            || Ok(7),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert_eq!(res.unwrap(), 7);
        assert!(!restored.get());
    }

    #[test]
    fn test_setup_error_wins_over_restore_error() {
        let res: Result<()> = setup_or_restore(
            || Err(anyhow::anyhow!("setup failed")),
            || Err(anyhow::anyhow!("restore failed")),
        );
        assert_eq!(res.unwrap_err().to_string(), "setup failed");
    }
}
