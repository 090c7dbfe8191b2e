//! Terminal UI for Connect Four.

// Private module declarations
mod board;
mod controller;
mod screen;
mod screens;

// Crate-level exports via pub use
pub use controller::AppController;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info};

use crate::ResultsService;
use crate::games::connect_four::{BoardConfig, Player};

/// Runs the TUI until the user quits.
///
/// Logging goes to a file so it cannot interfere with the drawn frames;
/// the terminal is restored on the way out even when the loop fails.
pub fn run_tui(results: ResultsService, config: BoardConfig, first_player: Player) -> Result<()> {
    // Setup logging to file to avoid interfering with the TUI.
    let log_file = std::fs::File::create("connect_four_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting Connect Four TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = AppController::new(results, config, first_player);
    let res = controller.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }

    res
}
