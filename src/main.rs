//! Connect Four - two-player terminal game with score tracking.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use connect_four::{BoardConfig, GameRepository, Player, ResultsService, run_tui};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            db_path,
            rows,
            cols,
            yellow_first,
        } => run_play(db_path, rows, cols, yellow_first),
        Command::Standings { db_path } => run_standings(db_path),
    }
}

/// Run the terminal game.
fn run_play(db_path: String, rows: usize, cols: usize, yellow_first: bool) -> Result<()> {
    let results = open_store(db_path)?;
    let config = BoardConfig::new(rows, cols);
    let first_player = if yellow_first {
        Player::Yellow
    } else {
        Player::Red
    };
    run_tui(results, config, first_player)
}

/// Print standings and recent matches to stdout.
fn run_standings(db_path: String) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let results = open_store(db_path)?;

    let players = results.standings()?;
    if players.is_empty() {
        println!("No players recorded yet.");
        return Ok(());
    }

    println!("{:<15}  {:>4}  {:>4}  {:>6}", "Player", "W", "L", "Rate");
    for player in &players {
        println!(
            "{:<15}  {:>4}  {:>4}  {:>5.1}%",
            player.name(),
            player.wins(),
            player.losses(),
            player.win_rate(),
        );
    }

    let matches = results.recent_matches(10)?;
    if !matches.is_empty() {
        println!();
        println!("Recent matches:");
        for m in &matches {
            println!(
                "{}  {} vs {}  ->  {}",
                m.played_at().format("%Y-%m-%d %H:%M"),
                m.player1(),
                m.player2(),
                m.winner(),
            );
        }
    }

    Ok(())
}

/// Opens the repository, applies migrations, and wraps it in the service.
fn open_store(db_path: String) -> Result<ResultsService> {
    let repository = GameRepository::new(db_path)?;
    repository.run_migrations()?;
    info!("Database ready");
    Ok(ResultsService::new(repository))
}
