//! Command-line interface for connect_four.

use clap::{Parser, Subcommand};

use connect_four::BoardConfig;

/// Connect Four - terminal game with score tracking
#[derive(Parser, Debug)]
#[command(name = "connect_four")]
#[command(about = "Two-player Connect Four with win/loss tracking", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to the database file (created if it doesn't exist)
        #[arg(long, default_value = "connect_four.db")]
        db_path: String,

        /// Board rows
        #[arg(long, default_value_t = BoardConfig::DEFAULT_ROWS)]
        rows: usize,

        /// Board columns
        #[arg(long, default_value_t = BoardConfig::DEFAULT_COLS)]
        cols: usize,

        /// Give Yellow the first move instead of Red
        #[arg(long)]
        yellow_first: bool,
    },

    /// Print the win/loss standings and recent matches
    Standings {
        /// Path to the database file
        #[arg(long, default_value = "connect_four.db")]
        db_path: String,
    },
}
