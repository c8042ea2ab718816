//! Command-line arguments for the projector binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tennis_core::Surface;

#[derive(Parser)]
#[command(name = "projector")]
#[command(version, about = "Tennis match projections from surface-weighted Elo", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "projector.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Project a single match
    Project {
        /// First player, as named in the match history
        player1: String,

        /// Second player
        player2: String,

        /// Court surface (hard, clay, grass)
        #[arg(short, long, default_value = "hard")]
        surface: Surface,

        #[command(flatten)]
        sim: SimArgs,
    },

    /// Project every match in the configured daily matchup file
    Daily {
        /// Matchup file override
        #[arg(short, long)]
        matchups: Option<PathBuf>,

        #[command(flatten)]
        sim: SimArgs,
    },

    /// Show the rating leaderboard
    Ratings {
        /// Rank by this surface's Elo instead of overall Elo
        #[arg(short, long)]
        surface: Option<Surface>,

        /// Number of players to show
        #[arg(short, long, default_value_t = 20)]
        top: usize,
    },
}

/// Simulation overrides shared by projecting commands
#[derive(Args, Debug, Clone)]
pub struct SimArgs {
    /// Sets in the match format (3 or 5)
    #[arg(short, long)]
    pub best_of: Option<u8>,

    /// Number of Monte Carlo trials
    #[arg(short = 'n', long)]
    pub simulations: Option<u32>,

    /// Seed for reproducible simulations
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}
