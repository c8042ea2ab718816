//! Projector CLI
//!
//! Rebuild ratings from the match history and project matchups.

mod cli;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use projector::{format_leaderboard, load_corpus, load_matchups, MatchReport, ProjectorConfig};
use tennis_core::{BestOf, ProjectionEngine, RatingBook, RatingStore, SetSimulator, Surface};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands, OutputFormat, SimArgs};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "projector=info,tennis_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = ProjectorConfig::load(&cli.config)?;

    let book = RatingBook::new();
    let summary = book
        .refresh(Local::now().date_naive(), || {
            load_corpus(&config.corpus).map(|corpus| corpus.matches)
        })
        .context("Failed to load match history")?;
    info!(matches = summary.matches, players = summary.players, "ratings ready");

    let store = book.snapshot();
    match cli.command {
        Commands::Project {
            player1,
            player2,
            surface,
            sim,
        } => run_project(&config, &store, &player1, &player2, surface, &sim),
        Commands::Daily { matchups, sim } => run_daily(&config, &store, matchups, &sim),
        Commands::Ratings { surface, top } => {
            show_leaderboard(&store, surface, top);
            Ok(())
        }
    }
}

/// Project one match and simulate its set scores
fn build_report(
    config: &ProjectorConfig,
    store: &RatingStore,
    player1: &str,
    player2: &str,
    surface: Surface,
    sim: &SimArgs,
) -> anyhow::Result<MatchReport> {
    let engine = ProjectionEngine::new(config.projection.clone())?;
    let projection = engine.project(store, player1, player2, surface);

    let best_of = match sim.best_of {
        Some(sets) => BestOf::new(sets)?,
        None => config.simulation.best_of,
    };
    let simulations = sim.simulations.unwrap_or(config.simulation.simulations);
    let simulator = SetSimulator::new(
        projection.player1.win_prob,
        projection.player2.win_prob,
        best_of,
    )?;
    let set_scores = match sim.seed.or(config.simulation.seed) {
        Some(seed) => simulator.run_parallel(simulations, seed)?,
        None => simulator.run(simulations)?,
    };

    Ok(MatchReport::new(projection, &set_scores))
}

fn run_project(
    config: &ProjectorConfig,
    store: &RatingStore,
    player1: &str,
    player2: &str,
    surface: Surface,
    sim: &SimArgs,
) -> anyhow::Result<()> {
    let report = build_report(config, store, player1, player2, surface, sim)?;
    match sim.format {
        OutputFormat::Table => report.print_report(),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn run_daily(
    config: &ProjectorConfig,
    store: &RatingStore,
    matchups: Option<std::path::PathBuf>,
    sim: &SimArgs,
) -> anyhow::Result<()> {
    let path = matchups
        .or_else(|| config.corpus.matchups.clone())
        .context("No matchup file configured; set corpus.matchups or pass --matchups")?;
    let matchups = load_matchups(&path)?;
    info!(count = matchups.len(), path = %path.display(), "projecting daily matchups");

    let mut reports = Vec::with_capacity(matchups.len());
    for matchup in &matchups {
        let report = build_report(
            config,
            store,
            &matchup.player1,
            &matchup.player2,
            matchup.surface,
            sim,
        )?;
        if sim.format == OutputFormat::Table {
            println!("##### {} #####", matchup.label());
            report.print_report();
        }
        reports.push(report);
    }

    if sim.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}

fn show_leaderboard(store: &RatingStore, surface: Option<Surface>, top: usize) {
    let title = match surface {
        Some(s) => format!("{} Elo Leaderboard", s),
        None => "Overall Elo Leaderboard".to_string(),
    };
    let mut entries = store.leaderboard(surface);
    entries.truncate(top);
    print!("{}", format_leaderboard(&title, &entries));
}
