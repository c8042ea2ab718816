//! Tennis rating engine
//!
//! This crate provides:
//! - Overall and per-surface Elo ratings rebuilt from a match history
//! - Match projections (win probability, spread, total games)
//! - Monte Carlo simulation of set scores
//!
//! Corpus ingestion and presentation live in the `projector` crate.

pub mod book;
pub mod elo;
pub mod error;
pub mod projection;
pub mod ratings;
pub mod simulation;
pub mod types;

pub use book::{RatingBook, RefreshSummary};
pub use elo::{expected_score, rebuild, EloUpdater, K_FACTOR};
pub use error::EngineError;
pub use projection::{project, PlayerProjection, ProjectionConfig, ProjectionEngine, ProjectionResult};
pub use ratings::{LeaderboardEntry, RatingStore, SurfaceRecord, DEFAULT_ELO};
pub use simulation::{
    simulate, BestOf, SetScore, SetScoreDistribution, SetSimulator, DEFAULT_SIMULATIONS,
};
pub use types::{MatchRecord, Surface};
