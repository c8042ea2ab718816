//! Match projector for Topspin Analytics
//!
//! This crate wires the rating engine to the outside world:
//! - Loading the historical match corpus and daily matchups from CSV
//! - TOML configuration for paths and model constants
//! - Formatting projections into comparison tables or JSON
//!
//! # Usage
//!
//! ```bash
//! # Project a single match on clay, best of five
//! cargo run -p projector -- project "Carlos Alcaraz" "Jannik Sinner" --surface clay --best-of 5
//!
//! # Project every row of the daily matchup file
//! cargo run -p projector -- daily
//!
//! # Top 20 grass-court ratings
//! cargo run -p projector -- ratings --surface grass --top 20
//! ```

pub mod config;
pub mod corpus;
pub mod matchups;
pub mod report;

pub use config::{CorpusConfig, ProjectorConfig, SimulationConfig};
pub use corpus::{load_corpus, parse_match_date, CorpusError, LoadedCorpus};
pub use matchups::{load_matchups, Matchup};
pub use report::{format_leaderboard, EloConfidence, MatchReport, ReportRow, SharedRow};
