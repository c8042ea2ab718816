//! Rating storage: overall Elo, per-surface Elo and per-surface records.
//!
//! Reads never insert entries. Unseen players get [`DEFAULT_ELO`] and an
//! empty record. Writes are only reachable through [`crate::EloUpdater`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::Surface;

/// Default starting Elo for unseen players
pub const DEFAULT_ELO: f64 = 1500.0;

/// Wins and losses for one player on one surface
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceRecord {
    pub wins: u32,
    pub losses: u32,
}

impl SurfaceRecord {
    pub fn total(&self) -> u32 {
        self.wins + self.losses
    }

    /// Fraction of matches won, 0 when nothing has been played
    pub fn win_pct(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.wins as f64 / total as f64
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct OverallEntry {
    pub rating: f64,
    pub matches: u32,
}

impl Default for OverallEntry {
    fn default() -> Self {
        Self {
            rating: DEFAULT_ELO,
            matches: 0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct SurfaceEntry {
    pub rating: f64,
    pub record: SurfaceRecord,
}

impl Default for SurfaceEntry {
    fn default() -> Self {
        Self {
            rating: DEFAULT_ELO,
            record: SurfaceRecord::default(),
        }
    }
}

/// Row of a rating leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player: String,
    pub rating: f64,
    pub matches: u32,
}

/// Current ratings for every player seen in the corpus
#[derive(Debug, Clone, Default)]
pub struct RatingStore {
    overall: HashMap<String, OverallEntry>,
    /// Indexed by [`Surface::idx`]
    surfaces: [HashMap<String, SurfaceEntry>; 3],
    matches_applied: usize,
}

impl RatingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_overall(&self, player: &str) -> f64 {
        self.overall
            .get(player)
            .map(|e| e.rating)
            .unwrap_or(DEFAULT_ELO)
    }

    pub fn get_surface(&self, player: &str, surface: Surface) -> f64 {
        self.surfaces[surface.idx()]
            .get(player)
            .map(|e| e.rating)
            .unwrap_or(DEFAULT_ELO)
    }

    pub fn get_surface_record(&self, player: &str, surface: Surface) -> SurfaceRecord {
        self.surfaces[surface.idx()]
            .get(player)
            .map(|e| e.record)
            .unwrap_or_default()
    }

    pub fn surface_win_pct(&self, player: &str, surface: Surface) -> f64 {
        self.get_surface_record(player, surface).win_pct()
    }

    /// Number of distinct players with an overall rating
    pub fn player_count(&self) -> usize {
        self.overall.len()
    }

    /// Number of matches replayed into this store
    pub fn matches_applied(&self) -> usize {
        self.matches_applied
    }

    /// Players sorted by rating, highest first.
    ///
    /// `None` ranks by overall Elo, `Some(surface)` by that surface's Elo.
    pub fn leaderboard(&self, surface: Option<Surface>) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = match surface {
            None => self
                .overall
                .iter()
                .map(|(name, e)| LeaderboardEntry {
                    player: name.clone(),
                    rating: e.rating,
                    matches: e.matches,
                })
                .collect(),
            Some(s) => self.surfaces[s.idx()]
                .iter()
                .map(|(name, e)| LeaderboardEntry {
                    player: name.clone(),
                    rating: e.rating,
                    matches: e.record.total(),
                })
                .collect(),
        };
        entries.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.player.cmp(&b.player))
        });
        entries
    }

    pub(crate) fn overall_mut(&mut self, player: &str) -> &mut OverallEntry {
        self.overall.entry(player.to_string()).or_default()
    }

    pub(crate) fn surface_mut(&mut self, player: &str, surface: Surface) -> &mut SurfaceEntry {
        self.surfaces[surface.idx()]
            .entry(player.to_string())
            .or_default()
    }

    pub(crate) fn mark_applied(&mut self) {
        self.matches_applied += 1;
    }
}

#[cfg(test)]
#[path = "ratings_tests.rs"]
mod ratings_tests;
