//! Elo rating calculation and replay

use tracing::{debug, info};

use crate::ratings::RatingStore;
use crate::types::{MatchRecord, Surface};

/// K-factor for Elo updates (higher = more volatile)
pub const K_FACTOR: f64 = 32.0;

/// Expected score for a player rated `rating` against `opponent`
pub fn expected_score(rating: f64, opponent: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((opponent - rating) / 400.0))
}

/// Single writer for a [`RatingStore`].
///
/// Matches must be applied in chronological order; the update is not
/// commutative.
#[derive(Debug, Default)]
pub struct EloUpdater {
    store: RatingStore,
}

impl EloUpdater {
    pub fn new() -> Self {
        Self {
            store: RatingStore::new(),
        }
    }

    /// Clear every rating and record back to defaults
    pub fn reset(&mut self) {
        self.store = RatingStore::new();
    }

    /// Read access to the ratings built so far
    pub fn store(&self) -> &RatingStore {
        &self.store
    }

    /// Apply the next match in chronological order
    pub fn apply(&mut self, record: &MatchRecord) {
        let winner = record.winner.as_str();
        let loser = record.loser.as_str();

        // Overall ratings
        let w_elo = self.store.get_overall(winner);
        let l_elo = self.store.get_overall(loser);
        let w_exp = expected_score(w_elo, l_elo);
        let l_exp = expected_score(l_elo, w_elo);

        let w = self.store.overall_mut(winner);
        w.rating += K_FACTOR * (1.0 - w_exp);
        w.matches += 1;
        let l = self.store.overall_mut(loser);
        l.rating += K_FACTOR * (0.0 - l_exp);
        l.matches += 1;

        // Surface ratings, independent of the overall pass
        if let Some(surface) = record.surface {
            self.apply_surface(winner, loser, surface);
        }

        self.store.mark_applied();
    }

    fn apply_surface(&mut self, winner: &str, loser: &str, surface: Surface) {
        let ws_elo = self.store.get_surface(winner, surface);
        let ls_elo = self.store.get_surface(loser, surface);
        let ws_exp = expected_score(ws_elo, ls_elo);
        let ls_exp = expected_score(ls_elo, ws_elo);

        let ws = self.store.surface_mut(winner, surface);
        ws.rating += K_FACTOR * (1.0 - ws_exp);
        ws.record.wins += 1;
        let ls = self.store.surface_mut(loser, surface);
        ls.rating += K_FACTOR * (0.0 - ls_exp);
        ls.record.losses += 1;
    }

    /// Finish replay and hand over the ratings
    pub fn into_store(self) -> RatingStore {
        self.store
    }
}

/// Build a fresh rating store from a full match history.
///
/// The corpus is stably sorted by date first, so records sharing a date keep
/// their supplied order.
pub fn rebuild(corpus: impl IntoIterator<Item = MatchRecord>) -> RatingStore {
    let mut matches: Vec<MatchRecord> = corpus.into_iter().collect();
    matches.sort_by_key(|m| m.date);

    if let (Some(first), Some(last)) = (matches.first(), matches.last()) {
        debug!(from = %first.date, to = %last.date, "replaying match history");
    }

    let mut updater = EloUpdater::new();
    for record in &matches {
        updater.apply(record);
    }

    let store = updater.into_store();
    info!(
        matches = store.matches_applied(),
        players = store.player_count(),
        "ratings rebuilt"
    );
    store
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
