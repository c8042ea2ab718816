//! Shared, atomically swapped rating snapshots.
//!
//! Readers take an `Arc<RatingStore>` and keep projecting from it while a
//! refresh rebuilds a new store off to the side. Refreshes are serialised and
//! a failed load leaves the previous store in place.

use chrono::NaiveDate;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{info, warn};

use crate::elo::rebuild;
use crate::ratings::RatingStore;
use crate::types::MatchRecord;

/// Outcome of a successful refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSummary {
    pub matches: usize,
    pub players: usize,
}

#[derive(Debug, Default)]
struct BookState {
    store: Arc<RatingStore>,
    refreshed_on: Option<NaiveDate>,
}

#[derive(Debug, Default)]
pub struct RatingBook {
    state: RwLock<BookState>,
    /// Held for the whole of a refresh
    refresh_lock: Mutex<()>,
}

impl RatingBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current ratings; stays valid across later refreshes
    pub fn snapshot(&self) -> Arc<RatingStore> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&state.store)
    }

    /// Date of the last successful refresh
    pub fn refreshed_on(&self) -> Option<NaiveDate> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .refreshed_on
    }

    /// Load the full corpus, rebuild ratings and swap them in.
    ///
    /// On a load error the current ratings are kept and the error returned.
    pub fn refresh<F, E>(&self, today: NaiveDate, load: F) -> Result<RefreshSummary, E>
    where
        F: FnOnce() -> Result<Vec<MatchRecord>, E>,
    {
        let _guard = self.refresh_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.refresh_locked(today, load)
    }

    /// Refresh unless ratings were already rebuilt on `today`.
    ///
    /// For hosts that keep one book alive across days and call this before
    /// serving each request. The one-shot CLI builds a fresh book per run and
    /// uses [`RatingBook::refresh`] directly. Returns `None` when the current
    /// ratings were kept.
    pub fn refresh_if_stale<F, E>(&self, today: NaiveDate, load: F) -> Result<Option<RefreshSummary>, E>
    where
        F: FnOnce() -> Result<Vec<MatchRecord>, E>,
    {
        let _guard = self.refresh_lock.lock().unwrap_or_else(PoisonError::into_inner);
        match self.refreshed_on() {
            Some(last) if last >= today => {
                info!(%last, "ratings are current, skipping refresh");
                Ok(None)
            }
            _ => self.refresh_locked(today, load).map(Some),
        }
    }

    fn refresh_locked<F, E>(&self, today: NaiveDate, load: F) -> Result<RefreshSummary, E>
    where
        F: FnOnce() -> Result<Vec<MatchRecord>, E>,
    {
        info!("refreshing ratings");
        let corpus = match load() {
            Ok(corpus) => corpus,
            Err(e) => {
                warn!("corpus load failed, keeping previous ratings");
                return Err(e);
            }
        };
        let store = rebuild(corpus);
        let summary = RefreshSummary {
            matches: store.matches_applied(),
            players: store.player_count(),
        };

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.store = Arc::new(store);
        state.refreshed_on = Some(today);
        Ok(summary)
    }
}

#[cfg(test)]
#[path = "book_tests.rs"]
mod book_tests;
