//! Match projection from current ratings.
//!
//! A player's combined rating blends surface Elo, overall Elo and surface win
//! percentage. Win probability is the Elo expected score of the two combined
//! ratings. Spread and total games are linear heuristics on that probability.

use serde::{Deserialize, Serialize};

use crate::elo::expected_score;
use crate::error::EngineError;
use crate::ratings::{RatingStore, SurfaceRecord};
use crate::types::Surface;

/// Tunable constants of the projection formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub surface_elo_weight: f64,
    pub overall_elo_weight: f64,
    pub surface_win_pct_weight: f64,
    /// Maps a win percentage in [0, 1] onto the Elo scale
    pub win_pct_scale: f64,
    /// Games of spread for a certain favourite
    pub spread_scale: f64,
    pub total_games_base: f64,
    pub total_games_scale: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            surface_elo_weight: 0.6,
            overall_elo_weight: 0.1,
            surface_win_pct_weight: 0.3,
            win_pct_scale: 1000.0,
            spread_scale: 6.0,
            total_games_base: 20.0,
            total_games_scale: 10.0,
        }
    }
}

impl ProjectionConfig {
    /// Weights must be non-negative and sum to 1; all constants finite.
    pub fn validate(&self) -> Result<(), EngineError> {
        let weights = [
            self.surface_elo_weight,
            self.overall_elo_weight,
            self.surface_win_pct_weight,
        ];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(EngineError::InvalidConfig(
                "weights must be finite and non-negative".to_string(),
            ));
        }
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > 1e-9 {
            return Err(EngineError::InvalidConfig(format!(
                "weights must sum to 1.0, got {}",
                sum
            )));
        }
        let constants = [
            self.win_pct_scale,
            self.spread_scale,
            self.total_games_base,
            self.total_games_scale,
        ];
        if constants.iter().any(|c| !c.is_finite()) {
            return Err(EngineError::InvalidConfig(
                "scale constants must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// One side of a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProjection {
    pub name: String,
    pub surface_record: SurfaceRecord,
    pub surface_elo: f64,
    pub overall_elo: f64,
    pub surface_win_pct: f64,
    pub combined_rating: f64,
    pub win_prob: f64,
}

/// Snapshot of a projected match; never cached across refreshes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub player1: PlayerProjection,
    pub player2: PlayerProjection,
    pub surface: Surface,
    /// Player 1's expected game margin, negative when player 2 is favoured
    pub projected_spread: f64,
    pub projected_total_games: f64,
}

impl ProjectionResult {
    /// The favoured side; player 1 on an exact tie
    pub fn favourite(&self) -> &PlayerProjection {
        if self.player2.win_prob > self.player1.win_prob {
            &self.player2
        } else {
            &self.player1
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project `player1` against `player2` on `surface`.
    ///
    /// Unseen players project with default ratings rather than failing.
    pub fn project(
        &self,
        store: &RatingStore,
        player1: &str,
        player2: &str,
        surface: Surface,
    ) -> ProjectionResult {
        let mut p1 = self.player_side(store, player1, surface);
        let mut p2 = self.player_side(store, player2, surface);

        let p1_win_prob = expected_score(p1.combined_rating, p2.combined_rating);
        let p2_win_prob = 1.0 - p1_win_prob;
        p1.win_prob = p1_win_prob;
        p2.win_prob = p2_win_prob;

        ProjectionResult {
            player1: p1,
            player2: p2,
            surface,
            projected_spread: self.spread(p1_win_prob, p2_win_prob),
            projected_total_games: self.total_games(p1_win_prob),
        }
    }

    /// Weighted blend of surface Elo, overall Elo and scaled surface win rate
    pub fn combined_rating(&self, surface_elo: f64, overall_elo: f64, surface_win_pct: f64) -> f64 {
        let c = &self.config;
        c.surface_elo_weight * surface_elo
            + c.overall_elo_weight * overall_elo
            + c.surface_win_pct_weight * (surface_win_pct * c.win_pct_scale)
    }

    pub fn spread(&self, p1_win_prob: f64, p2_win_prob: f64) -> f64 {
        round1((p1_win_prob - p2_win_prob) * self.config.spread_scale)
    }

    pub fn total_games(&self, p1_win_prob: f64) -> f64 {
        round1(self.config.total_games_base + self.config.total_games_scale * (p1_win_prob - 0.5).abs())
    }

    fn player_side(&self, store: &RatingStore, player: &str, surface: Surface) -> PlayerProjection {
        let surface_elo = store.get_surface(player, surface);
        let overall_elo = store.get_overall(player);
        let surface_win_pct = store.surface_win_pct(player, surface);

        PlayerProjection {
            name: player.to_string(),
            surface_record: store.get_surface_record(player, surface),
            surface_elo,
            overall_elo,
            surface_win_pct,
            combined_rating: self.combined_rating(surface_elo, overall_elo, surface_win_pct),
            win_prob: 0.0,
        }
    }
}

/// Project with the default constants
pub fn project(store: &RatingStore, player1: &str, player2: &str, surface: Surface) -> ProjectionResult {
    ProjectionEngine::default().project(store, player1, player2, surface)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod projection_tests;
