//! Monte Carlo simulation of set scores.
//!
//! Each set is an independent draw won by player 1 with the match-level
//! probability; there is no carry-over between sets. A trial ends when one
//! player reaches `best_of / 2 + 1` sets.

use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::EngineError;

/// Trials per projection when the caller does not choose a count
pub const DEFAULT_SIMULATIONS: u32 = 10_000;

/// Trials per independently seeded chunk in parallel runs
const CHUNK_TRIALS: u32 = 4096;

/// Tolerance for `p1 + p2 == 1`
const PROB_SUM_EPSILON: f64 = 1e-9;

/// Match format; always an odd number of sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BestOf(u8);

impl BestOf {
    pub const THREE: BestOf = BestOf(3);
    pub const FIVE: BestOf = BestOf(5);

    pub fn new(sets: u8) -> Result<Self, EngineError> {
        if sets == 0 || sets % 2 == 0 {
            return Err(EngineError::InvalidBestOf(sets));
        }
        Ok(Self(sets))
    }

    pub fn sets(self) -> u8 {
        self.0
    }

    pub fn sets_to_win(self) -> u8 {
        self.0 / 2 + 1
    }
}

impl Default for BestOf {
    fn default() -> Self {
        Self::THREE
    }
}

impl TryFrom<u8> for BestOf {
    type Error = EngineError;

    fn try_from(sets: u8) -> Result<Self, Self::Error> {
        Self::new(sets)
    }
}

impl From<BestOf> for u8 {
    fn from(best_of: BestOf) -> u8 {
        best_of.0
    }
}

/// Final sets won by each player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SetScore {
    pub p1_sets: u8,
    pub p2_sets: u8,
}

impl SetScore {
    pub fn player1_won(&self) -> bool {
        self.p1_sets > self.p2_sets
    }
}

impl fmt::Display for SetScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.p1_sets, self.p2_sets)
    }
}

/// Serialized as its `"p1-p2"` label
impl Serialize for SetScore {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Empirical distribution over final set scores
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetScoreDistribution {
    counts: BTreeMap<SetScore, u32>,
    trials: u32,
}

impl SetScoreDistribution {
    fn record(&mut self, score: SetScore) {
        *self.counts.entry(score).or_insert(0) += 1;
        self.trials += 1;
    }

    fn merge(mut self, other: SetScoreDistribution) -> Self {
        for (score, count) in other.counts {
            *self.counts.entry(score).or_insert(0) += count;
        }
        self.trials += other.trials;
        self
    }

    pub fn trials(&self) -> u32 {
        self.trials
    }

    pub fn count(&self, score: SetScore) -> u32 {
        self.counts.get(&score).copied().unwrap_or(0)
    }

    /// Probability of the score labelled `label` (e.g. `"2-1"`), 0 if never seen
    pub fn probability(&self, label: &str) -> f64 {
        self.iter()
            .find(|(score, _)| score.to_string() == label)
            .map(|(_, p)| p)
            .unwrap_or(0.0)
    }

    /// Observed scores with their empirical probabilities
    pub fn iter(&self) -> impl Iterator<Item = (SetScore, f64)> + '_ {
        let trials = self.trials as f64;
        self.counts
            .iter()
            .map(move |(score, &count)| (*score, count as f64 / trials))
    }

    /// Label to probability map, e.g. `{"2-0": 0.41, "2-1": 0.22, ...}`
    pub fn probabilities(&self) -> BTreeMap<String, f64> {
        self.iter()
            .map(|(score, p)| (score.to_string(), p))
            .collect()
    }
}

/// Validated simulation inputs
#[derive(Debug, Clone, Copy)]
pub struct SetSimulator {
    p1_prob: f64,
    best_of: BestOf,
}

impl SetSimulator {
    pub fn new(p1_prob: f64, p2_prob: f64, best_of: BestOf) -> Result<Self, EngineError> {
        let in_range = |p: f64| (0.0..=1.0).contains(&p);
        if !in_range(p1_prob) || !in_range(p2_prob) || (p1_prob + p2_prob - 1.0).abs() > PROB_SUM_EPSILON {
            return Err(EngineError::InvalidProbability {
                p1: p1_prob,
                p2: p2_prob,
            });
        }
        Ok(Self { p1_prob, best_of })
    }

    pub fn best_of(&self) -> BestOf {
        self.best_of
    }

    /// Play one match set by set
    pub fn play<R: Rng + ?Sized>(&self, rng: &mut R) -> SetScore {
        let target = self.best_of.sets_to_win();
        let mut score = SetScore {
            p1_sets: 0,
            p2_sets: 0,
        };
        while score.p1_sets < target && score.p2_sets < target {
            if rng.gen_bool(self.p1_prob) {
                score.p1_sets += 1;
            } else {
                score.p2_sets += 1;
            }
        }
        score
    }

    /// Run `n_simulations` trials on the caller's random source
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        n_simulations: u32,
        rng: &mut R,
    ) -> Result<SetScoreDistribution, EngineError> {
        if n_simulations == 0 {
            return Err(EngineError::NoSimulations);
        }
        let mut dist = SetScoreDistribution::default();
        for _ in 0..n_simulations {
            dist.record(self.play(rng));
        }
        Ok(dist)
    }

    /// Run on the thread-local generator; results vary between runs
    pub fn run(&self, n_simulations: u32) -> Result<SetScoreDistribution, EngineError> {
        self.run_with_rng(n_simulations, &mut thread_rng())
    }

    /// Run trials across the rayon pool.
    ///
    /// Trials are split into fixed chunks, each seeded from `seed` and its
    /// chunk index, so the result depends only on `seed` and not on the
    /// number of threads.
    pub fn run_parallel(&self, n_simulations: u32, seed: u64) -> Result<SetScoreDistribution, EngineError> {
        if n_simulations == 0 {
            return Err(EngineError::NoSimulations);
        }
        let chunks = n_simulations.div_ceil(CHUNK_TRIALS);
        let dist = (0..chunks)
            .into_par_iter()
            .map(|chunk| {
                let start = chunk * CHUNK_TRIALS;
                let trials = CHUNK_TRIALS.min(n_simulations - start);
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(chunk as u64));
                let mut partial = SetScoreDistribution::default();
                for _ in 0..trials {
                    partial.record(self.play(&mut rng));
                }
                partial
            })
            .reduce(SetScoreDistribution::default, SetScoreDistribution::merge);
        Ok(dist)
    }
}

/// Simulate `n_simulations` matches and return the set-score distribution.
///
/// No seeding is done here; use [`SetSimulator::run_with_rng`] or
/// [`SetSimulator::run_parallel`] for reproducible results.
pub fn simulate(
    p1_prob: f64,
    p2_prob: f64,
    best_of: u8,
    n_simulations: u32,
) -> Result<SetScoreDistribution, EngineError> {
    let best_of = BestOf::new(best_of)?;
    SetSimulator::new(p1_prob, p2_prob, best_of)?.run(n_simulations)
}

#[cfg(test)]
#[path = "simulation_tests.rs"]
mod simulation_tests;
