//! Projection reports: player comparison table, shared model rows and
//! rating leaderboards.
//!
//! Everything here only reshapes engine output; no ratings or
//! probabilities are recomputed.

use serde::Serialize;
use tennis_core::{LeaderboardEntry, PlayerProjection, ProjectionResult, SetScore, SetScoreDistribution};

/// Star rating for the favourite's win probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum EloConfidence {
    None,
    One,
    Two,
    Three,
    Four,
    Five,
}

impl EloConfidence {
    pub fn from_probability(prob: f64) -> Self {
        let pct = prob * 100.0;
        if pct >= 90.0 {
            EloConfidence::Five
        } else if pct >= 80.0 {
            EloConfidence::Four
        } else if pct >= 70.0 {
            EloConfidence::Three
        } else if pct >= 60.0 {
            EloConfidence::Two
        } else if pct >= 50.0 {
            EloConfidence::One
        } else {
            EloConfidence::None
        }
    }

    pub fn stars(&self) -> String {
        let count = match self {
            EloConfidence::None => 0,
            EloConfidence::One => 1,
            EloConfidence::Two => 2,
            EloConfidence::Three => 3,
            EloConfidence::Four => 4,
            EloConfidence::Five => 5,
        };
        "⭐".repeat(count)
    }
}

/// One metric compared across both players
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub metric: &'static str,
    pub player1: String,
    pub player2: String,
}

/// One metric shared by the match
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SharedRow {
    pub metric: &'static str,
    pub value: String,
}

/// A projection plus its simulated set scores, ready for display
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub projection: ProjectionResult,
    /// Sorted by descending probability
    pub set_scores: Vec<(SetScore, f64)>,
    pub confidence: EloConfidence,
}

impl MatchReport {
    pub fn new(projection: ProjectionResult, set_scores: &SetScoreDistribution) -> Self {
        let mut scores: Vec<(SetScore, f64)> = set_scores.iter().collect();
        scores.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        let confidence = EloConfidence::from_probability(projection.favourite().win_prob);

        Self {
            projection,
            set_scores: scores,
            confidence,
        }
    }

    pub fn player_rows(&self) -> Vec<ReportRow> {
        let p1 = &self.projection.player1;
        let p2 = &self.projection.player2;
        let stars = self.confidence.stars();
        let confidence = ReportRow {
            metric: "Elo Confidence",
            player1: if p1.win_prob > p2.win_prob { stars.clone() } else { String::new() },
            player2: if p2.win_prob > p1.win_prob { stars } else { String::new() },
        };

        vec![
            compare("Surface Wins", p1, p2, |p| p.surface_record.wins.to_string()),
            compare("Surface Losses", p1, p2, |p| p.surface_record.losses.to_string()),
            compare("Surface Elo", p1, p2, |p| format!("{:.1}", p.surface_elo)),
            compare("Surface Win %", p1, p2, |p| percent(p.surface_win_pct)),
            compare("Combined Rating", p1, p2, |p| format!("{:.2}", p.combined_rating)),
            compare("Win Probability (Elo)", p1, p2, |p| percent(p.win_prob)),
            confidence,
        ]
    }

    pub fn shared_rows(&self) -> Vec<SharedRow> {
        let projection = &self.projection;
        let favourite = projection.favourite();

        let set_lines: Vec<String> = self
            .set_scores
            .iter()
            .map(|(score, p)| format!("{} {}: {:.3}", self.set_winner(score), score, p))
            .collect();

        vec![
            SharedRow {
                metric: "Surface",
                value: projection.surface.to_string(),
            },
            SharedRow {
                metric: "Projected Spread",
                value: format!("{} -{:.1}", favourite.name, projection.projected_spread.abs()),
            },
            SharedRow {
                metric: "Projected Total Games",
                value: format!("{:.1}", projection.projected_total_games),
            },
            SharedRow {
                metric: "MC Set Score Probabilities",
                value: set_lines.join("\n"),
            },
        ]
    }

    /// Name of the player who won the match with set score `score`
    fn set_winner(&self, score: &SetScore) -> &str {
        if score.player1_won() {
            &self.projection.player1.name
        } else {
            &self.projection.player2.name
        }
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let p1 = &self.projection.player1.name;
        let p2 = &self.projection.player2.name;
        let mut report = String::new();

        report.push_str("=== Player Comparison ===\n");
        report.push_str(&format!("{:<24} {:>20} {:>20}\n", "Metric", p1, p2));
        report.push_str(&"-".repeat(66));
        report.push('\n');
        for row in self.player_rows() {
            report.push_str(&format!(
                "{:<24} {:>20} {:>20}\n",
                row.metric, row.player1, row.player2
            ));
        }

        report.push_str("\n=== Model Projections ===\n");
        for row in self.shared_rows() {
            let mut lines = row.value.lines();
            report.push_str(&format!("{:<28} {}\n", row.metric, lines.next().unwrap_or("")));
            for line in lines {
                report.push_str(&format!("{:<28} {}\n", "", line));
            }
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

fn compare(
    metric: &'static str,
    p1: &PlayerProjection,
    p2: &PlayerProjection,
    value: impl Fn(&PlayerProjection) -> String,
) -> ReportRow {
    ReportRow {
        metric,
        player1: value(p1),
        player2: value(p2),
    }
}

fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Text leaderboard, one line per player
pub fn format_leaderboard(title: &str, entries: &[LeaderboardEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n", title));
    out.push_str(&format!("{:>4} {:<30} {:>8} {:>8}\n", "#", "Player", "Elo", "Matches"));
    out.push_str(&"-".repeat(53));
    out.push('\n');
    for (rank, entry) in entries.iter().enumerate() {
        out.push_str(&format!(
            "{:>4} {:<30} {:>8.1} {:>8}\n",
            rank + 1,
            entry.player,
            entry.rating,
            entry.matches
        ));
    }
    out
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
