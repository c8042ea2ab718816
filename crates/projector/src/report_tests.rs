use super::*;
use chrono::NaiveDate;
use tennis_core::{project, rebuild, BestOf, MatchRecord, RatingStore, SetScore, SetSimulator, Surface};

fn store() -> RatingStore {
    let d = |day| NaiveDate::from_ymd_opt(2024, 5, day).unwrap();
    rebuild(vec![
        MatchRecord::new(d(1), "Sinner", "Rune", Surface::Clay),
        MatchRecord::new(d(2), "Sinner", "Ruud", Surface::Clay),
        MatchRecord::new(d(3), "Ruud", "Rune", Surface::Clay),
    ])
}

fn report(p1: &str, p2: &str, p1_prob_override: Option<f64>) -> MatchReport {
    let projection = project(&store(), p1, p2, Surface::Clay);
    let p1_prob = p1_prob_override.unwrap_or(projection.player1.win_prob);
    let dist = SetSimulator::new(p1_prob, 1.0 - p1_prob, BestOf::THREE)
        .unwrap()
        .run_parallel(2_000, 5)
        .unwrap();
    MatchReport::new(projection, &dist)
}

#[test]
fn test_confidence_thresholds() {
    assert_eq!(EloConfidence::from_probability(0.95), EloConfidence::Five);
    assert_eq!(EloConfidence::from_probability(0.90), EloConfidence::Five);
    assert_eq!(EloConfidence::from_probability(0.85), EloConfidence::Four);
    assert_eq!(EloConfidence::from_probability(0.72), EloConfidence::Three);
    assert_eq!(EloConfidence::from_probability(0.61), EloConfidence::Two);
    assert_eq!(EloConfidence::from_probability(0.5), EloConfidence::One);
    assert_eq!(EloConfidence::from_probability(0.3), EloConfidence::None);
    assert_eq!(EloConfidence::Three.stars(), "⭐⭐⭐");
    assert_eq!(EloConfidence::None.stars(), "");
}

#[test]
fn test_player_rows() {
    let report = report("Sinner", "Rune", None);
    let rows = report.player_rows();

    let metrics: Vec<&str> = rows.iter().map(|r| r.metric).collect();
    assert_eq!(
        metrics,
        vec![
            "Surface Wins",
            "Surface Losses",
            "Surface Elo",
            "Surface Win %",
            "Combined Rating",
            "Win Probability (Elo)",
            "Elo Confidence",
        ]
    );
    assert_eq!(rows[0].player1, "2");
    assert_eq!(rows[1].player2, "2");
    assert_eq!(rows[3].player1, "100.0%");
    assert_eq!(rows[3].player2, "0.0%");
    // Stars go to the favourite only.
    assert!(!rows[6].player1.is_empty());
    assert!(rows[6].player2.is_empty());
}

#[test]
fn test_spread_names_the_favourite() {
    let forward = report("Sinner", "Rune", None);
    let reverse = report("Rune", "Sinner", None);

    let spread = |r: &MatchReport| r.shared_rows()[1].value.clone();
    assert!(spread(&forward).starts_with("Sinner -"));
    assert_eq!(spread(&forward), spread(&reverse));
}

#[test]
fn test_set_scores_sorted_and_labelled() {
    let report = report("Sinner", "Rune", Some(1.0));
    let sweep = SetScore {
        p1_sets: 2,
        p2_sets: 0,
    };
    assert_eq!(report.set_scores, vec![(sweep, 1.0)]);

    let rows = report.shared_rows();
    assert_eq!(rows[3].metric, "MC Set Score Probabilities");
    assert_eq!(rows[3].value, "Sinner 2-0: 1.000");

    let even = self::report("Sinner", "Rune", Some(0.5));
    let probs: Vec<f64> = even.set_scores.iter().map(|(_, p)| *p).collect();
    assert!(probs.windows(2).all(|w| w[0] >= w[1]));
    assert!(even.shared_rows()[3].value.contains("Rune 0-2:"));
    assert!(even.shared_rows()[3].value.contains("Rune 1-2:"));
    assert!(even.shared_rows()[3].value.contains("Sinner 2-1:"));
}

#[test]
fn test_unknown_players_render() {
    let report = report("Qualifier A", "Qualifier B", None);
    let text = report.generate_report();

    assert!(text.contains("=== Player Comparison ==="));
    assert!(text.contains("=== Model Projections ==="));
    assert!(text.contains("50.0%"));
    assert!(text.contains("Qualifier A -0.0"));
    assert!(text.contains("20.0"));
}

#[test]
fn test_report_serializes() {
    let report = report("Sinner", "Ruud", None);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["projection"]["player1"]["name"], "Sinner");
    let set_scores = json["set_scores"].as_array().unwrap();
    assert!(set_scores.len() >= 2);
    assert!(set_scores[0][0].as_str().unwrap().contains('-'));
}

#[test]
fn test_leaderboard_format() {
    let board = store().leaderboard(Some(Surface::Clay));
    let text = format_leaderboard("Clay Elo", &board);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "=== Clay Elo ===");
    assert!(lines[3].contains("Sinner"));
    assert_eq!(lines.len(), 3 + board.len());
}
