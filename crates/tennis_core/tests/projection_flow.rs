use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tennis_core::{
    rebuild, BestOf, MatchRecord, ProjectionEngine, RatingBook, SetSimulator, Surface, DEFAULT_ELO,
};

fn season() -> Vec<MatchRecord> {
    let d = |m, day| NaiveDate::from_ymd_opt(2024, m, day).unwrap();
    vec![
        MatchRecord::new(d(1, 20), "Sinner", "Medvedev", Surface::Hard),
        MatchRecord::new(d(1, 18), "Medvedev", "Zverev", Surface::Hard),
        MatchRecord::new(d(6, 7), "Alcaraz", "Sinner", Surface::Clay),
        MatchRecord::new(d(6, 9), "Alcaraz", "Zverev", Surface::Clay),
        MatchRecord::new(d(7, 14), "Alcaraz", "Djokovic", Surface::Grass),
        MatchRecord::new(d(3, 17), "Alcaraz", "Medvedev", Surface::Hard),
    ]
}

#[test]
fn rebuild_project_and_simulate() {
    let store = rebuild(season());
    assert_eq!(store.matches_applied(), 6);

    let engine = ProjectionEngine::default();
    let projection = engine.project(&store, "Alcaraz", "Zverev", Surface::Clay);
    assert_eq!(projection.player1.surface_record.wins, 2);
    assert_eq!(projection.player2.surface_record.losses, 1);
    assert!(projection.player1.win_prob > projection.player2.win_prob);
    assert_eq!(projection.player1.win_prob + projection.player2.win_prob, 1.0);

    let sim = SetSimulator::new(
        projection.player1.win_prob,
        projection.player2.win_prob,
        BestOf::FIVE,
    )
    .unwrap();
    let dist = sim
        .run_with_rng(20_000, &mut StdRng::seed_from_u64(2024))
        .unwrap();

    let p1_match_wins: f64 = dist
        .iter()
        .filter(|(score, _)| score.player1_won())
        .map(|(_, p)| p)
        .sum();
    // The favourite wins a best-of-five more often than a single set.
    assert!(p1_match_wins > projection.player1.win_prob);
}

#[test]
fn projections_follow_book_refreshes() {
    let book = RatingBook::new();
    let today = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
    let engine = ProjectionEngine::default();

    let before = engine.project(&book.snapshot(), "Alcaraz", "Djokovic", Surface::Grass);
    assert_eq!(before.player1.surface_elo, DEFAULT_ELO);
    assert_eq!(before.player1.win_prob, 0.5);

    book.refresh(today, || Ok::<_, std::convert::Infallible>(season()))
        .unwrap();
    let after = engine.project(&book.snapshot(), "Alcaraz", "Djokovic", Surface::Grass);
    assert!(after.player1.surface_elo > DEFAULT_ELO);
    assert!(after.player1.win_prob > 0.5);
}
