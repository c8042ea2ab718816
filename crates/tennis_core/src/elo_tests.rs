use super::*;
use crate::ratings::DEFAULT_ELO;
use crate::types::Surface;
use chrono::NaiveDate;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

#[test]
fn test_elo_calculation() {
    // Equal ratings should give 50% expected score
    assert_eq!(expected_score(1500.0, 1500.0), 0.5);

    let favourite = expected_score(1900.0, 1500.0);
    assert!((favourite - 10.0 / 11.0).abs() < 1e-12);
    assert!((favourite + expected_score(1500.0, 1900.0) - 1.0).abs() < 1e-12);
}

#[test]
fn test_first_match_moves_half_k() {
    let mut updater = EloUpdater::new();
    updater.apply(&MatchRecord::new(day(1), "Alcaraz", "Sinner", Surface::Clay));

    let store = updater.store();
    assert_eq!(store.get_overall("Alcaraz"), DEFAULT_ELO + 16.0);
    assert_eq!(store.get_overall("Sinner"), DEFAULT_ELO - 16.0);
    assert_eq!(store.get_surface("Alcaraz", Surface::Clay), DEFAULT_ELO + 16.0);
    assert_eq!(store.get_surface("Sinner", Surface::Clay), DEFAULT_ELO - 16.0);
}

#[test]
fn test_surface_rating_only_moves_on_its_surface() {
    let mut updater = EloUpdater::new();
    updater.apply(&MatchRecord::new(day(1), "A", "B", Surface::Grass));

    let store = updater.store();
    assert_eq!(store.get_surface("A", Surface::Hard), DEFAULT_ELO);
    assert_eq!(store.get_surface("A", Surface::Clay), DEFAULT_ELO);
    assert_eq!(store.get_surface_record("A", Surface::Grass).wins, 1);
    assert_eq!(store.get_surface_record("B", Surface::Grass).losses, 1);
    assert_eq!(store.get_surface_record("B", Surface::Hard).total(), 0);
}

#[test]
fn test_unsurfaced_match_moves_overall_only() {
    let mut updater = EloUpdater::new();
    updater.apply(&MatchRecord::unsurfaced(day(1), "Sampras", "Agassi"));

    let store = updater.store();
    assert_eq!(store.get_overall("Sampras"), DEFAULT_ELO + 16.0);
    assert_eq!(store.get_overall("Agassi"), DEFAULT_ELO - 16.0);
    assert_eq!(store.matches_applied(), 1);
    for surface in Surface::ALL {
        assert_eq!(store.get_surface("Sampras", surface), DEFAULT_ELO);
        assert_eq!(store.get_surface("Agassi", surface), DEFAULT_ELO);
        assert_eq!(store.get_surface_record("Sampras", surface).total(), 0);
        assert_eq!(store.get_surface_record("Agassi", surface).total(), 0);
    }
}

#[test]
fn test_unsurfaced_matches_shift_later_overall_updates() {
    let mut updater = EloUpdater::new();
    updater.apply(&MatchRecord::new(day(1), "Agassi", "Sampras", Surface::Clay));
    updater.apply(&MatchRecord::unsurfaced(day(2), "Sampras", "Agassi"));
    updater.apply(&MatchRecord::unsurfaced(day(3), "Sampras", "Agassi"));

    let store = updater.store();
    assert!(store.get_overall("Sampras") > store.get_overall("Agassi"));
    // Clay still reflects only the clay meeting.
    assert_eq!(store.get_surface("Agassi", Surface::Clay), DEFAULT_ELO + 16.0);
    assert_eq!(store.get_surface_record("Sampras", Surface::Clay).losses, 1);
}

#[test]
fn test_surface_update_uses_surface_ratings() {
    let mut updater = EloUpdater::new();
    // A builds an overall lead on hard, then loses the first clay meeting.
    updater.apply(&MatchRecord::new(day(1), "A", "B", Surface::Hard));
    updater.apply(&MatchRecord::new(day(2), "B", "A", Surface::Clay));

    let store = updater.store();
    // Clay ratings started level, so the clay swing is exactly K/2.
    assert_eq!(store.get_surface("B", Surface::Clay), DEFAULT_ELO + 16.0);
    assert_eq!(store.get_surface("A", Surface::Clay), DEFAULT_ELO - 16.0);
    // Overall swing is larger because B was the overall underdog.
    assert!(store.get_overall("B") - (DEFAULT_ELO - 16.0) > 16.0);
}

#[test]
fn test_reset_clears_state() {
    let mut updater = EloUpdater::new();
    updater.apply(&MatchRecord::new(day(1), "A", "B", Surface::Hard));
    updater.reset();

    let store = updater.store();
    assert_eq!(store.get_overall("A"), DEFAULT_ELO);
    assert_eq!(store.matches_applied(), 0);
    assert_eq!(store.player_count(), 0);
}

#[test]
fn test_order_matters() {
    let a_then_b = rebuild(vec![
        MatchRecord::new(day(1), "A", "B", Surface::Hard),
        MatchRecord::new(day(2), "B", "A", Surface::Hard),
    ]);
    let b_then_a = rebuild(vec![
        MatchRecord::new(day(1), "B", "A", Surface::Hard),
        MatchRecord::new(day(2), "A", "B", Surface::Hard),
    ]);

    assert_ne!(a_then_b.get_overall("A"), b_then_a.get_overall("A"));
    // Whoever won last finishes ahead.
    assert!(a_then_b.get_overall("B") > a_then_b.get_overall("A"));
    assert!(b_then_a.get_overall("A") > b_then_a.get_overall("B"));
}

#[test]
fn test_rebuild_sorts_by_date() {
    let shuffled = rebuild(vec![
        MatchRecord::new(day(5), "A", "B", Surface::Clay),
        MatchRecord::new(day(1), "B", "A", Surface::Clay),
    ]);
    let ordered = rebuild(vec![
        MatchRecord::new(day(1), "B", "A", Surface::Clay),
        MatchRecord::new(day(5), "A", "B", Surface::Clay),
    ]);

    assert_eq!(shuffled.get_overall("A"), ordered.get_overall("A"));
    assert_eq!(shuffled.get_surface("B", Surface::Clay), ordered.get_surface("B", Surface::Clay));
    assert_eq!(shuffled.matches_applied(), 2);
}

#[test]
fn test_rebuild_is_idempotent() {
    let corpus = vec![
        MatchRecord::new(day(1), "A", "B", Surface::Hard),
        MatchRecord::new(day(2), "C", "A", Surface::Grass),
        MatchRecord::new(day(3), "B", "C", Surface::Clay),
    ];
    let first = rebuild(corpus.clone());
    let second = rebuild(corpus);

    for player in ["A", "B", "C"] {
        assert_eq!(first.get_overall(player), second.get_overall(player));
        for surface in Surface::ALL {
            assert_eq!(
                first.get_surface(player, surface),
                second.get_surface(player, surface)
            );
        }
    }
}
