mod common;

use common::*;
use fastrand::Rng;
use slotforge::error::SlotForgeError;
use slotforge::schedule::Schedule;
use slotforge::season::{League, Season, SeasonCalendar};
use std::collections::HashSet;
use std::sync::Arc;

#[test]
fn test_identity_is_literal_order() {
    let s = Schedule::identity(demo_season());
    assert_eq!(s.len(), 42);
    assert_eq!(s.assignment(), get_sorted(s.assignment()).as_slice());
    assert_eq!(s.matchup_at(17), 17);
    assert!(s.cached_score().is_none());
}

#[test]
fn test_from_assignment_rejects_non_permutations() {
    let season = demo_season();
    let mut bad: Vec<usize> = (0..42).collect();
    bad[5] = 4;
    let err = Schedule::from_assignment(season.clone(), &bad).unwrap_err();
    assert!(matches!(err, SlotForgeError::InvalidPermutation(_)));

    let short: Vec<usize> = (0..41).collect();
    assert!(Schedule::from_assignment(season.clone(), &short).is_err());

    let mut out_of_range: Vec<usize> = (0..42).collect();
    out_of_range[0] = 42;
    assert!(Schedule::from_assignment(season, &out_of_range).is_err());
}

#[test]
fn test_swap_keeps_inverse() {
    let mut s = Schedule::identity(demo_season());
    s.swap(3, 30);
    assert_eq!(s.gameslot_of(3), 30);
    assert_eq!(s.gameslot_of(30), 3);
    for m in 0..s.len() {
        assert_eq!(s.matchup_at(s.gameslot_of(m)), m);
    }

    s.swap(3, 30);
    assert_eq!(s, Schedule::identity(demo_season()));
    assert_eq!(s.assignment()[3], 3);
}

#[test]
fn test_self_swap_is_noop() {
    let mut s = Schedule::identity(demo_season());
    s.swap(9, 9);
    assert_eq!(s.gameslot_of(9), 9);
}

#[test]
fn test_score_cache_lifecycle() {
    let mut s = Schedule::identity(demo_season());
    assert_eq!(s.score(), 0);
    assert_eq!(s.cached_score(), Some(0));

    let copy = s.clone();
    assert_eq!(copy.cached_score(), Some(0), "Copies keep the cached score");

    s.swap(0, 6);
    assert!(s.cached_score().is_none());
    assert_eq!(s.current_score(), -9);
    assert!(s.cached_score().is_none(), "current_score does not store");
    assert_eq!(s.score(), -9);

    // The copy is independent
    assert_eq!(copy.gameslot_of(0), 0);
}

#[test]
fn test_set_assignment_invalidates() {
    let mut s = Schedule::identity(demo_season());
    s.score();
    let mut other: Vec<usize> = (0..42).collect();
    other.swap(0, 6);
    s.set_assignment(&other).unwrap();
    assert!(s.cached_score().is_none());
    assert_eq!(s.matchup_at(6), 0);
    assert!(!s.is_feasible());
}

#[test]
fn test_equality_ignores_sunday_order() {
    let identity = Schedule::identity(demo_season());

    let mut sunday = identity.clone();
    sunday.swap(1, 2);
    assert_ne!(sunday.assignment(), identity.assignment());
    assert_eq!(sunday, identity);

    let mut thursday = identity.clone();
    thursday.swap(0, 1);
    assert_ne!(thursday, identity);

    // Holiday slots are pinned too
    let mut holiday = identity.clone();
    holiday.swap(27, 28);
    assert_ne!(holiday, identity);

    let set: HashSet<Schedule> = [identity.clone(), sunday, thursday, identity]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_equality_needs_same_calendar() {
    let a = Schedule::identity(demo_season());

    // Same matchups, no holiday block: week 5 roles differ
    let league = demo_league();
    let calendar = SeasonCalendar::new(vec![6, 6, 5, 5, 5, 5, 5, 5], None).unwrap();
    let season = Season::new(league, calendar, Default::default()).unwrap();
    let b = Schedule::identity(Arc::new(season));

    assert_ne!(a, b);
    assert_eq!(a.assignment(), b.assignment());
}

#[test]
fn test_shuffle_is_seeded() {
    let mut a = Schedule::identity(demo_season());
    let mut b = Schedule::identity(demo_season());
    a.shuffle(256, &mut Rng::with_seed(7));
    b.shuffle(256, &mut Rng::with_seed(7));
    assert_eq!(a.assignment(), b.assignment());
    assert_eq!(get_sorted(a.assignment()), (0..42).collect::<Vec<_>>());
}

#[test]
fn test_reproduce_of_identical_parents() {
    let p = Schedule::identity(demo_season());
    let mut rng = Rng::with_seed(11);
    for _ in 0..20 {
        let child = Schedule::reproduce(&p, &p, &mut rng);
        assert_eq!(child.assignment(), p.assignment());
        assert!(child.cached_score().is_none());
    }
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "different seasons")]
fn test_reproduce_rejects_mixed_seasons() {
    let league = League::from_pairs([("A", "B"), ("B", "A")]);
    let calendar = SeasonCalendar::new(vec![1, 1], None).unwrap();
    let small = Schedule::identity(Arc::new(Season::new(league, calendar, Default::default()).unwrap()));
    let demo = Schedule::identity(demo_season());
    Schedule::reproduce(&demo, &small, &mut Rng::with_seed(3));
}
