mod common;

use common::*;
use fastrand::Rng;
use proptest::prelude::*;
use slotforge::schedule::Schedule;
use slotforge::scorer::{Heuristic, Scorer};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const N: usize = 42;

// --- STRATEGIES ---

prop_compose! {
    fn arb_schedule()(seed in any::<u64>(), shuffles in 0usize..300) -> Schedule {
        let mut s = Schedule::identity(demo_season());
        s.shuffle(shuffles, &mut Rng::with_seed(seed));
        s
    }
}

prop_compose! {
    fn arb_swaps()(swaps in proptest::collection::vec((0..N, 0..N), 0..40)) -> Vec<(usize, usize)> {
        swaps
    }
}

fn assert_bijection(s: &Schedule) -> Result<(), TestCaseError> {
    prop_assert_eq!(get_sorted(s.assignment()), (0..N).collect::<Vec<_>>());
    for m in 0..N {
        prop_assert_eq!(s.matchup_at(s.gameslot_of(m)), m);
    }
    Ok(())
}

fn hash_of(s: &Schedule) -> u64 {
    let mut h = DefaultHasher::new();
    s.hash(&mut h);
    h.finish()
}

proptest! {
    #[test]
    fn prop_swaps_keep_bijection(mut s in arb_schedule(), swaps in arb_swaps()) {
        for (a, b) in swaps {
            s.swap(a, b);
        }
        assert_bijection(&s)?;
    }

    #[test]
    fn prop_swap_is_self_inverse(s in arb_schedule(), a in 0..N, b in 0..N) {
        let mut t = s.clone();
        t.swap(a, b);
        t.swap(a, b);
        prop_assert_eq!(t.assignment(), s.assignment());
    }

    #[test]
    fn prop_reproduce_keeps_bijection(p1 in arb_schedule(), p2 in arb_schedule(), seed in any::<u64>()) {
        let child = Schedule::reproduce(&p1, &p2, &mut Rng::with_seed(seed));
        assert_bijection(&child)?;
    }

    #[test]
    fn prop_fast_and_debug_scores_agree(s in arb_schedule()) {
        let season = season_from(&demo_spec(), &[Heuristic::RoadTrips, Heuristic::InternationalBye]);
        let scorer = Scorer::new(&season);
        let mut gm = vec![0; N];
        for (m, &gs) in s.assignment().iter().enumerate() {
            gm[gs] = m;
        }
        let fast = scorer.score_full(s.assignment(), &gm);
        let details = scorer.score_debug(s.assignment(), &gm);
        prop_assert_eq!(fast, details.score);
        prop_assert_eq!(fast < 0, details.violations() > 0);
        if fast >= 0 {
            prop_assert_eq!(fast, details.quality);
        } else {
            prop_assert_eq!(-fast, details.violations() as i32);
        }
    }

    #[test]
    fn prop_equality_is_consistent_with_hash(s in arb_schedule(), seed in any::<u64>()) {
        prop_assert_eq!(&s, &s.clone());

        // Shuffling Sunday day games within their week never changes equality
        let season = s.season().clone();
        let calendar = season.calendar();
        let mut rng = Rng::with_seed(seed);
        let mut t = s.clone();
        for week in 0..calendar.num_weeks() {
            let sunday: Vec<usize> = calendar
                .week_range(week)
                .filter(|&gs| !calendar.role(gs).is_fixed())
                .collect();
            if sunday.len() >= 2 {
                let g1 = sunday[rng.usize(0..sunday.len())];
                let g2 = sunday[rng.usize(0..sunday.len())];
                t.swap(t.matchup_at(g1), t.matchup_at(g2));
            }
        }
        prop_assert_eq!(&s, &t);
        prop_assert_eq!(&t, &s);
        prop_assert_eq!(hash_of(&s), hash_of(&t));
    }
}
