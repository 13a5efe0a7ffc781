#![allow(dead_code)]

use slotforge::scorer::Heuristic;
use slotforge::season::loader::load_matchups;
use slotforge::season::rules::{FixedHomeGame, FixedMatchup, SharedVenue};
use slotforge::season::{HolidayBlock, League, Season, SeasonSpec};
use std::sync::Arc;

// 12 teams, 8 weeks, 7 games each: exactly one bye per team. The listed
// order is itself a feasible schedule under `demo_spec`.
pub const MATCHUPS_CSV: &str = "home,away
Hornets,Eagles
Falcons,Comets
Jaguars,Lynx
Giants,Knights
Anchors,Badgers
Drakes,Ibis
Drakes,Falcons
Lynx,Anchors
Hornets,Giants
Badgers,Knights
Ibis,Comets
Eagles,Jaguars
Drakes,Anchors
Falcons,Ibis
Comets,Badgers
Eagles,Lynx
Hornets,Knights
Giants,Anchors
Badgers,Lynx
Eagles,Falcons
Jaguars,Hornets
Drakes,Comets
Knights,Drakes
Falcons,Jaguars
Eagles,Anchors
Giants,Ibis
Hornets,Badgers
Anchors,Jaguars
Knights,Falcons
Drakes,Giants
Ibis,Lynx
Eagles,Comets
Anchors,Ibis
Eagles,Giants
Jaguars,Badgers
Comets,Knights
Lynx,Hornets
Falcons,Hornets
Jaguars,Drakes
Lynx,Comets
Ibis,Knights
Giants,Badgers
";

// Team indices in order of first appearance.
pub const HORNETS: usize = 0;
pub const EAGLES: usize = 1;
pub const FALCONS: usize = 2;
pub const GIANTS: usize = 6;
pub const KNIGHTS: usize = 7;
pub const ANCHORS: usize = 8;
pub const IBIS: usize = 11;

pub fn demo_league() -> League {
    load_matchups(MATCHUPS_CSV.as_bytes()).expect("fixture csv")
}

/// Bare calendar: 6 + 6 + 5 x 6 slots, Thanksgiving-style block in week 5,
/// all-Sunday final week.
pub fn bare_spec() -> SeasonSpec {
    SeasonSpec {
        games_per_week: vec![6, 6, 5, 5, 5, 5, 5, 5],
        holiday: Some(HolidayBlock { week: 5, slots: 3 }),
        fixed_home_games: vec![],
        international_games: vec![],
        shared_venues: vec![],
        sunday_only_weeks: vec![7],
    }
}

pub fn demo_spec() -> SeasonSpec {
    let home = |team: &str, gameslot| FixedHomeGame {
        team: team.to_string(),
        gameslot,
    };
    let abroad = |home: &str, away: &str, gameslot| FixedMatchup {
        home: home.to_string(),
        away: away.to_string(),
        gameslot,
    };
    SeasonSpec {
        fixed_home_games: vec![home("Hornets", 0), home("Anchors", 27), home("Knights", 28)],
        international_games: vec![abroad("Falcons", "Ibis", 13), abroad("Eagles", "Anchors", 24)],
        shared_venues: vec![shared("Giants", "Hornets")],
        ..bare_spec()
    }
}

pub fn shared(first: &str, second: &str) -> SharedVenue {
    SharedVenue {
        first: first.to_string(),
        second: second.to_string(),
    }
}

pub fn season_from(spec: &SeasonSpec, heuristics: &[Heuristic]) -> Arc<Season> {
    let season = Season::from_spec(demo_league(), spec).expect("fixture season");
    Arc::new(season.with_heuristics(heuristics))
}

pub fn demo_season() -> Arc<Season> {
    season_from(&demo_spec(), &[])
}

pub fn get_sorted(vec: &[usize]) -> Vec<usize> {
    let mut v = vec.to_vec();
    v.sort();
    v
}
