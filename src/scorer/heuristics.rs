use super::incidence::Incidence;
use crate::season::{Gameslot, Season};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Optional quality measures that rank feasible schedules. Each contributes
/// `ceiling - penalty`, so values stay non-negative and higher is better.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    ValueEnum,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    RoadTrips,
    InternationalBye,
}

impl Heuristic {
    pub fn penalty(self, season: &Season, inc: &Incidence, gameslot_matchup: &[usize]) -> u32 {
        match self {
            Heuristic::RoadTrips => consecutive_road_games(season, inc),
            Heuristic::InternationalBye => no_bye_after_international(season, inc, gameslot_matchup),
        }
    }

    pub fn ceiling(self, season: &Season) -> u32 {
        match self {
            Heuristic::RoadTrips => {
                (season.num_teams() * season.num_weeks().saturating_sub(2)) as u32
            }
            Heuristic::InternationalBye => {
                2 * international_slots_with_followup(season).count() as u32
            }
        }
    }

    pub fn quality(self, season: &Season, inc: &Incidence, gameslot_matchup: &[usize]) -> i32 {
        let ceiling = self.ceiling(season);
        ceiling.saturating_sub(self.penalty(season, inc, gameslot_matchup)) as i32
    }
}

/// Team-week windows where a team is on the road three weeks running.
pub fn consecutive_road_games(season: &Season, inc: &Incidence) -> u32 {
    let weeks = season.num_weeks();
    let mut count = 0;
    for team in 0..season.num_teams() {
        for week in 0..weeks.saturating_sub(2) {
            if (week..week + 3).all(|w| inc.away_games_in_week(team, w) > 0) {
                count += 1;
            }
        }
    }
    count
}

/// International participants who play again the very next week.
pub fn no_bye_after_international(
    season: &Season,
    inc: &Incidence,
    gameslot_matchup: &[usize],
) -> u32 {
    let league = season.league();
    let mut count = 0;
    for (gs, week) in international_slots_with_followup(season) {
        let m = league.matchup(gameslot_matchup[gs]);
        for team in [m.home, m.away] {
            if inc.games_in_week(team, week + 1) != 0 {
                count += 1;
            }
        }
    }
    count
}

fn international_slots_with_followup(season: &Season) -> impl Iterator<Item = (Gameslot, usize)> + '_ {
    let calendar = season.calendar();
    let last_week = season.num_weeks() - 1;
    season
        .rules()
        .international_gameslots()
        .map(move |gs| (gs, calendar.week_of(gs)))
        .filter(move |&(_, week)| week < last_week)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::{League, RuleSet, SeasonCalendar};
    use strum::IntoEnumIterator;

    // A is on the road every week; matchup 0 is played abroad in week 0.
    fn road_season() -> Season {
        let league = League::from_pairs([("B", "A"), ("C", "A"), ("D", "A")]);
        let cal = SeasonCalendar::new(vec![1, 1, 1], None).unwrap();
        let rules = RuleSet {
            fixed_matchups: vec![(0, 0)],
            ..Default::default()
        };
        Season::new(league, cal, rules).unwrap()
    }

    #[test]
    fn test_road_trips() {
        let season = road_season();
        let inc = Incidence::build(&season, &[0, 1, 2]);
        let h = Heuristic::RoadTrips;
        assert_eq!(h.ceiling(&season), 4);
        assert_eq!(h.penalty(&season, &inc, &[0, 1, 2]), 1);
        assert_eq!(h.quality(&season, &inc, &[0, 1, 2]), 3);
    }

    #[test]
    fn test_international_bye() {
        let season = road_season();
        let inc = Incidence::build(&season, &[0, 1, 2]);
        let h = Heuristic::InternationalBye;
        // A plays again in week 1, B does not
        assert_eq!(h.ceiling(&season), 2);
        assert_eq!(h.penalty(&season, &inc, &[0, 1, 2]), 1);
        assert_eq!(h.quality(&season, &inc, &[0, 1, 2]), 1);
    }

    #[test]
    fn test_names() {
        assert_eq!(Heuristic::iter().count(), 2);
        assert_eq!("road_trips".parse::<Heuristic>().unwrap(), Heuristic::RoadTrips);
        assert_eq!(Heuristic::InternationalBye.to_string(), "international_bye");
    }
}
