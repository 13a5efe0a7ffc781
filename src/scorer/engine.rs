use super::constraints;
use super::heuristics::Heuristic;
use super::incidence::Incidence;
use super::types::{Score, ScoreDetails};
use crate::season::{Gameslot, MatchupId, Season};

/// Fast path used by the search loop; heuristics only run once feasible.
pub fn score_full(
    season: &Season,
    matchup_gameslot: &[Gameslot],
    gameslot_matchup: &[MatchupId],
) -> Score {
    let inc = Incidence::build(season, matchup_gameslot);

    let violations = constraints::one_game_per_week(season, &inc)
        + constraints::fixed_matchups(season, matchup_gameslot)
        + constraints::fixed_home_games(season, &inc)
        + constraints::shared_venues(season, &inc);

    if violations > 0 {
        return -(violations as Score);
    }

    season
        .heuristics()
        .iter()
        .map(|h| h.quality(season, &inc, gameslot_matchup))
        .sum()
}

/// Full breakdown for reports. `score` always matches [`score_full`].
pub fn score_debug(
    season: &Season,
    matchup_gameslot: &[Gameslot],
    gameslot_matchup: &[MatchupId],
) -> ScoreDetails {
    let inc = Incidence::build(season, matchup_gameslot);

    let mut d = ScoreDetails {
        one_game_per_week: constraints::one_game_per_week(season, &inc),
        fixed_home_games: constraints::fixed_home_games(season, &inc),
        fixed_matchups: constraints::fixed_matchups(season, matchup_gameslot),
        shared_venues: constraints::shared_venues(season, &inc),
        ..Default::default()
    };

    for &h in season.heuristics() {
        let penalty = h.penalty(season, &inc, gameslot_matchup);
        match h {
            Heuristic::RoadTrips => d.road_trips = penalty,
            Heuristic::InternationalBye => d.international_bye = penalty,
        }
        d.quality += h.ceiling(season).saturating_sub(penalty) as Score;
    }

    let violations = d.violations();
    d.score = if violations > 0 {
        -(violations as Score)
    } else {
        d.quality
    };
    d
}
