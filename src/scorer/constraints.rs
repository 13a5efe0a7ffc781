use super::incidence::Incidence;
use crate::season::{Gameslot, MatchupId, Season, TeamId};

/// Team-weeks without exactly one game, beyond each team's bye allowance.
pub fn one_game_per_week(season: &Season, inc: &Incidence) -> u32 {
    let mut off_weeks = 0usize;
    for team in 0..season.num_teams() {
        off_weeks += (0..season.num_weeks())
            .filter(|&week| inc.games_in_week(team, week) != 1)
            .count();
    }
    off_weeks.saturating_sub(season.total_allowed_byes()) as u32
}

pub fn fixed_home_game(inc: &Incidence, team: TeamId, gameslot: Gameslot) -> u32 {
    if inc.is_home(team, gameslot) {
        0
    } else {
        1
    }
}

pub fn fixed_matchup(matchup_gameslot: &[Gameslot], matchup: MatchupId, gameslot: Gameslot) -> u32 {
    if matchup_gameslot[matchup] == gameslot {
        0
    } else {
        1
    }
}

/// Weeks where both tenants are at home, unless either hosts that week's
/// Thursday or Monday game. Sunday-only weeks get no exemption.
pub fn shared_venue(season: &Season, inc: &Incidence, first: TeamId, second: TeamId) -> u32 {
    let calendar = season.calendar();
    let mut violations = 0;
    for week in 0..season.num_weeks() {
        let both_home = inc.home_games_in_week(first, week) * inc.home_games_in_week(second, week);
        if both_home == 0 {
            continue;
        }
        let thursday = calendar.thursday_slot(week);
        let monday = calendar.monday_slot(week);
        let exempt = !calendar.is_sunday_only(week)
            && [first, second]
                .iter()
                .any(|&t| inc.is_home(t, thursday) || inc.is_home(t, monday));
        if !exempt {
            violations += both_home;
        }
    }
    violations
}

pub fn fixed_home_games(season: &Season, inc: &Incidence) -> u32 {
    season
        .rules()
        .fixed_home_games
        .iter()
        .map(|&(team, gs)| fixed_home_game(inc, team, gs))
        .sum()
}

pub fn fixed_matchups(season: &Season, matchup_gameslot: &[Gameslot]) -> u32 {
    season
        .rules()
        .fixed_matchups
        .iter()
        .map(|&(m, gs)| fixed_matchup(matchup_gameslot, m, gs))
        .sum()
}

pub fn shared_venues(season: &Season, inc: &Incidence) -> u32 {
    season
        .rules()
        .shared_venues
        .iter()
        .map(|&(a, b)| shared_venue(season, inc, a, b))
        .sum()
}
