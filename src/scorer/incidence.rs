use crate::season::{Gameslot, Season, TeamId, Week};

/// Home/away indicators derived from one assignment, in flattened
/// team-major matrices (`idx = team * cols + col`).
pub struct Incidence {
    num_gameslots: usize,
    num_weeks: usize,
    home: Vec<u8>,
    away: Vec<u8>,
    home_week: Vec<u32>,
    away_week: Vec<u32>,
}

impl Incidence {
    pub fn build(season: &Season, matchup_gameslot: &[Gameslot]) -> Self {
        let num_teams = season.num_teams();
        let num_gameslots = season.num_matchups();
        let num_weeks = season.num_weeks();
        let calendar = season.calendar();

        let mut home = vec![0u8; num_teams * num_gameslots];
        let mut away = vec![0u8; num_teams * num_gameslots];
        let mut home_week = vec![0u32; num_teams * num_weeks];
        let mut away_week = vec![0u32; num_teams * num_weeks];

        for (matchup, m) in season.league().matchups().iter().enumerate() {
            let gs = matchup_gameslot[matchup];
            let week = calendar.week_of(gs);
            home[m.home * num_gameslots + gs] = 1;
            away[m.away * num_gameslots + gs] = 1;
            home_week[m.home * num_weeks + week] += 1;
            away_week[m.away * num_weeks + week] += 1;
        }

        Self {
            num_gameslots,
            num_weeks,
            home,
            away,
            home_week,
            away_week,
        }
    }

    #[inline(always)]
    pub fn is_home(&self, team: TeamId, gameslot: Gameslot) -> bool {
        self.home[team * self.num_gameslots + gameslot] == 1
    }

    #[inline(always)]
    pub fn is_away(&self, team: TeamId, gameslot: Gameslot) -> bool {
        self.away[team * self.num_gameslots + gameslot] == 1
    }

    #[inline(always)]
    pub fn plays(&self, team: TeamId, gameslot: Gameslot) -> bool {
        self.is_home(team, gameslot) || self.is_away(team, gameslot)
    }

    #[inline(always)]
    pub fn home_games_in_week(&self, team: TeamId, week: Week) -> u32 {
        self.home_week[team * self.num_weeks + week]
    }

    #[inline(always)]
    pub fn away_games_in_week(&self, team: TeamId, week: Week) -> u32 {
        self.away_week[team * self.num_weeks + week]
    }

    #[inline(always)]
    pub fn games_in_week(&self, team: TeamId, week: Week) -> u32 {
        self.home_games_in_week(team, week) + self.away_games_in_week(team, week)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::{League, RuleSet, SeasonCalendar};

    #[test]
    fn test_indicators() {
        let league = League::from_pairs([("A", "B"), ("C", "D"), ("B", "C"), ("D", "A")]);
        let cal = SeasonCalendar::new(vec![2, 1, 1], None).unwrap();
        let season = Season::new(league, cal, RuleSet::default()).unwrap();
        let inc = Incidence::build(&season, &[0, 1, 2, 3]);

        assert!(inc.is_home(0, 0));
        assert!(inc.is_away(1, 0));
        assert!(!inc.is_home(1, 0));
        assert!(inc.plays(2, 1));
        assert!(!inc.plays(0, 1));
        assert_eq!(inc.games_in_week(0, 0), 1);
        assert_eq!(inc.games_in_week(0, 1), 0);
        assert_eq!(inc.home_games_in_week(3, 2), 1);
        assert_eq!(inc.away_games_in_week(0, 2), 1);
    }
}
