pub mod calendar;
pub mod loader;
pub mod rules;

pub use self::calendar::{HolidayBlock, SeasonCalendar, SlotRole};
pub use self::rules::{RuleSet, SeasonSpec};

use crate::error::{SfResult, SlotForgeError};
use crate::scorer::heuristics::Heuristic;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type TeamId = usize;
pub type MatchupId = usize;
pub type Gameslot = usize;
pub type Week = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Matchup {
    pub home: TeamId,
    pub away: TeamId,
}

/// Read-only registry of teams and matchups, built once from the input list.
#[derive(Debug, Clone, Default)]
pub struct League {
    teams: Vec<String>,
    team_index: HashMap<String, TeamId>,
    matchups: Vec<Matchup>,
}

impl League {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut league = Self::new();
        for (home, away) in pairs {
            league.push_matchup(home.as_ref(), away.as_ref());
        }
        league
    }

    /// Registers a matchup, interning both team names in order of first appearance.
    pub fn push_matchup(&mut self, home: &str, away: &str) -> MatchupId {
        let home = self.intern(home);
        let away = self.intern(away);
        self.matchups.push(Matchup { home, away });
        self.matchups.len() - 1
    }

    fn intern(&mut self, name: &str) -> TeamId {
        if let Some(&id) = self.team_index.get(name) {
            return id;
        }
        let id = self.teams.len();
        self.teams.push(name.to_string());
        self.team_index.insert(name.to_string(), id);
        id
    }

    pub fn num_teams(&self) -> usize {
        self.teams.len()
    }

    pub fn num_matchups(&self) -> usize {
        self.matchups.len()
    }

    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    pub fn team_name(&self, team: TeamId) -> &str {
        &self.teams[team]
    }

    pub fn team(&self, name: &str) -> SfResult<TeamId> {
        self.team_index
            .get(name)
            .copied()
            .ok_or_else(|| SlotForgeError::UnknownTeam(name.to_string()))
    }

    pub fn matchups(&self) -> &[Matchup] {
        &self.matchups
    }

    pub fn matchup(&self, id: MatchupId) -> Matchup {
        self.matchups[id]
    }

    pub fn find_matchup(&self, home: TeamId, away: TeamId) -> SfResult<MatchupId> {
        self.matchups
            .iter()
            .position(|m| m.home == home && m.away == away)
            .ok_or_else(|| SlotForgeError::MatchupNotFound {
                home: self.teams.get(home).cloned().unwrap_or_else(|| home.to_string()),
                away: self.teams.get(away).cloned().unwrap_or_else(|| away.to_string()),
            })
    }

    pub fn find_matchup_by_name(&self, home: &str, away: &str) -> SfResult<MatchupId> {
        let (h, a) = match (self.team(home), self.team(away)) {
            (Ok(h), Ok(a)) => (h, a),
            _ => {
                return Err(SlotForgeError::MatchupNotFound {
                    home: home.to_string(),
                    away: away.to_string(),
                })
            }
        };
        self.find_matchup(h, a)
    }

    pub fn games_per_team(&self) -> Vec<usize> {
        let mut games = vec![0; self.teams.len()];
        for m in &self.matchups {
            games[m.home] += 1;
            games[m.away] += 1;
        }
        games
    }
}

/// Immutable run configuration shared by every schedule and worker thread.
#[derive(Debug, Clone)]
pub struct Season {
    league: League,
    calendar: SeasonCalendar,
    rules: RuleSet,
    heuristics: Vec<Heuristic>,
    allowed_byes: Vec<usize>,
}

impl Season {
    pub fn new(league: League, calendar: SeasonCalendar, rules: RuleSet) -> SfResult<Self> {
        let n = league.num_matchups();
        if n < 2 {
            return Err(SlotForgeError::Validation(format!(
                "A season needs at least 2 matchups, got {}",
                n
            )));
        }
        if calendar.num_gameslots() != n {
            return Err(SlotForgeError::Validation(format!(
                "Calendar has {} gameslots but the league has {} matchups",
                calendar.num_gameslots(),
                n
            )));
        }
        rules.check_bounds(league.num_teams(), n)?;

        let weeks = calendar.num_weeks();
        let allowed_byes = league
            .games_per_team()
            .into_iter()
            .map(|games| weeks.saturating_sub(games))
            .collect();

        Ok(Self {
            league,
            calendar,
            rules,
            heuristics: Vec::new(),
            allowed_byes,
        })
    }

    pub fn from_spec(league: League, spec: &SeasonSpec) -> SfResult<Self> {
        let calendar = spec.calendar()?;
        let rules = spec.resolve(&league)?;
        Self::new(league, calendar, rules)
    }

    pub fn with_heuristics(mut self, heuristics: &[Heuristic]) -> Self {
        self.heuristics.clear();
        for &h in heuristics {
            if !self.heuristics.contains(&h) {
                self.heuristics.push(h);
            }
        }
        self
    }

    pub fn league(&self) -> &League {
        &self.league
    }

    pub fn calendar(&self) -> &SeasonCalendar {
        &self.calendar
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn heuristics(&self) -> &[Heuristic] {
        &self.heuristics
    }

    pub fn num_teams(&self) -> usize {
        self.league.num_teams()
    }

    pub fn num_matchups(&self) -> usize {
        self.league.num_matchups()
    }

    pub fn num_weeks(&self) -> usize {
        self.calendar.num_weeks()
    }

    /// Weeks a team may sit out without it counting as a violation.
    pub fn allowed_byes(&self, team: TeamId) -> usize {
        self.allowed_byes[team]
    }

    pub fn total_allowed_byes(&self) -> usize {
        self.allowed_byes.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_league() -> League {
        League::from_pairs([("A", "B"), ("C", "D"), ("B", "C"), ("D", "A")])
    }

    #[test]
    fn test_team_interning_order() {
        let league = tiny_league();
        assert_eq!(league.teams(), &["A", "B", "C", "D"]);
        assert_eq!(league.matchup(2), Matchup { home: 1, away: 2 });
        assert_eq!(league.games_per_team(), vec![2, 2, 2, 2]);
    }

    #[test]
    fn test_find_matchup() {
        let league = tiny_league();
        assert_eq!(league.find_matchup_by_name("D", "A").unwrap(), 3);
        let err = league.find_matchup_by_name("A", "D").unwrap_err();
        assert!(matches!(err, SlotForgeError::MatchupNotFound { .. }));
        let err = league.find_matchup_by_name("A", "Z").unwrap_err();
        assert!(matches!(err, SlotForgeError::MatchupNotFound { .. }));
    }

    #[test]
    fn test_season_rejects_slot_mismatch() {
        let cal = SeasonCalendar::new(vec![2, 1], None).unwrap();
        let err = Season::new(tiny_league(), cal, RuleSet::default()).unwrap_err();
        assert!(matches!(err, SlotForgeError::Validation(_)));
    }

    #[test]
    fn test_allowed_byes() {
        let cal = SeasonCalendar::new(vec![2, 1, 1], None).unwrap();
        let season = Season::new(tiny_league(), cal, RuleSet::default()).unwrap();
        assert_eq!(season.allowed_byes(0), 1);
        assert_eq!(season.total_allowed_byes(), 4);
    }
}
