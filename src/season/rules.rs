use super::calendar::{HolidayBlock, SeasonCalendar};
use super::{Gameslot, League, MatchupId, TeamId, Week};
use crate::error::{SfResult, SlotForgeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedHomeGame {
    pub team: String,
    pub gameslot: Gameslot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedMatchup {
    pub home: String,
    pub away: String,
    pub gameslot: Gameslot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedVenue {
    pub first: String,
    pub second: String,
}

/// Name-based season description, as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonSpec {
    pub games_per_week: Vec<usize>,
    #[serde(default)]
    pub holiday: Option<HolidayBlock>,
    #[serde(default)]
    pub fixed_home_games: Vec<FixedHomeGame>,
    #[serde(default)]
    pub international_games: Vec<FixedMatchup>,
    #[serde(default)]
    pub shared_venues: Vec<SharedVenue>,
    /// Weeks played entirely on Sunday afternoon, typically the last one.
    #[serde(default)]
    pub sunday_only_weeks: Vec<Week>,
}

/// Index-based constraint table, resolved once against a [`League`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    pub fixed_home_games: Vec<(TeamId, Gameslot)>,
    pub fixed_matchups: Vec<(MatchupId, Gameslot)>,
    pub shared_venues: Vec<(TeamId, TeamId)>,
}

impl RuleSet {
    /// Gameslots reserved for away-from-home-market games.
    pub fn international_gameslots(&self) -> impl Iterator<Item = Gameslot> + '_ {
        self.fixed_matchups.iter().map(|&(_, gs)| gs)
    }

    pub(crate) fn check_bounds(&self, num_teams: usize, num_gameslots: usize) -> SfResult<()> {
        let slot_ok = |gs: Gameslot| gs < num_gameslots;
        for &(team, gs) in &self.fixed_home_games {
            if team >= num_teams || !slot_ok(gs) {
                return Err(SlotForgeError::Validation(format!(
                    "Fixed home game (team {}, gameslot {}) is out of range",
                    team, gs
                )));
            }
        }
        for &(matchup, gs) in &self.fixed_matchups {
            if matchup >= num_gameslots || !slot_ok(gs) {
                return Err(SlotForgeError::Validation(format!(
                    "Fixed matchup (matchup {}, gameslot {}) is out of range",
                    matchup, gs
                )));
            }
        }
        for &(a, b) in &self.shared_venues {
            if a >= num_teams || b >= num_teams || a == b {
                return Err(SlotForgeError::Validation(format!(
                    "Shared venue pair ({}, {}) is invalid",
                    a, b
                )));
            }
        }
        Ok(())
    }
}

impl SeasonSpec {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SfResult<Self> {
        let path = path.as_ref();
        info!("📅 Loading Season from: {}", path.display());
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> SfResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn to_json(&self) -> SfResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn calendar(&self) -> SfResult<SeasonCalendar> {
        SeasonCalendar::new(self.games_per_week.clone(), self.holiday)?
            .with_sunday_only_weeks(&self.sunday_only_weeks)
    }

    /// Maps every named team and matchup onto the league's indices.
    pub fn resolve(&self, league: &League) -> SfResult<RuleSet> {
        let fixed_home_games = self
            .fixed_home_games
            .iter()
            .map(|f| Ok((league.team(&f.team)?, f.gameslot)))
            .collect::<SfResult<Vec<_>>>()?;

        let fixed_matchups = self
            .international_games
            .iter()
            .map(|f| Ok((league.find_matchup_by_name(&f.home, &f.away)?, f.gameslot)))
            .collect::<SfResult<Vec<_>>>()?;

        let shared_venues = self
            .shared_venues
            .iter()
            .map(|s| Ok((league.team(&s.first)?, league.team(&s.second)?)))
            .collect::<SfResult<Vec<_>>>()?;

        Ok(RuleSet {
            fixed_home_games,
            fixed_matchups,
            shared_venues,
        })
    }

    /// The 2018 NFL season: 17 weeks, Thanksgiving triple-header in week 12,
    /// London and Mexico City games, the MetLife stadium share and an
    /// all-Sunday week 17.
    pub fn nfl_2018() -> Self {
        let home = |team: &str, gameslot| FixedHomeGame {
            team: team.to_string(),
            gameslot,
        };
        let abroad = |home: &str, away: &str, gameslot| FixedMatchup {
            home: home.to_string(),
            away: away.to_string(),
            gameslot,
        };

        Self {
            games_per_week: vec![16, 16, 16, 15, 15, 15, 14, 14, 13, 14, 13, 15, 16, 16, 16, 16, 16],
            holiday: Some(HolidayBlock { week: 11, slots: 3 }),
            fixed_home_games: vec![
                home("Philadelphia Eagles", 0),
                home("Detroit Lions", 161),
                home("Dallas Cowboys", 162),
            ],
            international_games: vec![
                abroad("Oakland Raiders", "Seattle Seahawks", 79),
                abroad("Los Angeles Chargers", "Tennessee Titans", 94),
                abroad("Jacksonville Jaguars", "Philadelphia Eagles", 108),
                abroad("Los Angeles Rams", "Kansas City Chiefs", 160),
            ],
            shared_venues: vec![SharedVenue {
                first: "New York Jets".to_string(),
                second: "New York Giants".to_string(),
            }],
            sunday_only_weeks: vec![16],
        }
    }
}
