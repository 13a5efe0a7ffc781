pub mod constraints;
pub mod engine;
pub mod heuristics;
pub mod incidence;
pub mod types;

pub use self::heuristics::Heuristic;
pub use self::types::{Score, ScoreDetails};
use crate::season::{Gameslot, MatchupId, Season};

/// Stateless evaluator bound to one season's constraint table.
#[derive(Clone, Copy)]
pub struct Scorer<'a> {
    season: &'a Season,
}

impl<'a> Scorer<'a> {
    pub fn new(season: &'a Season) -> Self {
        Self { season }
    }

    /// Optimized scoring for the search loop (Fast)
    pub fn score_full(&self, matchup_gameslot: &[Gameslot], gameslot_matchup: &[MatchupId]) -> Score {
        engine::score_full(self.season, matchup_gameslot, gameslot_matchup)
    }

    /// Detailed scoring for the validation report (Rich Data)
    pub fn score_debug(
        &self,
        matchup_gameslot: &[Gameslot],
        gameslot_matchup: &[MatchupId],
    ) -> ScoreDetails {
        engine::score_debug(self.season, matchup_gameslot, gameslot_matchup)
    }
}
