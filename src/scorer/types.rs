use serde::Serialize;

/// Signed schedule score: negative is the hard-violation count, zero or
/// positive is the quality of a feasible schedule.
pub type Score = i32;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreDetails {
    pub score: Score,

    // Hard constraints (violation counts)
    pub one_game_per_week: u32,
    pub fixed_home_games: u32,
    pub fixed_matchups: u32,
    pub shared_venues: u32,

    // Heuristic penalties, only counted for enabled heuristics
    pub road_trips: u32,
    pub international_bye: u32,

    pub quality: Score,
}

impl ScoreDetails {
    pub fn violations(&self) -> u32 {
        self.one_game_per_week + self.fixed_home_games + self.fixed_matchups + self.shared_venues
    }

    pub fn is_feasible(&self) -> bool {
        self.score >= 0
    }
}
