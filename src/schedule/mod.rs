pub mod crossover;

use crate::error::{SfResult, SlotForgeError};
use crate::scorer::{Score, ScoreDetails, Scorer};
use crate::season::{Gameslot, MatchupId, Season};
use fastrand::Rng;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A candidate season: a bijection from matchups onto gameslots, with its
/// inverse kept in step and a lazily computed score.
///
/// `Clone` is the deep copy: it carries the cached score along.
#[derive(Debug, Clone)]
pub struct Schedule {
    season: Arc<Season>,
    matchup_gameslot: Vec<Gameslot>,
    gameslot_matchup: Vec<MatchupId>,
    score: Option<Score>,
}

impl Schedule {
    /// Matchup `i` in gameslot `i`: the literal input order.
    pub fn identity(season: Arc<Season>) -> Self {
        let n = season.num_matchups();
        Self {
            season,
            matchup_gameslot: (0..n).collect(),
            gameslot_matchup: (0..n).collect(),
            score: None,
        }
    }

    pub fn from_assignment(season: Arc<Season>, assignment: &[Gameslot]) -> SfResult<Self> {
        let mut schedule = Self::identity(season);
        schedule.set_assignment(assignment)?;
        Ok(schedule)
    }

    /// Trusted constructor for assignments already known to be permutations.
    pub(crate) fn from_permutation(season: Arc<Season>, matchup_gameslot: Vec<Gameslot>) -> Self {
        debug_assert!(validate_permutation(&matchup_gameslot, season.num_matchups()).is_ok());
        let gameslot_matchup = invert(&matchup_gameslot);
        Self {
            season,
            matchup_gameslot,
            gameslot_matchup,
            score: None,
        }
    }

    pub fn season(&self) -> &Arc<Season> {
        &self.season
    }

    pub fn len(&self) -> usize {
        self.matchup_gameslot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchup_gameslot.is_empty()
    }

    /// Position `i` holds matchup `i`'s gameslot.
    pub fn assignment(&self) -> &[Gameslot] {
        &self.matchup_gameslot
    }

    pub fn gameslot_of(&self, matchup: MatchupId) -> Gameslot {
        self.matchup_gameslot[matchup]
    }

    pub fn matchup_at(&self, gameslot: Gameslot) -> MatchupId {
        self.gameslot_matchup[gameslot]
    }

    pub fn set_assignment(&mut self, assignment: &[Gameslot]) -> SfResult<()> {
        validate_permutation(assignment, self.season.num_matchups())?;
        self.matchup_gameslot = assignment.to_vec();
        self.gameslot_matchup = invert(assignment);
        self.score = None;
        Ok(())
    }

    /// Exchanges the gameslots of two matchups.
    pub fn swap(&mut self, m1: MatchupId, m2: MatchupId) {
        let g1 = self.matchup_gameslot[m1];
        let g2 = self.matchup_gameslot[m2];
        self.matchup_gameslot[m1] = g2;
        self.matchup_gameslot[m2] = g1;
        self.gameslot_matchup[g1] = m2;
        self.gameslot_matchup[g2] = m1;
        self.score = None;
    }

    /// Applies `iterations` random swaps. Indices are drawn with replacement,
    /// so some swaps are no-ops.
    pub fn shuffle(&mut self, iterations: usize, rng: &mut Rng) {
        let n = self.len();
        for _ in 0..iterations {
            let m1 = rng.usize(0..n);
            let m2 = rng.usize(0..n);
            self.swap(m1, m2);
        }
    }

    pub fn score(&mut self) -> Score {
        match self.score {
            Some(s) => s,
            None => {
                let s = self.evaluate();
                self.score = Some(s);
                s
            }
        }
    }

    pub fn cached_score(&self) -> Option<Score> {
        self.score
    }

    /// Cached score if present, otherwise a fresh evaluation that is not stored.
    pub fn current_score(&self) -> Score {
        self.score.unwrap_or_else(|| self.evaluate())
    }

    pub fn is_feasible(&mut self) -> bool {
        self.score() >= 0
    }

    pub fn details(&self) -> ScoreDetails {
        Scorer::new(&self.season).score_debug(&self.matchup_gameslot, &self.gameslot_matchup)
    }

    fn evaluate(&self) -> Score {
        Scorer::new(&self.season).score_full(&self.matchup_gameslot, &self.gameslot_matchup)
    }

    /// Week-by-week signature used for equality: fixed-role slots in order,
    /// then the sorted set of Sunday day matchups.
    pub fn canonical_key(&self) -> Vec<MatchupId> {
        let calendar = self.season.calendar();
        let mut key = Vec::with_capacity(self.len());
        let mut sunday = Vec::new();
        for week in 0..calendar.num_weeks() {
            sunday.clear();
            for gs in calendar.week_range(week) {
                let m = self.gameslot_matchup[gs];
                if calendar.role(gs).is_fixed() {
                    key.push(m);
                } else {
                    sunday.push(m);
                }
            }
            sunday.sort_unstable();
            key.extend_from_slice(&sunday);
        }
        key
    }
}

impl PartialEq for Schedule {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        if !Arc::ptr_eq(&self.season, &other.season)
            && self.season.calendar() != other.season.calendar()
        {
            return false;
        }
        self.canonical_key() == other.canonical_key()
    }
}

impl Eq for Schedule {}

impl Hash for Schedule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_key().hash(state);
    }
}

/// Checks that `assignment` is a permutation of `0..n`.
pub fn validate_permutation(assignment: &[Gameslot], n: usize) -> SfResult<()> {
    if assignment.len() != n {
        return Err(SlotForgeError::InvalidPermutation(format!(
            "expected {} entries, got {}",
            n,
            assignment.len()
        )));
    }
    let mut seen = vec![false; n];
    for (matchup, &gs) in assignment.iter().enumerate() {
        if gs >= n {
            return Err(SlotForgeError::InvalidPermutation(format!(
                "matchup {} assigned to gameslot {} (range is 0..{})",
                matchup, gs, n
            )));
        }
        if seen[gs] {
            return Err(SlotForgeError::InvalidPermutation(format!(
                "gameslot {} assigned more than once",
                gs
            )));
        }
        seen[gs] = true;
    }
    Ok(())
}

fn invert(matchup_gameslot: &[Gameslot]) -> Vec<MatchupId> {
    let mut inverse = vec![0; matchup_gameslot.len()];
    for (m, &gs) in matchup_gameslot.iter().enumerate() {
        inverse[gs] = m;
    }
    inverse
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![0, 1, 2, 3], true)]
    #[case(vec![3, 2, 1, 0], true)]
    #[case(vec![0, 1, 2], false)]
    #[case(vec![0, 1, 2, 4], false)]
    #[case(vec![0, 1, 1, 3], false)]
    fn test_validate_permutation(#[case] assignment: Vec<usize>, #[case] ok: bool) {
        assert_eq!(validate_permutation(&assignment, 4).is_ok(), ok);
    }

    #[test]
    fn test_invert() {
        assert_eq!(invert(&[2, 0, 1]), vec![1, 2, 0]);
    }
}
