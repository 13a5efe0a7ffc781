use crate::schedule::Schedule;
use crate::season::MatchupId;
use std::collections::HashSet;

/// Feasible schedules collected across generations, unique under schedule
/// equality and capped at a target count.
#[derive(Debug, Clone)]
pub struct ResultSet {
    target: usize,
    seen: HashSet<Vec<MatchupId>>,
    schedules: Vec<Schedule>,
}

impl ResultSet {
    pub fn new(target: usize) -> Self {
        Self {
            target,
            seen: HashSet::new(),
            schedules: Vec::new(),
        }
    }

    /// Adds a copy of `schedule` if it is feasible, unseen, and there is room.
    pub fn offer(&mut self, schedule: &Schedule) -> bool {
        if self.is_full() || schedule.current_score() < 0 {
            return false;
        }
        if !self.seen.insert(schedule.canonical_key()) {
            return false;
        }
        self.schedules.push(schedule.clone());
        true
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.schedules.len() >= self.target
    }

    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }

    pub fn into_vec(self) -> Vec<Schedule> {
        self.schedules
    }
}
