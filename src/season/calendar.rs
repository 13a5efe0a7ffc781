use super::{Gameslot, Week};
use crate::error::{SfResult, SlotForgeError};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use strum_macros::Display;

/// Day-of-week role of a gameslot, fixed by its position inside the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum SlotRole {
    #[strum(to_string = "Thursday")]
    Thursday,
    #[strum(to_string = "Thanksgiving")]
    Holiday,
    #[strum(to_string = "Sunday")]
    SundayDay,
    #[strum(to_string = "Sunday Night")]
    SundayNight,
    #[strum(to_string = "Monday Night")]
    MondayNight,
}

impl SlotRole {
    /// Sunday day games are interchangeable; every other role is pinned.
    pub fn is_fixed(self) -> bool {
        self != SlotRole::SundayDay
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayBlock {
    pub week: Week,
    #[serde(default = "default_holiday_slots")]
    pub slots: usize,
}

fn default_holiday_slots() -> usize {
    3
}

/// Partition of the gameslot range into weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonCalendar {
    games_per_week: Vec<usize>,
    // week_starts[w]..week_starts[w + 1] is week w
    week_starts: Vec<Gameslot>,
    gameslot_week: Vec<Week>,
    roles: Vec<SlotRole>,
    holiday: Option<HolidayBlock>,
    sunday_only: Vec<bool>,
}

impl SeasonCalendar {
    pub fn new(games_per_week: Vec<usize>, holiday: Option<HolidayBlock>) -> SfResult<Self> {
        if games_per_week.is_empty() {
            return Err(SlotForgeError::Config(
                "Calendar needs at least one week".to_string(),
            ));
        }
        if let Some(w) = games_per_week.iter().position(|&n| n == 0) {
            return Err(SlotForgeError::Config(format!("Week {} has no gameslots", w + 1)));
        }
        if let Some(h) = holiday {
            match games_per_week.get(h.week) {
                None => {
                    return Err(SlotForgeError::Config(format!(
                        "Holiday week {} is outside the {}-week season",
                        h.week + 1,
                        games_per_week.len()
                    )))
                }
                Some(&n) if h.slots == 0 || h.slots > n => {
                    return Err(SlotForgeError::Config(format!(
                        "Holiday block of {} slots does not fit week {} ({} slots)",
                        h.slots,
                        h.week + 1,
                        n
                    )))
                }
                _ => {}
            }
        }

        let mut week_starts = Vec::with_capacity(games_per_week.len() + 1);
        let mut gameslot_week = Vec::new();
        let mut roles = Vec::new();
        let mut offset = 0;

        for (week, &n) in games_per_week.iter().enumerate() {
            week_starts.push(offset);
            let holiday_slots = match holiday {
                Some(h) if h.week == week => h.slots,
                _ => 0,
            };
            for pos in 0..n {
                gameslot_week.push(week);
                roles.push(role_for(pos, n, holiday_slots));
            }
            offset += n;
        }
        week_starts.push(offset);

        let sunday_only = vec![false; games_per_week.len()];
        Ok(Self {
            games_per_week,
            week_starts,
            gameslot_week,
            roles,
            holiday,
            sunday_only,
        })
    }

    /// Marks weeks where every game kicks off on Sunday afternoon. Those
    /// weeks have no Thursday, night or holiday slots.
    pub fn with_sunday_only_weeks(mut self, weeks: &[Week]) -> SfResult<Self> {
        for &week in weeks {
            if week >= self.num_weeks() {
                return Err(SlotForgeError::Config(format!(
                    "Sunday-only week {} is outside the {}-week season",
                    week + 1,
                    self.num_weeks()
                )));
            }
            if self.holiday.is_some_and(|h| h.week == week) {
                return Err(SlotForgeError::Config(format!(
                    "Week {} cannot be both the holiday week and Sunday-only",
                    week + 1
                )));
            }
            self.sunday_only[week] = true;
            let range = self.week_range(week);
            self.roles[range].fill(SlotRole::SundayDay);
        }
        Ok(self)
    }

    pub fn num_weeks(&self) -> usize {
        self.games_per_week.len()
    }

    pub fn num_gameslots(&self) -> usize {
        self.gameslot_week.len()
    }

    pub fn games_per_week(&self) -> &[usize] {
        &self.games_per_week
    }

    pub fn holiday(&self) -> Option<HolidayBlock> {
        self.holiday
    }

    pub fn is_sunday_only(&self, week: Week) -> bool {
        self.sunday_only[week]
    }

    pub fn sunday_only_weeks(&self) -> Vec<Week> {
        (0..self.num_weeks()).filter(|&w| self.sunday_only[w]).collect()
    }

    pub fn week_of(&self, gameslot: Gameslot) -> Week {
        self.gameslot_week[gameslot]
    }

    pub fn week_range(&self, week: Week) -> Range<Gameslot> {
        self.week_starts[week]..self.week_starts[week + 1]
    }

    pub fn role(&self, gameslot: Gameslot) -> SlotRole {
        self.roles[gameslot]
    }

    /// First slot of the week. In the holiday week this is the opening holiday game.
    pub fn thursday_slot(&self, week: Week) -> Gameslot {
        self.week_starts[week]
    }

    pub fn monday_slot(&self, week: Week) -> Gameslot {
        self.week_starts[week + 1] - 1
    }

    pub fn holiday_gameslots(&self) -> Range<Gameslot> {
        match self.holiday {
            Some(h) => {
                let start = self.week_starts[h.week];
                start..start + h.slots
            }
            None => 0..0,
        }
    }
}

fn role_for(pos: usize, n: usize, holiday_slots: usize) -> SlotRole {
    if pos < holiday_slots {
        SlotRole::Holiday
    } else if pos == 0 {
        SlotRole::Thursday
    } else if pos == n - 1 {
        SlotRole::MondayNight
    } else if pos == n - 2 {
        SlotRole::SundayNight
    } else {
        SlotRole::SundayDay
    }
}
