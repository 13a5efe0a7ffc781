use crate::error::{SfResult, SlotForgeError};
use crate::schedule::Schedule;
use fastrand::Rng;

/// Tiered swap counts: mostly one swap, sometimes two, rarely three.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutationRates {
    pub single: f64,
    pub double: f64,
}

impl Default for MutationRates {
    fn default() -> Self {
        Self {
            single: 0.90,
            double: 0.09,
        }
    }
}

impl MutationRates {
    pub fn validate(&self) -> SfResult<()> {
        let in_unit = |p: f64| (0.0..=1.0).contains(&p);
        if !in_unit(self.single) || !in_unit(self.double) || self.single + self.double > 1.0 + 1e-9
        {
            return Err(SlotForgeError::Config(format!(
                "Mutation rates must be probabilities summing to at most 1 (single {}, double {})",
                self.single, self.double
            )));
        }
        Ok(())
    }

    pub fn draw_swaps(&self, rng: &mut Rng) -> usize {
        let r = rng.f64();
        if r < self.single {
            1
        } else if r < self.single + self.double {
            2
        } else {
            3
        }
    }
}

pub fn mutate(schedule: &mut Schedule, rates: &MutationRates, rng: &mut Rng) {
    let swaps = rates.draw_swaps(rng);
    schedule.shuffle(swaps, rng);
}
