use super::Schedule;
use crate::season::Gameslot;
use fastrand::Rng;
use std::sync::Arc;

impl Schedule {
    /// Single-point crossover followed by repair. Matchups before a uniform
    /// split point keep `parent1`'s gameslots, the rest keep `parent2`'s.
    ///
    /// # Panics
    ///
    /// Both parents must belong to the same season.
    pub fn reproduce(parent1: &Schedule, parent2: &Schedule, rng: &mut Rng) -> Schedule {
        debug_assert!(
            Arc::ptr_eq(parent1.season(), parent2.season()),
            "parents come from different seasons"
        );
        let n = parent1.len();
        let split = rng.usize(1..n);
        let mut child = crossover_split(parent1.assignment(), parent2.assignment(), split);
        repair(&mut child, rng);
        Schedule::from_permutation(parent1.season().clone(), child)
    }
}

pub fn crossover_split(p1: &[Gameslot], p2: &[Gameslot], split: usize) -> Vec<Gameslot> {
    let mut child = Vec::with_capacity(p1.len());
    child.extend_from_slice(&p1[..split]);
    child.extend_from_slice(&p2[split..]);
    child
}

/// Restores the bijection after a naive concatenation. The first holder of
/// each gameslot keeps it; every later holder (and any out-of-range entry)
/// receives one of the uncovered gameslots in random order.
pub fn repair(child: &mut [Gameslot], rng: &mut Rng) {
    let n = child.len();
    let mut covered = vec![false; n];
    let mut duplicates = Vec::new();

    for (i, &gs) in child.iter().enumerate() {
        if gs < n && !covered[gs] {
            covered[gs] = true;
        } else {
            duplicates.push(i);
        }
    }

    let mut missing: Vec<Gameslot> = (0..n).filter(|&gs| !covered[gs]).collect();
    rng.shuffle(&mut missing);

    for (i, gs) in duplicates.into_iter().zip(missing) {
        child[i] = gs;
    }
}
