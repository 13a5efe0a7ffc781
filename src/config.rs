use crate::scorer::Heuristic;
use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Args, Debug, Clone, PartialEq)]
pub struct SearchParams {
    /// Individuals per generation
    #[arg(long, default_value_t = 128)]
    pub pop_size: usize,
    /// Maximum unique elitists carried into the next generation
    #[arg(long, default_value_t = 16)]
    pub num_elitist: usize,
    /// Unique feasible schedules to collect
    #[arg(long, default_value_t = 100)]
    pub num_results: usize,
    /// Random swaps applied to each initial individual
    #[arg(long, default_value_t = 256)]
    pub init_shuffles: usize,
    #[arg(long, value_enum, default_value_t = Reproduction::Crossover)]
    pub reproduction: Reproduction,
    #[arg(long, value_enum, default_value_t = Termination::ResultCount)]
    pub termination: Termination,
    /// Probability that a child receives exactly one swap
    #[arg(long, default_value_t = 0.90)]
    pub mutation_single: f64,
    /// Probability of two swaps; the remainder gets three
    #[arg(long, default_value_t = 0.09)]
    pub mutation_double: f64,
    #[arg(long)]
    pub max_generations: Option<usize>,
    #[arg(long = "heuristic", value_enum)]
    pub heuristics: Vec<Heuristic>,
    /// Score each generation on the current thread only
    #[arg(long, default_value_t = false)]
    pub sequential: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            pop_size: 128,
            num_elitist: 16,
            num_results: 100,
            init_shuffles: 256,
            reproduction: Reproduction::Crossover,
            termination: Termination::ResultCount,
            mutation_single: 0.90,
            mutation_double: 0.09,
            max_generations: None,
            heuristics: Vec::new(),
            sequential: false,
        }
    }
}

/// How the non-elitist part of a generation is bred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
pub enum Reproduction {
    /// Two rank-selected parents, split-point crossover and repair
    Crossover,
    /// Copy of one rank-selected parent
    Asexual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
pub enum Termination {
    /// Stop once `num_results` unique feasible schedules are collected
    ResultCount,
    /// Stop the first time any individual is feasible
    FirstFeasible,
}
