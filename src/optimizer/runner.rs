use super::mutation::{mutate, MutationRates};
use super::results::ResultSet;
use super::selection::RankSelector;
use crate::config::{Reproduction, SearchParams, Termination};
use crate::error::{SfResult, SlotForgeError};
use crate::schedule::Schedule;
use crate::scorer::Score;
use fastrand::Rng;
use rayon::prelude::*;
use std::cmp::Reverse;
use std::time::{Duration, Instant};
use strum_macros::Display;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct OptimizationOptions {
    pub pop_size: usize,
    pub num_elitist: usize,
    pub num_results: usize,
    pub init_shuffles: usize,
    pub reproduction: Reproduction,
    pub termination: Termination,
    pub mutation: MutationRates,
    pub max_generations: Option<usize>,
    pub max_time: Option<Duration>,
    pub parallel: bool,
}

impl Default for OptimizationOptions {
    fn default() -> Self {
        Self::from(&SearchParams::default())
    }
}

impl From<&SearchParams> for OptimizationOptions {
    fn from(params: &SearchParams) -> Self {
        Self {
            pop_size: params.pop_size,
            num_elitist: params.num_elitist,
            num_results: params.num_results,
            init_shuffles: params.init_shuffles,
            reproduction: params.reproduction,
            termination: params.termination,
            mutation: MutationRates {
                single: params.mutation_single,
                double: params.mutation_double,
            },
            max_generations: params.max_generations,
            max_time: None, // Set manually if needed
            parallel: !params.sequential,
        }
    }
}

impl OptimizationOptions {
    pub fn validate(&self) -> SfResult<()> {
        if self.pop_size == 0 {
            return Err(SlotForgeError::Config("pop_size must be at least 1".to_string()));
        }
        if self.termination == Termination::ResultCount && self.num_results == 0 {
            return Err(SlotForgeError::Config(
                "num_results must be at least 1 when collecting results".to_string(),
            ));
        }
        self.mutation.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SearchPhase {
    Initializing,
    Evolving,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StopReason {
    TargetReached,
    GenerationLimit,
    TimeLimit,
    Aborted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
    pub generation: usize,
    pub best: Score,
    pub worst: Score,
    pub elitists: usize,
    pub results: usize,
}

/// Called after every generation; returning `false` stops the run.
pub trait ProgressCallback: Send + Sync {
    fn on_generation(&self, stats: &GenerationStats) -> bool;
}

impl<F> ProgressCallback for F
where
    F: Fn(&GenerationStats) -> bool + Send + Sync,
{
    fn on_generation(&self, stats: &GenerationStats) -> bool {
        self(stats)
    }
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub schedules: Vec<Schedule>,
    pub generations: usize,
    pub best_score: Score,
    pub stop_reason: StopReason,
}

/// The generation-by-generation state machine. The population is kept
/// sorted best-first between steps.
pub struct GeneticSearch {
    options: OptimizationOptions,
    rng: Rng,
    population: Vec<Schedule>,
    selector: RankSelector,
    results: ResultSet,
    generation: usize,
    phase: SearchPhase,
    feasible_seen: bool,
}

impl GeneticSearch {
    pub fn new(base: &Schedule, options: OptimizationOptions, seed: Option<u64>) -> SfResult<Self> {
        options.validate()?;
        let rng = seed.map(Rng::with_seed).unwrap_or_else(Rng::new);
        let results = ResultSet::new(options.num_results);

        let mut search = Self {
            options,
            rng,
            population: Vec::new(),
            selector: RankSelector::new(&[]),
            results,
            generation: 0,
            phase: SearchPhase::Initializing,
            feasible_seen: false,
        };
        search.initialize(base);
        Ok(search)
    }

    fn initialize(&mut self, base: &Schedule) {
        let pop_size = self.options.pop_size;
        let shuffles = self.options.init_shuffles;

        let mut population = Vec::with_capacity(pop_size);
        for _ in 0..pop_size {
            let mut individual = base.clone();
            individual.shuffle(shuffles, &mut self.rng);
            population.push(individual);
        }
        self.population = population;
        self.rank_population();
        self.collect_results();

        info!(
            "🧬 Initial population of {} | Best: {} | Worst: {}",
            pop_size,
            self.best_score(),
            self.worst_score()
        );

        self.phase = if self.target_reached() {
            SearchPhase::Done
        } else {
            SearchPhase::Evolving
        };
    }

    /// Runs one generation: elitism, breeding, mutation, re-ranking and
    /// result accumulation.
    pub fn step(&mut self) -> GenerationStats {
        if self.phase == SearchPhase::Done {
            return self.stats(0);
        }

        let mut next = self.select_elitists();
        let elitists = next.len();

        while next.len() < self.options.pop_size {
            let child = self.breed();
            next.push(child);
        }

        // Keep retained elitists from holding a fixed place in the tie order
        self.rng.shuffle(&mut next);
        self.population = next;
        self.rank_population();
        self.generation += 1;
        self.collect_results();

        if self.target_reached() {
            self.phase = SearchPhase::Done;
        }

        let stats = self.stats(elitists);
        debug!(
            "Gen {:5} | Best: {:4} | Worst: {:4} | Elite: {:3} | Results: {}",
            stats.generation, stats.best, stats.worst, stats.elitists, stats.results
        );
        stats
    }

    fn select_elitists(&self) -> Vec<Schedule> {
        let best = self.best_score();
        let mut elitists: Vec<Schedule> = Vec::with_capacity(self.options.num_elitist);
        for individual in &self.population {
            if elitists.len() >= self.options.num_elitist || individual.current_score() != best {
                break;
            }
            if !elitists.contains(individual) {
                elitists.push(individual.clone());
            }
        }
        elitists
    }

    fn breed(&mut self) -> Schedule {
        let mut child = match self.options.reproduction {
            Reproduction::Crossover => {
                let p1 = self.selector.sample(&mut self.rng);
                let p2 = self.selector.sample(&mut self.rng);
                Schedule::reproduce(&self.population[p1], &self.population[p2], &mut self.rng)
            }
            Reproduction::Asexual => {
                let p = self.selector.sample(&mut self.rng);
                self.population[p].clone()
            }
        };
        mutate(&mut child, &self.options.mutation, &mut self.rng);
        child
    }

    fn rank_population(&mut self) {
        evaluate_population(&mut self.population, self.options.parallel);
        self.population.sort_by_key(|s| Reverse(s.current_score()));
        let scores: Vec<Score> = self.population.iter().map(|s| s.current_score()).collect();
        self.selector = RankSelector::new(&scores);
    }

    fn collect_results(&mut self) {
        if self.best_score() >= 0 {
            self.feasible_seen = true;
        }
        for individual in &self.population {
            if individual.current_score() < 0 {
                break;
            }
            self.results.offer(individual);
        }
    }

    fn target_reached(&self) -> bool {
        match self.options.termination {
            Termination::ResultCount => self.results.is_full(),
            Termination::FirstFeasible => self.feasible_seen,
        }
    }

    fn stats(&self, elitists: usize) -> GenerationStats {
        GenerationStats {
            generation: self.generation,
            best: self.best_score(),
            worst: self.worst_score(),
            elitists,
            results: self.results.len(),
        }
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population(&self) -> &[Schedule] {
        &self.population
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn best_score(&self) -> Score {
        self.population.first().map_or(Score::MIN, |s| s.current_score())
    }

    pub fn worst_score(&self) -> Score {
        self.population.last().map_or(Score::MIN, |s| s.current_score())
    }

    pub fn finish(self, stop_reason: StopReason) -> SearchOutcome {
        let best_score = self.best_score();
        SearchOutcome {
            schedules: self.results.into_vec(),
            generations: self.generation,
            best_score,
            stop_reason,
        }
    }
}

fn evaluate_population(population: &mut [Schedule], parallel: bool) {
    if parallel {
        population.par_iter_mut().for_each(|s| {
            s.score();
        });
    } else {
        for s in population.iter_mut() {
            s.score();
        }
    }
}

pub struct Optimizer {
    options: OptimizationOptions,
}

impl Optimizer {
    pub fn new(options: OptimizationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &OptimizationOptions {
        &self.options
    }

    /// Evolves from `base` until the termination policy is met or an external
    /// budget (generations, wall clock, callback) runs out.
    pub fn run<CB: ProgressCallback>(
        &self,
        base: &Schedule,
        seed: Option<u64>,
        callback: CB,
    ) -> SfResult<SearchOutcome> {
        let opts = &self.options;
        let start_time = Instant::now();
        let mut search = GeneticSearch::new(base, opts.clone(), seed)?;

        let stop_reason = loop {
            if search.phase() == SearchPhase::Done {
                break StopReason::TargetReached;
            }
            if let Some(limit) = opts.max_generations {
                if search.generation() >= limit {
                    break StopReason::GenerationLimit;
                }
            }
            if let Some(limit) = opts.max_time {
                if start_time.elapsed() >= limit {
                    break StopReason::TimeLimit;
                }
            }

            let stats = search.step();
            if !callback.on_generation(&stats) {
                break if search.phase() == SearchPhase::Done {
                    StopReason::TargetReached
                } else {
                    StopReason::Aborted
                };
            }
        };

        info!(
            "🏁 Stopped after {} generations ({}) with {} schedules",
            search.generation(),
            stop_reason,
            search.results().len()
        );
        Ok(search.finish(stop_reason))
    }
}
