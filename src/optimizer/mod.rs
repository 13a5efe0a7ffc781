pub mod mutation;
pub mod results;
pub mod runner;
pub mod selection;

pub use self::mutation::MutationRates;
pub use self::results::ResultSet;
pub use self::runner::{
    GenerationStats, GeneticSearch, OptimizationOptions, Optimizer, ProgressCallback,
    SearchOutcome, SearchPhase, StopReason,
};
