use crate::reports;
use clap::Args;
use slotforge::config::SearchParams;
use slotforge::error::SfResult;
use slotforge::optimizer::{GenerationStats, OptimizationOptions, Optimizer};
use slotforge::schedule::Schedule;
use slotforge::season::Season;
use slotforge::store;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub params: SearchParams,

    /// Wall-clock budget in seconds
    #[arg(short = 'T', long)]
    pub time: Option<u64>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// CSV file receiving one row of gameslots per schedule
    #[arg(short, long, default_value = "results.csv")]
    pub output: PathBuf,

    /// Append to `--output` instead of overwriting it
    #[arg(long, default_value_t = false)]
    pub append: bool,

    /// Also write `{assignment, score}` records here
    #[arg(long)]
    pub json: Option<PathBuf>,
}

pub fn run(args: SearchArgs, season: Arc<Season>) -> SfResult<()> {
    let mut options = OptimizationOptions::from(&args.params);
    options.max_time = args.time.map(Duration::from_secs);

    info!(
        "🧬 Population {} | Elitists {} | Target {} | {} / {}",
        options.pop_size,
        options.num_elitist,
        options.num_results,
        options.reproduction,
        options.termination
    );

    let base = Schedule::identity(season);
    let start_time = Instant::now();
    let outcome = Optimizer::new(options).run(&base, args.seed, |_: &GenerationStats| true)?;
    let elapsed = start_time.elapsed();

    if args.append {
        store::append_csv(&args.output, &outcome.schedules)?;
    } else {
        store::save_csv(&args.output, &outcome.schedules)?;
    }
    if let Some(path) = &args.json {
        store::save_json(path, &outcome.schedules)?;
    }

    reports::print_search_summary(&outcome, elapsed);
    Ok(())
}
