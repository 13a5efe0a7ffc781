use crate::reports;
use clap::Args;
use slotforge::error::SfResult;
use slotforge::scorer::{Heuristic, ScoreDetails};
use slotforge::season::Season;
use slotforge::store;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Stored results (`.csv` rows or `.json` records)
    #[arg(short, long)]
    pub input: PathBuf,

    #[arg(long = "heuristic", value_enum)]
    pub heuristics: Vec<Heuristic>,

    /// Rewrite `--input` without infeasible or duplicate schedules
    #[arg(long, default_value_t = false)]
    pub prune: bool,
}

pub fn run(args: ValidateArgs, season: Arc<Season>) -> SfResult<()> {
    let schedules = store::load_schedules(&season, &args.input)?;

    println!("\n🔎 === SCHEDULE AUDIT === 🔎");
    let details: Vec<ScoreDetails> = schedules.iter().map(|s| s.details()).collect();
    reports::print_validation_report(&details);

    if args.prune {
        let kept = store::prune(schedules);
        let is_json = args.input.extension().is_some_and(|e| e == "json");
        if is_json {
            store::save_json(&args.input, &kept)?;
        } else {
            store::save_csv(&args.input, &kept)?;
        }
    }
    Ok(())
}
