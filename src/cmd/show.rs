use crate::reports;
use clap::Args;
use slotforge::error::{SfResult, SlotForgeError};
use slotforge::schedule::Schedule;
use slotforge::scorer::Heuristic;
use slotforge::season::Season;
use slotforge::store;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Stored results; without it the matchup list's own order is shown
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Which stored schedule to render
    #[arg(long, default_value_t = 0)]
    pub index: usize,

    #[arg(long = "heuristic", value_enum)]
    pub heuristics: Vec<Heuristic>,
}

pub fn run(args: ShowArgs, season: Arc<Season>) -> SfResult<()> {
    let (name, schedule) = match &args.input {
        Some(path) => {
            let mut schedules = store::load_schedules(&season, path)?;
            if args.index >= schedules.len() {
                return Err(SlotForgeError::Validation(format!(
                    "index {} out of range ({} schedules in {})",
                    args.index,
                    schedules.len(),
                    path.display()
                )));
            }
            let name = format!("{} #{}", path.display(), args.index);
            (name, schedules.swap_remove(args.index))
        }
        None => ("reference order".to_string(), Schedule::identity(season)),
    };

    reports::print_schedule(&name, &schedule);
    reports::print_score_breakdown(&schedule.details());
    Ok(())
}
