use crate::error::{SfResult, SlotForgeError};
use crate::schedule::Schedule;
use crate::scorer::Score;
use crate::season::{Gameslot, Season};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// One stored schedule in the JSON result format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub assignment: Vec<Gameslot>,
    pub score: Score,
}

impl From<&Schedule> for ScheduleRecord {
    fn from(schedule: &Schedule) -> Self {
        Self {
            assignment: schedule.assignment().to_vec(),
            score: schedule.current_score(),
        }
    }
}

/// Writes one headerless CSV row of gameslots per schedule.
pub fn write_assignments<W: Write>(writer: W, schedules: &[Schedule]) -> SfResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    for schedule in schedules {
        wtr.write_record(schedule.assignment().iter().map(|gs| gs.to_string()))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Parses rows of comma-separated gameslots. Only checks that every field is
/// an integer; permutation checks happen when a row becomes a [`Schedule`].
pub fn read_assignments<R: Read>(reader: R) -> SfResult<Vec<Vec<Gameslot>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        let row = record
            .iter()
            .map(|field| {
                field.parse::<Gameslot>().map_err(|_| {
                    SlotForgeError::Validation(format!(
                        "row {}: '{}' is not a gameslot index",
                        i + 1,
                        field
                    ))
                })
            })
            .collect::<SfResult<Vec<_>>>()?;
        rows.push(row);
    }
    Ok(rows)
}

pub fn save_csv<P: AsRef<Path>>(path: P, schedules: &[Schedule]) -> SfResult<()> {
    let file = File::create(path.as_ref())?;
    write_assignments(file, schedules)?;
    info!("💾 Wrote {} schedules to {}", schedules.len(), path.as_ref().display());
    Ok(())
}

/// Appends to an existing result file, creating it if needed.
pub fn append_csv<P: AsRef<Path>>(path: P, schedules: &[Schedule]) -> SfResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())?;
    write_assignments(file, schedules)?;
    info!("💾 Appended {} schedules to {}", schedules.len(), path.as_ref().display());
    Ok(())
}

pub fn load_csv<P: AsRef<Path>>(season: &Arc<Season>, path: P) -> SfResult<Vec<Schedule>> {
    let file = File::open(path.as_ref())?;
    read_assignments(file)?
        .iter()
        .map(|row| Schedule::from_assignment(Arc::clone(season), row))
        .collect()
}

pub fn save_json<P: AsRef<Path>>(path: P, schedules: &[Schedule]) -> SfResult<()> {
    let records: Vec<ScheduleRecord> = schedules.iter().map(ScheduleRecord::from).collect();
    fs::write(path.as_ref(), serde_json::to_string_pretty(&records)?)?;
    info!("💾 Wrote {} records to {}", records.len(), path.as_ref().display());
    Ok(())
}

/// Loads JSON records and rescores them against `season`; stale stored
/// scores are reported and replaced.
pub fn load_json<P: AsRef<Path>>(season: &Arc<Season>, path: P) -> SfResult<Vec<Schedule>> {
    let content = fs::read_to_string(path.as_ref())?;
    let records: Vec<ScheduleRecord> = serde_json::from_str(&content)?;

    let mut schedules = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let mut schedule = Schedule::from_assignment(Arc::clone(season), &record.assignment)?;
        let actual = schedule.score();
        if actual != record.score {
            warn!("Record {}: stored score {} is now {}", i, record.score, actual);
        }
        schedules.push(schedule);
    }
    Ok(schedules)
}

/// Loads results by extension: `.json` records or CSV rows.
pub fn load_schedules<P: AsRef<Path>>(season: &Arc<Season>, path: P) -> SfResult<Vec<Schedule>> {
    let path = path.as_ref();
    info!("📂 Loading schedules from: {}", path.display());
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(season, path),
        _ => load_csv(season, path),
    }
}

/// Drops infeasible schedules and later duplicates, keeping first occurrences.
pub fn prune(schedules: Vec<Schedule>) -> Vec<Schedule> {
    let before = schedules.len();
    let mut seen = HashSet::new();
    let kept: Vec<Schedule> = schedules
        .into_iter()
        .filter_map(|mut s| {
            if !s.is_feasible() {
                return None;
            }
            seen.insert(s.canonical_key()).then_some(s)
        })
        .collect();
    info!("🧹 Pruned {} of {} schedules", before - kept.len(), before);
    kept
}
