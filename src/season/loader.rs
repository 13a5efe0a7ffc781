use super::League;
use crate::error::{SfResult, SlotForgeError};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Reads a `home,away` matchup table. The header row is skipped and team
/// indices follow order of first appearance.
pub fn load_matchups<R: Read>(reader: R) -> SfResult<League> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut league = League::new();
    for (row_idx, result) in rdr.records().enumerate() {
        let rec = result?;
        if rec.len() == 1 && rec[0].is_empty() {
            continue;
        }
        if rec.len() < 2 || rec[0].is_empty() || rec[1].is_empty() {
            return Err(SlotForgeError::Validation(format!(
                "Matchup row {} needs a home and an away team",
                row_idx + 2
            )));
        }
        league.push_matchup(&rec[0], &rec[1]);
    }

    debug!(
        "   -> Loaded {} matchups between {} teams.",
        league.num_matchups(),
        league.num_teams()
    );
    Ok(league)
}

pub fn load_matchups_from_path<P: AsRef<Path>>(path: P) -> SfResult<League> {
    let path = path.as_ref();
    info!("📂 Loading Matchups from: {}", path.display());
    let file = File::open(path)?;
    load_matchups(file)
}
