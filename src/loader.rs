use crate::error::TpResult;
use crate::models::UserInputs;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct RawRow {
    racks: String,
    servers: String,
    budget_usd: String,
    power_kw: String,
    workload: String,
}

/// One data row of a batch file. `line` is 1-based and counts the header.
#[derive(Debug)]
pub struct BatchRow {
    pub line: usize,
    pub inputs: TpResult<UserInputs>,
}

/// Reads `racks,servers,budget_usd,power_kw,workload` rows. A malformed row
/// becomes an `Err` entry; only an unreadable stream fails the whole call.
pub fn load_batch<R: Read>(reader: R) -> TpResult<Vec<BatchRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (idx, result) in rdr.deserialize::<RawRow>().enumerate() {
        let line = idx + 2;
        let inputs = match result {
            Ok(raw) => UserInputs::parse(
                &raw.racks,
                &raw.servers,
                &raw.budget_usd,
                &raw.power_kw,
                &raw.workload,
            ),
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => Err(e.into()),
        };
        if let Err(e) = &inputs {
            warn!("batch line {}: {}", line, e);
        }
        rows.push(BatchRow { line, inputs });
    }

    debug!("loaded {} batch rows", rows.len());
    Ok(rows)
}

pub fn load_batch_file<P: AsRef<Path>>(path: P) -> TpResult<Vec<BatchRow>> {
    let file = File::open(path)?;
    load_batch(file)
}
