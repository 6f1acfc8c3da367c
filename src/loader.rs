//! Input file parsing.
//!
//! The upstream detection tool hands over a whitespace-separated file of
//! `<unix-timestamp> <file-identifier>` lines. A malformed line means the
//! hand-off itself is broken, so parsing fails instead of skipping.

use crate::record::StuckRecord;
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load all records from `path`, preserving input order. Duplicate lines
/// are legal and kept.
pub fn load_records(path: &Path) -> Result<Vec<StuckRecord>> {
    let file =
        File::open(path).with_context(|| format!("opening record file {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading {}", path.display()))?;
        let record = parse_line(&line)
            .with_context(|| format!("{}:{}: invalid record", path.display(), idx + 1))?;
        records.push(record);
    }
    Ok(records)
}

fn parse_line(line: &str) -> Result<StuckRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 2 {
        bail!("expected 2 fields, got {}", fields.len());
    }

    let secs: i64 = fields[0]
        .parse()
        .with_context(|| format!("timestamp {:?} is not a decimal unix time", fields[0]))?;
    let observed_at = DateTime::<Utc>::from_timestamp(secs, 0)
        .with_context(|| format!("timestamp {} is out of range", secs))?;

    Ok(StuckRecord {
        observed_at,
        file_id: fields[1].to_string(),
    })
}
