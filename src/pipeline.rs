//! Top-level driver composing the pipeline stages.
//!
//! Loader output goes in, a [`RunReport`] comes out; nothing in here exits
//! the process, so the whole run is testable against a mock backend. Only
//! fatal conditions (see the error taxonomy in the crate docs) surface as
//! `Err`.

use crate::classify;
use crate::client::StorageBackend;
use crate::filter::{self, SkipCounts};
use crate::options::Options;
use crate::record::{Diagnosed, StuckRecord};
use crate::resolve;
use crate::rollback::{self, Repair};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

/// Everything one run produced, for the reporter and the caller's exit
/// decision.
#[derive(Debug)]
pub struct RunReport {
    /// Records read from the input file
    pub total: usize,
    pub skips: SkipCounts,
    /// Records that passed the filter, with their terminal outcome
    pub diagnosed: Vec<Diagnosed>,
    /// Planned or performed rollbacks, one per repairable record
    pub repairs: Vec<Repair>,
}

/// Run the full pipeline: filter, classify, resolve, roll back.
pub fn run(
    backend: &dyn StorageBackend,
    options: &Options,
    records: Vec<StuckRecord>,
    quiet: bool,
) -> Result<RunReport> {
    let total = records.len();
    info!("[pipeline] {} records loaded", total);

    let (located, skips) = filter::filter_records(backend, records);
    info!(
        "[pipeline] {} records to analyze, {} skipped",
        located.len(),
        skips.total()
    );

    let (chunked, mut diagnosed) = classify::partition(located);
    info!(
        "[pipeline] initial count for chunked records: {}",
        chunked.len()
    );
    info!(
        "[pipeline] initial count for non-chunked records: {}",
        diagnosed.len()
    );

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(chunked.len() as u64)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")?
            .progress_chars("=>-"),
    );
    for record in chunked {
        pb.set_message(record.path.clone());
        let result = resolve::resolve_record(backend, record)?;
        pb.inc(1);
        diagnosed.push(result);
    }
    pb.finish_and_clear();

    let repairs = rollback::execute_repairs(backend, &diagnosed, options.execute);

    Ok(RunReport {
        total,
        skips,
        diagnosed,
        repairs,
    })
}
