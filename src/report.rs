//! Reporter: aggregate counts and print the repair plan.
//!
//! Pure read-only aggregation over a finished [`RunReport`]; printing the
//! same report twice gives the same output.

use crate::pipeline::RunReport;
use crate::record::Outcome;
use crate::rollback::RepairState;

/// Per-outcome record counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub repairable: u64,
    pub not_chunked: u64,
    pub no_versions: u64,
    pub no_valid_version: u64,
    pub vanished: u64,
}

/// Global totals for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    /// Records that passed filtering and were classified
    pub examined: usize,
    pub counts: OutcomeCounts,
}

impl Summary {
    pub fn new(report: &RunReport) -> Self {
        let mut counts = OutcomeCounts::default();
        for diagnosed in &report.diagnosed {
            match diagnosed.outcome {
                Outcome::Repairable(_) => counts.repairable += 1,
                Outcome::NotChunked => counts.not_chunked += 1,
                Outcome::NoVersions => counts.no_versions += 1,
                Outcome::NoValidVersion => counts.no_valid_version += 1,
                Outcome::Vanished => counts.vanished += 1,
            }
        }
        Self {
            total: report.total,
            examined: report.diagnosed.len(),
            counts,
        }
    }
}

/// Print the human-readable run report: totals, per-outcome counts, one
/// diagnostic line per unrepairable record, and the rollback plan/results.
/// The format is for operators, not for machines.
pub fn print_report(report: &RunReport) {
    let summary = Summary::new(report);

    println!(
        "total={} examined={} skip_recycle={} skip_version={} skip_atomic={} skip_unfetchable={}",
        summary.total,
        summary.examined,
        report.skips.recycle,
        report.skips.versions,
        report.skips.atomic,
        report.skips.unfetchable
    );

    println!();
    println!("Outcome counts");
    println!("  repairable:       {}", summary.counts.repairable);
    println!("  not-chunked:      {}", summary.counts.not_chunked);
    println!("  no-versions:      {}", summary.counts.no_versions);
    println!("  no-valid-version: {}", summary.counts.no_valid_version);
    println!("  vanished:         {}", summary.counts.vanished);

    let unrepairable: Vec<_> = report
        .diagnosed
        .iter()
        .filter(|d| !d.outcome.is_repairable())
        .collect();
    if !unrepairable.is_empty() {
        println!();
        println!("Unrepairable records, manual follow-up needed");
        for diagnosed in unrepairable {
            println!(
                "  outcome={} size={} observed={} versions={} path={} ({})",
                diagnosed.outcome.label(),
                diagnosed.record.size,
                diagnosed.record.observed_at.format("%Y-%m-%d %H:%M:%S"),
                diagnosed.versions.len(),
                diagnosed.record.path,
                diagnosed.outcome.describe()
            );
        }
    }

    if !report.repairs.is_empty() {
        println!();
        println!("Rollbacks");
        for repair in &report.repairs {
            match &repair.state {
                RepairState::Planned => println!(
                    "  dry-run: would roll back file={} to version={}",
                    repair.path, repair.target_key
                ),
                RepairState::Succeeded => println!(
                    "  rolled back file={} to version={}",
                    repair.path, repair.target_key
                ),
                RepairState::Failed(reason) => println!(
                    "  FAILED file={} version={}: {}",
                    repair.path, repair.target_key, reason
                ),
            }
        }
    }
}
