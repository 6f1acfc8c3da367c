//! Rollback executor.
//!
//! Per repairable record: `Planned`, then in execute mode one attempt that
//! ends `Succeeded` or `Failed`. Dry-run stops at `Planned` and never
//! touches the backend. A failed rollback is surfaced for manual follow-up
//! and never retried; the remaining records are still processed.

use crate::client::StorageBackend;
use crate::record::{Diagnosed, Outcome};
use log::{error, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairState {
    /// Intended rollback; terminal in dry-run mode
    Planned,
    Succeeded,
    Failed(String),
}

/// One repairable record's rollback, as planned or performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repair {
    pub file_id: String,
    pub path: String,
    pub target_key: String,
    pub state: RepairState,
}

/// Issue (or, in dry-run mode, only record) a rollback for every
/// repairable record, independently.
pub fn execute_repairs(
    backend: &dyn StorageBackend,
    diagnosed: &[Diagnosed],
    execute: bool,
) -> Vec<Repair> {
    let repairable: Vec<_> = diagnosed
        .iter()
        .filter_map(|d| match &d.outcome {
            Outcome::Repairable(target) => Some((d, target)),
            _ => None,
        })
        .collect();

    let total = repairable.len();
    let mut repairs = Vec::with_capacity(total);

    for (i, (diagnosed, target)) in repairable.into_iter().enumerate() {
        info!(
            "[rollback] dry_run={} ({}/{}) file={} version={}",
            !execute,
            i + 1,
            total,
            diagnosed.record.path,
            target.key()
        );

        let mut repair = Repair {
            file_id: diagnosed.record.file_id.clone(),
            path: diagnosed.record.path.clone(),
            target_key: target.key().to_string(),
            state: RepairState::Planned,
        };

        if execute {
            match backend.rollback_to_version(&repair.path, &repair.target_key) {
                Ok(()) => repair.state = RepairState::Succeeded,
                Err(err) => {
                    error!("[rollback] {} failed: {}", repair.path, err);
                    repair.state = RepairState::Failed(err.to_string());
                }
            }
        }

        repairs.push(repair);
    }

    repairs
}
