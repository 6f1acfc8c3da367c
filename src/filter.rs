//! Relevance filter: resolve each identifier to its current path and drop
//! records whose file no longer lives in a nominal namespace.

use crate::client::StorageBackend;
use crate::constants::{ATOMIC_SEGMENT, RECYCLE_SEGMENT, VERSION_SEGMENT};
use crate::record::{LocatedRecord, StuckRecord};
use log::{debug, info, warn};

/// Per-reason counts of records the filter dropped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SkipCounts {
    /// Path is in the trash/recycle namespace
    pub recycle: u64,
    /// Path is a version artifact
    pub versions: u64,
    /// Path is a temporary atomic-write artifact
    pub atomic: u64,
    /// Metadata fetch failed; the identifier may already be gone
    pub unfetchable: u64,
}

impl SkipCounts {
    pub fn total(&self) -> u64 {
        self.recycle + self.versions + self.atomic + self.unfetchable
    }
}

/// Fetch current metadata for every record and keep the ones still worth
/// reconciling. A failed metadata fetch is not fatal: the record is logged
/// and dropped. The namespace checks are substring matches, first match
/// wins, in the order recycle, version artifact, atomic artifact.
pub fn filter_records(
    backend: &dyn StorageBackend,
    records: Vec<StuckRecord>,
) -> (Vec<LocatedRecord>, SkipCounts) {
    let mut kept = Vec::with_capacity(records.len());
    let mut skips = SkipCounts::default();

    for record in records {
        let meta = match backend.file_info_by_id(&record.file_id) {
            Ok(meta) => meta,
            Err(err) => {
                warn!(
                    "[filter] cannot fetch metadata for {}: {}",
                    record.file_id, err
                );
                skips.unfetchable += 1;
                continue;
            }
        };

        if meta.path.contains(RECYCLE_SEGMENT) {
            info!("[filter] skip {}: in recycle ({})", record.file_id, meta.path);
            skips.recycle += 1;
        } else if meta.path.contains(VERSION_SEGMENT) {
            info!(
                "[filter] skip {}: is a version artifact ({})",
                record.file_id, meta.path
            );
            skips.versions += 1;
        } else if meta.path.contains(ATOMIC_SEGMENT) {
            info!(
                "[filter] skip {}: is an atomic-write artifact ({})",
                record.file_id, meta.path
            );
            skips.atomic += 1;
        } else {
            debug!(
                "[filter] keep {}: path={} size={}",
                record.file_id, meta.path, meta.size
            );
            kept.push(LocatedRecord {
                file_id: record.file_id,
                observed_at: record.observed_at,
                path: meta.path,
                size: meta.size,
            });
        }
    }

    (kept, skips)
}
