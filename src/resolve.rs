//! Version resolver: find the newest complete version to roll back to.

use crate::classify::is_chunk_aligned;
use crate::client::{BackendError, StorageBackend};
use crate::record::{Diagnosed, LocatedRecord, Outcome, Version};
use anyhow::{Context, Result};
use log::{debug, info};

/// Order versions newest first. The sort is stable: versions with equal
/// mtime keep the order the backend returned them in, so selection over a
/// fixed response is deterministic. No stability is assumed across calls.
pub fn order_versions(versions: &mut [Version]) {
    versions.sort_by(|a, b| b.mtime_sec.cmp(&a.mtime_sec));
}

/// Newest version that is not itself a chunk-aligned fragment. Expects
/// `versions` already ordered newest first.
pub fn pick_rollback_target(versions: &[Version]) -> Option<&Version> {
    versions.iter().find(|v| !is_chunk_aligned(v.size))
}

/// Diagnose one chunked record against its version history.
///
/// A vanished path (the backend no longer knows it) is a terminal outcome,
/// not a failure. Any other listing error is returned to the caller: with
/// incomplete version knowledge no safe rollback decision can be made, so
/// the driver aborts the whole run.
pub fn resolve_record(backend: &dyn StorageBackend, record: LocatedRecord) -> Result<Diagnosed> {
    let mut versions = match backend.list_versions(&record.path) {
        Ok(versions) => versions,
        Err(BackendError::NotFound(_)) => {
            info!("[resolve] {} vanished before resolution", record.path);
            return Ok(Diagnosed {
                record,
                versions: Vec::new(),
                outcome: Outcome::Vanished,
            });
        }
        Err(BackendError::Backend(err)) => {
            return Err(err).with_context(|| format!("listing versions of {}", record.path));
        }
    };

    debug!(
        "[resolve] {}: {} version(s) available",
        record.path,
        versions.len()
    );

    if versions.is_empty() {
        return Ok(Diagnosed {
            record,
            versions,
            outcome: Outcome::NoVersions,
        });
    }

    order_versions(&mut versions);
    let outcome = match pick_rollback_target(&versions) {
        Some(target) => Outcome::Repairable(target.clone()),
        None => Outcome::NoValidVersion,
    };

    Ok(Diagnosed {
        record,
        versions,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(path: &str, size: u64, mtime_sec: i64) -> Version {
        Version {
            path: path.to_string(),
            size,
            mtime_sec,
        }
    }

    #[test]
    fn test_order_versions_newest_first() {
        let mut versions = vec![
            version("a", 1, 90),
            version("b", 2, 100),
            version("c", 3, 95),
        ];
        order_versions(&mut versions);
        let mtimes: Vec<i64> = versions.iter().map(|v| v.mtime_sec).collect();
        assert_eq!(mtimes, vec![100, 95, 90]);
    }

    #[test]
    fn test_order_versions_idempotent() {
        let mut versions = vec![
            version("a", 1, 100),
            version("b", 2, 95),
            version("c", 3, 90),
        ];
        let sorted = versions.clone();
        order_versions(&mut versions);
        assert_eq!(versions, sorted);
    }

    #[test]
    fn test_order_versions_equal_mtime_keeps_input_order() {
        let mut versions = vec![
            version("first", 1, 100),
            version("second", 2, 100),
            version("third", 3, 100),
        ];
        order_versions(&mut versions);
        let paths: Vec<&str> = versions.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_pick_skips_chunk_aligned_versions() {
        let versions = vec![
            version("fragment", 30_000_000, 100),
            version("good", 15_000_000, 90),
        ];
        let target = pick_rollback_target(&versions).unwrap();
        assert_eq!(target.path, "good");
    }

    #[test]
    fn test_pick_none_when_all_aligned() {
        let versions = vec![
            version("a", 20_000_000, 100),
            version("b", 10_000_000, 90),
        ];
        assert!(pick_rollback_target(&versions).is_none());
    }

    #[test]
    fn test_selection_deterministic_for_fixed_set() {
        let unordered = vec![
            version("x", 15_000_000, 90),
            version("y", 17_000_000, 90),
            version("z", 30_000_000, 100),
        ];
        let mut first = unordered.clone();
        order_versions(&mut first);
        let picked_first = pick_rollback_target(&first).cloned();

        for _ in 0..10 {
            let mut again = unordered.clone();
            order_versions(&mut again);
            assert_eq!(pick_rollback_target(&again).cloned(), picked_first);
        }
        assert_eq!(picked_first.unwrap().path, "x");
    }
}
