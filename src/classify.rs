//! Size classifier: split filtered records into aborted chunked uploads and
//! files this tool cannot explain.

use crate::constants::CHUNK_SIZE;
use crate::record::{Diagnosed, LocatedRecord, Outcome};

/// A size that is an exact multiple of the upload chunk unit. Zero is
/// aligned by this rule; real data never produces it.
pub fn is_chunk_aligned(size: u64) -> bool {
    size % CHUNK_SIZE == 0
}

/// Partition records into the chunked set, which proceeds to version
/// resolution, and terminal [`Outcome::NotChunked`] diagnoses.
pub fn partition(records: Vec<LocatedRecord>) -> (Vec<LocatedRecord>, Vec<Diagnosed>) {
    let mut chunked = Vec::new();
    let mut unrepairable = Vec::new();

    for record in records {
        if is_chunk_aligned(record.size) {
            chunked.push(record);
        } else {
            unrepairable.push(Diagnosed {
                record,
                versions: Vec::new(),
                outcome: Outcome::NotChunked,
            });
        }
    }

    (chunked, unrepairable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn located(size: u64) -> LocatedRecord {
        LocatedRecord {
            file_id: "018edb0f".to_string(),
            observed_at: Utc.timestamp_opt(1_592_324_325, 0).unwrap(),
            path: "/store/u/alice/file.bin".to_string(),
            size,
        }
    }

    #[test]
    fn test_is_chunk_aligned() {
        assert!(is_chunk_aligned(10_000_000));
        assert!(is_chunk_aligned(30_000_000));
        assert!(!is_chunk_aligned(12_345_678));
        assert!(!is_chunk_aligned(10_000_001));
        assert!(!is_chunk_aligned(9_999_999));
    }

    #[test]
    fn test_zero_is_aligned() {
        // boundary; never expected with real data
        assert!(is_chunk_aligned(0));
    }

    #[test]
    fn test_partition() {
        let (chunked, unrepairable) =
            partition(vec![located(30_000_000), located(12_345_678), located(0)]);

        assert_eq!(chunked.len(), 2);
        assert_eq!(unrepairable.len(), 1);
        assert_eq!(unrepairable[0].record.size, 12_345_678);
        assert_eq!(unrepairable[0].outcome, Outcome::NotChunked);
        assert!(unrepairable[0].versions.is_empty());
    }
}
