//! Record types for each pipeline stage.
//!
//! Each stage produces its own type instead of mutating one shared record:
//! a record excluded by filtering cannot reach classification, and a
//! rollback target exists exactly when the outcome is [`Outcome::Repairable`].

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One line of the input file: an aborted-upload remnant reported by the
/// upstream detection tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StuckRecord {
    /// When the remnant was observed
    pub observed_at: DateTime<Utc>,
    /// Opaque storage-layer file handle
    pub file_id: String,
}

/// Current metadata for a file, as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileMeta {
    pub path: String,
    pub size: u64,
}

/// A record that survived the relevance filter: its current path is in a
/// nominal namespace and its size is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedRecord {
    pub file_id: String,
    pub observed_at: DateTime<Utc>,
    pub path: String,
    pub size: u64,
}

/// A historical snapshot of a path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Version {
    /// Storage-layer identifier for this snapshot
    pub path: String,
    /// Byte count at that point in time
    pub size: u64,
    /// Modification time, used for ordering
    pub mtime_sec: i64,
}

impl Version {
    /// The version identifier the backend's rollback command expects:
    /// the final component of the snapshot path.
    pub fn key(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// Terminal classification of a record. The rollback target travels with
/// the `Repairable` variant, so it cannot exist for any other outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A complete prior version exists; carries the rollback target
    Repairable(Version),
    /// Current size is not a chunk multiple; not an aborted chunked upload
    NotChunked,
    /// No version history exists for the path
    NoVersions,
    /// Every available version is itself a chunked fragment
    NoValidVersion,
    /// The path disappeared between filtering and resolution
    Vanished,
}

impl Outcome {
    /// Short machine-ish label for summary lines.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Repairable(_) => "repairable",
            Outcome::NotChunked => "not-chunked",
            Outcome::NoVersions => "no-versions",
            Outcome::NoValidVersion => "no-valid-version",
            Outcome::Vanished => "vanished",
        }
    }

    /// Operator-facing explanation of the category.
    pub fn describe(&self) -> &'static str {
        match self {
            Outcome::Repairable(_) => {
                "a complete prior version exists and the file can be rolled back automatically"
            }
            Outcome::NotChunked => {
                "the current file is not an aborted chunked upload; its size is not explained by the known bug"
            }
            Outcome::NoVersions => "there is no version history to recover from",
            Outcome::NoValidVersion => {
                "every available version is itself a chunked fragment; no safe rollback target exists"
            }
            Outcome::Vanished => "the current file does not exist anymore",
        }
    }

    pub fn is_repairable(&self) -> bool {
        matches!(self, Outcome::Repairable(_))
    }
}

/// Final state of a record after classification and resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnosed {
    pub record: LocatedRecord,
    /// Version history fetched during resolution; empty for records that
    /// never reached it or whose path had no history
    pub versions: Vec<Version>,
    pub outcome: Outcome,
}
