use chrono::{TimeZone, Utc};
use std::cell::RefCell;
use std::collections::HashMap;
use unchunk::{
    BackendError, BackendResult, FileMeta, Options, OptionsBuilder, StorageBackend, StuckRecord,
    Version,
};

/// In-memory stand-in for the storage backend. Fixtures are registered up
/// front; every version-listing and rollback call is recorded so tests can
/// assert what the pipeline actually touched.
#[derive(Default)]
pub struct MockBackend {
    files: HashMap<String, FileMeta>,
    versions: HashMap<String, Vec<Version>>,
    vanished_paths: Vec<String>,
    failing_version_paths: Vec<String>,
    failing_rollback_paths: Vec<String>,
    pub version_list_calls: RefCell<Vec<String>>,
    pub rollback_calls: RefCell<Vec<(String, String)>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, file_id: &str, path: &str, size: u64) -> Self {
        self.files.insert(
            file_id.to_string(),
            FileMeta {
                path: path.to_string(),
                size,
            },
        );
        self
    }

    pub fn with_versions(mut self, path: &str, versions: Vec<Version>) -> Self {
        self.versions.insert(path.to_string(), versions);
        self
    }

    /// Version listing for `path` answers "not found".
    pub fn with_vanished_path(mut self, path: &str) -> Self {
        self.vanished_paths.push(path.to_string());
        self
    }

    /// Version listing for `path` fails with a transport error.
    pub fn with_failing_versions(mut self, path: &str) -> Self {
        self.failing_version_paths.push(path.to_string());
        self
    }

    /// Rollback of `path` is rejected by the backend.
    pub fn with_failing_rollback(mut self, path: &str) -> Self {
        self.failing_rollback_paths.push(path.to_string());
        self
    }
}

impl StorageBackend for MockBackend {
    fn file_info_by_id(&self, file_id: &str) -> BackendResult<FileMeta> {
        self.files
            .get(file_id)
            .cloned()
            .ok_or_else(|| BackendError::NotFound(format!("file {}", file_id)))
    }

    fn list_versions(&self, path: &str) -> BackendResult<Vec<Version>> {
        self.version_list_calls.borrow_mut().push(path.to_string());
        if self.failing_version_paths.iter().any(|p| p == path) {
            return Err(BackendError::Backend(anyhow::anyhow!(
                "backend unavailable"
            )));
        }
        if self.vanished_paths.iter().any(|p| p == path) {
            return Err(BackendError::NotFound(format!("path {}", path)));
        }
        Ok(self.versions.get(path).cloned().unwrap_or_default())
    }

    fn rollback_to_version(&self, path: &str, version_key: &str) -> BackendResult<()> {
        self.rollback_calls
            .borrow_mut()
            .push((path.to_string(), version_key.to_string()));
        if self.failing_rollback_paths.iter().any(|p| p == path) {
            return Err(BackendError::Backend(anyhow::anyhow!("rollback rejected")));
        }
        Ok(())
    }
}

pub fn stuck(file_id: &str) -> StuckRecord {
    StuckRecord {
        observed_at: Utc.timestamp_opt(1_592_324_325, 0).unwrap(),
        file_id: file_id.to_string(),
    }
}

pub fn version(path: &str, size: u64, mtime_sec: i64) -> Version {
    Version {
        path: path.to_string(),
        size,
        mtime_sec,
    }
}

pub fn dry_run_options() -> Options {
    OptionsBuilder::new().build()
}

pub fn execute_options() -> Options {
    OptionsBuilder::new().execute(true).build()
}
