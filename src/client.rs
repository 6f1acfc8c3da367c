//! Backing-store client: metadata lookup, version listing, rollback.

use crate::constants;
use crate::options::Options;
use crate::record::{FileMeta, Version};
use anyhow::{anyhow, Context};
use serde::Serialize;

/// Backend failures the pipeline cares to distinguish: a missing object is
/// recoverable, anything else is for the driver to decide.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

pub type BackendResult<T> = Result<T, BackendError>;

/// The backing-store operations the pipeline depends on. Implemented over
/// HTTP for the real backend and in-memory for tests.
pub trait StorageBackend {
    /// Current metadata for a file identifier.
    fn file_info_by_id(&self, file_id: &str) -> BackendResult<FileMeta>;

    /// All historical versions of a path, in whatever order the backend
    /// keeps them.
    fn list_versions(&self, path: &str) -> BackendResult<Vec<Version>>;

    /// Roll `path` back to the version named by `version_key`.
    fn rollback_to_version(&self, path: &str, version_key: &str) -> BackendResult<()>;
}

/// Blocking HTTP/JSON client for the storage backend. The execution
/// identity travels with every request as `user`/`group` query parameters.
pub struct HttpBackend {
    client: reqwest::blocking::Client,
    base_url: String,
    user: String,
    group: String,
}

#[derive(Serialize)]
struct RollbackRequest<'a> {
    path: &'a str,
    version: &'a str,
}

impl HttpBackend {
    pub fn new(options: &Options) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(constants::HTTP_TIMEOUT)
            .user_agent(constants::user_agent())
            .build()
            .context("building backend http client")?;

        Ok(Self {
            client,
            base_url: options.endpoint.trim_end_matches('/').to_string(),
            user: options.user.clone(),
            group: options.group.clone(),
        })
    }

    /// Map a response to our error taxonomy: 404 is `NotFound`, any other
    /// non-success status carries the backend's `{"error": ...}` message
    /// when one is present.
    fn check_status(
        &self,
        response: reqwest::blocking::Response,
        what: &str,
    ) -> BackendResult<reqwest::blocking::Response> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(BackendError::NotFound(what.to_string()));
        }
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            return Err(BackendError::Backend(anyhow!(
                "{}: backend returned {}: {}",
                what,
                status,
                message
            )));
        }
        Ok(response)
    }
}

impl StorageBackend for HttpBackend {
    fn file_info_by_id(&self, file_id: &str) -> BackendResult<FileMeta> {
        let url = format!("{}/files/{}", self.base_url, file_id);
        let response = self
            .client
            .get(&url)
            .query(&[("user", self.user.as_str()), ("group", self.group.as_str())])
            .send()
            .map_err(|e| anyhow::Error::new(e).context(format!("GET {}", url)))?;

        let response = self.check_status(response, &format!("file {}", file_id))?;
        let meta = response
            .json::<FileMeta>()
            .map_err(|e| anyhow::Error::new(e).context(format!("decoding metadata of {}", file_id)))?;
        Ok(meta)
    }

    fn list_versions(&self, path: &str) -> BackendResult<Vec<Version>> {
        let url = format!("{}/versions", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("path", path),
                ("user", self.user.as_str()),
                ("group", self.group.as_str()),
            ])
            .send()
            .map_err(|e| anyhow::Error::new(e).context(format!("GET {}", url)))?;

        let response = self.check_status(response, &format!("path {}", path))?;
        let versions = response
            .json::<Vec<Version>>()
            .map_err(|e| anyhow::Error::new(e).context(format!("decoding versions of {}", path)))?;
        Ok(versions)
    }

    fn rollback_to_version(&self, path: &str, version_key: &str) -> BackendResult<()> {
        let url = format!("{}/rollback", self.base_url);
        let response = self
            .client
            .post(&url)
            .query(&[("user", self.user.as_str()), ("group", self.group.as_str())])
            .json(&RollbackRequest {
                path,
                version: version_key,
            })
            .send()
            .map_err(|e| anyhow::Error::new(e).context(format!("POST {}", url)))?;

        self.check_status(response, &format!("rollback of {}", path))?;
        Ok(())
    }
}
