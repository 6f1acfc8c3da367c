//! Global constants and helpers: chunk geometry, path namespaces, and backend defaults
use std::time::Duration;

/// Binary name used in user agents and output
pub const BINARY_NAME: &str = "unchunk";

/// Package version from Cargo.toml (set at compile time)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the user agent string for backend requests
pub fn user_agent() -> String {
    format!("{}/{}", BINARY_NAME, VERSION)
}

// ============================================================================
// Chunk Geometry
// ============================================================================

/// Upload-client chunk unit in bytes (10 decimal megabytes). A file whose
/// size is an exact multiple of this unit is an aborted chunked upload.
pub const CHUNK_SIZE: u64 = 10_000_000;

// ============================================================================
// Path Namespaces
// ============================================================================

/// Path segment of the trash/recycle namespace
pub const RECYCLE_SEGMENT: &str = "/proc/recycle";

/// Path segment marking a version artifact
pub const VERSION_SEGMENT: &str = "sys.v";

/// Path segment marking a temporary atomic-write artifact
pub const ATOMIC_SEGMENT: &str = "sys.a";

// ============================================================================
// Backend Defaults
// ============================================================================

/// Default backend endpoint address
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

/// Default user/group role used for backend authorization
pub const DEFAULT_ROLE: &str = "root";

/// Default input file containing the stuck-upload records
pub const DEFAULT_INPUT: &str = "./stuck-uploads";

/// Backend request timeout
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent() {
        let ua = user_agent();
        assert!(ua.starts_with("unchunk/"));
    }

    #[test]
    fn test_chunk_size_is_decimal_megabytes() {
        assert_eq!(CHUNK_SIZE, 10 * 1_000_000);
    }
}
