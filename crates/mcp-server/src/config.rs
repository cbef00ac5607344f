use netpage_capture::{CaptureFile, MemorySource, RequestSource};
use netpage_core::PaginationConfig;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

/// JSON Lines capture log the server reads on every call.
pub const CAPTURE_FILE_ENV: &str = "NETPAGE_CAPTURE_FILE";

/// Largest `pageSize` accepted by `list_network_requests`.
pub const MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    pub capture_file: Option<PathBuf>,
    pub pagination: PaginationConfig,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            capture_file: capture_file_from(env::var(CAPTURE_FILE_ENV).ok().as_deref()),
            pagination: PaginationConfig::from_env(),
        }
    }

    /// Without a capture file the server lists an empty in-memory session.
    pub fn request_source(&self) -> Arc<dyn RequestSource> {
        match &self.capture_file {
            Some(path) => Arc::new(CaptureFile::new(path)),
            None => Arc::new(MemorySource::default()),
        }
    }

    pub fn source_label(&self) -> String {
        match &self.capture_file {
            Some(path) => format!("capture file {}", path.display()),
            None => "in-memory".to_string(),
        }
    }
}

fn capture_file_from(raw: Option<&str>) -> Option<PathBuf> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
