use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use crate::error::{Result, SourceError};
use crate::record::NetworkRequest;

/// Where listing calls read captured requests from.
///
/// Each call takes a fresh snapshot; nothing is retained between calls. Implementations are
/// expected to only ever append, so page tokens from earlier snapshots stay meaningful.
#[async_trait]
pub trait RequestSource: Send + Sync {
    async fn snapshot(&self) -> Result<Vec<NetworkRequest>>;
}

/// JSON Lines capture log written by a recording driver, one record per line.
#[derive(Debug, Clone)]
pub struct CaptureFile {
    path: PathBuf,
}

impl CaptureFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn parse(path: &Path, raw: &str) -> Result<Vec<NetworkRequest>> {
        let mut records = Vec::new();
        for (idx, line) in raw.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let record = serde_json::from_str(line).map_err(|source| SourceError::Parse {
                path: path.to_path_buf(),
                line: idx + 1,
                source,
            })?;
            records.push(record);
        }
        Ok(records)
    }
}

#[async_trait]
impl RequestSource for CaptureFile {
    async fn snapshot(&self) -> Result<Vec<NetworkRequest>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            // The driver may not have written anything yet.
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("capture file {} not found", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(SourceError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let records = Self::parse(&self.path, &raw)?;
        log::debug!(
            "read {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}

/// Append-only in-memory store.
#[derive(Debug, Default)]
pub struct MemorySource {
    records: RwLock<Vec<NetworkRequest>>,
}

impl MemorySource {
    pub fn new(records: Vec<NetworkRequest>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn push(&self, record: NetworkRequest) {
        self.records.write().await.push(record);
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RequestSource for MemorySource {
    async fn snapshot(&self) -> Result<Vec<NetworkRequest>> {
        Ok(self.records.read().await.clone())
    }
}
