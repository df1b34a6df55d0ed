//! JSON-file-backed progress store.
//!
//! The whole document is read and rewritten on each operation, matching
//! the store contract. A missing file on first run is an empty map, not
//! an error. There is no file locking; concurrent writers race and the
//! last write wins.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use quizbank_core::error::StoreError;
use quizbank_core::traits::{ProgressMap, ProgressStore};

/// Progress store persisting to a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonProgressStore {
    path: PathBuf,
}

impl JsonProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProgressStore for JsonProgressStore {
    async fn load(&self) -> Result<ProgressMap, StoreError> {
        if !self.path.exists() {
            tracing::debug!("progress file {} absent, starting empty", self.path.display());
            return Ok(ProgressMap::new());
        }
        let content = tokio::fs::read_to_string(&self.path).await?;
        let progress = serde_json::from_str(&content)?;
        Ok(progress)
    }

    async fn save(&self, progress: &ProgressMap) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(progress)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}
