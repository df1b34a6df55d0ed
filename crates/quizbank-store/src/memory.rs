//! In-memory progress store for tests and ephemeral runs.

use std::sync::Mutex;

use async_trait::async_trait;

use quizbank_core::error::StoreError;
use quizbank_core::traits::{ProgressMap, ProgressStore};

/// Progress store holding the document behind a mutex. Nothing survives
/// the process.
#[derive(Debug, Default)]
pub struct MemoryProgressStore {
    data: Mutex<ProgressMap>,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an initial document.
    pub fn with_data(data: ProgressMap) -> Self {
        Self {
            data: Mutex::new(data),
        }
    }
}

#[async_trait]
impl ProgressStore for MemoryProgressStore {
    async fn load(&self) -> Result<ProgressMap, StoreError> {
        let guard = self
            .data
            .lock()
            .map_err(|_| StoreError::Backend("progress mutex poisoned".into()))?;
        Ok(guard.clone())
    }

    async fn save(&self, progress: &ProgressMap) -> Result<(), StoreError> {
        let mut guard = self
            .data
            .lock()
            .map_err(|_| StoreError::Backend("progress mutex poisoned".into()))?;
        *guard = progress.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[tokio::test]
    async fn starts_empty() {
        let store = MemoryProgressStore::new();
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_then_load() {
        let store = MemoryProgressStore::new();
        let mut progress = ProgressMap::new();
        progress.insert(
            "alice".to_string(),
            HashMap::from([("Vectors".to_string(), 62.0)]),
        );
        store.save(&progress).await.unwrap();
        assert_eq!(store.load().await.unwrap()["alice"]["Vectors"], 62.0);
    }

    #[tokio::test]
    async fn with_data_seeds_document() {
        let seeded = ProgressMap::from([(
            "bob".to_string(),
            HashMap::from([("Kinematics".to_string(), 41.5)]),
        )]);
        let store = MemoryProgressStore::with_data(seeded);
        assert_eq!(store.load().await.unwrap()["bob"]["Kinematics"], 41.5);
    }
}
