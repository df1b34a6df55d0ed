//! Progress persistence trait.
//!
//! The engine sees a key-value load/save capability over the whole
//! progress document; file-backed and in-memory implementations live in
//! the `quizbank-store` crate.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::StoreError;

/// Full persisted progress document: student id → (topic → mastery score).
pub type ProgressMap = HashMap<String, HashMap<String, f64>>;

/// A persistence backend for student progress.
///
/// The contract is deliberately whole-document: `load` returns the entire
/// map (empty on first run) and `save` rewrites it in full. There is no
/// isolation between concurrent submitters; the later write wins.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Load the entire progress document. A store that has never been
    /// written to returns an empty map, not an error.
    async fn load(&self) -> Result<ProgressMap, StoreError>;

    /// Rewrite the entire progress document.
    async fn save(&self, progress: &ProgressMap) -> Result<(), StoreError>;
}
