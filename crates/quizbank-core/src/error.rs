//! Progress store error types.
//!
//! Defined in `quizbank-core` so the engine can classify store failures
//! without string matching; implementations live in `quizbank-store`.

use thiserror::Error;

/// Errors that can occur when loading or saving progress.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the underlying storage failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any other backend-specific failure.
    #[error("store backend error: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts() {
        let err: StoreError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.to_string().contains("I/O"));
    }

    #[test]
    fn serialization_error_converts() {
        let bad = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: StoreError = bad.into();
        assert!(err.to_string().contains("serialization"));
    }
}
