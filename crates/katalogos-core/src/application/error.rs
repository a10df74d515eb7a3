//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No dataset source could produce a snapshot.
    #[error("Snapshot unavailable: {reason}")]
    SnapshotUnavailable { reason: String },

    /// Source access failed (lock poisoned, etc.).
    #[error("Dataset source error")]
    SourceLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SnapshotUnavailable { reason } => vec![
                format!("Could not load a snapshot: {}", reason),
                "Set KATALOGOS_DATA_DIR or pass --data-dir".into(),
                "The bundled snapshot is used when no directory is found".into(),
            ],
            Self::SourceLockError => vec![
                "The dataset source is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SnapshotUnavailable { .. } => ErrorCategory::NotFound,
            Self::SourceLockError => ErrorCategory::Internal,
        }
    }
}
