use thiserror::Error;

/// Root domain error type.
///
/// These are *hard* failures: a snapshot that cannot be understood at all, or
/// a caller-supplied value outside its closed domain. Record-level anomalies
/// inside an otherwise readable snapshot are never errors — they are
/// accumulated as audit findings instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A snapshot file could not be read or deserialized.
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// A caller passed a provider kind outside the closed set.
    #[error("unknown provider kind '{value}'; expected 'freelancer' or 'company'")]
    UnknownProviderKind { value: String },

    /// A caller named a table that does not exist.
    #[error("unknown table '{value}'; expected one of: locations, taxonomy, tags")]
    UnknownTable { value: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidSnapshot(msg) => vec![
                "The snapshot file could not be loaded".into(),
                format!("Details: {}", msg),
                "Re-run the upstream generation step and try again".into(),
            ],
            Self::UnknownProviderKind { value } => vec![
                format!("'{}' is not a provider kind", value),
                "Valid kinds: freelancer, company".into(),
            ],
            Self::UnknownTable { value } => vec![
                format!("'{}' is not a table", value),
                "Valid tables: locations, taxonomy, tags".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidSnapshot(_) => ErrorCategory::Validation,
            Self::UnknownProviderKind { .. } | Self::UnknownTable { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
