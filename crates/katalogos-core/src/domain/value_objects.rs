//! Domain value objects: ProviderKind, Table.
//!
//! # Design
//!
//! Pure value types — equality-by-value, no identity, no I/O. Their only job
//! is to define the closed string domains of the dataset, their string
//! representations, and their parsers.
//!
//! `ProviderKind` is deliberately *total* at the deserialization boundary:
//! the upstream generator writes a bare string, and a regeneration bug must
//! not abort loading. Out-of-domain values become [`ProviderKind::Other`]
//! and are rejected later, during the audit pass, not at arbitrary use
//! sites.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ProviderKind ──────────────────────────────────────────────────────────────

/// The `type` discriminator of a taxonomy leaf.
///
/// Exactly two values are legal: `freelancer` (an individual professional)
/// and `company`. Anything else found in a snapshot is preserved verbatim in
/// [`ProviderKind::Other`] so the audit can report it with the offending
/// value intact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProviderKind {
    Freelancer,
    Company,
    /// Out-of-domain value, carried as-is for the audit to report.
    Other(String),
}

impl ProviderKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Freelancer => "freelancer",
            Self::Company => "company",
            Self::Other(value) => value,
        }
    }

    /// Whether this value belongs to the closed two-value set.
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Freelancer | Self::Company)
    }
}

impl From<String> for ProviderKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "freelancer" => Self::Freelancer,
            "company" => Self::Company,
            _ => Self::Other(value),
        }
    }
}

impl From<ProviderKind> for String {
    fn from(kind: ProviderKind) -> Self {
        kind.as_str().to_owned()
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = DomainError;

    /// Strict parser for caller-supplied values (CLI flags, filters).
    ///
    /// Unlike the serde path, this rejects anything outside the closed set —
    /// a user typo is an input error, not a dataset anomaly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "freelancer" => Ok(Self::Freelancer),
            "company" => Ok(Self::Company),
            other => Err(DomainError::UnknownProviderKind {
                value: other.to_owned(),
            }),
        }
    }
}

// ── Table ─────────────────────────────────────────────────────────────────────

/// One of the three reference tables.
///
/// The declaration order is the canonical report order — findings are sorted
/// by table first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Table {
    Locations,
    Taxonomy,
    Tags,
}

impl Table {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Locations => "locations",
            Self::Taxonomy => "taxonomy",
            Self::Tags => "tags",
        }
    }

    /// Conventional snapshot file name for this table.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Locations => "locations.json",
            Self::Taxonomy => "taxonomy.json",
            Self::Tags => "tags.json",
        }
    }

    pub const ALL: [Table; 3] = [Self::Locations, Self::Taxonomy, Self::Tags];
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Table {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "locations" => Ok(Self::Locations),
            "taxonomy" => Ok(Self::Taxonomy),
            "tags" => Ok(Self::Tags),
            other => Err(DomainError::UnknownTable {
                value: other.to_owned(),
            }),
        }
    }
}
