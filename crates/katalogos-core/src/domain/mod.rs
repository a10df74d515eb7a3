//! Core domain layer for Katalogos.
//!
//! Pure business logic with no I/O: the record types of the three reference
//! tables, the Greek-aware collation used by the ordering advisory, and the
//! dataset audit with its findings vocabulary. Loading snapshots from disk
//! is an adapter concern behind the application ports.
//!
//! - **No async**: everything here is a bounded, synchronous traversal
//! - **No I/O**: no filesystem, network, or external calls
//! - **Immutable entities**: tables are loaded once and never mutated

pub mod audit;
pub mod collation;
pub mod entities;
pub mod error;
pub mod findings;
pub mod value_objects;

// Re-exports for convenience
pub use audit::DatasetAuditor;
pub use entities::{
    Area, Category, Dataset, DatasetSummary, PostalCode, Profession, Region, SnapshotFile,
    SnapshotStamps, Tag, is_postal_code,
};
pub use error::{DomainError, ErrorCategory};
pub use findings::{AuditReport, Finding, FindingClass, FindingKind, NodePath, Severity};
pub use value_objects::{ProviderKind, Table};
