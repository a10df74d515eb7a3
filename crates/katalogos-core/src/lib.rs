//! Katalogos Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Katalogos
//! reference-data toolkit, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          katalogos-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (CatalogService, AuditService)       │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (Driven: DatasetSource)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    katalogos-adapters (Infrastructure)  │
//! │  (SnapshotLoader, EmbeddedSnapshot, …)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Region, Category, Tag, DatasetAuditor)│
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use katalogos_core::{
//!     application::CatalogService,
//!     domain::{Dataset, DatasetAuditor},
//! };
//!
//! let dataset = Dataset::default();
//! let report = DatasetAuditor::audit(&dataset);
//! assert!(report.is_clean());
//!
//! let catalog = CatalogService::new(dataset);
//! assert!(catalog.regions().is_empty());
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AuditPolicy, AuditRun, AuditService, CatalogService, SlugMatch, Verdict,
        ports::DatasetSource,
    };
    pub use crate::domain::{
        Area, AuditReport, Category, Dataset, DatasetAuditor, DatasetSummary, Finding,
        FindingClass, FindingKind, NodePath, PostalCode, Profession, ProviderKind, Region,
        Severity, SnapshotFile, Table, Tag,
    };
    pub use crate::error::{KatalogosError, KatalogosResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
