//! Driven (output) ports.

use crate::domain::Dataset;
use crate::error::KatalogosResult;

/// Anything that can produce a loaded snapshot of the three tables.
///
/// Implementations live in `katalogos-adapters` (filesystem directory,
/// embedded snapshot, in-memory catalog). The dataset is an immutable value;
/// `load` hands out an owned copy and services index it once.
#[cfg_attr(test, mockall::automock)]
pub trait DatasetSource {
    /// Produce the snapshot.
    fn load(&self) -> KatalogosResult<Dataset>;

    /// Human-readable provenance ("embedded snapshot", "directory ./data")
    /// for logs and the `check` report header.
    fn describe(&self) -> String;
}
