//! In-memory dataset source with built-in snapshot loading.

use std::sync::{Arc, RwLock};

use katalogos_core::{
    application::{ApplicationError, ports::DatasetSource},
    domain::Dataset,
    error::KatalogosResult,
};

use crate::builtin;

#[derive(Debug, Clone)]
struct Stored {
    dataset: Dataset,
    origin: String,
}

/// Thread-safe in-memory dataset source.
///
/// Holds at most one snapshot. The tables themselves are immutable; the lock
/// only guards wholesale replacement (a new snapshot swapped in by tests or
/// a long-lived host application).
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<Option<Stored>>>,
}

impl InMemoryCatalog {
    /// Create a new empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source holding the resolved built-in snapshot.
    pub fn with_builtin() -> KatalogosResult<Self> {
        let resolved = builtin::resolve(None)?;
        Ok(Self::with_dataset(resolved.dataset, resolved.origin))
    }

    /// Create a source holding the given dataset.
    pub fn with_dataset(dataset: Dataset, origin: impl Into<String>) -> Self {
        let source = Self::new();
        // A fresh lock cannot be poisoned.
        *source.inner.write().unwrap() = Some(Stored {
            dataset,
            origin: origin.into(),
        });
        source
    }

    /// Replace the held snapshot.
    pub fn replace(&self, dataset: Dataset, origin: impl Into<String>) -> KatalogosResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::SourceLockError)?;
        *inner = Some(Stored {
            dataset,
            origin: origin.into(),
        });
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.inner.read().map(|s| s.is_some()).unwrap_or(false)
    }

    /// Drop the held snapshot.
    pub fn clear(&self) -> KatalogosResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::SourceLockError)?;
        *inner = None;
        Ok(())
    }
}

impl DatasetSource for InMemoryCatalog {
    fn load(&self) -> KatalogosResult<Dataset> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::SourceLockError)?;

        match inner.as_ref() {
            Some(stored) => Ok(stored.dataset.clone()),
            None => Err(ApplicationError::SnapshotUnavailable {
                reason: "no snapshot has been loaded into this catalog".into(),
            }
            .into()),
        }
    }

    fn describe(&self) -> String {
        self.inner
            .read()
            .ok()
            .and_then(|inner| inner.as_ref().map(|s| s.origin.clone()))
            .unwrap_or_else(|| "empty catalog".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_catalog_reports_unavailable() {
        let source = InMemoryCatalog::new();
        assert!(!source.is_loaded());
        assert!(source.load().is_err());
        assert_eq!(source.describe(), "empty catalog");
    }

    #[test]
    fn with_dataset_round_trips() {
        let source = InMemoryCatalog::with_dataset(Dataset::default(), "test fixture");
        assert!(source.is_loaded());
        assert_eq!(source.describe(), "test fixture");
        assert!(source.load().unwrap().regions.is_empty());
    }

    #[test]
    fn replace_swaps_the_snapshot() {
        let source = InMemoryCatalog::with_dataset(Dataset::default(), "first");
        source.replace(Dataset::default(), "second").unwrap();
        assert_eq!(source.describe(), "second");
    }

    #[test]
    fn clear_empties_the_catalog() {
        let source = InMemoryCatalog::with_dataset(Dataset::default(), "fixture");
        source.clear().unwrap();
        assert!(!source.is_loaded());
        assert!(source.load().is_err());
    }

    #[test]
    fn with_builtin_always_has_data() {
        // Resolution ends at the embedded snapshot, so this cannot be empty.
        let source = InMemoryCatalog::with_builtin().unwrap();
        let dataset = source.load().unwrap();
        assert!(!dataset.regions.is_empty());
        assert!(!dataset.tags.is_empty());
    }
}
