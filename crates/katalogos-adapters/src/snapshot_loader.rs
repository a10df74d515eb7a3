//! Filesystem-based snapshot loader.
//!
//! Reads the three generated JSON files from a snapshot directory and
//! converts them into a domain [`Dataset`] ready for the audit and the
//! catalog services.
//!
//! # Directory layout expected
//!
//! ```text
//! data/
//! ├── locations.json    ← region → area → postal-code hierarchy
//! ├── taxonomy.json     ← category → profession tree
//! └── tags.json         ← flat tag list
//! ```
//!
//! # File format
//!
//! Each file is either a bare JSON array of records, or an envelope that
//! carries the generation stamp alongside them:
//!
//! ```json
//! { "generated_at": "2025-06-14T03:12:45Z", "entries": [ ... ] }
//! ```
//!
//! A directory-level problem (missing file, unreadable file, malformed
//! JSON) is a hard [`DomainError::InvalidSnapshot`] — half a snapshot is
//! not a snapshot. *Record-level* anomalies (an out-of-domain `type`, a bad
//! postal code) load fine and are the audit's business.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use katalogos_core::domain::{
    Dataset, DomainError, SnapshotFile, SnapshotStamps, Table,
};

/// Loads a [`Dataset`] from a directory of generated snapshot files.
pub struct FilesystemSnapshotLoader {
    data_dir: PathBuf,
}

impl FilesystemSnapshotLoader {
    /// Create a loader pointed at `data_dir`.
    ///
    /// The directory does not need to exist yet; [`Self::load`] will return
    /// an error if it is missing when called.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Whether all three snapshot files are present.
    ///
    /// Used by the resolution chain in [`crate::builtin`] to decide whether
    /// a candidate directory counts as a snapshot at all.
    pub fn has_snapshot(&self) -> bool {
        Table::ALL
            .iter()
            .all(|table| self.data_dir.join(table.file_name()).is_file())
    }

    /// Load all three tables.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSnapshot`] if the directory is missing,
    /// any of the three files is missing or unreadable, or any file fails to
    /// parse as its record schema.
    #[instrument(skip(self), fields(dir = %self.data_dir.display()))]
    pub fn load(&self) -> Result<Dataset, DomainError> {
        if !self.data_dir.exists() {
            return Err(DomainError::InvalidSnapshot(format!(
                "snapshot directory not found: {}",
                self.data_dir.display()
            )));
        }

        let (locations_stamp, regions) = self.load_table(Table::Locations)?;
        let (taxonomy_stamp, categories) = self.load_table(Table::Taxonomy)?;
        let (tags_stamp, tags) = self.load_table(Table::Tags)?;

        debug!(
            regions = regions.len(),
            categories = categories.len(),
            tags = tags.len(),
            "snapshot loaded"
        );

        Ok(Dataset::new(regions, categories, tags).with_stamps(SnapshotStamps {
            locations: locations_stamp,
            taxonomy: taxonomy_stamp,
            tags: tags_stamp,
        }))
    }

    /// Load one table file, returning its optional stamp and its records.
    fn load_table<T: DeserializeOwned>(
        &self,
        table: Table,
    ) -> Result<(Option<DateTime<Utc>>, Vec<T>), DomainError> {
        let path = self.data_dir.join(table.file_name());
        if !path.exists() {
            return Err(DomainError::InvalidSnapshot(format!(
                "missing {} in '{}'",
                table.file_name(),
                self.data_dir.display()
            )));
        }

        let raw = fs::read_to_string(&path).map_err(|e| {
            DomainError::InvalidSnapshot(format!("failed to read '{}': {e}", path.display()))
        })?;

        let file: SnapshotFile<T> = serde_json::from_str(&raw).map_err(|e| {
            DomainError::InvalidSnapshot(format!("failed to parse '{}': {e}", path.display()))
        })?;

        Ok(file.into_parts())
    }
}
