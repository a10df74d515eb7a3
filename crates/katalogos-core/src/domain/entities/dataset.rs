//! A loaded snapshot of all three tables.
//!
//! Tables are immutable once loaded; the only "mutation" in this system is
//! wholesale regeneration upstream, outside this crate's boundary.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::entities::{Category, Region, Tag};

/// The three reference tables plus their generation stamps.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub regions: Vec<Region>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub stamps: SnapshotStamps,
}

/// Per-table `generated_at` stamps, when the snapshot files carry them.
///
/// The original generator wrote a timestamped header comment into each file;
/// the JSON rendition carries the same information as an optional envelope
/// field (see [`SnapshotFile`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SnapshotStamps {
    pub locations: Option<DateTime<Utc>>,
    pub taxonomy: Option<DateTime<Utc>>,
    pub tags: Option<DateTime<Utc>>,
}

/// Size summary used for logging and the `check` report header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatasetSummary {
    pub regions: usize,
    pub areas: usize,
    pub postal_codes: usize,
    pub categories: usize,
    pub professions: usize,
    pub tags: usize,
}

impl Dataset {
    pub fn new(regions: Vec<Region>, categories: Vec<Category>, tags: Vec<Tag>) -> Self {
        Self {
            regions,
            categories,
            tags,
            stamps: SnapshotStamps::default(),
        }
    }

    pub fn with_stamps(mut self, stamps: SnapshotStamps) -> Self {
        self.stamps = stamps;
        self
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            regions: self.regions.len(),
            areas: self.regions.iter().map(|r| r.children.len()).sum(),
            postal_codes: self
                .regions
                .iter()
                .flat_map(|r| &r.children)
                .map(|a| a.children.len())
                .sum(),
            categories: self.categories.len(),
            professions: self.categories.iter().map(|c| c.children.len()).sum(),
            tags: self.tags.len(),
        }
    }
}

// ── Snapshot file envelope ────────────────────────────────────────────────────

/// One snapshot file on the wire: either a bare array of records, or an
/// envelope carrying the generation stamp alongside the records.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SnapshotFile<T> {
    Stamped {
        generated_at: DateTime<Utc>,
        entries: Vec<T>,
    },
    Bare(Vec<T>),
}

impl<T> SnapshotFile<T> {
    /// Split into the optional stamp and the records.
    pub fn into_parts(self) -> (Option<DateTime<Utc>>, Vec<T>) {
        match self {
            Self::Stamped {
                generated_at,
                entries,
            } => (Some(generated_at), entries),
            Self::Bare(entries) => (None, entries),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_array_file_parses() {
        let file: SnapshotFile<Tag> =
            serde_json::from_str(r#"[{ "id": "1", "slug": "python", "label": "Python" }]"#)
                .unwrap();
        let (stamp, entries) = file.into_parts();
        assert!(stamp.is_none());
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn stamped_file_parses() {
        let file: SnapshotFile<Tag> = serde_json::from_str(
            r#"{
                "generated_at": "2024-11-03T09:41:00Z",
                "entries": [{ "id": "1", "slug": "python", "label": "Python" }]
            }"#,
        )
        .unwrap();
        let (stamp, entries) = file.into_parts();
        assert!(stamp.is_some());
        assert_eq!(entries[0].label, "Python");
    }

    #[test]
    fn summary_counts_every_level() {
        let dataset = Dataset::new(
            serde_json::from_str(
                r#"[{
                    "id": "1", "name": "Αττική",
                    "children": [
                        { "id": "1", "name": "Αθήνα - Κέντρο",
                          "children": [{ "id": "1", "name": "10431" }],
                          "child_count": 1 }
                    ],
                    "child_count": 1
                }]"#,
            )
            .unwrap(),
            vec![],
            vec![],
        );
        let summary = dataset.summary();
        assert_eq!(summary.regions, 1);
        assert_eq!(summary.areas, 1);
        assert_eq!(summary.postal_codes, 1);
    }
}
