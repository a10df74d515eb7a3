//! The snapshot bundled into the binary.
//!
//! A representative slice of the real generated data is compiled in via
//! `include_str!` and parsed once on first use. It preserves the quirks of
//! the upstream data on purpose — placeholder regions with no children,
//! cross-branch id reuse, and shared profession slugs — so the toolchain is
//! exercised against realistic input even with no data directory around.

use std::sync::OnceLock;

use katalogos_core::{
    application::ports::DatasetSource,
    domain::{Dataset, SnapshotFile, SnapshotStamps},
    error::KatalogosResult,
};

const LOCATIONS_JSON: &str = include_str!("../data/locations.json");
const TAXONOMY_JSON: &str = include_str!("../data/taxonomy.json");
const TAGS_JSON: &str = include_str!("../data/tags.json");

/// Parse the bundled snapshot, once.
///
/// The bundled files are fixed at compile time and covered by tests, so a
/// parse failure here is a build defect, not a runtime condition.
pub fn dataset() -> &'static Dataset {
    static DATASET: OnceLock<Dataset> = OnceLock::new();
    DATASET.get_or_init(|| {
        let (locations_stamp, regions) =
            parse::<katalogos_core::domain::Region>(LOCATIONS_JSON, "locations.json");
        let (taxonomy_stamp, categories) =
            parse::<katalogos_core::domain::Category>(TAXONOMY_JSON, "taxonomy.json");
        let (tags_stamp, tags) = parse::<katalogos_core::domain::Tag>(TAGS_JSON, "tags.json");

        Dataset::new(regions, categories, tags).with_stamps(SnapshotStamps {
            locations: locations_stamp,
            taxonomy: taxonomy_stamp,
            tags: tags_stamp,
        })
    })
}

fn parse<T: serde::de::DeserializeOwned>(
    raw: &str,
    name: &str,
) -> (Option<chrono::DateTime<chrono::Utc>>, Vec<T>) {
    let file: SnapshotFile<T> = serde_json::from_str(raw)
        .unwrap_or_else(|e| panic!("bundled {name} does not parse: {e}"));
    file.into_parts()
}

/// [`DatasetSource`] backed by the bundled snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSnapshot;

impl EmbeddedSnapshot {
    pub fn new() -> Self {
        Self
    }
}

impl DatasetSource for EmbeddedSnapshot {
    fn load(&self) -> KatalogosResult<Dataset> {
        Ok(dataset().clone())
    }

    fn describe(&self) -> String {
        "embedded snapshot".into()
    }
}
