//! Domain entities: the record types of the three reference tables.

pub mod dataset;
pub mod location;
pub mod tag;
pub mod taxonomy;

pub use dataset::{Dataset, DatasetSummary, SnapshotFile, SnapshotStamps};
pub use location::{Area, PostalCode, Region, is_postal_code};
pub use tag::Tag;
pub use taxonomy::{Category, Profession};
