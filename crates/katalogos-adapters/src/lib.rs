//! Infrastructure adapters for Katalogos.
//!
//! This crate implements the ports defined in
//! `katalogos-core::application::ports`. It contains all external
//! dependencies and I/O operations: reading snapshot directories, the
//! embedded snapshot, and the in-memory catalog source.

pub mod builtin;
pub mod catalog_source;
pub mod embedded;
pub mod snapshot_loader;

// Re-export commonly used adapters
pub use builtin::{ResolvedSnapshot, resolve};
pub use catalog_source::InMemoryCatalog;
pub use embedded::EmbeddedSnapshot;
pub use snapshot_loader::FilesystemSnapshotLoader;
