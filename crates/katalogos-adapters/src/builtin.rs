//! Built-in snapshot discovery.
//!
//! This module provides [`resolve`], the single entry-point for finding the
//! snapshot the tool should operate on. It abstracts over the discovery
//! strategy so callers do not need to know where snapshots live on disk.
//!
//! # Snapshot resolution order
//!
//! Directories are probed in this priority order, stopping at the first one
//! that contains all three snapshot files:
//!
//! 1. **An explicit directory** passed by the caller (`--data-dir`). When
//!    given, it is authoritative: a missing or malformed snapshot there is a
//!    hard error, not a reason to fall through.
//! 2. **`$KATALOGOS_DATA_DIR`** — environment variable override.
//! 3. **`./data`** — relative to the current working directory.
//! 4. **`<executable-dir>/data`** — sibling to the `katalogos` binary.
//! 5. **`../data`** — one level above CWD, convenient during development.
//! 6. **The embedded snapshot** compiled into this crate — always present,
//!    so resolution without an explicit directory cannot fail to find data.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use katalogos_core::{domain::Dataset, error::KatalogosResult};

use crate::embedded;
use crate::snapshot_loader::FilesystemSnapshotLoader;

/// A resolved snapshot plus where it came from.
#[derive(Debug, Clone)]
pub struct ResolvedSnapshot {
    pub dataset: Dataset,
    /// Human-readable provenance, e.g. `directory ./data` or
    /// `embedded snapshot`.
    pub origin: String,
}

/// Resolve a snapshot using the documented priority order.
///
/// # Errors
///
/// With an explicit `data_dir`, any load failure there propagates. Without
/// one, only a *malformed* candidate directory errors — a directory that
/// simply lacks the snapshot files is skipped with a `DEBUG` log, and the
/// embedded snapshot is the final fallback.
#[instrument(skip_all)]
pub fn resolve(data_dir: Option<&Path>) -> KatalogosResult<ResolvedSnapshot> {
    if let Some(dir) = data_dir {
        let dataset = FilesystemSnapshotLoader::new(dir).load()?;
        info!(dir = %dir.display(), "snapshot loaded from explicit directory");
        return Ok(ResolvedSnapshot {
            dataset,
            origin: format!("directory {}", dir.display()),
        });
    }

    for candidate in candidate_paths() {
        let loader = FilesystemSnapshotLoader::new(&candidate);
        if !loader.has_snapshot() {
            debug!(path = %candidate.display(), "no snapshot here, trying next");
            continue;
        }

        let dataset = loader.load()?; // a present-but-broken snapshot is a hard error
        info!(path = %candidate.display(), "snapshot loaded");
        return Ok(ResolvedSnapshot {
            dataset,
            origin: format!("directory {}", candidate.display()),
        });
    }

    debug!("no snapshot directory found, using the embedded snapshot");
    Ok(ResolvedSnapshot {
        dataset: embedded::dataset().clone(),
        origin: "embedded snapshot".into(),
    })
}

/// Build the ordered list of candidate paths to probe.
///
/// Only resolvable entries are returned; a missing env-var or an
/// unresolvable exe path is silently omitted.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(4);

    if let Ok(dir) = std::env::var("KATALOGOS_DATA_DIR") {
        if !dir.is_empty() {
            paths.push(PathBuf::from(dir));
        }
    }

    paths.push(PathBuf::from("./data"));

    if let Ok(exe) = std::env::current_exe() {
        if let Some(exe_dir) = exe.parent() {
            paths.push(exe_dir.join("data"));
        }
    }

    paths.push(PathBuf::from("../data"));

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use katalogos_core::domain::DomainError;
    use katalogos_core::error::KatalogosError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_missing_directory_is_a_hard_error() {
        let err = resolve(Some(Path::new("/absolutely/does/not/exist"))).unwrap_err();
        assert!(matches!(
            err,
            KatalogosError::Domain(DomainError::InvalidSnapshot(_))
        ));
    }

    #[test]
    fn explicit_directory_is_authoritative() {
        // Present but incomplete: must error rather than fall back.
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("locations.json"), "[]").unwrap();
        let err = resolve(Some(temp.path())).unwrap_err();
        assert!(matches!(
            err,
            KatalogosError::Domain(DomainError::InvalidSnapshot(_))
        ));
    }

    #[test]
    fn explicit_directory_loads() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("locations.json"), "[]").unwrap();
        fs::write(temp.path().join("taxonomy.json"), "[]").unwrap();
        fs::write(
            temp.path().join("tags.json"),
            r#"[{ "id": "1", "slug": "python", "label": "Python" }]"#,
        )
        .unwrap();

        let resolved = resolve(Some(temp.path())).unwrap();
        assert_eq!(resolved.dataset.tags.len(), 1);
        assert!(resolved.origin.starts_with("directory "));
    }

    #[test]
    fn candidate_paths_include_cwd_data() {
        let paths = candidate_paths();
        assert!(paths.contains(&PathBuf::from("./data")));
        assert!(paths.contains(&PathBuf::from("../data")));
    }
}
