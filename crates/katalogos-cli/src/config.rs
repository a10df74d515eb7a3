//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `KATALOGOS_*` environment variables (e.g. `KATALOGOS_AUDIT__STRICT=true`)
//! 3. Config file (`--config`, or the default location)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Snapshot location settings.
    pub data: DataConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Audit policy settings.
    pub audit: AuditConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Snapshot directory; `--data-dir` wins over this, and the standard
    /// resolution chain applies when both are absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Treat advisory findings as fatal by default (`--strict` also sets
    /// this per invocation).
    pub strict: bool,
}

impl AppConfig {
    /// Load configuration: defaults ← file ← environment.
    ///
    /// The `config_file` parameter is the path the user passed via
    /// `--config` (or `None` to use the default location).  An explicitly
    /// passed file must exist; the default location may be absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        let settings = config::Config::builder()
            .add_source(config::File::from(path.clone()).required(required))
            .add_source(
                config::Environment::with_prefix("KATALOGOS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("failed to load configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.katalogos.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("gr", "katalogos", "katalogos")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".katalogos.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_sane() {
        let cfg = AppConfig::default();
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.output.format, "human");
        assert!(!cfg.audit.strict);
        assert!(cfg.data.dir.is_none());
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let cfg = AppConfig::load(None).unwrap();
        assert_eq!(cfg.output.format, "human");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/absolutely/does/not/exist.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            "[audit]\nstrict = true\n\n[output]\nno_color = true\n\n[data]\ndir = \"./snapshots\"\n"
        )
        .unwrap();

        let path = file.path().to_path_buf();
        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert!(cfg.audit.strict);
        assert!(cfg.output.no_color);
        assert_eq!(cfg.data.dir.as_deref(), Some(std::path::Path::new("./snapshots")));
        // Untouched sections keep their defaults.
        assert_eq!(cfg.output.format, "human");
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
