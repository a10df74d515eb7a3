//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "katalogos",
    bin_name = "katalogos",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f5c2} Greek marketplace reference data: browse and verify",
    long_about = "Katalogos loads the generated reference datasets (locations, \
                  taxonomy, tags), verifies their invariants, and answers the \
                  lookups a picker UI needs.",
    after_help = "EXAMPLES:\n\
        \x20 katalogos check --data-dir ./data\n\
        \x20 katalogos check --strict --report-format json\n\
        \x20 katalogos list regions\n\
        \x20 katalogos list professions --category 1 --kind freelancer\n\
        \x20 katalogos resolve ekfonites",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Verify the dataset invariants and report findings.
    #[command(
        visible_alias = "c",
        about = "Verify dataset invariants",
        after_help = "EXAMPLES:\n\
            \x20 katalogos check\n\
            \x20 katalogos check --data-dir ./data\n\
            \x20 katalogos check --strict --report-format line"
    )]
    Check(CheckArgs),

    /// List entries of one table.
    #[command(
        visible_alias = "ls",
        about = "List reference-data entries",
        after_help = "EXAMPLES:\n\
            \x20 katalogos list regions\n\
            \x20 katalogos list areas --region 1\n\
            \x20 katalogos list postal-codes --region 1 --area 2\n\
            \x20 katalogos list professions --category 1 --kind company\n\
            \x20 katalogos list tags --format csv"
    )]
    List(ListArgs),

    /// Resolve a profession slug to its leaf records.
    #[command(
        about = "Resolve a profession slug",
        after_help = "EXAMPLES:\n\
            \x20 katalogos resolve ekfonites\n\
            \x20 katalogos resolve kommotiria --format json"
    )]
    Resolve(ResolveArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 katalogos completions bash > ~/.local/share/bash-completion/completions/katalogos\n\
            \x20 katalogos completions zsh  > ~/.zfunc/_katalogos\n\
            \x20 katalogos completions fish > ~/.config/fish/completions/katalogos.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Katalogos configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 katalogos config list\n\
            \x20 katalogos config path"
    )]
    Config(ConfigCommands),
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `katalogos check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Snapshot directory.  When omitted, the directory is resolved from
    /// `$KATALOGOS_DATA_DIR`, `./data`, `<exe>/data`, `../data`, falling
    /// back to the bundled snapshot.
    #[arg(
        short = 'd',
        long = "data-dir",
        value_name = "DIR",
        help = "Snapshot directory (default: auto-resolved)"
    )]
    pub data_dir: Option<PathBuf>,

    /// Treat advisory findings (shared slugs, sibling ordering) as fatal.
    #[arg(long = "strict", help = "Advisory findings also fail the check")]
    pub strict: bool,

    /// Findings report format.
    #[arg(
        long = "report-format",
        value_enum,
        default_value = "table",
        help = "Findings report format"
    )]
    pub report_format: ReportFormat,
}

/// Output format for the `check` findings report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable summary plus one block per finding.
    Table,
    /// One finding per line, grep-friendly.
    Line,
    /// JSON document with every finding.
    Json,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `katalogos list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Which entries to list.
    #[arg(value_enum, help = "What to list")]
    pub target: ListTarget,

    /// Snapshot directory (same resolution as `check`).
    #[arg(short = 'd', long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Region id, required for areas and postal codes.
    #[arg(long = "region", value_name = "ID", help = "Scope to a region")]
    pub region: Option<String>,

    /// Area id (within `--region`), required for postal codes.
    #[arg(long = "area", value_name = "ID", help = "Scope to an area")]
    pub area: Option<String>,

    /// Category id, required for professions.
    #[arg(long = "category", value_name = "ID", help = "Scope to a category")]
    pub category: Option<String>,

    /// Keep only professions of this provider kind.
    #[arg(long = "kind", value_enum, help = "Filter professions by kind")]
    pub kind: Option<KindFilter>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// The listable entry sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListTarget {
    Regions,
    Areas,
    PostalCodes,
    Categories,
    Professions,
    Tags,
}

/// Provider-kind filter for `list professions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum KindFilter {
    Freelancer,
    Company,
}

impl std::fmt::Display for KindFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Freelancer => write!(f, "freelancer"),
            Self::Company => write!(f, "company"),
        }
    }
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── resolve ───────────────────────────────────────────────────────────────────

/// Arguments for `katalogos resolve`.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// The profession slug to resolve.
    #[arg(value_name = "SLUG", help = "Profession slug")]
    pub slug: String,

    /// Snapshot directory (same resolution as `check`).
    #[arg(short = 'd', long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `katalogos completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `katalogos config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn kind_filter_display() {
        assert_eq!(KindFilter::Freelancer.to_string(), "freelancer");
        assert_eq!(KindFilter::Company.to_string(), "company");
    }

    #[test]
    fn parse_check_command() {
        let cli = Cli::parse_from(["katalogos", "check", "--strict", "--report-format", "json"]);
        match cli.command {
            Commands::Check(args) => {
                assert!(args.strict);
                assert_eq!(args.report_format, ReportFormat::Json);
                assert!(args.data_dir.is_none());
            }
            other => panic!("expected Check, got {other:?}"),
        }
    }

    #[test]
    fn parse_list_professions_with_filters() {
        let cli = Cli::parse_from([
            "katalogos",
            "list",
            "professions",
            "--category",
            "1",
            "--kind",
            "company",
        ]);
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.target, ListTarget::Professions);
                assert_eq!(args.category.as_deref(), Some("1"));
                assert_eq!(args.kind, Some(KindFilter::Company));
            }
            other => panic!("expected List, got {other:?}"),
        }
    }

    #[test]
    fn parse_resolve_command() {
        let cli = Cli::parse_from(["katalogos", "resolve", "ekfonites"]);
        match cli.command {
            Commands::Resolve(args) => assert_eq!(args.slug, "ekfonites"),
            other => panic!("expected Resolve, got {other:?}"),
        }
    }

    #[test]
    fn postal_codes_target_uses_kebab_case() {
        let cli = Cli::parse_from([
            "katalogos",
            "list",
            "postal-codes",
            "--region",
            "1",
            "--area",
            "2",
        ]);
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["katalogos", "--quiet", "--verbose", "check"]);
        assert!(result.is_err());
    }
}
