//! Implementation of the `katalogos check` command.
//!
//! Loads a snapshot, runs the dataset audit, renders the findings report,
//! and maps the verdict to the exit code: 0 when nothing blocks the
//! snapshot, 5 otherwise.  `--strict` escalates advisory findings.

use tracing::{info, instrument};

use katalogos_adapters::InMemoryCatalog;
use katalogos_core::application::{AuditPolicy, AuditRun, AuditService};
use katalogos_core::domain::Severity;

use crate::{
    cli::{CheckArgs, GlobalArgs, ReportFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    args: CheckArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // CLI flag wins over the config file; the resolution chain handles the
    // rest when both are absent.
    let data_dir = args.data_dir.or(config.data.dir);

    let resolved = katalogos_adapters::resolve(data_dir.as_deref()).map_err(CliError::Core)?;
    let source = InMemoryCatalog::with_dataset(resolved.dataset, resolved.origin);

    let service = AuditService::new(Box::new(source));
    let run = service.run().map_err(CliError::Core)?;

    let policy = AuditPolicy {
        strict: args.strict || config.audit.strict,
    };
    let verdict = AuditService::evaluate(&run.report, policy);

    match args.report_format {
        ReportFormat::Table => render_table(&run, &output)?,
        ReportFormat::Line => render_lines(&run),
        ReportFormat::Json => render_json(&run)?,
    }

    info!(
        fatal = verdict.fatal,
        advisory = verdict.advisory,
        strict = policy.strict,
        "check evaluated"
    );

    if verdict.is_blocking() {
        return Err(CliError::DatasetInvalid {
            fatal: verdict.fatal,
            advisory: verdict.advisory,
        });
    }

    // The machine formats own stdout; only the table report gets the human
    // summary line.
    if args.report_format == ReportFormat::Table {
        if run.report.is_clean() {
            output.success("All invariants hold")?;
        } else {
            output.success(&format!(
                "No blocking findings ({} advisory)",
                run.report.advisory_count()
            ))?;
        }
    }
    Ok(())
}

// ── renderers ─────────────────────────────────────────────────────────────────

fn render_table(run: &AuditRun, output: &OutputManager) -> CliResult<()> {
    output.header(&format!("Dataset check — {}", run.source))?;
    output.print(&format!(
        "  {} regions, {} areas, {} postal codes / {} categories, {} professions / {} tags",
        run.summary.regions,
        run.summary.areas,
        run.summary.postal_codes,
        run.summary.categories,
        run.summary.professions,
        run.summary.tags,
    ))?;
    if let Some(stamp) = run.stamps.locations {
        output.print(&format!("  locations generated at {}", stamp.to_rfc3339()))?;
    }
    output.print("")?;

    for finding in run.report.findings() {
        match finding.severity() {
            Severity::Fatal => output.error(&finding.to_string())?,
            Severity::Advisory => output.warning(&finding.to_string())?,
        }
    }
    if !run.report.is_empty() {
        output.print("")?;
    }
    Ok(())
}

/// One finding per line on stdout, grep-friendly.  Bypasses the
/// `OutputManager` because this format must stay parseable in pipes.
fn render_lines(run: &AuditRun) {
    for finding in run.report.findings() {
        println!("{finding}");
    }
}

/// JSON document on stdout.  Also bypasses the `OutputManager`.
fn render_json(run: &AuditRun) -> CliResult<()> {
    let document = serde_json::json!({
        "source": run.source,
        "summary": {
            "regions": run.summary.regions,
            "areas": run.summary.areas,
            "postal_codes": run.summary.postal_codes,
            "categories": run.summary.categories,
            "professions": run.summary.professions,
            "tags": run.summary.tags,
        },
        "generated_at": {
            "locations": run.stamps.locations.map(|s| s.to_rfc3339()),
            "taxonomy": run.stamps.taxonomy.map(|s| s.to_rfc3339()),
            "tags": run.stamps.tags.map(|s| s.to_rfc3339()),
        },
        "fatal": run.report.fatal_count(),
        "advisory": run.report.advisory_count(),
        "findings": run.report.findings(),
    });
    let rendered = serde_json::to_string_pretty(&document).map_err(|e| {
        CliError::Core(katalogos_core::error::KatalogosError::Internal {
            message: format!("failed to serialise report: {e}"),
        })
    })?;
    println!("{rendered}");
    Ok(())
}
