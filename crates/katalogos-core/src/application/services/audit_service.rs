//! Audit Service - runs the dataset audit and applies release policy.
//!
//! The domain audit only observes; deciding what blocks a release lives
//! here. The default policy follows the finding classes (duplicate
//! identifiers, format violations and structural mismatches are fatal;
//! shared slugs and ordering are advisory). Strict mode escalates the
//! advisories too.

use tracing::{info, instrument};

use crate::{
    application::ports::DatasetSource,
    domain::{AuditReport, Dataset, DatasetAuditor, DatasetSummary, SnapshotStamps},
    error::KatalogosResult,
};

/// Which findings block publication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuditPolicy {
    /// Treat advisory findings as fatal.
    pub strict: bool,
}

impl AuditPolicy {
    pub const fn strict() -> Self {
        Self { strict: true }
    }
}

/// Outcome of applying a policy to a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub fatal: usize,
    pub advisory: usize,
}

impl Verdict {
    /// `true` when the snapshot must not ship.
    pub const fn is_blocking(&self) -> bool {
        self.fatal > 0
    }
}

/// One completed audit: where the data came from, how big it was, what was
/// found.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditRun {
    pub source: String,
    pub summary: DatasetSummary,
    pub stamps: SnapshotStamps,
    pub report: AuditReport,
}

/// Service that loads a snapshot through the port and audits it.
pub struct AuditService {
    source: Box<dyn DatasetSource>,
}

impl AuditService {
    pub fn new(source: Box<dyn DatasetSource>) -> Self {
        Self { source }
    }

    /// Load and audit.
    #[instrument(skip_all)]
    pub fn run(&self) -> KatalogosResult<AuditRun> {
        let dataset = self.source.load()?;
        let run = Self::audit(&dataset, self.source.describe());
        info!(
            source = %run.source,
            findings = run.report.len(),
            "audit complete"
        );
        Ok(run)
    }

    /// Audit an already-loaded dataset (the pure half of [`run`]).
    pub fn audit(dataset: &Dataset, source: String) -> AuditRun {
        AuditRun {
            source,
            summary: dataset.summary(),
            stamps: dataset.stamps,
            report: DatasetAuditor::audit(dataset),
        }
    }

    /// Apply a policy to a report.
    pub fn evaluate(report: &AuditReport, policy: AuditPolicy) -> Verdict {
        let fatal = report.fatal_count();
        let advisory = report.advisory_count();
        if policy.strict {
            Verdict {
                fatal: fatal + advisory,
                advisory: 0,
            }
        } else {
            Verdict { fatal, advisory }
        }
    }
}
