//! Audit findings: the structured report vocabulary.
//!
//! Findings are *values*, not errors. The audit accumulates them and always
//! finishes its traversal — a malformed record must never abort the scan of
//! the rest of a table. Whether a finding blocks a release is a policy
//! question answered one layer up (see `application::services::audit_service`).

use std::fmt;

use serde::{Serialize, Serializer};

use crate::domain::value_objects::Table;

// ── Severity & class ──────────────────────────────────────────────────────────

/// Default severity of a finding class. `Fatal` blocks publication of the
/// snapshot; `Advisory` is reported but does not fail the build by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Advisory,
    Fatal,
}

impl Severity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Advisory => "advisory",
            Self::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The invariant family a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingClass {
    /// Declared `child_count` disagrees with the actual child list.
    StructuralMismatch,
    /// A value falls outside its closed format or enumeration.
    FormatViolation,
    /// An identifier that must be unique (in its scope) is not.
    DuplicateIdentifier,
    /// More than one taxonomy leaf shares a slug.
    DuplicateSlug,
    /// Siblings are not in the claimed collation order.
    OrderingAdvisory,
}

impl FindingClass {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StructuralMismatch => "structural-mismatch",
            Self::FormatViolation => "format-violation",
            Self::DuplicateIdentifier => "duplicate-identifier",
            Self::DuplicateSlug => "duplicate-slug",
            Self::OrderingAdvisory => "ordering-advisory",
        }
    }

    /// Default severity, before any policy escalation.
    pub const fn default_severity(&self) -> Severity {
        match self {
            Self::StructuralMismatch | Self::FormatViolation | Self::DuplicateIdentifier => {
                Severity::Fatal
            }
            Self::DuplicateSlug | Self::OrderingAdvisory => Severity::Advisory,
        }
    }
}

impl fmt::Display for FindingClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Node path ─────────────────────────────────────────────────────────────────

/// Chain of ancestor ids from the table root to the node a finding is about.
///
/// An empty path means the finding concerns the table as a whole (global
/// uniqueness checks). Displayed as `a/b/c`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NodePath(Vec<String>);

impl NodePath {
    pub fn root() -> Self {
        Self::default()
    }

    /// A new path one segment deeper. Paths are cheap to clone; sibling
    /// traversals share the parent and extend per child.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("<root>")
        } else {
            f.write_str(&self.0.join("/"))
        }
    }
}

impl Serialize for NodePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ── Finding kinds ─────────────────────────────────────────────────────────────

/// One concrete violation, carrying the conflicting values.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FindingKind {
    /// Non-leaf node declares a `child_count` different from its child list.
    ChildCountMismatch { declared: usize, actual: usize },
    /// A postal-code leaf name is not exactly 5 ASCII digits.
    MalformedPostalCode { name: String },
    /// A taxonomy leaf `type` is outside {freelancer, company}.
    ProviderKindOutOfDomain { value: String },
    /// An id appears more than once *within one sibling list*.
    DuplicateSiblingId { id: String, occurrences: usize },
    /// A category id appears more than once across the taxonomy.
    DuplicateCategoryId { id: String, occurrences: usize },
    /// A leaf id appears more than once across all categories.
    DuplicateProfessionId { id: String, occurrences: usize },
    /// A tag id appears more than once across the tag table.
    DuplicateTagId { id: String, occurrences: usize },
    /// A tag slug appears more than once across the tag table.
    DuplicateTagSlug { slug: String, occurrences: usize },
    /// Distinct taxonomy leaves share one slug; every colliding leaf id is
    /// named so routing layers can decide how to disambiguate.
    SharedProfessionSlug { slug: String, leaf_ids: Vec<String> },
    /// Adjacent siblings out of collation order; `name` sorts before
    /// `previous` but appears after it.
    SiblingsOutOfOrder { previous: String, name: String },
}

impl FindingKind {
    pub const fn class(&self) -> FindingClass {
        match self {
            Self::ChildCountMismatch { .. } => FindingClass::StructuralMismatch,
            Self::MalformedPostalCode { .. } | Self::ProviderKindOutOfDomain { .. } => {
                FindingClass::FormatViolation
            }
            Self::DuplicateSiblingId { .. }
            | Self::DuplicateCategoryId { .. }
            | Self::DuplicateProfessionId { .. }
            | Self::DuplicateTagId { .. }
            | Self::DuplicateTagSlug { .. } => FindingClass::DuplicateIdentifier,
            Self::SharedProfessionSlug { .. } => FindingClass::DuplicateSlug,
            Self::SiblingsOutOfOrder { .. } => FindingClass::OrderingAdvisory,
        }
    }

    pub const fn severity(&self) -> Severity {
        self.class().default_severity()
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChildCountMismatch { declared, actual } => write!(
                f,
                "declared child_count {declared} but found {actual} children"
            ),
            Self::MalformedPostalCode { name } => {
                write!(f, "postal code '{name}' is not a 5-digit numeric string")
            }
            Self::ProviderKindOutOfDomain { value } => write!(
                f,
                "provider kind '{value}' is outside the closed set (freelancer, company)"
            ),
            Self::DuplicateSiblingId { id, occurrences } => {
                write!(f, "id '{id}' appears {occurrences} times in one sibling list")
            }
            Self::DuplicateCategoryId { id, occurrences } => {
                write!(f, "category id '{id}' appears {occurrences} times")
            }
            Self::DuplicateProfessionId { id, occurrences } => {
                write!(f, "profession id '{id}' appears {occurrences} times")
            }
            Self::DuplicateTagId { id, occurrences } => {
                write!(f, "tag id '{id}' appears {occurrences} times")
            }
            Self::DuplicateTagSlug { slug, occurrences } => {
                write!(f, "tag slug '{slug}' appears {occurrences} times")
            }
            Self::SharedProfessionSlug { slug, leaf_ids } => write!(
                f,
                "slug '{slug}' is shared by leaves [{}]",
                leaf_ids.join(", ")
            ),
            Self::SiblingsOutOfOrder { previous, name } => {
                write!(f, "sibling '{name}' sorts before '{previous}' but appears after it")
            }
        }
    }
}

// ── Finding & report ──────────────────────────────────────────────────────────

/// One reported audit result.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Finding {
    pub table: Table,
    pub path: NodePath,
    #[serde(flatten)]
    pub kind: FindingKind,
}

impl Finding {
    pub fn new(table: Table, path: NodePath, kind: FindingKind) -> Self {
        Self { table, path, kind }
    }

    pub const fn class(&self) -> FindingClass {
        self.kind.class()
    }

    pub const fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {}: {}",
            self.severity(),
            self.table,
            self.path,
            self.kind
        )
    }
}

/// The full outcome of one audit run.
///
/// Findings are held under a documented stable order — table, then node
/// path, then kind — so two runs over the same data produce identical
/// reports.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AuditReport {
    findings: Vec<Finding>,
}

impl AuditReport {
    pub fn from_findings(mut findings: Vec<Finding>) -> Self {
        findings.sort();
        Self { findings }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn fatal_count(&self) -> usize {
        self.of_severity(Severity::Fatal).count()
    }

    pub fn advisory_count(&self) -> usize {
        self.of_severity(Severity::Advisory).count()
    }

    pub fn of_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(move |f| f.severity() == severity)
    }

    pub fn of_class(&self, class: FindingClass) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.class() == class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(table: Table, path: &[&str], kind: FindingKind) -> Finding {
        let mut node_path = NodePath::root();
        for segment in path {
            node_path = node_path.child(*segment);
        }
        Finding::new(table, node_path, kind)
    }

    #[test]
    fn class_to_severity_mapping() {
        assert_eq!(
            FindingClass::StructuralMismatch.default_severity(),
            Severity::Fatal
        );
        assert_eq!(
            FindingClass::FormatViolation.default_severity(),
            Severity::Fatal
        );
        assert_eq!(
            FindingClass::DuplicateIdentifier.default_severity(),
            Severity::Fatal
        );
        assert_eq!(
            FindingClass::DuplicateSlug.default_severity(),
            Severity::Advisory
        );
        assert_eq!(
            FindingClass::OrderingAdvisory.default_severity(),
            Severity::Advisory
        );
    }

    #[test]
    fn node_path_display() {
        assert_eq!(NodePath::root().to_string(), "<root>");
        assert_eq!(NodePath::root().child("1").child("4").to_string(), "1/4");
    }

    #[test]
    fn report_sorts_by_table_then_path() {
        let tag_dup = finding(
            Table::Tags,
            &[],
            FindingKind::DuplicateTagSlug {
                slug: "python".into(),
                occurrences: 2,
            },
        );
        let loc_mismatch = finding(
            Table::Locations,
            &["1", "4"],
            FindingKind::ChildCountMismatch {
                declared: 5,
                actual: 4,
            },
        );
        let report = AuditReport::from_findings(vec![tag_dup.clone(), loc_mismatch.clone()]);
        assert_eq!(report.findings(), &[loc_mismatch, tag_dup]);
    }

    #[test]
    fn report_order_is_stable_across_input_permutations() {
        let a = finding(
            Table::Locations,
            &["1"],
            FindingKind::SiblingsOutOfOrder {
                previous: "Βόλος".into(),
                name: "Αθήνα".into(),
            },
        );
        let b = finding(
            Table::Locations,
            &["1", "2"],
            FindingKind::MalformedPostalCode {
                name: "ATH01".into(),
            },
        );
        let forward = AuditReport::from_findings(vec![a.clone(), b.clone()]);
        let backward = AuditReport::from_findings(vec![b, a]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn finding_display_names_table_path_and_detail() {
        let f = finding(
            Table::Locations,
            &["1", "4"],
            FindingKind::ChildCountMismatch {
                declared: 5,
                actual: 4,
            },
        );
        let line = f.to_string();
        assert!(line.contains("[fatal]"));
        assert!(line.contains("locations"));
        assert!(line.contains("1/4"));
        assert!(line.contains("declared child_count 5"));
    }

    #[test]
    fn report_serializes_to_json() {
        let report = AuditReport::from_findings(vec![finding(
            Table::Tags,
            &[],
            FindingKind::DuplicateTagId {
                id: "7".into(),
                occurrences: 2,
            },
        )]);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"duplicate_tag_id\""));
        assert!(json.contains("\"tags\""));
    }
}
