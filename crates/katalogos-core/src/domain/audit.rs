//! The dataset audit: verifies every table invariant and accumulates a
//! structured report.
//!
//! The audit never fails mid-traversal. Each pass walks its whole table and
//! pushes findings; a malformed node is reported and the scan continues.
//! Severity policy (what blocks a release) is layered on top in the
//! application layer — this module only observes and reports.

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::domain::{
    collation,
    entities::{Area, Category, Dataset, Region, Tag, is_postal_code},
    findings::{AuditReport, Finding, FindingKind, NodePath},
    value_objects::Table,
};

/// Centralized audit entry points.
///
/// All invariant checks live here, not scattered across entities.
pub struct DatasetAuditor;

impl DatasetAuditor {
    /// Audit all three tables and assemble the sorted report.
    #[instrument(skip_all)]
    pub fn audit(dataset: &Dataset) -> AuditReport {
        let mut findings = Self::audit_locations(&dataset.regions);
        findings.extend(Self::audit_taxonomy(&dataset.categories));
        findings.extend(Self::audit_tags(&dataset.tags));

        debug!(count = findings.len(), "audit finished");
        AuditReport::from_findings(findings)
    }

    /// Depth-first pass over the location hierarchy.
    ///
    /// Checks, per sibling list: id uniqueness (scoped to that list only —
    /// the same id on unrelated branches is legal) and collation order.
    /// Checks, per node: declared `child_count` against the actual child
    /// list, and the 5-digit pattern at leaves.
    pub fn audit_locations(regions: &[Region]) -> Vec<Finding> {
        let mut findings = Vec::new();
        let root = NodePath::root();

        check_sibling_ids(
            Table::Locations,
            &root,
            regions.iter().map(|r| r.id.as_str()),
            &mut findings,
        );
        check_sibling_order(
            Table::Locations,
            &root,
            regions.iter().map(|r| r.name.as_str()),
            &mut findings,
        );

        for region in regions {
            let region_path = root.child(&region.id);
            check_child_count(
                Table::Locations,
                &region_path,
                region.child_count,
                region.children.len(),
                &mut findings,
            );

            check_sibling_ids(
                Table::Locations,
                &region_path,
                region.children.iter().map(|a| a.id.as_str()),
                &mut findings,
            );
            check_sibling_order(
                Table::Locations,
                &region_path,
                region.children.iter().map(|a| a.name.as_str()),
                &mut findings,
            );

            for area in &region.children {
                audit_area(&region_path, area, &mut findings);
            }
        }

        findings
    }

    /// Pass over the taxonomy: kind domain per leaf, global id uniqueness
    /// (categories and leaves as separate sets), and the slug multimap.
    pub fn audit_taxonomy(categories: &[Category]) -> Vec<Finding> {
        let mut findings = Vec::new();
        let root = NodePath::root();

        let mut category_ids: BTreeMap<&str, usize> = BTreeMap::new();
        let mut leaf_ids: BTreeMap<&str, usize> = BTreeMap::new();
        let mut slug_to_leaves: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

        for category in categories {
            *category_ids.entry(category.id.as_str()).or_default() += 1;
            let category_path = root.child(&category.id);

            for leaf in &category.children {
                *leaf_ids.entry(leaf.id.as_str()).or_default() += 1;
                slug_to_leaves
                    .entry(leaf.slug.as_str())
                    .or_default()
                    .push(leaf.id.as_str());

                if !leaf.kind.is_known() {
                    findings.push(Finding::new(
                        Table::Taxonomy,
                        category_path.child(&leaf.id),
                        FindingKind::ProviderKindOutOfDomain {
                            value: leaf.kind.as_str().to_owned(),
                        },
                    ));
                }
            }
        }

        for (id, occurrences) in category_ids {
            if occurrences > 1 {
                findings.push(Finding::new(
                    Table::Taxonomy,
                    root.clone(),
                    FindingKind::DuplicateCategoryId {
                        id: id.to_owned(),
                        occurrences,
                    },
                ));
            }
        }
        for (id, occurrences) in leaf_ids {
            if occurrences > 1 {
                findings.push(Finding::new(
                    Table::Taxonomy,
                    root.clone(),
                    FindingKind::DuplicateProfessionId {
                        id: id.to_owned(),
                        occurrences,
                    },
                ));
            }
        }
        for (slug, leaves) in slug_to_leaves {
            if leaves.len() > 1 {
                findings.push(Finding::new(
                    Table::Taxonomy,
                    root.clone(),
                    FindingKind::SharedProfessionSlug {
                        slug: slug.to_owned(),
                        leaf_ids: leaves.iter().map(|id| (*id).to_owned()).collect(),
                    },
                ));
            }
        }

        findings
    }

    /// Pass over the tag table: global id and slug uniqueness.
    pub fn audit_tags(tags: &[Tag]) -> Vec<Finding> {
        let mut findings = Vec::new();
        let root = NodePath::root();

        let mut ids: BTreeMap<&str, usize> = BTreeMap::new();
        let mut slugs: BTreeMap<&str, usize> = BTreeMap::new();
        for tag in tags {
            *ids.entry(tag.id.as_str()).or_default() += 1;
            *slugs.entry(tag.slug.as_str()).or_default() += 1;
        }

        for (id, occurrences) in ids {
            if occurrences > 1 {
                findings.push(Finding::new(
                    Table::Tags,
                    root.clone(),
                    FindingKind::DuplicateTagId {
                        id: id.to_owned(),
                        occurrences,
                    },
                ));
            }
        }
        for (slug, occurrences) in slugs {
            if occurrences > 1 {
                findings.push(Finding::new(
                    Table::Tags,
                    root.clone(),
                    FindingKind::DuplicateTagSlug {
                        slug: slug.to_owned(),
                        occurrences,
                    },
                ));
            }
        }

        findings
    }
}

fn audit_area(region_path: &NodePath, area: &Area, findings: &mut Vec<Finding>) {
    let area_path = region_path.child(&area.id);
    check_child_count(
        Table::Locations,
        &area_path,
        area.child_count,
        area.children.len(),
        findings,
    );

    check_sibling_ids(
        Table::Locations,
        &area_path,
        area.children.iter().map(|p| p.id.as_str()),
        findings,
    );
    check_sibling_order(
        Table::Locations,
        &area_path,
        area.children.iter().map(|p| p.name.as_str()),
        findings,
    );

    for leaf in &area.children {
        if !is_postal_code(&leaf.name) {
            findings.push(Finding::new(
                Table::Locations,
                area_path.child(&leaf.id),
                FindingKind::MalformedPostalCode {
                    name: leaf.name.clone(),
                },
            ));
        }
    }
}

/// A declared count of `None` means the node simply omits the field — only a
/// declared value can disagree with reality.
fn check_child_count(
    table: Table,
    path: &NodePath,
    declared: Option<usize>,
    actual: usize,
    findings: &mut Vec<Finding>,
) {
    if let Some(declared) = declared {
        if declared != actual {
            findings.push(Finding::new(
                table,
                path.clone(),
                FindingKind::ChildCountMismatch { declared, actual },
            ));
        }
    }
}

/// Report each id appearing more than once within *this* sibling list.
/// Uniqueness is never checked across lists.
fn check_sibling_ids<'a>(
    table: Table,
    parent: &NodePath,
    ids: impl Iterator<Item = &'a str>,
    findings: &mut Vec<Finding>,
) {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for id in ids {
        *counts.entry(id).or_default() += 1;
    }
    for (id, occurrences) in counts {
        if occurrences > 1 {
            findings.push(Finding::new(
                table,
                parent.clone(),
                FindingKind::DuplicateSiblingId {
                    id: id.to_owned(),
                    occurrences,
                },
            ));
        }
    }
}

/// Report each adjacent pair of siblings out of Greek-collation order.
fn check_sibling_order<'a>(
    table: Table,
    parent: &NodePath,
    names: impl Iterator<Item = &'a str>,
    findings: &mut Vec<Finding>,
) {
    let mut previous: Option<&str> = None;
    for name in names {
        if let Some(prev) = previous {
            if collation::compare(prev, name) == std::cmp::Ordering::Greater {
                findings.push(Finding::new(
                    table,
                    parent.clone(),
                    FindingKind::SiblingsOutOfOrder {
                        previous: prev.to_owned(),
                        name: name.to_owned(),
                    },
                ));
            }
        }
        previous = Some(name);
    }
}
