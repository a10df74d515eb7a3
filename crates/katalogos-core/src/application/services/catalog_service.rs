//! Catalog Service - the read-only lookup surface over a loaded dataset.
//!
//! Every operation is pure, synchronous, and total: absence of a branch is a
//! normal outcome signalled with `Option`/empty collections, never an error.
//! Tag lookups go through indexes built once at construction.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::{
    application::ports::DatasetSource,
    domain::{Area, Category, Dataset, PostalCode, Profession, ProviderKind, Region, Tag},
    error::KatalogosResult,
};

/// One result of resolving a profession slug: the leaf plus its parent
/// category (slugs are not unique, so resolution returns a list).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugMatch<'a> {
    pub category: &'a Category,
    pub profession: &'a Profession,
}

/// Read-only catalog over one immutable dataset snapshot.
pub struct CatalogService {
    dataset: Dataset,
    tags_by_id: HashMap<String, usize>,
    tags_by_slug: HashMap<String, usize>,
}

impl CatalogService {
    /// Index a dataset. On duplicate tag ids/slugs the first record wins —
    /// duplicates are the audit's business, not the lookup surface's.
    pub fn new(dataset: Dataset) -> Self {
        let mut tags_by_id = HashMap::with_capacity(dataset.tags.len());
        let mut tags_by_slug = HashMap::with_capacity(dataset.tags.len());
        for (index, tag) in dataset.tags.iter().enumerate() {
            tags_by_id.entry(tag.id.clone()).or_insert(index);
            tags_by_slug.entry(tag.slug.clone()).or_insert(index);
        }

        Self {
            dataset,
            tags_by_id,
            tags_by_slug,
        }
    }

    /// Load from a source and index.
    #[instrument(skip_all, fields(source = %source.describe()))]
    pub fn from_source(source: &dyn DatasetSource) -> KatalogosResult<Self> {
        let dataset = source.load()?;
        let summary = dataset.summary();
        debug!(
            regions = summary.regions,
            categories = summary.categories,
            tags = summary.tags,
            "dataset loaded"
        );
        Ok(Self::new(dataset))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    // ── Locations ─────────────────────────────────────────────────────────

    pub fn regions(&self) -> &[Region] {
        &self.dataset.regions
    }

    pub fn region(&self, id: &str) -> Option<&Region> {
        self.dataset.regions.iter().find(|r| r.id == id)
    }

    /// Areas of a region. `None` means the region id is unknown; a known
    /// region with no areas (a placeholder bucket) yields `Some(&[])`.
    pub fn areas_of(&self, region_id: &str) -> Option<&[Area]> {
        self.region(region_id).map(|r| r.children.as_slice())
    }

    /// Postal codes of an area. The area id is resolved *within* the region
    /// because area ids are only unique among their siblings.
    pub fn postal_codes_of(&self, region_id: &str, area_id: &str) -> Option<&[PostalCode]> {
        self.region(region_id)?
            .area(area_id)
            .map(|a| a.children.as_slice())
    }

    // ── Taxonomy ──────────────────────────────────────────────────────────

    pub fn categories(&self) -> &[Category] {
        &self.dataset.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.dataset.categories.iter().find(|c| c.id == id)
    }

    pub fn professions_of(&self, category_id: &str) -> Option<&[Profession]> {
        self.category(category_id).map(|c| c.children.as_slice())
    }

    /// Leaves of a category filtered by provider kind.
    pub fn professions_by_kind(
        &self,
        category_id: &str,
        kind: &ProviderKind,
    ) -> Option<Vec<&Profession>> {
        self.category(category_id)
            .map(|c| c.of_kind(kind).collect())
    }

    /// All leaves sharing `slug`, across every category.
    ///
    /// Slugs are intended unique but real snapshots contain duplicates, so
    /// this returns every match; callers disambiguate by leaf id. Nothing is
    /// merged or dropped here.
    pub fn resolve_profession_slug(&self, slug: &str) -> Vec<SlugMatch<'_>> {
        self.dataset
            .categories
            .iter()
            .flat_map(|category| {
                category
                    .children
                    .iter()
                    .filter(|p| p.slug == slug)
                    .map(move |profession| SlugMatch {
                        category,
                        profession,
                    })
            })
            .collect()
    }

    // ── Tags ──────────────────────────────────────────────────────────────

    pub fn tags(&self) -> &[Tag] {
        &self.dataset.tags
    }

    pub fn tag_by_id(&self, id: &str) -> Option<&Tag> {
        self.tags_by_id.get(id).map(|&i| &self.dataset.tags[i])
    }

    pub fn tag_by_slug(&self, slug: &str) -> Option<&Tag> {
        self.tags_by_slug.get(slug).map(|&i| &self.dataset.tags[i])
    }
}
