//! The location hierarchy: region → area → postal-code leaf.
//!
//! Depth is fixed and known, so each level is its own concrete record type
//! instead of a generic recursive node. `id` values are only unique within
//! their sibling list — resolving an area always goes through its region.

use serde::{Deserialize, Serialize};

/// Top-level geographic entity (a county-level region, or a placeholder
/// bucket such as "Σε όλη την Ελλάδα").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub children: Vec<Area>,
    /// Count declared by the generator; verified against `children.len()`
    /// by the audit, never trusted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_count: Option<usize>,
}

/// Second-level entity (municipality / neighbourhood).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub children: Vec<PostalCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_count: Option<usize>,
}

/// Leaf node. `name` is the 5-digit postal code itself; leaves carry no
/// `children` field at all in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalCode {
    pub id: String,
    pub name: String,
}

impl Region {
    /// Resolve an area by id *within this region's sibling list*.
    pub fn area(&self, id: &str) -> Option<&Area> {
        self.children.iter().find(|a| a.id == id)
    }

    /// A region with no areas is a valid placeholder bucket, not an error.
    pub fn is_placeholder(&self) -> bool {
        self.children.is_empty()
    }
}

impl Area {
    pub fn postal_code(&self, id: &str) -> Option<&PostalCode> {
        self.children.iter().find(|p| p.id == id)
    }
}

impl PostalCode {
    pub fn is_well_formed(&self) -> bool {
        is_postal_code(&self.name)
    }
}

/// Whether `name` is a well-formed Greek postal code (exactly 5 ASCII digits).
pub fn is_postal_code(name: &str) -> bool {
    name.len() == 5 && name.bytes().all(|b| b.is_ascii_digit())
}
