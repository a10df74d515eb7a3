//! The flat tag table: skill / technology / topic labels for auto-complete
//! and multi-select pickers. No hierarchy, no discriminator.

use serde::{Deserialize, Serialize};

/// One tag record. `label` casing is preserved verbatim (mixed Greek, English
/// and technology names). `id` and `slug` are each intended globally unique;
/// the audit enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub slug: String,
    pub label: String,
}
