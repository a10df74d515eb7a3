//! The professional-services taxonomy: category → profession leaf.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ProviderKind;

/// A high-level service category ("Καλλιτεχνικά", "Ομορφιά", …).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub label: String,
    pub slug: String,
    pub plural: String,
    pub description: String,
    /// Identifier into the external icon set used by the consuming UI.
    pub icon: String,
    pub children: Vec<Profession>,
}

/// One hireable profession or company type.
///
/// `description` may legitimately be empty. `slug` is *intended* unique but
/// real snapshots contain duplicates — routing must disambiguate by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profession {
    pub id: String,
    pub label: String,
    pub slug: String,
    pub plural: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ProviderKind,
}

impl Category {
    pub fn profession(&self, id: &str) -> Option<&Profession> {
        self.children.iter().find(|p| p.id == id)
    }

    /// Leaves of this category with the given provider kind.
    pub fn of_kind(&self, kind: &ProviderKind) -> impl Iterator<Item = &Profession> {
        let kind = kind.clone();
        self.children.iter().filter(move |p| p.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Category {
        serde_json::from_str(
            r#"{
                "id": "c1",
                "label": "Καλλιτεχνικά",
                "slug": "kallitexnika",
                "plural": "Καλλιτεχνικά",
                "description": "Δημιουργικές υπηρεσίες",
                "icon": "palette",
                "children": [
                    {
                        "id": "p1",
                        "label": "Εκφωνητής",
                        "slug": "ekfonites",
                        "plural": "Εκφωνητές",
                        "description": "",
                        "type": "freelancer"
                    },
                    {
                        "id": "p2",
                        "label": "Κομμωτήρια",
                        "slug": "kommotiria",
                        "plural": "Κομμωτήρια",
                        "description": "Επαγγελματικά κομμωτήρια",
                        "type": "company"
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn wire_field_type_maps_to_kind() {
        let category = sample();
        assert_eq!(category.children[0].kind, ProviderKind::Freelancer);
        assert_eq!(category.children[1].kind, ProviderKind::Company);
    }

    #[test]
    fn empty_description_is_valid() {
        let category = sample();
        assert_eq!(category.children[0].description, "");
    }

    #[test]
    fn out_of_domain_kind_still_loads() {
        let json = r#"{
            "id": "p9", "label": "X", "slug": "x", "plural": "X",
            "description": "", "type": "agency"
        }"#;
        let leaf: Profession = serde_json::from_str(json).unwrap();
        assert_eq!(leaf.kind, ProviderKind::Other("agency".into()));
    }

    #[test]
    fn of_kind_filters() {
        let category = sample();
        let freelancers: Vec<_> = category.of_kind(&ProviderKind::Freelancer).collect();
        assert_eq!(freelancers.len(), 1);
        assert_eq!(freelancers[0].id, "p1");
    }
}
