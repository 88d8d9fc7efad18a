use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A single dish or drink on a seller's menu. Immutable after catalog load.
///
/// Prices are whole rupiah (the smallest unit in circulation); tags are
/// lower-cased at construction so query matching never touches case again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: i32,
    pub rating: f64,
    pub prep_minutes: u32,
    pub category: String,
    pub tags: HashSet<String>,
    #[serde(default)]
    pub best_seller: bool,
    #[serde(default)]
    pub recommended: bool,
}

impl MenuItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: i32,
        rating: f64,
        prep_minutes: u32,
        category: impl Into<String>,
        tags: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            rating,
            prep_minutes,
            category: category.into(),
            tags: tags.iter().map(|t| t.to_lowercase()).collect(),
            best_seller: false,
            recommended: false,
        }
    }

    /// Marks this item as a seller best-seller (feeds the recommendation
    /// scoring weights).
    pub fn best_seller(mut self) -> Self {
        self.best_seller = true;
        self
    }

    /// Marks this item as the store's own recommendation.
    pub fn recommended(mut self) -> Self {
        self.recommended = true;
        self
    }

    /// OR semantics: true when at least one query tag appears in the item's
    /// tag set.
    pub fn has_any_tag(&self, query_tags: &HashSet<String>) -> bool {
        query_tags.iter().any(|t| self.tags.contains(t))
    }

    /// AND semantics: true only when every query tag appears in the item's
    /// tag set. The stricter opt-in matching mode.
    pub fn has_all_tags(&self, query_tags: &HashSet<String>) -> bool {
        query_tags.iter().all(|t| self.tags.contains(t))
    }
}
