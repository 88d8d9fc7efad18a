use std::collections::HashSet;

use serde::Deserialize;
use uuid::Uuid;

use foodchat_catalog::{Catalog, CatalogEntry};

use crate::models::SpecialOffer;

/// Every bundle needs at least this many distinct entries.
const MIN_BUNDLE_ITEMS: usize = 2;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BundleConfig {
    /// Fixed discount for dynamic bundles, independent of item count.
    pub dynamic_discount_percent: u8,
    /// Dynamic bundles take at most this many of the top search hits.
    pub max_bundle_items: usize,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            dynamic_discount_percent: 15,
            max_bundle_items: 3,
        }
    }
}

/// The static promotions declared at catalog load, looked up by offer id or
/// owning seller.
#[derive(Debug)]
pub struct OfferBook {
    offers: Vec<SpecialOffer>,
}

impl OfferBook {
    pub fn new(offers: Vec<SpecialOffer>) -> Self {
        Self { offers }
    }

    pub fn all(&self) -> &[SpecialOffer] {
        &self.offers
    }

    pub fn by_id(&self, id: &Uuid) -> Option<&SpecialOffer> {
        self.offers.iter().find(|o| o.id == *id)
    }

    pub fn for_seller<'a>(&'a self, seller_id: &'a str) -> impl Iterator<Item = &'a SpecialOffer> {
        self.offers
            .iter()
            .filter(move |o| o.seller_id.as_deref() == Some(seller_id))
    }
}

/// The demo promotions: five same-seller combos over the seeded catalog.
pub fn demo_offers(catalog: &Catalog) -> OfferBook {
    let combos: &[(&str, &str, u8, &[&str])] = &[
        ("Padang Combo", "Nasi Rendang + Nasi Ayam Bakar", 20, &["S001-1", "S001-2"]),
        ("Korean Feast", "Fried Chicken + Tteokbokki", 25, &["S002-2", "S002-1"]),
        ("Burger Combo Deal", "Beef Burger + French Fries", 15, &["S003-1", "S003-4"]),
        ("Hemat Combo", "Nasi Goreng + Soto Ayam", 10, &["S005-1", "S005-4"]),
        ("Refreshing Duo", "Es Teh Manis + Es Kelapa Muda", 15, &["S007-1", "S007-3"]),
    ];

    let offers = combos
        .iter()
        .map(|(title, description, discount, item_ids)| {
            let entries: Vec<CatalogEntry> = item_ids
                .iter()
                .map(|id| entry_by_item_id(catalog, id))
                .collect();
            let seller_id = entries[0].seller_id.clone();
            SpecialOffer::new(Some(seller_id), *title, *description, entries, *discount)
        })
        .collect();
    OfferBook::new(offers)
}

fn entry_by_item_id(catalog: &Catalog, item_id: &str) -> CatalogEntry {
    catalog
        .entries()
        .find(|e| e.item.id == item_id)
        .expect("demo offer references a seeded item")
}

/// Synthesizes a themed bundle from the top search hits. `None` when fewer
/// than two query tags or fewer than two distinct (seller, item) entries are
/// available — callers fall back to the plain recommendation list.
pub fn dynamic_bundle(
    tags: &HashSet<String>,
    results: &[CatalogEntry],
    config: &BundleConfig,
) -> Option<SpecialOffer> {
    if tags.len() < MIN_BUNDLE_ITEMS {
        return None;
    }

    let mut seen = HashSet::new();
    let picks: Vec<CatalogEntry> = results
        .iter()
        .filter(|e| seen.insert((e.seller_id.clone(), e.item.id.clone())))
        .take(config.max_bundle_items)
        .cloned()
        .collect();
    if picks.len() < MIN_BUNDLE_ITEMS {
        return None;
    }

    let theme = dominant_tag(tags, &picks)?;
    let description = picks
        .iter()
        .map(|e| e.item.name.as_str())
        .collect::<Vec<_>>()
        .join(" + ");

    let mut offer = SpecialOffer::new(
        None,
        theme_label(&theme),
        description,
        picks,
        config.dynamic_discount_percent,
    );
    offer.metadata = serde_json::json!({ "dynamic": true, "theme_tag": theme });
    tracing::debug!(theme = %theme, items = offer.items.len(), "dynamic bundle synthesized");
    Some(offer)
}

/// The query tag matching the most bundled items; alphabetical order breaks
/// ties so the label is deterministic.
fn dominant_tag(tags: &HashSet<String>, picks: &[CatalogEntry]) -> Option<String> {
    let mut sorted: Vec<&String> = tags.iter().collect();
    sorted.sort();
    sorted
        .into_iter()
        .map(|tag| {
            let hits = picks.iter().filter(|e| e.item.tags.contains(tag)).count();
            (tag, hits)
        })
        .filter(|(_, hits)| *hits > 0)
        .max_by_key(|(_, hits)| *hits)
        .map(|(tag, _)| tag.clone())
}

fn theme_label(tag: &str) -> String {
    match tag {
        "spicy" => "Spicy Adventure".to_string(),
        "sweet" => "Sweet Escape".to_string(),
        "healthy" => "Fresh & Healthy Picks".to_string(),
        "cheap" => "Budget Bites".to_string(),
        "korean" => "Korean Feast".to_string(),
        "indonesian" => "Nusantara Favorites".to_string(),
        _ => {
            let mut chars = tag.chars();
            match chars.next() {
                Some(first) => format!("{}{} Special", first.to_uppercase(), chars.as_str()),
                None => "Mixed Special".to_string(),
            }
        }
    }
}
