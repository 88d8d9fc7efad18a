use std::collections::HashSet;
use std::sync::Arc;

use serde::Deserialize;

use foodchat_catalog::{Catalog, CatalogEntry};

use crate::query::ParsedQuery;

/// Result ordering, selected by caller intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Weight-table score, descending.
    #[default]
    Relevance,
    /// Item rating, descending.
    Rating,
    /// Preparation time, ascending.
    Speed,
}

/// How query tags must relate to an item's tag set. `Any` is the production
/// default; `All` is the stricter opt-in mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagMatch {
    #[default]
    Any,
    All,
}

/// Weight table for the shared ranking primitive. Plain search scores tag
/// overlap only; the recommendation path layers in seller signals.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub tag_match: f64,
    pub best_seller_bonus: f64,
    pub recommended_bonus: f64,
    pub seller_rating_weight: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            tag_match: 10.0,
            best_seller_bonus: 0.0,
            recommended_bonus: 0.0,
            seller_rating_weight: 0.0,
        }
    }
}

impl ScoreWeights {
    /// Defaults for the recommendation path.
    pub fn recommendation() -> Self {
        Self {
            tag_match: 10.0,
            best_seller_bonus: 15.0,
            recommended_bonus: 10.0,
            seller_rating_weight: 2.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub result_limit: usize,
    pub recommend_weights: ScoreWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            result_limit: 8,
            recommend_weights: ScoreWeights::recommendation(),
        }
    }
}

/// Filters and ranks catalog entries against a parsed query.
pub struct SearchEngine {
    catalog: Arc<Catalog>,
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(catalog: Arc<Catalog>, config: SearchConfig) -> Self {
        Self { catalog, config }
    }

    /// OR tag matching, inclusive price ceiling, capped result list. An
    /// empty tag set matches everything; zero hits returns an empty list,
    /// never an error.
    pub fn search(&self, query: &ParsedQuery, sort: SortMode) -> Vec<CatalogEntry> {
        self.search_with(query, sort, TagMatch::Any)
    }

    pub fn search_with(
        &self,
        query: &ParsedQuery,
        sort: SortMode,
        tag_match: TagMatch,
    ) -> Vec<CatalogEntry> {
        let mut results = self.filtered(query, tag_match);
        match sort {
            SortMode::Relevance => {
                rank(&mut results, &query.tags, &ScoreWeights::default());
            }
            SortMode::Rating => {
                results.sort_by(|a, b| b.item.rating.total_cmp(&a.item.rating));
            }
            SortMode::Speed => {
                results.sort_by_key(|e| e.item.prep_minutes);
            }
        }
        results.truncate(self.config.result_limit);
        tracing::debug!(
            tags = query.tags.len(),
            max_price = ?query.max_price,
            hits = results.len(),
            "search complete"
        );
        results
    }

    /// Recommendation path: same filter, richer scoring — the configured
    /// weights add best-seller, store-recommended and seller-rating bonuses
    /// on top of the tag-match score.
    pub fn recommend(&self, query: &ParsedQuery) -> Vec<CatalogEntry> {
        let mut results = self.filtered(query, TagMatch::Any);
        rank(&mut results, &query.tags, &self.config.recommend_weights);
        results.truncate(self.config.result_limit);
        results
    }

    fn filtered(&self, query: &ParsedQuery, tag_match: TagMatch) -> Vec<CatalogEntry> {
        self.catalog
            .entries()
            .filter(|e| {
                query.tags.is_empty()
                    || match tag_match {
                        TagMatch::Any => e.item.has_any_tag(&query.tags),
                        TagMatch::All => e.item.has_all_tags(&query.tags),
                    }
            })
            .filter(|e| query.max_price.map_or(true, |max| e.item.price <= max))
            .collect()
    }
}

/// The one ranking primitive both call sites share: descending weight-table
/// score, stable on catalog order for ties.
fn rank(entries: &mut [CatalogEntry], tags: &HashSet<String>, weights: &ScoreWeights) {
    entries.sort_by(|a, b| {
        score(b, tags, weights).total_cmp(&score(a, tags, weights))
    });
}

fn score(entry: &CatalogEntry, tags: &HashSet<String>, weights: &ScoreWeights) -> f64 {
    let overlap = entry.item.tags.intersection(tags).count() as f64;
    let mut score = weights.tag_match * overlap;
    if entry.item.best_seller {
        score += weights.best_seller_bonus;
    }
    if entry.item.recommended {
        score += weights.recommended_bonus;
    }
    score + weights.seller_rating_weight * entry.seller_rating
}
