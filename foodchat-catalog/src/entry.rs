use serde::{Deserialize, Serialize};

use crate::menu::MenuItem;
use crate::seller::{Seller, StoreCategory};

/// Search-result projection pairing a seller snapshot with one of its menu
/// items. Built on demand, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub seller_id: String,
    pub seller_name: String,
    pub seller_category: StoreCategory,
    pub seller_rating: f64,
    pub distance_km: f64,
    pub item: MenuItem,
}

impl CatalogEntry {
    pub fn new(seller: &Seller, item: &MenuItem) -> Self {
        Self {
            seller_id: seller.id.clone(),
            seller_name: seller.name.clone(),
            seller_category: seller.category,
            seller_rating: seller.rating,
            distance_km: seller.distance_km,
            item: item.clone(),
        }
    }
}
