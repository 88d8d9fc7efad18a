use serde::{Deserialize, Serialize};
use uuid::Uuid;

use foodchat_catalog::CatalogEntry;

/// A discounted grouping of catalog entries, either pre-declared by a seller
/// or synthesized from search results.
///
/// Price math is integer-only and rounds down, so
/// `offer_price <= original_price` holds for every constructible offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialOffer {
    pub id: Uuid,
    /// None for cross-seller dynamic bundles.
    pub seller_id: Option<String>,
    pub title: String,
    pub description: String,
    pub items: Vec<CatalogEntry>,
    pub discount_percent: u8,
    pub original_price: i32,
    pub offer_price: i32,
    pub metadata: serde_json::Value,
}

impl SpecialOffer {
    pub fn new(
        seller_id: Option<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        items: Vec<CatalogEntry>,
        discount_percent: u8,
    ) -> Self {
        let discount_percent = discount_percent.min(100);
        let original_price: i32 = items.iter().map(|e| e.item.price).sum();
        let offer_price =
            (i64::from(original_price) * i64::from(100 - discount_percent) / 100) as i32;
        Self {
            id: Uuid::new_v4(),
            seller_id,
            title: title.into(),
            description: description.into(),
            items,
            discount_percent,
            original_price,
            offer_price,
            metadata: serde_json::json!({}),
        }
    }

    pub fn savings(&self) -> i32 {
        self.original_price - self.offer_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodchat_catalog::seed::demo_catalog;

    fn two_entries() -> Vec<CatalogEntry> {
        demo_catalog().entries().take(2).collect()
    }

    #[test]
    fn test_offer_price_never_exceeds_original() {
        for discount in [0u8, 1, 10, 33, 50, 99, 100] {
            let offer = SpecialOffer::new(None, "T", "D", two_entries(), discount);
            assert!(offer.offer_price <= offer.original_price, "discount {discount}");
            assert_eq!(offer.savings(), offer.original_price - offer.offer_price);
        }
    }

    #[test]
    fn test_zero_discount_keeps_prices_equal() {
        let offer = SpecialOffer::new(None, "T", "D", two_entries(), 0);
        assert_eq!(offer.offer_price, offer.original_price);
        assert_eq!(offer.savings(), 0);
    }

    #[test]
    fn test_discount_floors_the_result() {
        // Nasi Rendang 18000 + Nasi Ayam Bakar 17000 = 35000; 20% off = 28000
        let offer = SpecialOffer::new(Some("S001".into()), "Padang Combo", "D", two_entries(), 20);
        assert_eq!(offer.original_price, 35000);
        assert_eq!(offer.offer_price, 28000);
    }

    #[test]
    fn test_discount_is_clamped_to_100() {
        let offer = SpecialOffer::new(None, "T", "D", two_entries(), 250);
        assert_eq!(offer.discount_percent, 100);
        assert_eq!(offer.offer_price, 0);
    }
}
