use serde::{Deserialize, Serialize};

use foodchat_catalog::CatalogEntry;

/// One cart line. The cart keeps at most one line per (item id, seller id)
/// pair; repeated adds merge into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub entry: CatalogEntry,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> i32 {
        self.entry.item.price * self.quantity as i32
    }
}

/// Accumulates selected items across sellers. All operations are synchronous
/// and touch only the cart's own state.
#[derive(Debug, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges into an existing line when (item, seller) matches, else
    /// appends. A zero quantity is ignored.
    pub fn add(&mut self, entry: CatalogEntry, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(line) = self.line_mut(&entry.item.id, &entry.seller_id) {
            line.quantity += quantity;
            return;
        }
        self.items.push(CartItem { entry, quantity });
    }

    /// Removing an absent line is a no-op.
    pub fn remove(&mut self, item_id: &str, seller_id: &str) {
        self.items
            .retain(|ci| !(ci.entry.item.id == item_id && ci.entry.seller_id == seller_id));
    }

    /// Quantity zero removes the line; updating an absent line is a no-op.
    pub fn set_quantity(&mut self, item_id: &str, seller_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(item_id, seller_id);
            return;
        }
        if let Some(line) = self.line_mut(item_id, seller_id) {
            line.quantity = quantity;
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> i32 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|ci| ci.quantity).sum()
    }

    /// The seller with the highest aggregate quantity in the cart; the first
    /// encountered wins ties. None when the cart is empty.
    pub fn dominant_seller(&self) -> Option<&str> {
        let mut totals: Vec<(&str, u32)> = Vec::new();
        for line in &self.items {
            match totals.iter_mut().find(|(id, _)| *id == line.entry.seller_id) {
                Some((_, qty)) => *qty += line.quantity,
                None => totals.push((&line.entry.seller_id, line.quantity)),
            }
        }
        let mut best: Option<(&str, u32)> = None;
        for (id, qty) in totals {
            if best.map_or(true, |(_, best_qty)| qty > best_qty) {
                best = Some((id, qty));
            }
        }
        best.map(|(id, _)| id)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn line_mut(&mut self, item_id: &str, seller_id: &str) -> Option<&mut CartItem> {
        self.items
            .iter_mut()
            .find(|ci| ci.entry.item.id == item_id && ci.entry.seller_id == seller_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodchat_catalog::seed::demo_catalog;

    fn entry(item_id: &str) -> CatalogEntry {
        demo_catalog()
            .entries()
            .find(|e| e.item.id == item_id)
            .unwrap()
    }

    #[test]
    fn test_repeated_adds_merge_into_one_line() {
        let mut cart = Cart::new();
        let e = entry("S005-1");
        cart.add(e.clone(), 1);
        cart.add(e, 1);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.total(), 30000);
    }

    #[test]
    fn test_remove_and_update_absent_lines_are_noops() {
        let mut cart = Cart::new();
        cart.add(entry("S005-1"), 1);
        cart.remove("S005-9", "S005");
        cart.set_quantity("S001-1", "S001", 3);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_zero_quantity_removes_the_line() {
        let mut cart = Cart::new();
        cart.add(entry("S005-1"), 2);
        cart.set_quantity("S005-1", "S005", 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals_and_counts() {
        let mut cart = Cart::new();
        cart.add(entry("S005-1"), 2); // 2 x 15000
        cart.add(entry("S007-1"), 3); // 3 x 5000
        assert_eq!(cart.total(), 45000);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_dominant_seller_by_aggregate_quantity() {
        let mut cart = Cart::new();
        cart.add(entry("S005-1"), 1);
        cart.add(entry("S005-3"), 2);
        cart.add(entry("S007-1"), 2);
        assert_eq!(cart.dominant_seller(), Some("S005"));
    }

    #[test]
    fn test_dominant_seller_tie_goes_to_first_encountered() {
        let mut cart = Cart::new();
        cart.add(entry("S007-1"), 2);
        cart.add(entry("S005-1"), 2);
        assert_eq!(cart.dominant_seller(), Some("S007"));
    }

    #[test]
    fn test_empty_cart_has_no_dominant_seller() {
        assert_eq!(Cart::new().dominant_seller(), None);
    }
}
