pub mod entry;
pub mod menu;
pub mod seed;
pub mod seller;

use std::collections::HashSet;
use std::sync::Arc;

pub use entry::CatalogEntry;
pub use menu::MenuItem;
pub use seller::{Seller, StoreCategory};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate seller id: {0}")]
    DuplicateSeller(String),

    #[error("duplicate menu item id: {0}")]
    DuplicateItem(String),
}

/// The immutable store/menu index. Built once at startup; iteration order is
/// the seed order, which keeps ranking tie-breaks deterministic.
#[derive(Debug)]
pub struct Catalog {
    sellers: Vec<Arc<Seller>>,
}

impl Catalog {
    /// Duplicate ids are the one unrecoverable condition in this subsystem:
    /// fail fast before anything subscribes or searches.
    pub fn new(sellers: Vec<Seller>) -> Result<Self, CatalogError> {
        let mut seller_ids = HashSet::new();
        let mut item_ids = HashSet::new();
        for seller in &sellers {
            if !seller_ids.insert(seller.id.clone()) {
                return Err(CatalogError::DuplicateSeller(seller.id.clone()));
            }
            for item in &seller.menu {
                if !item_ids.insert(item.id.clone()) {
                    return Err(CatalogError::DuplicateItem(item.id.clone()));
                }
            }
        }
        tracing::info!(
            sellers = sellers.len(),
            items = item_ids.len(),
            "catalog loaded"
        );
        Ok(Self {
            sellers: sellers.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn sellers(&self) -> &[Arc<Seller>] {
        &self.sellers
    }

    pub fn seller(&self, id: &str) -> Option<&Arc<Seller>> {
        self.sellers.iter().find(|s| s.id == id)
    }

    /// Every (seller, item) pairing, in deterministic catalog order.
    pub fn entries(&self) -> impl Iterator<Item = CatalogEntry> + '_ {
        self.sellers
            .iter()
            .flat_map(|s| s.menu.iter().map(move |m| CatalogEntry::new(s, m)))
    }
}
