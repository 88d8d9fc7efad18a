use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

use crate::menu::MenuItem;

/// Store category identifier. Labels, emoji and colors belong to the
/// presentation layer, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreCategory {
    Padang,
    Korean,
    FastFood,
    Healthy,
    Warteg,
    Dessert,
    Drinks,
}

/// Fallback prep time for a seller with an empty menu, in minutes.
const DEFAULT_PREP_MINUTES: u32 = 20;
/// Each queued order pushes the estimate back by this much.
const QUEUE_DELAY_MINUTES: u32 = 10;
/// Fixed driver dispatch buffer added to every estimate.
const DISPATCH_BUFFER_MINUTES: u32 = 5;

/// A merchant storefront. Menu is fixed at load time; only `busy` and the
/// queue depth change while the system runs, and always from the owning
/// seller's side. Readers get point-in-time snapshots — staleness is
/// acceptable here.
#[derive(Debug)]
pub struct Seller {
    pub id: String,
    pub name: String,
    pub category: StoreCategory,
    pub rating: f64,
    pub distance_km: f64,
    pub menu: Vec<MenuItem>,
    busy: AtomicBool,
    queue_count: AtomicU32,
}

impl Seller {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: StoreCategory,
        rating: f64,
        distance_km: f64,
        menu: Vec<MenuItem>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            rating,
            distance_km,
            menu,
            busy: AtomicBool::new(false),
            queue_count: AtomicU32::new(0),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Relaxed)
    }

    pub fn set_busy(&self, busy: bool) {
        self.busy.store(busy, Ordering::Relaxed);
    }

    pub fn queue_count(&self) -> u32 {
        self.queue_count.load(Ordering::Relaxed)
    }

    pub fn set_queue_count(&self, count: u32) {
        self.queue_count.store(count, Ordering::Relaxed);
    }

    /// Wait estimate in minutes: slowest menu item, plus queue backlog, plus
    /// the dispatch buffer. Recomputed on every call, never cached.
    pub fn estimated_wait_minutes(&self) -> u32 {
        let base = self
            .menu
            .iter()
            .map(|m| m.prep_minutes)
            .max()
            .unwrap_or(DEFAULT_PREP_MINUTES);
        base + self.queue_count() * QUEUE_DELAY_MINUTES + DISPATCH_BUFFER_MINUTES
    }
}
