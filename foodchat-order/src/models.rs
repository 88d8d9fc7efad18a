use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::CartItem;

/// Fulfillment status. Labels, colors and emoji live in the presentation
/// layer; the model exposes only the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Accepted,
    Rejected,
    OnProcess,
    DriverOnWay,
    Completed,
    Busy,
}

impl OrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Rejected | OrderStatus::Completed)
    }
}

/// Minutes added to the estimate each time the seller reports BUSY.
const BUSY_PENALTY_MINUTES: u32 = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub notes: String,
}

/// A checkout snapshot. Identity fields are immutable; only `status` and
/// `estimated_minutes` change, via `set_status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer: CustomerDetails,
    pub items: Vec<CartItem>,
    pub subtotal: i32,
    pub seller_id: String,
    pub seller_name: String,
    pub status: OrderStatus,
    pub estimated_minutes: u32,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub(crate) fn new(
        id: String,
        customer: CustomerDetails,
        items: Vec<CartItem>,
        subtotal: i32,
        seller_id: String,
        seller_name: String,
        estimated_minutes: u32,
    ) -> Self {
        Self {
            id,
            customer,
            items,
            subtotal,
            seller_id,
            seller_name,
            status: OrderStatus::Pending,
            estimated_minutes,
            created_at: Utc::now(),
        }
    }

    /// BUSY is a side branch: it never terminates the order, it only pushes
    /// the estimate back.
    pub fn set_status(&mut self, status: OrderStatus) {
        if status == OrderStatus::Busy {
            self.estimated_minutes += BUSY_PENALTY_MINUTES;
        }
        self.status = status;
    }
}
