use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use foodchat_catalog::CatalogEntry;
use foodchat_offer::SpecialOffer;
use foodchat_order::Order;

/// Name the system speaks under.
pub const SYSTEM_SENDER: &str = "System";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SenderRole {
    Buyer,
    Seller,
    System,
}

/// Discriminated payload carried by a chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessagePayload {
    Text,
    Recommendation { entries: Vec<CatalogEntry> },
    Offer { offer: SpecialOffer },
    OrderUpdate { order: Order },
}

/// One append-only chat record. Messages are never mutated after
/// publication; the bus owns the history log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender_name: String,
    pub role: SenderRole,
    pub body: String,
    pub payload: MessagePayload,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(
        sender_name: impl Into<String>,
        role: SenderRole,
        body: impl Into<String>,
        payload: MessagePayload,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender_name: sender_name.into(),
            role,
            body: body.into(),
            payload,
            sent_at: Utc::now(),
        }
    }

    pub fn text(sender_name: impl Into<String>, role: SenderRole, body: impl Into<String>) -> Self {
        Self::new(sender_name, role, body, MessagePayload::Text)
    }

    pub fn system(body: impl Into<String>) -> Self {
        Self::new(SYSTEM_SENDER, SenderRole::System, body, MessagePayload::Text)
    }

    pub fn recommendation(body: impl Into<String>, entries: Vec<CatalogEntry>) -> Self {
        Self::new(
            SYSTEM_SENDER,
            SenderRole::System,
            body,
            MessagePayload::Recommendation { entries },
        )
    }

    pub fn offer(offer: SpecialOffer) -> Self {
        let body = format!("Special offer: {}", offer.title);
        Self::new(
            SYSTEM_SENDER,
            SenderRole::System,
            body,
            MessagePayload::Offer { offer },
        )
    }

    pub fn order_update(order: Order) -> Self {
        let body = format!("Order {} -> {:?}", order.id, order.status);
        Self::new(
            SYSTEM_SENDER,
            SenderRole::System,
            body,
            MessagePayload::OrderUpdate { order },
        )
    }
}
