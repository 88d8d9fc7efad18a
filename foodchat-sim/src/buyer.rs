use foodchat_bus::{ChatMessage, SenderRole};
use foodchat_catalog::CatalogEntry;
use foodchat_offer::SpecialOffer;
use foodchat_order::{Cart, CustomerDetails, Order};

use crate::assistant::Assistant;
use crate::{ms, SessionError, SimState};

/// The buyer-side actor: one free-text chat surface plus the structured cart
/// and checkout actions the UI layer fires.
pub struct BuyerSession {
    name: String,
    state: SimState,
    assistant: Assistant,
    cart: Cart,
}

impl BuyerSession {
    pub fn new(name: impl Into<String>, state: SimState) -> Self {
        Self {
            name: name.into(),
            assistant: Assistant::new(state.clone()),
            state,
            cart: Cart::new(),
        }
    }

    /// Publishes the buyer's message and routes it through the assistant.
    /// Blank input is dropped.
    pub fn send(&self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        self.state
            .bus
            .publish(ChatMessage::text(&self.name, SenderRole::Buyer, trimmed));
        self.assistant.handle(trimmed);
    }

    pub fn add_to_cart(&mut self, entry: CatalogEntry, quantity: u32) {
        self.cart.add(entry, quantity);
    }

    pub fn update_quantity(&mut self, item_id: &str, seller_id: &str, quantity: u32) {
        self.cart.set_quantity(item_id, seller_id, quantity);
    }

    pub fn remove_from_cart(&mut self, item_id: &str, seller_id: &str) {
        self.cart.remove(item_id, seller_id);
    }

    /// Puts one of each bundled entry in the cart.
    pub fn add_offer_to_cart(&mut self, offer: &SpecialOffer) {
        for entry in &offer.items {
            self.cart.add(entry.clone(), 1);
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Validation failures surface synchronously and leave the cart intact.
    /// On success the order is announced to everyone and handed to the
    /// assigned seller after the configured handoff latency.
    pub fn checkout(&mut self, customer: CustomerDetails) -> Result<Order, SessionError> {
        let order = self
            .state
            .orders
            .lock()
            .expect("order store poisoned")
            .checkout(&mut self.cart, customer)?;

        self.state.bus.publish(ChatMessage::system(format!(
            "Order {} placed with {}! Est. {} minutes.",
            order.id, order.seller_name, order.estimated_minutes
        )));

        let handoff = order.clone();
        self.state
            .bus
            .publish_after(ms(self.state.config.latency.order_handoff_ms), move || {
                ChatMessage::order_update(handoff)
            });
        Ok(order)
    }
}
