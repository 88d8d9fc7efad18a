use std::sync::{Arc, Mutex};

use uuid::Uuid;

use foodchat_bus::{ChatMessage, MessagePayload, SenderRole};
use foodchat_catalog::Seller;
use foodchat_order::{Order, OrderStatus};

use crate::{ms, SessionError, SimState};

/// Seller-side actor. Owns its store's mutable flags, reacts to orders
/// assigned to it on the bus, and drives the fulfillment state machine.
pub struct SellerSession {
    seller: Arc<Seller>,
    state: SimState,
    active_orders: Mutex<Vec<String>>,
}

impl SellerSession {
    /// Wires the session onto the bus; PENDING orders addressed to this
    /// seller are picked up from the stream.
    pub fn spawn(state: SimState, seller: Arc<Seller>) -> Arc<Self> {
        let session = Arc::new(Self {
            seller,
            state: state.clone(),
            active_orders: Mutex::new(Vec::new()),
        });
        let hook = Arc::clone(&session);
        state.bus.subscribe(move |m: &ChatMessage| hook.on_message(m));
        session
    }

    pub fn seller_id(&self) -> &str {
        &self.seller.id
    }

    fn on_message(&self, message: &ChatMessage) {
        if let MessagePayload::OrderUpdate { order } = &message.payload {
            if order.seller_id == self.seller.id && order.status == OrderStatus::Pending {
                self.receive_order(order);
            }
        }
    }

    /// Registers an incoming order, bumps the queue, and confirms over the
    /// bus after the usual handoff latency.
    fn receive_order(&self, order: &Order) {
        let mut active = self.active_orders.lock().expect("active orders poisoned");
        if active.iter().any(|id| id == &order.id) {
            return;
        }
        active.push(order.id.clone());
        self.seller.set_queue_count(active.len() as u32);
        drop(active);

        tracing::info!(
            seller = %self.seller.name,
            order_id = %order.id,
            "order received"
        );
        let body = format!(
            "Order received! {} is preparing your food. Est. {} minutes.",
            self.seller.name, order.estimated_minutes
        );
        let sender = self.seller.name.clone();
        self.state
            .bus
            .publish_after(ms(self.state.config.latency.order_handoff_ms), move || {
                ChatMessage::text(sender, SenderRole::Seller, body)
            });
    }

    /// Flips the store's busy flag and announces it to everyone.
    pub fn set_busy(&self, busy: bool) {
        self.seller.set_busy(busy);
        let body = if busy {
            format!("{} is currently busy. Orders may take longer.", self.seller.name)
        } else {
            format!("{} is back and ready for orders!", self.seller.name)
        };
        self.state.bus.publish(ChatMessage::system(body));
    }

    /// Broadcasts one of this seller's static promotions.
    pub fn send_offer(&self, offer_id: &Uuid) -> Result<(), SessionError> {
        let offer = self
            .state
            .offers
            .for_seller(&self.seller.id)
            .find(|o| o.id == *offer_id)
            .ok_or(SessionError::UnknownOffer(*offer_id))?
            .clone();
        self.state.bus.publish(ChatMessage::offer(offer));
        Ok(())
    }

    /// Drives the order state machine. Every transition is published with
    /// the refreshed estimate; terminal statuses release the queue slot.
    pub fn advance_order(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<Order, SessionError> {
        let updated = self
            .state
            .orders
            .lock()
            .expect("order store poisoned")
            .set_status(order_id, status)?;

        if updated.status.is_terminal() {
            let mut active = self.active_orders.lock().expect("active orders poisoned");
            active.retain(|id| id != order_id);
            self.seller.set_queue_count(active.len() as u32);
        }

        self.state
            .bus
            .publish(ChatMessage::order_update(updated.clone()));
        Ok(updated)
    }
}
