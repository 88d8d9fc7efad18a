use std::collections::HashMap;
use std::sync::Arc;

use foodchat_catalog::Catalog;
use foodchat_shared::ids::SequenceGenerator;

use crate::cart::Cart;
use crate::models::{CustomerDetails, Order, OrderStatus};

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("cart is empty")]
    EmptyCart,

    #[error("unknown seller: {0}")]
    UnknownSeller(String),

    #[error("order not found: {0}")]
    NotFound(String),
}

/// Creates orders from cart snapshots and drives their status lifecycle.
/// Orders are kept for the process lifetime, never deleted.
pub struct OrderManager {
    catalog: Arc<Catalog>,
    ids: SequenceGenerator,
    orders: HashMap<String, Order>,
}

impl OrderManager {
    /// The id generator is injected so tests can pin the sequence start.
    pub fn new(catalog: Arc<Catalog>, ids: SequenceGenerator) -> Self {
        Self {
            catalog,
            ids,
            orders: HashMap::new(),
        }
    }

    /// Validates contact fields before touching the cart; on success the
    /// cart is drained into an immutable order snapshot assigned to the
    /// dominant seller, with the estimate taken from that seller's current
    /// wait time.
    pub fn checkout(
        &mut self,
        cart: &mut Cart,
        customer: CustomerDetails,
    ) -> Result<Order, OrderError> {
        validate(&customer)?;
        let seller_id = cart
            .dominant_seller()
            .ok_or(OrderError::EmptyCart)?
            .to_string();
        let seller = self
            .catalog
            .seller(&seller_id)
            .ok_or_else(|| OrderError::UnknownSeller(seller_id.clone()))?;

        let order = Order::new(
            self.ids.next_id(),
            customer,
            cart.items().to_vec(),
            cart.total(),
            seller.id.clone(),
            seller.name.clone(),
            seller.estimated_wait_minutes(),
        );
        cart.clear();
        tracing::info!(
            order_id = %order.id,
            seller = %order.seller_name,
            subtotal = order.subtotal,
            "order placed"
        );
        self.orders.insert(order.id.clone(), order.clone());
        Ok(order)
    }

    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.get(id)
    }

    /// Any transition is accepted — the seller surface is trusted to fire
    /// valid buttons. Returns the updated snapshot so the caller can publish
    /// the mandatory order-update event.
    pub fn set_status(&mut self, order_id: &str, status: OrderStatus) -> Result<Order, OrderError> {
        let order = self
            .orders
            .get_mut(order_id)
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))?;
        order.set_status(status);
        tracing::info!(
            order_id = %order.id,
            status = ?order.status,
            estimate = order.estimated_minutes,
            "order status changed"
        );
        Ok(order.clone())
    }
}

fn validate(customer: &CustomerDetails) -> Result<(), OrderError> {
    if customer.name.trim().is_empty() {
        return Err(OrderError::MissingField("name"));
    }
    if customer.phone.trim().is_empty() {
        return Err(OrderError::MissingField("phone"));
    }
    if customer.address.trim().is_empty() {
        return Err(OrderError::MissingField("address"));
    }
    Ok(())
}
