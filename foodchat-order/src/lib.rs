pub mod cart;
pub mod manager;
pub mod models;

pub use cart::{Cart, CartItem};
pub use manager::{OrderError, OrderManager};
pub use models::{CustomerDetails, Order, OrderStatus};
