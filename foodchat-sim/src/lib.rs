pub mod assistant;
pub mod buyer;
pub mod seller;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use foodchat_bus::app_config::Config;
use foodchat_bus::EventBus;
use foodchat_catalog::Catalog;
use foodchat_offer::OfferBook;
use foodchat_order::{OrderError, OrderManager};
use foodchat_shared::ids::SequenceGenerator;
use uuid::Uuid;

pub use assistant::Assistant;
pub use buyer::BuyerSession;
pub use seller::SellerSession;

/// Seed for the order id sequence; the first order is `ORD-1001`.
const ORDER_ID_SEED: u64 = 1000;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("offer not found: {0}")]
    UnknownOffer(Uuid),

    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Shared wiring handed to every session: the catalog, the bus, the static
/// offer book, the order store and the loaded config.
#[derive(Clone)]
pub struct SimState {
    pub catalog: Arc<Catalog>,
    pub bus: Arc<EventBus>,
    pub offers: Arc<OfferBook>,
    pub orders: Arc<Mutex<OrderManager>>,
    pub config: Arc<Config>,
}

impl SimState {
    pub fn new(catalog: Arc<Catalog>, offers: OfferBook, config: Config) -> Self {
        let orders = OrderManager::new(
            Arc::clone(&catalog),
            SequenceGenerator::new("ORD", ORDER_ID_SEED),
        );
        Self {
            catalog,
            bus: EventBus::new(),
            offers: Arc::new(offers),
            orders: Arc::new(Mutex::new(orders)),
            config: Arc::new(config),
        }
    }
}

pub(crate) fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
