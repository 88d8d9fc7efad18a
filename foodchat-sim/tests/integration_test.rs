use std::sync::Arc;
use std::time::Duration;

use foodchat_bus::app_config::Config;
use foodchat_bus::MessagePayload;
use foodchat_catalog::seed::demo_catalog;
use foodchat_catalog::{Catalog, CatalogEntry};
use foodchat_offer::demo_offers;
use foodchat_order::{CustomerDetails, OrderStatus};
use foodchat_sim::{BuyerSession, SellerSession, SimState};

fn harness() -> (SimState, BuyerSession, Vec<Arc<SellerSession>>) {
    let catalog = Arc::new(demo_catalog());
    let offers = demo_offers(&catalog);
    let state = SimState::new(Arc::clone(&catalog), offers, Config::default());
    let sellers = catalog
        .sellers()
        .iter()
        .map(|s| SellerSession::spawn(state.clone(), Arc::clone(s)))
        .collect();
    let buyer = BuyerSession::new("Customer", state.clone());
    (state, buyer, sellers)
}

fn entry(catalog: &Catalog, item_id: &str) -> CatalogEntry {
    catalog.entries().find(|e| e.item.id == item_id).unwrap()
}

fn customer() -> CustomerDetails {
    CustomerDetails {
        name: "Budi".into(),
        phone: "0812".into(),
        address: "Jl. Mawar 1".into(),
        notes: String::new(),
    }
}

async fn settle() {
    tokio::time::sleep(Duration::from_secs(5)).await;
}

#[tokio::test(start_paused = true)]
async fn test_replies_are_deferred_not_immediate() {
    let (state, buyer, _sellers) = harness();

    buyer.send("hello");
    let history = state.bus.history();
    assert_eq!(history.len(), 1, "only the buyer's own message is immediate");

    settle().await;
    let history = state.bus.history();
    assert_eq!(history.len(), 2);
    assert!(history[1].body.starts_with("Hello! Welcome to FoodChat!"));
}

#[tokio::test(start_paused = true)]
async fn test_price_filtered_search_flow() {
    let (state, buyer, _sellers) = harness();

    buyer.send("nasi goreng under 20k");
    settle().await;

    let history = state.bus.history();
    let entries = history
        .iter()
        .find_map(|m| match &m.payload {
            MessagePayload::Recommendation { entries } => Some(entries.clone()),
            _ => None,
        })
        .expect("a recommendation was published");

    let names: Vec<_> = entries.iter().map(|e| e.item.name.as_str()).collect();
    assert!(names.contains(&"Nasi Goreng"));
    assert!(names.contains(&"Nasi Goreng Seafood"));
    assert!(entries.iter().all(|e| e.item.price <= 20000));
}

#[tokio::test(start_paused = true)]
async fn test_offer_request_routes_to_offers_not_search() {
    let (state, buyer, _sellers) = harness();

    buyer.send("what's your special offer today?");
    settle().await;

    let history = state.bus.history();
    let offers = history
        .iter()
        .filter(|m| matches!(m.payload, MessagePayload::Offer { .. }))
        .count();
    let recommendations = history
        .iter()
        .filter(|m| matches!(m.payload, MessagePayload::Recommendation { .. }))
        .count();
    assert_eq!(offers, 5, "the static offer book is broadcast");
    assert_eq!(recommendations, 0, "the search branch must not run");
}

#[tokio::test(start_paused = true)]
async fn test_tagged_offer_request_synthesizes_a_bundle() {
    let (state, buyer, _sellers) = harness();

    buyer.send("any spicy sweet deals?");
    settle().await;

    let bundle = state
        .bus
        .history()
        .iter()
        .find_map(|m| match &m.payload {
            MessagePayload::Offer { offer } => Some(offer.clone()),
            _ => None,
        })
        .expect("a dynamic bundle was published");

    assert!(bundle.seller_id.is_none());
    assert!(bundle.items.len() >= 2);
    assert!(bundle.offer_price <= bundle.original_price);
    assert_eq!(bundle.metadata["dynamic"], serde_json::json!(true));
}

#[tokio::test(start_paused = true)]
async fn test_checkout_validation_leaves_cart_intact() {
    let (state, mut buyer, _sellers) = harness();

    buyer.add_to_cart(entry(&state.catalog, "S005-1"), 1);
    let mut details = customer();
    details.phone = String::new();

    assert!(buyer.checkout(details).is_err());
    assert!(!buyer.cart().is_empty());
    assert!(
        state.bus.history().is_empty(),
        "a failed checkout announces nothing"
    );
}

#[tokio::test(start_paused = true)]
async fn test_full_order_lifecycle() {
    let (state, mut buyer, sellers) = harness();

    buyer.add_to_cart(entry(&state.catalog, "S005-1"), 2);
    let order = buyer.checkout(customer()).expect("checkout succeeds");
    assert_eq!(order.id, "ORD-1001");
    assert_eq!(order.status, OrderStatus::Pending);
    assert!(buyer.cart().is_empty());

    settle().await;

    // the handoff reached the owning seller: queue bumped, confirmation sent
    let warteg = state.catalog.seller("S005").unwrap();
    assert_eq!(warteg.queue_count(), 1);
    assert!(state
        .bus
        .history()
        .iter()
        .any(|m| m.body.starts_with("Order received!")));

    let kitchen = sellers
        .iter()
        .find(|s| s.seller_id() == "S005")
        .expect("warteg session exists");

    let base = order.estimated_minutes;
    kitchen.advance_order(&order.id, OrderStatus::Accepted).unwrap();
    let busy = kitchen.advance_order(&order.id, OrderStatus::Busy).unwrap();
    assert_eq!(busy.estimated_minutes, base + 20);

    let done = kitchen
        .advance_order(&order.id, OrderStatus::Completed)
        .unwrap();
    assert!(done.status.is_terminal());
    assert_eq!(warteg.queue_count(), 0, "terminal status frees the queue slot");

    // every transition was published as an order update
    let updates: Vec<OrderStatus> = state
        .bus
        .history()
        .iter()
        .filter_map(|m| match &m.payload {
            MessagePayload::OrderUpdate { order } => Some(order.status),
            _ => None,
        })
        .collect();
    assert_eq!(
        updates,
        vec![
            OrderStatus::Pending,
            OrderStatus::Accepted,
            OrderStatus::Busy,
            OrderStatus::Completed,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_seller_promo_reaches_the_buyer_cart() {
    let (state, mut buyer, sellers) = harness();

    let padang = sellers.iter().find(|s| s.seller_id() == "S001").unwrap();
    let promo = state.offers.for_seller("S001").next().unwrap().clone();
    padang.send_offer(&promo.id).unwrap();

    let published = state
        .bus
        .history()
        .iter()
        .find_map(|m| match &m.payload {
            MessagePayload::Offer { offer } => Some(offer.clone()),
            _ => None,
        })
        .expect("the promo was broadcast");
    assert_eq!(published.title, "Padang Combo");

    buyer.add_offer_to_cart(&published);
    assert_eq!(buyer.cart().items().len(), 2);
    assert_eq!(buyer.cart().total(), 35000);

    let order = buyer.checkout(customer()).expect("checkout succeeds");
    assert_eq!(order.seller_id, "S001");
}

#[tokio::test(start_paused = true)]
async fn test_busy_toggle_is_announced_and_visible_in_status_report() {
    let (state, buyer, sellers) = harness();

    let korean = sellers.iter().find(|s| s.seller_id() == "S002").unwrap();
    korean.set_busy(true);

    buyer.send("are sellers open?");
    settle().await;

    let history = state.bus.history();
    assert!(history
        .iter()
        .any(|m| m.body.contains("Korean Street Food is currently busy")));
    let report = history
        .iter()
        .find(|m| m.body.starts_with("Seller status:"))
        .expect("a status report was published");
    assert!(report.body.contains("Korean Street Food: busy"));
    assert!(report.body.contains("Warteg Bahagia: open"));
}
