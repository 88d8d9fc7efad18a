use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use foodchat_bus::app_config::Config;
use foodchat_bus::{ChatMessage, MessagePayload};
use foodchat_catalog::seed::demo_catalog;
use foodchat_offer::demo_offers;
use foodchat_order::{CustomerDetails, OrderStatus};
use foodchat_sim::{BuyerSession, SellerSession, SimState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "foodchat_sim=info,foodchat=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    let catalog = Arc::new(demo_catalog());
    let offers = demo_offers(&catalog);
    let state = SimState::new(Arc::clone(&catalog), offers, config);

    // console transcript of everything that crosses the bus
    state.bus.subscribe(|m: &ChatMessage| {
        tracing::info!(sender = %m.sender_name, role = ?m.role, "{}", m.body);
    });

    let sellers: Vec<Arc<SellerSession>> = catalog
        .sellers()
        .iter()
        .map(|s| SellerSession::spawn(state.clone(), Arc::clone(s)))
        .collect();
    let mut buyer = BuyerSession::new("Customer", state.clone());

    buyer.send("hello");
    pause().await;
    buyer.send("help");
    pause().await;
    buyer.send("recommend me something");
    pause().await;
    buyer.send("what's popular?");
    pause().await;
    buyer.send("are sellers open?");
    pause().await;
    buyer.send("what's your special offer today?");
    pause_long().await;
    buyer.send("nasi goreng under 20k");
    pause().await;

    // order the top hit from the recommendation that just arrived
    let entry = state
        .bus
        .history()
        .iter()
        .rev()
        .find_map(|m| match &m.payload {
            MessagePayload::Recommendation { entries } => entries.first().cloned(),
            _ => None,
        })
        .context("no recommendation arrived")?;
    buyer.add_to_cart(entry, 2);
    let order = buyer.checkout(CustomerDetails {
        name: "Budi Santoso".into(),
        phone: "0812-3456-7890".into(),
        address: "Jl. Kenanga No. 5, Jakarta".into(),
        notes: "extra sambal".into(),
    })?;
    pause().await;

    let kitchen = sellers
        .iter()
        .find(|s| s.seller_id() == order.seller_id)
        .context("seller session missing")?;

    kitchen.advance_order(&order.id, OrderStatus::Accepted)?;
    pause().await;
    kitchen.set_busy(true);
    kitchen.advance_order(&order.id, OrderStatus::Busy)?;
    pause().await;
    kitchen.set_busy(false);
    kitchen.advance_order(&order.id, OrderStatus::OnProcess)?;
    pause().await;
    kitchen.advance_order(&order.id, OrderStatus::DriverOnWay)?;
    pause().await;
    kitchen.advance_order(&order.id, OrderStatus::Completed)?;
    pause().await;

    // the Padang store pushes its combo; the buyer takes the deal
    let padang = &sellers[0];
    let promo = state
        .offers
        .for_seller(padang.seller_id())
        .next()
        .context("padang has a seeded promo")?
        .clone();
    padang.send_offer(&promo.id)?;
    pause().await;
    buyer.add_offer_to_cart(&promo);
    let second = buyer.checkout(CustomerDetails {
        name: "Budi Santoso".into(),
        phone: "0812-3456-7890".into(),
        address: "Jl. Kenanga No. 5, Jakarta".into(),
        notes: String::new(),
    })?;
    pause().await;
    padang.advance_order(&second.id, OrderStatus::Accepted)?;
    pause().await;
    padang.advance_order(&second.id, OrderStatus::Completed)?;
    pause().await;

    buyer.send("thank you!");
    pause().await;

    let history = state.bus.history();
    tracing::info!(messages = history.len(), "conversation finished");
    Ok(())
}

async fn pause() {
    tokio::time::sleep(Duration::from_millis(1500)).await;
}

/// Long enough for the staggered offer broadcast to finish.
async fn pause_long() {
    tokio::time::sleep(Duration::from_millis(3500)).await;
}
