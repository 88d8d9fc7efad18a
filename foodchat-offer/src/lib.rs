pub mod bundler;
pub mod models;

pub use bundler::{demo_offers, dynamic_bundle, BundleConfig, OfferBook};
pub use models::SpecialOffer;
