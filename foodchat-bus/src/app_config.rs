use serde::Deserialize;

use foodchat_core::search::SearchConfig;
use foodchat_offer::bundler::BundleConfig;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub bundle: BundleConfig,
    pub latency: LatencyConfig,
}

/// Simulated network and preparation delays, in milliseconds. These stand in
/// for real transport: every reply the assistant or a seller produces is
/// deferred by one of them.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LatencyConfig {
    pub greeting_ms: u64,
    pub help_ms: u64,
    pub thanks_ms: u64,
    pub offer_lead_ms: u64,
    pub offer_item_ms: u64,
    pub status_ms: u64,
    pub recommend_ms: u64,
    pub search_ms: u64,
    pub fallback_ms: u64,
    pub order_handoff_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            greeting_ms: 600,
            help_ms: 600,
            thanks_ms: 500,
            offer_lead_ms: 800,
            offer_item_ms: 400,
            status_ms: 600,
            recommend_ms: 700,
            search_ms: 800,
            fallback_ms: 700,
            order_handoff_ms: 500,
        }
    }
}

impl Config {
    /// Layered load: optional `config/default` file, then `FOODCHAT__`
    /// environment overrides (e.g. `FOODCHAT__SEARCH__RESULT_LIMIT=10`).
    /// Every section falls back to its defaults when absent.
    pub fn load() -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::with_prefix("FOODCHAT").separator("__"))
            .build()?;
        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_complete() {
        let config = Config::default();
        assert_eq!(config.search.result_limit, 8);
        assert_eq!(config.bundle.dynamic_discount_percent, 15);
        assert_eq!(config.latency.search_ms, 800);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = Config::load().expect("config loads from defaults");
        assert_eq!(config.search.result_limit, 8);
        assert!(config.latency.order_handoff_ms > 0);
    }
}
