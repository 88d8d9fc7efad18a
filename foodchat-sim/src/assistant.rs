use std::sync::Arc;

use foodchat_bus::{ChatMessage, SenderRole};
use foodchat_core::{classify, parse, Intent, ParsedQuery, SearchEngine, SearchIntent, SortMode};
use foodchat_offer::dynamic_bundle;
use foodchat_shared::money::format_rupiah;

use crate::{ms, SimState};

/// Name the concierge speaks under.
pub const ASSISTANT_NAME: &str = "FoodChat AI";

/// The popular shortcut returns this many top-rated items.
const POPULAR_LIMIT: usize = 5;
/// Below this ceiling the no-results reply suggests raising the budget.
const LOW_BUDGET_THRESHOLD: i32 = 10000;

const GREETING_REPLY: &str = "Hello! Welcome to FoodChat! What can I help you find today? \
    Try: 'nasi goreng', 'korean food', 'special offer', or 'cheap food'";

const HELP_REPLY: &str = "I can help you find:\n\
    - Padang food\n\
    - Korean dishes\n\
    - Fast food\n\
    - Healthy options\n\
    - Warteg / local food\n\
    - Desserts\n\
    - Drinks\n\
    Just tell me what you're craving! Or ask for 'special offer' for deals!";

const THANKS_REPLY: &str = "You're welcome! Anything else?";

const MOOD_PROMPT: &str = "What are you in the mood for?\n\
    - Spicy (pedas)\n\
    - Sweet (manis)\n\
    - Healthy (sehat)\n\
    - Fast (cepat)\n\
    - Cheap (murah)\n\
    Or tell me a category: Korean, Padang, Warteg, etc.";

const NO_RESULTS_REPLY: &str = "I couldn't find that. Try:\n\
    - Specific foods: 'nasi goreng', 'burger', 'salad'\n\
    - Categories: 'korean', 'padang', 'healthy'\n\
    - Taste: 'spicy', 'sweet', 'savory'\n\
    - Or just ask: 'what's popular?'";

/// Rule-based concierge: classifies each buyer message and answers over the
/// bus. Every reply is deferred by the configured latency, simulating
/// network and preparation time.
pub struct Assistant {
    state: SimState,
    engine: SearchEngine,
}

impl Assistant {
    pub fn new(state: SimState) -> Self {
        let engine = SearchEngine::new(Arc::clone(&state.catalog), state.config.search.clone());
        Self { state, engine }
    }

    /// Routes one raw buyer message through the intent cascade.
    pub fn handle(&self, raw: &str) {
        let latency = &self.state.config.latency;
        let intent = classify(raw);
        tracing::debug!(?intent, "buyer message classified");
        match intent {
            Intent::Greeting => self.reply_after(latency.greeting_ms, GREETING_REPLY),
            Intent::Help => self.reply_after(latency.help_ms, HELP_REPLY),
            Intent::Thanks => self.reply_after(latency.thanks_ms, THANKS_REPLY),
            Intent::OfferRequest => self.send_offers(raw),
            Intent::StatusRequest => self.send_status_report(),
            Intent::RecommendationRequest => self.reply_after(latency.recommend_ms, MOOD_PROMPT),
            Intent::PopularRequest => self.send_popular(),
            Intent::Search(opts) => self.send_search_results(raw, opts),
        }
    }

    fn reply_after(&self, delay_ms: u64, body: impl Into<String>) {
        let body = body.into();
        self.state.bus.publish_after(ms(delay_ms), move || {
            ChatMessage::text(ASSISTANT_NAME, SenderRole::Seller, body)
        });
    }

    /// Offer branch: a themed dynamic bundle when the message itself names
    /// enough tags to build one, otherwise the static offer book, staggered
    /// per offer.
    fn send_offers(&self, raw: &str) {
        let latency = &self.state.config.latency;
        let parsed = parse(raw);
        if parsed.tags.len() >= 2 {
            let results = self.engine.recommend(&parsed);
            if let Some(bundle) = dynamic_bundle(&parsed.tags, &results, &self.state.config.bundle)
            {
                self.reply_after(latency.offer_lead_ms, "Here's a deal put together for you:");
                self.state
                    .bus
                    .publish_after(ms(latency.offer_lead_ms + latency.offer_item_ms), move || {
                        ChatMessage::offer(bundle)
                    });
                return;
            }
        }

        self.reply_after(latency.offer_lead_ms, "Here are today's special offers:");
        for (i, offer) in self.state.offers.all().iter().cloned().enumerate() {
            let delay = latency.offer_lead_ms + latency.offer_item_ms * (i as u64 + 1);
            self.state
                .bus
                .publish_after(ms(delay), move || ChatMessage::offer(offer));
        }
    }

    /// Availability report. Built inside the factory so it snapshots seller
    /// state at publication time, not at scheduling time.
    fn send_status_report(&self) {
        let catalog = Arc::clone(&self.state.catalog);
        self.state
            .bus
            .publish_after(ms(self.state.config.latency.status_ms), move || {
                let mut report = String::from("Seller status:\n");
                for seller in catalog.sellers() {
                    let wait = seller.estimated_wait_minutes();
                    let line = if seller.is_busy() {
                        format!("- {}: busy (~{} min wait)\n", seller.name, wait)
                    } else {
                        format!("- {}: open (~{} min)\n", seller.name, wait)
                    };
                    report.push_str(&line);
                }
                ChatMessage::text(ASSISTANT_NAME, SenderRole::Seller, report.trim_end())
            });
    }

    fn send_popular(&self) {
        let mut results = self.engine.search(&ParsedQuery::default(), SortMode::Rating);
        results.truncate(POPULAR_LIMIT);
        let delay = ms(self.state.config.latency.recommend_ms);
        self.state.bus.publish_after(delay, move || {
            ChatMessage::recommendation("Top-rated items across all sellers:", results)
        });
    }

    fn send_search_results(&self, raw: &str, opts: SearchIntent) {
        let latency = &self.state.config.latency;
        let parsed = parse(raw);
        let results = if opts.by_rating {
            self.engine.search(&parsed, SortMode::Rating)
        } else if opts.by_speed {
            self.engine.search(&parsed, SortMode::Speed)
        } else {
            // the AI-style path: tag relevance plus seller signals
            self.engine.recommend(&parsed)
        };

        if results.is_empty() {
            let body = match parsed.max_price {
                Some(max) if max < LOW_BUDGET_THRESHOLD => format!(
                    "Hmm, not much under {}. Try 'cheap food' or raise your budget to 15k-20k!",
                    format_rupiah(max)
                ),
                _ => NO_RESULTS_REPLY.to_string(),
            };
            self.reply_after(latency.fallback_ms, body);
            return;
        }

        let body = match parsed.max_price {
            Some(max) => format!("Here are options under {}:", format_rupiah(max)),
            None => "Here are some recommendations:".to_string(),
        };
        self.state.bus.publish_after(ms(latency.search_ms), move || {
            ChatMessage::recommendation(body, results)
        });
    }
}
