use once_cell::sync::Lazy;
use regex::Regex;

/// The classified purpose of one buyer message, driving which
/// response-construction path runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Help,
    Thanks,
    /// Deals, promos, discounts.
    OfferRequest,
    /// "are sellers open?", busy checks.
    StatusRequest,
    /// Vague "what should I eat" with no concrete food named.
    RecommendationRequest,
    /// Top-rated shortcut.
    PopularRequest,
    /// Fallback: run the search engine with optional sort modifiers.
    Search(SearchIntent),
}

/// Sort modifiers recognized inside a generic search message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchIntent {
    pub by_rating: bool,
    pub by_speed: bool,
}

/// Whole-message greeting forms, English and Indonesian.
static GREETING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(hi|hello|hey|halo|hai|pagi|siang|malam|selamat.*)[!.?]*$")
        .expect("greeting pattern compiles")
});

const HELP_KEYWORDS: &[&str] = &["help", "bantuan", "apa aja", "what can", "list menu", "show menu"];
const THANKS_KEYWORDS: &[&str] = &["thank", "terima", "makasih"];
const OFFER_KEYWORDS: &[&str] = &["special", "offer", "promo", "diskon", "discount", "deal"];
const STATUS_KEYWORDS: &[&str] = &["open", "available", "buka", "tutup", "busy"];
const RECOMMEND_KEYWORDS: &[&str] =
    &["recommend", "suggest", "rekomendasi", "saranin", "what should", "apa yang"];
const POPULAR_KEYWORDS: &[&str] = &["popular", "favorit", "favorite", "best seller", "terlaris"];
const RATING_KEYWORDS: &[&str] = &["rating", "best", "top", "terbaik"];
const SPEED_KEYWORDS: &[&str] = &["fastest", "cepat", "quick", "tercepat"];

/// A recommendation request longer than this is treated as a concrete search.
const RECOMMEND_MAX_LEN: usize = 50;

/// Ordered cascade of predicates; the first match wins. The order is
/// load-bearing: specific intents (offers, status) must shadow the generic
/// search fallback.
pub fn classify(raw: &str) -> Intent {
    let lower = raw.trim().to_lowercase();

    if GREETING_RE.is_match(&lower) {
        return Intent::Greeting;
    }
    if contains_any(&lower, HELP_KEYWORDS) {
        return Intent::Help;
    }
    if contains_any(&lower, THANKS_KEYWORDS) {
        return Intent::Thanks;
    }
    if contains_any(&lower, OFFER_KEYWORDS) {
        return Intent::OfferRequest;
    }
    if contains_any(&lower, STATUS_KEYWORDS) {
        return Intent::StatusRequest;
    }
    if contains_any(&lower, RECOMMEND_KEYWORDS)
        && !lower.contains("food")
        && raw.len() < RECOMMEND_MAX_LEN
    {
        return Intent::RecommendationRequest;
    }
    if contains_any(&lower, POPULAR_KEYWORDS) {
        return Intent::PopularRequest;
    }
    Intent::Search(SearchIntent {
        by_rating: contains_any(&lower, RATING_KEYWORDS),
        by_speed: contains_any(&lower, SPEED_KEYWORDS),
    })
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greetings_match_whole_message_only() {
        assert_eq!(classify("Hello"), Intent::Greeting);
        assert_eq!(classify("halo!"), Intent::Greeting);
        assert_eq!(classify("selamat pagi"), Intent::Greeting);
        // greeting word inside a longer message is not a greeting
        assert!(matches!(classify("hello there friend"), Intent::Search(_)));
    }

    #[test]
    fn test_offer_request_shadows_generic_search() {
        assert_eq!(classify("what's your special offer today?"), Intent::OfferRequest);
        assert_eq!(classify("ada diskon?"), Intent::OfferRequest);
        assert_eq!(classify("any good deal"), Intent::OfferRequest);
    }

    #[test]
    fn test_status_request() {
        assert_eq!(classify("are sellers open?"), Intent::StatusRequest);
        assert_eq!(classify("warteg masih buka?"), Intent::StatusRequest);
    }

    #[test]
    fn test_recommendation_requires_short_and_foodless() {
        assert_eq!(classify("recommend me something"), Intent::RecommendationRequest);
        // mentioning "food" means the buyer named a domain, so search instead
        assert!(matches!(classify("recommend me some food"), Intent::Search(_)));
        let long = "recommend me something nice for a rainy day with friends please";
        assert!(matches!(classify(long), Intent::Search(_)));
    }

    #[test]
    fn test_popular_shortcut() {
        assert_eq!(classify("what's popular?"), Intent::PopularRequest);
        assert_eq!(classify("menu favorit"), Intent::PopularRequest);
    }

    #[test]
    fn test_help_and_thanks() {
        assert_eq!(classify("help"), Intent::Help);
        assert_eq!(classify("show menu please"), Intent::Help);
        assert_eq!(classify("thank you!"), Intent::Thanks);
        assert_eq!(classify("makasih banyak"), Intent::Thanks);
    }

    #[test]
    fn test_search_sort_modifiers() {
        assert_eq!(
            classify("nasi goreng under 20k"),
            Intent::Search(SearchIntent::default())
        );
        assert_eq!(
            classify("fastest noodle"),
            Intent::Search(SearchIntent { by_rating: false, by_speed: true })
        );
        assert_eq!(
            classify("top rated pasta"),
            Intent::Search(SearchIntent { by_rating: true, by_speed: false })
        );
    }
}
