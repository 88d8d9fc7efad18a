use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::synonyms;

/// Tags plus an optional price ceiling extracted from one free-text message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    pub tags: HashSet<String>,
    pub max_price: Option<i32>,
}

/// "at most N" spellings: `under 20k`, `max 15`, `dibawah 20rb`, `budget 25`,
/// `< 30000`. Only the first match counts.
static PRICE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:under|max|dibawah|budget|<)\s*(\d+)\s*(k|rb|ribu)?\b")
        .expect("price pattern compiles")
});

/// Bare literals below this are read as thousands of rupiah.
const THOUSANDS_THRESHOLD: i32 = 500;

/// Tokenizes a raw buyer message into canonical tags and runs the price
/// pass. Empty input yields an empty tag set; the search layer decides what
/// that means.
pub fn parse(raw: &str) -> ParsedQuery {
    let lower = raw.to_lowercase();
    let tags = lower
        .split(|c: char| c.is_whitespace() || matches!(c, ',' | '+' | '&' | '/'))
        .filter(|t| !t.is_empty())
        .map(|t| synonyms::normalize(t).to_string())
        .collect();
    ParsedQuery {
        tags,
        max_price: extract_max_price(&lower),
    }
}

/// First price-ceiling pattern wins; no match means no ceiling. An explicit
/// thousand marker (`k`/`rb`/`ribu`) always scales; bare literals below 500
/// scale too.
pub fn extract_max_price(lower: &str) -> Option<i32> {
    let caps = PRICE_RE.captures(lower)?;
    let value: i32 = caps[1].parse().ok()?;
    if caps.get(2).is_some() || value < THOUSANDS_THRESHOLD {
        Some(value.saturating_mul(1000))
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(parsed: &ParsedQuery) -> Vec<&str> {
        parsed.tags.iter().map(|s| s.as_str()).collect()
    }

    #[test]
    fn test_tokens_are_normalized_and_deduplicated() {
        let parsed = parse("Nasi goreng, pedas + pedas");
        assert!(tags(&parsed).contains(&"rice"));
        assert!(tags(&parsed).contains(&"fried"));
        assert!(tags(&parsed).contains(&"spicy"));
        assert_eq!(parsed.tags.iter().filter(|t| *t == "spicy").count(), 1);
    }

    #[test]
    fn test_delimiters_and_empty_segments() {
        let parsed = parse("sweet,,&  + sour/cold");
        assert_eq!(parsed.tags.len(), 3);
        assert!(parsed.tags.contains("sweet"));
        assert!(parsed.tags.contains("sour"));
        assert!(parsed.tags.contains("cold"));
    }

    #[test]
    fn test_empty_query_yields_empty_tag_set() {
        let parsed = parse("");
        assert!(parsed.tags.is_empty());
        assert!(parsed.max_price.is_none());
    }

    #[test]
    fn test_price_suffix_scales_to_thousands() {
        assert_eq!(extract_max_price("nasi goreng under 20k"), Some(20000));
        assert_eq!(extract_max_price("dibawah 15rb"), Some(15000));
        assert_eq!(extract_max_price("budget 25 ribu"), Some(25000));
    }

    #[test]
    fn test_bare_small_literal_scales() {
        assert_eq!(extract_max_price("under 20"), Some(20000));
        assert_eq!(extract_max_price("max 499"), Some(499000));
    }

    #[test]
    fn test_large_literal_is_taken_verbatim() {
        assert_eq!(extract_max_price("under 20000"), Some(20000));
        assert_eq!(extract_max_price("< 500"), Some(500));
    }

    #[test]
    fn test_first_match_wins_and_absence_is_none() {
        assert_eq!(extract_max_price("under 10k or max 50k"), Some(10000));
        assert_eq!(extract_max_price("spicy korean food"), None);
    }
}
