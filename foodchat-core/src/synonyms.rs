use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Indonesian and colloquial tokens mapped to the canonical tags the catalog
/// is seeded with.
static SYNONYMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("manis", "sweet"),
        ("pedas", "spicy"),
        ("asin", "salty"),
        ("gurih", "savory"),
        ("asam", "sour"),
        ("es", "cold"),
        ("dingin", "cold"),
        ("panas", "hot"),
        ("makanan", "food"),
        ("minuman", "drink"),
        ("nasi", "rice"),
        ("mie", "noodle"),
        ("ayam", "chicken"),
        ("sapi", "beef"),
        ("ikan", "fish"),
        ("sayur", "vegetables"),
        ("buah", "fruit"),
        ("korea", "korean"),
        ("indonesia", "indonesian"),
        ("barat", "western"),
        ("murah", "cheap"),
        ("sehat", "healthy"),
        ("cepat", "fast"),
        ("goreng", "fried"),
        ("bakar", "grilled"),
        ("sup", "soup"),
    ])
});

/// Maps a lower-cased token to its canonical tag. Total: unknown tokens pass
/// through unchanged, so new catalog tags work without a dictionary update.
pub fn normalize(token: &str) -> &str {
    SYNONYMS.get(token).copied().unwrap_or(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tokens_map_to_canonical_tags() {
        assert_eq!(normalize("pedas"), "spicy");
        assert_eq!(normalize("nasi"), "rice");
        assert_eq!(normalize("korea"), "korean");
        assert_eq!(normalize("es"), "cold");
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        assert_eq!(normalize("rendang"), "rendang");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("x99"), "x99");
    }

    #[test]
    fn test_canonical_tags_are_fixed_points() {
        assert_eq!(normalize("spicy"), "spicy");
        assert_eq!(normalize("rice"), "rice");
    }
}
