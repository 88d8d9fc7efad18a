//! Demo catalog: seven sellers across the categories, with the tag sets the
//! query parser's synonym table maps onto.

use crate::menu::MenuItem;
use crate::seller::{Seller, StoreCategory};
use crate::Catalog;

/// Builds the demo catalog. The seed is static and id-unique by
/// construction, so validation failure here is a programming error.
pub fn demo_catalog() -> Catalog {
    Catalog::new(demo_sellers()).expect("demo catalog has unique ids")
}

fn demo_sellers() -> Vec<Seller> {
    vec![
        Seller::new(
            "S001",
            "Warung Padang Sederhana",
            StoreCategory::Padang,
            4.7,
            0.3,
            vec![
                MenuItem::new("S001-1", "Nasi Rendang", 18000, 4.8, 40, "food",
                    &["spicy", "savory", "beef", "indonesian", "padang", "nasi", "rice"])
                    .best_seller(),
                MenuItem::new("S001-2", "Nasi Ayam Bakar", 17000, 4.6, 35, "food",
                    &["savory", "chicken", "indonesian", "padang", "nasi", "rice", "grilled"]),
                MenuItem::new("S001-3", "Gulai Ikan", 15000, 4.5, 30, "food",
                    &["spicy", "fish", "indonesian", "padang", "soup"]),
                MenuItem::new("S001-4", "Sayur Nangka", 8000, 4.3, 20, "food",
                    &["savory", "vegetables", "indonesian", "padang", "vegetarian", "cheap"]),
            ],
        ),
        Seller::new(
            "S002",
            "Korean Street Food",
            StoreCategory::Korean,
            4.6,
            1.2,
            vec![
                MenuItem::new("S002-1", "Tteokbokki", 25000, 4.7, 20, "food",
                    &["spicy", "sweet", "korean", "street food", "rice cake"])
                    .recommended(),
                MenuItem::new("S002-2", "Korean Fried Chicken", 35000, 4.8, 25, "food",
                    &["spicy", "sweet", "korean", "chicken", "crispy", "fried"])
                    .best_seller(),
                MenuItem::new("S002-3", "Bibimbap", 28000, 4.6, 20, "food",
                    &["savory", "korean", "rice", "vegetables", "egg", "healthy"]),
                MenuItem::new("S002-4", "Ramyeon", 22000, 4.5, 15, "food",
                    &["spicy", "korean", "noodle", "soup", "hot", "mie"]),
                MenuItem::new("S002-5", "Kimchi Fried Rice", 25000, 4.7, 18, "food",
                    &["spicy", "korean", "rice", "kimchi", "savory"]),
            ],
        ),
        Seller::new(
            "S003",
            "Burger & Pasta Station",
            StoreCategory::FastFood,
            4.4,
            0.9,
            vec![
                MenuItem::new("S003-1", "Beef Burger", 28000, 4.5, 12, "food",
                    &["savory", "beef", "burger", "western", "cheese", "fast"])
                    .best_seller(),
                MenuItem::new("S003-2", "Chicken Burger", 25000, 4.4, 10, "food",
                    &["savory", "chicken", "burger", "western", "cheese", "fast"]),
                MenuItem::new("S003-3", "Carbonara Pasta", 30000, 4.6, 15, "food",
                    &["savory", "pasta", "western", "creamy", "cheese", "italian"]),
                MenuItem::new("S003-4", "French Fries", 15000, 4.3, 8, "food",
                    &["salty", "savory", "potato", "western", "crispy", "fast", "cheap"]),
                MenuItem::new("S003-5", "Aglio Olio", 27000, 4.5, 15, "food",
                    &["savory", "pasta", "western", "garlic", "italian"]),
            ],
        ),
        Seller::new(
            "S004",
            "Green Bowl & Salad",
            StoreCategory::Healthy,
            4.8,
            1.5,
            vec![
                MenuItem::new("S004-1", "Quinoa Buddha Bowl", 35000, 4.9, 15, "food",
                    &["healthy", "vegetarian", "quinoa", "vegetables", "fresh", "organic"])
                    .recommended(),
                MenuItem::new("S004-2", "Avocado Toast", 28000, 4.7, 8, "food",
                    &["healthy", "vegetarian", "bread", "avocado", "fresh", "breakfast"]),
                MenuItem::new("S004-3", "Greek Salad", 25000, 4.6, 10, "food",
                    &["healthy", "vegetarian", "salad", "fresh", "vegetables", "cheese"]),
                MenuItem::new("S004-4", "Smoothie Bowl", 32000, 4.8, 10, "food",
                    &["healthy", "sweet", "fruit", "fresh", "cold", "vegetarian"]),
            ],
        ),
        Seller::new(
            "S005",
            "Warteg Bahagia",
            StoreCategory::Warteg,
            4.3,
            0.2,
            vec![
                MenuItem::new("S005-1", "Nasi Goreng", 15000, 4.5, 20, "food",
                    &["savory", "fried", "rice", "indonesian", "nasi", "cheap", "egg"])
                    .best_seller(),
                MenuItem::new("S005-2", "Nasi Goreng Seafood", 18000, 4.6, 25, "food",
                    &["savory", "seafood", "fried", "rice", "indonesian", "nasi"]),
                MenuItem::new("S005-3", "Mie Goreng", 13000, 4.4, 18, "food",
                    &["savory", "fried", "noodle", "indonesian", "mie", "cheap"]),
                MenuItem::new("S005-4", "Soto Ayam", 15000, 4.5, 20, "food",
                    &["savory", "chicken", "soup", "indonesian", "hot"]),
                MenuItem::new("S005-5", "Tempe Orek", 8000, 4.2, 10, "food",
                    &["savory", "vegetarian", "indonesian", "cheap", "tempeh"]),
            ],
        ),
        Seller::new(
            "S006",
            "Sweet Dessert House",
            StoreCategory::Dessert,
            4.9,
            1.5,
            vec![
                MenuItem::new("S006-1", "Chocolate Lava Cake", 35000, 4.9, 20, "dessert",
                    &["sweet", "chocolate", "cake", "warm", "rich"])
                    .best_seller(),
                MenuItem::new("S006-2", "Tiramisu", 30000, 4.8, 15, "dessert",
                    &["sweet", "coffee", "cake", "italian", "creamy", "cold"]),
                MenuItem::new("S006-3", "Strawberry Cheesecake", 32000, 4.9, 15, "dessert",
                    &["sweet", "fruit", "strawberry", "creamy", "cold"]),
                MenuItem::new("S006-4", "Ice Cream Sundae", 25000, 4.7, 5, "dessert",
                    &["sweet", "cold", "ice cream", "chocolate", "vanilla", "fast"]),
            ],
        ),
        Seller::new(
            "S007",
            "Warung Es Teh Indonesia",
            StoreCategory::Drinks,
            4.7,
            0.5,
            vec![
                MenuItem::new("S007-1", "Es Teh Manis", 5000, 4.7, 5, "drink",
                    &["sweet", "ice", "cold", "tea", "indonesian", "cheap", "refreshing"])
                    .best_seller(),
                MenuItem::new("S007-2", "Es Jeruk", 8000, 4.6, 5, "drink",
                    &["sweet", "sour", "ice", "cold", "citrus", "refreshing", "cheap"]),
                MenuItem::new("S007-3", "Es Kelapa Muda", 12000, 4.8, 5, "drink",
                    &["sweet", "ice", "cold", "coconut", "refreshing", "indonesian"])
                    .recommended(),
                MenuItem::new("S007-4", "Thai Tea", 12000, 4.7, 5, "drink",
                    &["sweet", "ice", "cold", "tea", "milk", "creamy"]),
                MenuItem::new("S007-5", "Es Kepal Milo", 15000, 4.8, 8, "drink",
                    &["sweet", "ice", "cold", "chocolate", "milo", "creamy"]),
            ],
        ),
    ]
}
