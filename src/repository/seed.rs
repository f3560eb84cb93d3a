//! Sample Catalog
//!
//! The fixed six-item catalog written on first run and on
//! clear-and-reset.

use crate::domain::{Category, MenuItem, Review};

/// Build the sample catalog
pub fn sample_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: 1,
            name: "Creamy Alfredo Pasta".to_string(),
            price: 180,
            description: "Creamy pasta with parmesan cheese and herbs.".to_string(),
            category: Category::Lunch,
            votes: 42,
            image: "CreamyAlfredoPasta.png".to_string(),
            reviews: vec![
                Review::new("Amit", "Really delicious, but could use more sauce."),
                Review::new("Samar", "My favorite dish in the cafeteria!"),
            ],
        },
        MenuItem {
            id: 2,
            name: "Classic Cheeseburger".to_string(),
            price: 220,
            description: "Beef patty with cheese, lettuce, and special sauce.".to_string(),
            category: Category::Lunch,
            votes: 38,
            image: "ClassicCheeseburger.png".to_string(),
            reviews: vec![Review::new("Jatin", "Always fresh and tasty.")],
        },
        MenuItem {
            id: 3,
            name: "Caesar Salad".to_string(),
            price: 150,
            description: "Fresh romaine lettuce with croutons and Caesar dressing.".to_string(),
            category: Category::Lunch,
            votes: 25,
            image: "CaesarSalad.png".to_string(),
            reviews: vec![Review::new("Tushar", "Great healthy option!")],
        },
        MenuItem {
            id: 4,
            name: "Margherita Pizza".to_string(),
            price: 160,
            description: "Classic pizza with tomato, mozzarella, and basil.".to_string(),
            category: Category::Dinner,
            votes: 51,
            image: "MargheritaPizza.png".to_string(),
            reviews: vec![
                Review::new("Gauri", "Perfect lunch option."),
                Review::new("Riya", "Could use more cheese."),
            ],
        },
        MenuItem {
            id: 5,
            name: "Berry Blast Smoothie".to_string(),
            price: 120,
            description: "Mixed berries with yogurt and honey.".to_string(),
            category: Category::Beverages,
            votes: 47,
            image: "BerryBlastSmoothie.png".to_string(),
            reviews: vec![Review::new("Mitali", "Refreshing and not too sweet.")],
        },
        MenuItem {
            id: 6,
            name: "Club Sandwich".to_string(),
            price: 140,
            description: "Triple-decker sandwich with turkey, bacon, and veggies.".to_string(),
            category: Category::Snacks,
            votes: 29,
            image: "ClubSandwich.png".to_string(),
            reviews: vec![Review::new("Anuj", "A bit dry, needs more mayo.")],
        },
    ]
}
