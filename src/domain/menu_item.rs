//! Menu Item Entity
//!
//! A purchasable food/beverage entry with a signed vote counter and
//! attached reviews.

use serde::{Deserialize, Deserializer, Serialize};

use super::entity::Entity;

/// Menu category
///
/// Open set: the known categories plus whatever labels an imported
/// dataset carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    Beverages,
    Snacks,
    /// A label outside the known set, preserved verbatim
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Breakfast => "breakfast",
            Category::Lunch => "lunch",
            Category::Dinner => "dinner",
            Category::Beverages => "beverages",
            Category::Snacks => "snacks",
            Category::Other(label) => label,
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        match label.as_str() {
            "breakfast" => Category::Breakfast,
            "lunch" => Category::Lunch,
            "dinner" => Category::Dinner,
            "beverages" => Category::Beverages,
            "snacks" => Category::Snacks,
            _ => Category::Other(label),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vote direction on a menu item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    /// Keep this item on the menu (+1)
    Up,
    /// Remove this item from the menu (-1)
    Down,
}

impl Vote {
    pub fn delta(self) -> i64 {
        match self {
            Vote::Up => 1,
            Vote::Down => -1,
        }
    }
}

/// A text review attached to a menu item
///
/// Owned by its parent item; has no identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub user: String,
    pub comment: String,
}

impl Review {
    pub fn new(user: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            comment: comment.into(),
        }
    }
}

/// A purchasable menu entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique identifier
    pub id: u64,
    /// Item name
    pub name: String,
    /// Whole-unit price; fractional values in imported data are rounded
    #[serde(deserialize_with = "de_rounded_price")]
    pub price: u32,
    pub description: String,
    pub category: Category,
    /// Signed popularity counter, unbounded in both directions
    pub votes: i64,
    /// Image reference: a URL or an embedded data URL
    pub image: String,
    /// Attached reviews, oldest first
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl MenuItem {
    /// Create a new item with no votes or reviews yet
    pub fn new(
        id: u64,
        name: impl Into<String>,
        price: u32,
        description: impl Into<String>,
        category: Category,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            description: description.into(),
            category,
            votes: 0,
            image: image.into(),
            reviews: Vec::new(),
        }
    }
}

impl Entity for MenuItem {
    type Id = u64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Prices must be non-negative; fractional values round to the nearest
/// whole unit.
fn de_rounded_price<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if !raw.is_finite() || raw < 0.0 {
        return Err(serde::de::Error::custom(
            "price must be a non-negative number",
        ));
    }
    Ok(raw.round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        let known: Category = "lunch".to_string().into();
        assert_eq!(known, Category::Lunch);
        assert_eq!(known.as_str(), "lunch");

        let unknown: Category = "late-night".to_string().into();
        assert_eq!(unknown, Category::Other("late-night".to_string()));
        assert_eq!(unknown.as_str(), "late-night");
    }

    #[test]
    fn test_vote_delta() {
        assert_eq!(Vote::Up.delta(), 1);
        assert_eq!(Vote::Down.delta(), -1);
    }

    #[test]
    fn test_fractional_price_rounds_on_deserialize() {
        let json = r#"{
            "id": 1,
            "name": "Pasta",
            "price": 179.5,
            "description": "Creamy",
            "category": "lunch",
            "votes": 0,
            "image": "Pasta.png"
        }"#;
        let item: MenuItem = serde_json::from_str(json).expect("Failed to parse");
        assert_eq!(item.price, 180);
        assert!(item.reviews.is_empty());
    }

    #[test]
    fn test_negative_price_rejected() {
        let json = r#"{
            "id": 1,
            "name": "Pasta",
            "price": -5,
            "description": "Creamy",
            "category": "lunch",
            "votes": 0,
            "image": "Pasta.png"
        }"#;
        assert!(serde_json::from_str::<MenuItem>(json).is_err());
    }
}
