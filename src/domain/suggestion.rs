//! Suggestion Entity
//!
//! A user-submitted improvement idea, optionally illustrated. Created
//! once via submission, never edited; the collection is only ever
//! cleared wholesale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};
use super::menu_item::Category;

/// A submitted suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Unique identifier, derived from the submission timestamp (millis)
    pub id: i64,
    /// Suggested category
    #[serde(rename = "type")]
    pub kind: Category,
    pub title: String,
    pub details: String,
    /// Optional embedded illustration (data URL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Submission time, ISO text in the persisted document
    pub date: DateTime<Utc>,
}

impl Entity for Suggestion {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Input for a new suggestion submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSuggestion {
    #[serde(rename = "type")]
    pub kind: Category,
    pub title: String,
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl NewSuggestion {
    pub fn new(kind: Category, title: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            details: details.into(),
            image: None,
        }
    }

    pub fn with_image(
        kind: Category,
        title: impl Into<String>,
        details: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            details: details.into(),
            image: Some(image.into()),
        }
    }

    /// Category, title and details are all required
    pub fn validate(&self) -> DomainResult<()> {
        if self.kind.as_str().trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "suggestion category is required".to_string(),
            ));
        }
        if self.title.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "suggestion title is required".to_string(),
            ));
        }
        if self.details.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "suggestion details are required".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_suggestion_validation() {
        let ok = NewSuggestion::new(Category::Snacks, "Tacos", "Add tacos");
        assert!(ok.validate().is_ok());

        let blank_title = NewSuggestion::new(Category::Snacks, "  ", "Add tacos");
        assert!(matches!(
            blank_title.validate(),
            Err(DomainError::InvalidInput(_))
        ));

        let blank_details = NewSuggestion::new(Category::Snacks, "Tacos", "");
        assert!(blank_details.validate().is_err());

        let blank_kind = NewSuggestion::new(Category::Other(String::new()), "Tacos", "Add tacos");
        assert!(blank_kind.validate().is_err());
    }

    #[test]
    fn test_suggestion_wire_shape() {
        let suggestion = Suggestion {
            id: 1700000000000,
            kind: Category::Other("food".to_string()),
            title: "Tacos".to_string(),
            details: "Add tacos".to_string(),
            image: None,
            date: Utc::now(),
        };

        let json = serde_json::to_string(&suggestion).expect("Failed to serialize");
        // Category travels under the "type" key; an absent image is omitted
        assert!(json.contains(r#""type":"food""#));
        assert!(!json.contains("image"));

        let back: Suggestion = serde_json::from_str(&json).expect("Failed to parse");
        assert_eq!(back, suggestion);
    }
}
