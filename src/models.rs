use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use utoipa::ToSchema;
use uuid::Uuid;

/// A single wish in the wishlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Wish {
    /// Unique identifier for the wish, assigned on creation
    #[schema(example = "018f6b2e-4c1a-7d3e-9a5b-2f1c0d9e8b7a")]
    pub id: Uuid,

    /// Short name of the wish
    #[schema(example = "Bike")]
    pub name: String,

    /// What exactly is wished for
    #[schema(example = "Red mountain bike")]
    pub description: String,

    /// When the wish was created
    #[schema(example = "2025-07-19T17:00:00Z")]
    pub created_at: DateTime<Utc>,

    /// When the wish was last updated, `null` until the first update
    #[schema(example = "2025-07-20T09:30:00Z")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Wish {
    /// Builds a fresh record with a time-ordered id and the current timestamp.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            description: description.into(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// Request payload for creating or updating a wish
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct WishPayload {
    /// Short name of the wish
    #[schema(example = "Bike")]
    #[serde(default)]
    pub name: String,

    /// What exactly is wished for
    #[schema(example = "Red mountain bike")]
    #[serde(default)]
    pub description: String,
}

impl WishPayload {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_fields(&self.name, &self.description)
    }
}

/// Both fields must be non-empty. Values are stored exactly as sent.
pub fn validate_fields(name: &str, description: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name field is required".to_string());
    }

    if description.is_empty() {
        return Err("description field is required".to_string());
    }

    Ok(())
}
