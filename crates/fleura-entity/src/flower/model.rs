//! Flower entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::media::MediaItem;

/// A single flower offered in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Flower {
    /// Unique flower identifier.
    pub id: Uuid,
    /// Category this flower belongs to, if any.
    pub category_id: Option<Uuid>,
    /// Display name.
    pub name: String,
    /// Description shown on the product page.
    pub description: Option<String>,
    /// Price in minor currency units.
    pub price_cents: i64,
    /// Image reference.
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub media: MediaItem,
    /// Whether the flower is shown in the storefront.
    pub is_visible: bool,
    /// When the flower was created.
    pub created_at: DateTime<Utc>,
    /// When the flower was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new flower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFlower {
    /// Category assignment.
    pub category_id: Option<Uuid>,
    /// Display name.
    pub name: String,
    /// Product description.
    pub description: Option<String>,
    /// Price in minor currency units.
    pub price_cents: i64,
    /// Image reference.
    #[serde(flatten)]
    pub media: MediaItem,
    /// Storefront visibility.
    pub is_visible: bool,
}

/// Full-row update for an existing flower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFlower {
    /// Category assignment.
    pub category_id: Option<Uuid>,
    /// Display name.
    pub name: String,
    /// Product description.
    pub description: Option<String>,
    /// Price in minor currency units.
    pub price_cents: i64,
    /// Image reference.
    #[serde(flatten)]
    pub media: MediaItem,
    /// Storefront visibility.
    pub is_visible: bool,
}
