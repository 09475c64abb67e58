//! Bouquet entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::media::MediaItem;

/// A composed bouquet offered in the catalog.
///
/// Which flowers make up the bouquet, and in what quantities, lives in the
/// `bouquet_flowers` join table ([`super::BouquetFlower`]).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Bouquet {
    /// Unique bouquet identifier.
    pub id: Uuid,
    /// Category this bouquet belongs to, if any.
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
    /// Whether the bouquet is flagged for promotional display.
    pub is_featured: bool,
    /// When the bouquet was created.
    pub created_at: DateTime<Utc>,
    /// When the bouquet was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new bouquet row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBouquet {
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
    /// Promotional flag.
    #[serde(default)]
    pub is_featured: bool,
}

/// Full-row update for an existing bouquet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBouquet {
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
    /// Promotional flag.
    #[serde(default)]
    pub is_featured: bool,
}
