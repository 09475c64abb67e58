//! Assembled catalog views returned to route handlers.
//!
//! Views carry resolved display URLs instead of raw media references, so
//! callers never see a bare `file_path`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleura_entity::bouquet::Bouquet;
use fleura_entity::flower::Flower;
use fleura_entity::tag::Tag;
use fleura_media::MediaResolver;

/// A flower as listed in the storefront, media already resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowerSummary {
    /// Flower identifier.
    pub id: Uuid,
    /// Category assignment.
    pub category_id: Option<Uuid>,
    /// Display name.
    pub name: String,
    /// Product description.
    pub description: Option<String>,
    /// Price in minor currency units.
    pub price_cents: i64,
    /// Resolved display URL, never a bare storage path.
    pub image_url: String,
}

impl FlowerSummary {
    /// Build a summary from a row, resolving its media reference.
    pub fn from_entity(flower: &Flower, resolver: &dyn MediaResolver) -> Self {
        Self {
            id: flower.id,
            category_id: flower.category_id,
            name: flower.name.clone(),
            description: flower.description.clone(),
            price_cents: flower.price_cents,
            image_url: resolver.resolve(Some(&flower.media)),
        }
    }
}

/// A flower product page: the summary plus its tag labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowerDetail {
    /// The flower itself.
    #[serde(flatten)]
    pub flower: FlowerSummary,
    /// Tags attached to the flower.
    pub tags: Vec<Tag>,
}

/// A bouquet as listed in the storefront, media already resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BouquetSummary {
    /// Bouquet identifier.
    pub id: Uuid,
    /// Category assignment.
    pub category_id: Option<Uuid>,
    /// Display name.
    pub name: String,
    /// Product description.
    pub description: Option<String>,
    /// Price in minor currency units.
    pub price_cents: i64,
    /// Resolved display URL.
    pub image_url: String,
    /// Promotional flag.
    pub is_featured: bool,
}

impl BouquetSummary {
    /// Build a summary from a row, resolving its media reference.
    pub fn from_entity(bouquet: &Bouquet, resolver: &dyn MediaResolver) -> Self {
        Self {
            id: bouquet.id,
            category_id: bouquet.category_id,
            name: bouquet.name.clone(),
            description: bouquet.description.clone(),
            price_cents: bouquet.price_cents,
            image_url: resolver.resolve(Some(&bouquet.media)),
            is_featured: bouquet.is_featured,
        }
    }
}

/// One flower inside a bouquet view, with its quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BouquetFlowerView {
    /// The referenced flower.
    pub flower_id: Uuid,
    /// Flower display name.
    pub name: String,
    /// Flower unit price in minor currency units.
    pub price_cents: i64,
    /// Resolved display URL.
    pub image_url: String,
    /// How many stems of this flower the bouquet contains.
    pub quantity: i32,
}

/// A bouquet enriched with its resolved, ordered flower list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BouquetWithFlowers {
    /// The bouquet itself.
    #[serde(flatten)]
    pub bouquet: BouquetSummary,
    /// Composition in display order.
    pub flowers: Vec<BouquetFlowerView>,
    /// Tags attached to the bouquet.
    pub tags: Vec<Tag>,
}
