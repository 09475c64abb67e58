//! Bouquet admin CRUD with composition validation.
//!
//! The write side enforces composition integrity: every referenced flower
//! must exist at write time. Races with concurrent deletes are caught by
//! the join table's foreign key and surface as the same validation failure.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use fleura_core::error::AppError;
use fleura_core::result::AppResult;
use fleura_core::traits::Repository;
use fleura_core::types::uuid::parse_uuid;
use fleura_database::repositories::bouquet::BouquetRepository;
use fleura_database::repositories::category::CategoryRepository;
use fleura_database::repositories::flower::FlowerRepository;
use fleura_database::repositories::tag::TagRepository;
use fleura_entity::bouquet::{Bouquet, CompositionEntry, CreateBouquet, UpdateBouquet};
use fleura_entity::media::MediaItem;

/// Manages bouquet CRUD on behalf of the admin surface.
#[derive(Clone)]
pub struct BouquetAdminService {
    /// Bouquet repository.
    bouquet_repo: Arc<BouquetRepository>,
    /// Flower repository, for composition checks.
    flower_repo: Arc<FlowerRepository>,
    /// Category repository, for foreign-key checks.
    category_repo: Arc<CategoryRepository>,
    /// Tag repository, for tag assignment.
    tag_repo: Arc<TagRepository>,
}

/// Request to create or replace a bouquet, composition included.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BouquetRequest {
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
    /// Composition entries in display order.
    #[serde(default)]
    pub composition: Vec<CompositionEntry>,
    /// Tags to attach; replaces the existing set.
    #[serde(default)]
    pub tag_ids: Vec<Uuid>,
}

impl BouquetAdminService {
    /// Creates a new bouquet admin service.
    pub fn new(
        bouquet_repo: Arc<BouquetRepository>,
        flower_repo: Arc<FlowerRepository>,
        category_repo: Arc<CategoryRepository>,
        tag_repo: Arc<TagRepository>,
    ) -> Self {
        Self {
            bouquet_repo,
            flower_repo,
            category_repo,
            tag_repo,
        }
    }

    /// Lists all bouquets, featured or not.
    pub async fn list_bouquets(&self) -> AppResult<Vec<Bouquet>> {
        self.bouquet_repo.find_all().await
    }

    /// Creates a new bouquet together with its composition.
    pub async fn create_bouquet(&self, req: BouquetRequest) -> AppResult<Bouquet> {
        self.validate(&req).await?;

        let bouquet = self
            .bouquet_repo
            .create(&CreateBouquet {
                category_id: req.category_id,
                name: req.name,
                description: req.description,
                price_cents: req.price_cents,
                media: req.media,
                is_featured: req.is_featured,
            })
            .await?;

        self.bouquet_repo
            .replace_composition(bouquet.id, &req.composition)
            .await?;
        self.tag_repo
            .set_for_bouquet(bouquet.id, &req.tag_ids)
            .await?;

        info!(
            bouquet_id = %bouquet.id,
            name = %bouquet.name,
            flowers = req.composition.len(),
            "Bouquet created"
        );
        Ok(bouquet)
    }

    /// Updates an existing bouquet and replaces its composition.
    pub async fn update_bouquet(&self, raw_id: &str, req: BouquetRequest) -> AppResult<Bouquet> {
        let id = parse_uuid(raw_id)?;
        self.validate(&req).await?;

        let bouquet = self
            .bouquet_repo
            .update(
                id,
                &UpdateBouquet {
                    category_id: req.category_id,
                    name: req.name,
                    description: req.description,
                    price_cents: req.price_cents,
                    media: req.media,
                    is_featured: req.is_featured,
                },
            )
            .await?;

        self.bouquet_repo
            .replace_composition(id, &req.composition)
            .await?;
        self.tag_repo.set_for_bouquet(id, &req.tag_ids).await?;

        info!(bouquet_id = %id, flowers = req.composition.len(), "Bouquet updated");
        Ok(bouquet)
    }

    /// Deletes a bouquet; composition rows cascade.
    pub async fn delete_bouquet(&self, raw_id: &str) -> AppResult<()> {
        let id = parse_uuid(raw_id)?;

        if !self.bouquet_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Bouquet {id} not found")));
        }

        info!(bouquet_id = %id, "Bouquet deleted");
        Ok(())
    }

    async fn validate(&self, req: &BouquetRequest) -> AppResult<()> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Bouquet name cannot be empty"));
        }
        if req.price_cents < 0 {
            return Err(AppError::validation("Price cannot be negative"));
        }
        if let Some(category_id) = req.category_id {
            if !self.category_repo.exists(category_id).await? {
                return Err(AppError::validation(format!(
                    "Category {category_id} does not exist"
                )));
            }
        }

        let mut seen = HashSet::new();
        for entry in &req.composition {
            if entry.quantity <= 0 {
                return Err(AppError::validation(
                    "Composition quantities must be positive",
                ));
            }
            if !seen.insert(entry.flower_id) {
                return Err(AppError::validation(format!(
                    "Flower {} appears twice in the composition",
                    entry.flower_id
                )));
            }
        }

        let requested: Vec<Uuid> = req.composition.iter().map(|e| e.flower_id).collect();
        let found = self.flower_repo.find_by_ids(&requested).await?;
        if found.len() != requested.len() {
            let existing: HashSet<Uuid> = found.iter().map(|f| f.id).collect();
            let missing: Vec<String> = requested
                .iter()
                .filter(|id| !existing.contains(id))
                .map(Uuid::to_string)
                .collect();
            return Err(AppError::validation(format!(
                "Composition references unknown flowers: {}",
                missing.join(", ")
            )));
        }

        Ok(())
    }
}
