//! Flower admin CRUD with input validation.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use fleura_core::error::AppError;
use fleura_core::result::AppResult;
use fleura_core::traits::Repository;
use fleura_core::types::uuid::parse_uuid;
use fleura_database::repositories::category::CategoryRepository;
use fleura_database::repositories::flower::FlowerRepository;
use fleura_database::repositories::tag::TagRepository;
use fleura_entity::flower::{CreateFlower, Flower, UpdateFlower};
use fleura_entity::media::MediaItem;

/// Manages flower CRUD on behalf of the admin surface.
#[derive(Clone)]
pub struct FlowerAdminService {
    /// Flower repository.
    flower_repo: Arc<FlowerRepository>,
    /// Category repository, for foreign-key checks.
    category_repo: Arc<CategoryRepository>,
    /// Tag repository, for tag assignment.
    tag_repo: Arc<TagRepository>,
}

/// Request to create or replace a flower.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FlowerRequest {
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
    #[serde(default = "default_visible")]
    pub is_visible: bool,
    /// Tags to attach; replaces the existing set.
    #[serde(default)]
    pub tag_ids: Vec<Uuid>,
}

fn default_visible() -> bool {
    true
}

impl FlowerAdminService {
    /// Creates a new flower admin service.
    pub fn new(
        flower_repo: Arc<FlowerRepository>,
        category_repo: Arc<CategoryRepository>,
        tag_repo: Arc<TagRepository>,
    ) -> Self {
        Self {
            flower_repo,
            category_repo,
            tag_repo,
        }
    }

    /// Lists all flowers, including hidden ones.
    pub async fn list_flowers(&self) -> AppResult<Vec<Flower>> {
        self.flower_repo.find_all().await
    }

    /// Creates a new flower.
    pub async fn create_flower(&self, req: FlowerRequest) -> AppResult<Flower> {
        self.validate(&req).await?;

        let flower = self
            .flower_repo
            .create(&CreateFlower {
                category_id: req.category_id,
                name: req.name,
                description: req.description,
                price_cents: req.price_cents,
                media: req.media,
                is_visible: req.is_visible,
            })
            .await?;

        self.tag_repo
            .set_for_flower(flower.id, &req.tag_ids)
            .await?;

        info!(flower_id = %flower.id, name = %flower.name, "Flower created");
        Ok(flower)
    }

    /// Updates an existing flower.
    pub async fn update_flower(&self, raw_id: &str, req: FlowerRequest) -> AppResult<Flower> {
        let id = parse_uuid(raw_id)?;
        self.validate(&req).await?;

        let flower = self
            .flower_repo
            .update(
                id,
                &UpdateFlower {
                    category_id: req.category_id,
                    name: req.name,
                    description: req.description,
                    price_cents: req.price_cents,
                    media: req.media,
                    is_visible: req.is_visible,
                },
            )
            .await?;

        self.tag_repo.set_for_flower(id, &req.tag_ids).await?;

        info!(flower_id = %id, "Flower updated");
        Ok(flower)
    }

    /// Deletes a flower.
    pub async fn delete_flower(&self, raw_id: &str) -> AppResult<()> {
        let id = parse_uuid(raw_id)?;

        if !self.flower_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Flower {id} not found")));
        }

        info!(flower_id = %id, "Flower deleted");
        Ok(())
    }

    async fn validate(&self, req: &FlowerRequest) -> AppResult<()> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Flower name cannot be empty"));
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
        Ok(())
    }
}
