//! Category admin CRUD with input validation.

use std::sync::Arc;

use tracing::info;

use fleura_core::error::AppError;
use fleura_core::result::AppResult;
use fleura_core::traits::Repository;
use fleura_core::types::uuid::parse_uuid;
use fleura_database::repositories::category::CategoryRepository;
use fleura_entity::category::{Category, CreateCategory, UpdateCategory};

/// Manages category CRUD on behalf of the admin surface.
#[derive(Clone)]
pub struct CategoryAdminService {
    /// Category repository.
    category_repo: Arc<CategoryRepository>,
}

/// Request to create or replace a category.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CategoryRequest {
    /// Display name.
    pub name: String,
    /// Description shown on category pages.
    pub description: Option<String>,
    /// Sort position in navigation.
    #[serde(default)]
    pub position: i32,
}

impl CategoryAdminService {
    /// Creates a new category admin service.
    pub fn new(category_repo: Arc<CategoryRepository>) -> Self {
        Self { category_repo }
    }

    /// Creates a new category.
    pub async fn create_category(&self, req: CategoryRequest) -> AppResult<Category> {
        validate(&req)?;

        let category = self
            .category_repo
            .create(&CreateCategory {
                name: req.name,
                description: req.description,
                position: req.position,
            })
            .await?;

        info!(category_id = %category.id, name = %category.name, "Category created");
        Ok(category)
    }

    /// Updates an existing category.
    pub async fn update_category(&self, raw_id: &str, req: CategoryRequest) -> AppResult<Category> {
        let id = parse_uuid(raw_id)?;
        validate(&req)?;

        let category = self
            .category_repo
            .update(
                id,
                &UpdateCategory {
                    name: req.name,
                    description: req.description,
                    position: req.position,
                },
            )
            .await?;

        info!(category_id = %id, "Category updated");
        Ok(category)
    }

    /// Deletes a category. Flowers and bouquets assigned to it fall back to
    /// no category.
    pub async fn delete_category(&self, raw_id: &str) -> AppResult<()> {
        let id = parse_uuid(raw_id)?;

        if !self.category_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Category {id} not found")));
        }

        info!(category_id = %id, "Category deleted");
        Ok(())
    }
}

fn validate(req: &CategoryRequest) -> AppResult<()> {
    if req.name.trim().is_empty() {
        return Err(AppError::validation("Category name cannot be empty"));
    }
    Ok(())
}
