//! Tag admin CRUD with input validation.

use std::sync::Arc;

use tracing::info;

use fleura_core::error::AppError;
use fleura_core::result::AppResult;
use fleura_core::traits::Repository;
use fleura_core::types::uuid::parse_uuid;
use fleura_database::repositories::tag::TagRepository;
use fleura_entity::tag::{CreateTag, Tag, UpdateTag};

/// Manages tag CRUD on behalf of the admin surface.
#[derive(Clone)]
pub struct TagAdminService {
    /// Tag repository.
    tag_repo: Arc<TagRepository>,
}

/// Request to create or rename a tag.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TagRequest {
    /// Display label.
    pub label: String,
}

impl TagAdminService {
    /// Creates a new tag admin service.
    pub fn new(tag_repo: Arc<TagRepository>) -> Self {
        Self { tag_repo }
    }

    /// Creates a new tag.
    pub async fn create_tag(&self, req: TagRequest) -> AppResult<Tag> {
        validate(&req)?;

        let tag = self.tag_repo.create(&CreateTag { label: req.label }).await?;

        info!(tag_id = %tag.id, label = %tag.label, "Tag created");
        Ok(tag)
    }

    /// Renames an existing tag.
    pub async fn update_tag(&self, raw_id: &str, req: TagRequest) -> AppResult<Tag> {
        let id = parse_uuid(raw_id)?;
        validate(&req)?;

        let tag = self
            .tag_repo
            .update(id, &UpdateTag { label: req.label })
            .await?;

        info!(tag_id = %id, "Tag updated");
        Ok(tag)
    }

    /// Deletes a tag and its associations.
    pub async fn delete_tag(&self, raw_id: &str) -> AppResult<()> {
        let id = parse_uuid(raw_id)?;

        if !self.tag_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Tag {id} not found")));
        }

        info!(tag_id = %id, "Tag deleted");
        Ok(())
    }
}

fn validate(req: &TagRequest) -> AppResult<()> {
    if req.label.trim().is_empty() {
        return Err(AppError::validation("Tag label cannot be empty"));
    }
    Ok(())
}
