//! Flower repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use fleura_core::error::{AppError, ErrorKind};
use fleura_core::result::AppResult;
use fleura_core::traits::Repository;
use fleura_entity::flower::{CreateFlower, Flower, UpdateFlower};

/// Repository for flower CRUD and storefront queries.
#[derive(Debug, Clone)]
pub struct FlowerRepository {
    pool: PgPool,
}

impl FlowerRepository {
    /// Create a new flower repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List flowers visible in the storefront.
    pub async fn find_visible(&self) -> AppResult<Vec<Flower>> {
        sqlx::query_as::<_, Flower>(
            "SELECT * FROM flowers WHERE is_visible = TRUE ORDER BY name ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list flowers", e))
    }

    /// Batch-fetch flowers by id. Ids missing from the table are simply
    /// absent from the result; the caller decides what a gap means.
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Flower>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, Flower>("SELECT * FROM flowers WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch flowers", e))
    }
}

#[async_trait]
impl Repository<Flower, CreateFlower, UpdateFlower> for FlowerRepository {
    async fn find_all(&self) -> AppResult<Vec<Flower>> {
        sqlx::query_as::<_, Flower>("SELECT * FROM flowers ORDER BY name ASC, id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list flowers", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Flower>> {
        sqlx::query_as::<_, Flower>("SELECT * FROM flowers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find flower", e))
    }

    async fn create(&self, data: &CreateFlower) -> AppResult<Flower> {
        sqlx::query_as::<_, Flower>(
            "INSERT INTO flowers (category_id, name, description, price_cents, file_url, \
             file_path, is_visible) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(data.category_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price_cents)
        .bind(&data.media.file_url)
        .bind(&data.media.file_path)
        .bind(data.is_visible)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create flower", e))
    }

    async fn update(&self, id: Uuid, data: &UpdateFlower) -> AppResult<Flower> {
        sqlx::query_as::<_, Flower>(
            "UPDATE flowers SET category_id = $2, name = $3, description = $4, \
             price_cents = $5, file_url = $6, file_path = $7, is_visible = $8, \
             updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.category_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price_cents)
        .bind(&data.media.file_url)
        .bind(&data.media.file_path)
        .bind(data.is_visible)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update flower", e))?
        .ok_or_else(|| AppError::not_found(format!("Flower {id} not found")))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM flowers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete flower", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM flowers")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count flowers", e)
            })?;
        Ok(count as u64)
    }
}
