//! Category repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use fleura_core::error::{AppError, ErrorKind};
use fleura_core::result::AppResult;
use fleura_core::traits::Repository;
use fleura_entity::category::{Category, CreateCategory, UpdateCategory};

/// Repository for category CRUD.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Check whether a category exists, used as a foreign-key guard by the
    /// admin services.
    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let found: Option<i32> = sqlx::query_scalar("SELECT 1 FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check category", e)
            })?;
        Ok(found.is_some())
    }
}

#[async_trait]
impl Repository<Category, CreateCategory, UpdateCategory> for CategoryRepository {
    async fn find_all(&self) -> AppResult<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            "SELECT * FROM categories ORDER BY position ASC, name ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list categories", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find category", e))
    }

    async fn create(&self, data: &CreateCategory) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name, description, position) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.position)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("categories_name_key") =>
            {
                AppError::conflict(format!("Category '{}' already exists", data.name))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create category", e),
        })
    }

    async fn update(&self, id: Uuid, data: &UpdateCategory) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "UPDATE categories SET name = $2, description = $3, position = $4, \
             updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.position)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("categories_name_key") =>
            {
                AppError::conflict(format!("Category '{}' already exists", data.name))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update category", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Category {id} not found")))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete category", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count categories", e)
            })?;
        Ok(count as u64)
    }
}
