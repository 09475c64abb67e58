//! Tag repository implementation, including the many-to-many join tables
//! that associate tags with flowers and bouquets.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use fleura_core::error::{AppError, ErrorKind};
use fleura_core::result::AppResult;
use fleura_core::traits::Repository;
use fleura_entity::tag::{CreateTag, Tag, UpdateTag};

/// Repository for tag CRUD and association queries.
#[derive(Debug, Clone)]
pub struct TagRepository {
    pool: PgPool,
}

impl TagRepository {
    /// Create a new tag repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List tags attached to a flower.
    pub async fn find_for_flower(&self, flower_id: Uuid) -> AppResult<Vec<Tag>> {
        sqlx::query_as::<_, Tag>(
            "SELECT t.* FROM tags t \
             INNER JOIN flower_tags ft ON ft.tag_id = t.id \
             WHERE ft.flower_id = $1 ORDER BY t.label ASC, t.id ASC",
        )
        .bind(flower_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list flower tags", e))
    }

    /// List tags attached to a bouquet.
    pub async fn find_for_bouquet(&self, bouquet_id: Uuid) -> AppResult<Vec<Tag>> {
        sqlx::query_as::<_, Tag>(
            "SELECT t.* FROM tags t \
             INNER JOIN bouquet_tags bt ON bt.tag_id = t.id \
             WHERE bt.bouquet_id = $1 ORDER BY t.label ASC, t.id ASC",
        )
        .bind(bouquet_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bouquet tags", e))
    }

    /// Replace the tag set attached to a flower.
    pub async fn set_for_flower(&self, flower_id: Uuid, tag_ids: &[Uuid]) -> AppResult<()> {
        sqlx::query("DELETE FROM flower_tags WHERE flower_id = $1")
            .bind(flower_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clear flower tags", e)
            })?;

        if tag_ids.is_empty() {
            return Ok(());
        }

        sqlx::query(
            "INSERT INTO flower_tags (flower_id, tag_id) \
             SELECT $1, tag_id FROM UNNEST($2::uuid[]) AS t(tag_id)",
        )
        .bind(flower_id)
        .bind(tag_ids)
        .execute(&self.pool)
        .await
        .map_err(|e| map_tag_link_error(e, "flower"))?;

        Ok(())
    }

    /// Replace the tag set attached to a bouquet.
    pub async fn set_for_bouquet(&self, bouquet_id: Uuid, tag_ids: &[Uuid]) -> AppResult<()> {
        sqlx::query("DELETE FROM bouquet_tags WHERE bouquet_id = $1")
            .bind(bouquet_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clear bouquet tags", e)
            })?;

        if tag_ids.is_empty() {
            return Ok(());
        }

        sqlx::query(
            "INSERT INTO bouquet_tags (bouquet_id, tag_id) \
             SELECT $1, tag_id FROM UNNEST($2::uuid[]) AS t(tag_id)",
        )
        .bind(bouquet_id)
        .bind(tag_ids)
        .execute(&self.pool)
        .await
        .map_err(|e| map_tag_link_error(e, "bouquet"))?;

        Ok(())
    }
}

/// Distinguish a dangling tag reference from a transport failure when
/// inserting join rows.
fn map_tag_link_error(e: sqlx::Error, owner: &str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
            AppError::validation(format!("Tag set for {owner} references an unknown tag"))
        }
        _ => AppError::with_source(ErrorKind::Database, format!("Failed to tag {owner}"), e),
    }
}

#[async_trait]
impl Repository<Tag, CreateTag, UpdateTag> for TagRepository {
    async fn find_all(&self) -> AppResult<Vec<Tag>> {
        sqlx::query_as::<_, Tag>("SELECT * FROM tags ORDER BY label ASC, id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tags", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Tag>> {
        sqlx::query_as::<_, Tag>("SELECT * FROM tags WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find tag", e))
    }

    async fn create(&self, data: &CreateTag) -> AppResult<Tag> {
        sqlx::query_as::<_, Tag>("INSERT INTO tags (label) VALUES ($1) RETURNING *")
            .bind(&data.label)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some("tags_label_key") =>
                {
                    AppError::conflict(format!("Tag '{}' already exists", data.label))
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to create tag", e),
            })
    }

    async fn update(&self, id: Uuid, data: &UpdateTag) -> AppResult<Tag> {
        sqlx::query_as::<_, Tag>("UPDATE tags SET label = $2 WHERE id = $1 RETURNING *")
            .bind(id)
            .bind(&data.label)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some("tags_label_key") =>
                {
                    AppError::conflict(format!("Tag '{}' already exists", data.label))
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to update tag", e),
            })?
            .ok_or_else(|| AppError::not_found(format!("Tag {id} not found")))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete tag", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tags")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count tags", e))?;
        Ok(count as u64)
    }
}
