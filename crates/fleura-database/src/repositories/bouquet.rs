//! Bouquet repository implementation, including the composition join table.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use fleura_core::error::{AppError, ErrorKind};
use fleura_core::result::AppResult;
use fleura_core::traits::Repository;
use fleura_entity::bouquet::{
    Bouquet, BouquetFlower, CompositionEntry, CreateBouquet, UpdateBouquet,
};

/// Repository for bouquet CRUD, featured queries, and composition rows.
#[derive(Debug, Clone)]
pub struct BouquetRepository {
    pool: PgPool,
}

impl BouquetRepository {
    /// Create a new bouquet repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List bouquets flagged for promotional display.
    pub async fn find_featured(&self) -> AppResult<Vec<Bouquet>> {
        sqlx::query_as::<_, Bouquet>(
            "SELECT * FROM bouquets WHERE is_featured = TRUE ORDER BY name ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list featured bouquets", e)
        })
    }

    /// Fetch a bouquet's composition rows in display order.
    pub async fn find_composition(&self, bouquet_id: Uuid) -> AppResult<Vec<BouquetFlower>> {
        sqlx::query_as::<_, BouquetFlower>(
            "SELECT * FROM bouquet_flowers WHERE bouquet_id = $1 \
             ORDER BY position ASC, flower_id ASC",
        )
        .bind(bouquet_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch composition", e))
    }

    /// Replace a bouquet's composition with the given entries; positions
    /// follow the order of the slice.
    ///
    /// A duplicate flower in the input violates the join-table primary key
    /// and is reported as a conflict; an unknown flower id violates the
    /// foreign key and is reported as invalid input.
    pub async fn replace_composition(
        &self,
        bouquet_id: Uuid,
        entries: &[CompositionEntry],
    ) -> AppResult<()> {
        sqlx::query("DELETE FROM bouquet_flowers WHERE bouquet_id = $1")
            .bind(bouquet_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clear composition", e)
            })?;

        if entries.is_empty() {
            return Ok(());
        }

        let flower_ids: Vec<Uuid> = entries.iter().map(|e| e.flower_id).collect();
        let quantities: Vec<i32> = entries.iter().map(|e| e.quantity).collect();
        let positions: Vec<i32> = (0..entries.len() as i32).collect();

        sqlx::query(
            "INSERT INTO bouquet_flowers (bouquet_id, flower_id, quantity, position) \
             SELECT $1, f, q, p FROM UNNEST($2::uuid[], $3::int[], $4::int[]) AS c(f, q, p)",
        )
        .bind(bouquet_id)
        .bind(&flower_ids)
        .bind(&quantities)
        .bind(&positions)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::validation("Composition references a flower that does not exist")
            }
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::conflict("Composition lists the same flower twice")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to write composition", e),
        })?;

        Ok(())
    }
}

#[async_trait]
impl Repository<Bouquet, CreateBouquet, UpdateBouquet> for BouquetRepository {
    async fn find_all(&self) -> AppResult<Vec<Bouquet>> {
        sqlx::query_as::<_, Bouquet>("SELECT * FROM bouquets ORDER BY name ASC, id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bouquets", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Bouquet>> {
        sqlx::query_as::<_, Bouquet>("SELECT * FROM bouquets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find bouquet", e))
    }

    async fn create(&self, data: &CreateBouquet) -> AppResult<Bouquet> {
        sqlx::query_as::<_, Bouquet>(
            "INSERT INTO bouquets (category_id, name, description, price_cents, file_url, \
             file_path, is_featured) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(data.category_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price_cents)
        .bind(&data.media.file_url)
        .bind(&data.media.file_path)
        .bind(data.is_featured)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create bouquet", e))
    }

    async fn update(&self, id: Uuid, data: &UpdateBouquet) -> AppResult<Bouquet> {
        sqlx::query_as::<_, Bouquet>(
            "UPDATE bouquets SET category_id = $2, name = $3, description = $4, \
             price_cents = $5, file_url = $6, file_path = $7, is_featured = $8, \
             updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.category_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price_cents)
        .bind(&data.media.file_url)
        .bind(&data.media.file_path)
        .bind(data.is_featured)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update bouquet", e))?
        .ok_or_else(|| AppError::not_found(format!("Bouquet {id} not found")))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM bouquets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete bouquet", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bouquets")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count bouquets", e)
            })?;
        Ok(count as u64)
    }
}
