//! Generic repository trait for database access.

use async_trait::async_trait;
use uuid::Uuid;

use crate::result::AppResult;

/// Generic CRUD repository trait.
///
/// This trait is defined with generic type parameters so that each entity
/// can have a strongly typed repository. Entity-specific query methods
/// (featured filters, composition lookups, tag joins) are defined on the
/// concrete repository structs.
#[async_trait]
pub trait Repository<Entity, Create, Update>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static + serde::Serialize,
    Create: Send + Sync + 'static,
    Update: Send + Sync + 'static,
{
    /// Find all entities in stable, deterministic order.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;

    /// Find an entity by its primary key. `None` means not found;
    /// errors are reserved for transport failures.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Entity>>;

    /// Create a new entity and return it.
    async fn create(&self, data: &Create) -> AppResult<Entity>;

    /// Update an existing entity and return the updated version.
    /// A missing row is a not-found failure, distinct from transport errors.
    async fn update(&self, id: Uuid, data: &Update) -> AppResult<Entity>;

    /// Delete an entity by its primary key. Returns `true` if a row was
    /// deleted.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Count total entities.
    async fn count(&self) -> AppResult<u64>;
}
