//! Application state shared across all handlers.

use std::sync::Arc;

use fleura_core::config::AppConfig;
use fleura_core::traits::AuthProvider;
use fleura_database::DatabasePool;
use fleura_service::admin::bouquet::BouquetAdminService;
use fleura_service::admin::category::CategoryAdminService;
use fleura_service::admin::flower::FlowerAdminService;
use fleura_service::admin::tag::TagAdminService;
use fleura_service::catalog::CatalogService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Database pool, for health checks.
    pub db: DatabasePool,
    /// External auth collaborator.
    pub auth: Arc<dyn AuthProvider>,

    /// Storefront catalog reads.
    pub catalog_service: Arc<CatalogService>,
    /// Flower admin CRUD.
    pub flower_admin: Arc<FlowerAdminService>,
    /// Category admin CRUD.
    pub category_admin: Arc<CategoryAdminService>,
    /// Tag admin CRUD.
    pub tag_admin: Arc<TagAdminService>,
    /// Bouquet admin CRUD.
    pub bouquet_admin: Arc<BouquetAdminService>,
}
