//! Fleura Server — flower-shop catalog service and admin API.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use fleura_api::auth::UpstreamAuthProvider;
use fleura_api::state::AppState;
use fleura_core::config::AppConfig;
use fleura_core::error::AppError;
use fleura_database::DatabasePool;
use fleura_database::repositories::bouquet::BouquetRepository;
use fleura_database::repositories::category::CategoryRepository;
use fleura_database::repositories::flower::FlowerRepository;
use fleura_database::repositories::tag::TagRepository;
use fleura_media::{MediaResolver, ServerMediaResolver};
use fleura_service::admin::bouquet::BouquetAdminService;
use fleura_service::admin::category::CategoryAdminService;
use fleura_service::admin::flower::FlowerAdminService;
use fleura_service::admin::tag::TagAdminService;
use fleura_service::catalog::CatalogService;

#[tokio::main]
async fn main() {
    let env = std::env::var("FLEURA_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Fleura v{}", env!("CARGO_PKG_VERSION"));

    // ── Database connection + migrations ─────────────────────────
    let db = DatabasePool::connect(&config.database).await?;
    fleura_database::migration::run_migrations(db.pool()).await?;

    // ── Repositories ─────────────────────────────────────────────
    let flower_repo = Arc::new(FlowerRepository::new(db.pool().clone()));
    let category_repo = Arc::new(CategoryRepository::new(db.pool().clone()));
    let tag_repo = Arc::new(TagRepository::new(db.pool().clone()));
    let bouquet_repo = Arc::new(BouquetRepository::new(db.pool().clone()));

    // ── Media resolution (server variant for request handling) ───
    let resolver: Arc<dyn MediaResolver> = Arc::new(ServerMediaResolver::new(&config.media));

    // ── Services ─────────────────────────────────────────────────
    let catalog_service = Arc::new(CatalogService::new(
        Arc::clone(&flower_repo),
        Arc::clone(&bouquet_repo),
        Arc::clone(&category_repo),
        Arc::clone(&tag_repo),
        Arc::clone(&resolver),
    ));
    let flower_admin = Arc::new(FlowerAdminService::new(
        Arc::clone(&flower_repo),
        Arc::clone(&category_repo),
        Arc::clone(&tag_repo),
    ));
    let category_admin = Arc::new(CategoryAdminService::new(Arc::clone(&category_repo)));
    let tag_admin = Arc::new(TagAdminService::new(Arc::clone(&tag_repo)));
    let bouquet_admin = Arc::new(BouquetAdminService::new(
        Arc::clone(&bouquet_repo),
        Arc::clone(&flower_repo),
        Arc::clone(&category_repo),
        Arc::clone(&tag_repo),
    ));

    // ── HTTP server ──────────────────────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState {
        config: Arc::new(config),
        db: db.clone(),
        auth: Arc::new(UpstreamAuthProvider),
        catalog_service,
        flower_admin,
        category_admin,
        tag_admin,
        bouquet_admin,
    };

    let app = fleura_api::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Fleura server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    tracing::info!("Fleura server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
