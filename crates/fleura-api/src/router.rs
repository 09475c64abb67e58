//! Route definitions for the Fleura HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(catalog_routes())
        .merge(admin_routes())
        .merge(auth_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Storefront catalog reads
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/flowers", get(handlers::catalog::list_flowers))
        .route("/flowers/{id}", get(handlers::catalog::get_flower))
        .route("/categories", get(handlers::catalog::list_categories))
        .route("/tags", get(handlers::catalog::list_tags))
        .route(
            "/bouquets/featured",
            get(handlers::catalog::featured_bouquets),
        )
        .route("/bouquets/{id}", get(handlers::catalog::get_bouquet))
}

/// Admin CRUD endpoints
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/flowers", get(handlers::admin::flowers::list_flowers))
        .route(
            "/admin/flowers",
            post(handlers::admin::flowers::create_flower),
        )
        .route(
            "/admin/flowers/{id}",
            put(handlers::admin::flowers::update_flower),
        )
        .route(
            "/admin/flowers/{id}",
            delete(handlers::admin::flowers::delete_flower),
        )
        .route(
            "/admin/categories",
            post(handlers::admin::categories::create_category),
        )
        .route(
            "/admin/categories/{id}",
            put(handlers::admin::categories::update_category),
        )
        .route(
            "/admin/categories/{id}",
            delete(handlers::admin::categories::delete_category),
        )
        .route("/admin/tags", post(handlers::admin::tags::create_tag))
        .route("/admin/tags/{id}", put(handlers::admin::tags::update_tag))
        .route(
            "/admin/tags/{id}",
            delete(handlers::admin::tags::delete_tag),
        )
        .route(
            "/admin/bouquets",
            get(handlers::admin::bouquets::list_bouquets),
        )
        .route(
            "/admin/bouquets",
            post(handlers::admin::bouquets::create_bouquet),
        )
        .route(
            "/admin/bouquets/{id}",
            put(handlers::admin::bouquets::update_bouquet),
        )
        .route(
            "/admin/bouquets/{id}",
            delete(handlers::admin::bouquets::delete_bouquet),
        )
}

/// Auth boundary endpoints
fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/logout", post(handlers::auth::logout))
}

/// Health endpoints
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
