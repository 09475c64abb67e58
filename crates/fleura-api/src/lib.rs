//! # fleura-api
//!
//! HTTP API layer for Fleura. Routes, handlers, shared state, and the
//! mapping from domain errors to HTTP responses.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
