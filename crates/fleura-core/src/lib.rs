//! # fleura-core
//!
//! Core crate for the Fleura flower-shop catalog service. Contains traits,
//! configuration schemas, typed identifiers, UUID helpers, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other Fleura crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
