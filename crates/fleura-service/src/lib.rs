//! # fleura-service
//!
//! Business logic service layer for Fleura. Each service orchestrates
//! repositories and the media resolver to implement application-level use
//! cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod admin;
pub mod catalog;

pub use admin::{
    BouquetAdminService, CategoryAdminService, FlowerAdminService, TagAdminService,
};
pub use catalog::CatalogService;
