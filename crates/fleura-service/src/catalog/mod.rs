//! Storefront catalog reads: entity listings and cross-entity views.

pub mod service;
pub mod view;

pub use service::CatalogService;
pub use view::{BouquetFlowerView, BouquetSummary, BouquetWithFlowers, FlowerDetail, FlowerSummary};
