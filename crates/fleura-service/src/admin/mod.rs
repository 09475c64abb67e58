//! Admin CRUD services: validation in front of repository passthrough.

pub mod bouquet;
pub mod category;
pub mod flower;
pub mod tag;

pub use bouquet::BouquetAdminService;
pub use category::CategoryAdminService;
pub use flower::FlowerAdminService;
pub use tag::TagAdminService;
