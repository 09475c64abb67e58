//! Bouquet domain entities.

pub mod composition;
pub mod model;

pub use composition::{BouquetFlower, CompositionEntry};
pub use model::{Bouquet, CreateBouquet, UpdateBouquet};
