//! Flower domain entities.

pub mod model;

pub use model::{CreateFlower, Flower, UpdateFlower};
