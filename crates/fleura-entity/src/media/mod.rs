//! Media reference value object.

pub mod model;

pub use model::MediaItem;
