//! Tag domain entities.

pub mod model;

pub use model::{CreateTag, Tag, UpdateTag};
