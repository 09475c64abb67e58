//! # fleura-entity
//!
//! Domain entity models for the Fleura catalog. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod bouquet;
pub mod category;
pub mod flower;
pub mod media;
pub mod tag;
