//! # fleura-media
//!
//! Media URL resolution for the Fleura catalog. A [`MediaItem`] carries
//! either a fully qualified URL or a storage-relative path; this crate turns
//! it into a dereferenceable URL for a given execution context.
//!
//! [`MediaItem`]: fleura_entity::media::MediaItem

pub mod resolver;

pub use resolver::{ClientMediaResolver, MediaResolver, ServerMediaResolver};
