//! Core type definitions used across the Fleura workspace.

pub mod id;
pub mod response;
pub mod uuid;

pub use self::id::*;
pub use self::response::ApiErrorResponse;
pub use self::uuid::{generate_uuid, is_valid_uuid, normalize_uuid, parse_uuid};
