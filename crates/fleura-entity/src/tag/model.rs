//! Tag entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A label attached to flowers and bouquets through join tables.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tag {
    /// Unique tag identifier.
    pub id: Uuid,
    /// Display label.
    pub label: String,
    /// When the tag was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTag {
    /// Display label.
    pub label: String,
}

/// Update for an existing tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTag {
    /// Display label.
    pub label: String,
}
