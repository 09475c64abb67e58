//! Category entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A catalog category referenced by flowers and bouquets.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique category identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Description shown on category pages.
    pub description: Option<String>,
    /// Sort position in navigation, lower comes first.
    pub position: i32,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
    /// When the category was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategory {
    /// Display name.
    pub name: String,
    /// Description shown on category pages.
    pub description: Option<String>,
    /// Sort position in navigation.
    #[serde(default)]
    pub position: i32,
}

/// Full-row update for an existing category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCategory {
    /// Display name.
    pub name: String,
    /// Description shown on category pages.
    pub description: Option<String>,
    /// Sort position in navigation.
    #[serde(default)]
    pub position: i32,
}
