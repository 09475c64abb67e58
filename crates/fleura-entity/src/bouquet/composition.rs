//! Bouquet composition join rows.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One row of the `bouquet_flowers` join table: a flower and how many of it
/// the bouquet contains. `position` fixes the display order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BouquetFlower {
    /// The owning bouquet.
    pub bouquet_id: Uuid,
    /// The referenced flower.
    pub flower_id: Uuid,
    /// How many stems of this flower the bouquet contains.
    pub quantity: i32,
    /// Display order within the bouquet, lower comes first.
    pub position: i32,
}

/// Composition input from the admin surface: position is implied by the
/// order of entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionEntry {
    /// The referenced flower.
    pub flower_id: Uuid,
    /// How many stems of this flower the bouquet contains.
    pub quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composition_entry_deserializes_from_admin_payload() {
        let entry: CompositionEntry = serde_json::from_str(
            r#"{"flower_id":"550e8400-e29b-41d4-a716-446655440000","quantity":3}"#,
        )
        .expect("deserialize");
        assert_eq!(entry.quantity, 3);
    }
}
