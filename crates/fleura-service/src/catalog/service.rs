//! Catalog composition service: cross-entity storefront reads.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use fleura_core::error::AppError;
use fleura_core::result::AppResult;
use fleura_core::traits::Repository;
use fleura_core::types::uuid::parse_uuid;
use fleura_database::repositories::bouquet::BouquetRepository;
use fleura_database::repositories::category::CategoryRepository;
use fleura_database::repositories::flower::FlowerRepository;
use fleura_database::repositories::tag::TagRepository;
use fleura_entity::bouquet::BouquetFlower;
use fleura_entity::category::Category;
use fleura_entity::flower::Flower;
use fleura_entity::tag::Tag;
use fleura_media::MediaResolver;

use super::view::{
    BouquetFlowerView, BouquetSummary, BouquetWithFlowers, FlowerDetail, FlowerSummary,
};

/// Builds cross-entity catalog views by composing the entity repositories
/// and the media resolver.
///
/// The resolver variant is injected; request-handling contexts pass the
/// server variant.
#[derive(Clone)]
pub struct CatalogService {
    /// Flower repository.
    flower_repo: Arc<FlowerRepository>,
    /// Bouquet repository.
    bouquet_repo: Arc<BouquetRepository>,
    /// Category repository.
    category_repo: Arc<CategoryRepository>,
    /// Tag repository.
    tag_repo: Arc<TagRepository>,
    /// Media resolver for the execution context.
    resolver: Arc<dyn MediaResolver>,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(
        flower_repo: Arc<FlowerRepository>,
        bouquet_repo: Arc<BouquetRepository>,
        category_repo: Arc<CategoryRepository>,
        tag_repo: Arc<TagRepository>,
        resolver: Arc<dyn MediaResolver>,
    ) -> Self {
        Self {
            flower_repo,
            bouquet_repo,
            category_repo,
            tag_repo,
            resolver,
        }
    }

    /// Fetch a bouquet enriched with its resolved, ordered flower list.
    ///
    /// The identifier is validated before any store call. A composition
    /// entry whose flower no longer exists (deleted between reads) is
    /// omitted from the result and logged.
    pub async fn get_bouquet_with_flowers(&self, raw_id: &str) -> AppResult<BouquetWithFlowers> {
        let id = parse_uuid(raw_id)?;

        let bouquet = self
            .bouquet_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Bouquet {id} not found")))?;

        let composition = self.bouquet_repo.find_composition(id).await?;
        let flower_ids: Vec<Uuid> = composition.iter().map(|row| row.flower_id).collect();
        let flowers = self.flower_repo.find_by_ids(&flower_ids).await?;
        let tags = self.tag_repo.find_for_bouquet(id).await?;

        let (views, dangling) = assemble_composition(&composition, &flowers, &*self.resolver);
        for row in &dangling {
            warn!(
                bouquet_id = %id,
                flower_id = %row.flower_id,
                quantity = row.quantity,
                "Bouquet composition references a missing flower; entry omitted"
            );
        }

        Ok(BouquetWithFlowers {
            bouquet: BouquetSummary::from_entity(&bouquet, &*self.resolver),
            flowers: views,
            tags,
        })
    }

    /// List bouquets flagged for promotional display, media resolved.
    /// Returns an empty list when nothing is featured.
    pub async fn get_featured_bouquets(&self) -> AppResult<Vec<BouquetSummary>> {
        let bouquets = self.bouquet_repo.find_featured().await?;
        Ok(bouquets
            .iter()
            .map(|b| BouquetSummary::from_entity(b, &*self.resolver))
            .collect())
    }

    /// List storefront-visible flowers, media resolved.
    pub async fn list_visible_flowers(&self) -> AppResult<Vec<FlowerSummary>> {
        let flowers = self.flower_repo.find_visible().await?;
        Ok(flowers
            .iter()
            .map(|f| FlowerSummary::from_entity(f, &*self.resolver))
            .collect())
    }

    /// Fetch a single flower product page.
    pub async fn get_flower(&self, raw_id: &str) -> AppResult<FlowerDetail> {
        let id = parse_uuid(raw_id)?;

        let flower = self
            .flower_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Flower {id} not found")))?;
        let tags = self.tag_repo.find_for_flower(id).await?;

        Ok(FlowerDetail {
            flower: FlowerSummary::from_entity(&flower, &*self.resolver),
            tags,
        })
    }

    /// List all categories in navigation order.
    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.category_repo.find_all().await
    }

    /// List all tags.
    pub async fn list_tags(&self) -> AppResult<Vec<Tag>> {
        self.tag_repo.find_all().await
    }
}

/// Join composition rows to their fetched flowers, preserving row order and
/// quantities. Rows whose flower is absent from `flowers` are returned
/// separately so the caller can record the inconsistency.
fn assemble_composition<'a>(
    composition: &'a [BouquetFlower],
    flowers: &[Flower],
    resolver: &dyn MediaResolver,
) -> (Vec<BouquetFlowerView>, Vec<&'a BouquetFlower>) {
    let by_id: HashMap<Uuid, &Flower> = flowers.iter().map(|f| (f.id, f)).collect();

    let mut views = Vec::with_capacity(composition.len());
    let mut dangling = Vec::new();

    for row in composition {
        match by_id.get(&row.flower_id) {
            Some(flower) => views.push(BouquetFlowerView {
                flower_id: flower.id,
                name: flower.name.clone(),
                price_cents: flower.price_cents,
                image_url: resolver.resolve(Some(&flower.media)),
                quantity: row.quantity,
            }),
            None => dangling.push(row),
        }
    }

    (views, dangling)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use fleura_core::config::media::MediaConfig;
    use fleura_entity::media::MediaItem;
    use fleura_media::ServerMediaResolver;

    fn flower(id: Uuid, name: &str, path: &str) -> Flower {
        Flower {
            id,
            category_id: None,
            name: name.to_string(),
            description: None,
            price_cents: 450,
            media: MediaItem::from_path(path),
            is_visible: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn row(bouquet_id: Uuid, flower_id: Uuid, quantity: i32, position: i32) -> BouquetFlower {
        BouquetFlower {
            bouquet_id,
            flower_id,
            quantity,
            position,
        }
    }

    fn resolver() -> ServerMediaResolver {
        ServerMediaResolver::new(&MediaConfig::default())
    }

    #[test]
    fn test_assemble_preserves_order_and_quantities() {
        let bouquet_id = Uuid::new_v4();
        let rose_id = Uuid::new_v4();
        let tulip_id = Uuid::new_v4();

        let composition = vec![
            row(bouquet_id, rose_id, 3, 0),
            row(bouquet_id, tulip_id, 1, 1),
        ];
        let flowers = vec![
            flower(tulip_id, "Tulip", "tulip.jpg"),
            flower(rose_id, "Rose", "rose.jpg"),
        ];

        let (views, dangling) = assemble_composition(&composition, &flowers, &resolver());

        assert!(dangling.is_empty());
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].name, "Rose");
        assert_eq!(views[0].quantity, 3);
        assert_eq!(views[1].name, "Tulip");
        assert_eq!(views[1].quantity, 1);
    }

    #[test]
    fn test_assemble_resolves_media_to_urls() {
        let bouquet_id = Uuid::new_v4();
        let rose_id = Uuid::new_v4();

        let composition = vec![row(bouquet_id, rose_id, 2, 0)];
        let flowers = vec![flower(rose_id, "Rose", "flowers/rose.jpg")];

        let (views, _) = assemble_composition(&composition, &flowers, &resolver());

        assert_eq!(views[0].image_url, "/storage/flowers/rose.jpg");
    }

    #[test]
    fn test_assemble_omits_dangling_entries() {
        let bouquet_id = Uuid::new_v4();
        let rose_id = Uuid::new_v4();
        let deleted_id = Uuid::new_v4();

        let composition = vec![
            row(bouquet_id, rose_id, 3, 0),
            row(bouquet_id, deleted_id, 5, 1),
        ];
        let flowers = vec![flower(rose_id, "Rose", "rose.jpg")];

        let (views, dangling) = assemble_composition(&composition, &flowers, &resolver());

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].flower_id, rose_id);
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].flower_id, deleted_id);
        assert_eq!(dangling[0].quantity, 5);
    }

    #[test]
    fn test_assemble_empty_composition() {
        let (views, dangling) = assemble_composition(&[], &[], &resolver());
        assert!(views.is_empty());
        assert!(dangling.is_empty());
    }
}
