//! Repository implementations for all Fleura catalog entities.

pub mod bouquet;
pub mod category;
pub mod flower;
pub mod tag;

pub use bouquet::BouquetRepository;
pub use category::CategoryRepository;
pub use flower::FlowerRepository;
pub use tag::TagRepository;
