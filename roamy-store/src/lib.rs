pub mod app_config;
pub mod database;
pub mod catalog_repo;
pub mod memory_repo;

pub use app_config::{Config, StoreBackend, SuggestionConfig};
pub use database::DbClient;
pub use catalog_repo::PgCatalogRepository;
pub use memory_repo::{CatalogSeed, MemoryCatalog};
