//! Catalog data access for a lighting storefront.
//!
//! Products, categories and applications live in a headless content store.
//! `CatalogRepository` fetches them through a `ContentStore` (HTTP in
//! production, in-memory in tests), decodes them into typed records and
//! answers the queries the storefront pages need.
//!
//! ```ignore
//! use storefront_catalog::{CatalogRepository, HttpContentStore, StoreConfig};
//!
//! let store = HttpContentStore::new(StoreConfig::from_env()?);
//! let catalog = CatalogRepository::new(store);
//!
//! let featured = catalog.list_featured_products(6).await;
//! let product = catalog.get_product("aurora-pendant").await?;
//! ```

// Lets the derive macro's `storefront_catalog::` paths resolve inside this crate.
extern crate self as storefront_catalog;

pub mod catalog;
pub mod config;
mod error;
pub mod model;
pub mod store;

pub use catalog::{
    category_types, max_price, CatalogRepository, CategorySummary, PriceRange, ProductFilter,
    SortBy, DEFAULT_FEATURED_LIMIT,
};
pub use config::{StoreConfig, DEFAULT_API_URL};
pub use error::{CatalogError, ConfigError};
pub use model::{
    Application, ApplicationMetadata, Category, CategoryMetadata, CategoryType, ColorTemperature,
    Document, Environment, FileRef, ImageRef, LightType, Object, Product, ProductMetadata,
    RecordMetadata, Select, StockStatus, SORT_ORDER_SENTINEL,
};
#[cfg(feature = "http")]
pub use store::HttpContentStore;
pub use store::{ContentStore, InMemoryContentStore, ObjectQuery, StoreError};

// Re-export the derive macro for RecordMetadata
pub use storefront_catalog_macros::CatalogRecord;
