//! Catalog - queries over products, categories and applications.
//!
//! `CatalogRepository` is the only way page code reaches the content store.
//! Primary fetches (`list_*`, `get_*`) fail loudly with `CatalogError`;
//! derived queries (featured, by category, by price, search) are filters over
//! the full product listing and degrade to an empty result instead.
//!
//! `ProductFilter` and `SortBy` cover the interactive listing pages, which
//! filter and re-sort a listing already in memory.

mod filter;
mod ordering;
mod repository;

pub use filter::{category_types, max_price, PriceRange, ProductFilter, SortBy};
pub use ordering::{sort_categories, sort_featured_first};
pub use repository::{
    CatalogRepository, CategorySummary, CATALOG_PROPS, DEFAULT_FEATURED_LIMIT, EXPANSION_DEPTH,
};
