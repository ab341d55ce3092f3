//! CatalogRepository - typed catalog queries over a content store.

use std::error::Error;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use super::filter::PriceRange;
use super::ordering::{sort_categories, sort_featured_first};
use crate::error::CatalogError;
use crate::model::{
    Application, ApplicationMetadata, Category, CategoryMetadata, Object, Product,
    ProductMetadata, RecordMetadata,
};
use crate::store::{ContentStore, ObjectQuery, DEFAULT_PROPS};

/// Number of products `list_featured_products` returns on the home page.
pub const DEFAULT_FEATURED_LIMIT: usize = 6;

/// Properties requested for every catalog record.
pub const CATALOG_PROPS: &[&str] = DEFAULT_PROPS;

/// Products embed their category and applications, so one level is expanded.
pub const EXPANSION_DEPTH: u8 = 1;

/// A category together with how many listed products belong to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    #[serde(flatten)]
    pub category: Category,
    pub product_count: usize,
}

/// Read-only gateway to the catalog.
///
/// Stateless: every call fetches fresh from the store and nothing is cached
/// or shared between calls, so concurrent calls are independent.
#[derive(Debug, Clone)]
pub struct CatalogRepository<S> {
    store: S,
}

impl<S: ContentStore> CatalogRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ------------------------------------------------------------------
    // Primary fetches
    // ------------------------------------------------------------------

    /// All products, featured first, then newest first.
    ///
    /// A store "not found" yields an empty list.
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let mut products = self.fetch_all::<ProductMetadata>("products").await?;
        sort_featured_first(&mut products);
        Ok(products)
    }

    /// The product with `slug`, or `None` if there is none or it has no metadata.
    pub async fn get_product(&self, slug: &str) -> Result<Option<Product>, CatalogError> {
        self.fetch_one::<ProductMetadata>(slug, format!("product: {}", slug))
            .await
    }

    /// All categories in ascending `sort_order` (missing values last).
    pub async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let mut categories = self.fetch_all::<CategoryMetadata>("categories").await?;
        sort_categories(&mut categories);
        Ok(categories)
    }

    pub async fn get_category(&self, slug: &str) -> Result<Option<Category>, CatalogError> {
        self.fetch_one::<CategoryMetadata>(slug, format!("category: {}", slug))
            .await
    }

    /// All applications in store order.
    pub async fn list_applications(&self) -> Result<Vec<Application>, CatalogError> {
        self.fetch_all::<ApplicationMetadata>("applications").await
    }

    pub async fn get_application(&self, slug: &str) -> Result<Option<Application>, CatalogError> {
        self.fetch_one::<ApplicationMetadata>(slug, format!("application: {}", slug))
            .await
    }

    // ------------------------------------------------------------------
    // Derived queries (never fail)
    // ------------------------------------------------------------------

    /// Up to `limit` featured products, in listing order.
    pub async fn list_featured_products(&self, limit: usize) -> Vec<Product> {
        self.listing_or_empty("featured products")
            .await
            .into_iter()
            .filter(Product::is_featured)
            .take(limit)
            .collect()
    }

    /// Products whose embedded category has `category_slug`.
    pub async fn list_products_by_category(&self, category_slug: &str) -> Vec<Product> {
        self.listing_or_empty("products by category")
            .await
            .into_iter()
            .filter(|p| p.category_slug() == category_slug)
            .collect()
    }

    /// Products whose searchable text contains `query`, ignoring case.
    ///
    /// A blank query returns the full listing.
    pub async fn search_products(&self, query: &str) -> Vec<Product> {
        let products = self.listing_or_empty("product search").await;
        if query.trim().is_empty() {
            return products;
        }
        let needle = query.to_lowercase();
        products
            .into_iter()
            .filter(|p| p.search_text().contains(&needle))
            .collect()
    }

    /// Products priced within `min..=max`.
    pub async fn list_products_by_price_range(&self, min: Decimal, max: Decimal) -> Vec<Product> {
        let range = PriceRange::new(min, max);
        self.listing_or_empty("products by price range")
            .await
            .into_iter()
            .filter(|p| range.contains(p.metadata.price))
            .collect()
    }

    /// Every category with its product count, in category display order.
    pub async fn list_categories_with_counts(&self) -> Vec<CategorySummary> {
        const QUERY: &str = "categories with counts";

        let categories = match self.list_categories().await {
            Ok(categories) => categories,
            Err(err) => return degraded(QUERY, &err),
        };
        let products = match self.list_products().await {
            Ok(products) => products,
            Err(err) => return degraded(QUERY, &err),
        };

        categories
            .into_iter()
            .map(|category| {
                let product_count = products
                    .iter()
                    .filter(|p| p.category_slug() == category.slug)
                    .count();
                CategorySummary {
                    category,
                    product_count,
                }
            })
            .collect()
    }

    async fn listing_or_empty(&self, query: &'static str) -> Vec<Product> {
        match self.list_products().await {
            Ok(products) => products,
            Err(err) => degraded(query, &err),
        }
    }

    // ------------------------------------------------------------------
    // Store access
    // ------------------------------------------------------------------

    async fn fetch_all<M: RecordMetadata>(
        &self,
        resource: &str,
    ) -> Result<Vec<Object<M>>, CatalogError> {
        let query = ObjectQuery::of::<M>()
            .props(CATALOG_PROPS)
            .depth(EXPANSION_DEPTH);

        let documents = match self.store.find(&query).await {
            Ok(documents) => documents,
            Err(err) if err.is_not_found() => return Ok(Vec::new()),
            Err(err) => return Err(CatalogError::fetch(resource, err)),
        };

        let mut objects = Vec::with_capacity(documents.len());
        for document in documents {
            let slug = document.slug().unwrap_or_default().to_string();
            match document.decode::<M>() {
                Ok(Some(object)) => objects.push(object),
                Ok(None) => warn!(
                    object_type = M::OBJECT_TYPE,
                    slug = %slug,
                    "skipping record without metadata"
                ),
                Err(err) => warn!(
                    object_type = M::OBJECT_TYPE,
                    slug = %slug,
                    error = %err,
                    "skipping record that failed to decode"
                ),
            }
        }
        Ok(objects)
    }

    async fn fetch_one<M: RecordMetadata>(
        &self,
        slug: &str,
        resource: String,
    ) -> Result<Option<Object<M>>, CatalogError> {
        let query = ObjectQuery::find_one(M::OBJECT_TYPE, slug)
            .props(CATALOG_PROPS)
            .depth(EXPANSION_DEPTH);

        match self.store.find_one(&query).await {
            Ok(Some(document)) => document
                .decode::<M>()
                .map_err(|err| CatalogError::fetch(resource, err.into())),
            Ok(None) => Ok(None),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(CatalogError::fetch(resource, err)),
        }
    }
}

/// Log a failed derived query; the caller shows an empty section instead.
fn degraded<T>(query: &'static str, err: &CatalogError) -> Vec<T> {
    let cause = err.source().map(ToString::to_string).unwrap_or_default();
    warn!(query, error = %err, cause = %cause, "catalog query degraded to empty result");
    Vec::new()
}
