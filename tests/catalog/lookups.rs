//! Single-record lookups and primary fetch failures.

use serde_json::json;
use storefront_catalog::{
    CatalogError, CatalogRepository, CategoryType, Environment, InMemoryContentStore, StoreError,
};

use crate::support::{self, catalog_store, ProductDoc};

#[tokio::test]
async fn get_product_by_slug() {
    let catalog = CatalogRepository::new(catalog_store());
    let product = catalog.get_product("aurora-pendant").await.unwrap().unwrap();

    assert_eq!(product.title, "Aurora Pendant");
    assert_eq!(product.metadata.category.metadata.category_type.value, CategoryType::Residential);
    assert_eq!(product.metadata.discount_percent(), Some(13));
}

#[tokio::test]
async fn unknown_slugs_are_absent() {
    let catalog = CatalogRepository::new(catalog_store());

    assert!(catalog.get_product("no-such-lamp").await.unwrap().is_none());
    assert!(catalog.get_category("nonexistent-slug").await.unwrap().is_none());
    assert!(catalog.get_application("moon-base").await.unwrap().is_none());
}

#[tokio::test]
async fn product_without_metadata_is_absent() {
    let store = support::store_with_products(vec![json!({
        "id": "prod-ghost",
        "slug": "ghost",
        "title": "Ghost",
        "type": "products",
        "metadata": null
    })]);
    let catalog = CatalogRepository::new(store);

    assert!(catalog.get_product("ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn get_category_and_application() {
    let catalog = CatalogRepository::new(catalog_store());

    let category = catalog.get_category("outdoor").await.unwrap().unwrap();
    assert_eq!(category.metadata.category_type.value, CategoryType::Outdoor);
    assert!(category.metadata.sort_order.is_none());

    let application = catalog.get_application("gardens").await.unwrap().unwrap();
    assert_eq!(application.metadata.environment.value, Environment::Outdoor);
}

#[tokio::test]
async fn store_failures_surface_as_fetch_failures() {
    let store = catalog_store();
    store.fail_with(StoreError::Status {
        status: 500,
        message: "internal".into(),
    });
    let catalog = CatalogRepository::new(store);

    let err = catalog.list_products().await.unwrap_err();
    assert_eq!(err.resource(), "products");
    let CatalogError::FetchFailure { source, .. } = &err;
    assert_eq!(source.status(), Some(500));

    let err = catalog.get_product("bulb-a19").await.unwrap_err();
    assert_eq!(err.resource(), "product: bulb-a19");

    assert_eq!(catalog.list_categories().await.unwrap_err().resource(), "categories");
    assert_eq!(
        catalog.get_category("outdoor").await.unwrap_err().resource(),
        "category: outdoor"
    );
    assert_eq!(catalog.list_applications().await.unwrap_err().resource(), "applications");
    assert_eq!(
        catalog.get_application("gardens").await.unwrap_err().resource(),
        "application: gardens"
    );
}

#[tokio::test]
async fn malformed_record_lookup_is_a_fetch_failure() {
    // Category left as a bare id: nothing to expand it to.
    let store = InMemoryContentStore::with_documents([ProductDoc::new(
        "orphan",
        "Orphan Lamp",
        json!(15),
        "cat-missing",
    )
    .build()]);
    let catalog = CatalogRepository::new(store);

    let err = catalog.get_product("orphan").await.unwrap_err();
    assert_eq!(err.resource(), "product: orphan");
    let CatalogError::FetchFailure { source, .. } = &err;
    assert!(matches!(source, StoreError::Decode(_)));

    assert!(catalog.list_products().await.unwrap().is_empty());
}
