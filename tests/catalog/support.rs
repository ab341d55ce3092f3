//! Content-store documents for catalog tests.
//!
//! Products reference their category and applications by id, the way they
//! are authored; the in-memory store expands them when asked for depth 1.

use serde_json::{json, Value};
use storefront_catalog::InMemoryContentStore;

pub fn category(id: &str, slug: &str, name: &str, kind: &str, sort_order: Option<i64>) -> Value {
    let mut metadata = json!({
        "name": name,
        "description": format!("{} lighting", name),
        "category_type": { "key": kind.to_lowercase(), "value": kind },
    });
    if let Some(order) = sort_order {
        metadata["sort_order"] = json!(order);
    }
    json!({
        "id": id,
        "slug": slug,
        "title": name,
        "type": "categories",
        "created_at": "2023-12-01T00:00:00.000Z",
        "metadata": metadata,
    })
}

pub fn application(id: &str, slug: &str, title: &str, environment: &str) -> Value {
    json!({
        "id": id,
        "slug": slug,
        "title": title,
        "type": "applications",
        "metadata": {
            "name": title,
            "environment": { "key": environment.to_lowercase(), "value": environment },
        },
    })
}

/// Builder for a product document.
pub struct ProductDoc {
    slug: String,
    title: String,
    price: Value,
    compare_price: Option<Value>,
    category_id: String,
    applications: Vec<String>,
    featured: bool,
    created_at: String,
    seo_keywords: Option<String>,
}

impl ProductDoc {
    pub fn new(slug: &str, title: &str, price: Value, category_id: &str) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.to_string(),
            price,
            compare_price: None,
            category_id: category_id.to_string(),
            applications: Vec::new(),
            featured: false,
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
            seo_keywords: None,
        }
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn created(mut self, created_at: &str) -> Self {
        self.created_at = created_at.to_string();
        self
    }

    pub fn compare_price(mut self, compare_price: Value) -> Self {
        self.compare_price = Some(compare_price);
        self
    }

    pub fn applications(mut self, ids: &[&str]) -> Self {
        self.applications = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn keywords(mut self, keywords: &str) -> Self {
        self.seo_keywords = Some(keywords.to_string());
        self
    }

    pub fn build(self) -> Value {
        let mut metadata = json!({
            "name": self.title,
            "short_description": format!("{} by Lumina", self.title),
            "description": format!("Long-form copy for {}.", self.title),
            "price": self.price,
            "sku": self.slug.to_uppercase(),
            "main_image": {
                "url": format!("https://cdn.example/{}.jpg", self.slug),
                "imgix_url": format!("https://imgix.example/{}.jpg", self.slug),
            },
            "category": self.category_id,
            "applications": self.applications,
            "stock_status": { "key": "in_stock", "value": "In Stock" },
            "featured": self.featured,
        });
        if let Some(compare) = self.compare_price {
            metadata["compare_price"] = compare;
        }
        if let Some(keywords) = self.seo_keywords {
            metadata["seo_keywords"] = json!(keywords);
        }
        json!({
            "id": format!("prod-{}", self.slug),
            "slug": self.slug,
            "title": self.title,
            "type": "products",
            "created_at": self.created_at,
            "modified_at": self.created_at,
            "metadata": metadata,
        })
    }
}

pub fn categories() -> Vec<Value> {
    vec![
        category("cat-res", "residential", "Residential", "Residential", Some(2)),
        category("cat-com", "commercial", "Commercial", "Commercial", Some(1)),
        category("cat-out", "outdoor", "Outdoor", "Outdoor", None),
        category("cat-ind", "industrial", "Industrial", "Industrial", Some(3)),
    ]
}

pub fn applications() -> Vec<Value> {
    vec![
        application("app-wh", "warehouses", "Warehouses", "Indoor"),
        application("app-gd", "gardens", "Garden Paths", "Outdoor"),
    ]
}

pub fn products() -> Vec<Value> {
    vec![
        ProductDoc::new("bulb-a19", "Bulb A19", json!(49.99), "cat-res")
            .created("2024-01-10T09:00:00.000Z")
            .build(),
        ProductDoc::new("aurora-pendant", "Aurora Pendant", json!(129.0), "cat-res")
            .featured()
            .compare_price(json!(149.0))
            .created("2024-02-01T09:00:00.000Z")
            .build(),
        ProductDoc::new("highbay-150", "Highbay 150W", json!(899.5), "cat-ind")
            .applications(&["app-wh"])
            .keywords("high ceiling, UFO")
            .created("2024-03-05T09:00:00.000Z")
            .build(),
        ProductDoc::new("path-light", "Path Light", json!(79), "cat-out")
            .featured()
            .applications(&["app-gd"])
            .created("2024-04-01T09:00:00.000Z")
            .build(),
        ProductDoc::new("panel-2x4", "Panel 2x4", json!(210), "cat-com")
            .created("2024-02-20T09:00:00.000Z")
            .build(),
    ]
}

/// Store holding the standard catalog.
pub fn catalog_store() -> InMemoryContentStore {
    let mut documents = categories();
    documents.extend(applications());
    documents.extend(products());
    InMemoryContentStore::with_documents(documents)
}

/// Store holding only the standard categories and `products`.
pub fn store_with_products(products: Vec<Value>) -> InMemoryContentStore {
    let mut documents = categories();
    documents.extend(applications());
    documents.extend(products);
    InMemoryContentStore::with_documents(documents)
}

pub fn slugs<M>(objects: &[storefront_catalog::Object<M>]) -> Vec<&str> {
    objects.iter().map(|o| o.slug.as_str()).collect()
}
