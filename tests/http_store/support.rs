//! A fake content API serving an in-memory bucket.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use storefront_catalog::{ContentStore, InMemoryContentStore, ObjectQuery, StoreError};

pub const BUCKET: &str = "lumina-test";
pub const READ_KEY: &str = "test-read-key";
/// Answers 200 with a body that is not JSON.
pub const GARBLED_BUCKET: &str = "garbled";
/// Answers 200 with JSON where `objects` is not a list.
pub const MISSHAPEN_BUCKET: &str = "misshapen";

type Params = HashMap<String, String>;

#[derive(Clone, Default)]
pub struct FakeApi {
    store: InMemoryContentStore,
    requests: Arc<Mutex<Vec<Params>>>,
}

impl FakeApi {
    /// Two categories and two products; no applications.
    pub fn with_catalog() -> Self {
        let store = InMemoryContentStore::with_documents([
            json!({
                "id": "cat-res", "slug": "residential", "title": "Residential",
                "type": "categories",
                "metadata": {
                    "name": "Residential",
                    "category_type": { "key": "residential", "value": "Residential" },
                    "sort_order": 1
                }
            }),
            json!({
                "id": "cat-com", "slug": "commercial", "title": "Commercial",
                "type": "categories",
                "metadata": {
                    "name": "Commercial",
                    "category_type": { "key": "commercial", "value": "Commercial" }
                }
            }),
            product("wall-sconce", "Wall Sconce", "cat-com", false, "2024-03-01T00:00:00Z"),
            product("track-spot", "Track Spot", "cat-res", true, "2024-01-01T00:00:00Z"),
        ]);
        Self {
            store,
            ..Self::default()
        }
    }

    /// Answer every request with `status` and a JSON error message.
    pub fn fail_with(&self, status: u16, message: &str) {
        self.store.fail_with(StoreError::Status {
            status,
            message: message.to_string(),
        });
    }

    pub fn requests(&self) -> Vec<Params> {
        self.requests.lock().unwrap().clone()
    }
}

fn product(slug: &str, title: &str, category: &str, featured: bool, created_at: &str) -> Value {
    json!({
        "id": format!("prod-{slug}"),
        "slug": slug,
        "title": title,
        "type": "products",
        "created_at": created_at,
        "metadata": {
            "name": title,
            "short_description": format!("{title} fixture"),
            "price": "89.50",
            "sku": slug.to_uppercase(),
            "main_image": { "url": format!("https://cdn.example/{slug}.jpg") },
            "category": category,
            "applications": [],
            "stock_status": { "key": "in_stock", "value": "In Stock" },
            "featured": featured
        }
    })
}

/// Bind to port 0 and return the base URL.
pub async fn start_server(api: FakeApi) -> String {
    let app = Router::new()
        .route("/buckets/:bucket/objects", get(objects))
        .with_state(api);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn objects(
    State(api): State<FakeApi>,
    Path(bucket): Path<String>,
    Query(params): Query<Params>,
) -> Response {
    api.requests.lock().unwrap().push(params.clone());

    match bucket.as_str() {
        BUCKET => {}
        GARBLED_BUCKET => return (StatusCode::OK, "<html>maintenance</html>").into_response(),
        MISSHAPEN_BUCKET => {
            return (StatusCode::OK, Json(json!({ "objects": 42 }))).into_response()
        }
        _ => return error(StatusCode::NOT_FOUND, "Bucket not found"),
    }
    if params.get("read_key").map(String::as_str) != Some(READ_KEY) {
        return error(StatusCode::UNAUTHORIZED, "Invalid read key");
    }

    let filter: Value = params
        .get("query")
        .and_then(|q| serde_json::from_str(q).ok())
        .unwrap_or_default();
    let object_type = filter["type"].as_str().unwrap_or_default();
    let mut query = match filter["slug"].as_str() {
        Some(slug) => ObjectQuery::find_one(object_type, slug),
        None => ObjectQuery::find(object_type),
    };
    if let Some(props) = params.get("props") {
        let props: Vec<&str> = props.split(',').collect();
        query = query.props(&props);
    }
    if let Some(depth) = params.get("depth").and_then(|d| d.parse().ok()) {
        query = query.depth(depth);
    }

    match api.store.find(&query).await {
        Ok(objects) => {
            let total = objects.len();
            (StatusCode::OK, Json(json!({ "objects": objects, "total": total }))).into_response()
        }
        Err(StoreError::NotFound { .. }) => error(StatusCode::NOT_FOUND, "No objects found"),
        Err(StoreError::Status { status, message }) => error(
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            &message,
        ),
        Err(other) => error(StatusCode::INTERNAL_SERVER_ERROR, &other.to_string()),
    }
}

fn error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({ "status": status.as_u16(), "message": message })),
    )
        .into_response()
}
