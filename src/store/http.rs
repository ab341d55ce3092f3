//! HTTP transport for the content store.
//!
//! Requires the `http` feature. Uses reqwest.
//!
//! ## Requests
//!
//! - `GET {api_url}/buckets/{bucket}/objects?query=..&props=..&depth=..&read_key=..`
//!   returns `{ "objects": [...], "total": n }`.
//! - A 404 means nothing matched; it is reported as `StoreError::NotFound`.

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use super::{ContentStore, ObjectQuery, StoreError};
use crate::config::StoreConfig;
use crate::model::Document;

/// Content store client over HTTP.
///
/// Holds one `reqwest::Client` (and its connection pool) for every request.
/// Cheap to clone; clones share the pool.
#[derive(Debug, Clone)]
pub struct HttpContentStore {
    client: reqwest::Client,
    config: StoreConfig,
}

#[derive(Deserialize)]
struct ObjectsResponse {
    #[serde(default)]
    objects: Vec<Document>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    message: String,
}

impl HttpContentStore {
    pub fn new(config: StoreConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Use a preconfigured client (proxy, custom TLS roots, timeouts...).
    pub fn with_client(client: reqwest::Client, config: StoreConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn objects_url(&self) -> String {
        format!(
            "{}/buckets/{}/objects",
            self.config.api_url.trim_end_matches('/'),
            self.config.bucket_slug
        )
    }
}

impl ContentStore for HttpContentStore {
    async fn find(&self, query: &ObjectQuery) -> Result<Vec<Document>, StoreError> {
        let mut params = query.params();
        params.push(("read_key", self.config.read_key.clone()));

        debug!(
            object_type = query.object_type(),
            slug = ?query.slug(),
            depth = query.expansion_depth(),
            "fetching objects from content store"
        );

        let response = self
            .client
            .get(self.objects_url())
            .query(&params)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound {
                object_type: query.object_type().to_string(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: status.as_u16(),
                message: error_message(&body, status),
            });
        }

        let body: ObjectsResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(body.objects)
    }
}

/// Pull `message` out of a JSON error body, falling back to the status reason.
fn error_message(body: &str, status: StatusCode) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("unexpected response")
                .to_string()
        })
}
