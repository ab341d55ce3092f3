//! Content store - the remote document service the catalog reads from.
//!
//! `ContentStore` is the transport seam: the catalog repository is generic
//! over it, so the HTTP client used in production and the in-memory store
//! used in tests are interchangeable.
//!
//! ## Example
//!
//! ```ignore
//! use storefront_catalog::{ContentStore, InMemoryContentStore, ObjectQuery};
//!
//! let store = InMemoryContentStore::with_documents(fixtures);
//! let query = ObjectQuery::find("products").depth(1);
//! let documents = store.find(&query).await?;
//! ```

#[cfg(feature = "http")]
mod http;
mod in_memory;
mod query;

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use crate::model::Document;

#[cfg(feature = "http")]
pub use http::HttpContentStore;
pub use in_memory::InMemoryContentStore;
pub use query::{ObjectQuery, DEFAULT_PROPS};

/// Read access to a content store.
///
/// Implementations report "nothing matched" as `StoreError::NotFound` and
/// every other failure with a distinct kind, so callers branch on the error
/// kind instead of probing responses.
pub trait ContentStore: Send + Sync {
    /// Fetch every document matching the query.
    fn find(
        &self,
        query: &ObjectQuery,
    ) -> impl Future<Output = Result<Vec<Document>, StoreError>> + Send;

    /// Fetch the first document matching the query, if any.
    fn find_one(
        &self,
        query: &ObjectQuery,
    ) -> impl Future<Output = Result<Option<Document>, StoreError>> + Send {
        let query = query.clone().limit(1);
        async move { Ok(self.find(&query).await?.into_iter().next()) }
    }
}

impl<S: ContentStore> ContentStore for Arc<S> {
    fn find(
        &self,
        query: &ObjectQuery,
    ) -> impl Future<Output = Result<Vec<Document>, StoreError>> + Send {
        self.as_ref().find(query)
    }

    fn find_one(
        &self,
        query: &ObjectQuery,
    ) -> impl Future<Output = Result<Option<Document>, StoreError>> + Send {
        self.as_ref().find_one(query)
    }
}

/// Error type for content store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store has no documents matching the request.
    NotFound { object_type: String },
    /// The store answered with a non-success status.
    Status { status: u16, message: String },
    /// The request never got a response (connection, TLS, DNS...).
    Transport(String),
    /// The response body could not be decoded.
    Decode(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    /// HTTP-style status for this error, when one applies.
    pub fn status(&self) -> Option<u16> {
        match self {
            StoreError::NotFound { .. } => Some(404),
            StoreError::Status { status, .. } => Some(*status),
            StoreError::Transport(_) | StoreError::Decode(_) => None,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound { object_type } => {
                write!(f, "no {} found in content store", object_type)
            }
            StoreError::Status { status, message } => {
                write!(f, "content store returned {}: {}", status, message)
            }
            StoreError::Transport(msg) => write!(f, "content store unreachable: {}", msg),
            StoreError::Decode(msg) => write!(f, "content store response malformed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Decode(err.to_string())
    }
}
