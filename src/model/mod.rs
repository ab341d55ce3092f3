//! Catalog records - typed documents fetched from the content store.
//!
//! Every record in the store is a flat document (`id`, `slug`, `title`,
//! timestamps) carrying a typed `metadata` payload. `Object<M>` is that
//! document with the payload decoded into `M`; the three record kinds are
//! aliases over it.
//!
//! ## Example
//!
//! ```ignore
//! use storefront_catalog::{CatalogRecord, Document, Object};
//!
//! #[derive(Clone, Debug, Serialize, Deserialize, CatalogRecord)]
//! #[record(object_type = "brochures")]
//! struct BrochureMetadata {
//!     pub name: String,
//! }
//!
//! let brochure: Option<Object<BrochureMetadata>> = Document::new(json).decode()?;
//! ```

mod application;
mod category;
mod document;
mod product;
mod select;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

pub use application::{Application, ApplicationMetadata};
pub use category::{Category, CategoryMetadata, SORT_ORDER_SENTINEL};
pub use document::Document;
pub use product::{Product, ProductMetadata};
pub use select::{CategoryType, ColorTemperature, Environment, LightType, Select, StockStatus};

/// Trait for metadata payloads that identify a content-store object type.
///
/// Usually derived with `#[derive(CatalogRecord)]`.
pub trait RecordMetadata: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// The object type in the content store (e.g. "products", "categories").
    const OBJECT_TYPE: &'static str;
}

/// A content-store document with its metadata decoded into `M`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Object<M> {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
    pub metadata: M,
}

/// Opaque reference to an image hosted by the content store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
    #[serde(default)]
    pub imgix_url: String,
}

/// Opaque reference to a non-image file (e.g. a 3D model).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub url: String,
}

/// Treats an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
