use serde::{Deserialize, Serialize};

use super::{Environment, ImageRef, Object, Select};
use crate::CatalogRecord;

/// Where a product is typically used (warehouses, retail floors, gardens...).
pub type Application = Object<ApplicationMetadata>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, CatalogRecord)]
#[record(object_type = "applications")]
pub struct ApplicationMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    pub environment: Select<Environment>,
}
