use serde::{Deserialize, Serialize};

use super::{CategoryType, ImageRef, Object, Select};
use crate::CatalogRecord;

/// Display position given to categories without an explicit `sort_order`.
pub const SORT_ORDER_SENTINEL: i64 = 999;

pub type Category = Object<CategoryMetadata>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, CatalogRecord)]
#[record(object_type = "categories")]
pub struct CategoryMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    pub category_type: Select<CategoryType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
}

impl Category {
    /// Ordering key for display; categories without a `sort_order` go last.
    ///
    /// Only an absent value maps to the sentinel. An explicit `0` sorts
    /// first, unlike a falsy-default lookup which would also send it last.
    pub fn sort_key(&self) -> i64 {
        self.metadata.sort_order.unwrap_or(SORT_ORDER_SENTINEL)
    }
}
