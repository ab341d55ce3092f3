use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::{
    null_as_default, Application, Category, ColorTemperature, FileRef, ImageRef, LightType,
    Object, Select, StockStatus,
};
use crate::CatalogRecord;

/// A lighting product. Prices are USD.
pub type Product = Object<ProductMetadata>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, CatalogRecord)]
#[record(object_type = "products")]
pub struct ProductMetadata {
    pub name: String,
    pub short_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_price: Option<Decimal>,
    pub sku: String,
    pub main_image: ImageRef,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gallery: Vec<ImageRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_3d: Option<FileRef>,
    /// Expanded category record (requested with depth 1).
    pub category: Category,
    #[serde(default, deserialize_with = "null_as_default")]
    pub applications: Vec<Application>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wattage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lumens: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_temp: Option<Select<ColorTemperature>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light_type: Option<Select<LightType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimmable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_color: Option<String>,
    pub stock_status: Select<StockStatus>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_keywords: Option<String>,
}

impl ProductMetadata {
    /// The compare-at price, only when it is strictly above the selling price.
    pub fn effective_compare_price(&self) -> Option<Decimal> {
        self.compare_price.filter(|compare| *compare > self.price)
    }

    /// Whole-percent discount versus the compare-at price, rounded half up.
    pub fn discount_percent(&self) -> Option<u32> {
        let compare = self.effective_compare_price()?;
        let ratio = (compare - self.price) / compare * Decimal::ONE_HUNDRED;
        ratio
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock_status.value == StockStatus::InStock
    }
}

impl Product {
    pub fn category_slug(&self) -> &str {
        &self.metadata.category.slug
    }

    pub fn is_featured(&self) -> bool {
        self.metadata.featured
    }

    /// Everything free-text search looks at, joined with spaces and lowercased.
    pub fn search_text(&self) -> String {
        let meta = &self.metadata;
        let mut parts: Vec<&str> = vec![
            self.title.as_str(),
            meta.name.as_str(),
            meta.short_description.as_str(),
            meta.description.as_deref().unwrap_or(""),
            meta.category.title.as_str(),
            meta.seo_keywords.as_deref().unwrap_or(""),
        ];
        parts.extend(meta.applications.iter().map(|app| app.title.as_str()));
        parts.join(" ").to_lowercase()
    }
}
