//! Listing filters for the product pages.
//!
//! The product listing and category detail pages narrow and re-sort a
//! listing that is already in memory. Every criterion is optional; an empty
//! `ProductFilter` keeps everything.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ordering::{featured_then_newest, newest_first};
use crate::model::{Category, CategoryType, ColorTemperature, LightType, Product};

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: Decimal) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Listing sort orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    /// Featured first, then newest.
    #[default]
    Featured,
    Newest,
    /// Name A-Z, ignoring case.
    Name,
    #[serde(rename = "price-low")]
    PriceLowToHigh,
    #[serde(rename = "price-high")]
    PriceHighToLow,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Featured => "featured",
            SortBy::Newest => "newest",
            SortBy::Name => "name",
            SortBy::PriceLowToHigh => "price-low",
            SortBy::PriceHighToLow => "price-high",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortBy::Featured => featured_then_newest(a, b),
            SortBy::Newest => newest_first(a, b),
            SortBy::Name => by_name(a, b),
            SortBy::PriceLowToHigh => a.metadata.price.cmp(&b.metadata.price),
            SortBy::PriceHighToLow => b.metadata.price.cmp(&a.metadata.price),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(SortBy::Featured),
            "newest" => Ok(SortBy::Newest),
            "name" => Ok(SortBy::Name),
            "price-low" | "price" => Ok(SortBy::PriceLowToHigh),
            "price-high" => Ok(SortBy::PriceHighToLow),
            other => Err(format!(
                "unknown sort '{}', expected featured, newest, name, price-low or price-high",
                other
            )),
        }
    }
}

fn by_name(a: &Product, b: &Product) -> Ordering {
    a.metadata
        .name
        .to_lowercase()
        .cmp(&b.metadata.name.to_lowercase())
        .then_with(|| a.metadata.name.cmp(&b.metadata.name))
}

/// Criteria for narrowing a product listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Matched against name, short description and category name, ignoring case.
    pub query: Option<String>,
    /// Category slug.
    pub category: Option<String>,
    pub category_type: Option<CategoryType>,
    pub price_range: Option<PriceRange>,
    pub featured: Option<bool>,
    pub in_stock: Option<bool>,
    pub light_type: Option<LightType>,
    pub color_temp: Option<ColorTemperature>,
    pub dimmable: Option<bool>,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn category(mut self, slug: impl Into<String>) -> Self {
        self.category = Some(slug.into());
        self
    }

    pub fn category_type(mut self, category_type: CategoryType) -> Self {
        self.category_type = Some(category_type);
        self
    }

    pub fn price_between(mut self, min: Decimal, max: Decimal) -> Self {
        self.price_range = Some(PriceRange::new(min, max));
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub fn in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    pub fn light_type(mut self, light_type: LightType) -> Self {
        self.light_type = Some(light_type);
        self
    }

    pub fn color_temp(mut self, color_temp: ColorTemperature) -> Self {
        self.color_temp = Some(color_temp);
        self
    }

    pub fn dimmable(mut self, dimmable: bool) -> Self {
        self.dimmable = Some(dimmable);
        self
    }

    /// True when `product` satisfies every criterion that is set.
    pub fn matches(&self, product: &Product) -> bool {
        let meta = &product.metadata;

        if let Some(query) = self.query.as_deref().filter(|q| !q.trim().is_empty()) {
            let needle = query.to_lowercase();
            let hit = meta.name.to_lowercase().contains(&needle)
                || meta.short_description.to_lowercase().contains(&needle)
                || meta.category.metadata.name.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(slug) = &self.category {
            if product.category_slug() != slug {
                return false;
            }
        }
        if let Some(category_type) = &self.category_type {
            if &meta.category.metadata.category_type.value != category_type {
                return false;
            }
        }
        if let Some(range) = &self.price_range {
            if !range.contains(meta.price) {
                return false;
            }
        }
        if let Some(featured) = self.featured {
            if meta.featured != featured {
                return false;
            }
        }
        if let Some(in_stock) = self.in_stock {
            if meta.is_in_stock() != in_stock {
                return false;
            }
        }
        if let Some(light_type) = &self.light_type {
            if meta.light_type.as_ref().map(|s| &s.value) != Some(light_type) {
                return false;
            }
        }
        if let Some(color_temp) = &self.color_temp {
            if meta.color_temp.as_ref().map(|s| &s.value) != Some(color_temp) {
                return false;
            }
        }
        if let Some(dimmable) = self.dimmable {
            if meta.dimmable.unwrap_or(false) != dimmable {
                return false;
            }
        }
        true
    }

    /// Matching products in `sort` order. Ties keep their input order.
    pub fn apply(&self, products: &[Product], sort: SortBy) -> Vec<Product> {
        let mut matched: Vec<Product> = products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();
        matched.sort_by(|a, b| sort.compare(a, b));
        matched
    }
}

/// Distinct category types, in first-seen order.
pub fn category_types(categories: &[Category]) -> Vec<CategoryType> {
    let mut types: Vec<CategoryType> = Vec::new();
    for category in categories {
        let value = &category.metadata.category_type.value;
        if !types.contains(value) {
            types.push(value.clone());
        }
    }
    types
}

/// Highest price in the listing, if it is not empty.
pub fn max_price(products: &[Product]) -> Option<Decimal> {
    products.iter().map(|p| p.metadata.price).max()
}
