//! Display orderings shared by the repository and the listing filter.

use std::cmp::Ordering;

use crate::model::{Category, Product};

/// Featured products first, then newest first. Stable for equal keys.
pub fn sort_featured_first(products: &mut [Product]) {
    products.sort_by(featured_then_newest);
}

/// Ascending `sort_order`, missing values last.
pub fn sort_categories(categories: &mut [Category]) {
    categories.sort_by_key(Category::sort_key);
}

pub(crate) fn featured_then_newest(a: &Product, b: &Product) -> Ordering {
    b.is_featured()
        .cmp(&a.is_featured())
        .then_with(|| newest_first(a, b))
}

/// Records without a creation time sort after dated ones.
pub(crate) fn newest_first(a: &Product, b: &Product) -> Ordering {
    b.created_at.cmp(&a.created_at)
}
