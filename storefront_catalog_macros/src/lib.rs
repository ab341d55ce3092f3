mod record;

use proc_macro::TokenStream;

// ============================================================================
// #[derive(CatalogRecord)] derive macro
// ============================================================================

/// Derive macro for the `RecordMetadata` trait.
///
/// # Usage
///
/// ```ignore
/// #[derive(Clone, Debug, Serialize, Deserialize, CatalogRecord)]
/// #[record(object_type = "products")]
/// struct ProductMetadata {
///     pub name: String,
///     pub price: Decimal,
/// }
/// ```
///
/// - `#[record(object_type = "...")]` sets the content-store object type.
///   If omitted, the struct name is converted to snake_case, a trailing
///   `_metadata` is dropped and an `s` is appended (`ProductMetadata` becomes
///   `products`).
#[proc_macro_derive(CatalogRecord, attributes(record))]
pub fn derive_catalog_record(input: TokenStream) -> TokenStream {
    record::derive_catalog_record(input)
}
