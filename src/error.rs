use std::error::Error;
use std::fmt;

use crate::store::StoreError;

/// Error type for primary catalog fetches (listings and single-record lookups).
///
/// Derived queries never return it; they log and fall back to empty results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The content store failed for a reason other than "not found".
    FetchFailure { resource: String, source: StoreError },
}

impl CatalogError {
    pub(crate) fn fetch(resource: impl Into<String>, source: StoreError) -> Self {
        CatalogError::FetchFailure {
            resource: resource.into(),
            source,
        }
    }

    /// The resource that could not be fetched (e.g. "products", "product: flood-200").
    pub fn resource(&self) -> &str {
        match self {
            CatalogError::FetchFailure { resource, .. } => resource,
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::FetchFailure { resource, .. } => {
                write!(f, "failed to fetch {}", resource)
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CatalogError::FetchFailure { source, .. } => Some(source),
        }
    }
}

/// Error type for loading `StoreConfig`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is unset or blank.
    Missing(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(var) => write!(f, "missing required setting {}", var),
        }
    }
}

impl Error for ConfigError {}
