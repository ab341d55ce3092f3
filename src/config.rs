//! Content store connection settings.

use std::env;
use std::fmt;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "https://api.cosmicjs.com/v3";

pub const BUCKET_SLUG_VAR: &str = "COSMIC_BUCKET_SLUG";
pub const READ_KEY_VAR: &str = "COSMIC_READ_KEY";
pub const WRITE_KEY_VAR: &str = "COSMIC_WRITE_KEY";
pub const API_URL_VAR: &str = "COSMIC_API_URL";

/// Bucket identity and credentials for the content store.
///
/// The write key is carried so one config serves every client of the bucket,
/// but nothing in this crate sends it.
#[derive(Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub bucket_slug: String,
    pub read_key: String,
    pub write_key: Option<String>,
    pub api_url: String,
}

impl StoreConfig {
    pub fn new(bucket_slug: impl Into<String>, read_key: impl Into<String>) -> Self {
        Self {
            bucket_slug: bucket_slug.into(),
            read_key: read_key.into(),
            write_key: None,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    pub fn with_write_key(mut self, write_key: impl Into<String>) -> Self {
        self.write_key = Some(write_key.into());
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Read the config from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read the config through `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bucket_slug = get(BUCKET_SLUG_VAR).ok_or(ConfigError::Missing(BUCKET_SLUG_VAR))?;
        let read_key = get(READ_KEY_VAR).ok_or(ConfigError::Missing(READ_KEY_VAR))?;

        let mut config = StoreConfig::new(bucket_slug, read_key);
        config.write_key = get(WRITE_KEY_VAR);
        if let Some(api_url) = get(API_URL_VAR) {
            config.api_url = api_url;
        }
        Ok(config)
    }
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("bucket_slug", &self.bucket_slug)
            .field("read_key", &"<redacted>")
            .field("write_key", &self.write_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .finish()
    }
}
