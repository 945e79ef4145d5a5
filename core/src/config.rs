//! Client configuration.
//!
//! The only setting is the service base URL. It defaults to the public
//! httpbin instance and can be overridden through `RESOURCE_API_BASE_URL`.

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://httpbin.org";

/// Environment variable consulted by `ClientConfig::from_env`.
pub const BASE_URL_ENV: &str = "RESOURCE_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from `RESOURCE_API_BASE_URL`, falling back to
    /// `DEFAULT_BASE_URL` when it is unset or empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` but with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(BASE_URL_ENV) {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
