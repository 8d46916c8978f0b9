//! API endpoint configuration.
//!
//! The base URL is fixed at build time from `PHOTO_GALLERY_API_URL` so the
//! compiled bundle carries no runtime config lookup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Base URL used when `PHOTO_GALLERY_API_URL` is unset at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Location of the remote photo API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ApiConfig {
    /// Build a config for `base_url`, trimming trailing slashes.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    /// Read the build-time base URL, falling back to [`DEFAULT_API_BASE_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        match option_env!("PHOTO_GALLERY_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_API_BASE_URL),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an endpoint path onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
