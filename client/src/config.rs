//! REST API location resolved at build time.
//!
//! The browser bundle cannot read process environment at runtime, so the base
//! URL is baked in from `ANIMAL_HOTELS_API_URL` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Where the external REST service lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build config from the `ANIMAL_HOTELS_API_URL` value captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("ANIMAL_HOTELS_API_URL"))
    }

    /// Build config from an optional raw base URL; blank values fall back to
    /// [`DEFAULT_API_BASE_URL`] and trailing slashes are dropped.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let base = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);
        Self { base_url: base.trim_end_matches('/').to_owned() }
    }

    /// Absolute URL for `path` under the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
