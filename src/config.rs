//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend base URL is baked into the WASM bundle at compile time from
//! `WISHLIST_API_URL`; there is no runtime configuration surface.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Name of the compile-time environment variable holding the backend base URL.
pub const API_URL_VAR: &str = "WISHLIST_API_URL";

/// Base URL used when `WISHLIST_API_URL` is unset or blank.
pub const DEFAULT_API_URL: &str = "/api";

/// Local-storage key under which the session token is persisted.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Backend base URL resolved from the build environment.
pub fn api_base_url() -> String {
    resolve_base_url(option_env!("WISHLIST_API_URL"))
}

/// Resolve a raw configured value into a normalized base URL.
///
/// Blank values fall back to [`DEFAULT_API_URL`]; surrounding whitespace and
/// trailing slashes are removed so endpoint paths can be appended verbatim.
pub fn resolve_base_url(raw: Option<&str>) -> String {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_URL);
    value.trim_end_matches('/').to_owned()
}
