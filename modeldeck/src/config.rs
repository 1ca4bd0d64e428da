//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with fallback
//! to deprecated variable names with warning logs.

use std::time::Duration;

/// Default platform API host
pub const DEFAULT_API_HOST: &str = "http://localhost:8000";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Get an environment variable with fallback to a deprecated name
///
/// If the new variable name is set, returns its value.
/// If only the old (deprecated) variable name is set, returns its value
/// and logs a deprecation warning.
///
/// # Example
/// ```
/// use modeldeck::config::get_env_with_fallback;
///
/// let host = get_env_with_fallback("MODELDECK_API_HOST", "API_HOST");
/// ```
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback and default value
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// Falls back to `default` if neither is set or parsing fails.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    get_env_with_fallback(new_name, old_name)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// `true/1/yes/on` (case-insensitive)
fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Platform client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    /// Base URL of the platform API (no trailing path)
    pub api_host: String,
    /// API key forwarded as a bearer token, if any
    pub api_key: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
    /// Dump every request/response exchange at debug level
    pub debug: bool,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            api_host: DEFAULT_API_HOST.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            debug: false,
        }
    }
}

impl PlatformConfig {
    /// Load platform configuration from environment variables.
    ///
    /// - `MODELDECK_API_HOST` (旧: `API_HOST`)
    /// - `MODELDECK_API_KEY` (旧: `API_KEY`)
    /// - `MODELDECK_TIMEOUT_SECS`
    /// - `MODELDECK_DEBUG`
    pub fn from_env() -> Self {
        let api_host = get_env_with_fallback_or("MODELDECK_API_HOST", "API_HOST", DEFAULT_API_HOST);
        let api_key = get_env_with_fallback("MODELDECK_API_KEY", "API_KEY")
            .filter(|key| !key.trim().is_empty());
        // 0 would expire every request immediately
        let timeout_secs = match get_env_with_fallback_parse(
            "MODELDECK_TIMEOUT_SECS",
            "MODELDECK_TIMEOUT_SECS",
            DEFAULT_TIMEOUT_SECS,
        ) {
            0 => DEFAULT_TIMEOUT_SECS,
            secs => secs,
        };
        let debug = get_env_with_fallback("MODELDECK_DEBUG", "MODELDECK_DEBUG")
            .map(|value| is_truthy(&value))
            .unwrap_or(false);

        Self {
            api_host,
            api_key,
            timeout: Duration::from_secs(timeout_secs),
            debug,
        }
    }

    /// Same configuration pointed at another host
    pub fn with_api_host(mut self, api_host: impl Into<String>) -> Self {
        self.api_host = api_host.into();
        self
    }

    /// Same configuration with the given API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}
