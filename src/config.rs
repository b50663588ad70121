//! Configuration Module
//!
//! Handles loading and managing gateway configuration from environment variables.

use std::env;
use std::time::Duration;

/// Public TheMealDB endpoint (free test key)
pub const DEFAULT_MEALDB_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";
/// Gemini REST endpoint
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Model used for chef tips
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Gateway configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the response cache can hold
    pub max_entries: usize,
    /// Default TTL in seconds for cached upstream responses
    pub default_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the recipe API
    pub mealdb_base_url: String,
    /// Timeout in seconds for every upstream request
    pub request_timeout: u64,
    /// Gemini API key; chef features degrade to fallback text without it
    pub gemini_api_key: Option<String>,
    /// Gemini model name
    pub gemini_model: String,
    /// Base URL of the Gemini REST API
    pub gemini_base_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 100)
    /// - `DEFAULT_TTL` - Default cache TTL in seconds (default: 600)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `MEALDB_BASE_URL` - Recipe API base URL
    /// - `REQUEST_TIMEOUT` - Upstream timeout in seconds (default: 10)
    /// - `GEMINI_API_KEY` or `API_KEY` - Gemini credentials (default: unset)
    /// - `GEMINI_MODEL` - Gemini model (default: gemini-2.5-flash)
    /// - `GEMINI_BASE_URL` - Gemini API base URL
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_entries: parse_var("MAX_ENTRIES").unwrap_or(defaults.max_entries),
            default_ttl: parse_var("DEFAULT_TTL").unwrap_or(defaults.default_ttl),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            mealdb_base_url: string_var("MEALDB_BASE_URL").unwrap_or(defaults.mealdb_base_url),
            request_timeout: parse_var("REQUEST_TIMEOUT").unwrap_or(defaults.request_timeout),
            gemini_api_key: string_var("GEMINI_API_KEY").or_else(|| string_var("API_KEY")),
            gemini_model: string_var("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            gemini_base_url: string_var("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
        }
    }

    /// Default cache TTL as a Duration.
    pub fn cache_default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl)
    }

    /// Upstream request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn string_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: 100,
            default_ttl: 600,
            server_port: 3000,
            mealdb_base_url: DEFAULT_MEALDB_BASE_URL.to_string(),
            request_timeout: 10,
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }
}
