//! Response DTOs for the gateway API
//!
//! Defines the structure of outgoing HTTP response bodies. Recipe data itself
//! is returned using the types in `crate::meals`.

use std::time::Duration;

use serde::Serialize;

use crate::cache::CacheStats;
use crate::meals::{Ingredient, Meal};

/// Response body for `GET /meals/:id/details`
#[derive(Debug, Clone, Serialize)]
pub struct MealDetailResponse {
    pub meal: Meal,
    pub ingredients: Vec<Ingredient>,
    /// Embeddable video URL, when the recipe links one
    pub youtube_embed: Option<String>,
}

impl MealDetailResponse {
    pub fn new(meal: Meal) -> Self {
        Self {
            ingredients: meal.ingredients(),
            youtube_embed: meal.youtube_embed_url(),
            meal,
        }
    }
}

/// Response body for `GET /meals/:id/chef-tips`
#[derive(Debug, Clone, Serialize)]
pub struct ChefTipsResponse {
    /// Name of the meal the tips are for
    pub meal: String,
    /// Markdown text
    pub tips: String,
}

/// Response body for `POST /chef/ask`
#[derive(Debug, Clone, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Response body for `DELETE /cache`
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
    /// Number of entries dropped
    pub cleared: usize,
}

impl ClearResponse {
    pub fn new(cleared: usize) -> Self {
        Self {
            message: format!("Cache cleared ({} entries removed)", cleared),
            cleared,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses, expired reads included
    pub misses: u64,
    /// Number of LRU evictions
    pub evictions: u64,
    /// Number of entries dropped on an expired read
    pub expirations: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Configured maximum number of entries
    pub capacity: usize,
    /// TTL applied when a write gives none, in seconds
    pub default_ttl_secs: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &CacheStats, capacity: usize, default_ttl: Duration) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
            capacity,
            default_ttl_secs: default_ttl.as_secs(),
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Whether chef features have credentials
    pub chef_configured: bool,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(chef_configured: bool) -> Self {
        Self {
            status: "healthy".to_string(),
            chef_configured,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
