//! Recipe Gateway - a caching front for a public recipe API
//!
//! Serves recipe searches, lookups and category listings through a bounded
//! response cache with TTL expiration and LRU eviction, and asks a Gemini
//! model for chef tips.

pub mod api;
pub mod cache;
pub mod chef;
pub mod config;
pub mod error;
pub mod meals;
pub mod models;

pub use api::AppState;
pub use cache::{ResponseCache, SharedCache};
pub use config::Config;
pub use error::ServiceError;
