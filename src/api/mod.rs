//! API Module
//!
//! HTTP handlers and routing for the recipe gateway REST API.
//!
//! # Endpoints
//! - `GET /meals/...` - Recipe lookups, served through the response cache
//! - `GET /categories/...` - Category listings, served through the response cache
//! - `GET /meals/:id/chef-tips`, `POST /chef/ask` - Chef assistant
//! - `DELETE /cache` - Reset the response cache
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
