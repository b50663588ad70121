//! API Routes
//!
//! Configures the Axum router with all gateway endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    ask_handler, categories_handler, category_meals_handler, chef_tips_handler,
    clear_cache_handler, health_handler, ingredients_handler, meal_details_handler, meal_handler,
    random_meal_handler, search_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /meals/search?s=` - Search meals by name
/// - `GET /meals/random` - One random meal (uncached)
/// - `GET /meals/:id` - Meal by id
/// - `GET /meals/:id/ingredients` - Parsed ingredient list
/// - `GET /meals/:id/details` - Meal, ingredients and video embed
/// - `GET /meals/:id/chef-tips` - AI chef tips for a meal
/// - `GET /categories` - All categories
/// - `GET /categories/:name/meals` - Meals in a category
/// - `POST /chef/ask` - Ask the chef a question
/// - `DELETE /cache` - Drop every cached response
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/meals/search", get(search_handler))
        .route("/meals/random", get(random_meal_handler))
        .route("/meals/:id", get(meal_handler))
        .route("/meals/:id/ingredients", get(ingredients_handler))
        .route("/meals/:id/details", get(meal_details_handler))
        .route("/meals/:id/chef-tips", get(chef_tips_handler))
        .route("/categories", get(categories_handler))
        .route("/categories/:name/meals", get(category_meals_handler))
        .route("/chef/ask", post(ask_handler))
        .route("/cache", delete(clear_cache_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
