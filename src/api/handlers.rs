//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::cache::{ResponseCache, SharedCache};
use crate::chef::ChefClient;
use crate::config::Config;
use crate::error::{Result, ServiceError};
use crate::meals::{Category, Ingredient, Meal, MealDbClient, MealSummary};
use crate::models::{
    AskRequest, AskResponse, ChefTipsResponse, ClearResponse, HealthResponse, MealDetailResponse,
    SearchQuery, StatsResponse,
};

/// Application state shared across all handlers.
///
/// Owns the one response cache of the process; the meal client holds a
/// handle to the same instance.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Response cache shared with `meals`
    pub cache: SharedCache<Value>,
    /// Cache-through recipe API client
    pub meals: MealDbClient,
    /// Chef assistant
    pub chef: ChefClient,
}

impl AppState {
    /// Wires already-built collaborators together.
    pub fn new(cache: SharedCache<Value>, meals: MealDbClient, chef: ChefClient) -> Self {
        Self { cache, meals, chef }
    }

    /// Creates a new AppState from configuration.
    ///
    /// # Errors
    /// `InvalidConfig` when the cache capacity or TTL is zero.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = ResponseCache::shared(config.max_entries, config.cache_default_ttl())?;
        let meals = MealDbClient::new(
            &config.mealdb_base_url,
            config.request_timeout(),
            cache.clone(),
        )?;
        let chef = ChefClient::new(
            &config.gemini_base_url,
            &config.gemini_model,
            config.gemini_api_key.clone(),
            config.request_timeout(),
        )?;
        Ok(Self::new(cache, meals, chef))
    }

    async fn require_meal(&self, id: &str) -> Result<Meal> {
        self.meals
            .meal_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("meal {}", id)))
    }
}

/// Handler for GET /meals/search?s=
pub async fn search_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Meal>>> {
    Ok(Json(state.meals.search_meals(&query.s).await?))
}

/// Handler for GET /meals/random
pub async fn random_meal_handler(State(state): State<AppState>) -> Result<Json<Meal>> {
    let meal = state
        .meals
        .random_meal()
        .await?
        .ok_or_else(|| ServiceError::NotFound("random meal".to_string()))?;
    Ok(Json(meal))
}

/// Handler for GET /meals/:id
pub async fn meal_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Meal>> {
    Ok(Json(state.require_meal(&id).await?))
}

/// Handler for GET /meals/:id/ingredients
pub async fn ingredients_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Ingredient>>> {
    let meal = state.require_meal(&id).await?;
    Ok(Json(meal.ingredients()))
}

/// Handler for GET /meals/:id/details
pub async fn meal_details_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MealDetailResponse>> {
    let meal = state.require_meal(&id).await?;
    Ok(Json(MealDetailResponse::new(meal)))
}

/// Handler for GET /meals/:id/chef-tips
///
/// The meal lookup goes through the cache; the tips themselves never do.
pub async fn chef_tips_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ChefTipsResponse>> {
    let meal = state.require_meal(&id).await?;
    let tips = state.chef.chef_tips(&meal).await;
    Ok(Json(ChefTipsResponse {
        meal: meal.name,
        tips,
    }))
}

/// Handler for GET /categories
pub async fn categories_handler(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    Ok(Json(state.meals.categories().await?))
}

/// Handler for GET /categories/:name/meals
pub async fn category_meals_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<MealSummary>>> {
    Ok(Json(state.meals.meals_in_category(&name).await?))
}

/// Handler for POST /chef/ask
pub async fn ask_handler(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ServiceError::InvalidRequest(error_msg));
    }

    let answer = state.chef.ask(&req.question, req.meal_name.as_deref()).await;
    Ok(Json(AskResponse { answer }))
}

/// Handler for DELETE /cache
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let cleared = state.cache.lock().await.clear();
    info!("Response cache cleared: {} entries removed", cleared);
    Json(ClearResponse::new(cleared))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.lock().await;
    Json(StatsResponse::new(&cache.stats(), cache.capacity(), cache.default_ttl()))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.chef.is_configured()))
}
