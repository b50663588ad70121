//! Recipe API Client
//!
//! Fetch layer in front of TheMealDB. Every cacheable call consults the
//! response cache first, keyed by the full request URL.

use std::time::Duration;

use reqwest::{header::ACCEPT, Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use crate::cache::SharedCache;
use crate::error::{Result, ServiceError};
use crate::meals::models::{CategoriesEnvelope, Category, Meal, MealSummary, MealsEnvelope};

/// Characters of an invalid body kept in the log line.
const BODY_PREVIEW_LEN: usize = 100;

// == Meal DB Client ==
#[derive(Debug, Clone)]
pub struct MealDbClient {
    http: Client,
    base_url: String,
    cache: SharedCache<Value>,
}

impl MealDbClient {
    /// Creates a client for `base_url` that reads through `cache`.
    pub fn new(base_url: &str, timeout: Duration, cache: SharedCache<Value>) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache,
        })
    }

    // == Search ==
    /// Meals whose name matches `query`. A blank query yields no results
    /// without touching the network.
    pub async fn search_meals(&self, query: &str) -> Result<Vec<Meal>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        let url = self.endpoint("search.php", &[("s", query)])?;
        let envelope: MealsEnvelope<Meal> = decode(self.fetch_json(&url).await?)?;
        Ok(envelope.meals.unwrap_or_default())
    }

    // == Lookup ==
    pub async fn meal_by_id(&self, id: &str) -> Result<Option<Meal>> {
        let url = self.endpoint("lookup.php", &[("i", id)])?;
        let envelope: MealsEnvelope<Meal> = decode(self.fetch_json(&url).await?)?;
        Ok(envelope.meals.and_then(|meals| meals.into_iter().next()))
    }

    // == Random ==
    /// A random meal. Never cached, so repeated calls stay random.
    pub async fn random_meal(&self) -> Result<Option<Meal>> {
        let url = self.endpoint("random.php", &[])?;
        let body = self.request_text(&url).await?;
        let envelope: MealsEnvelope<Meal> = decode(parse_body(&url, &body)?)?;
        Ok(envelope.meals.and_then(|meals| meals.into_iter().next()))
    }

    // == Categories ==
    pub async fn categories(&self) -> Result<Vec<Category>> {
        let url = self.endpoint("categories.php", &[])?;
        let envelope: CategoriesEnvelope = decode(self.fetch_json(&url).await?)?;
        Ok(envelope.categories.unwrap_or_default())
    }

    /// Summaries of every meal in `category`.
    pub async fn meals_in_category(&self, category: &str) -> Result<Vec<MealSummary>> {
        let url = self.endpoint("filter.php", &[("c", category)])?;
        let envelope: MealsEnvelope<MealSummary> = decode(self.fetch_json(&url).await?)?;
        Ok(envelope.meals.unwrap_or_default())
    }

    // == Fetch JSON ==
    /// Cache-through GET. Only bodies that parse as JSON are stored.
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        let cached = self.cache.lock().await.get(url);
        if let Some(value) = cached {
            return Ok(value);
        }

        let body = self.request_text(url).await?;
        let value = parse_body(url, &body)?;

        self.cache.lock().await.set(url, value.clone(), None);
        Ok(value)
    }

    async fn request_text(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                error!("Fetch failed for {}: {}", url, e);
                ServiceError::Upstream(format!("request to {} failed", url))
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Fetch failed for {}: status {}", url, status);
            return Err(ServiceError::Upstream(format!(
                "API Error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or_default()
            )));
        }

        Ok(response.text().await?)
    }

    /// Full request URL; doubles as the cache key.
    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<String> {
        let raw = format!("{}/{}", self.base_url, path);
        let url = if params.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, params)
        };
        url.map(String::from)
            .map_err(|e| ServiceError::Internal(format!("invalid upstream URL {}: {}", raw, e)))
    }
}

fn parse_body(url: &str, body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(|_| {
        let preview: String = body.chars().take(BODY_PREVIEW_LEN).collect();
        error!(
            "Invalid JSON received from {}. Response preview: {}",
            url, preview
        );
        ServiceError::InvalidResponse("Invalid API response (not JSON)".to_string())
    })
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| ServiceError::InvalidResponse(format!("unexpected payload shape: {}", e)))
}
