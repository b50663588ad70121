//! Gemini client for the chef assistant.

use std::time::Duration;

use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::chef::prompts::{ask_prompt, chef_tips_prompt};
use crate::error::{Result, ServiceError};
use crate::meals::Meal;

pub const TIPS_EMPTY_REPLY: &str = "Sorry, the chef is busy right now!";
pub const TIPS_FAILURE_REPLY: &str =
    "I couldn't reach the chef right now. Please check your API key configuration.";
pub const ASK_EMPTY_REPLY: &str = "I have no words for that.";
pub const ASK_FAILURE_REPLY: &str = "Service unavailable.";

// == Chef Client ==
#[derive(Clone)]
pub struct ChefClient {
    http: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for ChefClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChefClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}

impl ChefClient {
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
        })
    }

    /// Whether an API key was configured.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    // == Chef Tips ==
    /// Markdown tips for `meal`. Never fails; problems turn into a fallback reply.
    pub async fn chef_tips(&self, meal: &Meal) -> String {
        match self.generate(&chef_tips_prompt(meal)).await {
            Ok(Some(text)) => text,
            Ok(None) => TIPS_EMPTY_REPLY.to_string(),
            Err(e) => {
                error!("Gemini error while writing tips for {}: {}", meal.name, e);
                TIPS_FAILURE_REPLY.to_string()
            }
        }
    }

    // == Ask ==
    /// Answers a cooking question. Never fails; problems turn into a fallback reply.
    pub async fn ask(&self, question: &str, meal_name: Option<&str>) -> String {
        match self.generate(&ask_prompt(question, meal_name)).await {
            Ok(Some(text)) => text,
            Ok(None) => ASK_EMPTY_REPLY.to_string(),
            Err(e) => {
                error!("Gemini error while answering a question: {}", e);
                ASK_FAILURE_REPLY.to_string()
            }
        }
    }

    /// One `generateContent` round trip. `Ok(None)` means the model replied
    /// with no usable text.
    async fn generate(&self, prompt: &str) -> Result<Option<String>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ServiceError::InvalidConfig("API Key missing".to_string()))?;

        debug!("Gemini request to model {}", self.model);

        let response = self
            .http
            .post(self.api_url())
            .query(&[("key", api_key)])
            .json(&request_body(prompt))
            .send()
            .await
            .map_err(|e| request_failed("request", e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
                .unwrap_or(text);
            return Err(ServiceError::Upstream(format!(
                "Gemini API error {}: {}",
                status.as_u16(),
                message
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| request_failed("response decode", e))?;
        Ok(extract_text(&body).filter(|text| !text.trim().is_empty()))
    }

    fn api_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

/// The request URL carries the API key, so it is stripped before the error
/// reaches a log line.
fn request_failed(stage: &str, err: reqwest::Error) -> ServiceError {
    ServiceError::Upstream(format!("Gemini {} failed: {}", stage, err.without_url()))
}

fn request_body(prompt: &str) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": prompt }]
        }]
    })
}

/// Joins the text parts of the first candidate, skipping parts tagged as
/// model thoughts unless nothing else is there.
pub(crate) fn extract_text(response: &Value) -> Option<String> {
    let parts = response["candidates"][0]["content"]["parts"].as_array()?;

    let answer: Vec<&str> = parts
        .iter()
        .filter(|p| !p["thought"].as_bool().unwrap_or(false))
        .filter_map(|p| p["text"].as_str())
        .collect();
    if !answer.is_empty() {
        return Some(answer.concat());
    }

    let thoughts: Vec<&str> = parts.iter().filter_map(|p| p["text"].as_str()).collect();
    if thoughts.is_empty() {
        None
    } else {
        Some(thoughts.concat())
    }
}
