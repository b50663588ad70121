//! Request DTOs for the gateway API
//!
//! Defines the structure of incoming query strings and JSON bodies.

use serde::Deserialize;

/// Upper bound on question length accepted by `POST /chef/ask`.
pub const MAX_QUESTION_LENGTH: usize = 1000;

/// Query string of `GET /meals/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    /// Free-text meal name; missing means empty
    #[serde(default)]
    pub s: String,
}

/// Request body of `POST /chef/ask`
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    /// The cooking question
    pub question: String,
    /// Recipe the user is looking at, if any
    #[serde(default)]
    pub meal_name: Option<String>,
}

impl AskRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.question.trim().is_empty() {
            return Some("Question cannot be empty".to_string());
        }
        if self.question.chars().count() > MAX_QUESTION_LENGTH {
            return Some(format!(
                "Question exceeds maximum length of {} characters",
                MAX_QUESTION_LENGTH
            ));
        }
        None
    }
}
