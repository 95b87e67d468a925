//! Error types for LLM operations

use thiserror::Error;

/// Result type for LLM operations
pub type Result<T> = std::result::Result<T, LLMError>;

/// Errors produced by providers
#[derive(Error, Debug)]
pub enum LLMError {
    /// Non-success HTTP status without a more specific variant
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// HTTP 401
    #[error("Invalid API key or authentication failed")]
    AuthenticationFailed,

    /// HTTP 429
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// HTTP 400
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// HTTP 404; carries the requested model
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// The model called a tool with arguments that are not valid JSON
    #[error("Invalid arguments for tool '{tool}': {source}")]
    InvalidToolArguments {
        tool: String,
        #[source]
        source: serde_json::Error,
    },

    /// Transport failure (connect, timeout, body read)
    #[cfg(feature = "openai")]
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The response body did not have the expected shape
    #[error("Unexpected response format: {0}")]
    UnexpectedResponse(String),

    /// Missing or invalid provider settings
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl LLMError {
    /// Map a failed HTTP status to an error
    ///
    /// `body` is the response text, `model` the model that was requested.
    pub fn from_status(status: u16, body: String, model: &str) -> Self {
        match status {
            401 => Self::AuthenticationFailed,
            429 => Self::RateLimitExceeded(body),
            400 => Self::InvalidRequest(body),
            404 => Self::ModelNotFound(model.to_string()),
            _ => Self::RequestFailed(format!("HTTP {status}: {body}")),
        }
    }
}
