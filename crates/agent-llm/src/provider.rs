//! LLM provider trait definition

use crate::{CompletionRequest, CompletionResponse, Result};
use async_trait::async_trait;

/// Trait for LLM providers
///
/// Implementations turn a provider-agnostic [`CompletionRequest`] into a call
/// against a concrete model service (or a local stand-in) and translate the
/// answer back into a [`CompletionResponse`].
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Generate a completion from the LLM
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;

    /// Get the provider name (e.g., "openai", "offline")
    fn name(&self) -> &str;
}
