//! Deterministic provider for runs without a model endpoint

use crate::{CompletionRequest, CompletionResponse, ContentBlock, LLMProvider, Result, Role};
use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

/// Stand-in model that always uses the tools it is offered
///
/// On the first turn it requests every offered tool with empty arguments.
/// Once tool results are present it ends the turn, answering with the
/// results joined by newlines. Without tools it echoes the last user text.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineProvider;

impl OfflineProvider {
    /// Create an offline provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LLMProvider for OfflineProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let results: Vec<&str> = request
            .messages
            .iter()
            .flat_map(|m| m.tool_results())
            .filter_map(|block| match block {
                ContentBlock::ToolResult { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect();

        if !results.is_empty() {
            debug!(result_count = results.len(), "Offline provider answering from tool results");
            return Ok(CompletionResponse::text(results.join("\n")));
        }

        let tools = request.tool_definitions();
        if !tools.is_empty() {
            debug!(tool_count = tools.len(), "Offline provider requesting tools");
            let calls = tools
                .iter()
                .enumerate()
                .map(|(i, tool)| (format!("offline_call_{i}"), tool.name.clone(), json!({})))
                .collect();
            return Ok(CompletionResponse::tool_calls(calls));
        }

        let echo = request
            .messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .and_then(|m| m.text())
            .unwrap_or_default();
        Ok(CompletionResponse::text(echo))
    }

    fn name(&self) -> &'static str {
        "offline"
    }
}
