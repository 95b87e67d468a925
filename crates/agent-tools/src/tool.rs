//! Tool trait definition

use agent_core::{Result, RunContext};
use agent_llm::ToolDefinition;
use async_trait::async_trait;
use serde_json::Value;

/// Trait for tools that agents can execute
///
/// Each tool provides a name, description and JSON schema for its input.
/// The executor passes the run context alongside the model-supplied
/// parameters.
#[async_trait]
pub trait Tool<C>: Send + Sync {
    /// Execute the tool
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context of the current run
    /// * `params` - Tool input as JSON value (should match `input_schema`)
    async fn execute(&self, ctx: &RunContext<C>, params: Value) -> Result<Value>;

    /// Get the tool's name
    ///
    /// Must be unique within a [`crate::ToolRegistry`]
    fn name(&self) -> &str;

    /// Get the tool's description
    ///
    /// This description helps the LLM understand when to use this tool
    fn description(&self) -> &str;

    /// Get the tool's input schema (JSON Schema format)
    fn input_schema(&self) -> Value;

    /// Describe this tool for a completion request
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(self.name(), self.description(), self.input_schema())
    }
}
