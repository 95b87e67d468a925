//! Tool agent implementation (wraps AgentExecutor)

use crate::executor::AgentExecutor;
use agent_core::{Agent, Result, RunContext};
use async_trait::async_trait;

/// An agent definition bound to a provider
///
/// ToolAgent exposes the executor through the [`Agent`] trait, so callers
/// that manage their own [`RunContext`] can drive it directly.
pub struct ToolAgent<C> {
    executor: AgentExecutor<C>,
}

impl<C: Send + Sync + 'static> ToolAgent<C> {
    /// Create a new tool agent
    pub fn new(executor: AgentExecutor<C>) -> Self {
        Self { executor }
    }

    /// Get a reference to the underlying executor
    pub fn executor(&self) -> &AgentExecutor<C> {
        &self.executor
    }
}

#[async_trait]
impl<C: Send + Sync + 'static> Agent<C> for ToolAgent<C> {
    async fn process(&self, input: String, context: &mut RunContext<C>) -> Result<String> {
        let execution = self.executor.run(input, context).await?;
        Ok(execution.final_output)
    }

    fn name(&self) -> &str {
        self.executor.agent().name()
    }
}
