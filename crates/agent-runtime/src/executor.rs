//! Agent executor for running the model/tool loop
//!
//! The AgentExecutor implements the core agent loop pattern:
//! 1. Call the model with the conversation, instructions and available tools
//! 2. Check the stop reason
//! 3. If tools were requested, run them against the run context and loop back
//! 4. If the turn ended, return the final text

use crate::agents::AgentDefinition;
use crate::runtime::RunConfig;
use agent_core::{Error, Result, RunContext};
use agent_llm::{CompletionRequest, ContentBlock, LLMProvider, Message, StopReason};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Callbacks fired during a run
///
/// Implement this trait to observe agent and tool activity, e.g. to stream
/// tool status to a client or collect timings.
#[async_trait]
pub trait RunHooks: Send + Sync {
    /// Called before the first model request of a run
    async fn on_agent_start(&self, _agent: &str) {}

    /// Called when a tool execution starts
    async fn on_tool_start(&self, _agent: &str, _tool: &str, _input: &Value) {}

    /// Called when a tool execution completes
    async fn on_tool_end(
        &self,
        _agent: &str,
        _tool: &str,
        _result: std::result::Result<&str, &str>,
        _duration_ms: u64,
    ) {
    }

    /// Called when the agent produces its final output
    async fn on_agent_end(&self, _agent: &str, _output: &str) {}
}

/// Hooks that do nothing
pub struct NoOpHooks;

#[async_trait]
impl RunHooks for NoOpHooks {}

/// Outcome of one executor run
#[derive(Debug, Clone)]
pub struct Execution {
    /// Text of the final assistant turn
    pub final_output: String,
    /// Full conversation, starting with the user input
    pub messages: Vec<Message>,
}

/// Executes an agent loop: model → tool calls → execution → loop back
pub struct AgentExecutor<C> {
    provider: Arc<dyn LLMProvider>,
    agent: AgentDefinition<C>,
    config: RunConfig,
    hooks: Arc<dyn RunHooks>,
}

impl<C: Send + Sync + 'static> AgentExecutor<C> {
    /// Create a new agent executor
    pub fn new(provider: Arc<dyn LLMProvider>, agent: AgentDefinition<C>, config: RunConfig) -> Self {
        Self {
            provider,
            agent,
            config,
            hooks: Arc::new(NoOpHooks),
        }
    }

    /// Set the hooks receiving run events
    pub fn with_hooks(mut self, hooks: Arc<dyn RunHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    /// The agent this executor runs
    pub fn agent(&self) -> &AgentDefinition<C> {
        &self.agent
    }

    /// The run configuration
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Model used for requests: the agent override, else the run default
    pub fn model(&self) -> &str {
        self.agent.model().unwrap_or(&self.config.model)
    }

    /// Run the loop for one user input
    ///
    /// Token usage of every model response is added to `ctx`.
    ///
    /// # Errors
    ///
    /// Fails when the provider fails, when the response is truncated by the
    /// token limit, or when `max_turns` model calls pass without a final answer.
    #[instrument(skip_all, fields(agent = %self.agent.name(), model = %self.model()))]
    pub async fn run(&self, input: impl Into<String>, ctx: &mut RunContext<C>) -> Result<Execution> {
        let agent_name = self.agent.name();
        let mut conversation = vec![Message::user(input)];
        let tools = self.agent.tools().definitions();

        self.hooks.on_agent_start(agent_name).await;

        for turn in 1..=self.config.max_turns {
            info!(
                turn = turn,
                max_turns = self.config.max_turns,
                tool_count = tools.len(),
                "Sending request to model"
            );

            let mut builder = CompletionRequest::builder(self.model())
                .messages(conversation.clone())
                .max_tokens(self.config.max_tokens)
                .temperature(self.config.temperature)
                .tools(tools.clone());
            if !self.agent.instructions().is_empty() {
                builder = builder.system(self.agent.instructions());
            }

            let response = self
                .provider
                .complete(builder.build())
                .await?;

            ctx.usage_mut()
                .add(response.usage.input_tokens, response.usage.output_tokens);
            info!(
                stop_reason = ?response.stop_reason,
                input_tokens = response.usage.input_tokens,
                output_tokens = response.usage.output_tokens,
                "Model response received"
            );

            conversation.push(response.message.clone());

            match response.stop_reason {
                StopReason::EndTurn | StopReason::StopSequence => {
                    let text = response.message.text().unwrap_or_default().to_string();
                    info!(turn = turn, response_length = text.len(), "Agent completed");
                    self.hooks.on_agent_end(agent_name, &text).await;
                    return Ok(Execution {
                        final_output: text,
                        messages: conversation,
                    });
                }
                StopReason::ToolUse => {
                    let results = self.execute_tools(&response.message, ctx).await;
                    if results.is_empty() {
                        return Err(Error::ProcessingFailed(
                            "Model requested tool use without any tool calls".to_string(),
                        ));
                    }
                    debug!(result_count = results.len(), "Continuing agent loop");
                    conversation.extend(results);
                }
                StopReason::MaxTokens => {
                    warn!("Hit max tokens in model response");
                    return Err(Error::ProcessingFailed(
                        "Response truncated due to token limit".to_string(),
                    ));
                }
            }
        }

        warn!(max_turns = self.config.max_turns, "Max turns reached, stopping");
        Err(Error::MaxTurnsExceeded(self.config.max_turns))
    }

    /// Run every tool call of an assistant message against the context
    ///
    /// Failures, including unknown tool names, become error results so the
    /// model can react to them.
    async fn execute_tools(&self, message: &Message, ctx: &RunContext<C>) -> Vec<Message> {
        let agent_name = self.agent.name();
        let mut results = Vec::new();

        for block in message.tool_uses() {
            let ContentBlock::ToolUse { id, name, input } = block else {
                continue;
            };

            info!(tool_name = %name, tool_id = %id, "Executing tool");
            self.hooks.on_tool_start(agent_name, name, input).await;

            let start = Instant::now();
            let outcome = match self.agent.tools().get(name) {
                Some(tool) => tool.execute(ctx, input.clone()).await.map(render_output),
                None => Err(Error::tool(name.as_str(), "Tool not found")),
            };
            let duration_ms = start.elapsed().as_millis() as u64;

            match outcome {
                Ok(output) => {
                    info!(
                        tool_name = %name,
                        duration_ms = duration_ms,
                        result_length = output.len(),
                        "Tool execution succeeded"
                    );
                    self.hooks
                        .on_tool_end(agent_name, name, Ok(output.as_str()), duration_ms)
                        .await;
                    results.push(Message::tool_result(id.as_str(), output));
                }
                Err(e) => {
                    let error = e.to_string();
                    warn!(tool_name = %name, duration_ms = duration_ms, error = %error, "Tool execution failed");
                    self.hooks
                        .on_tool_end(agent_name, name, Err(error.as_str()), duration_ms)
                        .await;
                    results.push(Message::tool_error(id.as_str(), format!("Error: {error}")));
                }
            }
        }

        results
    }
}

/// Strings are passed through verbatim, other JSON is serialized
fn render_output(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
