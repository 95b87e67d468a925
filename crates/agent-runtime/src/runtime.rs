//! Runner for context-aware agents
//!
//! The AgentRuntime holds the shared model provider, the run configuration
//! and optional hooks. [`AgentRuntime::run`] attaches a caller-owned context
//! value to one run of an agent and returns it in the [`RunResult`].

use agent_core::{Result, RunContext, Usage};
use agent_llm::{LLMProvider, Message};
use std::sync::Arc;
use tracing::info;

use crate::agents::{AgentDefinition, ToolAgent};
use crate::executor::{AgentExecutor, NoOpHooks, RunHooks};

/// Default model when neither the run nor the agent names one
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Configuration applied to every run of a runtime
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Model used unless the agent overrides it
    pub model: String,

    /// Maximum model calls per run (prevents endless tool loops)
    pub max_turns: usize,

    /// Max tokens per completion
    pub max_tokens: usize,

    /// Sampling temperature; provider default when unset
    pub temperature: Option<f32>,

    /// Name recorded on each run's context and in logs
    pub workflow_name: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_turns: 10,
            max_tokens: 1024,
            temperature: None,
            workflow_name: "Agent workflow".to_string(),
        }
    }
}

impl RunConfig {
    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the turn limit
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set the per-completion token limit
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the workflow name
    pub fn with_workflow_name(mut self, name: impl Into<String>) -> Self {
        self.workflow_name = name.into();
        self
    }
}

/// Result of one run
#[derive(Debug, Clone)]
pub struct RunResult<C> {
    /// Final text produced by the agent
    pub final_output: String,
    /// Name of the agent that produced the final output
    pub last_agent: String,
    /// Full conversation of the run
    pub messages: Vec<Message>,
    /// Model usage of the run
    pub usage: Usage,
    /// The context the run was started with
    pub context: C,
}

impl<C> RunResult<C> {
    /// Final text produced by the agent
    pub fn final_output(&self) -> &str {
        &self.final_output
    }
}

/// Runner for agents sharing one provider and configuration
///
/// # Example
///
/// ```no_run
/// use agent_llm::providers::OfflineProvider;
/// use agent_runtime::{AgentDefinition, AgentRuntime};
/// use agent_tools::FunctionTool;
/// use std::sync::Arc;
///
/// # async fn example() -> agent_core::Result<()> {
/// let runtime = AgentRuntime::builder()
///     .provider(Arc::new(OfflineProvider::new()))
///     .build()?;
///
/// let agent = AgentDefinition::builder("Greeter")
///     .tool(FunctionTool::from_context("greet", "Greeting", |name: &String| {
///         format!("Hello, {name}")
///     }))
///     .build()?;
///
/// let result = runtime.run(&agent, "Say hi", "Ada".to_string()).await?;
/// println!("{}", result.final_output());
/// # Ok(())
/// # }
/// ```
pub struct AgentRuntime {
    provider: Arc<dyn LLMProvider>,
    config: RunConfig,
    hooks: Arc<dyn RunHooks>,
}

impl AgentRuntime {
    /// Create a new runtime
    pub fn new(provider: Arc<dyn LLMProvider>, config: RunConfig) -> Self {
        Self {
            provider,
            config,
            hooks: Arc::new(NoOpHooks),
        }
    }

    /// Create a new runtime builder
    pub fn builder() -> AgentRuntimeBuilder {
        AgentRuntimeBuilder::new()
    }

    /// Get a reference to the model provider
    pub fn provider(&self) -> &Arc<dyn LLMProvider> {
        &self.provider
    }

    /// Get a reference to the run configuration
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Create an executor for one agent
    pub fn executor<C: Send + Sync + 'static>(&self, agent: &AgentDefinition<C>) -> AgentExecutor<C> {
        AgentExecutor::new(self.provider.clone(), agent.clone(), self.config.clone())
            .with_hooks(self.hooks.clone())
    }

    /// Bind an agent definition to this runtime
    pub fn create_tool_agent<C: Send + Sync + 'static>(&self, agent: AgentDefinition<C>) -> ToolAgent<C> {
        ToolAgent::new(self.executor(&agent))
    }

    /// Run an agent with `context` attached
    ///
    /// The context is available to every tool call of the run and is handed
    /// back in the result.
    ///
    /// # Errors
    ///
    /// Propagates any executor failure; the context is dropped in that case.
    pub async fn run<C: Send + Sync + 'static>(
        &self,
        agent: &AgentDefinition<C>,
        input: impl Into<String>,
        context: C,
    ) -> Result<RunResult<C>> {
        let mut ctx = RunContext::new(context).with_workflow_name(&self.config.workflow_name);

        info!(
            workflow = %self.config.workflow_name,
            agent = %agent.name(),
            provider = %self.provider.name(),
            "Starting run"
        );

        let execution = self.executor(agent).run(input, &mut ctx).await?;
        let (context, usage) = ctx.into_parts();

        info!(
            agent = %agent.name(),
            requests = usage.requests,
            total_tokens = usage.total_tokens(),
            "Run finished"
        );

        Ok(RunResult {
            final_output: execution.final_output,
            last_agent: agent.name().to_string(),
            messages: execution.messages,
            usage,
            context,
        })
    }
}

/// Builder for AgentRuntime
pub struct AgentRuntimeBuilder {
    provider: Option<Arc<dyn LLMProvider>>,
    config: RunConfig,
    hooks: Option<Arc<dyn RunHooks>>,
}

impl AgentRuntimeBuilder {
    /// Create a new runtime builder
    pub fn new() -> Self {
        Self {
            provider: None,
            config: RunConfig::default(),
            hooks: None,
        }
    }

    /// Set the model provider
    pub fn provider(mut self, provider: Arc<dyn LLMProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the run configuration
    pub fn config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the default model
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the turn limit
    pub fn max_turns(mut self, max_turns: usize) -> Self {
        self.config.max_turns = max_turns;
        self
    }

    /// Set hooks for every run
    pub fn hooks(mut self, hooks: Arc<dyn RunHooks>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    /// Build the runtime
    ///
    /// # Errors
    ///
    /// Returns an error if the provider is not set or `max_turns` is zero
    pub fn build(self) -> Result<AgentRuntime> {
        let provider = self.provider.ok_or_else(|| {
            agent_core::Error::InitializationFailed("Provider not set".to_string())
        })?;

        if self.config.max_turns == 0 {
            return Err(agent_core::Error::InitializationFailed(
                "max_turns must be greater than 0".to_string(),
            ));
        }

        let mut runtime = AgentRuntime::new(provider, self.config);
        if let Some(hooks) = self.hooks {
            runtime.hooks = hooks;
        }
        Ok(runtime)
    }
}

impl Default for AgentRuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_core::Agent;
    use agent_llm::CompletionResponse;
    use agent_llm::providers::{OfflineProvider, ScriptedProvider};
    use agent_tools::FunctionTool;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    struct Ticket {
        code: String,
    }

    fn ticket_agent() -> AgentDefinition<Ticket> {
        AgentDefinition::builder("Ticket Agent")
            .instructions("Always call the tool.")
            .tool(FunctionTool::from_context("get_ticket", "Ticket code", |t: &Ticket| {
                format!("Ticket {}", t.code)
            }))
            .build()
            .unwrap()
    }

    #[test]
    fn test_run_config_default() {
        let config = RunConfig::default();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.max_turns, 10);
        assert_eq!(config.max_tokens, 1024);
        assert!(config.temperature.is_none());
    }

    #[test]
    fn test_runtime_builder() {
        let runtime = AgentRuntime::builder()
            .provider(Arc::new(OfflineProvider::new()))
            .model("test-model")
            .max_turns(5)
            .build()
            .unwrap();

        assert_eq!(runtime.config().model, "test-model");
        assert_eq!(runtime.config().max_turns, 5);
        assert_eq!(runtime.provider().name(), "offline");
    }

    #[test]
    fn test_builder_requires_provider() {
        assert!(AgentRuntime::builder().build().is_err());
        assert!(
            AgentRuntime::builder()
                .provider(Arc::new(OfflineProvider::new()))
                .max_turns(0)
                .build()
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_run_returns_context_and_output() {
        let runtime = AgentRuntime::builder()
            .provider(Arc::new(OfflineProvider::new()))
            .build()
            .unwrap();
        let ticket = Ticket {
            code: "T-1".to_string(),
        };

        let result = runtime
            .run(&ticket_agent(), "Which ticket?", ticket.clone())
            .await
            .unwrap();

        assert_eq!(result.final_output(), "Ticket T-1");
        assert_eq!(result.last_agent, "Ticket Agent");
        assert_eq!(result.context, ticket);
        assert_eq!(result.usage.requests, 2);
    }

    #[tokio::test]
    async fn test_run_error_propagates() {
        let runtime = AgentRuntime::builder()
            .provider(Arc::new(ScriptedProvider::default()))
            .build()
            .unwrap();

        let result = runtime
            .run(
                &ticket_agent(),
                "hi",
                Ticket {
                    code: "T-2".to_string(),
                },
            )
            .await;
        assert!(matches!(result, Err(agent_core::Error::Provider(_))));
    }

    #[derive(Default)]
    struct RecordingHooks {
        events: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl RunHooks for RecordingHooks {
        async fn on_agent_start(&self, agent: &str) {
            self.events.lock().unwrap().push(format!("start:{agent}"));
        }

        async fn on_tool_end(
            &self,
            _agent: &str,
            tool: &str,
            result: std::result::Result<&str, &str>,
            _duration_ms: u64,
        ) {
            self.events
                .lock()
                .unwrap()
                .push(format!("tool:{tool}:{}", result.unwrap_or("<error>")));
        }

        async fn on_agent_end(&self, agent: &str, output: &str) {
            self.events.lock().unwrap().push(format!("end:{agent}:{output}"));
        }
    }

    #[tokio::test]
    async fn test_builder_hooks_observe_runs() {
        let hooks = Arc::new(RecordingHooks::default());
        let runtime = AgentRuntime::builder()
            .provider(Arc::new(OfflineProvider::new()))
            .hooks(hooks.clone())
            .build()
            .unwrap();

        runtime
            .run(
                &ticket_agent(),
                "Which ticket?",
                Ticket {
                    code: "T-9".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(
            *hooks.events.lock().unwrap(),
            vec![
                "start:Ticket Agent".to_string(),
                "tool:get_ticket:Ticket T-9".to_string(),
                "end:Ticket Agent:Ticket T-9".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_token_limit_and_temperature_reach_the_request() {
        let provider = Arc::new(ScriptedProvider::new([CompletionResponse::text("ok")]));
        let config = RunConfig::default()
            .with_max_tokens(256)
            .with_temperature(0.3);
        let runtime = AgentRuntime::new(provider.clone(), config);

        runtime
            .run(
                &ticket_agent(),
                "hi",
                Ticket {
                    code: "T-4".to_string(),
                },
            )
            .await
            .unwrap();

        let request = &provider.requests()[0];
        assert_eq!(request.max_tokens, 256);
        assert_eq!(request.temperature, Some(0.3));
    }

    #[tokio::test]
    async fn test_tool_agent_uses_caller_context() {
        let provider = Arc::new(ScriptedProvider::new([CompletionResponse::text("ok")]));
        let runtime = AgentRuntime::new(provider, RunConfig::default());
        let agent = runtime.create_tool_agent(ticket_agent());

        let mut ctx = RunContext::new(Ticket {
            code: "T-3".to_string(),
        });
        let output = agent.process("hi".to_string(), &mut ctx).await.unwrap();

        assert_eq!(output, "ok");
        assert_eq!(agent.name(), "Ticket Agent");
        assert_eq!(ctx.usage().requests, 1);
    }
}
