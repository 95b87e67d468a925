//! Agent definition: a named bundle of instructions and tools

use agent_core::{Error, Result};
use agent_tools::{Tool, ToolRegistry};
use std::fmt;
use std::sync::Arc;

/// Describes an agent without binding it to a provider
///
/// The definition is cheap to clone; clones share the tool registry.
///
/// # Example
///
/// ```
/// use agent_runtime::AgentDefinition;
/// use agent_tools::FunctionTool;
///
/// struct Book {
///     title: String,
/// }
///
/// let agent = AgentDefinition::builder("Library Agent")
///     .instructions("You are a helpful library assistant.")
///     .tool(FunctionTool::from_context("get_title", "Book title", |b: &Book| b.title.clone()))
///     .build()
///     .unwrap();
///
/// assert_eq!(agent.name(), "Library Agent");
/// assert_eq!(agent.tools().len(), 1);
/// ```
pub struct AgentDefinition<C> {
    name: String,
    instructions: String,
    tools: Arc<ToolRegistry<C>>,
    model: Option<String>,
}

impl<C: Send + Sync + 'static> AgentDefinition<C> {
    /// Start building a definition with the given name
    pub fn builder(name: impl Into<String>) -> AgentDefinitionBuilder<C> {
        AgentDefinitionBuilder::new(name)
    }

    /// Agent name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// System instructions (may be empty)
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// Tools available to the agent
    pub fn tools(&self) -> &Arc<ToolRegistry<C>> {
        &self.tools
    }

    /// Model override, if any
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }
}

impl<C> Clone for AgentDefinition<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            instructions: self.instructions.clone(),
            tools: Arc::clone(&self.tools),
            model: self.model.clone(),
        }
    }
}

impl<C> fmt::Debug for AgentDefinition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentDefinition")
            .field("name", &self.name)
            .field("instructions", &self.instructions)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

/// Builder for AgentDefinition
pub struct AgentDefinitionBuilder<C> {
    name: String,
    instructions: String,
    tools: ToolRegistry<C>,
    model: Option<String>,
}

impl<C: Send + Sync + 'static> AgentDefinitionBuilder<C> {
    /// Create a new builder
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: String::new(),
            tools: ToolRegistry::new(),
            model: None,
        }
    }

    /// Set the system instructions
    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Add a tool
    pub fn tool(self, tool: impl Tool<C> + 'static) -> Self {
        self.shared_tool(Arc::new(tool))
    }

    /// Add an already shared tool
    pub fn shared_tool(self, tool: Arc<dyn Tool<C>>) -> Self {
        self.tools.register(tool);
        self
    }

    /// Override the run's model for this agent
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Build the definition
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank
    pub fn build(self) -> Result<AgentDefinition<C>> {
        if self.name.trim().is_empty() {
            return Err(Error::InitializationFailed(
                "Agent name must not be empty".to_string(),
            ));
        }

        Ok(AgentDefinition {
            name: self.name,
            instructions: self.instructions,
            tools: Arc::new(self.tools),
            model: self.model,
        })
    }
}
