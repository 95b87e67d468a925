//! Closure-backed tools
//!
//! [`FunctionTool`] turns a plain function into a [`Tool`] so it can be
//! registered with an agent without writing a dedicated type.

use crate::Tool;
use agent_core::{Result, RunContext};
use agent_llm::tools::schema;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

type Handler<C> = Arc<dyn Fn(&RunContext<C>, Value) -> Result<Value> + Send + Sync>;

/// A tool backed by a synchronous function of the run context
///
/// # Example
///
/// ```
/// use agent_core::RunContext;
/// use agent_tools::{FunctionTool, Tool};
///
/// struct Account {
///     holder: String,
/// }
///
/// let tool = FunctionTool::from_context("get_holder", "Account holder name", |a: &Account| {
///     format!("Holder: {}", a.holder)
/// });
///
/// let ctx = RunContext::new(Account { holder: "Ada".into() });
/// let out = tokio_test::block_on(tool.execute(&ctx, serde_json::json!({}))).unwrap();
/// assert_eq!(out, "Holder: Ada");
/// ```
pub struct FunctionTool<C> {
    name: String,
    description: String,
    input_schema: Value,
    handler: Handler<C>,
}

impl<C: 'static> FunctionTool<C> {
    /// Create a tool from a handler taking the context and JSON parameters
    ///
    /// The input schema defaults to an object with no properties; override it
    /// with [`FunctionTool::with_schema`].
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&RunContext<C>, Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema: schema::empty_object(),
            handler: Arc::new(handler),
        }
    }

    /// Create an argument-free tool that renders the context value as text
    pub fn from_context<F>(
        name: impl Into<String>,
        description: impl Into<String>,
        render: F,
    ) -> Self
    where
        F: Fn(&C) -> String + Send + Sync + 'static,
    {
        Self::new(name, description, move |ctx: &RunContext<C>, _params| {
            Ok(Value::String(render(ctx.context())))
        })
    }

    /// Replace the input schema
    pub fn with_schema(mut self, input_schema: Value) -> Self {
        self.input_schema = input_schema;
        self
    }
}

impl<C> Clone for FunctionTool<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            description: self.description.clone(),
            input_schema: self.input_schema.clone(),
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<C> fmt::Debug for FunctionTool<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<C: Send + Sync + 'static> Tool<C> for FunctionTool<C> {
    async fn execute(&self, ctx: &RunContext<C>, params: Value) -> Result<Value> {
        (self.handler)(ctx, params)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn input_schema(&self) -> Value {
        self.input_schema.clone()
    }
}
