//! Agent runtime for running context-aware agents
//!
//! This crate provides the runtime infrastructure: [`AgentDefinition`] (a
//! named bundle of instructions and tools), the [`AgentExecutor`] that drives
//! the model/tool loop, [`RunHooks`] for observing a run, and the
//! [`AgentRuntime`] runner that attaches a caller's context to a run and
//! hands it back in the [`RunResult`].

pub mod agents;
pub mod executor;
pub mod runtime;

// Re-export key types
pub use agents::{AgentDefinition, AgentDefinitionBuilder, ToolAgent};
pub use executor::{AgentExecutor, Execution, NoOpHooks, RunHooks};
pub use runtime::{AgentRuntime, AgentRuntimeBuilder, DEFAULT_MODEL, RunConfig, RunResult};
