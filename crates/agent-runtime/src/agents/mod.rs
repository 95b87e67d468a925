//! Agent definitions and the runnable agent wrapper
//!
//! - AgentDefinition: name, instructions and tools, independent of any provider
//! - ToolAgent: a definition bound to a provider, implementing the Agent trait

pub mod definition;
pub mod tool;

pub use definition::{AgentDefinition, AgentDefinitionBuilder};
pub use tool::ToolAgent;
