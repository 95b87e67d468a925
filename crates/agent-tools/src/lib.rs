//! Tool framework for context-aware agents
//!
//! Tools are functions an agent exposes to the model. Every tool is generic
//! over the run's context type `C` and receives the [`agent_core::RunContext`]
//! on each call, so a tool can read the data the caller attached to the run.

pub mod function;
pub mod registry;
pub mod tool;

pub use function::FunctionTool;
pub use registry::ToolRegistry;
pub use tool::Tool;
