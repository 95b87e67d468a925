//! Error types for agent-core

use thiserror::Error;

/// Result type alias for agent-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for agent operations
#[derive(Error, Debug)]
pub enum Error {
    /// Generic error message
    #[error("{0}")]
    Generic(String),

    /// Agent initialization failed
    #[error("Agent initialization failed: {0}")]
    InitializationFailed(String),

    /// Agent processing failed
    #[error("Agent processing failed: {0}")]
    ProcessingFailed(String),

    /// A tool body returned an error
    #[error("Tool '{tool}' failed: {message}")]
    ToolFailed {
        /// Name of the failing tool
        tool: String,
        /// Error description
        message: String,
    },

    /// The run did not finish within the configured number of turns
    #[error("Max turns ({0}) exceeded")]
    MaxTurnsExceeded(usize),

    /// The model provider failed
    #[error("Provider error: {0}")]
    Provider(#[from] agent_llm::LLMError),
}

impl Error {
    /// Build a [`Error::ToolFailed`] for the named tool
    pub fn tool(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ToolFailed {
            tool: tool.into(),
            message: message.into(),
        }
    }
}
