//! Concrete LLM provider implementations
//!
//! - [`OpenAIProvider`]: any OpenAI-compatible chat completions endpoint
//! - [`OfflineProvider`]: deterministic stand-in that calls every offered tool
//! - [`ScriptedProvider`]: replays canned responses, recording each request

pub mod offline;
pub mod scripted;

#[cfg(feature = "openai")]
pub mod openai;

pub use offline::OfflineProvider;
pub use scripted::ScriptedProvider;

#[cfg(feature = "openai")]
pub use openai::{OpenAIConfig, OpenAIProvider};
