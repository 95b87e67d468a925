//! Core abstractions for context-aware agents
//!
//! This crate defines the fundamental traits and types shared by the rest of
//! the workspace: the [`Agent`] trait, the [`RunContext`] wrapper that carries
//! a caller-supplied context value through a run, token [`Usage`] accounting,
//! and the common [`Error`] type.

pub mod agent;
pub mod context;
pub mod error;
pub mod usage;

pub use agent::Agent;
pub use context::RunContext;
pub use error::{Error, Result};
pub use usage::Usage;
