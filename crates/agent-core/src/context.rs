//! Run context handed to agents and their tools
//!
//! [`RunContext`] wraps an arbitrary caller-owned value (the *context*) and
//! adds the bookkeeping a run accumulates: token usage and a small key-value
//! store for run metadata. Tools receive a shared reference to it, so the
//! context value is readable from every tool call of a run.

use crate::Usage;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Well-known metadata keys
pub mod keys {
    /// Session ID for tracking
    pub const SESSION_ID: &str = "session_id";
    /// Name of the workflow the run belongs to
    pub const WORKFLOW_NAME: &str = "workflow_name";
}

/// Context wrapper passed through an agent run
///
/// # Example
///
/// ```
/// use agent_core::RunContext;
///
/// #[derive(Debug, PartialEq)]
/// struct Profile {
///     name: String,
/// }
///
/// let ctx = RunContext::new(Profile { name: "Ada".into() }).with_session_id("sess-1");
///
/// assert_eq!(ctx.context().name, "Ada");
/// assert_eq!(ctx.session_id(), Some("sess-1"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RunContext<C> {
    context: C,
    usage: Usage,
    metadata: HashMap<String, serde_json::Value>,
}

impl<C> RunContext<C> {
    /// Wrap a context value
    pub fn new(context: C) -> Self {
        Self {
            context,
            usage: Usage::default(),
            metadata: HashMap::new(),
        }
    }

    /// Borrow the wrapped context value
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Mutably borrow the wrapped context value
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Unwrap and return the context value
    pub fn into_inner(self) -> C {
        self.context
    }

    /// Split into the context value and the accumulated usage
    pub fn into_parts(self) -> (C, Usage) {
        (self.context, self.usage)
    }

    /// Usage accumulated so far
    pub fn usage(&self) -> &Usage {
        &self.usage
    }

    /// Mutable usage, updated by the executor after every model response
    pub fn usage_mut(&mut self) -> &mut Usage {
        &mut self.usage
    }

    // =========== Builder Methods ===========

    /// Set the session ID
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.insert(keys::SESSION_ID, serde_json::json!(session_id.into()));
        self
    }

    /// Set the workflow name
    pub fn with_workflow_name(mut self, name: impl Into<String>) -> Self {
        self.insert(keys::WORKFLOW_NAME, serde_json::json!(name.into()));
        self
    }

    // =========== Common Accessors ===========

    /// Get the session ID
    pub fn session_id(&self) -> Option<&str> {
        self.get(keys::SESSION_ID).and_then(|v| v.as_str())
    }

    /// Get the workflow name
    pub fn workflow_name(&self) -> Option<&str> {
        self.get(keys::WORKFLOW_NAME).and_then(|v| v.as_str())
    }

    // =========== Metadata Key-Value Operations ===========

    /// Insert a metadata value
    pub fn insert(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.metadata.insert(key.into(), value);
    }

    /// Get a metadata value
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.metadata.get(key)
    }

    /// Insert a typed metadata value, serialized to JSON
    pub fn insert_typed<T: Serialize>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> crate::Result<()> {
        let json_value = serde_json::to_value(value).map_err(|e| {
            crate::Error::ProcessingFailed(format!("Failed to serialize metadata value: {e}"))
        })?;
        self.metadata.insert(key.into(), json_value);
        Ok(())
    }

    /// Get a typed metadata value
    pub fn get_typed<T: for<'de> Deserialize<'de>>(&self, key: &str) -> crate::Result<Option<T>> {
        match self.metadata.get(key) {
            None => Ok(None),
            Some(value) => {
                let typed = serde_json::from_value(value.clone()).map_err(|e| {
                    crate::Error::ProcessingFailed(format!(
                        "Failed to deserialize metadata value: {e}"
                    ))
                })?;
                Ok(Some(typed))
            }
        }
    }

    /// Remove a metadata value
    pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.metadata.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Book {
        id: String,
        available: bool,
    }

    fn book() -> Book {
        Book {
            id: "BOOK-1".to_string(),
            available: true,
        }
    }

    #[test]
    fn test_context_access() {
        let mut ctx = RunContext::new(book());
        assert_eq!(ctx.context(), &book());

        ctx.context_mut().available = false;
        assert!(!ctx.context().available);

        let inner = ctx.into_inner();
        assert_eq!(inner.id, "BOOK-1");
    }

    #[test]
    fn test_usage_starts_empty() {
        let mut ctx = RunContext::new(());
        assert_eq!(ctx.usage().requests, 0);

        ctx.usage_mut().add(10, 2);
        let ((), usage) = ctx.into_parts();
        assert_eq!(usage.total_tokens(), 12);
    }

    #[test]
    fn test_metadata_builders() {
        let ctx = RunContext::new(())
            .with_session_id("sess-123")
            .with_workflow_name("demo");

        assert_eq!(ctx.session_id(), Some("sess-123"));
        assert_eq!(ctx.workflow_name(), Some("demo"));
    }

    #[test]
    fn test_typed_metadata() {
        let mut ctx = RunContext::new(());
        ctx.insert_typed("book", &book()).unwrap();

        let retrieved: Book = ctx.get_typed("book").unwrap().unwrap();
        assert_eq!(retrieved, book());

        let missing: Option<Book> = ctx.get_typed("missing").unwrap();
        assert!(missing.is_none());

        assert!(ctx.remove("book").is_some());
        assert!(ctx.get("book").is_none());
    }

    #[test]
    fn test_typed_metadata_mismatch() {
        let mut ctx = RunContext::new(());
        ctx.insert("book", serde_json::json!("not a book"));

        let result: crate::Result<Option<Book>> = ctx.get_typed("book");
        assert!(result.is_err());
    }
}
