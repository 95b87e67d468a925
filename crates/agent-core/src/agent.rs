//! Core Agent trait definition

use crate::{Result, RunContext};
use async_trait::async_trait;

/// Core trait that all runnable agents implement
///
/// An agent is generic over the context type `C` it is run with. The context
/// is owned by the caller and lent to the agent for the duration of one call;
/// the agent hands it to its tools through the [`RunContext`] wrapper.
#[async_trait]
pub trait Agent<C: Send + Sync>: Send + Sync {
    /// Process input and return the final output text
    async fn process(&self, input: String, context: &mut RunContext<C>) -> Result<String>;

    /// Get the agent's name
    fn name(&self) -> &str;

    /// Initialize the agent (optional)
    async fn initialize(&mut self) -> Result<()> {
        Ok(())
    }

    /// Shutdown the agent (optional)
    async fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shout;

    #[async_trait]
    impl Agent<String> for Shout {
        async fn process(&self, input: String, context: &mut RunContext<String>) -> Result<String> {
            Ok(format!("{} {}", context.context(), input.to_uppercase()))
        }

        fn name(&self) -> &str {
            "shout"
        }
    }

    #[test]
    fn test_agent_receives_context() {
        let mut agent = Shout;
        let mut ctx = RunContext::new("hey".to_string());

        let output = tokio_test::block_on(agent.process("there".to_string(), &mut ctx)).unwrap();
        assert_eq!(output, "hey THERE");
        assert_eq!(agent.name(), "shout");

        assert!(tokio_test::block_on(agent.initialize()).is_ok());
        assert!(tokio_test::block_on(agent.shutdown()).is_ok());
    }
}
