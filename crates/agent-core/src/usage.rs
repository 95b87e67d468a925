//! Token usage accounting across a run

use serde::{Deserialize, Serialize};

/// Aggregated model usage for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Number of completion requests sent to the model
    pub requests: usize,
    /// Prompt tokens consumed
    pub input_tokens: usize,
    /// Completion tokens produced
    pub output_tokens: usize,
}

impl Usage {
    /// Record one request with its token counts
    pub fn add(&mut self, input_tokens: usize, output_tokens: usize) {
        self.requests += 1;
        self.input_tokens += input_tokens;
        self.output_tokens += output_tokens;
    }

    /// Total tokens used (input + output)
    pub fn total_tokens(&self) -> usize {
        self.input_tokens + self.output_tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_accumulates() {
        let mut usage = Usage::default();
        usage.add(100, 20);
        usage.add(50, 5);

        assert_eq!(usage.requests, 2);
        assert_eq!(usage.input_tokens, 150);
        assert_eq!(usage.output_tokens, 25);
        assert_eq!(usage.total_tokens(), 175);
    }
}
