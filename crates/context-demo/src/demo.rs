//! Sequential demo runs, one per agent and record

use crate::agents::{
    BANK_PROMPT, LIBRARY_PROMPT, STUDENT_PROMPT, bank_agent, library_agent, student_agent,
};
use crate::models::{BankAccount, LibraryBook, StudentProfile};
use agent_core::Result;
use agent_runtime::{AgentDefinition, AgentRuntime};
use std::fmt;
use tracing::info;

/// Final output of one demo run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoOutput {
    /// Name of the agent that answered
    pub agent: String,
    pub final_output: String,
}

impl fmt::Display for DemoOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.agent)?;
        write!(f, "{}", self.final_output)
    }
}

/// Run the bank, student and library agents in order
///
/// # Errors
///
/// The first failing run aborts the demo and its error is returned.
pub async fn run_demo(runtime: &AgentRuntime) -> Result<Vec<DemoOutput>> {
    run_demo_with(runtime, |_| {}).await
}

/// Like [`run_demo`], calling `on_output` as soon as each run finishes
///
/// # Errors
///
/// The first failing run aborts the demo and its error is returned.
pub async fn run_demo_with(
    runtime: &AgentRuntime,
    mut on_output: impl FnMut(&DemoOutput),
) -> Result<Vec<DemoOutput>> {
    let mut outputs = Vec::with_capacity(3);

    let bank = run_one(runtime, &bank_agent()?, BANK_PROMPT, BankAccount::sample()).await?;
    on_output(&bank);
    outputs.push(bank);

    let student = run_one(
        runtime,
        &student_agent()?,
        STUDENT_PROMPT,
        StudentProfile::sample(),
    )
    .await?;
    on_output(&student);
    outputs.push(student);

    let library = run_one(runtime, &library_agent()?, LIBRARY_PROMPT, LibraryBook::sample()).await?;
    on_output(&library);
    outputs.push(library);

    Ok(outputs)
}

async fn run_one<C: Send + Sync + 'static>(
    runtime: &AgentRuntime,
    agent: &AgentDefinition<C>,
    prompt: &str,
    context: C,
) -> Result<DemoOutput> {
    info!(agent = %agent.name(), "Running demo agent");
    let result = runtime.run(agent, prompt, context).await?;

    Ok(DemoOutput {
        agent: result.last_agent,
        final_output: result.final_output,
    })
}
