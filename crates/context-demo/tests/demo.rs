use agent_core::Error;
use agent_llm::providers::{OfflineProvider, ScriptedProvider};
use agent_llm::{CompletionResponse, ContentBlock, LLMError, Role};
use agent_runtime::AgentRuntime;
use context_demo::agents::{
    BANK_INSTRUCTIONS, BANK_PROMPT, LIBRARY_PROMPT, STUDENT_PROMPT, bank_agent,
};
use context_demo::tools::{bank_info, book_info, student_info};
use context_demo::{BankAccount, LibraryBook, StudentProfile, run_demo, run_demo_with};
use serde_json::json;
use std::sync::Arc;

fn offline_runtime() -> AgentRuntime {
    AgentRuntime::builder()
        .provider(Arc::new(OfflineProvider::new()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn offline_demo_answers_from_each_record() {
    let outputs = run_demo(&offline_runtime()).await.unwrap();

    let agents: Vec<_> = outputs.iter().map(|o| o.agent.as_str()).collect();
    assert_eq!(agents, ["Bank Agent", "Student Agent", "Library Agent"]);

    assert_eq!(outputs[0].final_output, bank_info(&BankAccount::sample()));
    assert_eq!(outputs[1].final_output, student_info(&StudentProfile::sample()));
    assert_eq!(outputs[2].final_output, book_info(&LibraryBook::sample()));

    for part in ["ACC-789456", "Fatima Khan", "75500.5", "savings"] {
        assert!(outputs[0].final_output.contains(part));
    }
    assert!(outputs[2].final_output.contains("John Smith"));
    assert!(outputs[2].final_output.contains("Available"));
}

#[tokio::test]
async fn outputs_are_reported_as_each_run_finishes() {
    let mut seen = Vec::new();
    let outputs = run_demo_with(&offline_runtime(), |output| seen.push(output.agent.clone()))
        .await
        .unwrap();

    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0], outputs[0].agent);
    assert_eq!(seen[2], "Library Agent");
}

#[tokio::test]
async fn run_hands_back_an_unchanged_context() {
    let runtime = offline_runtime();
    let account = BankAccount {
        account_number: "ACC-1".to_string(),
        account_name: "Ali Raza".to_string(),
        account_balance: 10.25,
        account_type: "current".to_string(),
    };

    let result = runtime
        .run(&bank_agent().unwrap(), BANK_PROMPT, account.clone())
        .await
        .unwrap();

    assert_eq!(result.context, account);
    assert!(result.final_output().contains("Ali Raza"));
    assert!(!result.final_output().contains("Fatima Khan"));
}

#[tokio::test]
async fn model_sees_prompts_instructions_and_tool_results() {
    let mut script = Vec::new();
    for (i, tool) in ["get_bank_info", "get_student_info", "get_book_info"]
        .into_iter()
        .enumerate()
    {
        script.push(CompletionResponse::tool_calls(vec![(
            format!("call_{i}"),
            tool.to_string(),
            json!({}),
        )]));
        script.push(CompletionResponse::text(format!("answer {i}")).with_usage(12, 4));
    }
    let provider = Arc::new(ScriptedProvider::new(script));
    let runtime = AgentRuntime::builder()
        .provider(provider.clone())
        .build()
        .unwrap();

    let outputs = run_demo(&runtime).await.unwrap();
    assert_eq!(outputs[1].final_output, "answer 1");
    assert_eq!(provider.remaining(), 0);

    let requests = provider.requests();
    assert_eq!(requests.len(), 6);

    let first = &requests[0];
    assert_eq!(first.system.as_deref(), Some(BANK_INSTRUCTIONS));
    assert_eq!(first.messages[0].role, Role::User);
    assert_eq!(first.messages[0].text(), Some(BANK_PROMPT));
    assert_eq!(first.tool_definitions()[0].name, "get_bank_info");

    assert_eq!(requests[2].messages[0].text(), Some(STUDENT_PROMPT));
    assert_eq!(requests[4].messages[0].text(), Some(LIBRARY_PROMPT));

    // Second request of the library run carries the rendered book
    let results: Vec<_> = requests[5]
        .messages
        .iter()
        .flat_map(|m| m.tool_results())
        .collect();
    assert_eq!(
        results,
        vec![&ContentBlock::ToolResult {
            tool_use_id: "call_2".to_string(),
            content: book_info(&LibraryBook::sample()),
            is_error: None,
        }]
    );
}

#[tokio::test]
async fn failing_run_aborts_the_demo() {
    let provider = Arc::new(ScriptedProvider::new([
        CompletionResponse::text("bank answer"),
    ]));
    provider.push_error(LLMError::RateLimitExceeded("slow down".to_string()));
    let runtime = AgentRuntime::builder()
        .provider(provider.clone())
        .build()
        .unwrap();

    let mut reported = 0;
    let result = run_demo_with(&runtime, |_| reported += 1).await;

    assert!(matches!(
        result,
        Err(Error::Provider(LLMError::RateLimitExceeded(_)))
    ));
    assert_eq!(reported, 1);
    assert_eq!(provider.requests().len(), 2);
}
