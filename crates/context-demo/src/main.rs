//! Context management demo
//!
//! Runs a bank, a student and a library agent. Each agent's tool reads the
//! record injected into its run and the model answers from that.
//!
//! # Usage
//!
//! ```bash
//! export OPENAI_API_KEY="sk-..."
//! cargo run --bin context-demo
//!
//! # Without a model endpoint
//! cargo run --bin context-demo -- --offline
//! ```

use agent_llm::LLMProvider;
use agent_llm::providers::{OfflineProvider, OpenAIConfig, OpenAIProvider};
use agent_runtime::{AgentRuntime, DEFAULT_MODEL, RunConfig};
use agent_utils::{Config, init_tracing_with, load_dotenv};
use clap::Parser;
use context_demo::run_demo_with;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "context-demo")]
#[command(about = "Agents whose tools read per-run context records", long_about = None)]
struct Args {
    /// Model name sent with every request
    #[arg(long, env = "AGENT_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Base URL of an OpenAI-compatible API
    #[arg(long, env = "OPENAI_API_BASE")]
    api_base: Option<String>,

    /// Maximum model calls per run
    #[arg(long, env = "AGENT_MAX_TURNS", default_value_t = 10)]
    max_turns: usize,

    /// Max tokens per completion
    #[arg(long, env = "AGENT_MAX_TOKENS", default_value_t = 1024)]
    max_tokens: usize,

    /// Sampling temperature; provider default when unset
    #[arg(long, env = "AGENT_TEMPERATURE")]
    temperature: Option<f32>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 120)]
    timeout: u64,

    /// Answer from tool results without calling a model
    #[arg(long)]
    offline: bool,
}

fn build_provider(args: &Args) -> anyhow::Result<Arc<dyn LLMProvider>> {
    if args.offline {
        return Ok(Arc::new(OfflineProvider::new()));
    }

    let mut config = OpenAIConfig::from_env()?.with_timeout(args.timeout);
    if let Some(api_base) = &args.api_base {
        config = config.with_api_base(api_base.as_str());
    }
    debug!(api_base = %config.api_base, "Using OpenAI-compatible provider");

    Ok(Arc::new(OpenAIProvider::with_config(config)?))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_path = load_dotenv();
    let config = Config::from_env();
    init_tracing_with(config.log_format, "warn");

    let args = Args::parse();
    info!(app = %config.app_name, env = %config.environment, ?dotenv_path, "Starting");

    let provider = build_provider(&args)?;
    let mut run_config = RunConfig::default()
        .with_model(&args.model)
        .with_max_turns(args.max_turns)
        .with_max_tokens(args.max_tokens)
        .with_workflow_name("Context management demo");
    if let Some(temperature) = args.temperature {
        run_config = run_config.with_temperature(temperature);
    }

    let runtime = AgentRuntime::builder()
        .provider(provider)
        .config(run_config)
        .build()?;

    run_demo_with(&runtime, |output| {
        println!("{output}");
        println!();
    })
    .await?;

    Ok(())
}
