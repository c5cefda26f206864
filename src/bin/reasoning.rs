//! Step-by-step reasoning demo: no tools, one prompt.

use std::sync::Arc;

use agent_lab::llm::OpenAiCompatClient;
use agent_lab::{Agent, ChatModel, Config, Runner};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agent_lab=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let client = Arc::new(OpenAiCompatClient::new(
        &config.base_url,
        &config.gemini_api_key,
    ));

    let agent = Agent::new(
        "Reasoning Assistant",
        "You are a reasoning assistant. For every math question, always think step by step \
         and explain your logic before giving the final answer",
        ChatModel::new(config.model_or("gemini-2.0-flash"), client),
    );

    let result = Runner::new(config.max_tool_rounds)
        .run(
            &agent,
            "Determine if 42 is even or odd. Think step by step and explain your reasoning.",
        )
        .await?;

    println!("{}", result.final_output);
    Ok(())
}
