//! Tone-control demo: concise professional answers under a word limit.

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
        "cost agent",
        "You are a professional AI assistant. \
         Always answer concisely in a professional tone. \
         Never exceed 50 words.",
        ChatModel::new(config.model_or("gemini-2.5-flash"), client),
    );

    let result = Runner::new(config.max_tool_rounds)
        .run(
            &agent,
            "Respond to this query in a concise, professional tone: \
             'What are the ethical concerns of AI?' Limit to 50 words.",
        )
        .await?;

    println!("{}", result.final_output);
    Ok(())
}
