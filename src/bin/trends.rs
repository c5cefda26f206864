//! Trend analysis demo: the same tool driven by a vague and an optimized prompt.

use std::sync::Arc;

use agent_lab::llm::OpenAiCompatClient;
use agent_lab::tools::DatasetStats;
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
        "Trend Analysis Agent",
        "you are a helpful trend analysis assistent, you help user with analysis the trends.",
        ChatModel::new(config.model_or("gemini-2.0-flash"), client),
    )
    .with_tool(Arc::new(DatasetStats));

    let runner = Runner::new(config.max_tool_rounds);
    let dataset = [12, 15, 20, 22, 18, 25, 30, 28];
    let dataset_text = format!("{:?}", dataset);

    let vague = format!("Analyze trends in this dataset: {}", dataset_text);
    let first = runner.run(&agent, &vague).await?;

    let optimized = format!(
        "Analyze trends in this dataset using the stats tool: {} \
         Limit to top 3 trends in a table, keeping context under 500 tokens.",
        dataset_text
    );
    let second = runner.run(&agent, &optimized).await?;

    println!("\n--- Prompt 1 (Vague) ---");
    println!("{}", first.final_output);
    println!("\n--- Prompt 2 (Optimized) ---");
    println!("{}", second.final_output);
    Ok(())
}
