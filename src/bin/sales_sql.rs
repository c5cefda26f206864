//! Data-analyst demo: SQL queries against the mock in-memory sales table.

use std::sync::Arc;

use agent_lab::llm::OpenAiCompatClient;
use agent_lab::tools::QuerySales;
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
        "Data Agent",
        "You are a data analyst. Use the database query tool to analyze sales data \
         and summarize findings in clear bullet points.",
        ChatModel::new(config.model_or("gemini-2.0-flash"), client),
    )
    .with_tool(Arc::new(QuerySales));

    let result = Runner::new(config.max_tool_rounds)
        .run(
            &agent,
            "Act as a data analyst. Use the database query tool to analyze sales data \
             and identify trends for Q1 2025. Return results in bullet points.",
        )
        .await?;

    println!("{}", result.final_output);
    Ok(())
}
