//! Sales report demo: fixed-dataset lookup tool with typed filters.

use std::sync::Arc;

use agent_lab::llm::OpenAiCompatClient;
use agent_lab::tools::SalesData;
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
        "SalesDataAgent",
        "You are a precise data assistant. \
         When asked for sales figures, call `sales_data_tool` with the correct year and month. \
         Return results quickly as a simple list (one item per line). \
         Do not add extra commentary.",
        ChatModel::new(config.model_or("gemini-2.5-flash"), client),
    )
    .with_tool(Arc::new(SalesData));

    let result = Runner::new(config.max_tool_rounds)
        .run(
            &agent,
            "Use the sales data tool to retrieve sales figures for March 2025. \
             Return results quickly in a list.",
        )
        .await?;

    println!("{}", result.final_output);
    Ok(())
}
