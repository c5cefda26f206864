//! Weather agent demo: one HTTP-backed tool.

use std::sync::Arc;

use agent_lab::llm::OpenAiCompatClient;
use agent_lab::tools::CurrentWeather;
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
    let weather_key = config.require_openweather()?.to_string();

    let client = Arc::new(OpenAiCompatClient::new(
        &config.base_url,
        &config.gemini_api_key,
    ));

    let agent = Agent::new(
        "weather agent",
        "You are a helpful agent. Always use tools when needed. Return concise answers.",
        ChatModel::new(config.model_or("gemini-2.5-flash"), client),
    )
    .with_tool(Arc::new(CurrentWeather::new(weather_key)));

    let result = Runner::new(config.max_tool_rounds)
        .run(
            &agent,
            "Use the weather API tool to get the current weather in Karachi, Pakistan. \
             Return the temperature and condition.",
        )
        .await?;

    println!("{}", result.final_output);
    Ok(())
}
