//! Shipping assistant demo: rate estimates via the ShipEngine API.
//!
//! Requires `SHIPENGINE_API_KEY`; fails before any network call without it.

use std::sync::Arc;

use agent_lab::llm::OpenAiCompatClient;
use agent_lab::tools::ShippingRate;
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
    let shipengine_key = config.require_shipengine()?.to_string();

    let client = Arc::new(OpenAiCompatClient::new(
        &config.base_url,
        &config.gemini_api_key,
    ));

    let agent = Agent::new(
        "Shipping Agent",
        "You are a shipping assistant. \
         When the user asks for costs, call the tool and then present: \
         1) query step, 2) processing step, 3) final cost. Be concise and clear.",
        ChatModel::new(config.model_or("gemini-2.5-flash"), client),
    )
    .with_tool(Arc::new(ShippingRate::new(shipengine_key)));

    let result = Runner::new(config.max_tool_rounds)
        .run(
            &agent,
            "Calculate shipping costs for a 5kg package from New York to Paris using the \
             ShipEngine API. Show your steps: 1) query API, 2) process data, 3) return cost.",
        )
        .await?;

    println!("{}", result.final_output);
    Ok(())
}
