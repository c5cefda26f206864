//! JSON-output demo: summarize a user profile into a JSON object.

use std::sync::Arc;

use agent_lab::llm::OpenAiCompatClient;
use agent_lab::{Agent, ChatModel, Config, Runner};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const PROFILE_DATA: &str = "\n\
    Name: Muniba Ahmed\n\
    Age: 29\n\
    Location: Karachi, Pakistan\n\
    Skills: Next.js, Tailwind CSS, TypeScript, Sanity, Stripe, ShipEngine, OpenAI Agents SDK\n\
    Interests: Teaching, Freelancing, AI Agents, Graphic Design\n\
    ";

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
        "Profile Summarizer",
        "You are an assistant that summarizes user profiles into JSON. \
         Always return output in JSON format starting with: {\"summary\": ...}. \
         Do not include extra explanations.",
        ChatModel::new(config.model_or("gemini-2.5-flash"), client),
    );

    let prompt = format!(
        "Summarize this user profile in JSON: {}. Start with: {{'summary':",
        PROFILE_DATA
    );
    let result = Runner::new(config.max_tool_rounds).run(&agent, &prompt).await?;

    println!("{}", result.final_output);
    Ok(())
}
