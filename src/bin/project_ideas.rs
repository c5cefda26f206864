//! Structured-output demo: project ideas as a Markdown table.

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
        "AI Agent",
        "You are an AI that always outputs structured data. \
         When asked for project ideas, always return them in a Markdown table with two columns: \
         Name and Description. \
         Always follow the format: | Name | Description |",
        ChatModel::new(config.model_or("gemini-2.0-flash"), client),
    );

    let result = Runner::new(config.max_tool_rounds)
        .run(
            &agent,
            "Generate three project ideas for an AI app. \
             Format the output as a table with columns 'Name' and 'Description.' \
             Example: | Name | Description | | AI Chat | A chatbot for customer support |",
        )
        .await?;

    println!("{}", result.final_output);
    Ok(())
}
