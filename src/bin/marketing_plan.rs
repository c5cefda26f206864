//! Marketing planner demo: two tools feeding one campaign plan.

use std::sync::Arc;

use agent_lab::llm::OpenAiCompatClient;
use agent_lab::tools::{Analytics, BudgetCalculator};
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
        "Marketing Planner",
        "You are a marketing strategist. Use the analytics_tool and budget_calculator_tool \
         to build a detailed 3-month marketing campaign plan. \
         Always include: strategy, timeline, and costs. \
         Explain your reasoning step by step before giving the final structured plan.",
        ChatModel::new(config.model_or("gemini-2.5-flash"), client),
    )
    .with_tool(Arc::new(Analytics))
    .with_tool(Arc::new(BudgetCalculator));

    let result = Runner::new(config.max_tool_rounds)
        .run(
            &agent,
            "Develop a detailed marketing campaign plan using the analytics tool \
             and budget calculator tool. Include strategy, timeline, and costs for a 3-month \
             period. Explain your reasoning step by step.",
        )
        .await?;

    println!("\nFinal Marketing Plan:\n");
    println!("{}", result.final_output);
    Ok(())
}
