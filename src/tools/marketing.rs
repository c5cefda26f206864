//! Marketing planner tools: audience analytics and budget totals.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::Tool;

#[derive(Debug, Deserialize)]
struct AnalyticsInput {
    target_audience: String,
    competitors: Vec<String>,
}

/// Summarize the target audience and competitor landscape.
pub struct Analytics;

#[async_trait]
impl Tool for Analytics {
    fn name(&self) -> &str {
        "analytics_tool"
    }

    fn description(&self) -> &str {
        "Analyze target audience and competitors."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "target_audience": {
                    "type": "string",
                    "description": "Who the campaign targets"
                },
                "competitors": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Competitor names"
                }
            },
            "required": ["target_audience", "competitors"]
        })
    }

    async fn execute(&self, args: Value) -> anyhow::Result<Value> {
        let input: AnalyticsInput = serde_json::from_value(args)?;
        Ok(json!({
            "audience_insights": format!("Targeting {}", input.target_audience),
            "competitor_summary": format!("Main competitors: {}", input.competitors.join(", ")),
        }))
    }
}

#[derive(Debug, Deserialize)]
struct BudgetInput {
    advertising: f64,
    influencers: f64,
    content_creation: f64,
}

/// Total a campaign budget across its line items.
pub struct BudgetCalculator;

#[async_trait]
impl Tool for BudgetCalculator {
    fn name(&self) -> &str {
        "budget_calculator_tool"
    }

    fn description(&self) -> &str {
        "Calculate total budget for marketing."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "advertising": {"type": "number"},
                "influencers": {"type": "number"},
                "content_creation": {"type": "number"}
            },
            "required": ["advertising", "influencers", "content_creation"]
        })
    }

    async fn execute(&self, args: Value) -> anyhow::Result<Value> {
        let input: BudgetInput = serde_json::from_value(args)?;
        let total = input.advertising + input.influencers + input.content_creation;
        Ok(json!({ "total_cost": total }))
    }
}
