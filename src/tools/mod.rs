//! Tool abstraction: typed callables the model may invoke mid-conversation.
//!
//! Each tool declares a JSON schema for its input. Arguments coming from the
//! model are deserialized into a typed struct before the handler runs, so a
//! schema violation surfaces as an error instead of reaching the handler.

mod marketing;
mod sales_data;
mod sales_db;
mod shipping;
mod stats;
mod weather;

pub use marketing::{Analytics, BudgetCalculator};
pub use sales_data::SalesData;
pub use sales_db::QuerySales;
pub use shipping::ShippingRate;
pub use stats::DatasetStats;
pub use weather::CurrentWeather;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::llm::ToolSchema;

/// A callable the model can request during a run.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name as exposed to the model.
    fn name(&self) -> &str;

    /// Description shown to the model when deciding whether to call.
    fn description(&self) -> &str;

    /// JSON schema of the tool's parameters.
    fn parameters_schema(&self) -> Value;

    /// Execute the tool with model-supplied arguments.
    async fn execute(&self, args: Value) -> anyhow::Result<Value>;
}

/// Ordered collection of the tools available to one agent.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. Registration order is the order schemas are sent to
    /// the model.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.push(tool);
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Schemas for all registered tools, in registration order.
    pub fn schemas(&self) -> Vec<ToolSchema> {
        self.tools
            .iter()
            .map(|t| ToolSchema::function(t.name(), t.description(), t.parameters_schema()))
            .collect()
    }

    /// Dispatch a call to the named tool.
    pub async fn execute(&self, name: &str, args: Value) -> anyhow::Result<Value> {
        let tool = self
            .tools
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| anyhow::anyhow!("Unknown tool: {}", name))?;

        tracing::debug!(tool = name, "executing tool");
        tool.execute(args).await
    }
}
