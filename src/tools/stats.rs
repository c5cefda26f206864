//! Dataset statistics tool for trend analysis.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::Tool;

#[derive(Debug, Deserialize)]
struct StatsInput {
    dataset: Vec<i64>,
}

/// Compute the top trends (average, maximum, minimum) over a dataset.
pub struct DatasetStats;

#[async_trait]
impl Tool for DatasetStats {
    fn name(&self) -> &str {
        "stats_tool"
    }

    fn description(&self) -> &str {
        "Analyze a dataset and return the top 3 trends in a table format. Keeps context small and structured."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "dataset": {
                    "type": "array",
                    "items": {"type": "integer"},
                    "description": "The numeric values to analyze"
                }
            },
            "required": ["dataset"]
        })
    }

    async fn execute(&self, args: Value) -> anyhow::Result<Value> {
        let input: StatsInput = serde_json::from_value(args)?;
        Ok(json!({ "trends": trends(&input.dataset) }))
    }
}

fn trends(dataset: &[i64]) -> Vec<Value> {
    if dataset.is_empty() {
        return Vec::new();
    }

    let avg = dataset.iter().sum::<i64>() as f64 / dataset.len() as f64;
    let max = dataset.iter().max().copied().unwrap_or_default();
    let min = dataset.iter().min().copied().unwrap_or_default();

    vec![
        json!({"trend": "Average Value", "impact": format!("{:.2}", avg)}),
        json!({"trend": "Maximum Value", "impact": max.to_string()}),
        json!({"trend": "Minimum Value", "impact": min.to_string()}),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn computes_average_max_min() {
        let result = DatasetStats
            .execute(json!({"dataset": [12, 15, 20, 22, 18, 25, 30, 28]}))
            .await
            .expect("stats should succeed");

        let trends = result["trends"].as_array().expect("trends array");
        assert_eq!(trends.len(), 3);
        assert_eq!(trends[0]["trend"], "Average Value");
        assert_eq!(trends[0]["impact"], "21.25");
        assert_eq!(trends[1]["impact"], "30");
        assert_eq!(trends[2]["impact"], "12");
    }

    #[tokio::test]
    async fn empty_dataset_yields_no_trends() {
        let result = DatasetStats
            .execute(json!({"dataset": []}))
            .await
            .expect("stats should succeed");
        assert!(result["trends"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn repeated_invocation_is_idempotent() {
        let args = json!({"dataset": [12, 15, 20, 22, 18, 25, 30, 28]});
        let first = DatasetStats.execute(args.clone()).await.unwrap();
        let second = DatasetStats.execute(args).await.unwrap();
        assert_eq!(first, second);
    }
}
