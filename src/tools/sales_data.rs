//! Monthly sales figures tool backed by a fixed in-memory dataset.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::Tool;

#[derive(Debug, Deserialize)]
struct SalesQuery {
    year: i32,
    month: u32,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    product: Option<String>,
}

struct SalesRow {
    date: &'static str,
    sales: i64,
    region: &'static str,
    product: &'static str,
}

/// The only period with data. A real tool would query a database or API here.
const MARCH_2025: &[SalesRow] = &[
    SalesRow { date: "2025-03-01", sales: 12450, region: "NA", product: "Core" },
    SalesRow { date: "2025-03-08", sales: 13980, region: "EU", product: "Core" },
    SalesRow { date: "2025-03-15", sales: 15210, region: "APAC", product: "Pro" },
    SalesRow { date: "2025-03-22", sales: 16175, region: "NA", product: "Pro" },
    SalesRow { date: "2025-03-29", sales: 17040, region: "EU", product: "Core" },
];

const NO_DATA_MESSAGE: &str = "No sales data found for the requested period/filters.";

/// Retrieve sales figures for a given month/year, with optional
/// region/product filters.
pub struct SalesData;

#[async_trait]
impl Tool for SalesData {
    fn name(&self) -> &str {
        "sales_data_tool"
    }

    fn description(&self) -> &str {
        "Retrieve sales figures for a given month/year. Returns a flat list of strings for quick display."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "year": {
                    "type": "integer",
                    "description": "Four-digit year, e.g., 2025"
                },
                "month": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 12,
                    "description": "Month as number 1-12"
                },
                "region": {
                    "type": "string",
                    "description": "Optional region filter"
                },
                "product": {
                    "type": "string",
                    "description": "Optional product filter"
                }
            },
            "required": ["year", "month"]
        })
    }

    async fn execute(&self, args: Value) -> anyhow::Result<Value> {
        let query: SalesQuery = serde_json::from_value(args)?;
        if !(1..=12).contains(&query.month) {
            anyhow::bail!("month must be between 1 and 12, got {}", query.month);
        }
        Ok(json!({ "items": lookup(&query) }))
    }
}

fn lookup(query: &SalesQuery) -> Vec<String> {
    let mut rows: Vec<&SalesRow> = if query.year == 2025 && query.month == 3 {
        MARCH_2025.iter().collect()
    } else {
        Vec::new()
    };

    if let Some(region) = &query.region {
        rows.retain(|r| r.region.eq_ignore_ascii_case(region));
    }
    if let Some(product) = &query.product {
        rows.retain(|r| r.product.eq_ignore_ascii_case(product));
    }

    if rows.is_empty() {
        return vec![NO_DATA_MESSAGE.to_string()];
    }

    rows.iter()
        .map(|r| format!("{} — ${}", r.date, thousands(r.sales)))
        .collect()
}

/// Format an integer with comma thousands separators.
fn thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 {
        format!("-{}", out)
    } else {
        out
    }
}
