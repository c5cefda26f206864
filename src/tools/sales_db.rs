//! Mock sales database tool: an ephemeral in-memory SQLite table.

use async_trait::async_trait;
use rusqlite::types::ValueRef;
use rusqlite::Connection;
use serde::Deserialize;
use serde_json::{json, Value};

use super::Tool;

#[derive(Debug, Deserialize)]
struct QueryInput {
    q: String,
}

/// Execute a SQL query against a freshly seeded in-memory sales table.
///
/// The table is created, seeded, queried, and discarded per call; there is
/// no state between invocations.
pub struct QuerySales;

#[async_trait]
impl Tool for QuerySales {
    fn name(&self) -> &str {
        "query_sales"
    }

    fn description(&self) -> &str {
        "Executes a SQL query on a mock SQLite sales database with columns (id, month, revenue). Returns results as a list of rows."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "q": {
                    "type": "string",
                    "description": "The SQL query to run against the sales table"
                }
            },
            "required": ["q"]
        })
    }

    async fn execute(&self, args: Value) -> anyhow::Result<Value> {
        let input: QueryInput = serde_json::from_value(args)?;
        let rows = run_query(&input.q)?;
        Ok(json!({ "results": rows }))
    }
}

fn run_query(query: &str) -> anyhow::Result<Vec<Vec<Value>>> {
    let conn = Connection::open_in_memory()?;

    conn.execute(
        "CREATE TABLE sales (
            id INTEGER PRIMARY KEY,
            month TEXT,
            revenue INTEGER
        )",
        [],
    )?;

    let sample_data = [("Jan", 12000), ("Feb", 15000), ("Mar", 18000), ("Apr", 10000)];
    for (month, revenue) in sample_data {
        conn.execute(
            "INSERT INTO sales (month, revenue) VALUES (?1, ?2)",
            rusqlite::params![month, revenue],
        )?;
    }

    let mut stmt = conn.prepare(query)?;
    let column_count = stmt.column_count();

    let rows = stmt
        .query_map([], |row| {
            let mut values = Vec::with_capacity(column_count);
            for i in 0..column_count {
                values.push(json_value(row.get_ref(i)?));
            }
            Ok(values)
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn json_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => json!(i),
        ValueRef::Real(f) => json!(f),
        ValueRef::Text(t) => json!(String::from_utf8_lossy(t)),
        ValueRef::Blob(b) => json!(format!("<{} byte blob>", b.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn select_returns_seeded_rows() {
        let result = QuerySales
            .execute(json!({"q": "SELECT month, revenue FROM sales ORDER BY id"}))
            .await
            .expect("query should succeed");

        assert_eq!(
            result["results"],
            json!([
                ["Jan", 12000],
                ["Feb", 15000],
                ["Mar", 18000],
                ["Apr", 10000]
            ])
        );
    }

    #[tokio::test]
    async fn aggregate_query_works() {
        let result = QuerySales
            .execute(json!({"q": "SELECT SUM(revenue) FROM sales"}))
            .await
            .expect("query should succeed");
        assert_eq!(result["results"], json!([[55000]]));
    }

    #[tokio::test]
    async fn invalid_sql_is_an_error() {
        let err = QuerySales
            .execute(json!({"q": "SELECT nope FROM nowhere"}))
            .await
            .expect_err("bad SQL should fail");
        assert!(err.to_string().contains("nowhere") || err.to_string().contains("no such table"));
    }

    #[tokio::test]
    async fn table_is_ephemeral_across_calls() {
        // A mutation in one call must not leak into the next.
        QuerySales
            .execute(json!({"q": "DELETE FROM sales"}))
            .await
            .expect("delete should run");

        let result = QuerySales
            .execute(json!({"q": "SELECT COUNT(*) FROM sales"}))
            .await
            .expect("count should run");
        assert_eq!(result["results"], json!([[4]]));
    }
}
