//! Current weather tool backed by the OpenWeather API.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::Tool;

#[derive(Debug, Deserialize)]
struct WeatherInput {
    city: String,
    #[serde(default = "default_country")]
    country: String,
}

fn default_country() -> String {
    "UK".to_string()
}

/// Subset of the OpenWeather response we report back to the model.
#[derive(Debug, Deserialize)]
struct WeatherResponse {
    main: WeatherMain,
    weather: Vec<WeatherCondition>,
}

#[derive(Debug, Deserialize)]
struct WeatherMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct WeatherCondition {
    description: String,
}

/// Fetch the current weather for a city. Returns temperature (°C) and
/// weather condition.
pub struct CurrentWeather {
    api_key: String,
}

impl CurrentWeather {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl Tool for CurrentWeather {
    fn name(&self) -> &str {
        "get_weather"
    }

    fn description(&self) -> &str {
        "Fetches the current weather for a city using the OpenWeather API. Returns temperature in Celsius and the weather condition."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "City name, e.g. Karachi"
                },
                "country": {
                    "type": "string",
                    "description": "Country code or name (default: UK)"
                }
            },
            "required": ["city"]
        })
    }

    async fn execute(&self, args: Value) -> anyhow::Result<Value> {
        let input: WeatherInput = serde_json::from_value(args)?;

        let url = format!(
            "http://api.openweathermap.org/data/2.5/weather?q={},{}&appid={}&units=metric",
            urlencoding::encode(&input.city),
            urlencoding::encode(&input.country),
            self.api_key
        );

        let client = reqwest::Client::new();
        let response = client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("OpenWeather API error ({}): {}", status, body);
        }

        let weather: WeatherResponse = response.json().await.map_err(|e| {
            anyhow::anyhow!("Unexpected OpenWeather response shape: {}", e)
        })?;

        let condition = weather
            .weather
            .first()
            .map(|c| c.description.clone())
            .ok_or_else(|| anyhow::anyhow!("OpenWeather response has no weather conditions"))?;

        Ok(json!({
            "temperature": weather.main.temp,
            "condition": condition,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_defaults_to_uk() {
        let input: WeatherInput = serde_json::from_value(json!({"city": "London"})).unwrap();
        assert_eq!(input.country, "UK");
    }

    #[test]
    fn response_subset_parses() {
        let raw = r#"{
            "main": {"temp": 31.5, "humidity": 62},
            "weather": [{"id": 721, "description": "haze"}],
            "name": "Karachi"
        }"#;
        let parsed: WeatherResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.main.temp, 31.5);
        assert_eq!(parsed.weather[0].description, "haze");
    }
}
