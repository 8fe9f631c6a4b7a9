// TeslaFi feed client
use crate::application::telemetry_source::TelemetrySource;
use crate::domain::snapshot::TelemetrySnapshot;
use anyhow::{Context, Result};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct TeslaFiClient {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    api_query: String,
}

impl TeslaFiClient {
    pub fn new(api_base: String, api_key: String, api_query: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base,
            api_key,
            api_query,
        }
    }

    fn build_feed_url(&self) -> String {
        format!(
            "{}{}{}",
            self.api_base,
            urlencoding::encode(self.api_key.trim()),
            self.api_query
        )
    }
}

/// Parse a feed body; only a JSON object is a complete snapshot
pub fn parse_feed(body: &str) -> Result<TelemetrySnapshot> {
    let value: serde_json::Value =
        serde_json::from_str(body).context("Failed to parse TeslaFi response")?;
    TelemetrySnapshot::from_value(value).context("TeslaFi response is not a JSON object")
}

#[async_trait]
impl TelemetrySource for TeslaFiClient {
    async fn fetch_snapshot(&self) -> Result<TelemetrySnapshot> {
        let response = self
            .client
            .get(self.build_feed_url())
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request to TeslaFi")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("TeslaFi request failed with status {}: {}", status, body);
        }

        let body = response
            .text()
            .await
            .context("Failed to read TeslaFi response")?;

        parse_feed(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_feed_url() {
        let client = TeslaFiClient::new(
            "https://www.teslafi.com/feed.php?token=".to_string(),
            " a b&c ".to_string(),
            "&command=lastGood".to_string(),
        );
        assert_eq!(
            client.build_feed_url(),
            "https://www.teslafi.com/feed.php?token=a%20b%26c&command=lastGood"
        );
    }

    #[test]
    fn test_parse_feed() {
        let snapshot = parse_feed(r#"{"carState": "Sleeping", "battery_level": "80"}"#).unwrap();
        assert_eq!(snapshot.text("carState").unwrap(), "Sleeping");
    }

    #[test]
    fn test_parse_feed_rejects_malformed() {
        assert!(parse_feed("<html>Bad Gateway</html>").is_err());
        assert!(parse_feed(r#"{"carState": "Slee"#).is_err());
        assert!(parse_feed("[]").is_err());
        assert!(parse_feed("null").is_err());
    }
}
