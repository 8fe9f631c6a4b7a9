use crate::application::polling_service::PollSettings;
use crate::domain::settings::DisplayConfig;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub teslafi: TeslaFiSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TeslaFiSettings {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_api_query")]
    pub api_query: String,
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    #[serde(default)]
    pub initial_load_delay_secs: u64,
}

impl Default for TeslaFiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: default_api_base(),
            api_query: default_api_query(),
            refresh_interval_secs: default_refresh_interval_secs(),
            retry_delay_ms: default_retry_delay_ms(),
            initial_load_delay_secs: 0,
        }
    }
}

impl TeslaFiSettings {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn poll_settings(&self) -> PollSettings {
        PollSettings {
            initial_load_delay: Duration::from_secs(self.initial_load_delay_secs),
            refresh_interval: Duration::from_secs(self.refresh_interval_secs),
            retry_delay: Duration::from_millis(self.retry_delay_ms),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

fn default_api_base() -> String {
    "https://www.teslafi.com/feed.php?token=".to_string()
}

fn default_api_query() -> String {
    "&command=lastGood".to_string()
}

fn default_refresh_interval_secs() -> u64 {
    60
}

fn default_retry_delay_ms() -> u64 {
    2500
}

fn default_listen() -> String {
    "0.0.0.0:8080".to_string()
}

// Values stay strings; numeric fields parse them on deserialize
fn environment() -> config::Environment {
    config::Environment::with_prefix("TESLAFI")
        .prefix_separator("__")
        .separator("__")
}

/// Load `config/dashboard.*` (optional) overlaid with `TESLAFI__*` environment variables
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(environment())
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::MAX_PRECISION;
    use config::{Config, File, FileFormat, Map};

    fn from_toml(toml: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = from_toml("");
        assert!(!config.teslafi.has_api_key());
        assert_eq!(config.server.listen, "0.0.0.0:8080");
        assert_eq!(
            config.teslafi.poll_settings(),
            PollSettings {
                initial_load_delay: Duration::ZERO,
                refresh_interval: Duration::from_secs(60),
                retry_delay: Duration::from_millis(2500),
            }
        );
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_full_document() {
        let config = from_toml(
            r#"
            [teslafi]
            api_key = "abc123"
            refresh_interval_secs = 120

            [display]
            precision = 0
            battery_danger = 20
            items = ["state", "battery"]

            [display.units]
            distance = "km"

            [[display.exclude_locations]]
            lat = 51.5
            lon = -0.12
            radius = 150
            "#,
        );

        assert!(config.teslafi.has_api_key());
        assert_eq!(config.teslafi.refresh_interval_secs, 120);
        assert_eq!(config.display.precision, 0);
        assert_eq!(config.display.battery_danger, 20.0);
        assert_eq!(config.display.battery_warning, 50.0);
        assert_eq!(config.display.items, vec!["state", "battery"]);
        assert_eq!(config.display.exclude_locations.len(), 1);
        assert_eq!(config.display.exclude_locations[0].radius, 150.0);
    }

    fn from_env(vars: &[(&str, &str)]) -> AppConfig {
        let vars: Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Config::builder()
            .add_source(environment().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_env_api_key_keeps_leading_zeros() {
        let config = from_env(&[
            ("TESLAFI__TESLAFI__API_KEY", "00123"),
            ("TESLAFI__TESLAFI__REFRESH_INTERVAL_SECS", "120"),
            ("TESLAFI__DISPLAY__HOME_ADDRESS", "10"),
        ]);

        assert_eq!(config.teslafi.api_key, "00123");
        assert_eq!(config.teslafi.refresh_interval_secs, 120);
        assert_eq!(config.display.home_address, "10");
    }

    #[test]
    fn test_precision_is_clamped() {
        let config = from_toml(
            r#"
            [display]
            precision = 400
            "#,
        );
        assert_eq!(config.display.precision, MAX_PRECISION);
    }
}
