// Display settings consumed by the data item providers
use serde::{Deserialize, Deserializer};

/// Most decimals a value is printed with
pub const MAX_PRECISION: usize = 100;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Miles,
    Km,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    C,
    F,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Units {
    #[serde(default)]
    pub distance: DistanceUnit,
    #[serde(default)]
    pub temperature: TemperatureUnit,
}

/// A circular area (radius in metres) in which the location is not shown
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExcludedLocation {
    pub lat: f64,
    pub lon: f64,
    pub radius: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DisplayConfig {
    #[serde(default)]
    pub units: Units,
    #[serde(default = "default_precision", deserialize_with = "clamp_precision")]
    pub precision: usize,
    #[serde(default = "default_battery_danger")]
    pub battery_danger: f64,
    #[serde(default = "default_battery_warning")]
    pub battery_warning: f64,
    #[serde(default)]
    pub exclude_locations: Vec<ExcludedLocation>,
    #[serde(default)]
    pub home_address: String,
    #[serde(default)]
    pub google_map_api_key: String,
    #[serde(default = "default_map_zoom")]
    pub map_zoom: u32,
    #[serde(default = "default_map_width")]
    pub map_width: u32,
    #[serde(default = "default_map_height")]
    pub map_height: u32,
    #[serde(default = "default_items")]
    pub items: Vec<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            units: Units::default(),
            precision: default_precision(),
            battery_danger: default_battery_danger(),
            battery_warning: default_battery_warning(),
            exclude_locations: Vec::new(),
            home_address: String::new(),
            google_map_api_key: String::new(),
            map_zoom: default_map_zoom(),
            map_width: default_map_width(),
            map_height: default_map_height(),
            items: default_items(),
        }
    }
}

fn default_precision() -> usize {
    1
}

fn clamp_precision<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(usize::deserialize(deserializer)?.min(MAX_PRECISION))
}

fn default_battery_danger() -> f64 {
    30.0
}

fn default_battery_warning() -> f64 {
    50.0
}

fn default_map_zoom() -> u32 {
    13
}

fn default_map_width() -> u32 {
    300
}

fn default_map_height() -> u32 {
    150
}

fn default_items() -> Vec<String> {
    [
        "state",
        "speed",
        "heading",
        "battery",
        "range",
        "range-estimated",
        "power-connected",
        "charge-time",
        "charge-added",
        "charge-power",
        "locked",
        "odometer",
        "temperature",
        "map",
        "version",
        "newVersion",
        "location",
        "data-time",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_document() {
        let config: DisplayConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DisplayConfig::default());
        assert_eq!(config.units.distance, DistanceUnit::Miles);
        assert_eq!(config.units.temperature, TemperatureUnit::C);
        assert_eq!(config.items.len(), 18);
    }

    #[test]
    fn test_units_are_lowercase() {
        let config: DisplayConfig = serde_json::from_str(
            r#"{"units": {"distance": "km", "temperature": "f"}, "precision": 0}"#,
        )
        .unwrap();
        assert_eq!(config.units.distance, DistanceUnit::Km);
        assert_eq!(config.units.temperature, TemperatureUnit::F);
        assert_eq!(config.precision, 0);
    }

    #[test]
    fn test_precision_clamped_to_max() {
        let config: DisplayConfig = serde_json::from_str(r#"{"precision": 400}"#).unwrap();
        assert_eq!(config.precision, MAX_PRECISION);
    }
}
