// Telemetry snapshot - one complete payload from the feed
use super::error::DashboardError;
use chrono::NaiveDateTime;
use serde_json::{Map, Value};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TelemetrySnapshot {
    fields: Map<String, Value>,
}

impl TelemetrySnapshot {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Accepts only a JSON object; anything else is not a snapshot
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self::new(fields)),
            _ => None,
        }
    }

    fn present(&self, key: &'static str) -> Result<&Value, DashboardError> {
        match self.fields.get(key) {
            None | Some(Value::Null) => Err(DashboardError::MissingSnapshotField(key)),
            Some(Value::String(s)) if s.trim().is_empty() => {
                Err(DashboardError::MissingSnapshotField(key))
            }
            Some(value) => Ok(value),
        }
    }

    /// Numeric value; the feed sends most numbers as strings.
    /// A present but unparseable value yields NaN rather than an error.
    pub fn number(&self, key: &'static str) -> Result<f64, DashboardError> {
        let value = match self.present(key)? {
            Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            Value::String(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
            Value::Bool(b) => f64::from(u8::from(*b)),
            _ => f64::NAN,
        };
        Ok(value)
    }

    pub fn text(&self, key: &'static str) -> Result<String, DashboardError> {
        let text = match self.present(key)? {
            Value::String(s) => s.trim().to_string(),
            other => other.to_string(),
        };
        Ok(text)
    }

    /// Accepts true/false as well as the feed's "1"/"0"
    pub fn flag(&self, key: &'static str) -> Result<bool, DashboardError> {
        let flag = match self.present(key)? {
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Value::String(s) => matches!(s.trim().to_lowercase().as_str(), "1" | "true" | "yes"),
            _ => false,
        };
        Ok(flag)
    }

    pub fn timestamp(&self, key: &'static str) -> Result<NaiveDateTime, DashboardError> {
        let raw = self.text(key)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT)
            .map_err(|_| DashboardError::MissingSnapshotField(key))
    }
}
