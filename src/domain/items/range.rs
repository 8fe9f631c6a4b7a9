// Distances reported by the feed: rated range, estimated range and odometer
use super::{zmdi, DataItemProvider, ItemId, ProviderRegistry};
use crate::domain::context::ProviderContext;
use crate::domain::error::DashboardError;
use crate::domain::row::ItemState;
use crate::domain::snapshot::TelemetrySnapshot;

pub fn register(registry: &mut ProviderRegistry) {
    registry.register(ItemId::Range, || {
        Box::new(Distance::new("battery_range", "Range", "gas-station"))
    });
    registry.register(ItemId::RangeEstimated, || {
        Box::new(Distance::new(
            "est_battery_range",
            "Range (estimated)",
            "gas-station",
        ))
    });
    registry.register(ItemId::Odometer, || {
        Box::new(Distance::new("odometer", "Odometer", "dot-circle-alt"))
    });
}

/// A single distance in miles, shown in the configured unit
pub struct Distance {
    key: &'static str,
    field: &'static str,
    glyph: &'static str,
}

impl Distance {
    pub fn new(key: &'static str, field: &'static str, glyph: &'static str) -> Self {
        Self { key, field, glyph }
    }
}

impl DataItemProvider for Distance {
    fn derive(
        &mut self,
        snapshot: &TelemetrySnapshot,
        ctx: &ProviderContext,
    ) -> Result<ItemState, DashboardError> {
        let miles = snapshot.number(self.key)?;
        Ok(ItemState::shown(
            zmdi(self.glyph),
            self.field,
            ctx.convert_distance(miles),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::items::test_support::{derive, derive_with};
    use crate::domain::settings::{DisplayConfig, DistanceUnit};
    use serde_json::json;

    #[test]
    fn test_range_in_miles() {
        let mut range = Distance::new("battery_range", "Range", "gas-station");
        let state = derive(&mut range, json!({"battery_range": "210.44"}));
        assert!(state.display);
        assert_eq!(state.field.as_deref(), Some("Range"));
        assert_eq!(state.value.as_deref(), Some("210.4 miles"));
    }

    #[test]
    fn test_odometer_in_km() {
        let mut config = DisplayConfig::default();
        config.units.distance = DistanceUnit::Km;
        config.precision = 0;
        let ctx = ProviderContext::new(config);

        let mut odometer = Distance::new("odometer", "Odometer", "dot-circle-alt");
        let state = derive_with(&mut odometer, json!({"odometer": 10000}), &ctx);
        assert_eq!(state.value.as_deref(), Some("16093 km"));
    }

    #[test]
    fn test_absent_or_null_hides() {
        let mut range = Distance::new("est_battery_range", "Range (estimated)", "gas-station");
        assert!(!derive(&mut range, json!({})).display);
        assert!(!derive(&mut range, json!({"est_battery_range": null})).display);
    }

    #[test]
    fn test_value_cleared_when_key_disappears() {
        let mut range = Distance::new("battery_range", "Range", "gas-station");
        assert!(derive(&mut range, json!({"battery_range": 100})).display);
        let state = derive(&mut range, json!({}));
        assert!(!state.display);
        assert_eq!(state.value, None);
    }
}
