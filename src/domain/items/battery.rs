// Battery level with danger/warning styling
use super::{DataItemProvider, ItemId, ProviderRegistry};
use crate::domain::context::ProviderContext;
use crate::domain::error::DashboardError;
use crate::domain::row::ItemState;
use crate::domain::settings::DisplayConfig;
use crate::domain::snapshot::TelemetrySnapshot;

pub fn register(registry: &mut ProviderRegistry) {
    registry.register(ItemId::Battery, || Box::new(Battery));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryLevel {
    Danger,
    Warning,
    Normal,
}

impl BatteryLevel {
    /// Thresholds are exclusive: a level equal to a threshold is not below it
    pub fn classify(level: f64, config: &DisplayConfig) -> Self {
        if level < config.battery_danger {
            BatteryLevel::Danger
        } else if level < config.battery_warning {
            BatteryLevel::Warning
        } else {
            BatteryLevel::Normal
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            BatteryLevel::Danger => "danger",
            BatteryLevel::Warning => "warning",
            BatteryLevel::Normal => "normal",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            BatteryLevel::Danger => "battery-alert",
            BatteryLevel::Warning | BatteryLevel::Normal => "battery",
        }
    }
}

pub struct Battery;

impl DataItemProvider for Battery {
    fn derive(
        &mut self,
        snapshot: &TelemetrySnapshot,
        ctx: &ProviderContext,
    ) -> Result<ItemState, DashboardError> {
        let level = snapshot.number("usable_battery_level")?;
        let class = BatteryLevel::classify(level, &ctx.config);

        let icon = format!(
            r#"<span class="zmdi zmdi-{} zmdi-hc-fw battery-{}"></span>"#,
            class.glyph(),
            class.css_class()
        );

        let value = match snapshot.number("charge_limit_soc") {
            Ok(limit) => format!("{}% / {}%", level.round(), limit.round()),
            Err(_) => format!("{}%", level.round()),
        };

        Ok(ItemState::shown(icon, "Battery", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::items::test_support::derive;
    use serde_json::json;

    fn level(value: f64) -> BatteryLevel {
        BatteryLevel::classify(value, &DisplayConfig::default())
    }

    #[test]
    fn test_thresholds_are_strict() {
        assert_eq!(level(29.0), BatteryLevel::Danger);
        assert_eq!(level(30.0), BatteryLevel::Warning);
        assert_eq!(level(49.0), BatteryLevel::Warning);
        assert_eq!(level(50.0), BatteryLevel::Normal);
        assert_eq!(level(100.0), BatteryLevel::Normal);
    }

    #[test]
    fn test_icon_reflects_level() {
        let danger = derive(&mut Battery, json!({"usable_battery_level": "29"}));
        assert!(danger.icon.contains("battery-danger"));
        assert!(danger.icon.contains("zmdi-battery-alert"));

        let not_danger = derive(&mut Battery, json!({"usable_battery_level": "30"}));
        assert!(not_danger.icon.contains("battery-warning"));

        let normal = derive(&mut Battery, json!({"usable_battery_level": 50}));
        assert!(normal.icon.contains("battery-normal"));
    }

    #[test]
    fn test_value_with_and_without_charge_limit() {
        let state = derive(
            &mut Battery,
            json!({"usable_battery_level": "78", "charge_limit_soc": "90"}),
        );
        assert!(state.display);
        assert_eq!(state.value.as_deref(), Some("78% / 90%"));

        let state = derive(&mut Battery, json!({"usable_battery_level": 64}));
        assert_eq!(state.value.as_deref(), Some("64%"));
    }

    #[test]
    fn test_missing_level_hides() {
        assert!(!derive(&mut Battery, json!({"charge_limit_soc": "90"})).display);
    }
}
