// Speed and heading - only shown while the car is being driven
use super::{zmdi, DataItemProvider, ItemId, ProviderRegistry};
use crate::domain::context::ProviderContext;
use crate::domain::error::DashboardError;
use crate::domain::row::ItemState;
use crate::domain::snapshot::TelemetrySnapshot;

pub const DRIVING_STATE: &str = "Driving";

pub fn register(registry: &mut ProviderRegistry) {
    registry.register(ItemId::Speed, || Box::new(Speed));
    registry.register(ItemId::Heading, || Box::new(Heading));
}

fn is_driving(snapshot: &TelemetrySnapshot) -> bool {
    snapshot
        .text("carState")
        .is_ok_and(|state| state == DRIVING_STATE)
}

pub struct Speed;

impl DataItemProvider for Speed {
    fn derive(
        &mut self,
        snapshot: &TelemetrySnapshot,
        ctx: &ProviderContext,
    ) -> Result<ItemState, DashboardError> {
        if !is_driving(snapshot) {
            return Ok(ItemState::hidden());
        }

        let speed = snapshot.number("speed")?;
        Ok(ItemState::shown(
            zmdi("time-countdown"),
            "Speed",
            ctx.convert_speed(speed),
        ))
    }
}

pub struct Heading;

impl DataItemProvider for Heading {
    fn derive(
        &mut self,
        snapshot: &TelemetrySnapshot,
        ctx: &ProviderContext,
    ) -> Result<ItemState, DashboardError> {
        if !is_driving(snapshot) {
            return Ok(ItemState::hidden());
        }

        let heading = snapshot.number("heading")?;
        Ok(ItemState::shown(
            zmdi("compass"),
            "Heading",
            ctx.convert_heading(heading),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::items::test_support::derive;
    use serde_json::json;

    #[test]
    fn test_hidden_unless_driving() {
        for state in ["Sleeping", "Idling", "Charging", "driving"] {
            let data = json!({"carState": state, "speed": "55", "heading": "90"});
            assert!(!derive(&mut Speed, data.clone()).display);
            assert!(!derive(&mut Heading, data).display);
        }
        assert!(!derive(&mut Speed, json!({"speed": 55})).display);
    }

    #[test]
    fn test_speed_while_driving() {
        let state = derive(&mut Speed, json!({"carState": "Driving", "speed": "55"}));
        assert!(state.display);
        assert_eq!(state.field.as_deref(), Some("Speed"));
        assert_eq!(state.value.as_deref(), Some("55.0 mph"));
    }

    #[test]
    fn test_heading_while_driving() {
        let state = derive(&mut Heading, json!({"carState": "Driving", "heading": 268}));
        assert!(state.display);
        assert_eq!(state.value.as_deref(), Some("West"));
    }

    #[test]
    fn test_driving_without_speed_is_hidden() {
        assert!(!derive(&mut Speed, json!({"carState": "Driving"})).display);
    }

    #[test]
    fn test_repeated_update_is_idempotent() {
        let data = json!({"carState": "Driving", "speed": "31.4"});
        let first = derive(&mut Speed, data.clone());
        let second = derive(&mut Speed, data);
        assert_eq!(first, second);
    }
}
