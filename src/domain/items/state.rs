// Vehicle state, lock status and data timestamp
use super::{zmdi, DataItemProvider, ItemId, ProviderRegistry};
use crate::domain::context::ProviderContext;
use crate::domain::error::DashboardError;
use crate::domain::row::ItemState;
use crate::domain::snapshot::TelemetrySnapshot;

const DATA_TIME_FORMAT: &str = "%a %d %b %H:%M";

pub fn register(registry: &mut ProviderRegistry) {
    registry.register(ItemId::State, || Box::new(CarState));
    registry.register(ItemId::Locked, || Box::new(Locked));
    registry.register(ItemId::DataTime, || Box::new(DataTime));
}

fn state_glyph(state: &str) -> &'static str {
    match state {
        "Driving" => "car",
        "Charging" => "battery-flash",
        "Sleeping" => "power",
        _ => "parking",
    }
}

pub struct CarState;

impl DataItemProvider for CarState {
    fn derive(
        &mut self,
        snapshot: &TelemetrySnapshot,
        _ctx: &ProviderContext,
    ) -> Result<ItemState, DashboardError> {
        let state = snapshot.text("carState")?;
        Ok(ItemState::shown(zmdi(state_glyph(&state)), "State", state))
    }
}

pub struct Locked;

impl DataItemProvider for Locked {
    fn derive(
        &mut self,
        snapshot: &TelemetrySnapshot,
        _ctx: &ProviderContext,
    ) -> Result<ItemState, DashboardError> {
        let state = if snapshot.flag("locked")? {
            ItemState::label_only(zmdi("lock-outline"), "Locked")
        } else {
            ItemState::label_only(zmdi("lock-open"), "Unlocked")
        };
        Ok(state)
    }
}

pub struct DataTime;

impl DataItemProvider for DataTime {
    fn derive(
        &mut self,
        snapshot: &TelemetrySnapshot,
        _ctx: &ProviderContext,
    ) -> Result<ItemState, DashboardError> {
        let at = snapshot.timestamp("Date")?;
        Ok(ItemState::shown(
            zmdi("time"),
            "Updated",
            at.format(DATA_TIME_FORMAT).to_string(),
        ))
    }
}
