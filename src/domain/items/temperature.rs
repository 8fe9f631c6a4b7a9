// Cabin and outside temperature
use super::{zmdi, DataItemProvider, ItemId, ProviderRegistry};
use crate::domain::context::ProviderContext;
use crate::domain::error::DashboardError;
use crate::domain::row::ItemState;
use crate::domain::snapshot::TelemetrySnapshot;

pub fn register(registry: &mut ProviderRegistry) {
    registry.register(ItemId::Temperature, || Box::new(Temperature));
}

pub struct Temperature;

impl DataItemProvider for Temperature {
    fn derive(
        &mut self,
        snapshot: &TelemetrySnapshot,
        ctx: &ProviderContext,
    ) -> Result<ItemState, DashboardError> {
        let inside = snapshot.number("inside_temp").map(|c| ctx.convert_temperature(c));
        let outside = snapshot.number("outside_temp").map(|c| ctx.convert_temperature(c));

        let value = match (inside, outside) {
            (Ok(inside), Ok(outside)) => format!("{} / {}", inside, outside),
            (Ok(only), Err(_)) | (Err(_), Ok(only)) => only,
            (Err(e), Err(_)) => return Err(e),
        };

        Ok(ItemState::shown(zmdi("thermometer"), "Temperature", value))
    }
}
