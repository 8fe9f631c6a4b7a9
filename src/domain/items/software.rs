// Installed software version and pending update
use super::{zmdi, DataItemProvider, ItemId, ProviderRegistry};
use crate::domain::context::ProviderContext;
use crate::domain::error::DashboardError;
use crate::domain::row::ItemState;
use crate::domain::snapshot::TelemetrySnapshot;

pub fn register(registry: &mut ProviderRegistry) {
    registry.register(ItemId::Version, || Box::new(Version));
    registry.register(ItemId::NewVersion, || Box::new(NewVersion));
}

/// Pending version, if it differs from the installed one
fn pending_version(snapshot: &TelemetrySnapshot, installed: &str) -> Option<String> {
    snapshot
        .text("newVersion")
        .ok()
        .filter(|pending| pending != installed)
}

pub struct Version;

impl DataItemProvider for Version {
    fn derive(
        &mut self,
        snapshot: &TelemetrySnapshot,
        _ctx: &ProviderContext,
    ) -> Result<ItemState, DashboardError> {
        let installed = snapshot.text("version")?;
        let state = match pending_version(snapshot, &installed) {
            Some(pending) => ItemState::shown(
                zmdi("download"),
                "Software",
                format!("{} (update {} available)", installed, pending),
            ),
            None => ItemState::shown(zmdi("info-outline"), "Software", installed),
        };
        Ok(state)
    }
}

pub struct NewVersion;

impl DataItemProvider for NewVersion {
    fn derive(
        &mut self,
        snapshot: &TelemetrySnapshot,
        _ctx: &ProviderContext,
    ) -> Result<ItemState, DashboardError> {
        let installed = snapshot.text("version").unwrap_or_default();
        let pending = pending_version(snapshot, &installed)
            .ok_or(DashboardError::MissingSnapshotField("newVersion"))?;
        Ok(ItemState::shown(zmdi("download"), "Update available", pending))
    }
}
