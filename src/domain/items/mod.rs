//! Data item providers.
//!
//! Each provider owns one dashboard row. On every snapshot it derives a fresh
//! [`ItemState`]: whether the row is shown and its icon, field and value.
//! Providers are registered by identifier in a [`ProviderRegistry`] and
//! instantiated once per dashboard.

pub mod battery;
pub mod charge;
pub mod driving;
pub mod location;
pub mod range;
pub mod registry;
pub mod software;
pub mod state;
pub mod temperature;

use std::fmt;
use std::str::FromStr;

use super::context::ProviderContext;
use super::error::DashboardError;
use super::row::ItemState;
use super::snapshot::TelemetrySnapshot;

pub use registry::{ProviderRegistry, ProviderSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemId {
    State,
    Speed,
    Heading,
    Battery,
    Range,
    RangeEstimated,
    PowerConnected,
    ChargeTime,
    ChargeAdded,
    ChargePower,
    Locked,
    Odometer,
    Temperature,
    Map,
    Version,
    NewVersion,
    Location,
    DataTime,
}

impl ItemId {
    pub const ALL: [ItemId; 18] = [
        ItemId::State,
        ItemId::Speed,
        ItemId::Heading,
        ItemId::Battery,
        ItemId::Range,
        ItemId::RangeEstimated,
        ItemId::PowerConnected,
        ItemId::ChargeTime,
        ItemId::ChargeAdded,
        ItemId::ChargePower,
        ItemId::Locked,
        ItemId::Odometer,
        ItemId::Temperature,
        ItemId::Map,
        ItemId::Version,
        ItemId::NewVersion,
        ItemId::Location,
        ItemId::DataTime,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ItemId::State => "state",
            ItemId::Speed => "speed",
            ItemId::Heading => "heading",
            ItemId::Battery => "battery",
            ItemId::Range => "range",
            ItemId::RangeEstimated => "range-estimated",
            ItemId::PowerConnected => "power-connected",
            ItemId::ChargeTime => "charge-time",
            ItemId::ChargeAdded => "charge-added",
            ItemId::ChargePower => "charge-power",
            ItemId::Locked => "locked",
            ItemId::Odometer => "odometer",
            ItemId::Temperature => "temperature",
            ItemId::Map => "map",
            ItemId::Version => "version",
            ItemId::NewVersion => "newVersion",
            ItemId::Location => "location",
            ItemId::DataTime => "data-time",
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemId {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownProviderIdentifier(s.to_string()))
    }
}

pub trait DataItemProvider: Send + Sync {
    /// Derive the full render state from the latest snapshot.
    /// An error hides the row for this snapshot.
    fn derive(
        &mut self,
        snapshot: &TelemetrySnapshot,
        ctx: &ProviderContext,
    ) -> Result<ItemState, DashboardError>;
}

pub type ProviderFactory = fn() -> Box<dyn DataItemProvider>;

/// Material Design Iconic Font glyph
pub(crate) fn zmdi(name: &str) -> String {
    format!(r#"<span class="zmdi zmdi-{} zmdi-hc-fw"></span>"#, name)
}
