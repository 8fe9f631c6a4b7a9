// Domain layer - telemetry snapshot, unit conversion and data item providers
pub mod context;
pub mod error;
pub mod items;
pub mod row;
pub mod settings;
pub mod snapshot;
pub mod units;
