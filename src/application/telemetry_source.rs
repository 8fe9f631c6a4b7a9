// Source of telemetry snapshots
use crate::domain::snapshot::TelemetrySnapshot;
use async_trait::async_trait;

#[async_trait]
pub trait TelemetrySource: Send + Sync {
    /// Fetch the latest complete snapshot.
    /// Partial or malformed payloads are errors and never reach the dashboard.
    async fn fetch_snapshot(&self) -> anyhow::Result<TelemetrySnapshot>;
}
