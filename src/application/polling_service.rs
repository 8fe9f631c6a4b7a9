// Polling service - fetches telemetry on a fixed interval and feeds the panel
use crate::application::live_panel::LivePanel;
use crate::application::telemetry_source::TelemetrySource;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    pub initial_load_delay: Duration,
    pub refresh_interval: Duration,
    pub retry_delay: Duration,
}

#[derive(Clone)]
pub struct PollingService {
    source: Arc<dyn TelemetrySource>,
    panel: Arc<LivePanel>,
    settings: PollSettings,
}

impl PollingService {
    pub fn new(source: Arc<dyn TelemetrySource>, panel: Arc<LivePanel>, settings: PollSettings) -> Self {
        Self {
            source,
            panel,
            settings,
        }
    }

    /// Fetch one snapshot and hand it to the panel
    pub async fn poll_once(&self) -> anyhow::Result<()> {
        let snapshot = self.source.fetch_snapshot().await?;
        self.panel.on_snapshot(snapshot).await;
        Ok(())
    }

    pub async fn run(self) {
        tokio::time::sleep(self.settings.initial_load_delay).await;

        loop {
            let delay = match self.poll_once().await {
                Ok(()) => {
                    tracing::debug!("Telemetry updated");
                    self.settings.refresh_interval
                }
                Err(e) => {
                    tracing::error!("Error fetching telemetry: {:#}", e);
                    self.settings.retry_delay
                }
            };
            tokio::time::sleep(delay).await;
        }
    }
}
