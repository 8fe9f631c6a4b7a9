// Live panel - the dashboard service shared between the poller and HTTP handlers
use crate::application::dashboard_service::{DashboardService, DashboardView};
use crate::domain::snapshot::TelemetrySnapshot;
use tokio::sync::{watch, RwLock};

pub struct LivePanel {
    service: RwLock<DashboardService>,
    revision: watch::Sender<u64>,
}

impl LivePanel {
    pub fn new(service: DashboardService) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            service: RwLock::new(service),
            revision,
        }
    }

    pub async fn on_snapshot(&self, snapshot: TelemetrySnapshot) {
        self.service.write().await.on_snapshot(snapshot);
        self.bump();
    }

    pub async fn on_credential_missing(&self) {
        self.service.write().await.on_credential_missing();
        self.bump();
    }

    pub async fn view(&self) -> DashboardView {
        self.service.read().await.view()
    }

    /// Revision counter, bumped after every applied event
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn bump(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }
}
