// Dashboard service - applies snapshots to the providers and builds the panel rows
use crate::domain::context::ProviderContext;
use crate::domain::error::DashboardError;
use crate::domain::items::{ProviderRegistry, ProviderSet};
use crate::domain::row::DisplayRow;
use crate::domain::snapshot::TelemetrySnapshot;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelStatus {
    Loading,
    NoApiKey,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DashboardView {
    Loading,
    NoApiKey,
    Ready {
        title: Option<String>,
        rows: Vec<DisplayRow>,
    },
}

pub struct DashboardService {
    items: Vec<String>,
    providers: ProviderSet,
    status: PanelStatus,
    title: Option<String>,
}

impl DashboardService {
    pub fn new(context: Arc<ProviderContext>, registry: &ProviderRegistry) -> Self {
        let items = context.config.items.clone();
        let providers = registry.instantiate(context);
        tracing::debug!("Instantiated {} data item providers", providers.len());

        for item in &items {
            if let Err(e) = providers.get(item) {
                tracing::warn!("{}, it will be skipped", e);
            }
        }

        Self {
            items,
            providers,
            status: PanelStatus::Loading,
            title: None,
        }
    }

    /// No credential configured: the panel stays in the not-configured state
    pub fn on_credential_missing(&mut self) {
        tracing::warn!("{}", DashboardError::InvalidCredential);
        self.status = PanelStatus::NoApiKey;
    }

    pub fn on_snapshot(&mut self, snapshot: TelemetrySnapshot) {
        if self.status == PanelStatus::NoApiKey {
            tracing::warn!("Ignoring telemetry while no api key is configured");
            return;
        }

        self.providers.update_data(&snapshot);
        self.title = snapshot.text("display_name").ok();

        if self.status == PanelStatus::Loading {
            tracing::info!("First telemetry snapshot received, panel ready");
            self.status = PanelStatus::Ready;
        }
    }

    fn check_ready(&self) -> Result<(), DashboardError> {
        match self.status {
            PanelStatus::Loading => Err(DashboardError::NoDataYet),
            PanelStatus::NoApiKey => Err(DashboardError::InvalidCredential),
            PanelStatus::Ready => Ok(()),
        }
    }

    /// Visible rows in configured order; empty until a snapshot has arrived
    pub fn rows(&self) -> Vec<DisplayRow> {
        if self.check_ready().is_err() {
            return Vec::new();
        }

        let mut rows = Vec::with_capacity(self.items.len());
        for item in &self.items {
            let provider = match self.providers.get(item) {
                Ok(provider) => provider,
                Err(e) => {
                    tracing::debug!("{}", e);
                    continue;
                }
            };

            match provider.state().to_row() {
                Some(row) => rows.push(row),
                None => tracing::debug!("Provider {} doesn't want to be shown right now", item),
            }
        }

        rows
    }

    pub fn view(&self) -> DashboardView {
        match self.check_ready() {
            Ok(()) => DashboardView::Ready {
                title: self.title.clone(),
                rows: self.rows(),
            },
            Err(DashboardError::InvalidCredential) => DashboardView::NoApiKey,
            Err(_) => DashboardView::Loading,
        }
    }
}
