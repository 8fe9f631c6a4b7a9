// HTTP request handlers
use crate::application::dashboard_service::DashboardView;
use crate::application::live_panel::LivePanel;
use crate::presentation::app_state::AppState;
use crate::presentation::panel::render_panel;
use axum::{
    extract::State,
    response::{
        sse::{Event, KeepAlive, Sse},
        Html,
    },
    Json,
};
use futures::stream::Stream;
use std::convert::Infallible;
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current panel state and rows as JSON
pub async fn get_rows(State(state): State<Arc<AppState>>) -> Json<DashboardView> {
    Json(state.panel.view().await)
}

/// Current panel as an HTML fragment
pub async fn get_panel(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_panel(&state.panel.view().await))
}

/// Server-sent events: the current view, then one per applied update
pub async fn stream_panel(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    Sse::new(view_events(state.panel.clone())).keep_alive(KeepAlive::default())
}

fn view_events(panel: Arc<LivePanel>) -> impl Stream<Item = Result<Event, Infallible>> {
    let mut updates = panel.subscribe();

    async_stream::stream! {
        loop {
            let view = panel.view().await;
            match Event::default().json_data(&view) {
                Ok(event) => yield Ok(event),
                Err(e) => tracing::error!("Failed to encode panel event: {}", e),
            }

            if updates.changed().await.is_err() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::DashboardService;
    use crate::domain::context::ProviderContext;
    use crate::domain::items::ProviderRegistry;
    use crate::domain::snapshot::TelemetrySnapshot;
    use serde_json::json;

    fn state() -> Arc<AppState> {
        let service = DashboardService::new(
            Arc::new(ProviderContext::default()),
            &ProviderRegistry::with_builtin(),
        );
        Arc::new(AppState {
            panel: Arc::new(LivePanel::new(service)),
        })
    }

    #[tokio::test]
    async fn test_get_rows_follows_panel() {
        let state = state();
        let Json(view) = get_rows(State(state.clone())).await;
        assert_eq!(view, DashboardView::Loading);

        let snapshot = TelemetrySnapshot::from_value(json!({"carState": "Idling"})).unwrap();
        state.panel.on_snapshot(snapshot).await;

        let Json(view) = get_rows(State(state)).await;
        assert!(matches!(view, DashboardView::Ready { rows, .. } if rows.len() == 1));
    }

    #[tokio::test]
    async fn test_get_panel_html() {
        let state = state();
        state.panel.on_credential_missing().await;
        let Html(html) = get_panel(State(state)).await;
        assert!(html.contains("No Tesla Fi"));
    }
}
