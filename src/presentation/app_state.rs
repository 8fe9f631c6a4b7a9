// Application state for HTTP handlers
use crate::application::live_panel::LivePanel;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub panel: Arc<LivePanel>,
}
