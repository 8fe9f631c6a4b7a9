// Presentation layer - HTTP surface of the panel
pub mod app_state;
pub mod handlers;
pub mod panel;
