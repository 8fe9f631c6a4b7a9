// Application layer - use cases wiring the domain to its collaborators
pub mod dashboard_service;
pub mod live_panel;
pub mod polling_service;
pub mod telemetry_source;
