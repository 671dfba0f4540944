// Presentation layer - HTTP surface over the dashboard page
pub mod app_state;
pub mod handlers;
pub mod router;
