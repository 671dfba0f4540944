// Application layer - Loaders, rendering and scheduling over the domain
pub mod air_quality_source;
pub mod chart_renderer;
pub mod daily_loader;
pub mod dashboard_page;
pub mod refresh_scheduler;
pub mod today_loader;

#[cfg(test)]
pub mod test_support;
