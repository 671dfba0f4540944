// Today loader - Fetches the latest reading and writes the summary region
use crate::application::air_quality_source::{AirQualitySource, FetchOutcome};
use crate::application::dashboard_page::{CycleId, SharedPage};
use crate::infrastructure::markup;
use std::sync::Arc;

#[derive(Clone)]
pub struct TodayLoader {
    source: Arc<dyn AirQualitySource>,
    page: SharedPage,
}

impl TodayLoader {
    pub fn new(source: Arc<dyn AirQualitySource>, page: SharedPage) -> Self {
        Self { source, page }
    }

    /// One fetch, one replacement of the today region.
    pub async fn load(&self, cycle: CycleId) {
        let content = match self.source.fetch_today().await {
            FetchOutcome::Ok(reading) => {
                tracing::debug!(cycle, date = %reading.date, "Loaded today's reading");
                markup::today_summary(&reading)
            }
            FetchOutcome::NoData => {
                tracing::info!(cycle, "No reading for today");
                markup::message(markup::TODAY_NO_DATA)
            }
            FetchOutcome::TransportError(e) => {
                tracing::warn!(cycle, error = %e, "Failed to load today's reading");
                markup::message(markup::TODAY_LOAD_FAILED)
            }
        };

        let mut page = self.page.write().await;
        if !page.write_today(cycle, content) {
            tracing::debug!(
                cycle,
                current = ?page.today().cycle(),
                "Discarded stale today result"
            );
        }
    }
}
