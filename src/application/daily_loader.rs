// Daily loader - Rebuilds the history table and redraws the chart
use crate::application::air_quality_source::{AirQualitySource, FetchOutcome};
use crate::application::dashboard_page::{CycleId, SharedPage};
use crate::domain::reading::SeriesBundle;
use crate::infrastructure::markup;
use std::sync::Arc;

#[derive(Clone)]
pub struct DailyLoader {
    source: Arc<dyn AirQualitySource>,
    page: SharedPage,
}

impl DailyLoader {
    pub fn new(source: Arc<dyn AirQualitySource>, page: SharedPage) -> Self {
        Self { source, page }
    }

    /// Replaces the whole table body. The chart is only redrawn on success;
    /// on failure it keeps whatever it showed before.
    pub async fn load(&self, cycle: CycleId) {
        let (rows, series) = match self.source.fetch_daily().await {
            FetchOutcome::Ok(readings) => {
                tracing::debug!(cycle, days = readings.len(), "Loaded daily history");
                (
                    markup::daily_rows(&readings),
                    Some(SeriesBundle::from_readings(&readings)),
                )
            }
            FetchOutcome::NoData => {
                tracing::info!(cycle, "No daily history available");
                (markup::message_row(markup::DAILY_NO_DATA), None)
            }
            FetchOutcome::TransportError(e) => {
                tracing::warn!(cycle, error = %e, "Failed to load daily history");
                (markup::message_row(markup::DAILY_LOAD_FAILED), None)
            }
        };

        let mut page = self.page.write().await;
        if !page.write_daily(cycle, rows, series) {
            tracing::debug!(
                cycle,
                current = ?page.daily_table().cycle(),
                "Discarded stale daily result"
            );
        }
    }
}
