// Dashboard page - The render targets every loader writes into
use crate::application::chart_renderer::{ChartConfig, ChartRenderer};
use crate::domain::reading::SeriesBundle;
use crate::infrastructure::canvas::CanvasSurface;
use crate::infrastructure::markup;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Monotonic id of a refresh cycle, assigned by the scheduler.
pub type CycleId = u64;

pub type SharedPage = Arc<RwLock<DashboardPage>>;

/// A replaceable block of markup. Remembers which cycle last wrote it so a
/// slow response from an older cycle cannot overwrite a newer one.
#[derive(Debug, Clone)]
pub struct Region {
    markup: String,
    cycle: Option<CycleId>,
}

impl Region {
    fn new(markup: String) -> Self {
        Self {
            markup,
            cycle: None,
        }
    }

    fn replace(&mut self, cycle: CycleId, markup: String) -> bool {
        if matches!(self.cycle, Some(last) if cycle < last) {
            return false;
        }
        self.markup = markup;
        self.cycle = Some(cycle);
        true
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn cycle(&self) -> Option<CycleId> {
        self.cycle
    }
}

pub struct DashboardPage {
    today: Region,
    daily_table: Region,
    chart: ChartRenderer<CanvasSurface>,
    refreshed_at: Option<DateTime<Utc>>,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self {
            today: Region::new(markup::loading_message()),
            daily_table: Region::new(markup::loading_row()),
            chart: ChartRenderer::new(CanvasSurface::default()),
            refreshed_at: None,
        }
    }

    pub fn shared() -> SharedPage {
        Arc::new(RwLock::new(Self::new()))
    }

    pub fn today(&self) -> &Region {
        &self.today
    }

    pub fn daily_table(&self) -> &Region {
        &self.daily_table
    }

    pub fn chart_config(&self) -> Option<&ChartConfig> {
        self.chart.surface().active_config()
    }

    pub fn live_chart_count(&self) -> usize {
        self.chart.surface().live_count()
    }

    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }

    /// Replace the today summary. Returns false if the write was stale.
    pub fn write_today(&mut self, cycle: CycleId, markup: String) -> bool {
        let applied = self.today.replace(cycle, markup);
        if applied {
            self.refreshed_at = Some(Utc::now());
        }
        applied
    }

    /// Replace the table body and, when `series` is given, redraw the chart.
    /// The chart is only touched if the table write was accepted, so both
    /// always show the same cycle.
    pub fn write_daily(
        &mut self,
        cycle: CycleId,
        rows: String,
        series: Option<SeriesBundle>,
    ) -> bool {
        if !self.daily_table.replace(cycle, rows) {
            return false;
        }
        if let Some(series) = series {
            self.chart.render(series);
        }
        self.refreshed_at = Some(Utc::now());
        true
    }
}

impl Default for DashboardPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_placeholders() {
        let page = DashboardPage::new();

        assert_eq!(page.today().markup(), markup::loading_message());
        assert_eq!(page.daily_table().cycle(), None);
        assert!(page.chart_config().is_none());
        assert!(page.refreshed_at().is_none());
    }

    #[test]
    fn test_stale_write_is_discarded() {
        let mut page = DashboardPage::new();

        assert!(page.write_today(2, "newer".to_string()));
        assert!(!page.write_today(1, "older".to_string()));
        assert_eq!(page.today().markup(), "newer");
        assert_eq!(page.today().cycle(), Some(2));

        assert!(page.write_today(3, "newest".to_string()));
        assert_eq!(page.today().markup(), "newest");
    }

    #[test]
    fn test_stale_daily_write_leaves_chart_alone() {
        let mut page = DashboardPage::new();
        let series = SeriesBundle {
            labels: vec!["2024-01-02".to_string()],
            pm25: vec![12.0],
            pm10: vec![20.0],
            no2: vec![5.0],
        };

        assert!(page.write_daily(5, "rows".to_string(), Some(series.clone())));
        assert!(!page.write_daily(4, "old rows".to_string(), Some(SeriesBundle::default())));

        assert_eq!(page.daily_table().markup(), "rows");
        let config = page.chart_config().unwrap();
        assert_eq!(config.data.labels, series.labels);
        assert_eq!(page.live_chart_count(), 1);
    }

    #[test]
    fn test_failure_rows_keep_previous_chart() {
        let mut page = DashboardPage::new();
        page.write_daily(1, "rows".to_string(), Some(SeriesBundle::default()));
        page.write_daily(2, "failed".to_string(), None);

        assert_eq!(page.daily_table().markup(), "failed");
        assert!(page.chart_config().is_some());
        assert_eq!(page.live_chart_count(), 1);
    }
}
