// In-memory chart surface backing the page's canvas
use crate::application::chart_renderer::{ChartConfig, ChartHandle, ChartSurface};

/// Keeps every chart currently bound to the canvas. The page serves the
/// most recently constructed one to the browser.
#[derive(Debug, Default)]
pub struct CanvasSurface {
    next_id: u64,
    bound: Vec<(ChartHandle, ChartConfig)>,
}

impl CanvasSurface {
    pub fn live_count(&self) -> usize {
        self.bound.len()
    }

    pub fn active_config(&self) -> Option<&ChartConfig> {
        self.bound.last().map(|(_, config)| config)
    }
}

impl ChartSurface for CanvasSurface {
    fn construct(&mut self, config: ChartConfig) -> ChartHandle {
        self.next_id += 1;
        let handle = ChartHandle(self.next_id);
        tracing::debug!(chart = handle.0, points = config.data.labels.len(), "Chart constructed");
        self.bound.push((handle, config));
        handle
    }

    fn destroy(&mut self, handle: ChartHandle) {
        let before = self.bound.len();
        self.bound.retain(|(h, _)| *h != handle);
        if self.bound.len() == before {
            tracing::warn!(chart = handle.0, "Destroy requested for unknown chart");
        }
    }
}
