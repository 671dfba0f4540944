// Chart renderer - Owns the single live chart bound to the canvas
use crate::domain::reading::SeriesBundle;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle(pub u64);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: &'static str,
    pub data: Vec<f64>,
    pub border_color: &'static str,
    pub fill: bool,
}

impl ChartConfig {
    /// Line chart with the three fixed pollutant datasets. Lengths are passed
    /// through as given.
    pub fn pollutant_lines(series: SeriesBundle) -> Self {
        let SeriesBundle {
            labels,
            pm25,
            pm10,
            no2,
        } = series;

        Self {
            kind: "line",
            data: ChartData {
                labels,
                datasets: vec![
                    Dataset::line("PM2.5", pm25, "red"),
                    Dataset::line("PM10", pm10, "orange"),
                    Dataset::line("NO₂", no2, "blue"),
                ],
            },
        }
    }
}

impl Dataset {
    fn line(label: &'static str, data: Vec<f64>, border_color: &'static str) -> Self {
        Self {
            label,
            data,
            border_color,
            fill: false,
        }
    }
}

/// The charting collaborator: something that can bind a chart to a canvas
/// and tear it down again.
pub trait ChartSurface: Send + Sync {
    fn construct(&mut self, config: ChartConfig) -> ChartHandle;
    fn destroy(&mut self, handle: ChartHandle);
}

pub struct ChartRenderer<S: ChartSurface> {
    surface: S,
    current: Option<ChartHandle>,
}

impl<S: ChartSurface> ChartRenderer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            current: None,
        }
    }

    /// Destroy the previous chart, if any, then draw a new one.
    pub fn render(&mut self, series: SeriesBundle) -> ChartHandle {
        if let Some(previous) = self.current.take() {
            self.surface.destroy(previous);
        }

        let handle = self.surface.construct(ChartConfig::pollutant_lines(series));
        self.current = Some(handle);
        handle
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
