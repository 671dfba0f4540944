// Air quality reading domain models
use serde::{Deserialize, Serialize};

/// One day of averaged pollutant concentrations, in µg/m³.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReading {
    pub date: String,
    pub pm2_5_avg: f64,
    pub pm10_avg: f64,
    pub nitrogen_dioxide_avg: f64,
}

impl DailyReading {
    pub fn new(date: impl Into<String>, pm2_5_avg: f64, pm10_avg: f64, nitrogen_dioxide_avg: f64) -> Self {
        Self {
            date: date.into(),
            pm2_5_avg,
            pm10_avg,
            nitrogen_dioxide_avg,
        }
    }
}

/// Parallel series extracted from a run of readings, index-aligned to the
/// order the API returned them in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesBundle {
    pub labels: Vec<String>,
    pub pm25: Vec<f64>,
    pub pm10: Vec<f64>,
    pub no2: Vec<f64>,
}

impl SeriesBundle {
    pub fn from_readings(readings: &[DailyReading]) -> Self {
        let mut bundle = Self {
            labels: Vec::with_capacity(readings.len()),
            pm25: Vec::with_capacity(readings.len()),
            pm10: Vec::with_capacity(readings.len()),
            no2: Vec::with_capacity(readings.len()),
        };

        for reading in readings {
            bundle.labels.push(reading.date.clone());
            bundle.pm25.push(reading.pm2_5_avg);
            bundle.pm10.push(reading.pm10_avg);
            bundle.no2.push(reading.nitrogen_dioxide_avg);
        }

        bundle
    }
}
