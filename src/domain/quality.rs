// Air quality classification by PM2.5 concentration

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityLevel {
    Good,
    Moderate,
    Poor,
    VeryPoor,
}

impl QualityLevel {
    /// Upper bounds are inclusive: a value sitting on a boundary belongs to the
    /// lower band. NaN fails every comparison and lands in `VeryPoor`.
    pub fn from_pm25(pm25: f64) -> Self {
        if pm25 <= 10.0 {
            QualityLevel::Good
        } else if pm25 <= 25.0 {
            QualityLevel::Moderate
        } else if pm25 <= 50.0 {
            QualityLevel::Poor
        } else {
            QualityLevel::VeryPoor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QualityLevel::Good => "Good",
            QualityLevel::Moderate => "Moderate",
            QualityLevel::Poor => "Poor",
            QualityLevel::VeryPoor => "Very poor",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            QualityLevel::Good => "green",
            QualityLevel::Moderate => "orange",
            QualityLevel::Poor => "red",
            QualityLevel::VeryPoor => "darkred",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityVerdict {
    pub label: &'static str,
    pub color: &'static str,
}

pub fn classify(pm25: f64) -> QualityVerdict {
    let level = QualityLevel::from_pm25(pm25);
    QualityVerdict {
        label: level.label(),
        color: level.color(),
    }
}
