// Scripted in-memory source for loader and scheduler tests
use crate::application::air_quality_source::{AirQualitySource, FetchOutcome};
use crate::domain::reading::DailyReading;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Hands out queued outcomes in order, then `NoData` once a queue runs dry.
#[derive(Default)]
pub struct ScriptedSource {
    today: Mutex<VecDeque<(Duration, FetchOutcome<DailyReading>)>>,
    daily: Mutex<VecDeque<FetchOutcome<Vec<DailyReading>>>>,
    pub today_calls: AtomicUsize,
    pub daily_calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(
        today: Vec<FetchOutcome<DailyReading>>,
        daily: Vec<FetchOutcome<Vec<DailyReading>>>,
    ) -> Self {
        Self::with_today_delays(
            today.into_iter().map(|o| (Duration::ZERO, o)).collect(),
            daily,
        )
    }

    /// Each today outcome is delivered only after its delay has elapsed.
    pub fn with_today_delays(
        today: Vec<(Duration, FetchOutcome<DailyReading>)>,
        daily: Vec<FetchOutcome<Vec<DailyReading>>>,
    ) -> Self {
        Self {
            today: Mutex::new(today.into()),
            daily: Mutex::new(daily.into()),
            ..Self::default()
        }
    }
}

#[async_trait]
impl AirQualitySource for ScriptedSource {
    async fn fetch_today(&self) -> FetchOutcome<DailyReading> {
        self.today_calls.fetch_add(1, Ordering::SeqCst);
        let next = self.today.lock().unwrap().pop_front();
        match next {
            Some((delay, outcome)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                outcome
            }
            None => FetchOutcome::NoData,
        }
    }

    async fn fetch_daily(&self) -> FetchOutcome<Vec<DailyReading>> {
        self.daily_calls.fetch_add(1, Ordering::SeqCst);
        let next = self.daily.lock().unwrap().pop_front();
        next.unwrap_or(FetchOutcome::NoData)
    }
}
