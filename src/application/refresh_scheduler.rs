// Refresh scheduler - Runs both loaders at startup and then on a fixed period
use crate::application::daily_loader::DailyLoader;
use crate::application::dashboard_page::CycleId;
use crate::application::today_loader::TodayLoader;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::interval;

pub struct RefreshScheduler {
    today: TodayLoader,
    daily: DailyLoader,
    period: Duration,
}

/// Returned by [`RefreshScheduler::start`]. Dropping it also stops the timer.
pub struct RefreshHandle {
    stop: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl RefreshScheduler {
    pub fn new(today: TodayLoader, daily: DailyLoader, period: Duration) -> Self {
        Self {
            today,
            daily,
            period,
        }
    }

    pub fn start(self) -> RefreshHandle {
        let (stop_tx, stop_rx) = oneshot::channel();
        let task = tokio::spawn(self.run(stop_rx));
        RefreshHandle {
            stop: Some(stop_tx),
            task,
        }
    }

    async fn run(self, mut stop: oneshot::Receiver<()>) {
        tracing::info!(period_secs = self.period.as_secs(), "Starting refresh scheduler");

        let mut ticker = interval(self.period);
        let mut next_cycle: CycleId = 1;
        let mut in_flight = JoinSet::new();

        loop {
            tokio::select! {
                // First tick completes immediately
                _ = ticker.tick() => {
                    let cycle = next_cycle;
                    next_cycle += 1;
                    tracing::debug!(cycle, pending = in_flight.len(), "Refresh cycle");

                    // Loaders run independently; a hung request never holds up the timer
                    let today = self.today.clone();
                    in_flight.spawn(async move { today.load(cycle).await });
                    let daily = self.daily.clone();
                    in_flight.spawn(async move { daily.load(cycle).await });
                }
                Some(result) = in_flight.join_next(), if !in_flight.is_empty() => {
                    if let Err(e) = result {
                        tracing::error!(error = %e, "Loader task failed");
                    }
                }
                _ = &mut stop => break,
            }
        }

        tracing::info!(aborted = in_flight.len(), "Refresh scheduler stopped");
        in_flight.abort_all();
    }
}

impl RefreshHandle {
    /// Stop the timer and abort any loads still in flight.
    pub async fn stop(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Err(e) = self.task.await {
            tracing::error!(error = %e, "Refresh scheduler task failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::air_quality_source::FetchOutcome;
    use crate::application::dashboard_page::{DashboardPage, SharedPage};
    use crate::application::test_support::ScriptedSource;
    use crate::domain::reading::DailyReading;
    use std::sync::Arc;
    use std::sync::atomic::Ordering;

    const PERIOD: Duration = Duration::from_secs(300);

    fn scheduler(source: Arc<ScriptedSource>, page: SharedPage) -> RefreshScheduler {
        RefreshScheduler::new(
            TodayLoader::new(source.clone(), page.clone()),
            DailyLoader::new(source, page),
            PERIOD,
        )
    }

    fn calls(source: &ScriptedSource) -> (usize, usize) {
        (
            source.today_calls.load(Ordering::SeqCst),
            source.daily_calls.load(Ordering::SeqCst),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_at_start_then_every_period() {
        let source = Arc::new(ScriptedSource::default());
        let handle = scheduler(source.clone(), DashboardPage::shared()).start();

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(calls(&source), (1, 1));

        tokio::time::sleep(PERIOD).await;
        assert_eq!(calls(&source), (2, 2));

        tokio::time::sleep(PERIOD * 2).await;
        assert_eq!(calls(&source), (4, 4));

        handle.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_ends_refreshes() {
        let source = Arc::new(ScriptedSource::default());
        let handle = scheduler(source.clone(), DashboardPage::shared()).start();

        tokio::time::sleep(Duration::from_secs(1)).await;
        handle.stop().await;

        tokio::time::sleep(PERIOD * 3).await;
        assert_eq!(calls(&source), (1, 1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_earlier_cycle_does_not_overwrite_newer() {
        // Cycle 1 answers between the second and third ticks, cycle 2 at once
        let source = Arc::new(ScriptedSource::with_today_delays(
            vec![
                (
                    PERIOD + Duration::from_secs(100),
                    FetchOutcome::Ok(DailyReading::new("2024-01-01", 8.0, 15.0, 20.0)),
                ),
                (
                    Duration::ZERO,
                    FetchOutcome::Ok(DailyReading::new("2024-01-02", 30.0, 40.0, 25.0)),
                ),
            ],
            Vec::new(),
        ));
        let page = DashboardPage::shared();
        let handle = scheduler(source.clone(), page.clone()).start();

        tokio::time::sleep(PERIOD + Duration::from_secs(1)).await;
        assert!(page.read().await.today().markup().contains("2024-01-02"));

        tokio::time::sleep(Duration::from_secs(150)).await;
        assert_eq!(source.today_calls.load(Ordering::SeqCst), 2);
        let page = page.read().await;
        assert!(page.today().markup().contains("2024-01-02"));
        assert_eq!(page.today().cycle(), Some(2));

        drop(page);
        handle.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_failures_do_not_stop_the_timer() {
        let source = Arc::new(ScriptedSource::default());
        let page = DashboardPage::shared();
        let handle = scheduler(source.clone(), page.clone()).start();

        tokio::time::sleep(PERIOD * 2 + Duration::from_secs(1)).await;

        assert_eq!(calls(&source), (3, 3));
        assert_eq!(page.read().await.daily_table().cycle(), Some(3));
        handle.stop().await;
    }
}
