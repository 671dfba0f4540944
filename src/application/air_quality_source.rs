// Source trait for air quality readings
use crate::domain::reading::DailyReading;
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result of one fetch against the readings API.
///
/// `NoData` means the server answered but had nothing for us (non-2xx or a
/// `null` body). `TransportError` covers everything else, including a 2xx
/// response whose body does not decode.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    Ok(T),
    NoData,
    TransportError(FetchError),
}

#[async_trait]
pub trait AirQualitySource: Send + Sync {
    /// Latest single-day reading
    async fn fetch_today(&self) -> FetchOutcome<DailyReading>;

    /// Daily history, in the order the API returns it
    async fn fetch_daily(&self) -> FetchOutcome<Vec<DailyReading>>;
}
