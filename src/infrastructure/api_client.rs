// HTTP adapter for the air quality readings API
use crate::application::air_quality_source::{AirQualitySource, FetchError, FetchOutcome};
use crate::domain::reading::DailyReading;
use crate::infrastructure::config::ApiSettings;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct HttpAirQualitySource {
    client: reqwest::Client,
    base_url: String,
    daily_limit: Option<u32>,
}

impl HttpAirQualitySource {
    pub fn new(settings: &ApiSettings) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            daily_limit: settings.daily_limit,
        })
    }

    fn today_url(&self) -> String {
        format!("{}/air-quality/today", self.base_url)
    }

    fn daily_url(&self) -> String {
        match self.daily_limit {
            Some(limit) => format!("{}/air-quality/daily?limit={}", self.base_url, limit),
            None => format!("{}/air-quality/daily", self.base_url),
        }
    }

    /// GET `url` and decode the body as `Option<T>` so a literal `null`
    /// reads as no data rather than a decode failure.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> FetchOutcome<T> {
        let response = match self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return FetchOutcome::TransportError(e.into()),
        };

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%url, %status, "API answered without data");
            return FetchOutcome::NoData;
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => return FetchOutcome::TransportError(e.into()),
        };

        match serde_json::from_slice::<Option<T>>(&body) {
            Ok(Some(data)) => FetchOutcome::Ok(data),
            Ok(None) => FetchOutcome::NoData,
            Err(e) => FetchOutcome::TransportError(e.into()),
        }
    }
}

#[async_trait]
impl AirQualitySource for HttpAirQualitySource {
    async fn fetch_today(&self) -> FetchOutcome<DailyReading> {
        self.get_json(&self.today_url()).await
    }

    async fn fetch_daily(&self) -> FetchOutcome<Vec<DailyReading>> {
        self.get_json(&self.daily_url()).await
    }
}
