//! DataMall HTTP client.
//!
//! Issues one `BusArrivalv2` request per (stop, service) pair. Handles
//! authentication, bounds concurrent requests and converts responses to
//! arrival timings.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use tokio::sync::Semaphore;

use crate::domain::{ServiceNo, StopCode};
use crate::refresh::ArrivalSource;

use super::convert::extract_timings;
use super::error::{ArrivalError, ClientError};
use super::types::BusArrivalResponse;

/// Default `BusArrivalv2` endpoint.
pub const DEFAULT_BASE_URL: &str = "http://datamall2.mytransport.sg/ltaodataservice/BusArrivalv2";

/// Default maximum concurrent requests.
pub const DEFAULT_MAX_CONCURRENT: usize = 6;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Longest body excerpt kept on decode errors.
const BODY_EXCERPT_CHARS: usize = 500;

/// Configuration for the DataMall client.
#[derive(Debug, Clone)]
pub struct DatamallConfig {
    /// Account key sent in the `AccountKey` header
    pub account_key: String,
    /// Full `BusArrivalv2` endpoint URL
    pub base_url: String,
    /// Maximum concurrent requests, at least 1
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DatamallConfig {
    /// Create a new config with the given account key.
    pub fn new(account_key: impl Into<String>) -> Self {
        Self {
            account_key: account_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom endpoint (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests. Zero is rejected by
    /// [`DatamallClient::new`].
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// DataMall bus arrival client.
///
/// Uses a semaphore to limit concurrent requests so that a refresh of many
/// services does not trip DataMall's rate limiting.
#[derive(Debug, Clone)]
pub struct DatamallClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl DatamallClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DatamallConfig) -> Result<Self, ClientError> {
        if config.max_concurrent == 0 {
            return Err(ClientError::NoConcurrency);
        }

        let mut headers = HeaderMap::new();

        let account_key = HeaderValue::from_str(&config.account_key)
            .map_err(|_| ClientError::InvalidAccountKey)?;
        headers.insert(HeaderName::from_static("accountkey"), account_key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Fetch up to three upcoming arrival estimates for a service at a stop.
    ///
    /// Estimates are returned soonest first. Slots DataMall leaves empty are
    /// skipped, so the result may hold fewer than three entries.
    pub async fn fetch_arrivals(
        &self,
        stop_code: &StopCode,
        service_no: &ServiceNo,
    ) -> Result<Vec<DateTime<FixedOffset>>, ArrivalError> {
        let response = self.get_bus_arrival(stop_code, service_no).await?;
        extract_timings(&response, stop_code, service_no)
    }

    /// Get the raw `BusArrivalv2` response.
    pub async fn get_bus_arrival(
        &self,
        stop_code: &StopCode,
        service_no: &ServiceNo,
    ) -> Result<BusArrivalResponse, ArrivalError> {
        let _permit = self.semaphore.acquire().await?;

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("BusStopCode", stop_code.as_str()),
                ("ServiceNo", service_no.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ArrivalError::Status {
                status: status.as_u16(),
                message: body.chars().take(BODY_EXCERPT_CHARS).collect(),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ArrivalError::Decode {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
        })
    }
}

impl ArrivalSource for DatamallClient {
    async fn fetch_arrivals(
        &self,
        stop_code: &StopCode,
        service_no: &ServiceNo,
    ) -> Result<Vec<DateTime<FixedOffset>>, ArrivalError> {
        DatamallClient::fetch_arrivals(self, stop_code, service_no).await
    }
}
