//! DataMall client error types.

use crate::domain::{ServiceNo, StopCode};

/// Errors from fetching arrivals for one (stop, service) pair.
#[derive(Debug, thiserror::Error)]
pub enum ArrivalError {
    /// Network-level failure: connect, timeout, TLS, body read
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body was not JSON of the expected shape
    #[error("JSON parse error: {message}")]
    Decode {
        message: String,
        body: Option<String>,
    },

    /// DataMall returned an empty stop code
    #[error("unable to find bus stop code: {stop_code}")]
    NotFound { stop_code: StopCode },

    /// The stop exists but the service does not call there
    #[error("unable to find service {service_no} at bus stop code {stop_code}")]
    NoService {
        stop_code: StopCode,
        service_no: ServiceNo,
    },

    /// DataMall answered with a non-success status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// The client's request limiter was closed
    #[error("request limiter closed")]
    LimiterClosed(#[from] tokio::sync::AcquireError),
}

/// Errors building a [`DatamallClient`](super::DatamallClient).
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The account key cannot be sent as a header value
    #[error("invalid account key format")]
    InvalidAccountKey,

    /// A limit of zero concurrent requests would block every fetch
    #[error("max concurrent requests must be at least 1")]
    NoConcurrency,

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ArrivalError {
    /// Short, stable name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ArrivalError::Transport(_) => "transport",
            ArrivalError::Decode { .. } => "decode",
            ArrivalError::NotFound { .. } => "not_found",
            ArrivalError::NoService { .. } => "no_service",
            ArrivalError::Status { .. } => "status",
            ArrivalError::LimiterClosed(_) => "internal",
        }
    }
}
