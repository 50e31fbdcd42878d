//! LTA DataMall bus arrival client.
//!
//! This module provides an HTTP client for DataMall's `BusArrivalv2`
//! endpoint, which returns real-time arrival estimates for the next three
//! buses of a service at a stop.
//!
//! Key characteristics of DataMall:
//! - Requests are authenticated with an `AccountKey` header
//! - An unknown stop is signalled by an empty `BusStopCode`, not a 404
//! - Empty arrival slots carry an empty `EstimatedArrival` string
//! - Timestamps are ISO 8601 with a `+08:00` offset

mod client;
mod convert;
mod error;
mod types;

#[cfg(test)]
mod client_tests;

pub use client::{
    DEFAULT_BASE_URL, DEFAULT_MAX_CONCURRENT, DEFAULT_TIMEOUT_SECS, DatamallClient,
    DatamallConfig,
};
pub use convert::extract_timings;
pub use error::{ArrivalError, ClientError};
pub use types::{ArrivalService, BusArrivalResponse, NextBus};
