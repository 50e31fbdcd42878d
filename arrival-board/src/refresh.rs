//! Refreshing arrival timings for every tracked service.
//!
//! Fetches for all tracked services are issued concurrently and collected
//! in configuration order. A failed fetch leaves that service with no
//! timings for this cycle; it never affects the other services.

use std::future::Future;

use chrono::{DateTime, FixedOffset, Local};
use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::datamall::ArrivalError;
use crate::domain::{ServiceNo, ServiceTiming, Snapshot, StopCode, TrackedService};

/// Source of arrival estimates.
///
/// This abstraction allows the refresh to be tested without DataMall.
pub trait ArrivalSource {
    /// Fetch up to three upcoming arrivals for a service at a stop,
    /// soonest first.
    fn fetch_arrivals(
        &self,
        stop_code: &StopCode,
        service_no: &ServiceNo,
    ) -> impl Future<Output = Result<Vec<DateTime<FixedOffset>>, ArrivalError>> + Send;
}

/// Build a fresh snapshot by fetching arrivals for every tracked service.
///
/// The result always has one entry per tracked service, in the same order.
/// `last_updated` is set once every fetch has finished, even if all of
/// them failed.
pub async fn refresh_snapshot<S: ArrivalSource>(
    source: &S,
    tracked: &[TrackedService],
) -> Snapshot {
    let futures: Vec<_> = tracked
        .iter()
        .map(|service| async move {
            let result = source
                .fetch_arrivals(&service.stop_code, &service.service_no)
                .await;
            (service, result)
        })
        .collect();

    let results = join_all(futures).await;

    let mut failures = 0;
    let services = results
        .into_iter()
        .map(|(service, result)| match result {
            Ok(timings) => {
                debug!(
                    label = %service.label,
                    stop = %service.stop_code,
                    service = %service.service_no,
                    count = timings.len(),
                    "Fetched arrivals"
                );
                ServiceTiming::new(service.clone(), timings)
            }
            Err(e) => {
                failures += 1;
                warn!(
                    label = %service.label,
                    stop = %service.stop_code,
                    service = %service.service_no,
                    kind = e.kind(),
                    error = %e,
                    "Failed to fetch arrivals, using empty"
                );
                ServiceTiming::empty(service.clone())
            }
        })
        .collect();

    let snapshot = Snapshot {
        services,
        last_updated: Some(Local::now()),
    };

    info!(
        services = snapshot.len(),
        failures, "Refreshed arrival snapshot"
    );

    snapshot
}
