//! Conversion from DataMall DTOs to arrival timings.

use chrono::{DateTime, FixedOffset};

use crate::domain::{ServiceNo, StopCode};

use super::error::ArrivalError;
use super::types::{BusArrivalResponse, NextBus};

/// Extract the upcoming arrival estimates from a response.
///
/// Fails with `NotFound` when DataMall did not recognise the stop and with
/// `NoService` when the service list is empty. Otherwise reads the first
/// service's `NextBus`, `NextBus2` and `NextBus3` in order, skipping any
/// slot without an estimate. Absent slots are dropped, not padded.
pub fn extract_timings(
    response: &BusArrivalResponse,
    stop_code: &StopCode,
    service_no: &ServiceNo,
) -> Result<Vec<DateTime<FixedOffset>>, ArrivalError> {
    if response.bus_stop_code.is_empty() {
        return Err(ArrivalError::NotFound {
            stop_code: stop_code.clone(),
        });
    }

    let Some(service) = response.services.first() else {
        return Err(ArrivalError::NoService {
            stop_code: stop_code.clone(),
            service_no: service_no.clone(),
        });
    };

    let timings = [&service.next_bus, &service.next_bus2, &service.next_bus3]
        .into_iter()
        .filter_map(|slot| slot.as_ref().and_then(|bus: &NextBus| bus.estimated_arrival))
        .collect();

    Ok(timings)
}
