//! Arrival timings and the board snapshot.

use chrono::{DateTime, FixedOffset, Local};

use super::tracked::TrackedService;

/// Most upcoming buses DataMall reports per service.
pub const MAX_TIMINGS: usize = 3;

/// A tracked service together with its latest arrival estimates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceTiming {
    pub service: TrackedService,

    /// Estimated arrivals of the next buses, soonest first. At most
    /// [`MAX_TIMINGS`] entries; empty when nothing is known.
    timings: Vec<DateTime<FixedOffset>>,
}

impl ServiceTiming {
    /// Create a timing entry, keeping only the first [`MAX_TIMINGS`] arrivals.
    pub fn new(service: TrackedService, mut timings: Vec<DateTime<FixedOffset>>) -> Self {
        timings.truncate(MAX_TIMINGS);
        Self { service, timings }
    }

    /// An entry with no known arrivals.
    pub fn empty(service: TrackedService) -> Self {
        Self {
            service,
            timings: Vec::new(),
        }
    }

    pub fn timings(&self) -> &[DateTime<FixedOffset>] {
        &self.timings
    }
}

/// Everything the board knows at one instant.
///
/// Snapshots are immutable once built; a refresh produces a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// One entry per tracked service, in configuration order.
    pub services: Vec<ServiceTiming>,

    /// When the refresh that produced this snapshot finished.
    /// `None` until the first refresh.
    pub last_updated: Option<DateTime<Local>>,
}

impl Snapshot {
    /// The snapshot before any refresh: every service with no timings.
    pub fn initial(tracked: &[TrackedService]) -> Self {
        Self {
            services: tracked.iter().cloned().map(ServiceTiming::empty).collect(),
            last_updated: None,
        }
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
