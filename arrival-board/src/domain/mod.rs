//! Domain types for the arrival board.
//!
//! Identifiers are validated at construction time, so code that receives
//! a `StopCode` or `ServiceNo` can pass it straight to DataMall.

mod codes;
mod snapshot;
mod tracked;

pub use codes::{InvalidCode, ServiceNo, StopCode};
pub use snapshot::{MAX_TIMINGS, ServiceTiming, Snapshot};
pub use tracked::{InvalidTrackedService, TrackedService, default_tracked_services};
