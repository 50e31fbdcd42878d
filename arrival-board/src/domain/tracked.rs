//! Tracked (stop, service) pairs shown on the board.

use std::fmt;
use std::str::FromStr;

use super::codes::{InvalidCode, ServiceNo, StopCode};

/// Error returned when parsing a `label:stop:service` entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidTrackedService {
    /// Entry did not have exactly three `:`-separated fields
    #[error("expected label:stop:service, got {0:?}")]
    Shape(String),

    /// Label was blank
    #[error("label must not be empty in {0:?}")]
    EmptyLabel(String),

    /// Stop code or service number failed validation
    #[error(transparent)]
    Code(#[from] InvalidCode),
}

/// One (label, stop code, service number) entry the board monitors.
///
/// The list of tracked services is fixed at startup; its order is the
/// display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedService {
    /// Short human-readable name drawn above the service number.
    pub label: String,
    pub stop_code: StopCode,
    pub service_no: ServiceNo,
}

impl TrackedService {
    pub fn new(label: impl Into<String>, stop_code: StopCode, service_no: ServiceNo) -> Self {
        Self {
            label: label.into(),
            stop_code,
            service_no,
        }
    }
}

impl FromStr for TrackedService {
    type Err = InvalidTrackedService;

    /// Parse `label:stop:service`, e.g. `ssc:58271:859`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.trim().split(':').map(str::trim).collect();
        let [label, stop, service] = fields[..] else {
            return Err(InvalidTrackedService::Shape(s.to_string()));
        };

        if label.is_empty() {
            return Err(InvalidTrackedService::EmptyLabel(s.to_string()));
        }

        Ok(Self::new(
            label,
            StopCode::parse(stop)?,
            ServiceNo::parse(service)?,
        ))
    }
}

impl fmt::Display for TrackedService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.label, self.stop_code, self.service_no)
    }
}

/// The six services the board ships with, in display order.
pub fn default_tracked_services() -> Vec<TrackedService> {
    const DEFAULTS: [(&str, &str, &str); 6] = [
        ("ssc", "58271", "859"),
        ("assyafaah", "58279", "859"),
        ("sunplaza", "58271", "962"),
        ("woodlands", "58279", "962"),
        ("ktph", "58381", "858"),
        ("tampines", "58581", "969"),
    ];

    DEFAULTS
        .iter()
        .filter_map(|(label, stop, service)| {
            let stop = StopCode::parse(stop).ok()?;
            let service = ServiceNo::parse(service).ok()?;
            Some(TrackedService::new(*label, stop, service))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_six_in_display_order() {
        let tracked = default_tracked_services();
        assert_eq!(tracked.len(), 6);

        let labels: Vec<&str> = tracked.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(
            labels,
            ["ssc", "assyafaah", "sunplaza", "woodlands", "ktph", "tampines"]
        );
        assert_eq!(tracked[4].stop_code.as_str(), "58381");
        assert_eq!(tracked[4].service_no.as_str(), "858");
    }

    #[test]
    fn parse_entry() {
        let t: TrackedService = "ssc:58271:859".parse().unwrap();
        assert_eq!(t.label, "ssc");
        assert_eq!(t.stop_code.as_str(), "58271");
        assert_eq!(t.service_no.as_str(), "859");
        assert_eq!(t.to_string(), "ssc:58271:859");
    }

    #[test]
    fn parse_entry_trims_whitespace() {
        let t: TrackedService = "  home : 01012 : 7 ".parse().unwrap();
        assert_eq!(t.label, "home");
        assert_eq!(t.stop_code.as_str(), "01012");
        assert_eq!(t.service_no.as_str(), "7");
    }

    #[test]
    fn parse_entry_rejects_wrong_shape() {
        assert!(matches!(
            "ssc:58271".parse::<TrackedService>(),
            Err(InvalidTrackedService::Shape(_))
        ));
        assert!(matches!(
            "a:b:c:d".parse::<TrackedService>(),
            Err(InvalidTrackedService::Shape(_))
        ));
    }

    #[test]
    fn parse_entry_rejects_blank_label_and_bad_codes() {
        assert!(matches!(
            ":58271:859".parse::<TrackedService>(),
            Err(InvalidTrackedService::EmptyLabel(_))
        ));
        assert!(matches!(
            "ssc::859".parse::<TrackedService>(),
            Err(InvalidTrackedService::Code(_))
        ));
    }
}
