//! Process configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use crate::datamall::DatamallConfig;
use crate::domain::{TrackedService, default_tracked_services};
use crate::render::DEFAULT_FONT_PATH;

pub const ACCOUNT_KEY_VAR: &str = "DATAMALL_ACCOUNT_KEY";
pub const BASE_URL_VAR: &str = "DATAMALL_BASE_URL";
pub const TIMEOUT_VAR: &str = "DATAMALL_TIMEOUT_SECS";
pub const MAX_CONCURRENT_VAR: &str = "DATAMALL_MAX_CONCURRENT";
pub const ADDR_VAR: &str = "ARRIVAL_BOARD_ADDR";
pub const FONT_VAR: &str = "ARRIVAL_BOARD_FONT";
pub const SERVICES_VAR: &str = "ARRIVAL_BOARD_SERVICES";

/// Default listen address.
pub const DEFAULT_ADDR: &str = "0.0.0.0:8090";

/// Errors in process configuration. All are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or blank
    #[error("{0} env is required")]
    Missing(&'static str),

    /// A variable is set but cannot be used
    #[error("invalid {var}={value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub datamall: DatamallConfig,
    pub addr: SocketAddr,
    pub font_path: PathBuf,
    /// Services shown on the board, in display order.
    pub tracked: Vec<TrackedService>,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let account_key = get(ACCOUNT_KEY_VAR).ok_or(ConfigError::Missing(ACCOUNT_KEY_VAR))?;

        let mut datamall = DatamallConfig::new(account_key.trim());
        if let Some(url) = get(BASE_URL_VAR) {
            datamall = datamall.with_base_url(url.trim());
        }
        if let Some(raw) = get(TIMEOUT_VAR) {
            let secs: u64 = parse_var(TIMEOUT_VAR, &raw)?;
            if secs == 0 {
                return Err(invalid(TIMEOUT_VAR, &raw, "must be at least 1"));
            }
            datamall = datamall.with_timeout(secs);
        }
        if let Some(raw) = get(MAX_CONCURRENT_VAR) {
            let n: usize = parse_var(MAX_CONCURRENT_VAR, &raw)?;
            if n == 0 {
                return Err(invalid(MAX_CONCURRENT_VAR, &raw, "must be at least 1"));
            }
            datamall = datamall.with_max_concurrent(n);
        }

        let addr = match get(ADDR_VAR) {
            Some(raw) => parse_var(ADDR_VAR, &raw)?,
            None => parse_var(ADDR_VAR, DEFAULT_ADDR)?,
        };

        let font_path = get(FONT_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FONT_PATH));

        let tracked = match get(SERVICES_VAR) {
            Some(raw) => parse_tracked_services(&raw)?,
            None => default_tracked_services(),
        };

        Ok(Self {
            datamall,
            addr,
            font_path,
            tracked,
        })
    }
}

/// Parse a `,`-separated list of `label:stop:service` entries.
pub fn parse_tracked_services(raw: &str) -> Result<Vec<TrackedService>, ConfigError> {
    let tracked = raw
        .split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| {
            entry
                .parse::<TrackedService>()
                .map_err(|e| invalid(SERVICES_VAR, raw, e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if tracked.is_empty() {
        return Err(invalid(SERVICES_VAR, raw, "no services listed"));
    }

    Ok(tracked)
}

fn parse_var<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| invalid(var, raw, e.to_string()))
}

fn invalid(var: &'static str, value: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: reason.into(),
    }
}
