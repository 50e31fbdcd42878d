//! Bus stop and service number identifiers.

use std::fmt;

/// Longest identifier DataMall uses for either kind of code.
const MAX_CODE_LEN: usize = 8;

/// Error returned when parsing an invalid stop code or service number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: {reason}")]
pub struct InvalidCode {
    kind: &'static str,
    reason: &'static str,
}

fn validate(kind: &'static str, s: &str) -> Result<(), InvalidCode> {
    if s.is_empty() {
        return Err(InvalidCode {
            kind,
            reason: "must not be empty",
        });
    }

    if s.len() > MAX_CODE_LEN {
        return Err(InvalidCode {
            kind,
            reason: "must be at most 8 characters",
        });
    }

    if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(InvalidCode {
            kind,
            reason: "must be ASCII letters or digits",
        });
    }

    Ok(())
}

/// A DataMall bus stop code, e.g. `58271`.
///
/// # Examples
///
/// ```
/// use arrival_board::domain::StopCode;
///
/// let stop = StopCode::parse("58271").unwrap();
/// assert_eq!(stop.as_str(), "58271");
///
/// assert!(StopCode::parse("").is_err());
/// assert!(StopCode::parse("58 271").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StopCode(String);

impl StopCode {
    /// Parse a stop code. Must be 1-8 ASCII alphanumeric characters.
    pub fn parse(s: &str) -> Result<Self, InvalidCode> {
        validate("stop code", s)?;
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopCode({})", self.0)
    }
}

impl fmt::Display for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bus service number, e.g. `859` or `858A`.
///
/// Case is preserved: DataMall matches service numbers exactly.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ServiceNo(String);

impl ServiceNo {
    /// Parse a service number. Must be 1-8 ASCII alphanumeric characters.
    pub fn parse(s: &str) -> Result<Self, InvalidCode> {
        validate("service number", s)?;
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ServiceNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceNo({})", self.0)
    }
}

impl fmt::Display for ServiceNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
