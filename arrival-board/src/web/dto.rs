//! JSON response bodies.

use serde::{Deserialize, Serialize};

/// Error body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
