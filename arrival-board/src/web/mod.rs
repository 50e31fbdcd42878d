//! Web layer for the arrival board.
//!
//! `GET /` refreshes every tracked service and returns the board image.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
