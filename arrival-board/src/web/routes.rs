//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::refresh::ArrivalSource;
use crate::render::RenderError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<S>(state: AppState<S>) -> Router
where
    S: ArrivalSource + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(board::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Refresh every tracked service and return the rendered board.
///
/// Each request fetches live data; the image is never cached.
async fn board<S>(State(state): State<AppState<S>>) -> Result<Response, AppError>
where
    S: ArrivalSource + Send + Sync + 'static,
{
    let snapshot = state
        .store
        .refresh(state.source.as_ref(), &state.tracked)
        .await;

    info!(
        services = snapshot.len(),
        with_timings = snapshot
            .services
            .iter()
            .filter(|s| !s.timings().is_empty())
            .count(),
        "Rendering board"
    );

    // Rasterising text is CPU-bound; keep it off the async workers.
    let renderer = Arc::clone(&state.renderer);
    let content_type = renderer.content_type();
    let bytes = tokio::task::spawn_blocking(move || renderer.render(&snapshot))
        .await
        .map_err(|e| AppError::Internal {
            message: format!("render task failed: {e}"),
        })??;

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, "no-store"),
        ],
        bytes,
    )
        .into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    Internal { message: String },
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!(%status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
