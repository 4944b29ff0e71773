//! Handlers for link activation control.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

/// Reactivates a link.
///
/// # Endpoint
///
/// `POST /activate/{code}`
///
/// Idempotent; on success redirects (303) to the stats page for the code.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn activate_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Redirect, AppError> {
    let link = state.link_service.set_active(&code, true).await?;
    info!("Link {} activated", link.code);

    Ok(Redirect::to(&format!("/stats/{}", link.code)))
}

/// Deactivates a link so redirects return 410 Gone.
///
/// # Endpoint
///
/// `POST /deactivate/{code}`
///
/// Idempotent; on success redirects (303) to the stats page for the code.
/// The click counter is untouched.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn deactivate_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Redirect, AppError> {
    let link = state.link_service.set_active(&code, false).await?;
    info!("Link {} deactivated", link.code);

    Ok(Redirect::to(&format!("/stats/{}", link.code)))
}
