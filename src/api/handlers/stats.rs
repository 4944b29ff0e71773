//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves the link record and its 25 most recent clicks.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// The link is read directly from the store (never the cache), so the
/// reported `click_count` is current.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let report = state.stats_service.link_stats(&code).await?;

    let short_url = state.short_url(&report.link.code);

    Ok(Json(StatsResponse {
        link: report.link.into(),
        short_url,
        recent_clicks: report
            .recent_clicks
            .into_iter()
            .map(Into::into)
            .collect(),
    }))
}
