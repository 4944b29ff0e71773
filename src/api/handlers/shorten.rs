//! Handler for the link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "custom_code": "my-link",   // optional ("custom_hash" also accepted)
///   "expire_days": 30           // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails and 409 Conflict if the
/// custom code is already taken; in both cases no link is created.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .shorten(payload.url, payload.custom_code, payload.expire_days)
        .await?;

    let short_url = state.short_url(&link.code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            code: link.code,
            short_url,
            target_url: link.target_url,
            is_custom: link.is_custom,
            expires_at: link.expires_at,
        }),
    ))
}
