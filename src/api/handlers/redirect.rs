//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};
use serde_json::json;
use std::net::SocketAddr;
use tracing::debug;

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the link (cache first, then database)
/// 2. Reject deactivated or expired links with 410 Gone; nothing is logged
///    and the click counter is untouched
/// 3. Send one click event to the background worker (fire-and-forget; a full
///    queue drops the click, never the redirect)
/// 4. Return a 307 Temporary Redirect to the target URL
///
/// # Errors
///
/// Returns 404 Not Found for unknown codes and 410 Gone for blocked links;
/// the two are never conflated.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.resolve(&code).await?;

    if !link.is_live() {
        debug!("Blocked redirect for {}: inactive or expired", code);
        return Err(AppError::gone(
            "This link has been deactivated or has expired",
            json!({
                "code": code,
                "is_active": link.is_active,
                "expires_at": link.expires_at,
            }),
        ));
    }

    let click_event = ClickEvent::new(
        link.id,
        Some(client_ip(&headers, addr)),
        headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok()),
        headers.get(header::REFERER).and_then(|v| v.to_str().ok()),
    );

    let _ = state.click_sender.try_send(click_event);

    Ok(Redirect::temporary(&link.target_url))
}
