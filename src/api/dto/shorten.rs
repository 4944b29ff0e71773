//! DTOs for the link shortening endpoint.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for custom code validation.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap());

/// Request to shorten a URL.
///
/// `custom_hash` is accepted as an alias of `custom_code` for compatibility
/// with older clients.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten. A missing `http(s)://` scheme defaults to `http://`.
    #[validate(length(min = 1, max = 2000, message = "URL must be 1-2000 characters"))]
    pub url: String,

    /// Optional custom short code (letters, digits, hyphens, underscores).
    #[serde(default, alias = "custom_hash")]
    #[validate(
        length(min = 1, max = 64),
        regex(
            path = "*CUSTOM_CODE_REGEX",
            message = "Custom code can only contain letters, numbers, hyphens, and underscores"
        )
    )]
    pub custom_code: Option<String>,

    /// Optional link lifetime in days; `0` creates an already-expired link.
    #[serde(default)]
    #[validate(range(min = 0, max = 3650))]
    pub expire_days: Option<i64>,
}

/// Response for a successfully shortened URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub target_url: String,
    pub is_custom: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}
