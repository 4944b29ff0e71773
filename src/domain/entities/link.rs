//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shortened URL link with metadata.
///
/// Represents the mapping between a short code and its target URL, together
/// with the activation/expiry state machine and the click counter.
///
/// Serde derives exist so the whole entity can be stored in the cache layer;
/// a cached copy may carry a stale `click_count` (see
/// [`crate::application::services::LinkService::resolve`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    /// True when the code was chosen by the user rather than generated.
    pub is_custom: bool,
    pub is_active: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Returns true if the link has passed its expiry time.
    ///
    /// A link with no `expires_at` never expires.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| Utc::now() >= e)
    }

    /// Returns true if the link may serve redirects: active and not expired.
    pub fn is_live(&self) -> bool {
        self.is_active && !self.is_expired()
    }
}

/// Input data for creating a new link.
///
/// `is_active` defaults to true at the storage layer; `click_count` starts
/// at zero.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub target_url: String,
    pub is_custom: bool,
    pub expires_at: Option<DateTime<Utc>>,
}
