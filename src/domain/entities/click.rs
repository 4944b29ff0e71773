//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click event recorded when a shortened link is accessed.
///
/// Captures metadata about each redirect for analytics purposes, including
/// client information (user agent, referrer) and network details (IP address).
/// Immutable once written.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub clicked_at: DateTime<Utc>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

/// Input data for recording a new click event.
///
/// The `link_id` must reference an existing link; the timestamp is set by
/// the storage layer. All metadata fields are optional to handle missing
/// request headers gracefully.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub link_id: i64,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}
