//! Shared link representation for API responses.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// Public view of a link record.
#[derive(Debug, Serialize)]
pub struct LinkInfo {
    pub code: String,
    pub target_url: String,
    pub is_custom: bool,
    pub is_active: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkInfo {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            target_url: link.target_url,
            is_custom: link.is_custom,
            is_active: link.is_active,
            expires_at: link.expires_at,
            click_count: link.click_count,
            created_at: link.created_at,
        }
    }
}
