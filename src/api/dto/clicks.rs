//! DTOs for click event data.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Individual click event information.
///
/// Optional fields are omitted from JSON when `None` for cleaner responses.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub clicked_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub referer: Option<String>,
}

impl From<crate::domain::entities::Click> for ClickInfo {
    fn from(click: crate::domain::entities::Click) -> Self {
        Self {
            clicked_at: click.clicked_at,
            ip: click.ip,
            user_agent: click.user_agent,
            referer: click.referer,
        }
    }
}
