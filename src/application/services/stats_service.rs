//! Click statistics reporting service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Click, Link};
use crate::domain::repositories::{LinkRepository, StatsRepository};
use crate::error::AppError;

/// Number of recent clicks returned with a stats report.
const RECENT_CLICKS_LIMIT: i64 = 25;

/// A link together with its most recent click events, newest first.
#[derive(Debug, Clone)]
pub struct LinkStats {
    pub link: Link,
    pub recent_clicks: Vec<Click>,
}

/// Read-only service for link statistics.
///
/// Reads the link straight from the repository, bypassing the cache, so the
/// reported `click_count` is never stale.
pub struct StatsService {
    links: Arc<dyn LinkRepository>,
    stats: Arc<dyn StatsRepository>,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(links: Arc<dyn LinkRepository>, stats: Arc<dyn StatsRepository>) -> Self {
        Self { links, stats }
    }

    /// Returns the link record and its last 25 clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn link_stats(&self, code: &str) -> Result<LinkStats, AppError> {
        let link = self
            .links
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

        let recent_clicks = self.stats.recent_clicks(link.id, RECENT_CLICKS_LIMIT).await?;

        Ok(LinkStats {
            link,
            recent_clicks,
        })
    }
}
