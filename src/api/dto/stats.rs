//! DTOs for the link statistics endpoint.

use serde::Serialize;

use super::clicks::ClickInfo;
use super::link::LinkInfo;

/// Statistics report for a specific short link.
///
/// Includes the link record (with its live click counter) and the most
/// recent click events, newest first.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub link: LinkInfo,
    pub short_url: String,
    pub recent_clicks: Vec<ClickInfo>,
}
