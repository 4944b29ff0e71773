//! Click event model for asynchronous click tracking.

/// An in-memory representation of a click event for async processing.
///
/// Used to pass click information from the redirect handler to the
/// background worker via a channel. This decouples the HTTP response from
/// database writes, allowing fast redirects without blocking.
///
/// The handler has already resolved the link, so the event carries the
/// `link_id` directly and the worker never needs a lookup. Only events for
/// live links are ever enqueued; blocked redirects produce no event.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub link_id: i64,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

impl ClickEvent {
    /// Creates a new click event from request metadata.
    pub fn new(
        link_id: i64,
        ip: Option<String>,
        user_agent: Option<&str>,
        referer: Option<&str>,
    ) -> Self {
        Self {
            link_id,
            ip,
            user_agent: user_agent.map(|s| s.to_string()),
            referer: referer.map(|s| s.to_string()),
        }
    }
}
