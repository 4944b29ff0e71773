//! Background worker that persists click events.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::NewClick;
use crate::domain::repositories::{LinkRepository, StatsRepository};

/// Applies a single click event: one click row, one counter increment.
///
/// The counter update is a relative `click_count + 1` at the storage layer,
/// so concurrent redirects for the same code never lose updates. A failed
/// click insert skips the increment to keep the two in step.
pub async fn apply_click(
    links: &Arc<dyn LinkRepository>,
    stats: &Arc<dyn StatsRepository>,
    event: ClickEvent,
) {
    let new_click = NewClick {
        link_id: event.link_id,
        ip: event.ip,
        user_agent: event.user_agent,
        referer: event.referer,
    };

    if let Err(e) = stats.record_click(new_click).await {
        warn!(link_id = event.link_id, "Failed to record click: {e}");
        return;
    }

    if let Err(e) = links.increment_clicks(event.link_id).await {
        warn!(link_id = event.link_id, "Failed to increment click count: {e}");
    }
}

/// Consumes click events from the channel until all senders are dropped.
///
/// Errors are logged and the event dropped; click tracking is best-effort
/// and never fails a redirect.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    links: Arc<dyn LinkRepository>,
    stats: Arc<dyn StatsRepository>,
) {
    while let Some(event) = rx.recv().await {
        apply_click(&links, &stats, event).await;
    }

    info!("Click worker stopped");
}
