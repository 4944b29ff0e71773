//! Repository trait for click tracking and reporting.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for click events.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStatsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Records a new click event.
    ///
    /// Exactly one row per successful redirect; rows are immutable once
    /// written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors (including a
    /// dangling `link_id`, which violates the foreign key).
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Returns the most recent clicks for a link, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn recent_clicks(&self, link_id: i64, limit: i64) -> Result<Vec<Click>, AppError>;
}
