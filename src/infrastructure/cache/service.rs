//! Cache service trait and error types.

use crate::domain::entities::Link;
use async_trait::async_trait;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),

    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching resolved links.
///
/// Whole [`Link`] entities are cached, not just target URLs: the redirect
/// decision needs activation and expiry state. A cached entry is only as
/// fresh as its last write plus any explicit [`CacheService::invalidate`]
/// call; in particular `click_count` is allowed to go stale between writes.
///
/// Implementations must be thread-safe and fail open: cache failures degrade
/// to database lookups, never disrupt a request.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves a cached link by short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(link))` on cache hit
    /// - `Ok(None)` on cache miss or error (fail-open behavior)
    async fn get_link(&self, code: &str) -> CacheResult<Option<Link>>;

    /// Stores a link in cache with optional TTL.
    ///
    /// `ttl_seconds = None` uses the implementation default. Errors are
    /// logged and swallowed so callers never fail on a cache write.
    async fn set_link(&self, code: &str, link: &Link, ttl_seconds: Option<u64>)
    -> CacheResult<()>;

    /// Removes a cached link.
    ///
    /// Called whenever a link's activation state changes so stale
    /// active/inactive state is never served.
    async fn invalidate(&self, code: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by the health endpoint to report cache status.
    async fn health_check(&self) -> bool;
}
