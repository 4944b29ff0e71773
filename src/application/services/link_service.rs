//! Link creation, resolution, and activation service.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::json;
use url::Url;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::code_generator::{generate_code, validate_custom_code};

/// Maximum collision retries when generating a random code.
///
/// In a 62^7 keyspace a single collision is already unlikely; hitting the
/// cap means something is seriously wrong with the store.
const MAX_GENERATE_ATTEMPTS: usize = 10;

/// Upper bound for `expire_days`, matching the request DTO's range rule.
///
/// Enforced here as well so callers that bypass the DTO cannot push
/// `expires_at` past what `chrono::Duration::days` accepts.
const MAX_EXPIRE_DAYS: i64 = 3650;

/// Service for creating, resolving, and toggling shortened links.
///
/// The cache handle is an injected dependency so it can be swapped for
/// [`crate::infrastructure::cache::NullCache`] or a mock in tests.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
    cache: Arc<dyn CacheService>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(links: Arc<dyn LinkRepository>, cache: Arc<dyn CacheService>) -> Self {
        Self { links, cache }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `target_url` - The URL to shorten; a missing scheme defaults to `http://`
    /// - `custom_code` - Optional user-chosen code (validated before any write)
    /// - `expire_days` - Optional lifetime in days; `0` expires immediately
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL does not parse, the custom
    /// code violates the character rules, or `expire_days` is negative or
    /// above [`MAX_EXPIRE_DAYS`].
    /// Returns [`AppError::Conflict`] if the custom code is already taken.
    pub async fn shorten(
        &self,
        target_url: String,
        custom_code: Option<String>,
        expire_days: Option<i64>,
    ) -> Result<Link, AppError> {
        let target_url = ensure_scheme(target_url);

        Url::parse(&target_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        let expires_at = match expire_days {
            Some(days) if days < 0 => {
                return Err(AppError::bad_request(
                    "expire_days must not be negative",
                    json!({ "expire_days": days }),
                ));
            }
            Some(days) if days > MAX_EXPIRE_DAYS => {
                return Err(AppError::bad_request(
                    "expire_days must not exceed 3650",
                    json!({ "expire_days": days, "max": MAX_EXPIRE_DAYS }),
                ));
            }
            Some(days) => Some(Utc::now() + Duration::days(days)),
            None => None,
        };

        let (code, is_custom) = if let Some(custom) = custom_code {
            validate_custom_code(&custom)?;

            if self.links.find_by_code(&custom).await?.is_some() {
                return Err(AppError::conflict(
                    "This custom code is already taken",
                    json!({ "code": custom }),
                ));
            }

            (custom, true)
        } else {
            (self.generate_unique_code().await?, false)
        };

        self.links
            .create(NewLink {
                code,
                target_url,
                is_custom,
                expires_at,
            })
            .await
    }

    /// Resolves a short code to its link, read-through via the cache.
    ///
    /// # Staleness
    ///
    /// Cached entries are invalidated on activate/deactivate but not on
    /// click-count increments, so `click_count` on a resolved link may lag
    /// behind the store by up to one cache TTL. Reporting paths that need a
    /// fresh count must read the repository directly
    /// (see [`crate::application::services::StatsService`]).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        // Fail-open: a cache error is just a miss
        if let Ok(Some(link)) = self.cache.get_link(code).await {
            return Ok(link);
        }

        let link = self
            .links
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

        if let Err(e) = self.cache.set_link(code, &link, None).await {
            tracing::warn!("Failed to cache link {}: {}", code, e);
        }

        Ok(link)
    }

    /// Sets the activation flag and invalidates the cached entry.
    ///
    /// Idempotent: repeating a call leaves the flag (and `click_count`)
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn set_active(&self, code: &str, active: bool) -> Result<Link, AppError> {
        let link = self
            .links
            .set_active(code, active)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

        // Never serve stale activation state
        if let Err(e) = self.cache.invalidate(code).await {
            tracing::warn!("Failed to invalidate cache for {}: {}", code, e);
        }

        Ok(link)
    }

    /// Verifies database connectivity for the health endpoint.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.links.ping().await
    }

    /// Generates a unique short code with bounded collision retry.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for _ in 0..MAX_GENERATE_ATTEMPTS {
            let code = generate_code();

            if self.links.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}

/// Prepends `http://` when the URL has no HTTP(S) scheme.
fn ensure_scheme(url: String) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url
    } else {
        format!("http://{url}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use crate::infrastructure::cache::{MockCacheService, NullCache};

    fn stored_link(id: i64, code: &str, url: &str) -> Link {
        Link {
            id,
            code: code.to_string(),
            target_url: url.to_string(),
            is_custom: false,
            is_active: true,
            expires_at: None,
            click_count: 0,
            created_at: Utc::now(),
        }
    }

    fn service(links: MockLinkRepository) -> LinkService {
        LinkService::new(Arc::new(links), Arc::new(NullCache))
    }

    #[test]
    fn test_ensure_scheme() {
        assert_eq!(ensure_scheme("example.com".into()), "http://example.com");
        assert_eq!(
            ensure_scheme("https://example.com".into()),
            "https://example.com"
        );
        assert_eq!(
            ensure_scheme("http://example.com".into()),
            "http://example.com"
        );
    }

    #[tokio::test]
    async fn test_shorten_generates_seven_char_code() {
        let mut links = MockLinkRepository::new();

        links.expect_find_by_code().times(1).returning(|_| Ok(None));

        links
            .expect_create()
            .withf(|new_link| {
                new_link.code.len() == 7
                    && new_link.code.chars().all(|c| c.is_ascii_alphanumeric())
                    && !new_link.is_custom
                    && new_link.expires_at.is_none()
            })
            .times(1)
            .returning(|n| Ok(stored_link(1, &n.code, &n.target_url)));

        let result = service(links)
            .shorten("https://example.com".to_string(), None, None)
            .await
            .unwrap();

        assert_eq!(result.target_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_shorten_retries_on_collision() {
        let mut links = MockLinkRepository::new();
        let mut calls = 0;

        links.expect_find_by_code().times(2).returning(move |c| {
            calls += 1;
            if calls == 1 {
                Ok(Some(stored_link(9, c, "https://other.com")))
            } else {
                Ok(None)
            }
        });

        links
            .expect_create()
            .times(1)
            .returning(|n| Ok(stored_link(1, &n.code, &n.target_url)));

        let result = service(links)
            .shorten("https://example.com".to_string(), None, None)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_shorten_with_custom_code() {
        let mut links = MockLinkRepository::new();

        links
            .expect_find_by_code()
            .withf(|code| code == "my_Code-1")
            .times(1)
            .returning(|_| Ok(None));

        links
            .expect_create()
            .withf(|n| n.code == "my_Code-1" && n.is_custom)
            .times(1)
            .returning(|n| Ok(stored_link(1, &n.code, &n.target_url)));

        let result = service(links)
            .shorten(
                "https://example.com".to_string(),
                Some("my_Code-1".to_string()),
                None,
            )
            .await
            .unwrap();

        assert_eq!(result.code, "my_Code-1");
    }

    #[tokio::test]
    async fn test_shorten_custom_code_conflict() {
        let mut links = MockLinkRepository::new();

        links
            .expect_find_by_code()
            .withf(|code| code == "taken")
            .times(1)
            .returning(|c| Ok(Some(stored_link(5, c, "https://other.com"))));

        links.expect_create().times(0);

        let result = service(links)
            .shorten(
                "https://example.com".to_string(),
                Some("taken".to_string()),
                None,
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_shorten_custom_code_invalid_characters() {
        let mut links = MockLinkRepository::new();
        links.expect_find_by_code().times(0);
        links.expect_create().times(0);

        let result = service(links)
            .shorten(
                "https://example.com".to_string(),
                Some("bad code!".to_string()),
                None,
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_shorten_prepends_scheme() {
        let mut links = MockLinkRepository::new();

        links.expect_find_by_code().times(1).returning(|_| Ok(None));
        links
            .expect_create()
            .withf(|n| n.target_url == "http://example.com/page")
            .times(1)
            .returning(|n| Ok(stored_link(1, &n.code, &n.target_url)));

        let result = service(links)
            .shorten("example.com/page".to_string(), None, None)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_shorten_invalid_url() {
        let mut links = MockLinkRepository::new();
        links.expect_find_by_code().times(0);
        links.expect_create().times(0);

        let result = service(links)
            .shorten("http://exa mple.com".to_string(), None, None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_shorten_with_expire_days() {
        let mut links = MockLinkRepository::new();

        links.expect_find_by_code().times(1).returning(|_| Ok(None));
        links
            .expect_create()
            .withf(|n| {
                let expires = n.expires_at.expect("expiry should be set");
                let days = (expires - Utc::now()).num_days();
                (2..=3).contains(&days)
            })
            .times(1)
            .returning(|n| Ok(stored_link(1, &n.code, &n.target_url)));

        let result = service(links)
            .shorten("https://example.com".to_string(), None, Some(3))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_shorten_zero_expire_days_is_already_expired() {
        let mut links = MockLinkRepository::new();

        links.expect_find_by_code().times(1).returning(|_| Ok(None));
        links.expect_create().times(1).returning(|n| {
            let mut link = stored_link(1, &n.code, &n.target_url);
            link.expires_at = n.expires_at;
            Ok(link)
        });

        let link = service(links)
            .shorten("https://example.com".to_string(), None, Some(0))
            .await
            .unwrap();

        assert!(link.is_expired());
        assert!(!link.is_live());
    }

    #[tokio::test]
    async fn test_shorten_negative_expire_days() {
        let mut links = MockLinkRepository::new();
        links.expect_find_by_code().times(0);
        links.expect_create().times(0);

        let result = service(links)
            .shorten("https://example.com".to_string(), None, Some(-1))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_shorten_oversized_expire_days() {
        let mut links = MockLinkRepository::new();
        links.expect_find_by_code().times(0);
        links.expect_create().times(0);

        // Far beyond what Duration::days can represent as a timestamp
        let result = service(links)
            .shorten("https://example.com".to_string(), None, Some(i64::MAX))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_resolve_cache_hit_skips_repository() {
        let mut links = MockLinkRepository::new();
        let mut cache = MockCacheService::new();

        links.expect_find_by_code().times(0);
        cache
            .expect_get_link()
            .withf(|code| code == "cached1")
            .times(1)
            .returning(|c| Ok(Some(stored_link(3, c, "https://cached.example"))));

        let service = LinkService::new(Arc::new(links), Arc::new(cache));
        let link = service.resolve("cached1").await.unwrap();

        assert_eq!(link.target_url, "https://cached.example");
    }

    #[tokio::test]
    async fn test_resolve_cache_miss_populates_cache() {
        let mut links = MockLinkRepository::new();
        let mut cache = MockCacheService::new();

        cache.expect_get_link().times(1).returning(|_| Ok(None));
        links
            .expect_find_by_code()
            .withf(|code| code == "fresh12")
            .times(1)
            .returning(|c| Ok(Some(stored_link(4, c, "https://example.com"))));
        cache
            .expect_set_link()
            .withf(|code, link, ttl| code == "fresh12" && link.id == 4 && ttl.is_none())
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = LinkService::new(Arc::new(links), Arc::new(cache));
        let link = service.resolve("fresh12").await.unwrap();

        assert_eq!(link.id, 4);
    }

    #[tokio::test]
    async fn test_resolve_unknown_code() {
        let mut links = MockLinkRepository::new();
        links.expect_find_by_code().times(1).returning(|_| Ok(None));

        let result = service(links).resolve("missing").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_set_active_invalidates_cache() {
        let mut links = MockLinkRepository::new();
        let mut cache = MockCacheService::new();

        links
            .expect_set_active()
            .withf(|code, active| code == "toggle1" && !active)
            .times(1)
            .returning(|c, active| {
                let mut link = stored_link(6, c, "https://example.com");
                link.is_active = active;
                Ok(Some(link))
            });

        cache
            .expect_invalidate()
            .withf(|code| code == "toggle1")
            .times(1)
            .returning(|_| Ok(()));

        let service = LinkService::new(Arc::new(links), Arc::new(cache));
        let link = service.set_active("toggle1", false).await.unwrap();

        assert!(!link.is_active);
    }

    #[tokio::test]
    async fn test_set_active_unknown_code() {
        let mut links = MockLinkRepository::new();
        let mut cache = MockCacheService::new();

        links.expect_set_active().times(1).returning(|_, _| Ok(None));
        cache.expect_invalidate().times(0);

        let service = LinkService::new(Arc::new(links), Arc::new(cache));
        let result = service.set_active("missing", true).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
