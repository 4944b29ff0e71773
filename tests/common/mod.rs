#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use linkcut::application::services::{LinkService, StatsService};
use linkcut::domain::click_event::ClickEvent;
use linkcut::domain::entities::{Click, Link, NewClick, NewLink};
use linkcut::domain::repositories::{LinkRepository, StatsRepository};
use linkcut::error::AppError;
use linkcut::infrastructure::cache::NullCache;
use linkcut::state::AppState;
use serde_json::json;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// In-memory `LinkRepository` backing handler tests.
///
/// Mirrors the storage-layer contract: unique codes, `is_active = true` and
/// `click_count = 0` on insert, relative click counter increments.
#[derive(Default)]
pub struct InMemoryLinks {
    rows: Mutex<Vec<Link>>,
    next_id: AtomicI64,
}

impl InMemoryLinks {
    /// Inserts an active, non-expiring link and returns its id.
    pub fn seed(&self, code: &str, url: &str) -> i64 {
        self.seed_with(code, url, true, None)
    }

    pub fn seed_inactive(&self, code: &str, url: &str) -> i64 {
        self.seed_with(code, url, false, None)
    }

    pub fn seed_expired(&self, code: &str, url: &str) -> i64 {
        self.seed_with(code, url, true, Some(Utc::now() - Duration::hours(1)))
    }

    pub fn seed_with(
        &self,
        code: &str,
        url: &str,
        is_active: bool,
        expires_at: Option<DateTime<Utc>>,
    ) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.rows.lock().unwrap().push(Link {
            id,
            code: code.to_string(),
            target_url: url.to_string(),
            is_custom: false,
            is_active,
            expires_at,
            click_count: 0,
            created_at: Utc::now(),
        });
        id
    }

    /// Snapshot of a stored link by code.
    pub fn get(&self, code: &str) -> Option<Link> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.code == code)
            .cloned()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinks {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut rows = self.rows.lock().unwrap();

        if rows.iter().any(|l| l.code == new_link.code) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "links_code_key" }),
            ));
        }

        let link = Link {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            code: new_link.code,
            target_url: new_link.target_url,
            is_custom: new_link.is_custom,
            is_active: true,
            expires_at: new_link.expires_at,
            click_count: 0,
            created_at: Utc::now(),
        };
        rows.push(link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.code == code)
            .cloned())
    }

    async fn set_active(&self, code: &str, active: bool) -> Result<Option<Link>, AppError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|l| l.code == code) {
            Some(link) => {
                link.is_active = active;
                Ok(Some(link.clone()))
            }
            None => Ok(None),
        }
    }

    async fn increment_clicks(&self, link_id: i64) -> Result<(), AppError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(link) = rows.iter_mut().find(|l| l.id == link_id) {
            link.click_count += 1;
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// In-memory `StatsRepository` backing handler tests.
#[derive(Default)]
pub struct InMemoryStats {
    rows: Mutex<Vec<Click>>,
    next_id: AtomicI64,
}

impl InMemoryStats {
    /// Inserts a click row directly, returning its id.
    pub fn seed_click(&self, link_id: i64, ip: &str) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.rows.lock().unwrap().push(Click {
            id,
            link_id,
            clicked_at: Utc::now(),
            ip: Some(ip.to_string()),
            user_agent: None,
            referer: None,
        });
        id
    }

    pub fn count(&self, link_id: i64) -> usize {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.link_id == link_id)
            .count()
    }
}

#[async_trait]
impl StatsRepository for InMemoryStats {
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError> {
        let click = Click {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            link_id: new_click.link_id,
            clicked_at: Utc::now(),
            ip: new_click.ip,
            user_agent: new_click.user_agent,
            referer: new_click.referer,
        };
        self.rows.lock().unwrap().push(click.clone());

        Ok(click)
    }

    async fn recent_clicks(&self, link_id: i64, limit: i64) -> Result<Vec<Click>, AppError> {
        let mut clicks: Vec<Click> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.link_id == link_id)
            .cloned()
            .collect();

        clicks.sort_by(|a, b| b.clicked_at.cmp(&a.clicked_at).then(b.id.cmp(&a.id)));
        clicks.truncate(limit as usize);

        Ok(clicks)
    }
}

/// Everything a handler test needs: the wired state, the click channel
/// receiver, and direct handles on the backing stores.
pub struct TestApp {
    pub state: AppState,
    pub rx: mpsc::Receiver<ClickEvent>,
    pub links: Arc<InMemoryLinks>,
    pub stats: Arc<InMemoryStats>,
}

pub fn build_state() -> TestApp {
    let links = Arc::new(InMemoryLinks::default());
    let stats = Arc::new(InMemoryStats::default());

    let link_repo: Arc<dyn LinkRepository> = links.clone();
    let stats_repo: Arc<dyn StatsRepository> = stats.clone();
    let cache = Arc::new(NullCache::new());

    let (tx, rx) = mpsc::channel(100);

    let link_service = Arc::new(LinkService::new(link_repo.clone(), cache.clone()));
    let stats_service = Arc::new(StatsService::new(link_repo, stats_repo));

    let state = AppState::new(
        link_service,
        stats_service,
        cache,
        tx,
        "http://localhost:3000".to_string(),
    );

    TestApp {
        state,
        rx,
        links,
        stats,
    }
}
