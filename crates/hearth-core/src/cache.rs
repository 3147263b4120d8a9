//! Optional caching decorator around a [`HuntRepository`].
//!
//! Memoizes `get_all` for a fixed time-to-live. `search` and `get_by_id` go
//! through the memoized list because they are built on `get_all`.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::collection::HuntRepository;
use crate::models::Hunt;

struct CacheEntry {
    fetched_at: Instant,
    hunts: Vec<Hunt>,
}

pub struct CachedRepository<R> {
    inner: R,
    ttl: Duration,
    entry: Mutex<Option<CacheEntry>>,
}

impl<R: HuntRepository> CachedRepository<R> {
    pub fn new(inner: R, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entry: Mutex::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Drop the memoized list so the next call refetches
    pub async fn invalidate(&self) {
        *self.entry.lock().await = None;
    }
}

#[async_trait]
impl<R: HuntRepository> HuntRepository for CachedRepository<R> {
    async fn get_all(&self) -> Vec<Hunt> {
        // Held across the fetch: concurrent callers wait for a single fetch
        let mut entry = self.entry.lock().await;

        if let Some(cached) = entry.as_ref() {
            if cached.fetched_at.elapsed() < self.ttl {
                tracing::debug!(count = cached.hunts.len(), "Serving hunts from cache");
                return cached.hunts.clone();
            }
        }

        let hunts = self.inner.get_all().await;
        *entry = Some(CacheEntry {
            fetched_at: Instant::now(),
            hunts: hunts.clone(),
        });
        hunts
    }
}
