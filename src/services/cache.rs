use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use crate::models::{CacheStats, CandidateCriteria, MentorProfile};
use crate::services::directory::{DirectoryError, MentorDirectory};

/// Caching decorator for a mentor directory
///
/// Keeps recently fetched candidate pools in an in-memory TTL cache keyed by
/// the request criteria. Failed fetches are never cached.
pub struct CachedDirectory<D> {
    inner: D,
    pools: moka::future::Cache<String, Arc<Vec<MentorProfile>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<D: MentorDirectory> CachedDirectory<D> {
    /// Create a new caching directory
    pub fn new(inner: D, capacity: u64, ttl_secs: u64) -> Self {
        let pools = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self {
            inner,
            pools,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        let hit_count = self.hits.load(Ordering::Relaxed);
        let miss_count = self.misses.load(Ordering::Relaxed);
        let lookups = hit_count + miss_count;

        CacheStats {
            entries: self.pools.entry_count(),
            hit_count,
            miss_count,
            hit_rate: if lookups == 0 { 0.0 } else { hit_count as f64 / lookups as f64 },
        }
    }
}

#[async_trait]
impl<D: MentorDirectory> MentorDirectory for CachedDirectory<D> {
    fn backend_tag(&self) -> &'static str {
        self.inner.backend_tag()
    }

    async fn fetch_candidate_mentors(
        &self,
        criteria: &CandidateCriteria,
    ) -> Result<Vec<MentorProfile>, DirectoryError> {
        let key = CacheKey::candidates(criteria);

        if let Some(pool) = self.pools.get(&key).await {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("Candidate cache hit: {}", key);
            return Ok(pool.as_ref().clone());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::trace!("Candidate cache miss: {}", key);

        let mentors = self.inner.fetch_candidate_mentors(criteria).await?;
        self.pools.insert(key, Arc::new(mentors.clone())).await;

        Ok(mentors)
    }

    fn cache_stats(&self) -> Option<CacheStats> {
        Some(self.stats())
    }
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for a candidate pool
    pub fn candidates(criteria: &CandidateCriteria) -> String {
        let mut excluded = criteria.exclude_mentor_ids.clone();
        excluded.sort();

        format!(
            "candidates:verified={}:rating={}:years={}:exclude={}:limit={}",
            criteria.verified_only,
            criteria.min_rating.map(|r| r.to_string()).unwrap_or_default(),
            criteria.min_years_experience.map(|y| y.to_string()).unwrap_or_default(),
            excluded.join(","),
            criteria.limit.map(|l| l.to_string()).unwrap_or_default(),
        )
    }
}
