use async_trait::async_trait;
use thiserror::Error;
use crate::core::filters::filter_candidates;
use crate::models::{CacheStats, CandidateCriteria, MentorProfile};

/// Errors that can occur when fetching candidate mentors
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Source of candidate mentors for a matching request
#[async_trait]
pub trait MentorDirectory: Send + Sync {
    /// Short name used in logs
    fn backend_tag(&self) -> &'static str;

    async fn fetch_candidate_mentors(
        &self,
        criteria: &CandidateCriteria,
    ) -> Result<Vec<MentorProfile>, DirectoryError>;

    /// Cache counters for `/health`; `None` for uncached directories
    fn cache_stats(&self) -> Option<CacheStats> {
        None
    }
}

/// Fetch candidates, treating any directory failure as an empty pool
///
/// Failures are logged and never retried.
pub async fn fetch_or_empty(
    directory: &dyn MentorDirectory,
    criteria: &CandidateCriteria,
) -> Vec<MentorProfile> {
    match directory.fetch_candidate_mentors(criteria).await {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::warn!(
                "Candidate fetch from {} failed, continuing with no candidates: {}",
                directory.backend_tag(),
                e
            );
            vec![]
        }
    }
}

/// In-memory mentor pool
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    mentors: Vec<MentorProfile>,
}

impl StaticDirectory {
    pub fn new(mentors: Vec<MentorProfile>) -> Self {
        Self { mentors }
    }
}

#[async_trait]
impl MentorDirectory for StaticDirectory {
    fn backend_tag(&self) -> &'static str {
        "static"
    }

    async fn fetch_candidate_mentors(
        &self,
        criteria: &CandidateCriteria,
    ) -> Result<Vec<MentorProfile>, DirectoryError> {
        Ok(filter_candidates(&self.mentors, criteria))
    }
}
