use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use crate::core::validation::accept_valid_candidates;
use crate::models::{CandidateCriteria, MentorProfile, MentorRecord};
use crate::services::directory::{DirectoryError, MentorDirectory};

/// Hosted backend client for the mentor table
///
/// Talks to the backend's PostgREST-style REST interface:
/// `GET {base_url}/rest/v1/{table}?select=*&...` with the project API key.
pub struct BackendDirectory {
    base_url: String,
    api_key: String,
    mentors_table: String,
    client: Client,
}

impl BackendDirectory {
    /// Create a new backend client
    pub fn new(
        base_url: String,
        api_key: String,
        mentors_table: String,
        timeout: Duration,
    ) -> Result<Self, DirectoryError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            mentors_table,
            client,
        })
    }

    /// Build the filtered table URL for a set of criteria
    fn mentors_url(&self, criteria: &CandidateCriteria) -> String {
        let mut filters = vec![
            "select=*".to_string(),
            "accepting_mentees=eq.true".to_string(),
        ];

        if criteria.verified_only {
            filters.push("is_verified=eq.true".to_string());
        }

        if let Some(min_rating) = criteria.min_rating {
            filters.push(format!("rating=gte.{}", min_rating));
        }

        if let Some(min_years) = criteria.min_years_experience {
            filters.push(format!("years_experience=gte.{}", min_years));
        }

        if !criteria.exclude_mentor_ids.is_empty() {
            let ids = criteria
                .exclude_mentor_ids
                .iter()
                .map(|id| format!("\"{}\"", id.replace('"', "")))
                .collect::<Vec<_>>()
                .join(",");
            filters.push(format!("id=not.in.({})", urlencoding::encode(&ids)));
        }

        if let Some(limit) = criteria.limit {
            filters.push(format!("limit={}", limit));
        }

        format!(
            "{}/rest/v1/{}?{}",
            self.base_url.trim_end_matches('/'),
            self.mentors_table,
            filters.join("&")
        )
    }
}

#[async_trait]
impl MentorDirectory for BackendDirectory {
    fn backend_tag(&self) -> &'static str {
        "backend"
    }

    async fn fetch_candidate_mentors(
        &self,
        criteria: &CandidateCriteria,
    ) -> Result<Vec<MentorProfile>, DirectoryError> {
        let url = self.mentors_url(criteria);

        tracing::debug!("Fetching candidate mentors from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(DirectoryError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Failed to fetch mentors: {} - {}", status, body);
            return Err(DirectoryError::ApiError(format!(
                "Failed to fetch mentors: {}",
                status
            )));
        }

        let json: Value = response.json().await?;

        let rows = json
            .as_array()
            .ok_or_else(|| DirectoryError::InvalidResponse("Expected an array of rows".into()))?;

        let records: Vec<MentorRecord> = rows
            .iter()
            .filter_map(|row| match serde_json::from_value(row.clone()) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("Skipping unparseable mentor row: {}", e);
                    None
                }
            })
            .collect();

        let total = records.len();
        let mentors = accept_valid_candidates(records);

        tracing::debug!("Fetched {} valid mentors ({} rows)", mentors.len(), total);

        Ok(mentors)
    }
}
