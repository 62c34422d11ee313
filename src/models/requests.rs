use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{CandidateCriteria, MenteePreferences, RankingConfig};
use crate::models::records::MentorRecord;

/// Request to find mentor matches from the directory
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    /// Excluded from the candidate pool when the mentee is also a mentor
    #[validate(length(min = 1))]
    #[serde(alias = "mentee_id", rename = "menteeId", default)]
    pub mentee_id: Option<String>,
    pub preferences: MenteePreferences,
    #[validate(range(max = 100))]
    #[serde(alias = "min_score", rename = "minScore", default)]
    pub min_score: Option<u8>,
    #[validate(range(min = 1))]
    #[serde(alias = "max_results", rename = "maxResults", default)]
    pub max_results: Option<usize>,
    #[serde(alias = "verified_only", rename = "verifiedOnly", default)]
    pub verified_only: bool,
    #[validate(range(min = 0.0, max = 5.0))]
    #[serde(alias = "min_rating", rename = "minRating", default)]
    pub min_rating: Option<f64>,
    #[serde(alias = "min_years_experience", rename = "minYearsExperience", default)]
    pub min_years_experience: Option<u32>,
}

impl FindMatchesRequest {
    pub fn ranking_config(&self, defaults: RankingConfig, max_results_cap: usize) -> RankingConfig {
        resolve_ranking_config(self.min_score, self.max_results, defaults, max_results_cap)
    }

    /// Directory criteria for this request
    ///
    /// `maxResults` never limits the fetch; only the configured `pool_limit`
    /// does, so every eligible mentor is scored before truncation.
    pub fn candidate_criteria(&self, pool_limit: Option<usize>) -> CandidateCriteria {
        CandidateCriteria {
            verified_only: self.verified_only,
            min_rating: self.min_rating,
            min_years_experience: self.min_years_experience,
            exclude_mentor_ids: self.mentee_id.iter().cloned().collect(),
            limit: pool_limit,
        }
    }
}

/// Request to rank an explicit list of candidate mentors
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankCandidatesRequest {
    pub preferences: MenteePreferences,
    #[validate(length(max = 1000))]
    #[serde(default)]
    pub candidates: Vec<MentorRecord>,
    #[validate(range(max = 100))]
    #[serde(alias = "min_score", rename = "minScore", default)]
    pub min_score: Option<u8>,
    #[validate(range(min = 1))]
    #[serde(alias = "max_results", rename = "maxResults", default)]
    pub max_results: Option<usize>,
}

impl RankCandidatesRequest {
    pub fn ranking_config(&self, defaults: RankingConfig, max_results_cap: usize) -> RankingConfig {
        resolve_ranking_config(self.min_score, self.max_results, defaults, max_results_cap)
    }
}

fn resolve_ranking_config(
    min_score: Option<u8>,
    max_results: Option<usize>,
    defaults: RankingConfig,
    max_results_cap: usize,
) -> RankingConfig {
    RankingConfig {
        min_score: min_score.unwrap_or(defaults.min_score).min(100),
        max_results: max_results.unwrap_or(defaults.max_results).min(max_results_cap),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(body: serde_json::Value) -> FindMatchesRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_defaults_and_cap() {
        let req = request(serde_json::json!({
            "preferences": { "experienceLevel": "beginner" },
            "maxResults": 500,
        }));

        let config = req.ranking_config(RankingConfig { min_score: 20, max_results: 10 }, 50);
        assert_eq!(config, RankingConfig { min_score: 20, max_results: 50 });
    }

    #[test]
    fn test_validation_rejects_out_of_range_score() {
        let req = request(serde_json::json!({
            "preferences": { "experienceLevel": "advanced" },
            "minScore": 101,
        }));
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_criteria_excludes_mentee() {
        let req = request(serde_json::json!({
            "menteeId": "user-7",
            "preferences": { "experienceLevel": "intermediate" },
            "verifiedOnly": true,
            "maxResults": 1,
        }));

        let criteria = req.candidate_criteria(None);
        assert_eq!(criteria.exclude_mentor_ids, vec!["user-7"]);
        assert!(criteria.verified_only);
        assert_eq!(criteria.min_years_experience, None);
        // maxResults never shrinks the fetched pool
        assert_eq!(criteria.limit, None);

        assert_eq!(req.candidate_criteria(Some(2000)).limit, Some(2000));
    }

    #[test]
    fn test_min_years_experience_reaches_criteria() {
        let req = request(serde_json::json!({
            "preferences": { "experienceLevel": "advanced" },
            "minYearsExperience": 8,
        }));
        assert_eq!(req.candidate_criteria(None).min_years_experience, Some(8));

        let req = request(serde_json::json!({
            "preferences": { "experienceLevel": "advanced" },
            "min_years_experience": 3,
        }));
        assert_eq!(req.candidate_criteria(None).min_years_experience, Some(3));
    }
}
