use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;
use crate::core::{validate_candidates, Matcher};
use crate::models::{ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse, RankCandidatesRequest, RankingConfig};
use crate::services::{fetch_or_empty, MentorDirectory};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn MentorDirectory>,
    pub matcher: Matcher,
    pub ranking_defaults: RankingConfig,
    pub max_results_cap: usize,
    /// Upper bound on mentors fetched per request; `None` fetches the whole pool
    pub candidate_pool_limit: Option<usize>,
}

/// Configure all mentor-matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/mentors/matches", web::post().to(find_matches))
        .route("/mentors/matches/rank", web::post().to(rank_candidates));
}

/// Health check endpoint, with candidate cache counters when caching is on
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        cache: state.directory.cache_stats(),
    })
}

fn validation_failed(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message,
        status_code: 400,
    })
}

/// Find mentor matches endpoint
///
/// POST /api/v1/mentors/matches
///
/// Request body:
/// ```json
/// {
///   "menteeId": "string",
///   "preferences": {
///     "desiredExpertise": ["Data Science"],
///     "careerGoals": ["Move into ML engineering"],
///     "availability": { "days": ["Mon"], "hours": ["18:00"], "timezone": "UTC" },
///     "experienceLevel": "intermediate"
///   },
///   "minScore": 50,
///   "maxResults": 10,
///   "verifiedOnly": false,
///   "minRating": 4.0,
///   "minYearsExperience": 3
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {}", errors);
        return validation_failed(errors.to_string());
    }

    let request_id = uuid::Uuid::new_v4();
    let config = req.ranking_config(state.ranking_defaults, state.max_results_cap);
    let criteria = req.candidate_criteria(state.candidate_pool_limit);

    tracing::info!(
        "Finding mentor matches: request_id={}, mentee={:?}, min_score={}, max_results={}",
        request_id,
        req.mentee_id,
        config.min_score,
        config.max_results
    );

    // The fetch must finish before scoring starts; failures mean an empty pool
    let candidates = fetch_or_empty(state.directory.as_ref(), &criteria).await;

    let matches = state.matcher.rank_matches(&req.preferences, &candidates, &config);

    tracing::info!(
        "Returning {} matches for request {} (from {} candidates)",
        matches.len(),
        request_id,
        candidates.len()
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        request_id,
        matches,
        total_candidates: candidates.len(),
        generated_at: chrono::Utc::now(),
    })
}

/// Rank inline candidates endpoint
///
/// POST /api/v1/mentors/matches/rank
///
/// Scores the supplied mentor records without touching the directory. A
/// single malformed record rejects the whole request with 422.
async fn rank_candidates(
    state: web::Data<AppState>,
    req: web::Json<RankCandidatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors.to_string());
    }

    let req = req.into_inner();
    let config = req.ranking_config(state.ranking_defaults, state.max_results_cap);

    let candidates = match validate_candidates(req.candidates) {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::info!("Rejected rank request: {}", e);
            return HttpResponse::UnprocessableEntity().json(ErrorResponse {
                error: "Invalid candidate".to_string(),
                message: e.to_string(),
                status_code: 422,
            });
        }
    };

    let matches = state.matcher.rank_matches(&req.preferences, &candidates, &config);

    HttpResponse::Ok().json(FindMatchesResponse {
        request_id: uuid::Uuid::new_v4(),
        matches,
        total_candidates: candidates.len(),
        generated_at: chrono::Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
            cache: None,
        };

        assert_eq!(response.status, "healthy");
        let body = serde_json::to_value(&response).unwrap();
        assert!(body.get("cache").is_none());
    }

    #[test]
    fn test_validation_failed_status() {
        let response = validation_failed("bad".to_string());
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
