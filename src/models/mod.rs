// Model exports
pub mod domain;
pub mod records;
pub mod requests;
pub mod responses;

pub use domain::{
    Availability, CandidateCriteria, ExperienceLevel, MatchSuggestion, MenteePreferences, MentorProfile,
    RankingConfig, ReasonThresholds, ScoringWeights, SubScores, WeightsError,
};
pub use records::MentorRecord;
pub use requests::{FindMatchesRequest, RankCandidatesRequest};
pub use responses::{CacheStats, ErrorResponse, FindMatchesResponse, HealthResponse};
