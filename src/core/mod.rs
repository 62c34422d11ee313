// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod preferences;
pub mod reasons;
pub mod scoring;
pub mod validation;

pub use filters::{matches_criteria, filter_candidates};
pub use matcher::{Matcher, rank_matches};
pub use preferences::{NormalizedPreferences, NormalizedAvailability};
pub use scoring::{availability_match, calculate_match_score, compatibility_score, experience_compatibility, expertise_match};
pub use validation::{MatchError, validate_candidates, accept_valid_candidates};
