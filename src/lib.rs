//! Mentor Match - compatibility scoring and ranking for the career portal
//!
//! Given a mentee's preferences and a pool of candidate mentors, this
//! library produces ranked match suggestions with sub-scores and
//! human-readable reasons. The HTTP service in `main.rs` wires it to the
//! hosted backend through the `MentorDirectory` interface.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchError, rank_matches};
pub use crate::models::{MenteePreferences, MentorProfile, MentorRecord, MatchSuggestion, RankingConfig, ScoringWeights};
pub use crate::services::{MentorDirectory, DirectoryError};
