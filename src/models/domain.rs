use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Self-reported experience level of a mentee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weekly availability window
///
/// `timezone` is carried for display only and never affects scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    #[serde(default)]
    pub days: Vec<String>,
    #[serde(default)]
    pub hours: Vec<String>,
    #[serde(default)]
    pub timezone: String,
}

/// What a mentee is looking for in a mentor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenteePreferences {
    #[serde(rename = "desiredExpertise", alias = "desired_expertise", default)]
    pub desired_expertise: Vec<String>,
    #[serde(rename = "careerGoals", alias = "career_goals", default)]
    pub career_goals: Vec<String>,
    #[serde(default)]
    pub availability: Availability,
    #[serde(rename = "experienceLevel", alias = "experience_level")]
    pub experience_level: ExperienceLevel,
}

/// Validated mentor profile, read-only to the matching core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorProfile {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub expertise: Vec<String>,
    #[serde(rename = "yearsExperience")]
    pub years_experience: u32,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(rename = "reviewCount", default)]
    pub review_count: u32,
    pub availability: Availability,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "acceptingMentees", default = "default_true")]
    pub accepting_mentees: bool,
}

fn default_true() -> bool { true }

/// A scored pairing of the requesting mentee with one mentor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSuggestion {
    pub mentor: MentorProfile,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: u8,
    #[serde(rename = "expertiseMatch")]
    pub expertise_match: u8,
    #[serde(rename = "availabilityMatch")]
    pub availability_match: u8,
    #[serde(rename = "experienceCompatibility")]
    pub experience_compatibility: u8,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
}

/// The three sub-scores computed for one mentor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubScores {
    pub expertise: u8,
    pub availability: u8,
    pub experience: u8,
}

/// Errors raised when scoring weights are unusable
#[derive(Debug, Error, PartialEq)]
pub enum WeightsError {
    #[error("weight '{0}' must be a finite, non-negative number")]
    Negative(&'static str),

    #[error("weights must sum to 1.0, got {0}")]
    BadSum(f64),
}

/// Scoring weights
///
/// Defaults are a product decision: expertise 0.5, availability 0.3,
/// experience 0.2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub expertise: f64,
    pub availability: f64,
    pub experience: f64,
}

impl ScoringWeights {
    const SUM_TOLERANCE: f64 = 1e-6;

    pub fn sum(&self) -> f64 {
        self.expertise + self.availability + self.experience
    }

    pub fn validate(&self) -> Result<(), WeightsError> {
        for (name, value) in [
            ("expertise", self.expertise),
            ("availability", self.availability),
            ("experience", self.experience),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(WeightsError::Negative(name));
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(WeightsError::BadSum(sum));
        }

        Ok(())
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            expertise: 0.5,
            availability: 0.3,
            experience: 0.2,
        }
    }
}

/// Thresholds that decide which match reasons are disclosed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReasonThresholds {
    /// Minimum sub-score that earns a reason sentence
    pub disclosure: u8,
    pub high_rating: f64,
    pub min_reviews_for_rating: u32,
}

impl Default for ReasonThresholds {
    fn default() -> Self {
        Self {
            disclosure: 70,
            high_rating: 4.5,
            min_reviews_for_rating: 3,
        }
    }
}

/// Cutoffs applied after scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingConfig {
    #[serde(rename = "minScore")]
    pub min_score: u8,
    #[serde(rename = "maxResults")]
    pub max_results: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            min_score: 0,
            max_results: 10,
        }
    }
}

/// Filters the mentor directory applies before candidates reach scoring
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateCriteria {
    pub verified_only: bool,
    pub min_rating: Option<f64>,
    pub min_years_experience: Option<u32>,
    pub exclude_mentor_ids: Vec<String>,
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_are_valid() {
        let weights = ScoringWeights::default();
        assert!(weights.validate().is_ok());
        assert!((weights.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let weights = ScoringWeights {
            expertise: 0.5,
            availability: 0.5,
            experience: 0.5,
        };
        assert_eq!(weights.validate(), Err(WeightsError::BadSum(1.5)));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let weights = ScoringWeights {
            expertise: 1.2,
            availability: -0.2,
            experience: 0.0,
        };
        assert_eq!(weights.validate(), Err(WeightsError::Negative("availability")));
    }

    #[test]
    fn test_experience_level_wire_format() {
        let level: ExperienceLevel = serde_json::from_str("\"intermediate\"").unwrap();
        assert_eq!(level, ExperienceLevel::Intermediate);
        assert_eq!(serde_json::to_string(&ExperienceLevel::Advanced).unwrap(), "\"advanced\"");
    }
}
