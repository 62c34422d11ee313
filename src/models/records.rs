use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::Availability;

/// Mentor row as it arrives from the hosted backend or an HTTP caller
///
/// Every field is optional here; `MentorProfile::try_from` decides which
/// ones are required. Backend rows use snake_case column names, HTTP
/// callers may send camelCase.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MentorRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, alias = "full_name")]
    pub name: Option<String>,
    #[serde(default)]
    pub expertise: Option<Vec<String>>,
    #[serde(default, alias = "yearsExperience")]
    #[validate(range(min = 0))]
    pub years_experience: Option<i64>,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,
    #[serde(default, alias = "reviewCount")]
    #[validate(range(min = 0))]
    pub review_count: Option<i64>,
    #[serde(default)]
    pub availability: Option<Availability>,
    #[serde(default, alias = "isVerified")]
    pub is_verified: Option<bool>,
    #[serde(default)]
    #[validate(length(max = 5000))]
    pub bio: Option<String>,
    #[serde(default, alias = "acceptingMentees")]
    pub accepting_mentees: Option<bool>,
}
