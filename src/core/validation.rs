use thiserror::Error;
use validator::Validate;
use crate::models::{MentorProfile, MentorRecord};

/// Errors raised by the matching core
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MatchError {
    #[error("invalid candidate {id}: {reason}")]
    InvalidCandidate { id: String, reason: String },
}

fn invalid(id: &str, reason: impl Into<String>) -> MatchError {
    MatchError::InvalidCandidate {
        id: id.to_string(),
        reason: reason.into(),
    }
}

impl TryFrom<MentorRecord> for MentorProfile {
    type Error = MatchError;

    /// Required: id, expertise, years_experience, availability.
    /// `review_count` defaults to 0 and `is_verified` to false.
    fn try_from(record: MentorRecord) -> Result<Self, Self::Error> {
        let id = record
            .id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| invalid("<unknown>", "missing id"))?
            .to_string();

        if let Err(errors) = record.validate() {
            return Err(invalid(&id, errors.to_string()));
        }

        if let Some(rating) = record.rating {
            if !rating.is_finite() {
                return Err(invalid(&id, "rating must be a finite number"));
            }
        }

        let expertise = record
            .expertise
            .ok_or_else(|| invalid(&id, "missing expertise"))?;

        let years_experience = record
            .years_experience
            .ok_or_else(|| invalid(&id, "missing years_experience"))?;
        let years_experience = u32::try_from(years_experience)
            .map_err(|_| invalid(&id, format!("years_experience out of range: {}", years_experience)))?;

        let review_count = u32::try_from(record.review_count.unwrap_or(0))
            .map_err(|_| invalid(&id, "review_count out of range"))?;

        let availability = record
            .availability
            .ok_or_else(|| invalid(&id, "missing availability"))?;

        Ok(MentorProfile {
            id,
            name: record.name,
            expertise,
            years_experience,
            rating: record.rating,
            review_count,
            availability,
            is_verified: record.is_verified.unwrap_or(false),
            bio: record.bio,
            accepting_mentees: record.accepting_mentees.unwrap_or(true),
        })
    }
}

/// Validate every record, failing on the first malformed one
pub fn validate_candidates(records: Vec<MentorRecord>) -> Result<Vec<MentorProfile>, MatchError> {
    records.into_iter().map(MentorProfile::try_from).collect()
}

/// Keep the well-formed records, logging and dropping the rest
pub fn accept_valid_candidates(records: Vec<MentorRecord>) -> Vec<MentorProfile> {
    records
        .into_iter()
        .filter_map(|record| match MentorProfile::try_from(record) {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!("Rejecting mentor record: {}", e);
                None
            }
        })
        .collect()
}
