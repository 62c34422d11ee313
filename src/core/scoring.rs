use std::collections::HashSet;
use crate::core::preferences::{normalize_label, normalize_set, NormalizedAvailability, NormalizedPreferences};
use crate::models::{Availability, ExperienceLevel, MentorProfile, ScoringWeights, SubScores};

/// Ideal mentor experience for a mentee level, in whole years
///
/// `max_years: None` means the range is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceBucket {
    pub min_years: u32,
    pub max_years: Option<u32>,
}

/// Points lost per year a mentor falls short of the ideal range
pub const SHORTFALL_PENALTY_PER_YEAR: u32 = 15;
/// Points lost per year a mentor exceeds the ideal range
pub const SURPLUS_PENALTY_PER_YEAR: u32 = 5;

/// Mentee level -> ideal mentor-years range
pub const fn ideal_bucket(level: ExperienceLevel) -> ExperienceBucket {
    match level {
        ExperienceLevel::Beginner => ExperienceBucket { min_years: 2, max_years: Some(8) },
        ExperienceLevel::Intermediate => ExperienceBucket { min_years: 5, max_years: Some(12) },
        ExperienceLevel::Advanced => ExperienceBucket { min_years: 10, max_years: None },
    }
}

/// Calculate the full score for one mentor (0-100)
///
/// Scoring formula:
/// score = round(
///     expertise_match * weights.expertise +
///     availability_match * weights.availability +
///     experience_compatibility * weights.experience
/// )
///
/// Also returns the mentor's expertise labels that the mentee asked for,
/// in the mentor's own spelling.
pub fn calculate_match_score(
    preferences: &NormalizedPreferences,
    mentor: &MentorProfile,
    weights: &ScoringWeights,
) -> (SubScores, u8, Vec<String>) {
    let shared_expertise = shared_expertise(&preferences.desired_expertise, &mentor.expertise);

    let sub_scores = SubScores {
        expertise: expertise_match(&preferences.desired_expertise, &mentor.expertise),
        availability: availability_match(&preferences.availability, &mentor.availability),
        experience: experience_compatibility(preferences.experience_level, mentor.years_experience),
    };

    (sub_scores, compatibility_score(&sub_scores, weights), shared_expertise)
}

/// Expertise overlap (0-100)
///
/// floor(100 * |desired ∩ mentor| / |desired|), 0 when nothing is desired.
pub fn expertise_match(desired: &HashSet<String>, mentor_expertise: &[String]) -> u8 {
    if desired.is_empty() {
        return 0;
    }

    let offered = normalize_set(mentor_expertise);
    let overlap = desired.intersection(&offered).count();

    percent_floor(overlap, desired.len())
}

/// Availability overlap (0-100)
///
/// Average of the day and hour overlap ratios, each measured against the
/// mentee's set and treated as 0 when that set is empty. Timezone is ignored.
pub fn availability_match(mentee: &NormalizedAvailability, mentor: &Availability) -> u8 {
    let (day_hits, day_total) = overlap_ratio(&mentee.days, &mentor.days);
    let (hour_hits, hour_total) = overlap_ratio(&mentee.hours, &mentor.hours);

    // floor(100 * (dh/dt + hh/ht) / 2) without leaving integer arithmetic
    let numerator = 100 * (day_hits * hour_total + hour_hits * day_total);
    let denominator = 2 * day_total * hour_total;

    (numerator / denominator).min(100) as u8
}

/// Experience compatibility (0-100)
///
/// 100 anywhere inside the ideal bucket for the mentee's level, then a
/// linear decay with distance from the bucket, floored at 0.
pub fn experience_compatibility(level: ExperienceLevel, years_experience: u32) -> u8 {
    let bucket = ideal_bucket(level);

    let penalty = if years_experience < bucket.min_years {
        (bucket.min_years - years_experience).saturating_mul(SHORTFALL_PENALTY_PER_YEAR)
    } else {
        match bucket.max_years {
            Some(max) if years_experience > max => {
                (years_experience - max).saturating_mul(SURPLUS_PENALTY_PER_YEAR)
            }
            _ => 0,
        }
    };

    100u32.saturating_sub(penalty) as u8
}

/// Weighted combination of the sub-scores, rounded and clamped to 0-100
pub fn compatibility_score(sub_scores: &SubScores, weights: &ScoringWeights) -> u8 {
    let total = sub_scores.expertise as f64 * weights.expertise
        + sub_scores.availability as f64 * weights.availability
        + sub_scores.experience as f64 * weights.experience;

    total.round().clamp(0.0, 100.0) as u8
}

/// Mentor expertise labels that appear in the desired set, deduplicated
pub fn shared_expertise(desired: &HashSet<String>, mentor_expertise: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    mentor_expertise
        .iter()
        .filter(|label| {
            let key = normalize_label(label);
            desired.contains(&key) && seen.insert(key)
        })
        .map(|label| label.trim().to_string())
        .collect()
}

#[inline]
fn percent_floor(hits: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((100 * hits) / total).min(100) as u8
}

/// (hits, total) with an empty mentee set reported as (0, 1)
#[inline]
fn overlap_ratio(mentee: &HashSet<String>, mentor: &[String]) -> (usize, usize) {
    if mentee.is_empty() {
        return (0, 1);
    }
    let offered = normalize_set(mentor);
    (mentee.intersection(&offered).count(), mentee.len())
}
