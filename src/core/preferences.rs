use std::collections::HashSet;
use crate::models::{ExperienceLevel, MenteePreferences};

/// Trim and lower-case a free-text label so comparisons are case-insensitive
#[inline]
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Build a normalized set, dropping labels that are blank after trimming
pub fn normalize_set<'a, I>(labels: I) -> HashSet<String>
where
    I: IntoIterator<Item = &'a String>,
{
    labels
        .into_iter()
        .map(|label| normalize_label(label))
        .filter(|label| !label.is_empty())
        .collect()
}

/// Mentee availability reduced to comparable sets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedAvailability {
    pub days: HashSet<String>,
    pub hours: HashSet<String>,
}

/// Mentee preferences in the shape the sub-score calculators compare against
///
/// Built once per matching request and reused for every candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPreferences {
    pub desired_expertise: HashSet<String>,
    pub career_goals: HashSet<String>,
    pub availability: NormalizedAvailability,
    pub experience_level: ExperienceLevel,
}

impl From<&MenteePreferences> for NormalizedPreferences {
    fn from(preferences: &MenteePreferences) -> Self {
        Self {
            desired_expertise: normalize_set(&preferences.desired_expertise),
            career_goals: normalize_set(&preferences.career_goals),
            availability: NormalizedAvailability {
                days: normalize_set(&preferences.availability.days),
                hours: normalize_set(&preferences.availability.hours),
            },
            experience_level: preferences.experience_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Availability;

    #[test]
    fn test_normalization_is_case_insensitive_and_dedups() {
        let preferences = MenteePreferences {
            desired_expertise: vec![
                "Data Science".to_string(),
                " data science ".to_string(),
                "".to_string(),
            ],
            career_goals: vec!["Lead a team".to_string()],
            availability: Availability {
                days: vec!["MON".to_string(), "mon".to_string()],
                hours: vec!["18:00".to_string()],
                timezone: "Europe/Berlin".to_string(),
            },
            experience_level: ExperienceLevel::Beginner,
        };

        let normalized = NormalizedPreferences::from(&preferences);

        assert_eq!(normalized.desired_expertise.len(), 1);
        assert!(normalized.desired_expertise.contains("data science"));
        assert_eq!(normalized.availability.days.len(), 1);
        assert!(normalized.career_goals.contains("lead a team"));
    }
}
