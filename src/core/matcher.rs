use std::cmp::Ordering;
use crate::core::{
    preferences::NormalizedPreferences,
    reasons::match_reasons,
    scoring::calculate_match_score,
};
use crate::models::{MatchSuggestion, MenteePreferences, MentorProfile, RankingConfig, ReasonThresholds, ScoringWeights};

/// Mentor ranking orchestrator
///
/// # Pipeline Stages
/// 1. Normalize the mentee preferences once
/// 2. Score every candidate (sub-scores, weighted total, reasons)
/// 3. Drop suggestions below `min_score`
/// 4. Stable sort: score desc, rating desc, review count desc
/// 5. Truncate to `max_results`
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    thresholds: ReasonThresholds,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, thresholds: ReasonThresholds) -> Self {
        Self { weights, thresholds }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), ReasonThresholds::default())
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a single mentor against already-normalized preferences
    pub fn score(&self, preferences: &NormalizedPreferences, mentor: &MentorProfile) -> MatchSuggestion {
        let (sub_scores, compatibility_score, shared) =
            calculate_match_score(preferences, mentor, &self.weights);

        let match_reasons = match_reasons(
            mentor,
            &sub_scores,
            &shared,
            preferences.experience_level,
            &self.thresholds,
        );

        MatchSuggestion {
            mentor: mentor.clone(),
            compatibility_score,
            expertise_match: sub_scores.expertise,
            availability_match: sub_scores.availability,
            experience_compatibility: sub_scores.experience,
            match_reasons,
        }
    }

    /// Rank candidate mentors for a mentee
    ///
    /// # Arguments
    /// * `preferences` - What the mentee is looking for
    /// * `candidates` - Validated mentor pool, typically from a `MentorDirectory`
    /// * `config` - Minimum score and result cap
    ///
    /// # Returns
    /// Suggestions ordered best first, never longer than `config.max_results`
    pub fn rank_matches(
        &self,
        preferences: &MenteePreferences,
        candidates: &[MentorProfile],
        config: &RankingConfig,
    ) -> Vec<MatchSuggestion> {
        let normalized = NormalizedPreferences::from(preferences);

        let mut suggestions: Vec<MatchSuggestion> = candidates
            .iter()
            .map(|mentor| self.score(&normalized, mentor))
            .filter(|suggestion| suggestion.compatibility_score >= config.min_score)
            .collect();

        // sort_by is stable, so equal keys keep candidate order
        suggestions.sort_by(compare_suggestions);
        suggestions.truncate(config.max_results);

        tracing::debug!(
            "Ranked {} of {} candidates (min_score: {}, max_results: {})",
            suggestions.len(),
            candidates.len(),
            config.min_score,
            config.max_results
        );

        suggestions
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Score desc, then rating desc (unrated last), then review count desc
fn compare_suggestions(a: &MatchSuggestion, b: &MatchSuggestion) -> Ordering {
    b.compatibility_score
        .cmp(&a.compatibility_score)
        .then_with(|| compare_ratings(a.mentor.rating, b.mentor.rating))
        .then_with(|| b.mentor.review_count.cmp(&a.mentor.review_count))
}

/// Higher rating first, unrated last. `total_cmp` keeps this a total order
/// even for NaN ratings on hand-built profiles.
fn compare_ratings(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Rank with the default weights and reason thresholds
pub fn rank_matches(
    preferences: &MenteePreferences,
    candidates: &[MentorProfile],
    config: &RankingConfig,
) -> Vec<MatchSuggestion> {
    Matcher::default().rank_matches(preferences, candidates, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, ExperienceLevel};

    fn create_mentor(id: &str, expertise: &[&str], years: u32, rating: Option<f64>, reviews: u32) -> MentorProfile {
        MentorProfile {
            id: id.to_string(),
            name: Some(format!("Mentor {}", id)),
            expertise: expertise.iter().map(|e| e.to_string()).collect(),
            years_experience: years,
            rating,
            review_count: reviews,
            availability: Availability {
                days: vec!["Mon".to_string()],
                hours: vec!["18:00".to_string()],
                timezone: "UTC".to_string(),
            },
            is_verified: false,
            bio: None,
            accepting_mentees: true,
        }
    }

    fn create_preferences() -> MenteePreferences {
        MenteePreferences {
            desired_expertise: vec!["Rust".to_string(), "Databases".to_string()],
            career_goals: vec![],
            availability: Availability {
                days: vec!["Mon".to_string()],
                hours: vec!["18:00".to_string()],
                timezone: "UTC".to_string(),
            },
            experience_level: ExperienceLevel::Intermediate,
        }
    }

    #[test]
    fn test_rank_matches_orders_by_score() {
        let candidates = vec![
            create_mentor("partial", &["Rust"], 6, None, 0),
            create_mentor("full", &["rust", "databases"], 6, None, 0),
            create_mentor("none", &["Marketing"], 6, None, 0),
        ];

        let result = rank_matches(&create_preferences(), &candidates, &RankingConfig::default());

        let ids: Vec<_> = result.iter().map(|s| s.mentor.id.as_str()).collect();
        assert_eq!(ids, vec!["full", "partial", "none"]);
        assert_eq!(result[0].compatibility_score, 100);
    }

    #[test]
    fn test_tie_break_rating_then_reviews() {
        let candidates = vec![
            create_mentor("unrated", &["Rust"], 6, None, 50),
            create_mentor("few_reviews", &["Rust"], 6, Some(4.5), 2),
            create_mentor("many_reviews", &["Rust"], 6, Some(4.5), 30),
            create_mentor("top", &["Rust"], 6, Some(4.9), 1),
        ];

        let result = rank_matches(&create_preferences(), &candidates, &RankingConfig::default());

        let ids: Vec<_> = result.iter().map(|s| s.mentor.id.as_str()).collect();
        assert_eq!(ids, vec!["top", "many_reviews", "few_reviews", "unrated"]);
    }

    #[test]
    fn test_min_score_and_max_results() {
        let candidates = vec![
            create_mentor("a", &["Rust", "Databases"], 6, None, 0),
            create_mentor("b", &["Rust"], 6, None, 0),
            create_mentor("c", &["Marketing"], 0, None, 0),
        ];

        let config = RankingConfig { min_score: 60, max_results: 10 };
        let result = rank_matches(&create_preferences(), &candidates, &config);
        assert!(result.iter().all(|s| s.compatibility_score >= 60));
        assert_eq!(result.len(), 2);

        let config = RankingConfig { min_score: 0, max_results: 1 };
        let result = rank_matches(&create_preferences(), &candidates, &config);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].mentor.id, "a");
    }

    #[test]
    fn test_nan_ratings_keep_a_total_order() {
        let candidates: Vec<_> = (0..200)
            .map(|i| {
                let rating = match i % 4 {
                    0 => Some(f64::NAN),
                    1 => None,
                    2 => Some(4.0),
                    _ => Some(4.8),
                };
                let expertise: &[&str] = if i % 3 == 0 { &["Rust"] } else { &["Rust", "Databases"] };
                create_mentor(&format!("m{}", i), expertise, 6, rating, i)
            })
            .collect();

        let config = RankingConfig { min_score: 0, max_results: 500 };
        let result = rank_matches(&create_preferences(), &candidates, &config);

        assert_eq!(result.len(), 200);
        assert!(result
            .windows(2)
            .all(|w| w[0].compatibility_score >= w[1].compatibility_score));
        // Within a score band unrated mentors come last
        let top_score = result[0].compatibility_score;
        let band: Vec<_> = result.iter().filter(|s| s.compatibility_score == top_score).collect();
        let first_unrated = band.iter().position(|s| s.mentor.rating.is_none()).unwrap();
        assert!(band[first_unrated..].iter().all(|s| s.mentor.rating.is_none()));
    }

    #[test]
    fn test_compare_ratings_puts_unrated_last() {
        assert_eq!(compare_ratings(Some(4.9), Some(4.0)), Ordering::Less);
        assert_eq!(compare_ratings(Some(1.0), None), Ordering::Less);
        assert_eq!(compare_ratings(None, Some(1.0)), Ordering::Greater);
        assert_eq!(compare_ratings(None, None), Ordering::Equal);
        assert_eq!(compare_ratings(Some(f64::NAN), Some(f64::NAN)), Ordering::Equal);
    }

    #[test]
    fn test_empty_pool_returns_empty() {
        let result = rank_matches(&create_preferences(), &[], &RankingConfig::default());
        assert!(result.is_empty());
    }
}
