use crate::models::{ExperienceLevel, MentorProfile, ReasonThresholds, SubScores};

/// Build the human-readable justifications for a match
///
/// Order is fixed: expertise, availability, experience, then verification
/// and rating flags.
pub fn match_reasons(
    mentor: &MentorProfile,
    sub_scores: &SubScores,
    shared_expertise: &[String],
    level: ExperienceLevel,
    thresholds: &ReasonThresholds,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if sub_scores.expertise >= thresholds.disclosure && !shared_expertise.is_empty() {
        reasons.push(format!("Expertise in {}", shared_expertise.join(", ")));
    }

    if sub_scores.availability >= thresholds.disclosure {
        if sub_scores.availability == 100 {
            reasons.push("Available on all of your preferred days and hours".to_string());
        } else {
            reasons.push("Schedule overlaps most of your availability".to_string());
        }
    }

    if sub_scores.experience >= thresholds.disclosure {
        reasons.push(format!(
            "{} {} of experience suits {} {} mentee",
            mentor.years_experience,
            if mentor.years_experience == 1 { "year" } else { "years" },
            article(level),
            level
        ));
    }

    if mentor.is_verified {
        reasons.push("Verified mentor".to_string());
    }

    if let Some(rating) = mentor.rating {
        if rating >= thresholds.high_rating && mentor.review_count >= thresholds.min_reviews_for_rating {
            reasons.push(format!(
                "Highly rated ({:.1}/5 from {} reviews)",
                rating, mentor.review_count
            ));
        }
    }

    reasons
}

fn article(level: ExperienceLevel) -> &'static str {
    match level {
        ExperienceLevel::Beginner => "a",
        ExperienceLevel::Intermediate | ExperienceLevel::Advanced => "an",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Availability;

    fn mentor(is_verified: bool, rating: Option<f64>, review_count: u32) -> MentorProfile {
        MentorProfile {
            id: "m-1".to_string(),
            name: None,
            expertise: vec!["Data Science".to_string()],
            years_experience: 6,
            rating,
            review_count,
            availability: Availability::default(),
            is_verified,
            bio: None,
            accepting_mentees: true,
        }
    }

    #[test]
    fn test_reasons_follow_priority_order() {
        let scores = SubScores { expertise: 100, availability: 100, experience: 100 };
        let reasons = match_reasons(
            &mentor(true, Some(4.9), 20),
            &scores,
            &["Data Science".to_string()],
            ExperienceLevel::Intermediate,
            &ReasonThresholds::default(),
        );

        assert_eq!(
            reasons,
            vec![
                "Expertise in Data Science".to_string(),
                "Available on all of your preferred days and hours".to_string(),
                "6 years of experience suits an intermediate mentee".to_string(),
                "Verified mentor".to_string(),
                "Highly rated (4.9/5 from 20 reviews)".to_string(),
            ]
        );
    }

    #[test]
    fn test_below_threshold_scores_are_not_disclosed() {
        let scores = SubScores { expertise: 69, availability: 50, experience: 10 };
        let reasons = match_reasons(
            &mentor(false, None, 0),
            &scores,
            &["Data Science".to_string()],
            ExperienceLevel::Beginner,
            &ReasonThresholds::default(),
        );
        assert!(reasons.is_empty());
    }

    #[test]
    fn test_partial_availability_wording() {
        let scores = SubScores { expertise: 0, availability: 75, experience: 0 };
        let reasons = match_reasons(
            &mentor(false, None, 0),
            &scores,
            &[],
            ExperienceLevel::Beginner,
            &ReasonThresholds::default(),
        );
        assert_eq!(reasons, vec!["Schedule overlaps most of your availability".to_string()]);
    }

    #[test]
    fn test_rating_needs_enough_reviews() {
        let scores = SubScores { expertise: 0, availability: 0, experience: 0 };
        let reasons = match_reasons(
            &mentor(false, Some(5.0), 2),
            &scores,
            &[],
            ExperienceLevel::Advanced,
            &ReasonThresholds::default(),
        );
        assert!(reasons.is_empty());
    }
}
