use crate::models::{CandidateCriteria, MentorProfile};

/// Check if a mentor satisfies the directory-level candidate criteria
///
/// Backends that can filter server-side apply the same rules in their
/// query; in-memory pools call this directly.
#[inline]
pub fn matches_criteria(mentor: &MentorProfile, criteria: &CandidateCriteria) -> bool {
    if !mentor.accepting_mentees {
        return false;
    }

    if criteria.exclude_mentor_ids.contains(&mentor.id) {
        return false;
    }

    if criteria.verified_only && !mentor.is_verified {
        return false;
    }

    // Unrated mentors never pass an explicit rating floor
    if let Some(min_rating) = criteria.min_rating {
        match mentor.rating {
            Some(rating) if rating >= min_rating => {}
            _ => return false,
        }
    }

    if let Some(min_years) = criteria.min_years_experience {
        if mentor.years_experience < min_years {
            return false;
        }
    }

    true
}

/// Apply the criteria to a pool, honoring the optional limit
pub fn filter_candidates(pool: &[MentorProfile], criteria: &CandidateCriteria) -> Vec<MentorProfile> {
    pool.iter()
        .filter(|mentor| matches_criteria(mentor, criteria))
        .take(criteria.limit.unwrap_or(usize::MAX))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Availability;

    fn mentor(id: &str, years: u32, rating: Option<f64>, is_verified: bool) -> MentorProfile {
        MentorProfile {
            id: id.to_string(),
            name: None,
            expertise: vec!["Rust".to_string()],
            years_experience: years,
            rating,
            review_count: 3,
            availability: Availability::default(),
            is_verified,
            bio: None,
            accepting_mentees: true,
        }
    }

    #[test]
    fn test_default_criteria_accepts_everyone_accepting_mentees() {
        let criteria = CandidateCriteria::default();
        assert!(matches_criteria(&mentor("a", 1, None, false), &criteria));

        let mut closed = mentor("b", 1, None, false);
        closed.accepting_mentees = false;
        assert!(!matches_criteria(&closed, &criteria));
    }

    #[test]
    fn test_excluded_ids_filtered() {
        let criteria = CandidateCriteria {
            exclude_mentor_ids: vec!["self".to_string()],
            ..Default::default()
        };
        assert!(!matches_criteria(&mentor("self", 5, None, true), &criteria));
    }

    #[test]
    fn test_verified_and_rating_floor() {
        let criteria = CandidateCriteria {
            verified_only: true,
            min_rating: Some(4.0),
            ..Default::default()
        };
        assert!(matches_criteria(&mentor("a", 5, Some(4.2), true), &criteria));
        assert!(!matches_criteria(&mentor("b", 5, Some(4.2), false), &criteria));
        assert!(!matches_criteria(&mentor("c", 5, Some(3.9), true), &criteria));
        assert!(!matches_criteria(&mentor("d", 5, None, true), &criteria));
    }

    #[test]
    fn test_min_years_and_limit() {
        let pool = vec![
            mentor("a", 2, None, false),
            mentor("b", 8, None, false),
            mentor("c", 10, None, false),
            mentor("d", 12, None, false),
        ];
        let criteria = CandidateCriteria {
            min_years_experience: Some(5),
            limit: Some(2),
            ..Default::default()
        };
        let ids: Vec<_> = filter_candidates(&pool, &criteria).into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }
}
