use crate::models::{AttributeRecord, Dealbreaker, DirectoryFilter, ProfileRecord};

/// Check whether a candidate belongs to the viewer themselves
///
/// The viewer's own profile is never a roommate candidate.
#[inline]
pub fn is_own_profile(candidate: &ProfileRecord, owner_id: i64) -> bool {
    candidate.user_id == owner_id
}

/// Check a candidate's answers against the viewer's dealbreakers
///
/// Returns false as soon as any dealbreaker matches one of the candidate's
/// text attributes exactly.
#[inline]
pub fn passes_dealbreakers(candidate: &AttributeRecord, dealbreakers: &[Dealbreaker]) -> bool {
    !dealbreakers.iter().any(|db| db.rules_out(candidate))
}

/// Check a candidate against the browse-page filters
///
/// All set filters must pass: the search text appears in the name or
/// description (ignoring case), the budget is exactly the requested one,
/// and the social style contains the requested text.
#[inline]
pub fn matches_directory_filter(candidate: &ProfileRecord, filter: &DirectoryFilter) -> bool {
    if let Some(search) = &filter.search {
        let needle = search.to_lowercase();
        let in_name = candidate
            .name
            .as_deref()
            .is_some_and(|n| n.to_lowercase().contains(&needle));
        let in_description = candidate
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&needle));

        if !needle.is_empty() && !in_name && !in_description {
            return false;
        }
    }

    if let Some(budget) = filter.budget {
        let candidate_budget = candidate.attributes.get("budget").and_then(|v| v.as_number());
        if candidate_budget != Some(budget) {
            return false;
        }
    }

    if let Some(social) = &filter.social {
        let candidate_social = candidate.attributes.get("social").and_then(|v| v.as_text());
        if !candidate_social.is_some_and(|s| s.contains(social.as_str())) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(user_id: i64) -> ProfileRecord {
        ProfileRecord::new(
            user_id * 10,
            user_id,
            AttributeRecord::new()
                .with("clean", "fair")
                .with("sleep", "Night_Owl")
                .with("budget", 900),
        )
    }

    fn listed(name: &str, description: &str, budget: i64, social: &str) -> ProfileRecord {
        ProfileRecord::new(
            1,
            1,
            AttributeRecord::new().with("budget", budget).with("social", social),
        )
        .with_name(name)
        .with_description(description)
    }

    #[test]
    fn test_own_profile_detected() {
        assert!(is_own_profile(&candidate(1), 1));
        assert!(!is_own_profile(&candidate(2), 1));
    }

    #[test]
    fn test_no_dealbreakers_passes() {
        assert!(passes_dealbreakers(&candidate(1).attributes, &[]));
    }

    #[test]
    fn test_matching_dealbreaker_fails() {
        let dealbreakers = vec![
            Dealbreaker::new("clean", "poor"),
            Dealbreaker::new("sleep", "Night_Owl"),
        ];

        assert!(!passes_dealbreakers(&candidate(1).attributes, &dealbreakers));
    }

    #[test]
    fn test_unrelated_dealbreakers_pass() {
        let dealbreakers = vec![
            Dealbreaker::new("clean", "poor"),
            Dealbreaker::new("social", "Extrovert"),
            Dealbreaker::new("budget", "900"),
        ];

        assert!(passes_dealbreakers(&candidate(1).attributes, &dealbreakers));
    }

    #[test]
    fn test_empty_directory_filter_passes_everyone() {
        let filter = DirectoryFilter::default();
        assert!(filter.is_empty());
        assert!(matches_directory_filter(&candidate(1), &filter));
        assert!(matches_directory_filter(&listed("Bob", "quiet", 800, "Introvert"), &filter));
    }

    #[test]
    fn test_directory_search_name_or_description() {
        let profile = listed("Bob Smith", "Night owl who loves cooking", 800, "Introvert");
        let search = |text: &str| DirectoryFilter {
            search: Some(text.to_string()),
            ..DirectoryFilter::default()
        };

        assert!(matches_directory_filter(&profile, &search("bob")));
        assert!(matches_directory_filter(&profile, &search("COOKING")));
        assert!(matches_directory_filter(&profile, &search("")));
        assert!(!matches_directory_filter(&profile, &search("gardening")));
        // No name or description at all only passes an empty search
        assert!(!matches_directory_filter(&candidate(1), &search("bob")));
    }

    #[test]
    fn test_directory_budget_is_exact() {
        let profile = listed("Bob", "", 800, "Introvert");
        let budget = |b: f64| DirectoryFilter {
            budget: Some(b),
            ..DirectoryFilter::default()
        };

        assert!(matches_directory_filter(&profile, &budget(800.0)));
        assert!(!matches_directory_filter(&profile, &budget(1000.0)));
        assert!(!matches_directory_filter(
            &ProfileRecord::new(2, 2, AttributeRecord::new()),
            &budget(800.0)
        ));
    }

    #[test]
    fn test_directory_social_substring() {
        let profile = listed("Bob", "", 800, "Introvert");
        let social = |s: &str| DirectoryFilter {
            social: Some(s.to_string()),
            ..DirectoryFilter::default()
        };

        assert!(matches_directory_filter(&profile, &social("Introvert")));
        assert!(matches_directory_filter(&profile, &social("vert")));
        assert!(!matches_directory_filter(&profile, &social("introvert")));
        assert!(!matches_directory_filter(&profile, &social("Extrovert")));
    }

    #[test]
    fn test_directory_filters_combine() {
        let profile = listed("Bob", "", 800, "Introvert");
        let filter = DirectoryFilter {
            search: Some("bob".to_string()),
            budget: Some(800.0),
            social: Some("Extrovert".to_string()),
        };

        assert!(!matches_directory_filter(&profile, &filter));
    }
}
