// Unit tests for Roommate Match

use roommate_match::core::{
    filters::passes_dealbreakers,
    scoring::{calculate_compatibility, values_match, NUMERIC_TOLERANCE},
};
use roommate_match::models::{AttributeRecord, AttributeValue, Dealbreaker, WeightTable};

fn score(reference: &AttributeRecord, candidate: &AttributeRecord) -> u8 {
    calculate_compatibility(reference, candidate, &WeightTable::default(), NUMERIC_TOLERANCE)
}

#[test]
fn test_empty_reference_law() {
    let candidates = [
        AttributeRecord::new(),
        AttributeRecord::new().with("clean", "good"),
        AttributeRecord::new().with("budget", 500).with("pets", None::<&str>),
    ];

    for candidate in &candidates {
        assert_eq!(score(&AttributeRecord::new(), candidate), 0);
    }
}

#[test]
fn test_self_similarity() {
    let record = AttributeRecord::new()
        .with("clean", "fair")
        .with("budget", 1350)
        .with("social", "Ambivert")
        .with("locationPreference", "Near Campus");

    assert_eq!(score(&record, &record), 100);
}

#[test]
fn test_budget_tolerance_is_inclusive() {
    let reference = AttributeRecord::new().with("budget", 1000);

    assert_eq!(score(&reference, &AttributeRecord::new().with("budget", 1200)), 100);
    assert_eq!(score(&reference, &AttributeRecord::new().with("budget", 1201)), 0);
}

#[test]
fn test_fractional_budgets() {
    let reference = AttributeRecord::new().with("budget", 1000.0);

    assert_eq!(score(&reference, &AttributeRecord::new().with("budget", 1199.99)), 100);
    assert_eq!(score(&reference, &AttributeRecord::new().with("budget", 1200.01)), 0);
}

#[test]
fn test_weighting_example() {
    let reference = AttributeRecord::new().with("clean", "a").with("extra", "x");
    let candidate = AttributeRecord::new().with("clean", "a").with("extra", "y");

    assert_eq!(score(&reference, &candidate), 67);
}

#[test]
fn test_reference_keys_drive_scoring() {
    // The candidate's extra answers never count
    let reference = AttributeRecord::new().with("clean", "good");
    let candidate = AttributeRecord::new()
        .with("clean", "good")
        .with("sleep", "Night_Owl")
        .with("budget", 4000);

    assert_eq!(score(&reference, &candidate), 100);

    // A reference key the candidate lacks is skipped, not penalised
    let reference = AttributeRecord::new().with("clean", "good").with("sleep", "Early_Bird");
    let candidate = AttributeRecord::new().with("clean", "good");
    assert_eq!(score(&reference, &candidate), 100);
}

#[test]
fn test_values_match() {
    let tol = NUMERIC_TOLERANCE;

    assert!(values_match(&AttributeValue::from(10), &AttributeValue::from(-190), tol));
    assert!(!values_match(&AttributeValue::from(10), &AttributeValue::from(-191), tol));
    assert!(values_match(&AttributeValue::from("x"), &AttributeValue::from("x"), tol));
    assert!(values_match(&AttributeValue::Null, &AttributeValue::Null, tol));
    assert!(!values_match(&AttributeValue::Null, &AttributeValue::from("x"), tol));
    assert!(!values_match(&AttributeValue::from(5), &AttributeValue::from("5"), tol));
}

#[test]
fn test_dealbreakers_from_strings() {
    let dealbreakers: Vec<Dealbreaker> = ["clean:poor", "study:None"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();

    let messy = AttributeRecord::new().with("clean", "poor");
    let tidy = AttributeRecord::new().with("clean", "excellent").with("study", "Regular");

    assert!(!passes_dealbreakers(&messy, &dealbreakers));
    assert!(passes_dealbreakers(&tidy, &dealbreakers));
}
