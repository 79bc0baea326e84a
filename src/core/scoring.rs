use crate::models::{AttributeRecord, AttributeValue, WeightTable};

/// Numbers this close count as the same answer (budget in dollars)
pub const NUMERIC_TOLERANCE: f64 = 200.0;

/// Compatibility score (0-100) of `candidate` against `reference`
///
/// Only keys present on `reference` are considered, and a key is skipped
/// entirely when the candidate does not have it. Each remaining key adds its
/// weight to the total and, when the answers agree, to the matched weight.
///
/// score = round(matched_weight / total_weight * 100), or 0 when nothing
/// could be compared.
pub fn calculate_compatibility(
    reference: &AttributeRecord,
    candidate: &AttributeRecord,
    weights: &WeightTable,
    tolerance: f64,
) -> u8 {
    let mut total_weight: u32 = 0;
    let mut matched_weight: u32 = 0;

    for (key, ours) in reference.iter() {
        let Some(theirs) = candidate.get(key) else {
            continue;
        };

        let weight = weights.weight(key);
        total_weight += weight;

        if values_match(ours, theirs, tolerance) {
            matched_weight += weight;
        }
    }

    if total_weight == 0 {
        return 0;
    }

    let ratio = f64::from(matched_weight) / f64::from(total_weight);
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Numbers match within `tolerance` (inclusive), everything else must be equal
#[inline]
pub fn values_match(a: &AttributeValue, b: &AttributeValue, tolerance: f64) -> bool {
    match (a, b) {
        (AttributeValue::Number(x), AttributeValue::Number(y)) => (x - y).abs() <= tolerance,
        _ => a == b,
    }
}
