use crate::core::{
    filters::{is_own_profile, matches_directory_filter, passes_dealbreakers},
    scoring::{calculate_compatibility, NUMERIC_TOLERANCE},
};
use crate::models::{AttributeRecord, DirectoryFilter, MatchResult, ProfileRecord, WeightTable};

/// Result of the matching process
#[derive(Debug)]
pub struct RankedMatches {
    pub matches: Vec<MatchResult>,
    pub total_candidates: usize,
}

/// Knobs for the filtering stages of [`Matcher::find_matches`]
#[derive(Debug, Clone)]
pub struct MatchOptions {
    pub exclude_self: bool,
    pub apply_dealbreakers: bool,
    pub directory: DirectoryFilter,
    pub limit: Option<usize>,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            exclude_self: true,
            apply_dealbreakers: true,
            directory: DirectoryFilter::default(),
            limit: None,
        }
    }
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Drop the viewer's own profile
/// 2. Dealbreaker filtering
/// 3. Directory filters (search, budget, social)
/// 4. Compatibility scoring and ranking
/// 5. Optional truncation
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: WeightTable,
    tolerance: f64,
}

impl Matcher {
    pub fn new(weights: WeightTable, tolerance: f64) -> Self {
        Self { weights, tolerance }
    }

    pub fn with_default_weights() -> Self {
        Self::new(WeightTable::default(), NUMERIC_TOLERANCE)
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Compatibility of `candidate` against `reference`, 0-100
    #[inline]
    pub fn score(&self, reference: &AttributeRecord, candidate: &AttributeRecord) -> u8 {
        calculate_compatibility(reference, candidate, &self.weights, self.tolerance)
    }

    /// Score every candidate against `reference`, best first
    ///
    /// Nothing is filtered or truncated. Equal scores keep their input order.
    pub fn rank_candidates(
        &self,
        reference: &AttributeRecord,
        candidates: &[ProfileRecord],
    ) -> Vec<MatchResult> {
        self.rank(reference, candidates.iter())
    }

    /// Find roommate matches for the owner of `reference`
    ///
    /// # Arguments
    /// * `reference` - The viewer's own profile
    /// * `candidates` - Every profile the caller could load
    /// * `options` - Which filtering stages to run and an optional limit
    ///
    /// # Returns
    /// RankedMatches with the surviving candidates, best first
    pub fn find_matches(
        &self,
        reference: &ProfileRecord,
        candidates: &[ProfileRecord],
        options: &MatchOptions,
    ) -> RankedMatches {
        let total_candidates = candidates.len();

        let survivors: Vec<&ProfileRecord> = candidates
            .iter()
            // Stage 1: the viewer is not their own roommate
            .filter(|c| !(options.exclude_self && is_own_profile(c, reference.user_id)))
            // Stage 2: dealbreakers
            .filter(|c| {
                !options.apply_dealbreakers
                    || passes_dealbreakers(&c.attributes, &reference.dealbreakers)
            })
            // Stage 3: directory filters
            .filter(|c| matches_directory_filter(c, &options.directory))
            .collect();

        tracing::debug!(
            "Matching user {}: {} of {} candidates survived filtering",
            reference.user_id,
            survivors.len(),
            total_candidates
        );

        // Stage 4: score and rank
        let mut matches = self.rank(&reference.attributes, survivors);

        // Stage 5: limit
        if let Some(limit) = options.limit {
            matches.truncate(limit);
        }

        RankedMatches {
            matches,
            total_candidates,
        }
    }

    fn rank<'a, I>(&self, reference: &AttributeRecord, candidates: I) -> Vec<MatchResult>
    where
        I: IntoIterator<Item = &'a ProfileRecord>,
    {
        let mut results: Vec<MatchResult> = candidates
            .into_iter()
            .map(|candidate| MatchResult {
                candidate_id: candidate.id,
                owner_id: candidate.user_id,
                display_name: candidate.name.clone(),
                score: self.score(reference, &candidate.attributes),
            })
            .collect();

        // Stable: ties stay in input order
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
