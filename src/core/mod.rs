// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use filters::{is_own_profile, matches_directory_filter, passes_dealbreakers};
pub use matcher::{MatchOptions, Matcher, RankedMatches};
pub use scoring::{calculate_compatibility, values_match, NUMERIC_TOLERANCE};
