//! Roommate Match - compatibility scoring for student housing
//!
//! Scores roommate profiles against each other with a weighted attribute
//! similarity and ranks candidates for a viewer, best match first.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_compatibility, MatchOptions, Matcher, RankedMatches};
pub use models::{
    AttributeRecord, AttributeValue, Dealbreaker, DirectoryFilter, FindMatchesRequest,
    FindMatchesResponse, MatchResult, ProfileRecord, WeightTable,
};
