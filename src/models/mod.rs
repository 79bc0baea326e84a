// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AttributeRecord, AttributeValue, Dealbreaker, DealbreakerParseError, DirectoryFilter, MatchResult,
    ProfileRecord, WeightTable, DEFAULT_WEIGHT, PRIMARY_ATTRIBUTES, PRIMARY_WEIGHT,
};
pub use requests::FindMatchesRequest;
pub use responses::FindMatchesResponse;
