use serde::{Deserialize, Serialize};
use crate::models::domain::MatchResult;

/// Ranked candidates for one user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindMatchesResponse {
    pub user_id: i64,
    pub matches: Vec<MatchResult>,
    pub total_candidates: usize,
}
