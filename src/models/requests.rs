use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::DirectoryFilter;

/// Request to rank roommate candidates for one user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(range(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: i64,
    /// No limit means every surviving candidate is returned
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default = "default_true", rename = "applyDealbreakers")]
    pub apply_dealbreakers: bool,
    #[serde(default)]
    pub filter: DirectoryFilter,
}

fn default_true() -> bool {
    true
}

impl FindMatchesRequest {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            limit: None,
            apply_dealbreakers: true,
            filter: DirectoryFilter::default(),
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
