use crate::models::ProfileRecord;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading profiles
#[derive(Debug, Error)]
pub enum ProfileStoreError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid profile data: {0}")]
    InvalidData(#[from] serde_json::Error),

    #[error("Profile not found for user {0}")]
    NotFound(i64),
}

/// Read-only set of roommate profiles loaded from a JSON array
///
/// Stands in for the database that owns profiles: the matcher only ever
/// needs "my profile" and "everyone else".
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    profiles: Vec<ProfileRecord>,
}

impl ProfileStore {
    pub fn new(profiles: Vec<ProfileRecord>) -> Self {
        Self { profiles }
    }

    /// Load profiles from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ProfileStoreError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ProfileStoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_json(&raw)?;
        tracing::info!("Loaded {} profiles from {}", store.len(), path.display());
        Ok(store)
    }

    pub fn from_json(raw: &str) -> Result<Self, ProfileStoreError> {
        let profiles: Vec<ProfileRecord> = serde_json::from_str(raw)?;
        Ok(Self::new(profiles))
    }

    /// Fetch the profile owned by `user_id`
    pub fn get_by_owner(&self, user_id: i64) -> Result<&ProfileRecord, ProfileStoreError> {
        self.profiles
            .iter()
            .find(|p| p.user_id == user_id)
            .ok_or(ProfileStoreError::NotFound(user_id))
    }

    /// Every profile not owned by `user_id`, in stored order
    pub fn others(&self, user_id: i64) -> Vec<ProfileRecord> {
        self.profiles
            .iter()
            .filter(|p| p.user_id != user_id)
            .cloned()
            .collect()
    }

    pub fn all(&self) -> &[ProfileRecord] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
