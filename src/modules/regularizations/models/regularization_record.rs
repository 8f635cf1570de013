use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::regularizations::models::RegularizationResult;

/// Natural key of a regularization: one per lease and calendar year
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegularizationKey {
    pub lease_id: String,
    pub target_year: i32,
}

impl RegularizationKey {
    pub fn new(lease_id: impl Into<String>, target_year: i32) -> Self {
        Self {
            lease_id: lease_id.into(),
            target_year,
        }
    }
}

impl std::fmt::Display for RegularizationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.lease_id, self.target_year)
    }
}

/// Persisted regularization row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegularizationRecord {
    pub id: String,
    pub lease_id: String,
    pub target_year: i32,
    /// None until a calculation has been applied
    pub result: Option<RegularizationResult>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl RegularizationRecord {
    /// Create an empty, unsaved record with a fresh identity
    pub fn new(lease_id: impl Into<String>, target_year: i32) -> Self {
        let now = chrono::Utc::now().naive_utc();

        Self {
            id: Uuid::new_v4().to_string(),
            lease_id: lease_id.into(),
            target_year,
            result: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn key(&self) -> RegularizationKey {
        RegularizationKey::new(self.lease_id.clone(), self.target_year)
    }

    /// Replace the calculated fields in place, keeping the identity
    pub fn apply(&mut self, result: RegularizationResult) {
        self.result = Some(result);
        self.updated_at = chrono::Utc::now().naive_utc();
    }

    pub fn is_calculated(&self) -> bool {
        self.result.is_some()
    }
}
