//! Name validation and comparison policy
//!
//! Uniqueness is checked with a configurable comparison. The default is a
//! case-sensitive exact match.

use crate::constants::TENANT_NAME_MAX_LENGTH;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// How two entity names are compared for uniqueness
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameComparison {
    /// Exact, case-sensitive match
    #[default]
    CaseSensitive,
    /// Unicode lowercase comparison
    CaseInsensitive,
}

impl NameComparison {
    /// Check whether two names denote the same entity
    pub fn matches(self, a: &str, b: &str) -> bool {
        match self {
            Self::CaseSensitive => a == b,
            Self::CaseInsensitive => a == b || a.to_lowercase() == b.to_lowercase(),
        }
    }
}

/// Validation rules applied to tenant names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantNamePolicy {
    /// Comparison used by uniqueness checks
    pub comparison: NameComparison,
    /// Maximum name length in characters
    pub max_length: usize,
}

impl TenantNamePolicy {
    /// Create a policy with the given comparison and the default length limit
    pub fn new(comparison: NameComparison) -> Self {
        Self {
            comparison,
            max_length: TENANT_NAME_MAX_LENGTH,
        }
    }

    /// Set the maximum name length
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Validate a candidate name
    ///
    /// Rejects empty or whitespace-only names and names over the length limit.
    pub fn validate(&self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::validation("name", "name cannot be empty"));
        }
        let length = name.chars().count();
        if length > self.max_length {
            return Err(Error::validation(
                "name",
                format!(
                    "name is {length} characters long, the maximum is {}",
                    self.max_length
                ),
            ));
        }
        Ok(())
    }
}

impl Default for TenantNamePolicy {
    fn default() -> Self {
        Self::new(NameComparison::default())
    }
}
