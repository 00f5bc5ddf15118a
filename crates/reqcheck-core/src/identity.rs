//! # Requirement Identity
//!
//! Newtype wrapper for requirement identifiers. Matching between a
//! requirement and a result feature is exact and case-sensitive, so the
//! identifier is stored verbatim; only empty or whitespace-only values are
//! rejected.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

use crate::error::ReqcheckError;

/// Identifier of a single requirement, e.g. `feature12`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RequirementId(String);

impl RequirementId {
    /// Create a requirement identifier, rejecting empty or blank input.
    pub fn new(id: impl Into<String>) -> Result<Self, ReqcheckError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ReqcheckError::InvalidIdentifier(id));
        }
        Ok(Self(id))
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequirementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for RequirementId {
    type Err = ReqcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RequirementId {
    type Error = ReqcheckError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RequirementId> for String {
    fn from(id: RequirementId) -> Self {
        id.0
    }
}

impl AsRef<str> for RequirementId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RequirementId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
