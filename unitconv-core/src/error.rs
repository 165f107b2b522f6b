//! Lookup errors
//!
//! The engine performs no I/O and no parsing of numbers, so the only way a
//! conversion can fail is a name that is not in the unit table. Errors carry
//! a machine-readable code and a suggestion listing the valid names.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
}

/// A category or unit name that is not present in the unit table
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LookupError {
    #[error("unknown category: {category}")]
    UnknownCategory {
        category: String,
        /// Valid category identifiers, for the suggestion
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        known: Vec<String>,
    },

    #[error("unknown unit '{unit}' in category '{category}'")]
    UnknownUnit {
        unit: String,
        category: String,
        /// Units declared in the category, for the suggestion
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        known: Vec<String>,
    },
}

impl LookupError {
    pub fn unknown_category(category: impl Into<String>, known: &[&str]) -> Self {
        LookupError::UnknownCategory {
            category: category.into(),
            known: known.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn unknown_unit(unit: impl Into<String>, category: impl Into<String>, known: &[&str]) -> Self {
        LookupError::UnknownUnit {
            unit: unit.into(),
            category: category.into(),
            known: known.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            LookupError::UnknownCategory { .. } => codes::UNKNOWN_CATEGORY,
            LookupError::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
        }
    }

    /// Hint listing the valid names, if any are known
    pub fn suggestion(&self) -> Option<String> {
        let known = match self {
            LookupError::UnknownCategory { known, .. } => known,
            LookupError::UnknownUnit { known, .. } => known,
        };
        if known.is_empty() {
            None
        } else {
            Some(format!("Valid: {}", known.join(", ")))
        }
    }

    pub fn is_unknown_unit(&self) -> bool {
        matches!(self, LookupError::UnknownUnit { .. })
    }

    pub fn is_unknown_category(&self) -> bool {
        matches!(self, LookupError::UnknownCategory { .. })
    }
}
