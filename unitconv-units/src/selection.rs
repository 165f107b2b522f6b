//! Caller-owned conversion state
//!
//! The engine keeps no state between calls. A front end that remembers the
//! current category, units and input value holds them in a `Selection` and
//! passes it in explicitly.

use serde::{Deserialize, Serialize};
use unitconv_core::{Category, LookupError};
use crate::convert::{PeerConversion, DEFAULT_PEER_LIMIT};
use crate::units::{UnitTable, UNITS};

/// Tunables for a converter front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Maximum rows in the common-conversions list
    pub peer_limit: usize,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self { peer_limit: DEFAULT_PEER_LIMIT }
    }
}

impl ConverterConfig {
    pub fn with_peer_limit(mut self, limit: usize) -> Self {
        self.peer_limit = limit;
        self
    }
}

/// Currently selected category, units and input value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub category: Category,
    pub from_unit: String,
    pub to_unit: String,
    pub value: f64,
}

impl Default for Selection {
    /// One meter to kilometers
    fn default() -> Self {
        Self {
            category: Category::Length,
            from_unit: "meters".to_string(),
            to_unit: "kilometers".to_string(),
            value: 1.0,
        }
    }
}

impl Selection {
    /// First declared unit to the second, with an input of 1
    pub fn for_category(category: Category) -> Result<Self, LookupError> {
        Self::for_category_in(&UNITS, category)
    }

    pub fn for_category_in(table: &UnitTable, category: Category) -> Result<Self, LookupError> {
        let names = table.units_of(category)?;
        let from = names.first().copied();
        let to = names.get(1).copied().or(from);
        match (from, to) {
            (Some(from), Some(to)) => Ok(Self {
                category,
                from_unit: from.to_string(),
                to_unit: to.to_string(),
                value: 1.0,
            }),
            _ => Err(LookupError::unknown_unit("<first>", category.as_str(), &[])),
        }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn with_units(mut self, from_unit: impl Into<String>, to_unit: impl Into<String>) -> Self {
        self.from_unit = from_unit.into();
        self.to_unit = to_unit.into();
        self
    }

    /// Check that both units belong to the category
    pub fn validate(&self) -> Result<(), LookupError> {
        UNITS.unit(self.category, &self.from_unit)?;
        UNITS.unit(self.category, &self.to_unit)?;
        Ok(())
    }

    /// Converted value for the selected pair
    pub fn result(&self) -> Result<f64, LookupError> {
        UNITS.convert(self.value, &self.from_unit, &self.to_unit, self.category)
    }

    /// The input value in the other units of the category, skipping both
    /// selected units
    pub fn common_conversions(&self, config: &ConverterConfig) -> Result<Vec<PeerConversion>, LookupError> {
        self.validate()?;
        UNITS.peer_conversions(
            self.value,
            &self.from_unit,
            &[self.from_unit.as_str(), self.to_unit.as_str()],
            self.category,
            config.peer_limit,
        )
    }
}
