//! Conversion engine
//!
//! Pure functions over the unit table. All errors are `LookupError`s raised
//! before any arithmetic, so a call either returns a complete result or fails.

use serde::{Deserialize, Serialize};
use unitconv_core::{Category, LookupError};
use crate::units::{UnitTable, UNITS};

/// Default number of rows in a common-conversions list
pub const DEFAULT_PEER_LIMIT: usize = 5;

/// One row of a common-conversions list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerConversion {
    pub unit: String,
    pub value: f64,
}

impl UnitTable {
    /// Convert `value` from one unit to another within `category`.
    ///
    /// Linear: `value * factor(from) / factor(to)`.
    /// Temperature: through Celsius.
    pub fn convert(&self, value: f64, from_unit: &str, to_unit: &str, category: Category) -> Result<f64, LookupError> {
        let from = self.unit(category, from_unit)?;
        let to = self.unit(category, to_unit)?;
        let result = from.convert_to(value, to);
        tracing::debug!(%category, from = from_unit, to = to_unit, value, result, "convert");
        Ok(result)
    }

    /// Convert `value` into every other unit of `category`, in declaration order.
    ///
    /// Skips `from_unit` and anything in `exclude`, and stops after `limit` rows.
    /// Names in `exclude` that are not in the category are ignored.
    pub fn peer_conversions(
        &self,
        value: f64,
        from_unit: &str,
        exclude: &[&str],
        category: Category,
        limit: usize,
    ) -> Result<Vec<PeerConversion>, LookupError> {
        let from = self.unit(category, from_unit)?;
        let peers: Vec<PeerConversion> = self
            .units(category)?
            .iter()
            .filter(|u| u.name != from.name && !exclude.contains(&u.name))
            .take(limit)
            .map(|u| PeerConversion {
                unit: u.name.to_string(),
                value: from.convert_to(value, u),
            })
            .collect();
        tracing::debug!(%category, from = from_unit, limit, rows = peers.len(), "peer conversions");
        Ok(peers)
    }
}

/// Convert a value between two units of the named category.
///
/// Fails with `LookupError` if the category or either unit is unknown.
pub fn convert(value: f64, from_unit: &str, to_unit: &str, category: &str) -> Result<f64, LookupError> {
    let category: Category = category.parse()?;
    UNITS.convert(value, from_unit, to_unit, category)
}

/// Convert a value into the other units of the named category.
///
/// See [`UnitTable::peer_conversions`].
pub fn peer_conversions(
    value: f64,
    from_unit: &str,
    exclude: &[&str],
    category: &str,
    limit: usize,
) -> Result<Vec<PeerConversion>, LookupError> {
    let category: Category = category.parse()?;
    UNITS.peer_conversions(value, from_unit, exclude, category, limit)
}
