//! unitconv units - Unit table and conversion engine
//!
//! Converts values between units of the same physical category.
//! Linear categories scale through a base unit; temperature goes through
//! Celsius with an affine rule per unit.
//!
//! Categories:
//! - Length (meters, kilometers, miles, feet, etc.)
//! - Weight (kilograms, grams, pounds, ounces, etc.)
//! - Temperature (celsius, fahrenheit, kelvin)
//! - Volume (liters, cubic meters, gallons, etc.)
//! - Area (square meters, hectares, acres, etc.)
//!
//! The table is read-only after first use and every operation is a pure
//! function of its arguments, so calls may run from any thread.

mod unit;
mod units;
mod convert;
mod selection;

pub use unitconv_core::{Category, LookupError};
pub use unit::{AffineRule, Conversion, Unit};
pub use units::{CategoryUnits, UnitTable, UNITS};
pub use convert::{convert, peer_conversions, PeerConversion, DEFAULT_PEER_LIMIT};
pub use selection::{ConverterConfig, Selection};
