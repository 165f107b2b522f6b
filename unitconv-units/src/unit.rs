//! Unit representation with conversion rules

use std::fmt;
use serde::{Serialize, Deserialize};
use unitconv_core::Category;

/// Affine rule relating a temperature unit to Celsius.
///
/// `celsius = (value - offset) * numerator / denominator`
/// `value = celsius * denominator / numerator + offset`
///
/// Stored as a ratio rather than a single scale so that 5/9 and 9/5 are
/// applied as multiply-then-divide, which keeps 0 °C → 32 °F exact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineRule {
    /// Reading of this unit at 0 °C
    pub offset: f64,
    pub numerator: f64,
    pub denominator: f64,
}

impl AffineRule {
    /// Celsius itself
    pub const IDENTITY: AffineRule = AffineRule { offset: 0.0, numerator: 1.0, denominator: 1.0 };

    pub const fn new(offset: f64, numerator: f64, denominator: f64) -> Self {
        AffineRule { offset, numerator, denominator }
    }

    pub fn to_celsius(&self, value: f64) -> f64 {
        (value - self.offset) * self.numerator / self.denominator
    }

    pub fn from_celsius(&self, celsius: f64) -> f64 {
        celsius * self.denominator / self.numerator + self.offset
    }
}

/// How a unit's value relates to its category's base representation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Conversion {
    /// `base_value = value * factor`
    Linear { factor: f64 },
    /// Affine transform through Celsius
    Affine(AffineRule),
}

impl Conversion {
    pub fn is_linear(&self) -> bool {
        matches!(self, Conversion::Linear { .. })
    }

    /// Scalar factor for linear units, `None` for affine ones
    pub fn factor(&self) -> Option<f64> {
        match self {
            Conversion::Linear { factor } => Some(*factor),
            Conversion::Affine(_) => None,
        }
    }

    /// Value in the category's base representation (Celsius for temperature)
    pub fn to_base(&self, value: f64) -> f64 {
        match self {
            Conversion::Linear { factor } => value * factor,
            Conversion::Affine(rule) => rule.to_celsius(value),
        }
    }

    /// Value in this unit from the category's base representation
    pub fn from_base(&self, base: f64) -> f64 {
        match self {
            Conversion::Linear { factor } => base / factor,
            Conversion::Affine(rule) => rule.from_celsius(base),
        }
    }

    /// True when this rule maps base values onto themselves
    pub fn is_base(&self) -> bool {
        match self {
            Conversion::Linear { factor } => *factor == 1.0,
            Conversion::Affine(rule) => *rule == AffineRule::IDENTITY,
        }
    }
}

/// A named unit belonging to exactly one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    /// Name, unique within its category (e.g., "meters", "gallons (US)")
    pub name: &'static str,
    pub category: Category,
    pub conversion: Conversion,
}

impl Unit {
    /// Create a unit with proportional conversion
    pub const fn linear(name: &'static str, category: Category, factor: f64) -> Self {
        Unit { name, category, conversion: Conversion::Linear { factor } }
    }

    /// Create a temperature unit with an affine rule through Celsius
    pub const fn affine(name: &'static str, rule: AffineRule) -> Self {
        Unit { name, category: Category::Temperature, conversion: Conversion::Affine(rule) }
    }

    pub fn is_base(&self) -> bool {
        self.conversion.is_base()
    }

    pub fn to_base(&self, value: f64) -> f64 {
        self.conversion.to_base(value)
    }

    pub fn from_base(&self, base: f64) -> f64 {
        self.conversion.from_base(base)
    }

    /// Convert a value from this unit to another unit of the same category.
    ///
    /// Linear pairs use `value * f_from / f_to` in that order.
    pub fn convert_to(&self, value: f64, target: &Unit) -> f64 {
        target.from_base(self.to_base(value))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meters() -> Unit {
        Unit::linear("meters", Category::Length, 1.0)
    }

    fn kilometers() -> Unit {
        Unit::linear("kilometers", Category::Length, 1000.0)
    }

    fn fahrenheit() -> Unit {
        Unit::affine("fahrenheit", AffineRule::new(32.0, 5.0, 9.0))
    }

    #[test]
    fn test_base_unit() {
        assert!(meters().is_base());
        assert!(!kilometers().is_base());
        assert!(Unit::affine("celsius", AffineRule::IDENTITY).is_base());
        assert!(!fahrenheit().is_base());
    }

    #[test]
    fn test_linear_to_base() {
        assert_eq!(kilometers().to_base(5.0), 5000.0);
        assert_eq!(kilometers().from_base(5000.0), 5.0);
    }

    #[test]
    fn test_linear_convert() {
        assert_eq!(meters().convert_to(5000.0, &kilometers()), 5.0);
        assert_eq!(kilometers().convert_to(1.0, &meters()), 1000.0);
    }

    #[test]
    fn test_affine_rule() {
        let f = AffineRule::new(32.0, 5.0, 9.0);
        assert_eq!(f.to_celsius(212.0), 100.0);
        assert_eq!(f.from_celsius(0.0), 32.0);
        assert_eq!(f.from_celsius(-40.0), -40.0);
    }

    #[test]
    fn test_factor_only_for_linear() {
        assert_eq!(kilometers().conversion.factor(), Some(1000.0));
        assert_eq!(fahrenheit().conversion.factor(), None);
        assert!(!fahrenheit().conversion.is_linear());
    }

    #[test]
    fn test_nan_passes_through() {
        assert!(kilometers().convert_to(f64::NAN, &meters()).is_nan());
        assert_eq!(meters().convert_to(f64::INFINITY, &kilometers()), f64::INFINITY);
    }

    #[test]
    fn test_display() {
        assert_eq!(fahrenheit().to_string(), "fahrenheit");
    }
}
