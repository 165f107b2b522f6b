//! Unit definitions - the five categories and their units in declaration order

use std::sync::LazyLock;
use serde::Serialize;
use unitconv_core::{Category, LookupError};
use crate::{AffineRule, Unit};

/// Global unit table, built once on first use
pub static UNITS: LazyLock<UnitTable> = LazyLock::new(UnitTable::new);

/// Units of one category, in declaration order
#[derive(Debug, Clone, Serialize)]
pub struct CategoryUnits {
    pub category: Category,
    pub units: Vec<Unit>,
}

/// Registry of all known units, grouped by category
#[derive(Debug, Clone, Serialize)]
pub struct UnitTable {
    categories: Vec<CategoryUnits>,
}

impl UnitTable {
    pub fn new() -> Self {
        let mut table = UnitTable { categories: Vec::with_capacity(Category::ALL.len()) };
        table.register_all_units();
        tracing::trace!(
            categories = table.categories.len(),
            units = table.categories.iter().map(|c| c.units.len()).sum::<usize>(),
            "unit table built"
        );
        table
    }

    /// All categories in declaration order
    pub fn categories(&self) -> Vec<Category> {
        self.categories.iter().map(|c| c.category).collect()
    }

    /// Units of a category in declaration order
    pub fn units(&self, category: Category) -> Result<&[Unit], LookupError> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.units.as_slice())
            .ok_or_else(|| {
                let known: Vec<&str> = self.categories.iter().map(|c| c.category.as_str()).collect();
                LookupError::unknown_category(category.as_str(), &known)
            })
    }

    /// Unit names of a category in declaration order
    pub fn units_of(&self, category: Category) -> Result<Vec<&'static str>, LookupError> {
        Ok(self.units(category)?.iter().map(|u| u.name).collect())
    }

    /// Get a unit by exact name within a category
    pub fn unit(&self, category: Category, name: &str) -> Result<&Unit, LookupError> {
        let units = self.units(category)?;
        units.iter().find(|u| u.name == name).ok_or_else(|| {
            let known: Vec<&str> = units.iter().map(|u| u.name).collect();
            tracing::warn!(unit = name, category = %category, "unit lookup failed");
            LookupError::unknown_unit(name, category.as_str(), &known)
        })
    }

    pub fn is_linear(&self, category: Category) -> bool {
        category.is_linear()
    }

    /// Scalar factor of a unit in a linear category.
    ///
    /// Returns `None` for temperature units, which have no single factor.
    pub fn factor(&self, category: Category, name: &str) -> Result<Option<f64>, LookupError> {
        Ok(self.unit(category, name)?.conversion.factor())
    }

    /// Temperature value in Celsius
    pub fn to_base(&self, name: &str, value: f64) -> Result<f64, LookupError> {
        Ok(self.unit(Category::Temperature, name)?.to_base(value))
    }

    /// Temperature value in the named unit from Celsius
    pub fn from_base(&self, name: &str, celsius: f64) -> Result<f64, LookupError> {
        Ok(self.unit(Category::Temperature, name)?.from_base(celsius))
    }

    /// The unit whose conversion is the identity (factor 1, or Celsius)
    pub fn base_unit(&self, category: Category) -> Result<&Unit, LookupError> {
        let units = self.units(category)?;
        units.iter().find(|u| u.is_base()).ok_or_else(|| {
            let known: Vec<&str> = units.iter().map(|u| u.name).collect();
            LookupError::unknown_unit("<base>", category.as_str(), &known)
        })
    }

    fn register(&mut self, category: Category, units: Vec<Unit>) {
        debug_assert!(units.iter().all(|u| u.category == category));
        self.categories.push(CategoryUnits { category, units });
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_weight_units();
        self.register_temperature_units();
        self.register_volume_units();
        self.register_area_units();
    }

    fn register_length_units(&mut self) {
        use Category::Length;
        self.register(Length, vec![
            Unit::linear("meters", Length, 1.0),
            Unit::linear("kilometers", Length, 1000.0),
            Unit::linear("centimeters", Length, 0.01),
            Unit::linear("millimeters", Length, 0.001),
            Unit::linear("miles", Length, 1609.34),
            Unit::linear("yards", Length, 0.9144),
            Unit::linear("feet", Length, 0.3048),
            Unit::linear("inches", Length, 0.0254),
        ]);
    }

    fn register_weight_units(&mut self) {
        use Category::Weight;
        self.register(Weight, vec![
            Unit::linear("kilograms", Weight, 1.0),
            Unit::linear("grams", Weight, 0.001),
            Unit::linear("milligrams", Weight, 1e-6),
            Unit::linear("metric tons", Weight, 1000.0),
            Unit::linear("pounds", Weight, 0.453592),
            Unit::linear("ounces", Weight, 0.0283495),
        ]);
    }

    fn register_temperature_units(&mut self) {
        self.register(Category::Temperature, vec![
            // Celsius is the pivot
            Unit::affine("celsius", AffineRule::IDENTITY),
            // C = (F - 32) * 5 / 9
            Unit::affine("fahrenheit", AffineRule::new(32.0, 5.0, 9.0)),
            // C = K - 273.15
            Unit::affine("kelvin", AffineRule::new(273.15, 1.0, 1.0)),
        ]);
    }

    fn register_volume_units(&mut self) {
        use Category::Volume;
        self.register(Volume, vec![
            Unit::linear("liters", Volume, 1.0),
            Unit::linear("milliliters", Volume, 0.001),
            Unit::linear("cubic meters", Volume, 1000.0),
            Unit::linear("cubic centimeters", Volume, 0.001),
            Unit::linear("cubic feet", Volume, 28.3168),
            Unit::linear("gallons (US)", Volume, 3.78541),
            Unit::linear("gallons (UK)", Volume, 4.54609),
        ]);
    }

    fn register_area_units(&mut self) {
        use Category::Area;
        self.register(Area, vec![
            Unit::linear("square meters", Area, 1.0),
            Unit::linear("square kilometers", Area, 1e6),
            Unit::linear("square miles", Area, 2.58999e6),
            Unit::linear("square yards", Area, 0.836127),
            Unit::linear("square feet", Area, 0.092903),
            Unit::linear("square inches", Area, 0.00064516),
            Unit::linear("hectares", Area, 10000.0),
            Unit::linear("acres", Area, 4046.86),
        ]);
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use crate::Conversion;

    #[test]
    fn test_every_category_registered_in_order() {
        assert_eq!(UNITS.categories(), Category::ALL.to_vec());
    }

    #[test]
    fn test_units_of_declared_order() {
        let names = UNITS.units_of(Category::Length).unwrap();
        assert_eq!(names.first(), Some(&"meters"));
        assert_eq!(names.get(1), Some(&"kilometers"));
        assert_eq!(names.len(), 8);
        assert_eq!(UNITS.units_of(Category::Temperature).unwrap(), vec!["celsius", "fahrenheit", "kelvin"]);
    }

    #[test]
    fn test_names_unique_within_category() {
        for category in Category::ALL {
            let names = UNITS.units_of(category).unwrap();
            let unique: HashSet<&str> = names.iter().copied().collect();
            assert_eq!(unique.len(), names.len(), "duplicate unit in {}", category);
        }
    }

    #[test]
    fn test_linear_factors_positive_and_finite() {
        for category in Category::ALL.into_iter().filter(|c| c.is_linear()) {
            for unit in UNITS.units(category).unwrap() {
                let factor = unit.conversion.factor().unwrap();
                assert!(factor > 0.0 && factor.is_finite(), "{} has factor {}", unit, factor);
            }
        }
    }

    #[test]
    fn test_temperature_is_affine() {
        assert!(!UNITS.is_linear(Category::Temperature));
        for unit in UNITS.units(Category::Temperature).unwrap() {
            match unit.conversion {
                Conversion::Affine(rule) => {
                    assert_ne!(rule.numerator, 0.0);
                    assert_ne!(rule.denominator, 0.0);
                }
                Conversion::Linear { .. } => panic!("{} should be affine", unit),
            }
        }
    }

    #[test]
    fn test_one_base_unit_per_category() {
        let expected = ["meters", "kilograms", "celsius", "liters", "square meters"];
        for (category, name) in Category::ALL.into_iter().zip(expected) {
            assert_eq!(UNITS.base_unit(category).unwrap().name, name);
            let bases = UNITS.units(category).unwrap().iter().filter(|u| u.is_base()).count();
            assert_eq!(bases, 1, "{}", category);
        }
    }

    #[test]
    fn test_factor_lookup() {
        assert_eq!(UNITS.factor(Category::Length, "kilometers").unwrap(), Some(1000.0));
        assert_eq!(UNITS.factor(Category::Temperature, "kelvin").unwrap(), None);
    }

    #[test]
    fn test_temperature_base_lookups() {
        assert_eq!(UNITS.to_base("kelvin", 273.15).unwrap(), 0.0);
        assert_eq!(UNITS.from_base("fahrenheit", 100.0).unwrap(), 212.0);
        assert!(UNITS.to_base("meters", 1.0).unwrap_err().is_unknown_unit());
    }

    #[test]
    fn test_unknown_unit() {
        let err = UNITS.unit(Category::Length, "furlongs").unwrap_err();
        assert!(err.is_unknown_unit());
        assert!(err.suggestion().unwrap().contains("meters"));
    }

    #[test]
    fn test_names_not_shared_across_categories() {
        // "meters" is a length unit only; categories are not merged
        assert!(UNITS.unit(Category::Area, "meters").is_err());
    }

    #[test]
    fn test_table_serializes() {
        let json = serde_json::to_value(&*UNITS).unwrap();
        let temperature = &json["categories"][2];
        assert_eq!(temperature["category"], "temperature");
        assert_eq!(temperature["units"][1]["name"], "fahrenheit");
        assert_eq!(temperature["units"][1]["conversion"]["kind"], "affine");
        assert_eq!(temperature["units"][1]["conversion"]["offset"], 32.0);
        assert_eq!(json["categories"][0]["units"][1]["conversion"]["factor"], 1000.0);
    }
}
