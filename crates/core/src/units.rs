//! The conversion engine.
//!
//! A [`UnitRegistry`] owns a fixed set of [`Category`] values (length,
//! weight). Each category names a base unit and maps every member unit to
//! the number of base units one of it equals. Converting is a lookup of
//! both units, a same-category check, then `value * from / to`.
//!
//! The registry is built once and shared by reference; nothing here is
//! global or mutable.

use std::collections::HashMap;

use crate::error::{ConversionError, RegistryError};

/// A group of units sharing one dimension and one base unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Dimension name, e.g. `"length"`
    pub name: String,

    /// Reference unit every factor is relative to (informational)
    pub base_unit: String,

    /// Lowercase unit name → base units per one of this unit, in registration order
    factors: Vec<(String, f64)>,
}

impl Category {
    /// Create a category. Unit names are stored lowercase.
    pub fn new<I, S>(name: impl Into<String>, base_unit: impl Into<String>, factors: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        Self {
            name: name.into(),
            base_unit: base_unit.into(),
            factors: factors
                .into_iter()
                .map(|(unit, factor)| (unit.as_ref().to_lowercase(), factor))
                .collect(),
        }
    }

    /// The built-in length category (base: meter).
    pub fn length() -> Self {
        Self::new(
            "length",
            "m",
            [
                ("km", 1000.0),
                ("m", 1.0),
                ("cm", 0.01),
                ("mm", 0.001),
                ("mile", 1609.344),
                ("yard", 0.9144),
                ("foot", 0.3048),
                ("inch", 0.0254),
            ],
        )
    }

    /// The built-in weight category (base: kilogram).
    pub fn weight() -> Self {
        Self::new(
            "weight",
            "kg",
            [
                ("kg", 1.0),
                ("g", 0.001),
                ("lb", 0.45359237),
                ("oz", 0.0283495231),
            ],
        )
    }

    /// Scale factor of `unit` relative to the base unit. `unit` must already be lowercase.
    pub fn factor(&self, unit: &str) -> Option<f64> {
        self.factors
            .iter()
            .find(|(name, _)| name == unit)
            .map(|(_, factor)| *factor)
    }

    /// Member unit names, in registration order.
    pub fn units(&self) -> impl Iterator<Item = &str> {
        self.factors.iter().map(|(name, _)| name.as_str())
    }

    /// Member units with their factors, in registration order.
    pub fn factors(&self) -> &[(String, f64)] {
        &self.factors
    }
}

/// Immutable unit name → category index.
///
/// Construct with [`UnitRegistry::standard`] (the fixed length + weight
/// table) or [`UnitRegistry::from_categories`], then share it via `&` or
/// `Arc`. Lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    categories: Vec<Category>,
    index: HashMap<String, usize>,
}

impl UnitRegistry {
    /// The standard registry: length and weight.
    pub fn standard() -> Self {
        let categories = vec![Category::length(), Category::weight()];
        let index = categories
            .iter()
            .enumerate()
            .flat_map(|(i, cat)| cat.units().map(move |unit| (unit.to_string(), i)))
            .collect();
        Self { categories, index }
    }

    /// Build a registry from arbitrary categories, enforcing that every
    /// factor is finite and positive and that no unit or category name
    /// appears twice.
    pub fn from_categories(categories: Vec<Category>) -> Result<Self, RegistryError> {
        let mut index: HashMap<String, usize> = HashMap::new();

        for (i, category) in categories.iter().enumerate() {
            if categories[..i].iter().any(|c| c.name == category.name) {
                return Err(RegistryError::DuplicateCategory(category.name.clone()));
            }

            for (unit, factor) in category.factors() {
                if !factor.is_finite() || *factor <= 0.0 {
                    return Err(RegistryError::InvalidFactor {
                        unit: unit.clone(),
                        factor: *factor,
                    });
                }

                if let Some(&owner) = index.get(unit) {
                    return Err(RegistryError::DuplicateUnit {
                        unit: unit.clone(),
                        first: categories[owner].name.clone(),
                        second: category.name.clone(),
                    });
                }
                index.insert(unit.clone(), i);
            }
        }

        Ok(Self { categories, index })
    }

    /// Find the category owning `unit` (any casing).
    pub fn lookup(&self, unit: &str) -> Option<&Category> {
        self.index
            .get(&unit.to_lowercase())
            .map(|&i| &self.categories[i])
    }

    /// All categories, in registration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Every registered unit name, grouped by category.
    pub fn units(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().flat_map(Category::units)
    }

    /// Whether two units can be converted into each other.
    pub fn is_compatible(&self, a: &str, b: &str) -> Result<bool, ConversionError> {
        let (a_idx, _) = self.resolve(a)?;
        let (b_idx, _) = self.resolve(b)?;
        Ok(a_idx == b_idx)
    }

    /// Convert `value` from `src_unit` into `tgt_unit`.
    ///
    /// Errors carry the unit strings exactly as given, not their lowercase form.
    pub fn convert(&self, value: f64, src_unit: &str, tgt_unit: &str) -> Result<f64, ConversionError> {
        let (src_idx, src_factor) = self.resolve(src_unit)?;
        let (tgt_idx, tgt_factor) = self.resolve(tgt_unit)?;

        if src_idx != tgt_idx {
            return Err(ConversionError::IncompatibleUnit {
                src_unit: src_unit.to_string(),
                tgt_unit: tgt_unit.to_string(),
            });
        }

        let value_in_base = value * src_factor;
        Ok(value_in_base / tgt_factor)
    }

    fn resolve(&self, unit: &str) -> Result<(usize, f64), ConversionError> {
        let normalised = unit.to_lowercase();
        self.index
            .get(&normalised)
            .and_then(|&i| self.categories[i].factor(&normalised).map(|f| (i, f)))
            .ok_or_else(|| ConversionError::UnknownUnit(unit.to_string()))
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Convert `value` from `src_unit` into `tgt_unit` using `registry`.
pub fn convert(
    registry: &UnitRegistry,
    value: f64,
    src_unit: &str,
    tgt_unit: &str,
) -> Result<f64, ConversionError> {
    registry.convert(value, src_unit, tgt_unit)
}
