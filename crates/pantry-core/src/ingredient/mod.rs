//! Ingredient value type.
//!
//! An ingredient is a name, a quantity and a canonical [`Unit`]. It is never
//! mutated after construction; scaling produces a new value.

pub mod unit;

pub use unit::{Conversion, Unit};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ConversionError, ValidationError};

/// Decimal places used by `Display`.
pub const DEFAULT_PRECISION: u32 = 2;

/// Largest number of decimal places `format_quantity` honors.
pub const MAX_PRECISION: u32 = 6;

/// An ingredient with a normalized unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    name: String,
    quantity: f64,
    unit: Unit,
}

impl Ingredient {
    /// Create an ingredient, normalizing `unit` through the synonym table.
    ///
    /// Quantities are stored verbatim, including negative values.
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<Unit>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }

    /// Like [`Ingredient::new`] but rejects negative or non-finite quantities.
    pub fn try_new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<Unit>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if !quantity.is_finite() || quantity < 0.0 {
            return Err(ValidationError::InvalidQuantity { name, quantity });
        }
        Ok(Self::new(name, quantity, unit))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Express this ingredient's quantity in `target`.
    pub fn convert_to(&self, target: &Unit) -> Result<f64, ConversionError> {
        match self.unit.conversion_to(target) {
            Some(conversion) => Ok(conversion.apply(self.quantity)),
            None => Err(ConversionError::Unsupported {
                from: self.unit.clone(),
                to: target.clone(),
            }),
        }
    }

    /// Return a copy with the quantity multiplied by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            name: self.name.clone(),
            quantity: self.quantity * factor,
            unit: self.unit.clone(),
        }
    }

    /// Same as `Display`, with a caller-chosen number of decimal places.
    pub fn display_with_precision(&self, precision: u32) -> String {
        format!(
            "{} {} {}",
            format_quantity(self.quantity, precision),
            self.unit,
            self.name
        )
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with_precision(DEFAULT_PRECISION))
    }
}

/// Key under which ingredient names compare equal, ignoring case.
///
/// Each character is upper-cased on its own, without context or locale
/// rules; characters whose upper case is not a single character are kept.
pub fn name_key(name: &str) -> String {
    name.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        })
        .collect()
}

/// Round to at most `precision` decimal places and trim trailing zeros.
///
/// Halves round away from zero. Negative zero renders as `0`. Precision is
/// capped at [`MAX_PRECISION`]; quantities too large to scale print as-is.
pub fn format_quantity(quantity: f64, precision: u32) -> String {
    if !quantity.is_finite() {
        return quantity.to_string();
    }
    let scale = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    let scaled = quantity * scale;
    if !scaled.is_finite() {
        return format!("{quantity}");
    }
    let rounded = scaled.round() / scale;
    if rounded == 0.0 {
        return "0".to_string();
    }
    // f64's Display already prints the shortest form without trailing zeros.
    format!("{rounded}")
}
