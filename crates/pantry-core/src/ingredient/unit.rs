//! Measurement units and the fixed conversion table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A canonical measurement unit.
///
/// Anything outside the fixed synonym table is kept as [`Unit::Other`],
/// trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Unit {
    Grams,
    Kilograms,
    Milliliters,
    Liters,
    Pieces,
    Other(String),
}

impl Unit {
    /// Normalize a unit string through the synonym table.
    pub fn parse(raw: &str) -> Self {
        let unit = raw.trim().to_lowercase();
        match unit.as_str() {
            "grams" | "gram" | "g" => Unit::Grams,
            "kilograms" | "kg" => Unit::Kilograms,
            "milliliters" | "ml" => Unit::Milliliters,
            "liters" | "l" => Unit::Liters,
            "pieces" | "pcs" => Unit::Pieces,
            _ => Unit::Other(unit),
        }
    }

    /// Canonical short form
    pub fn as_str(&self) -> &str {
        match self {
            Unit::Grams => "g",
            Unit::Kilograms => "kg",
            Unit::Milliliters => "ml",
            Unit::Liters => "l",
            Unit::Pieces => "pcs",
            Unit::Other(s) => s,
        }
    }

    /// Look up how to take a quantity in `self` to `target`.
    ///
    /// Returns `None` for pairs that are neither identical nor in the table.
    pub fn conversion_to(&self, target: &Unit) -> Option<Conversion> {
        if self == target {
            return Some(Conversion::Identity);
        }
        match (self, target) {
            (Unit::Grams, Unit::Kilograms) => Some(Conversion::Divide(1000.0)),
            (Unit::Kilograms, Unit::Grams) => Some(Conversion::Multiply(1000.0)),
            (Unit::Milliliters, Unit::Liters) => Some(Conversion::Divide(1000.0)),
            (Unit::Liters, Unit::Milliliters) => Some(Conversion::Multiply(1000.0)),
            _ => None,
        }
    }
}

/// An exact conversion step between two units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversion {
    Identity,
    Multiply(f64),
    Divide(f64),
}

impl Conversion {
    pub fn apply(self, quantity: f64) -> f64 {
        match self {
            Conversion::Identity => quantity,
            Conversion::Multiply(factor) => quantity * factor,
            Conversion::Divide(factor) => quantity / factor,
        }
    }
}

impl From<&str> for Unit {
    fn from(raw: &str) -> Self {
        Unit::parse(raw)
    }
}

impl From<String> for Unit {
    fn from(raw: String) -> Self {
        Unit::parse(&raw)
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.as_str().to_string()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonyms_normalize() {
        let cases = [
            ("grams", Unit::Grams),
            ("gram", Unit::Grams),
            ("g", Unit::Grams),
            ("kilograms", Unit::Kilograms),
            ("kg", Unit::Kilograms),
            ("milliliters", Unit::Milliliters),
            ("ml", Unit::Milliliters),
            ("liters", Unit::Liters),
            ("l", Unit::Liters),
            ("pieces", Unit::Pieces),
            ("pcs", Unit::Pieces),
        ];
        for (raw, expected) in cases {
            assert_eq!(Unit::parse(raw), expected, "synonym {raw}");
        }
    }

    #[test]
    fn test_case_and_whitespace_are_ignored() {
        assert_eq!(Unit::parse("  KiloGrams \t"), Unit::Kilograms);
        assert_eq!(Unit::parse("ML"), Unit::Milliliters);
    }

    #[test]
    fn test_unknown_unit_passes_through_lowercased() {
        assert_eq!(Unit::parse(" Cups "), Unit::Other("cups".to_string()));
        assert_eq!(Unit::parse(" Cups ").as_str(), "cups");
    }

    #[test]
    fn test_conversion_table() {
        assert_eq!(
            Unit::Grams.conversion_to(&Unit::Kilograms),
            Some(Conversion::Divide(1000.0))
        );
        assert_eq!(
            Unit::Kilograms.conversion_to(&Unit::Grams),
            Some(Conversion::Multiply(1000.0))
        );
        assert_eq!(
            Unit::Milliliters.conversion_to(&Unit::Liters),
            Some(Conversion::Divide(1000.0))
        );
        assert_eq!(
            Unit::Liters.conversion_to(&Unit::Milliliters),
            Some(Conversion::Multiply(1000.0))
        );
        assert_eq!(Unit::Pieces.conversion_to(&Unit::Pieces), Some(Conversion::Identity));
        assert_eq!(Unit::Pieces.conversion_to(&Unit::Grams), None);
        assert_eq!(Unit::Grams.conversion_to(&Unit::Milliliters), None);
        assert_eq!(Unit::Kilograms.conversion_to(&Unit::Liters), None);
    }

    #[test]
    fn test_other_units_only_match_themselves() {
        let cups = Unit::parse("cups");
        assert_eq!(cups.conversion_to(&Unit::parse("CUPS")), Some(Conversion::Identity));
        assert_eq!(cups.conversion_to(&Unit::parse("tbsp")), None);
    }

    #[test]
    fn test_conversion_apply() {
        assert_eq!(Conversion::Divide(1000.0).apply(500.0), 0.5);
        assert_eq!(Conversion::Multiply(1000.0).apply(1.5), 1500.0);
        assert_eq!(Conversion::Identity.apply(0.3), 0.3);
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let json = serde_json::to_string(&Unit::Kilograms).unwrap();
        assert_eq!(json, "\"kg\"");
        let unit: Unit = serde_json::from_str("\" Liters \"").unwrap();
        assert_eq!(unit, Unit::Liters);
    }
}
