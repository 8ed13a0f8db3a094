//! TOML-based checker configuration and input definitions.
//!
//! [`CheckerConfig`] holds presentation and validation preferences:
//! - Number of decimal places used when rendering quantities
//! - Whether negative or non-finite quantities are rejected
//! - Default target serving count
//!
//! [`RecipeDefinition`] and [`PantryDefinition`] are the serde shapes callers
//! use to describe inputs; `build` turns them into validated core types.
//! Everything here parses caller-supplied text, nothing touches the disk.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result, ValidationError};
use crate::ingredient::{Ingredient, DEFAULT_PRECISION, MAX_PRECISION};
use crate::pantry::Pantry;
use crate::recipe::Recipe;

/// Largest accepted `display_precision`.
pub const MAX_DISPLAY_PRECISION: u32 = MAX_PRECISION;

/// Checker configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Decimal places for rendered quantities.
    #[serde(default = "default_display_precision")]
    pub display_precision: u32,
    /// Reject negative or non-finite quantities when building definitions.
    #[serde(default)]
    pub strict_quantities: bool,
    #[serde(default = "default_target_servings")]
    pub default_target_servings: u32,
}

// Default functions
fn default_display_precision() -> u32 {
    DEFAULT_PRECISION
}
fn default_target_servings() -> u32 {
    6
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            display_precision: default_display_precision(),
            strict_quantities: false,
            default_target_servings: default_target_servings(),
        }
    }
}

impl CheckerConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CheckerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display_precision > MAX_DISPLAY_PRECISION {
            return Err(ConfigError::InvalidValue {
                key: "display_precision".to_string(),
                message: format!(
                    "{} exceeds the maximum of {MAX_DISPLAY_PRECISION}",
                    self.display_precision
                ),
            });
        }
        Ok(())
    }

    fn make_ingredient(&self, def: &IngredientDefinition) -> Result<Ingredient, ValidationError> {
        if self.strict_quantities {
            Ingredient::try_new(def.name.as_str(), def.quantity, def.unit.as_str())
        } else {
            Ok(Ingredient::new(def.name.as_str(), def.quantity, def.unit.as_str()))
        }
    }
}

/// A `(name, quantity, unit)` triple as written by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientDefinition {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

/// Recipe input shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDefinition {
    pub base_servings: u32,
    #[serde(default)]
    pub ingredients: Vec<IngredientDefinition>,
}

impl RecipeDefinition {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn build(&self, config: &CheckerConfig) -> Result<Recipe> {
        let ingredients = self
            .ingredients
            .iter()
            .map(|def| config.make_ingredient(def))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Recipe::new(self.base_servings, ingredients)?)
    }
}

/// Pantry input shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryDefinition {
    #[serde(default)]
    pub stock: Vec<IngredientDefinition>,
}

impl PantryDefinition {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn build(&self, config: &CheckerConfig) -> Result<Pantry> {
        let stock = self
            .stock
            .iter()
            .map(|def| config.make_ingredient(def))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Pantry::new(stock))
    }
}
