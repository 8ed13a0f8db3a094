//! Recipe definition and serving-count scaling.
//!
//! A recipe lists ingredient quantities for a base number of servings and
//! can produce a scaled copy of that list for any target serving count.

use serde::Serialize;

use crate::error::ValidationError;
use crate::ingredient::Ingredient;

/// A recipe with base quantities for `base_servings` people
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    /// Number of servings the base quantities make
    base_servings: u32,

    /// Base quantities, in recipe order
    ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Create a recipe. `base_servings` must be greater than zero.
    pub fn new(
        base_servings: u32,
        ingredients: Vec<Ingredient>,
    ) -> Result<Self, ValidationError> {
        if base_servings == 0 {
            return Err(ValidationError::ZeroServings);
        }
        Ok(Self {
            base_servings,
            ingredients,
        })
    }

    pub fn base_servings(&self) -> u32 {
        self.base_servings
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Ratio of `target_servings` to the base serving count
    pub fn scale_factor(&self, target_servings: u32) -> f64 {
        f64::from(target_servings) / f64::from(self.base_servings)
    }

    /// Ingredient list scaled to `target_servings`, in recipe order.
    pub fn scale_to(&self, target_servings: u32) -> Vec<Ingredient> {
        let factor = self.scale_factor(target_servings);
        self.ingredients.iter().map(|i| i.scale(factor)).collect()
    }
}
