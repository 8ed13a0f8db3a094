//! Shopping plan: scale a recipe, check it against the pantry, render the result.

use serde::Serialize;
use std::fmt;

use crate::config::CheckerConfig;
use crate::error::Result;
use crate::ingredient::{Ingredient, DEFAULT_PRECISION};
use crate::pantry::Pantry;
use crate::recipe::Recipe;

/// Line shown when the pantry covers everything.
pub const FULLY_STOCKED_LINE: &str = " - None, you have everything!";

/// Scaled ingredients and the resulting shortages for one target serving count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingPlan {
    target_servings: u32,
    scaled: Vec<Ingredient>,
    shortages: Vec<Ingredient>,
}

impl ShoppingPlan {
    /// Scale `recipe` to `target_servings` and compute shortages against `pantry`.
    pub fn build(recipe: &Recipe, pantry: &Pantry, target_servings: u32) -> Result<Self> {
        let scaled = recipe.scale_to(target_servings);
        let shortages = pantry.get_shortages(&scaled)?;
        tracing::debug!(
            target_servings,
            ingredients = scaled.len(),
            shortages = shortages.len(),
            "shopping plan built"
        );
        Ok(Self {
            target_servings,
            scaled,
            shortages,
        })
    }

    pub fn target_servings(&self) -> u32 {
        self.target_servings
    }

    pub fn scaled(&self) -> &[Ingredient] {
        &self.scaled
    }

    pub fn shortages(&self) -> &[Ingredient] {
        &self.shortages
    }

    pub fn is_fully_stocked(&self) -> bool {
        self.shortages.is_empty()
    }

    /// Render both sections as text, one ingredient per line.
    pub fn render(&self, config: &CheckerConfig) -> String {
        PlanText {
            plan: self,
            precision: config.display_precision,
        }
        .to_string()
    }

    fn write_text(&self, out: &mut impl fmt::Write, precision: u32) -> fmt::Result {
        writeln!(out, "Scaled recipe for {} servings:", self.target_servings)?;
        for ingredient in &self.scaled {
            writeln!(out, " - {}", ingredient.display_with_precision(precision))?;
        }

        writeln!(out)?;
        writeln!(out, "Shopping List (Shortages):")?;
        if self.shortages.is_empty() {
            writeln!(out, "{FULLY_STOCKED_LINE}")?;
        } else {
            for shortage in &self.shortages {
                writeln!(out, " - {}", shortage.display_with_precision(precision))?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ShoppingPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f, DEFAULT_PRECISION)
    }
}

/// A plan paired with the precision to render it at.
struct PlanText<'a> {
    plan: &'a ShoppingPlan,
    precision: u32,
}

impl fmt::Display for PlanText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.plan.write_text(f, self.precision)
    }
}
