//! # Pantry Core Library
//!
//! Scales a recipe to a target serving count and compares the result against
//! pantry stock to produce a shopping list, converting between grams and
//! kilograms or milliliters and liters where needed.
//!
//! ## Architecture
//!
//! - **Ingredient**: immutable value type with unit normalization, conversion
//!   and scaling
//! - **Recipe**: base ingredient list and serving-count scaling
//! - **Pantry**: stock lookup by case-insensitive name and shortage computation
//! - **Report**: the scale-then-check pipeline and its text rendering
//!
//! ## Key Components
//!
//! - [`Ingredient`]: name, quantity and canonical [`Unit`]
//! - [`Recipe`]: produces scaled ingredient lists
//! - [`Pantry`]: computes shortages against a required list
//! - [`ShoppingPlan`]: ties the two together
//! - [`CheckerConfig`]: rendering and validation preferences

pub mod config;
pub mod error;
pub mod ingredient;
pub mod pantry;
pub mod recipe;
pub mod report;

pub use config::{CheckerConfig, IngredientDefinition, PantryDefinition, RecipeDefinition};
pub use error::{ConfigError, ConversionError, CoreError, Result, ValidationError};
pub use ingredient::{format_quantity, name_key, Conversion, Ingredient, Unit};
pub use pantry::Pantry;
pub use recipe::Recipe;
pub use report::ShoppingPlan;
