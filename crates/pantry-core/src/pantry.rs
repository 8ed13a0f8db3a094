//! Pantry stock and shortage computation.
//!
//! Stock is matched against required ingredients by case-insensitive name.
//! When several stock entries share a name, only the first one is consulted.

use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::error::ConversionError;
use crate::ingredient::{name_key, Ingredient};

/// Ingredients on hand.
#[derive(Debug, Clone, Serialize)]
pub struct Pantry {
    stock: Vec<Ingredient>,

    /// Case-folded name -> index of the first stock entry with that name
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Pantry {
    pub fn new(stock: Vec<Ingredient>) -> Self {
        let mut index = HashMap::with_capacity(stock.len());
        for (i, item) in stock.iter().enumerate() {
            index.entry(name_key(item.name())).or_insert(i);
        }
        Self { stock, index }
    }

    pub fn stock(&self) -> &[Ingredient] {
        &self.stock
    }

    /// First stock entry whose name matches `name`, ignoring case.
    pub fn find(&self, name: &str) -> Option<&Ingredient> {
        self.index.get(&name_key(name)).map(|&i| &self.stock[i])
    }

    /// Compute what is missing to cover `needed`.
    ///
    /// Each shortage carries the required name and unit, with the deficit
    /// as its quantity; entirely missing items are returned unchanged.
    /// An unsupported unit conversion aborts the whole computation.
    pub fn get_shortages(
        &self,
        needed: &[Ingredient],
    ) -> Result<Vec<Ingredient>, ConversionError> {
        let mut shortages = Vec::new();

        for required in needed {
            let Some(on_hand) = self.find(required.name()) else {
                debug!(ingredient = required.name(), "not in pantry");
                shortages.push(required.clone());
                continue;
            };

            let available = on_hand.convert_to(required.unit()).map_err(|e| {
                warn!(ingredient = required.name(), error = %e, "cannot compare pantry stock");
                e
            })?;

            if available < required.quantity() {
                let deficit = required.quantity() - available;
                debug!(
                    ingredient = required.name(),
                    required = required.quantity(),
                    available,
                    deficit,
                    unit = %required.unit(),
                    "short"
                );
                shortages.push(Ingredient::new(
                    required.name(),
                    deficit,
                    required.unit().clone(),
                ));
            }
        }

        Ok(shortages)
    }
}

impl PartialEq for Pantry {
    fn eq(&self, other: &Self) -> bool {
        self.stock == other.stock
    }
}
