//! # Recipe Pricing
//!
//! Unit prices come from `prices.json`, a list of
//! `{"food", "measure", "iprice", "fprice"}` entries. The effective price of
//! an entry is `iprice` when it is set, `fprice` otherwise. A recipe costs
//! the sum of `amount × price` over its ingredient rows.

use crate::db::{self, CostLine};
use crate::encoding::{read_text, TextEncoding};
use crate::errors::{AppError, AppResult, RecipeError};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use tracing::{debug, info};

/// One entry of the price list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub food: String,
    pub measure: String,
    /// Price entered interactively
    pub iprice: f64,
    /// Fallback price
    pub fprice: f64,
}

impl PriceEntry {
    pub fn effective_price(&self) -> f64 {
        if self.iprice != 0.0 {
            self.iprice
        } else {
            self.fprice
        }
    }

    pub fn is_priced(&self) -> bool {
        self.iprice != 0.0 || self.fprice != 0.0
    }
}

/// Load the price list
pub fn load_price_entries(path: &Path, encoding: TextEncoding) -> Result<Vec<PriceEntry>, RecipeError> {
    let content = read_text(path, encoding)?;
    let entries: Vec<PriceEntry> = serde_json::from_str(&content)?;
    info!(path = %path.display(), entries = entries.len(), "Price list loaded");
    Ok(entries)
}

/// Foods for which no entry carries a price
pub fn unpriced_foods(entries: &[PriceEntry]) -> BTreeSet<String> {
    let priced: BTreeSet<&str> = entries
        .iter()
        .filter(|e| e.is_priced())
        .map(|e| e.food.as_str())
        .collect();
    entries
        .iter()
        .filter(|e| !priced.contains(e.food.as_str()))
        .map(|e| e.food.clone())
        .collect()
}

/// Lookup table `food -> measure -> price`
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    prices: HashMap<String, HashMap<String, f64>>,
}

impl PriceTable {
    /// Build the table; later entries for the same pair override earlier ones
    pub fn from_entries(entries: &[PriceEntry]) -> Self {
        let mut prices: HashMap<String, HashMap<String, f64>> = HashMap::new();
        for entry in entries {
            prices
                .entry(entry.food.clone())
                .or_default()
                .insert(entry.measure.clone(), entry.effective_price());
        }
        Self { prices }
    }

    pub fn price(&self, food: &str, measure: &str) -> Option<f64> {
        self.prices.get(food)?.get(measure).copied()
    }
}

/// Cost of one recipe from its ingredient rows, rounded to whole units.
///
/// Fails when a row has no amount or its food/measure pair has no price.
pub fn recipe_cost(recipe_id: &str, lines: &[CostLine], table: &PriceTable) -> AppResult<f64> {
    let mut cost = 0.0;
    for line in lines {
        let amount = line.amount.ok_or_else(|| {
            AppError::Validation(format!(
                "recipe {recipe_id}: ingredient {:?} has no amount",
                line.food
            ))
        })?;
        let price = table.price(&line.food, &line.measure).ok_or_else(|| {
            AppError::Validation(format!(
                "recipe {recipe_id}: no price for food {:?} with measure {:?}",
                line.food, line.measure
            ))
        })?;
        cost += amount * price;
    }
    Ok(cost.round_ties_even())
}

/// Recompute and store the price of every recipe.
///
/// Costs are computed first; nothing is written if any recipe fails.
pub async fn update_prices(pool: &SqlitePool, table: &PriceTable) -> AppResult<Vec<(String, f64)>> {
    let mut prices = Vec::new();
    for recipe_id in db::recipe_ids(pool).await? {
        let lines = db::recipe_cost_lines(pool, &recipe_id).await?;
        let cost = recipe_cost(&recipe_id, &lines, table)?;
        debug!(recipe_id = %recipe_id, cost = cost, "Recipe cost computed");
        prices.push((recipe_id, cost));
    }
    db::update_recipe_prices(pool, &prices).await?;
    Ok(prices)
}
