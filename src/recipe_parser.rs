//! # Recipe Document Parser
//!
//! Splits a recipe text file into its name, its ingredient lines grouped by
//! section, and its serving count.
//!
//! ```text
//! Torta de zanahoria          <- name (first non-blank line)
//! - Masa                      <- section marker, section = "Masa"
//! 2 huevos                    <- ingredient line (starts with a number)
//! 1 taza de harina
//! Batir todo y hornear.       <- ignored
//! Da 8 raciones               <- servings (last line)
//! ```

use crate::errors::RecipeError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Character that opens a section header line
pub const SECTION_MARKER: char = '-';

/// Stored serving count for recipes whose yield is a volume
pub const VOLUME_YIELD_SENTINEL: i64 = -1;

lazy_static! {
    /// "Da 3 tazas": the recipe yields a volume, not servings
    static ref VOLUME_YIELD_REGEX: Regex =
        Regex::new(r"Da.+?taza").expect("Invalid volume yield regex pattern");
    /// "Da 8 raciones", "Da para 4"
    static ref SERVINGS_REGEX: Regex =
        Regex::new(r"Da .*?(?P<rations>\d+)").expect("Invalid servings regex pattern");
}

/// Recipe yield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Servings {
    /// Number of servings
    Count(u32),
    /// Yield expressed in cups/volume
    VolumeYield,
}

impl Servings {
    /// Integer form used by the database, with -1 for volume yields
    pub fn as_i64(&self) -> i64 {
        match self {
            Servings::Count(n) => i64::from(*n),
            Servings::VolumeYield => VOLUME_YIELD_SENTINEL,
        }
    }

    /// Determine the yield from the last line of a recipe
    pub fn from_line(line: &str) -> Option<Self> {
        if VOLUME_YIELD_REGEX.is_match(line) {
            return Some(Servings::VolumeYield);
        }
        let captures = SERVINGS_REGEX.captures(line)?;
        match captures["rations"].parse::<u32>() {
            Ok(n) if n > 0 => Some(Servings::Count(n)),
            Ok(_) => None,
            Err(e) => {
                warn!(line = %line, error = %e, "Serving count out of range");
                None
            }
        }
    }
}

impl fmt::Display for Servings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

/// A raw ingredient line and the section it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub text: String,
    pub section: Option<String>,
}

impl fmt::Display for IngredientLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.section {
            Some(section) => write!(f, "[{}] {}", section, self.text),
            None => write!(f, "{}", self.text),
        }
    }
}

/// A parsed recipe file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDocument {
    /// Identifier derived from the file name
    pub key: String,
    pub name: String,
    pub category: String,
    pub servings: Servings,
    pub ingredients: Vec<IngredientLine>,
}

impl fmt::Display for RecipeDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.servings)?;
        for ingredient in &self.ingredients {
            write!(f, "\n{ingredient}")?;
        }
        Ok(())
    }
}

/// Parse a recipe document.
///
/// Fails with [`RecipeError::MissingServings`] when the last line carries no
/// yield. Callers are expected to skip blank files before calling this.
pub fn parse(key: &str, text: &str, category: &str) -> Result<RecipeDocument, RecipeError> {
    let _span = crate::observability::parse_span(key, category).entered();

    let lines: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();

    let (name, body) = match lines.split_first() {
        Some((name, body)) => (name.trim().to_string(), body),
        None => {
            return Err(RecipeError::MissingServings {
                recipe: key.to_string(),
            })
        }
    };

    let mut ingredients = Vec::new();
    let mut section: Option<String> = None;

    for line in body {
        if line.starts_with(SECTION_MARKER) {
            section = line.split_whitespace().nth(1).map(str::to_string);
            if section.is_none() {
                warn!(recipe_key = %key, line = %line, "Section marker without a name");
            }
        } else if line.chars().next().is_some_and(char::is_numeric) {
            ingredients.push(IngredientLine {
                text: line.trim_end().to_string(),
                section: section.clone(),
            });
        }
    }

    let last = lines.last().copied().unwrap_or_default();
    let servings = Servings::from_line(last).ok_or_else(|| RecipeError::MissingServings {
        recipe: name.clone(),
    })?;

    debug!(
        recipe_key = %key,
        ingredient_count = ingredients.len(),
        servings = %servings,
        "Recipe parsed"
    );

    Ok(RecipeDocument {
        key: key.to_string(),
        name,
        category: category.to_string(),
        servings,
        ingredients,
    })
}
