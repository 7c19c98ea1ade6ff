//! # Unit Matching Module
//!
//! Recognizes measurement units in annotated MEASURE spans using an ordered
//! table of named regex patterns loaded from `measures.json`.
//!
//! ## Matching rules
//!
//! - Patterns are tried in the order they are declared in the configuration file
//! - A pattern only needs to match at the start of the text (prefix match)
//! - The first matching pattern wins, even when a later one is more specific
//!
//! ```json
//! { "cup": "^taza", "tbsp": "cda", "tsp": "cdta" }
//! ```

use crate::encoding::{read_text, TextEncoding};
use crate::errors::RecipeError;
use regex::Regex;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, info, trace};

/// A named unit pattern compiled for prefix matching
#[derive(Debug, Clone)]
pub struct UnitPattern {
    name: String,
    pattern: String,
    regex: Regex,
}

impl UnitPattern {
    /// Compile a pattern so that it only matches at the start of the text
    pub fn new(name: &str, pattern: &str) -> Result<Self, RecipeError> {
        if name.trim().is_empty() {
            return Err(RecipeError::InvalidUnitPattern {
                unit: name.to_string(),
                message: "unit name cannot be empty".to_string(),
            });
        }
        let regex = Regex::new(&format!("^(?:{pattern})")).map_err(|e| {
            RecipeError::InvalidUnitPattern {
                unit: name.to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
            regex,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pattern as written in the configuration
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Ordered unit pattern table
#[derive(Debug, Clone, Default)]
pub struct UnitTable {
    patterns: Vec<UnitPattern>,
}

impl UnitTable {
    /// Build a table from `(name, pattern)` pairs, keeping their order
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, RecipeError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let patterns = pairs
            .into_iter()
            .map(|(name, pattern)| UnitPattern::new(name, pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Parse a JSON object of `unit name -> pattern`, keeping declaration order
    pub fn from_json_str(json: &str) -> Result<Self, RecipeError> {
        let object: Map<String, Value> = serde_json::from_str(json)?;
        let mut patterns = Vec::with_capacity(object.len());
        for (name, value) in &object {
            let pattern = value.as_str().ok_or_else(|| RecipeError::InvalidUnitPattern {
                unit: name.clone(),
                message: format!("expected a string pattern, found {value}"),
            })?;
            patterns.push(UnitPattern::new(name, pattern)?);
        }
        Ok(Self { patterns })
    }

    /// Load the unit table from a configuration file
    pub fn load(path: &Path, encoding: TextEncoding) -> Result<Self, RecipeError> {
        info!(path = %path.display(), encoding = %encoding, "Loading unit patterns");
        let content = read_text(path, encoding)?;
        let table = Self::from_json_str(&content)?;
        info!(units = table.len(), "Unit patterns loaded");
        Ok(table)
    }

    /// Return the first unit (in declaration order) whose pattern matches the
    /// start of `text`
    pub fn match_unit(&self, text: &str) -> Option<&str> {
        let found = self.patterns.iter().find(|p| p.matches(text));
        match found {
            Some(p) => {
                trace!(text = %text, unit = %p.name, "Unit matched");
                Some(p.name.as_str())
            }
            None => {
                debug!(text = %text, "No unit pattern matched");
                None
            }
        }
    }

    /// Whether `name` is a unit declared in this table
    pub fn contains(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
