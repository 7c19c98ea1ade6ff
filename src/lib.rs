//! # Recipe NER
//!
//! Turns the entity spans produced by a NER model over recipe ingredient
//! lines into structured `(amount, measure, foods)` triples, parses recipe
//! text files into documents, and keeps the results in a SQLite database
//! with manual review and pricing on top.

pub mod annotator;
pub mod classifier;
pub mod cli;
pub mod collection;
pub mod config;
pub mod db;
pub mod encoding;
pub mod errors;
pub mod observability;
pub mod observability_config;
pub mod pricing;
pub mod quantity;
pub mod recipe_parser;
pub mod report;
pub mod review;
pub mod units;

// Re-export types for easier access
pub use classifier::{Classification, EntityClassifier, EntityLabel, LabeledSpan, ParsedIngredient};
pub use collection::{LoadOptions, RecipeCollection};
pub use recipe_parser::{RecipeDocument, Servings};
pub use units::UnitTable;
