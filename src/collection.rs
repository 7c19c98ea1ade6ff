//! # Recipe Collection Loader
//!
//! Loads a recipe tree laid out as `<root>/<category>/<recipe>.txt`.
//! Blank files are tracked separately; any other file must parse, and the
//! first parse failure aborts the whole load.

use crate::encoding::{read_text, TextEncoding};
use crate::errors::{error_logging, RecipeError};
use crate::observability::metrics;
use crate::recipe_parser::{self, RecipeDocument};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Options for loading a recipe tree
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Encoding of the recipe files
    pub encoding: TextEncoding,
    /// Log the number of recipes found per category
    pub verbose: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            encoding: TextEncoding::Utf8,
            verbose: false,
        }
    }
}

/// Parsed recipes indexed by key, plus the keys of blank recipe files
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeCollection {
    recipes: BTreeMap<String, RecipeDocument>,
    empty: BTreeSet<String>,
}

impl RecipeCollection {
    /// Walk `root` and parse every recipe file
    pub fn load(root: &Path, options: LoadOptions) -> Result<Self, RecipeError> {
        if !root.is_dir() {
            return Err(RecipeError::Io(format!(
                "recipe directory not found: {}",
                root.display()
            )));
        }

        info!(root = %root.display(), encoding = %options.encoding, "Loading recipe collection");
        let mut collection = Self::default();

        for category in sorted_entries(root, 1)? {
            if !category.file_type().is_dir() {
                debug!(path = %category.path().display(), "Skipping file at category level");
                continue;
            }
            let category_name = category.file_name().to_string_lossy().to_string();
            let mut count = 0usize;

            for file in sorted_entries(category.path(), 1)? {
                if !file.file_type().is_file() {
                    continue;
                }
                let path = file.path();
                let key = recipe_key(path);
                let text = read_text(path, options.encoding).inspect_err(|e| {
                    error_logging::log_filesystem_error(e, "read_recipe", path.to_str());
                })?;

                if text.trim().is_empty() {
                    metrics::record_empty_recipe();
                    collection.empty.insert(key);
                    continue;
                }

                let document = recipe_parser::parse(&key, &text, &category_name).inspect_err(|e| {
                    error_logging::log_recipe_error(e, "parse_recipe", &key, Some(category_name.as_str()));
                })?;

                metrics::record_recipe_loaded(&category_name, document.ingredients.len());
                if collection.recipes.insert(key.clone(), document).is_some() {
                    warn!(recipe_key = %key, category = %category_name, "Duplicate recipe key, keeping the last one");
                }
                count += 1;
            }

            if options.verbose {
                info!(category = %category_name, recipes = count, "Recipes for category");
            }
        }

        info!(
            recipes = collection.recipes.len(),
            empty = collection.empty.len(),
            "Recipe collection loaded"
        );
        Ok(collection)
    }

    /// Parsed recipes in key order
    pub fn recipes(&self) -> impl Iterator<Item = &RecipeDocument> {
        self.recipes.values()
    }

    pub fn get(&self, key: &str) -> Option<&RecipeDocument> {
        self.recipes.get(key)
    }

    /// Keys of blank recipe files
    pub fn empty_keys(&self) -> &BTreeSet<String> {
        &self.empty
    }

    /// Number of parsed recipes
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Parsed plus blank recipe files
    pub fn total(&self) -> usize {
        self.recipes.len() + self.empty.len()
    }

    /// Number of ingredient lines across all parsed recipes
    pub fn ingredient_count(&self) -> usize {
        self.recipes.values().map(|r| r.ingredients.len()).sum()
    }
}

impl fmt::Display for RecipeCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RecipeCollection(recipes={}, empty={}, total={})",
            self.len(),
            self.empty.len(),
            self.total()
        )
    }
}

/// Recipe key: the file name without its extension
pub fn recipe_key(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn sorted_entries(dir: &Path, depth: usize) -> Result<Vec<walkdir::DirEntry>, RecipeError> {
    WalkDir::new(dir)
        .min_depth(depth)
        .max_depth(depth)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| entry.map_err(|e| RecipeError::Io(e.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_recipe_key() {
        assert_eq!(recipe_key(Path::new("postres/torta.txt")), "torta");
        assert_eq!(recipe_key(Path::new("pan")), "pan");
    }

    #[test]
    fn test_missing_root() {
        let err = RecipeCollection::load(Path::new("/nonexistent/recipes"), LoadOptions::default());
        assert!(matches!(err, Err(RecipeError::Io(_))));
    }

    #[test]
    fn test_display_counts() {
        let dir = tempfile::tempdir().unwrap();
        let category = dir.path().join("postres");
        fs::create_dir(&category).unwrap();
        fs::write(category.join("torta.txt"), "Torta\n2 huevos\nDa 8 raciones").unwrap();
        fs::write(category.join("vacia.txt"), "  \n").unwrap();

        let collection = RecipeCollection::load(dir.path(), LoadOptions::default()).unwrap();
        assert_eq!(
            collection.to_string(),
            "RecipeCollection(recipes=1, empty=1, total=2)"
        );
    }
}
