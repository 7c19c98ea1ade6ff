//! Classification report over a whole recipe collection.

use crate::annotator::Annotator;
use crate::classifier::{markup, Classification, EntityClassifier};
use crate::collection::RecipeCollection;
use crate::errors::AppResult;
use std::collections::BTreeSet;
use std::fmt;
use tracing::info;

/// Outcome of classifying every ingredient line of a collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckReport {
    /// Distinct foods of the valid lines
    pub foods: BTreeSet<String>,
    /// Distinct measures of the valid lines, `""` included
    pub measures: BTreeSet<String>,
    pub valid: usize,
    pub total: usize,
    /// Lines that need review, rendered with their spans
    pub invalid: Vec<String>,
}

impl CheckReport {
    pub fn invalid_count(&self) -> usize {
        self.total - self.valid
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for food in &self.foods {
            writeln!(f, "{food}")?;
        }
        writeln!(f, "Measures: {}", self.measures.len())?;
        writeln!(f, "Food: {}", self.foods.len())?;
        write!(f, "Valid: {} / {}", self.valid, self.total)
    }
}

/// Annotate and classify every ingredient line of the collection
pub async fn check_collection(
    collection: &RecipeCollection,
    annotator: &dyn Annotator,
    classifier: EntityClassifier<'_>,
) -> AppResult<CheckReport> {
    let mut report = CheckReport::default();

    for recipe in collection.recipes() {
        for line in &recipe.ingredients {
            let spans = annotator.annotate(&line.text).await?;
            match classifier.classify(&spans, &line.text) {
                Classification::Valid(parsed) => {
                    report.measures.insert(parsed.measure);
                    report.foods.extend(parsed.foods);
                    report.valid += 1;
                }
                Classification::NeedsReview(_) => {
                    report.invalid.push(markup(&line.text, &spans));
                }
            }
            report.total += 1;
        }
    }

    info!(
        valid = report.valid,
        total = report.total,
        foods = report.foods.len(),
        measures = report.measures.len(),
        "Collection check finished"
    );
    Ok(report)
}
