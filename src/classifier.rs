//! # Entity Classification Module
//!
//! Turns the labeled spans produced by the NER annotator for one ingredient
//! line into an `(amount, measure, food)` triple.
//!
//! The annotator is noisy: it labels units as locations and sometimes emits
//! competing spans. Only unambiguous lines are accepted automatically; all
//! other lines keep their raw candidate lists so an operator can resolve them.
//!
//! ## Rules
//!
//! 1. AMOUNT and LOCATION spans whose text is purely numeric are normalized
//!    into amount candidates, other text is dropped
//! 2. MEASURE spans are matched against the unit table, unmatched ones are dropped
//! 3. FOOD spans are kept verbatim
//! 4. A line is valid with exactly one amount, at most one measure and at least one food

use crate::errors::RecipeError;
use crate::observability::metrics;
use crate::quantity::{is_numeric_text, normalize};
use crate::units::UnitTable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Category tag attached to a span by the annotator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    Amount,
    Measure,
    Food,
    /// Units mislabeled by the model, handled as amount candidates
    #[serde(alias = "LOC")]
    Location,
}

impl EntityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Amount => "AMOUNT",
            EntityLabel::Measure => "MEASURE",
            EntityLabel::Food => "FOOD",
            EntityLabel::Location => "LOC",
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityLabel {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AMOUNT" => Ok(EntityLabel::Amount),
            "MEASURE" => Ok(EntityLabel::Measure),
            "FOOD" => Ok(EntityLabel::Food),
            "LOC" | "LOCATION" => Ok(EntityLabel::Location),
            other => Err(RecipeError::Parse(format!("unknown entity label {other:?}"))),
        }
    }
}

/// A labeled range of an ingredient line. Offsets are in characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledSpan {
    pub start: usize,
    pub end: usize,
    pub label: EntityLabel,
    pub text: String,
}

impl LabeledSpan {
    /// Build a span from character offsets into `line`.
    ///
    /// Returns `None` when the range is empty or out of bounds.
    pub fn from_offsets(line: &str, start: usize, end: usize, label: EntityLabel) -> Option<Self> {
        if start >= end {
            return None;
        }
        let text: String = line.chars().skip(start).take(end - start).collect();
        if text.chars().count() != end - start {
            return None;
        }
        Some(Self {
            start,
            end,
            label,
            text,
        })
    }
}

/// A fully resolved ingredient line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    pub amount: f64,
    /// Unit name from the unit table, empty when the line has no unit
    pub measure: String,
    pub foods: Vec<String>,
}

impl ParsedIngredient {
    /// The food name stored for the line
    pub fn primary_food(&self) -> Option<&str> {
        self.foods.first().map(String::as_str)
    }
}

impl fmt::Display for ParsedIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:?}, {:?})", self.amount, self.measure, self.foods)
    }
}

/// Raw candidates kept for manual review
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidates {
    pub amounts: Vec<f64>,
    pub measures: Vec<String>,
    pub foods: Vec<String>,
    /// Numeric spans that failed quantity normalization
    pub malformed: Vec<String>,
}

impl Candidates {
    fn is_unambiguous(&self) -> bool {
        self.malformed.is_empty()
            && self.amounts.len() == 1
            && self.measures.len() <= 1
            && !self.foods.is_empty()
    }
}

/// Outcome of classifying one ingredient line
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    Valid(ParsedIngredient),
    NeedsReview(Candidates),
}

impl Classification {
    pub fn is_valid(&self) -> bool {
        matches!(self, Classification::Valid(_))
    }

    pub fn parsed(&self) -> Option<&ParsedIngredient> {
        match self {
            Classification::Valid(parsed) => Some(parsed),
            Classification::NeedsReview(_) => None,
        }
    }
}

/// Classifies annotated ingredient lines against a unit table
#[derive(Debug, Clone, Copy)]
pub struct EntityClassifier<'a> {
    units: &'a UnitTable,
}

impl<'a> EntityClassifier<'a> {
    pub fn new(units: &'a UnitTable) -> Self {
        Self { units }
    }

    pub fn units(&self) -> &'a UnitTable {
        self.units
    }

    /// Partition the spans of one line into amount, measure and food candidates
    pub fn candidates(&self, spans: &[LabeledSpan], line: &str) -> Candidates {
        let mut candidates = Candidates::default();

        for span in spans {
            match span.label {
                EntityLabel::Amount | EntityLabel::Location => {
                    if !is_numeric_text(&span.text) {
                        debug!(line = %line, span = %span.text, label = %span.label, "Dropping non-numeric amount span");
                        continue;
                    }
                    match normalize(&span.text) {
                        Ok(amount) => candidates.amounts.push(amount),
                        Err(e) => {
                            warn!(line = %line, span = %span.text, error = %e, "Amount span could not be normalized");
                            metrics::record_malformed_quantity();
                            candidates.malformed.push(span.text.clone());
                        }
                    }
                }
                EntityLabel::Measure => match self.units.match_unit(&span.text) {
                    Some(unit) => candidates.measures.push(unit.to_string()),
                    None => {
                        debug!(line = %line, span = %span.text, "Unresolved measure dropped");
                        metrics::record_unresolved_measure();
                    }
                },
                EntityLabel::Food => candidates.foods.push(span.text.clone()),
            }
        }

        candidates
    }

    /// Classify one line. Valid lines are reduced to a single triple, the
    /// others keep every candidate.
    pub fn classify(&self, spans: &[LabeledSpan], line: &str) -> Classification {
        let _span = crate::observability::classify_span(line).entered();
        let candidates = self.candidates(spans, line);

        let classification = if candidates.is_unambiguous() {
            let Candidates {
                mut amounts,
                mut measures,
                foods,
                ..
            } = candidates;
            Classification::Valid(ParsedIngredient {
                amount: amounts.remove(0),
                measure: measures.pop().unwrap_or_default(),
                foods,
            })
        } else {
            Classification::NeedsReview(candidates)
        };

        metrics::record_classification(classification.is_valid());
        classification
    }
}

/// Render a line with each span wrapped as `[LABEL text]`
pub fn markup(line: &str, spans: &[LabeledSpan]) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut ordered: Vec<&LabeledSpan> = spans.iter().collect();
    ordered.sort_by_key(|s| s.start);

    let mut out = String::with_capacity(line.len() + spans.len() * 10);
    let mut last = 0;
    for span in ordered {
        if span.start < last || span.end > chars.len() {
            continue;
        }
        out.extend(&chars[last..span.start]);
        out.push('[');
        out.push_str(span.label.as_str());
        out.push(' ');
        out.extend(&chars[span.start..span.end]);
        out.push(']');
        last = span.end;
    }
    out.extend(&chars[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> UnitTable {
        UnitTable::from_pairs([("cup", "^taza"), ("tbsp", "cda")]).unwrap()
    }

    fn span(line: &str, needle: &str, label: EntityLabel) -> LabeledSpan {
        let byte = line.find(needle).unwrap();
        let start = line[..byte].chars().count();
        LabeledSpan::from_offsets(line, start, start + needle.chars().count(), label).unwrap()
    }

    #[test]
    fn test_valid_line_without_measure() {
        let units = table();
        let classifier = EntityClassifier::new(&units);
        let line = "2 tazas de harina";
        let spans = vec![
            span(line, "2", EntityLabel::Amount),
            span(line, "harina", EntityLabel::Food),
        ];

        let result = classifier.classify(&spans, line);
        assert_eq!(
            result,
            Classification::Valid(ParsedIngredient {
                amount: 2.0,
                measure: String::new(),
                foods: vec!["harina".to_string()],
            })
        );
    }

    #[test]
    fn test_valid_line_with_measure() {
        let units = table();
        let classifier = EntityClassifier::new(&units);
        let line = "1½ tazas de azúcar";
        let spans = vec![
            span(line, "1½", EntityLabel::Amount),
            span(line, "tazas", EntityLabel::Measure),
            span(line, "azúcar", EntityLabel::Food),
        ];

        let parsed = classifier.classify(&spans, line).parsed().cloned().unwrap();
        assert_eq!(parsed.amount, 1.5);
        assert_eq!(parsed.measure, "cup");
        assert_eq!(parsed.primary_food(), Some("azúcar"));
    }

    #[test]
    fn test_location_counts_as_amount() {
        let units = table();
        let classifier = EntityClassifier::new(&units);
        let line = "3 huevos";
        let spans = vec![
            span(line, "3", EntityLabel::Location),
            span(line, "huevos", EntityLabel::Food),
        ];
        assert!(classifier.classify(&spans, line).is_valid());
    }

    #[test]
    fn test_two_amounts_need_review() {
        let units = table();
        let classifier = EntityClassifier::new(&units);
        let line = "2 o 3 cdas de aceite";
        let spans = vec![
            span(line, "2", EntityLabel::Amount),
            span(line, "3", EntityLabel::Amount),
            span(line, "cdas", EntityLabel::Measure),
            span(line, "aceite", EntityLabel::Food),
        ];

        match classifier.classify(&spans, line) {
            Classification::NeedsReview(c) => {
                assert_eq!(c.amounts, vec![2.0, 3.0]);
                assert_eq!(c.measures, vec!["tbsp".to_string()]);
                assert_eq!(c.foods, vec!["aceite".to_string()]);
            }
            other => panic!("expected review, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_amount_is_dropped() {
        let units = table();
        let classifier = EntityClassifier::new(&units);
        let line = "2.5 tazas de leche";
        let spans = vec![
            span(line, "2.5", EntityLabel::Amount),
            span(line, "leche", EntityLabel::Food),
        ];

        match classifier.classify(&spans, line) {
            Classification::NeedsReview(c) => {
                assert!(c.amounts.is_empty());
                assert!(c.malformed.is_empty());
            }
            other => panic!("expected review, got {other:?}"),
        }
    }

    #[test]
    fn test_unresolved_measure_is_dropped() {
        let units = table();
        let classifier = EntityClassifier::new(&units);
        let line = "1 pizca de sal";
        let spans = vec![
            span(line, "1", EntityLabel::Amount),
            span(line, "pizca", EntityLabel::Measure),
            span(line, "sal", EntityLabel::Food),
        ];

        let parsed = classifier.classify(&spans, line).parsed().cloned().unwrap();
        assert_eq!(parsed.measure, "");
    }

    #[test]
    fn test_missing_food_needs_review() {
        let units = table();
        let classifier = EntityClassifier::new(&units);
        let line = "1 taza";
        let spans = vec![
            span(line, "1", EntityLabel::Amount),
            span(line, "taza", EntityLabel::Measure),
        ];
        assert!(!classifier.classify(&spans, line).is_valid());
    }

    #[test]
    fn test_malformed_amount_needs_review() {
        let units = table();
        let classifier = EntityClassifier::new(&units);
        // numeric to the filter, but the head "²" is not a decimal
        let line = "²² huevos";
        let spans = vec![
            span(line, "²²", EntityLabel::Amount),
            span(line, "huevos", EntityLabel::Food),
        ];

        match classifier.classify(&spans, line) {
            Classification::NeedsReview(c) => assert_eq!(c.malformed, vec!["²²".to_string()]),
            other => panic!("expected review, got {other:?}"),
        }
    }

    #[test]
    fn test_non_ascii_digit_amount() {
        let units = table();
        let classifier = EntityClassifier::new(&units);
        let line = "３ huevos";
        let spans = vec![
            span(line, "３", EntityLabel::Amount),
            span(line, "huevos", EntityLabel::Food),
        ];

        let parsed = classifier.classify(&spans, line).parsed().cloned().unwrap();
        assert_eq!(parsed.amount, 3.0);
        assert_eq!(parsed.measure, "");
        assert_eq!(parsed.foods, vec!["huevos".to_string()]);
    }

    #[test]
    fn test_label_parsing() {
        assert_eq!("LOC".parse::<EntityLabel>().unwrap(), EntityLabel::Location);
        assert_eq!("LOCATION".parse::<EntityLabel>().unwrap(), EntityLabel::Location);
        assert_eq!("FOOD".parse::<EntityLabel>().unwrap(), EntityLabel::Food);
        assert!("PERSON".parse::<EntityLabel>().is_err());
    }

    #[test]
    fn test_span_offsets_are_characters() {
        let line = "½ taza de azúcar";
        let s = LabeledSpan::from_offsets(line, 10, 16, EntityLabel::Food).unwrap();
        assert_eq!(s.text, "azúcar");
        assert!(LabeledSpan::from_offsets(line, 10, 40, EntityLabel::Food).is_none());
        assert!(LabeledSpan::from_offsets(line, 3, 3, EntityLabel::Food).is_none());
    }

    #[test]
    fn test_markup() {
        let line = "2 tazas de harina";
        let spans = vec![
            span(line, "harina", EntityLabel::Food),
            span(line, "2", EntityLabel::Amount),
        ];
        assert_eq!(markup(line, &spans), "[AMOUNT 2] tazas de [FOOD harina]");
    }
}
