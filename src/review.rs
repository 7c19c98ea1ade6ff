//! # Manual Review
//!
//! Lines the classifier cannot resolve are confirmed by an operator. The
//! review loop is independent of how decisions are collected: it talks to a
//! [`Reviewer`], implemented for the terminal by [`TerminalReviewer`].
//!
//! When the classifier fails, operators resolve a line by pointing at its
//! whitespace-separated tokens: the first token is the amount, one token index
//! names the measure and a token range names the food.

use crate::annotator::Annotator;
use crate::classifier::{markup, Classification, EntityClassifier, LabeledSpan, ParsedIngredient};
use crate::db;
use crate::errors::{AppError, AppResult};
use crate::observability::metrics;
use crate::quantity::normalize;
use crate::units::UnitTable;
use dialoguer::Input;
use sqlx::SqlitePool;
use tracing::{info, warn};

/// What the operator decided for one ingredient text
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewDecision {
    /// Store this triple and mark the text verified
    Accept(ParsedIngredient),
    /// Leave the text unverified
    Skip,
    /// End the review session
    Stop,
}

impl ReviewDecision {
    fn as_str(&self) -> &'static str {
        match self {
            ReviewDecision::Accept(_) => "accept",
            ReviewDecision::Skip => "skip",
            ReviewDecision::Stop => "stop",
        }
    }
}

/// Everything a reviewer needs to decide on one line
#[derive(Debug, Clone, Copy)]
pub struct ReviewItem<'a> {
    pub id: i64,
    pub text: &'a str,
    pub spans: &'a [LabeledSpan],
    pub classification: &'a Classification,
}

/// Source of review decisions
pub trait Reviewer {
    fn review(&mut self, item: &ReviewItem<'_>, units: &UnitTable) -> AppResult<ReviewDecision>;
}

/// Token positions chosen by the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSelection {
    /// Index of the measure token, `None` when the line has no unit
    pub measure_index: Option<usize>,
    /// Food tokens, `start..end`
    pub food_start: usize,
    pub food_end: usize,
}

/// Resolve a line from operator-selected token positions
pub fn resolve_by_tokens(
    text: &str,
    selection: TokenSelection,
    units: &UnitTable,
) -> AppResult<ParsedIngredient> {
    let tokens: Vec<&str> = text.split(' ').collect();

    let amount = normalize(tokens[0])?;

    let measure = match selection.measure_index {
        Some(index) => {
            let token = tokens.get(index).ok_or_else(|| {
                AppError::Validation(format!("measure token {index} out of range for {text:?}"))
            })?;
            units.match_unit(token).unwrap_or_default().to_string()
        }
        None => String::new(),
    };

    let TokenSelection {
        food_start,
        food_end,
        ..
    } = selection;
    if food_start >= food_end || food_end > tokens.len() {
        return Err(AppError::Validation(format!(
            "food token range {food_start}..{food_end} out of range for {text:?}"
        )));
    }
    let food = tokens[food_start..food_end].join(" ");

    Ok(ParsedIngredient {
        amount,
        measure,
        foods: vec![food],
    })
}

/// Parse a food range typed as `"start end"`
pub fn parse_token_range(input: &str) -> AppResult<(usize, usize)> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    match parts.as_slice() {
        [start, end] => {
            let start = start
                .parse()
                .map_err(|_| AppError::Validation(format!("invalid token index {start:?}")))?;
            let end = end
                .parse()
                .map_err(|_| AppError::Validation(format!("invalid token index {end:?}")))?;
            Ok((start, end))
        }
        _ => Err(AppError::Validation(format!(
            "expected two token indexes, got {input:?}"
        ))),
    }
}

/// Counters for a review session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewSummary {
    pub accepted: usize,
    pub skipped: usize,
    pub stopped: bool,
}

/// Walk the unverified ingredient texts and ask the reviewer about each one
pub async fn review_unverified(
    pool: &SqlitePool,
    annotator: &dyn Annotator,
    classifier: EntityClassifier<'_>,
    reviewer: &mut dyn Reviewer,
) -> AppResult<ReviewSummary> {
    let pending = db::unverified_ingredients(pool).await?;
    info!(pending = pending.len(), annotator = annotator.name(), "Starting ingredient review");

    let mut summary = ReviewSummary::default();
    for ingredient in &pending {
        let spans = annotator.annotate(&ingredient.text).await?;
        let classification = classifier.classify(&spans, &ingredient.text);
        let item = ReviewItem {
            id: ingredient.id,
            text: &ingredient.text,
            spans: &spans,
            classification: &classification,
        };

        let decision = reviewer.review(&item, classifier.units())?;
        metrics::record_review_decision(decision.as_str());

        match decision {
            ReviewDecision::Accept(parsed) => {
                let Some(food) = parsed.primary_food() else {
                    warn!(text = %ingredient.text, "Accepted ingredient has no food, skipping");
                    summary.skipped += 1;
                    continue;
                };
                db::verify_ingredient(pool, &ingredient.text, parsed.amount, &parsed.measure, food)
                    .await?;
                summary.accepted += 1;
            }
            ReviewDecision::Skip => summary.skipped += 1,
            ReviewDecision::Stop => {
                summary.stopped = true;
                break;
            }
        }
    }

    info!(
        accepted = summary.accepted,
        skipped = summary.skipped,
        stopped = summary.stopped,
        "Ingredient review finished"
    );
    Ok(summary)
}

/// Interactive reviewer on the terminal
#[derive(Debug, Default)]
pub struct TerminalReviewer;

impl TerminalReviewer {
    fn prompt(&self, prompt: &str) -> AppResult<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AppError::Internal(format!("prompt failed: {e}")))
    }

    fn ask_selection(&self, text: &str, units: &UnitTable) -> AppResult<ParsedIngredient> {
        let measure_index = self.prompt("m?")?.trim().parse::<usize>().ok();
        let (food_start, food_end) = parse_token_range(&self.prompt("f?")?)?;
        resolve_by_tokens(
            text,
            TokenSelection {
                measure_index,
                food_start,
                food_end,
            },
            units,
        )
    }
}

impl Reviewer for TerminalReviewer {
    fn review(&mut self, item: &ReviewItem<'_>, units: &UnitTable) -> AppResult<ReviewDecision> {
        println!("{}\t\t(#{})", markup(item.text, item.spans), item.id);

        let parsed = match item.classification {
            Classification::Valid(parsed) => parsed.clone(),
            Classification::NeedsReview(_) => match self.ask_selection(item.text, units) {
                Ok(parsed) => parsed,
                Err(e) => {
                    println!("{e}");
                    return Ok(ReviewDecision::Skip);
                }
            },
        };

        println!("{parsed}");
        let decision = match self.prompt(">")?.trim() {
            "y" => ReviewDecision::Accept(parsed),
            "s" => ReviewDecision::Stop,
            _ => ReviewDecision::Skip,
        };
        Ok(decision)
    }
}
