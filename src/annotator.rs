//! # NER Annotators
//!
//! The NER model is an external component: given an ingredient line it returns
//! non-overlapping labeled spans. This module defines the [`Annotator`] trait
//! and two implementations:
//!
//! - [`HttpAnnotator`] calls a model served over HTTP
//!   (`POST {"text": ...}` → `{"ents": [{"start", "end", "label"}]}`)
//! - [`FileAnnotator`] replays an annotation export, the JSON format the
//!   model is trained from

use crate::classifier::{EntityLabel, LabeledSpan};
use crate::encoding::{read_text, TextEncoding};
use crate::errors::{error_logging, AppError, AppResult, RecipeError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Produces labeled spans for an ingredient line
#[async_trait]
pub trait Annotator: Send + Sync {
    /// Annotate one line. Offsets of the returned spans are character offsets
    /// into `text`.
    async fn annotate(&self, text: &str) -> AppResult<Vec<LabeledSpan>>;

    /// Human-readable name used in logs
    fn name(&self) -> &str;
}

/// One entity as returned by a NER service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEntity {
    pub start: usize,
    pub end: usize,
    pub label: String,
}

/// Convert raw entities into labeled spans of `text`.
///
/// Entities with an unknown label or out-of-range offsets are skipped.
pub fn spans_from_entities(text: &str, entities: &[RawEntity]) -> Vec<LabeledSpan> {
    let mut spans: Vec<LabeledSpan> = entities
        .iter()
        .filter_map(|entity| {
            let label = match entity.label.parse::<EntityLabel>() {
                Ok(label) => label,
                Err(_) => {
                    debug!(label = %entity.label, text = %text, "Ignoring entity with unknown label");
                    return None;
                }
            };
            let span = LabeledSpan::from_offsets(text, entity.start, entity.end, label);
            if span.is_none() {
                warn!(
                    start = entity.start,
                    end = entity.end,
                    text = %text,
                    "Ignoring entity with invalid offsets"
                );
            }
            span
        })
        .collect();
    spans.sort_by_key(|span| span.start);
    spans
}

#[derive(Debug, Serialize)]
struct AnnotateRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    ents: Vec<RawEntity>,
}

/// Annotator backed by a NER model served over HTTP
#[derive(Debug, Clone)]
pub struct HttpAnnotator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAnnotator {
    pub fn new(endpoint: &str, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Network(format!("Failed to create HTTP client: {e}")))?;
        info!(endpoint = %endpoint, timeout_secs = timeout.as_secs(), "HTTP annotator initialized");
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Annotator for HttpAnnotator {
    async fn annotate(&self, text: &str) -> AppResult<Vec<LabeledSpan>> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&AnnotateRequest { text })
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .inspect_err(|e| {
                error_logging::log_network_error(e, "annotate", Some(self.endpoint.as_str()));
            })?;

        let body: AnnotateResponse = response.json().await?;
        Ok(spans_from_entities(text, &body.ents))
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// A labeled region in an annotation export
#[derive(Debug, Clone, Deserialize)]
pub struct ExportLabel {
    pub start: usize,
    pub end: usize,
    pub labels: Vec<String>,
}

/// One annotated line of an annotation export
#[derive(Debug, Clone, Deserialize)]
pub struct ExportEntry {
    pub text: String,
    #[serde(default)]
    pub label: Vec<ExportLabel>,
}

/// Annotator that replays spans from an annotation export, keyed by exact text
#[derive(Debug, Clone, Default)]
pub struct FileAnnotator {
    spans: HashMap<String, Vec<LabeledSpan>>,
}

impl FileAnnotator {
    pub fn from_entries(entries: Vec<ExportEntry>) -> Self {
        let mut spans = HashMap::with_capacity(entries.len());
        for entry in entries {
            let entities: Vec<RawEntity> = entry
                .label
                .iter()
                .filter_map(|l| {
                    l.labels.first().map(|label| RawEntity {
                        start: l.start,
                        end: l.end,
                        label: label.clone(),
                    })
                })
                .collect();
            let entry_spans = spans_from_entities(&entry.text, &entities);
            spans.insert(entry.text, entry_spans);
        }
        Self { spans }
    }

    pub fn from_json_str(json: &str) -> Result<Self, RecipeError> {
        let entries: Vec<ExportEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    pub fn load(path: &Path, encoding: TextEncoding) -> Result<Self, RecipeError> {
        let content = read_text(path, encoding)?;
        let annotator = Self::from_json_str(&content)?;
        info!(path = %path.display(), lines = annotator.len(), "Annotation export loaded");
        Ok(annotator)
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

#[async_trait]
impl Annotator for FileAnnotator {
    async fn annotate(&self, text: &str) -> AppResult<Vec<LabeledSpan>> {
        match self.spans.get(text) {
            Some(spans) => Ok(spans.clone()),
            None => {
                debug!(text = %text, "Line not present in annotation export");
                Ok(Vec::new())
            }
        }
    }

    fn name(&self) -> &str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = r#"[
        {"text": "2 tazas de harina", "label": [
            {"start": 11, "end": 17, "labels": ["FOOD"]},
            {"start": 0, "end": 1, "labels": ["AMOUNT"]},
            {"start": 2, "end": 7, "labels": ["MEASURE"]}
        ]},
        {"text": "sal a gusto"}
    ]"#;

    #[test]
    fn test_spans_from_entities() {
        let entities = vec![
            RawEntity { start: 2, end: 7, label: "LOC".to_string() },
            RawEntity { start: 0, end: 1, label: "AMOUNT".to_string() },
            RawEntity { start: 0, end: 99, label: "FOOD".to_string() },
            RawEntity { start: 11, end: 17, label: "PERSON".to_string() },
        ];
        let spans = spans_from_entities("2 tazas de harina", &entities);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].label, EntityLabel::Amount);
        assert_eq!(spans[1].label, EntityLabel::Location);
        assert_eq!(spans[1].text, "tazas");
    }

    #[tokio::test]
    async fn test_file_annotator() {
        let annotator = FileAnnotator::from_json_str(EXPORT).unwrap();
        assert_eq!(annotator.len(), 2);

        let spans = annotator.annotate("2 tazas de harina").await.unwrap();
        let texts: Vec<&str> = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["2", "tazas", "harina"]);

        assert!(annotator.annotate("sal a gusto").await.unwrap().is_empty());
        assert!(annotator.annotate("unknown").await.unwrap().is_empty());
    }

    #[test]
    fn test_invalid_export() {
        assert!(FileAnnotator::from_json_str("{}").is_err());
    }
}
