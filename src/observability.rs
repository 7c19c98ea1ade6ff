//! Observability module for logging and metrics setup.
//!
//! This module provides:
//! - Structured logging with configurable levels and formats
//! - Span helpers for the parsing, classification and database stages
//! - Counters for the batch commands, exported as a Prometheus text snapshot

pub mod metrics;
pub mod tracing_mod;

use anyhow::Result;
use metrics_exporter_prometheus::PrometheusHandle;

use crate::observability_config::ObservabilityConfig;

pub use tracing_mod::{classify_span, db_span, init_tracing_with_config, parse_span};

/// Initialize logging and, when enabled, the metrics recorder.
///
/// Returns the Prometheus handle used to render a snapshot at the end of a run.
pub fn init_observability_with_config(
    config: &ObservabilityConfig,
) -> Result<Option<PrometheusHandle>> {
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid observability configuration: {}", e))?;

    init_tracing_with_config(config)?;

    let handle = if config.enable_metrics {
        Some(metrics::init_metrics()?)
    } else {
        None
    };

    tracing::debug!(
        environment = %config.environment,
        metrics_enabled = %config.enable_metrics,
        "Observability initialized"
    );
    Ok(handle)
}
