//! Metrics recording for the batch commands.
//!
//! Counters are no-ops until a recorder is installed with [`init_metrics`].

use anyhow::Result;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the in-process Prometheus recorder
pub fn init_metrics() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    tracing::debug!("Metrics collection initialized");
    Ok(handle)
}

/// Record the outcome of classifying one ingredient line
pub fn record_classification(valid: bool) {
    metrics::counter!("ingredient_classifications_total", "result" => if valid { "valid" } else { "needs_review" }).increment(1);
}

/// Record a MEASURE span that matched no unit pattern
pub fn record_unresolved_measure() {
    metrics::counter!("unresolved_measures_total").increment(1);
}

/// Record a numeric span that could not be normalized
pub fn record_malformed_quantity() {
    metrics::counter!("malformed_quantities_total").increment(1);
}

/// Record a parsed recipe file
pub fn record_recipe_loaded(category: &str, ingredient_count: usize) {
    let category = category.to_string();
    metrics::counter!("recipes_loaded_total", "category" => category).increment(1);
    metrics::histogram!("recipe_ingredient_lines").record(ingredient_count as f64);
}

/// Record a blank recipe file
pub fn record_empty_recipe() {
    metrics::counter!("recipes_empty_total").increment(1);
}

/// Record database operation metrics
pub fn record_db_metrics(operation: &str, duration: std::time::Duration) {
    let operation = operation.to_string();
    metrics::counter!("db_operations_total", "operation" => operation).increment(1);
    metrics::histogram!("db_operation_duration_seconds").record(duration.as_secs_f64());
}

/// Record one review decision (accept, skip or stop)
pub fn record_review_decision(decision: &str) {
    let decision = decision.to_string();
    metrics::counter!("review_decisions_total", "decision" => decision).increment(1);
}
