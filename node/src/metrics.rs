//! # Prometheus Metrics
//!
//! Counters and a latency histogram for validation runs. Printed in the
//! Prometheus text exposition format when `verify --metrics` is given.
//!
//! All metrics are registered in a dedicated [`prometheus::Registry`] so they
//! do not collide with any default global registry consumers.

use prometheus::{Encoder, Histogram, HistogramOpts, IntCounter, Registry, TextEncoder};
use std::time::Duration;

/// Holds all Prometheus metric handles for a validation run.
#[derive(Clone)]
pub struct ValidationMetrics {
    /// Prometheus registry that owns all metrics below.
    registry: Registry,
    /// Total number of transactions validated.
    pub validations_total: IntCounter,
    /// Transactions the engine accepted.
    pub validations_accepted_total: IntCounter,
    /// Transactions the engine rejected, malformed ones included.
    pub validations_rejected_total: IntCounter,
    /// Histogram of per-transaction validation latency in seconds.
    pub validation_latency_seconds: Histogram,
}

impl ValidationMetrics {
    /// Creates and registers all metrics.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new_custom(Some("rems".into()), None)?;

        let validations_total = IntCounter::new(
            "validations_total",
            "Total number of transactions validated",
        )?;
        registry.register(Box::new(validations_total.clone()))?;

        let validations_accepted_total = IntCounter::new(
            "validations_accepted_total",
            "Number of transactions accepted by the contract",
        )?;
        registry.register(Box::new(validations_accepted_total.clone()))?;

        let validations_rejected_total = IntCounter::new(
            "validations_rejected_total",
            "Number of transactions rejected by the contract",
        )?;
        registry.register(Box::new(validations_rejected_total.clone()))?;

        let validation_latency_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "validation_latency_seconds",
                "Time spent validating a single transaction in seconds",
            )
            .buckets(vec![
                0.000_01, 0.000_05, 0.000_1, 0.000_5, 0.001, 0.005, 0.01, 0.05, 0.1,
            ]),
        )?;
        registry.register(Box::new(validation_latency_seconds.clone()))?;

        Ok(Self {
            registry,
            validations_total,
            validations_accepted_total,
            validations_rejected_total,
            validation_latency_seconds,
        })
    }

    /// Records one validation outcome.
    pub fn record(&self, accepted: bool, elapsed: Duration) {
        self.validations_total.inc();
        if accepted {
            self.validations_accepted_total.inc();
        } else {
            self.validations_rejected_total.inc();
        }
        self.validation_latency_seconds
            .observe(elapsed.as_secs_f64());
    }

    /// Encodes all registered metrics into the Prometheus text exposition format.
    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
