//! # hyperlap-observability
//!
//! Structured logging for the hyperlap pipelines: subscriber setup driven by
//! [`ObservabilityConfig`](hyperlap_core::config::ObservabilityConfig) and
//! named spans for aggregation, clique extraction, and overlap computation.

pub mod tracing_setup;

pub use tracing_setup::init_tracing;
