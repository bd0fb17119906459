//! # hyperlap-core
//!
//! Foundation crate for the hyperlap workspace.
//! Defines the shared types, traits, errors, config, and constants used by
//! the temporal clique pipeline and the inter-order overlap engine.

pub mod artifact;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::HyperlapConfig;
pub use errors::{HyperlapError, HyperlapResult};
pub use models::{AlphaMatrix, Clique, NodeId, OrderGroups, Timestamp, WeightedCliques};
pub use traits::HypergraphView;
