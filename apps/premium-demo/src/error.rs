//! # Demo Error Type
//!
//! Everything that can stop the demo before it prints a full report.
//!
//! ```text
//! ConfigError ─────┐
//! AllocationError ─┼──► DemoError ──► main() ──► stderr, exit code 1
//! serde_json ──────┤
//! io::Error ───────┘
//! ```

use premium_core::AllocationError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A scenario's input was rejected by the allocator.
    #[error("Scenario {scenario} failed: {source}")]
    Allocation {
        scenario: usize,
        #[source]
        source: AllocationError,
    },

    /// The requested scenario number does not exist.
    #[error("Unknown scenario {requested}, expected 1..={available}")]
    UnknownScenario { requested: usize, available: usize },

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub type DemoResult<T> = Result<T, DemoError>;
