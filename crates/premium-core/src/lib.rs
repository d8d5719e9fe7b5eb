//! # premium-core: Pure Premium Allocation Logic
//!
//! Splits each product's quantity into whole units across the promotions
//! (premiums) that apply to it, using fractional usage weights, while every
//! promotion draws on one shared, rounded capacity.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Premium Split Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/premium-demo (driver)                      │   │
//! │  │    scenarios ──► distribute_premiums ──► text / JSON render     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ premium-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │validation │─►│ capacity  │─►│ allocator │─►│  report   │  │   │
//! │  │   │  inputs   │  │ Σ → round │  │ floor/rem │  │ usage,    │  │   │
//! │  │   │  checked  │  │   pool    │  │ /correct  │  │ totals    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • DETERMINISTIC                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Requests, results, promotion codes
//! - [`capacity`] - Capacity aggregation and the per-call pool
//! - [`allocator`] - The per-product floor, remainder and correction passes
//! - [`report`] - Usage summary, oversubscriptions, promotion totals
//! - [`validation`] - Input checks
//! - [`error`] - Domain error types
//!
//! ## Guarantees
//!
//! 1. **Exact**: every product's units sum to its quantity
//! 2. **Deterministic**: same input in the same order gives the same output
//! 3. **All-or-nothing**: invalid input fails before anything is allocated
//! 4. **Observable overruns**: capacity is only exceeded by the correction
//!    step, and each time it is, the report says so
//!
//! ## Example Usage
//!
//! ```rust
//! use premium_core::{distribute_premiums_with_report, ProductRequest};
//!
//! let products = vec![ProductRequest::new("A", 100)
//!     .with_weight(110, 33.33)
//!     .with_weight(111, 33.33)
//!     .with_weight(112, 33.33)];
//!
//! let report = distribute_premiums_with_report(&products).unwrap();
//! assert_eq!(report.results[0].allocated_units(), 100);
//!
//! // Each promotion only rounds to 33, so one unit had to be forced.
//! assert!(report.is_oversubscribed());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod allocator;
pub mod capacity;
pub mod error;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use allocator::{distribute_premiums, distribute_premiums_with_report};
pub use capacity::CapacityPool;
pub use error::{AllocationError, AllocationResult, ValidationError};
pub use report::{promotion_totals, AllocationReport, Oversubscription, PromotionUsage};
pub use types::*;
