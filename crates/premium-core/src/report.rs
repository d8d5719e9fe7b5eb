//! # Allocation Report
//!
//! Diagnostics that come with an allocation: how much of every promotion was
//! handed out, and where the correction step had to go past the capacity
//! pool to keep a product exact.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  AllocationReport                                                       │
//! │  ├── results[]            one ProductResult per request, input order    │
//! │  ├── usage[]              per code: capacity, allocated, oversubscribed │
//! │  └── oversubscriptions[]  one record per forced correction              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::capacity::CapacityPool;
use crate::types::{ProductResult, PromotionCode};

// =============================================================================
// Oversubscription
// =============================================================================

/// Units the correction step granted beyond a promotion's remaining capacity.
///
/// Raised when the remainder pass ran out of capacity for a product. The
/// product still sums to its quantity; the promotion pays for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Oversubscription {
    pub product: String,
    /// Position of the product in the input.
    pub product_index: usize,
    pub promotion_code: PromotionCode,
    pub units: i64,
}

// =============================================================================
// Promotion Usage
// =============================================================================

/// How one promotion's capacity was used across all products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PromotionUsage {
    pub promotion_code: PromotionCode,
    /// Rounded aggregate of every product's weight for this code.
    pub capacity: i64,
    /// Units handed out across all products.
    pub allocated: i64,
    /// Part of `allocated` that went past the pool.
    pub oversubscribed: i64,
}

impl PromotionUsage {
    /// Whether allocation stayed within capacity.
    #[inline]
    pub fn within_capacity(&self) -> bool {
        self.allocated <= self.capacity
    }
}

// =============================================================================
// Allocation Report
// =============================================================================

/// Results of one allocation call plus capacity diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AllocationReport {
    pub results: Vec<ProductResult>,
    pub usage: Vec<PromotionUsage>,
    pub oversubscriptions: Vec<Oversubscription>,
}

impl AllocationReport {
    pub(crate) fn new(
        results: Vec<ProductResult>,
        pool: &CapacityPool,
        oversubscriptions: Vec<Oversubscription>,
    ) -> Self {
        let allocated = promotion_totals(&results);

        let mut forced: BTreeMap<PromotionCode, i64> = BTreeMap::new();
        for o in &oversubscriptions {
            let units = forced.entry(o.promotion_code).or_insert(0);
            *units = units.saturating_add(o.units);
        }

        let usage = pool
            .capacities()
            .map(|(code, capacity)| PromotionUsage {
                promotion_code: code,
                capacity,
                allocated: allocated.get(&code).copied().unwrap_or(0),
                oversubscribed: forced.get(&code).copied().unwrap_or(0),
            })
            .collect();

        AllocationReport {
            results,
            usage,
            oversubscriptions,
        }
    }

    /// Whether any promotion was pushed past its capacity.
    pub fn is_oversubscribed(&self) -> bool {
        !self.oversubscriptions.is_empty()
    }

    /// Usage for a single code, if it was aggregated.
    pub fn usage_for(&self, code: impl Into<PromotionCode>) -> Option<&PromotionUsage> {
        let code = code.into();
        self.usage.iter().find(|u| u.promotion_code == code)
    }
}

// =============================================================================
// Promotion Totals
// =============================================================================

/// Sums allocated units per promotion code across `results`, ascending by code.
///
/// Totals saturate at `i64::MAX`; forced corrections on huge quantities can
/// push one code past it.
///
/// ## Example
/// ```rust
/// use premium_core::report::promotion_totals;
/// use premium_core::{AllocationEntry, ProductResult, PromotionCode};
///
/// let results = vec![
///     ProductResult {
///         name: "A".into(),
///         quantity: 3,
///         entries: vec![AllocationEntry::new(110, 2), AllocationEntry::new(111, 1)],
///     },
///     ProductResult {
///         name: "B".into(),
///         quantity: 2,
///         entries: vec![AllocationEntry::new(110, 1), AllocationEntry::new(112, 1)],
///     },
/// ];
///
/// let totals = promotion_totals(&results);
/// assert_eq!(totals[&PromotionCode::new(110)], 3);
/// assert_eq!(totals.len(), 3);
/// ```
pub fn promotion_totals(results: &[ProductResult]) -> BTreeMap<PromotionCode, i64> {
    let mut totals = BTreeMap::new();
    for result in results {
        for entry in &result.entries {
            let total = totals.entry(entry.promotion_code).or_insert(0i64);
            *total = total.saturating_add(entry.units);
        }
    }
    totals
}

// =============================================================================
// Unit Tests
// =============================================================================
