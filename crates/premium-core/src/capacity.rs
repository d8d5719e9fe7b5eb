//! # Capacity Module
//!
//! Aggregates fractional demand into integer promotion capacities and tracks
//! what is left of them while products are allocated.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Capacity Pool Lifecycle                            │
//! │                                                                         │
//! │  ProductRequest[] ──► aggregate_capacities ──► CapacityPool (full)      │
//! │                        Σ weight per code                │               │
//! │                        round half away from zero        │               │
//! │                                                         ▼               │
//! │                                product #0 takes ──► pool (less)        │
//! │                                product #1 takes ──► pool (less)        │
//! │                                        ...                              │
//! │                                product #n takes ──► pool (drained)     │
//! │                                                         │               │
//! │                                                         ▼               │
//! │                                               dropped with the call     │
//! │                                                                         │
//! │  Remaining capacity only ever goes DOWN.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use crate::types::{ProductRequest, PromotionCode};

// =============================================================================
// Aggregation
// =============================================================================

/// Sums every product's weight per promotion code and rounds each sum to the
/// nearest integer, halves away from zero.
///
/// ## Example
/// ```rust
/// use premium_core::capacity::aggregate_capacities;
/// use premium_core::{ProductRequest, PromotionCode};
///
/// let products = vec![
///     ProductRequest::new("A", 3).with_weight(110, 1.5).with_weight(111, 1.5),
///     ProductRequest::new("B", 2).with_weight(110, 1.0).with_weight(112, 1.0),
/// ];
///
/// let capacities = aggregate_capacities(&products);
/// assert_eq!(capacities[&PromotionCode::new(110)], 3); // 2.5 → 3
/// assert_eq!(capacities[&PromotionCode::new(111)], 2); // 1.5 → 2
/// assert_eq!(capacities[&PromotionCode::new(112)], 1);
/// ```
pub fn aggregate_capacities(products: &[ProductRequest]) -> BTreeMap<PromotionCode, i64> {
    let mut sums: BTreeMap<PromotionCode, f64> = BTreeMap::new();
    for product in products {
        for weight in &product.weights {
            *sums.entry(weight.promotion_code).or_insert(0.0) += weight.weight;
        }
    }

    sums.into_iter()
        .map(|(code, sum)| (code, round_half_away_from_zero(sum)))
        .collect()
}

/// `f64::round` already rounds halves away from zero: 0.5 → 1, 2.5 → 3.
#[inline]
fn round_half_away_from_zero(value: f64) -> i64 {
    value.round() as i64
}

// =============================================================================
// Capacity Pool
// =============================================================================

/// Remaining integer capacity per promotion code for one allocation call.
///
/// Codes that were never aggregated have zero capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityPool {
    /// Capacity at construction, kept for reporting.
    initial: BTreeMap<PromotionCode, i64>,
    remaining: BTreeMap<PromotionCode, i64>,
}

impl CapacityPool {
    /// Builds a full pool from the aggregated weights of `products`.
    pub fn from_products(products: &[ProductRequest]) -> Self {
        Self::from_capacities(aggregate_capacities(products))
    }

    /// Builds a full pool from precomputed capacities.
    pub fn from_capacities(capacities: BTreeMap<PromotionCode, i64>) -> Self {
        CapacityPool {
            remaining: capacities.clone(),
            initial: capacities,
        }
    }

    /// Capacity the code started with.
    pub fn capacity(&self, code: PromotionCode) -> i64 {
        self.initial.get(&code).copied().unwrap_or(0)
    }

    /// Capacity the code has left.
    pub fn remaining(&self, code: PromotionCode) -> i64 {
        self.remaining.get(&code).copied().unwrap_or(0)
    }

    /// Whether at least one unit of `code` is left.
    #[inline]
    pub fn has_capacity(&self, code: PromotionCode) -> bool {
        self.remaining(code) > 0
    }

    /// Takes up to `units` from `code` and returns how many were taken.
    pub fn take(&mut self, code: PromotionCode, units: i64) -> i64 {
        let Some(left) = self.remaining.get_mut(&code) else {
            return 0;
        };
        let taken = units.min(*left).max(0);
        *left -= taken;
        taken
    }

    /// Takes a single unit if one is left.
    pub fn take_one(&mut self, code: PromotionCode) -> bool {
        self.take(code, 1) == 1
    }

    /// Takes `units` unconditionally and returns the part that exceeded
    /// what was left. The pool bottoms out at zero.
    pub fn force_take(&mut self, code: PromotionCode, units: i64) -> i64 {
        units - self.take(code, units)
    }

    /// All aggregated codes with their starting capacity, ascending by code.
    pub fn capacities(&self) -> impl Iterator<Item = (PromotionCode, i64)> + '_ {
        self.initial.iter().map(|(code, cap)| (*code, *cap))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn code(value: i64) -> PromotionCode {
        PromotionCode::new(value)
    }

    #[test]
    fn test_rounding_halves_away_from_zero() {
        assert_eq!(round_half_away_from_zero(0.5), 1);
        assert_eq!(round_half_away_from_zero(1.5), 2);
        assert_eq!(round_half_away_from_zero(2.5), 3);
        assert_eq!(round_half_away_from_zero(0.49), 0);
        assert_eq!(round_half_away_from_zero(0.0), 0);
    }

    #[test]
    fn test_aggregate_across_products() {
        let products = vec![
            ProductRequest::new("A", 29)
                .with_weight(110, 17.5)
                .with_weight(111, 11.4),
            ProductRequest::new("B", 1)
                .with_weight(110, 0.5)
                .with_weight(111, 0.5),
        ];

        let capacities = aggregate_capacities(&products);
        assert_eq!(capacities.len(), 2);
        assert_eq!(capacities[&code(110)], 18);
        assert_eq!(capacities[&code(111)], 12);
    }

    #[test]
    fn test_unknown_code_has_no_capacity() {
        let mut pool = CapacityPool::from_capacities(BTreeMap::new());
        assert_eq!(pool.remaining(code(42)), 0);
        assert_eq!(pool.capacity(code(42)), 0);
        assert!(!pool.take_one(code(42)));
        assert_eq!(pool.force_take(code(42), 3), 3);
    }

    #[test]
    fn test_take_never_goes_below_zero() {
        let mut pool = CapacityPool::from_capacities(BTreeMap::from([(code(1), 3)]));

        assert_eq!(pool.take(code(1), 2), 2);
        assert_eq!(pool.remaining(code(1)), 1);
        assert_eq!(pool.take(code(1), 5), 1);
        assert_eq!(pool.remaining(code(1)), 0);
        assert!(!pool.has_capacity(code(1)));

        // Starting capacity is kept for reporting.
        assert_eq!(pool.capacity(code(1)), 3);
    }

    #[test]
    fn test_force_take_reports_overflow() {
        let mut pool = CapacityPool::from_capacities(BTreeMap::from([(code(1), 1)]));
        assert_eq!(pool.force_take(code(1), 4), 3);
        assert_eq!(pool.remaining(code(1)), 0);
    }

    #[test]
    fn test_negative_take_is_ignored() {
        let mut pool = CapacityPool::from_capacities(BTreeMap::from([(code(1), 2)]));
        assert_eq!(pool.take(code(1), -5), 0);
        assert_eq!(pool.remaining(code(1)), 2);
    }
}
