//! # Domain Types
//!
//! Input and output types for premium allocation.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  INPUT (fractional)                  OUTPUT (integer)                   │
//! │  ┌─────────────────────┐             ┌─────────────────────┐            │
//! │  │   ProductRequest    │             │    ProductResult    │            │
//! │  │  ─────────────────  │             │  ─────────────────  │            │
//! │  │  name               │  allocate   │  name               │            │
//! │  │  quantity (i64)     │ ──────────► │  quantity (i64)     │            │
//! │  │  weights[]          │             │  entries[]          │            │
//! │  └─────────┬───────────┘             └─────────┬───────────┘            │
//! │            │                                   │                        │
//! │  ┌─────────▼───────────┐             ┌─────────▼───────────┐            │
//! │  │  PromotionWeight    │             │  AllocationEntry    │            │
//! │  │  code, weight (f64) │             │  code, units (i64)  │            │
//! │  └─────────────────────┘             └─────────────────────┘            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Promotion Code
// =============================================================================

/// Integer identifier of a promotion (premium).
///
/// Codes order numerically; results are always sorted by code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct PromotionCode(i64);

impl PromotionCode {
    #[inline]
    pub const fn new(code: i64) -> Self {
        PromotionCode(code)
    }

    /// Returns the raw code.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PromotionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PromotionCode {
    fn from(code: i64) -> Self {
        PromotionCode(code)
    }
}

// =============================================================================
// Promotion Weight
// =============================================================================

/// A product's fractional claim on one promotion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PromotionWeight {
    pub promotion_code: PromotionCode,
    /// Fractional usage, e.g. `1.5`. Must be finite and non-negative.
    pub weight: f64,
}

impl PromotionWeight {
    pub fn new(code: impl Into<PromotionCode>, weight: f64) -> Self {
        PromotionWeight {
            promotion_code: code.into(),
            weight,
        }
    }
}

// =============================================================================
// Product Request
// =============================================================================

/// One product to allocate, with its fractional promotion weights.
///
/// Weight order matters: the remainder pass hands out leftover units in
/// exactly this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    /// Display name, carried through to the result unchanged.
    pub name: String,

    /// Units to split across the promotions.
    pub quantity: i64,

    /// One entry per promotion code, unique within this product.
    pub weights: Vec<PromotionWeight>,
}

impl ProductRequest {
    /// Creates a request with no weights yet.
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        ProductRequest {
            name: name.into(),
            quantity,
            weights: Vec::new(),
        }
    }

    /// Appends a weight, builder style.
    ///
    /// ## Example
    /// ```rust
    /// use premium_core::ProductRequest;
    ///
    /// let request = ProductRequest::new("A", 3)
    ///     .with_weight(110, 1.5)
    ///     .with_weight(111, 1.5);
    /// assert_eq!(request.weights.len(), 2);
    /// assert_eq!(request.total_weight(), 3.0);
    /// ```
    pub fn with_weight(mut self, code: impl Into<PromotionCode>, weight: f64) -> Self {
        self.weights.push(PromotionWeight::new(code, weight));
        self
    }

    /// Sum of this product's weights, the divisor of the proportional split.
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().map(|w| w.weight).sum()
    }
}

// =============================================================================
// Allocation Entry
// =============================================================================

/// Integer units assigned to one promotion for one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AllocationEntry {
    pub promotion_code: PromotionCode,
    pub units: i64,
}

impl AllocationEntry {
    pub fn new(code: impl Into<PromotionCode>, units: i64) -> Self {
        AllocationEntry {
            promotion_code: code.into(),
            units,
        }
    }
}

// =============================================================================
// Product Result
// =============================================================================

/// The integer allocation for one product.
///
/// Entries are sorted ascending by promotion code and never contain zero
/// units. Their units sum to `quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductResult {
    pub name: String,
    pub quantity: i64,
    pub entries: Vec<AllocationEntry>,
}

impl ProductResult {
    /// Sum of units across all entries.
    pub fn allocated_units(&self) -> i64 {
        self.entries.iter().map(|e| e.units).sum()
    }

    /// Units given to `code`, zero when the code was omitted.
    pub fn units_for(&self, code: impl Into<PromotionCode>) -> i64 {
        let code = code.into();
        self.entries
            .iter()
            .find(|e| e.promotion_code == code)
            .map_or(0, |e| e.units)
    }

    /// Checks the per-product exactness invariant.
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.allocated_units() == self.quantity
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promotion_code_ordering() {
        let mut codes = vec![
            PromotionCode::new(112),
            PromotionCode::new(110),
            PromotionCode::new(111),
        ];
        codes.sort();
        assert_eq!(codes[0].value(), 110);
        assert_eq!(codes[2].to_string(), "112");
    }

    #[test]
    fn test_builder_keeps_weight_order() {
        let request = ProductRequest::new("Laptop", 10)
            .with_weight(303, 2.7)
            .with_weight(301, 4.2);
        assert_eq!(request.weights[0].promotion_code.value(), 303);
        assert_eq!(request.weights[1].promotion_code.value(), 301);
    }

    #[test]
    fn test_result_lookup() {
        let result = ProductResult {
            name: "A".to_string(),
            quantity: 3,
            entries: vec![AllocationEntry::new(110, 2), AllocationEntry::new(111, 1)],
        };
        assert_eq!(result.allocated_units(), 3);
        assert_eq!(result.units_for(110), 2);
        assert_eq!(result.units_for(999), 0);
        assert!(result.is_exact());
    }

    #[test]
    fn test_json_shape() {
        let request = ProductRequest::new("A", 1).with_weight(110, 0.5);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "A",
                "quantity": 1,
                "weights": [{ "promotionCode": 110, "weight": 0.5 }]
            })
        );

        let back: ProductRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, request);
    }
}
