//! # Validation Module
//!
//! Input checks run over every request before allocation starts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      All-or-Nothing Validation                          │
//! │                                                                         │
//! │  validate_products(&[ProductRequest])                                   │
//! │       │                                                                 │
//! │       ├── product #0 ── quantity ── weights ── total ── duplicates      │
//! │       ├── product #1 ── ...                                             │
//! │       └── product #n ── ...                                             │
//! │       │                                                                 │
//! │       ├── any failure? → AllocationError::InvalidInput (nothing built)  │
//! │       │                                                                 │
//! │       └── OK → CapacityPool::from_products → allocate                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use crate::error::{AllocationError, AllocationResult, ValidationError};
use crate::types::{ProductRequest, PromotionWeight};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product quantity.
///
/// ## Rules
/// - Must be zero or positive. Zero is allowed and allocates nothing.
///
/// ## Example
/// ```rust
/// use premium_core::validation::validate_quantity;
///
/// assert!(validate_quantity(0).is_ok());
/// assert!(validate_quantity(100).is_ok());
/// assert!(validate_quantity(-1).is_err());
/// ```
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a single promotion weight.
///
/// ## Rules
/// - Must be finite (no NaN, no infinity)
/// - Must be zero or positive
pub fn validate_weight(weight: &PromotionWeight) -> ValidationResult<()> {
    let field = || format!("weight for promotion {}", weight.promotion_code);

    if !weight.weight.is_finite() {
        return Err(ValidationError::MustBeFinite { field: field() });
    }

    if weight.weight < 0.0 {
        return Err(ValidationError::MustBeNonNegative { field: field() });
    }

    Ok(())
}

// =============================================================================
// Product Validators
// =============================================================================

/// Validates one product request.
///
/// ## Rules
/// - Quantity and each weight pass their field validators
/// - Weights must not sum to zero, which also rejects an empty weight list
/// - A promotion code appears at most once
pub fn validate_product(product: &ProductRequest) -> ValidationResult<()> {
    validate_quantity(product.quantity)?;

    let mut seen = HashSet::with_capacity(product.weights.len());
    for weight in &product.weights {
        validate_weight(weight)?;
        if !seen.insert(weight.promotion_code) {
            return Err(ValidationError::Duplicate {
                code: weight.promotion_code,
            });
        }
    }

    if product.total_weight() <= 0.0 {
        return Err(ValidationError::ZeroTotal {
            field: "weights".to_string(),
        });
    }

    Ok(())
}

/// Validates every product, stopping at the first failure.
///
/// The error names the product and its position in the input.
pub fn validate_products(products: &[ProductRequest]) -> AllocationResult<()> {
    for (index, product) in products.iter().enumerate() {
        validate_product(product).map_err(|source| AllocationError::InvalidInput {
            product: product.name.clone(),
            index,
            source,
        })?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
