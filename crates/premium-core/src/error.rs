//! # Error Types
//!
//! Domain-specific error types for premium-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  premium-core errors (this file)                                       │
//! │  ├── AllocationError  - Call-level failures (aborts before any work)   │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  premium-demo errors (app)                                             │
//! │  └── DemoError        - Config, rendering, output failures             │
//! │                                                                         │
//! │  Flow: ValidationError → AllocationError → DemoError → stderr          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Running out of promotion capacity is NOT an error. The allocator absorbs it
//! through the correction step and records an
//! [`Oversubscription`](crate::report::Oversubscription) instead.

use thiserror::Error;

use crate::types::PromotionCode;

// =============================================================================
// Allocation Error
// =============================================================================

/// Errors that abort a whole allocation call.
///
/// Every variant is raised before the capacity pool is built, so a failed
/// call never leaves partial results behind.
#[derive(Debug, Error)]
pub enum AllocationError {
    /// A product request is malformed.
    ///
    /// ## When This Occurs
    /// - Quantity is negative
    /// - A weight is negative, NaN or infinite
    /// - The weights sum to zero (no proportional split exists)
    /// - The same promotion code appears twice in one product
    #[error("Invalid input for product '{product}' (#{index}): {source}")]
    InvalidInput {
        product: String,
        index: usize,
        #[source]
        source: ValidationError,
    },
}

impl AllocationError {
    /// Returns the underlying validation failure.
    pub fn validation(&self) -> &ValidationError {
        match self {
            AllocationError::InvalidInput { source, .. } => source,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation before any capacity is aggregated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value must be a finite number.
    #[error("{field} must be a finite number")]
    MustBeFinite { field: String },

    /// A sum that is used as a divisor is zero.
    #[error("{field} must not sum to zero")]
    ZeroTotal { field: String },

    /// Duplicate promotion code within one product.
    #[error("promotion code {code} appears more than once")]
    Duplicate { code: PromotionCode },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with AllocationError.
pub type AllocationResult<T> = Result<T, AllocationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AllocationError::InvalidInput {
            product: "Laptop".to_string(),
            index: 2,
            source: ValidationError::ZeroTotal {
                field: "weights".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "Invalid input for product 'Laptop' (#2): weights must not sum to zero"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must not be negative");

        let err = ValidationError::Duplicate {
            code: PromotionCode::new(110),
        };
        assert_eq!(err.to_string(), "promotion code 110 appears more than once");
    }

    #[test]
    fn test_validation_accessor() {
        let err = AllocationError::InvalidInput {
            product: "A".to_string(),
            index: 0,
            source: ValidationError::MustBeFinite {
                field: "weight for promotion 7".to_string(),
            },
        };
        assert!(matches!(
            err.validation(),
            ValidationError::MustBeFinite { .. }
        ));
    }
}
