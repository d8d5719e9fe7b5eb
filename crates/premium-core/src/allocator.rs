//! # Allocator Module
//!
//! Turns each product's fractional promotion weights into integer units that
//! sum exactly to the product's quantity, drawing on a shared capacity pool.
//!
//! ## Per-Product Passes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product: qty 100, weights [110: 33.33, 111: 33.33, 112: 33.33]        │
//! │                                                                         │
//! │  1. FLOOR PASS        raw = weight / Σweight × qty                      │
//! │                       floor(raw), clamp to pool, take from pool         │
//! │                       → 33 / 33 / 33   (sum 99, needed 1)               │
//! │                                                                         │
//! │  2. REMAINDER PASS    sweep entries IN INPUT ORDER, +1 unit each        │
//! │                       while the pool has capacity for that code         │
//! │                       → pool empty, nothing granted                     │
//! │                                                                         │
//! │  3. CORRECTION        deficit 1 → entry with the largest                │
//! │                       (pool remaining + units), first one on ties       │
//! │                       → 34 / 33 / 33   (110 oversubscribed by 1)        │
//! │                                                                         │
//! │  4. ASSEMBLY          drop zero units, sort by promotion code           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are processed strictly in input order. Whatever an earlier product
//! takes from the pool is gone for every later one, so reordering the input
//! can change who gets scarce capacity.

use tracing::{debug, trace, warn};

use crate::capacity::CapacityPool;
use crate::error::AllocationResult;
use crate::report::{AllocationReport, Oversubscription};
use crate::types::{AllocationEntry, ProductRequest, ProductResult, PromotionCode};
use crate::validation::validate_products;

// =============================================================================
// Entry Points
// =============================================================================

/// Allocates integer promotion units for every product.
///
/// Returns one [`ProductResult`] per request, in input order. Fails with
/// [`AllocationError::InvalidInput`](crate::AllocationError::InvalidInput)
/// before any allocation when a request is malformed.
///
/// ## Example
/// ```rust
/// use premium_core::{distribute_premiums, ProductRequest};
///
/// let products = vec![
///     ProductRequest::new("A", 3).with_weight(110, 1.5).with_weight(111, 1.5),
///     ProductRequest::new("B", 2).with_weight(110, 1.0).with_weight(112, 1.0),
/// ];
///
/// let results = distribute_premiums(&products).unwrap();
/// assert_eq!(results[0].units_for(110), 2);
/// assert_eq!(results[0].units_for(111), 1);
/// assert_eq!(results[1].units_for(110), 1);
/// assert_eq!(results[1].units_for(112), 1);
/// ```
pub fn distribute_premiums(products: &[ProductRequest]) -> AllocationResult<Vec<ProductResult>> {
    Ok(distribute_premiums_with_report(products)?.results)
}

/// Same as [`distribute_premiums`], plus per-promotion usage and a record of
/// every oversubscription the correction step made.
pub fn distribute_premiums_with_report(
    products: &[ProductRequest],
) -> AllocationResult<AllocationReport> {
    validate_products(products)?;

    let mut pool = CapacityPool::from_products(products);
    let mut results = Vec::with_capacity(products.len());
    let mut oversubscriptions = Vec::new();

    for (index, product) in products.iter().enumerate() {
        let (result, forced) = allocate_product(product, &mut pool);

        if let Some((code, units)) = forced {
            warn!(
                product = %product.name,
                promotion = %code,
                units,
                "Promotion capacity oversubscribed to keep product quantity exact"
            );
            oversubscriptions.push(Oversubscription {
                product: product.name.clone(),
                product_index: index,
                promotion_code: code,
                units,
            });
        }

        results.push(result);
    }

    debug!(
        products = results.len(),
        oversubscribed = oversubscriptions.len(),
        "Allocation complete"
    );

    Ok(AllocationReport::new(results, &pool, oversubscriptions))
}

// =============================================================================
// Per-Product Allocation
// =============================================================================

/// Working state for one weight entry of the product being allocated.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Slot {
    code: PromotionCode,
    units: i64,
    /// Fractional part dropped by the floor pass; zero when clamped.
    remainder: f64,
}

/// Runs the floor, remainder and correction passes for one validated product.
///
/// Returns the result and, when the correction step went past the pool, the
/// code and the number of units beyond its remaining capacity.
fn allocate_product(
    product: &ProductRequest,
    pool: &mut CapacityPool,
) -> (ProductResult, Option<(PromotionCode, i64)>) {
    let mut slots = floor_pass(product, pool);
    let floor_sum = total_units(&slots);
    let needed = product.quantity - floor_sum;
    let fractions: f64 = slots.iter().map(|s| s.remainder).sum();

    debug!(
        product = %product.name,
        quantity = product.quantity,
        floor_sum,
        needed,
        fractions,
        "Floor pass complete"
    );

    let unplaced = remainder_pass(&mut slots, needed, pool);
    if unplaced > 0 {
        debug!(
            product = %product.name,
            unplaced,
            "Remainder pass ran out of promotion capacity"
        );
    }

    let forced = correct_deficit(&mut slots, product.quantity, pool);

    (assemble(product, &slots), forced)
}

/// Proportional split rounded down, clamped to what the pool still holds.
///
/// The floor units are taken from the pool here, not just the remainder
/// grants, so a later product only sees capacity left after earlier floors.
/// With `A 29 [110: 17.5, 111: 11.4]` then `B 1 [110: 0.5, 111: 0.5]`, A's
/// floors and extra unit drain 110 and B lands on 111.
fn floor_pass(product: &ProductRequest, pool: &mut CapacityPool) -> Vec<Slot> {
    let total = product.total_weight();
    let quantity = product.quantity as f64;

    let mut slots = Vec::with_capacity(product.weights.len());
    for weight in &product.weights {
        let code = weight.promotion_code;
        let raw = (weight.weight / total) * quantity;
        let floor = raw.floor();

        let mut units = floor as i64;
        let mut remainder = raw - floor;

        let available = pool.remaining(code);
        if units > available {
            units = available;
            remainder = 0.0;
        }
        pool.take(code, units);

        trace!(promotion = %code, raw, units, remainder, "Floor share");
        slots.push(Slot {
            code,
            units,
            remainder,
        });
    }
    slots
}

/// Hands out `needed` units one at a time, sweeping slots in input order.
///
/// Stops early when a full sweep grants nothing. Returns the units that
/// could not be placed.
fn remainder_pass(slots: &mut [Slot], mut needed: i64, pool: &mut CapacityPool) -> i64 {
    while needed > 0 {
        let mut granted = false;

        for slot in slots.iter_mut() {
            if needed == 0 {
                break;
            }
            if pool.take_one(slot.code) {
                slot.units += 1;
                needed -= 1;
                granted = true;
            }
        }

        if !granted {
            break;
        }
    }
    needed.max(0)
}

/// Forces the slot sum to `quantity` by adjusting a single slot.
///
/// A shortfall goes to the slot with the most (pool remaining + units). An
/// excess comes off the slot with the most units. Returns the code and the
/// overflow units when a shortfall could not be covered by the pool.
fn correct_deficit(
    slots: &mut [Slot],
    quantity: i64,
    pool: &mut CapacityPool,
) -> Option<(PromotionCode, i64)> {
    let allocated = total_units(slots);
    let deficit = quantity - allocated;

    if deficit > 0 {
        let best =
            first_max_by_key(slots, |s| pool.remaining(s.code).saturating_add(s.units))?;
        let slot = &mut slots[best];
        slot.units += deficit;

        let overflow = pool.force_take(slot.code, deficit);
        (overflow > 0).then_some((slot.code, overflow))
    } else if deficit < 0 {
        let best = first_max_by_key(slots, |s| s.units)?;
        slots[best].units += deficit;
        debug!(promotion = %slots[best].code, excess = -deficit, "Trimmed excess units");
        None
    } else {
        None
    }
}

/// Sum of slot units, saturating at `i64::MAX`.
fn total_units(slots: &[Slot]) -> i64 {
    slots.iter().fold(0i64, |acc, s| acc.saturating_add(s.units))
}

/// Index of the slot with the largest key; the earliest slot wins ties.
fn first_max_by_key(slots: &[Slot], key: impl Fn(&Slot) -> i64) -> Option<usize> {
    // max_by_key keeps the last maximum, so walk backwards.
    slots
        .iter()
        .enumerate()
        .rev()
        .max_by_key(|(_, slot)| key(slot))
        .map(|(index, _)| index)
}

/// Drops zero-unit slots and sorts the rest by promotion code.
fn assemble(product: &ProductRequest, slots: &[Slot]) -> ProductResult {
    let mut entries: Vec<AllocationEntry> = slots
        .iter()
        .filter(|s| s.units > 0)
        .map(|s| AllocationEntry {
            promotion_code: s.code,
            units: s.units,
        })
        .collect();
    entries.sort_by_key(|e| e.promotion_code);

    ProductResult {
        name: product.name.clone(),
        quantity: product.quantity,
        entries,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
