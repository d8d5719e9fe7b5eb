//! Built-in demonstration scenarios.
//!
//! Each scenario is a literal list of product requests; numbering starts at 1
//! and matches `PREMIUM_DEMO_SCENARIO`.

use premium_core::ProductRequest;

/// A named set of product requests.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub number: usize,
    pub title: &'static str,
    pub products: Vec<ProductRequest>,
}

/// All scenarios, in run order.
pub fn all() -> Vec<Scenario> {
    let builders: [(&'static str, fn() -> Vec<ProductRequest>); 7] = [
        ("Basic Distribution", basic_distribution),
        ("Multiple Products with Different Quantities", multiple_products),
        ("Complex Distribution", complex_distribution),
        ("Edge Case with Small Quantities", small_quantities),
        ("Two Half-Weighted Products", half_weighted),
        ("Large Quantity Distribution", large_quantity),
        ("100 Units over 3 Promotions", equal_thirds),
    ];

    builders
        .into_iter()
        .enumerate()
        .map(|(i, (title, build))| Scenario {
            number: i + 1,
            title,
            products: build(),
        })
        .collect()
}

fn basic_distribution() -> Vec<ProductRequest> {
    vec![
        ProductRequest::new("A", 3)
            .with_weight(110, 1.5)
            .with_weight(111, 1.5),
        ProductRequest::new("B", 2)
            .with_weight(110, 1.0)
            .with_weight(112, 1.0),
    ]
}

fn multiple_products() -> Vec<ProductRequest> {
    vec![
        ProductRequest::new("Product1", 5)
            .with_weight(201, 2.3)
            .with_weight(202, 1.7)
            .with_weight(203, 1.0),
        ProductRequest::new("Product2", 3)
            .with_weight(201, 1.5)
            .with_weight(204, 1.5),
        ProductRequest::new("Product3", 2)
            .with_weight(202, 1.2)
            .with_weight(203, 0.8),
    ]
}

fn complex_distribution() -> Vec<ProductRequest> {
    vec![
        ProductRequest::new("Laptop", 10)
            .with_weight(301, 4.2)
            .with_weight(302, 3.1)
            .with_weight(303, 2.7),
        ProductRequest::new("Mouse", 8)
            .with_weight(301, 2.8)
            .with_weight(304, 3.2)
            .with_weight(305, 2.0),
        ProductRequest::new("Keyboard", 6)
            .with_weight(302, 2.5)
            .with_weight(303, 1.8)
            .with_weight(305, 1.7),
    ]
}

fn small_quantities() -> Vec<ProductRequest> {
    vec![
        ProductRequest::new("Small", 1)
            .with_weight(401, 0.3)
            .with_weight(402, 0.7),
        ProductRequest::new("Tiny", 1)
            .with_weight(401, 0.4)
            .with_weight(403, 0.6),
    ]
}

fn half_weighted() -> Vec<ProductRequest> {
    vec![
        ProductRequest::new("A", 1)
            .with_weight(110, 0.5)
            .with_weight(111, 0.5),
        ProductRequest::new("B", 1)
            .with_weight(110, 0.5)
            .with_weight(111, 0.5),
    ]
}

fn large_quantity() -> Vec<ProductRequest> {
    vec![
        ProductRequest::new("A", 29)
            .with_weight(110, 17.5)
            .with_weight(111, 11.4),
        ProductRequest::new("B", 1)
            .with_weight(110, 0.5)
            .with_weight(111, 0.5),
    ]
}

fn equal_thirds() -> Vec<ProductRequest> {
    vec![ProductRequest::new("A", 100)
        .with_weight(110, 33.33)
        .with_weight(111, 33.33)
        .with_weight(112, 33.33)]
}
