//! Text and JSON rendering of scenario reports.
//!
//! Rendering only reads reports; every number printed comes from
//! `premium-core`.

use std::io::{self, Write};

use premium_core::{AllocationReport, ProductRequest};
use serde::Serialize;

use crate::scenarios::Scenario;

/// One scenario's input and report, as written in JSON mode.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioOutput<'a> {
    pub number: usize,
    pub title: &'a str,
    pub input: &'a [ProductRequest],
    pub report: &'a AllocationReport,
}

impl<'a> ScenarioOutput<'a> {
    pub fn new(scenario: &'a Scenario, report: &'a AllocationReport) -> Self {
        ScenarioOutput {
            number: scenario.number,
            title: scenario.title,
            input: &scenario.products,
            report,
        }
    }
}

/// Writes the input, per-product output and promotion totals of one scenario.
pub fn write_text<W: Write>(out: &mut W, output: &ScenarioOutput<'_>) -> io::Result<()> {
    writeln!(out, "Scenario {}: {}", output.number, output.title)?;

    writeln!(out, "Input:")?;
    for product in output.input {
        writeln!(out, "  Product: {}, Qty: {}", product.name, product.quantity)?;
        for weight in &product.weights {
            writeln!(
                out,
                "    PromotionCode: {}, Weight: {}",
                weight.promotion_code, weight.weight
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Output:")?;
    for result in &output.report.results {
        writeln!(out, "  Product: {}, Qty: {}", result.name, result.quantity)?;
        for entry in &result.entries {
            writeln!(
                out,
                "    PromotionCode: {}, Units: {}",
                entry.promotion_code, entry.units
            )?;
        }
        writeln!(
            out,
            "    Total Units: {} (quantity {})",
            result.allocated_units(),
            result.quantity
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Promotion Totals:")?;
    for usage in &output.report.usage {
        writeln!(
            out,
            "  PromotionCode {}: {} of {}",
            usage.promotion_code, usage.allocated, usage.capacity
        )?;
    }

    if output.report.is_oversubscribed() {
        writeln!(out)?;
        writeln!(out, "Oversubscribed:")?;
        for o in &output.report.oversubscriptions {
            writeln!(
                out,
                "  {}: PromotionCode {} +{}",
                o.product, o.promotion_code, o.units
            )?;
        }
    }

    writeln!(out, "---")
}

/// Writes all scenario outputs as one pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, outputs: &[ScenarioOutput<'_>]) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, outputs)?;
    writeln!(out).map_err(serde_json::Error::io)
}
