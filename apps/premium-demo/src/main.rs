//! # Premium Demo
//!
//! Runs the built-in allocation scenarios and prints their input, output and
//! promotion totals for manual inspection.
//!
//! ## Usage
//! ```bash
//! # All scenarios, text
//! cargo run -p premium-demo
//!
//! # One scenario as JSON, with allocation traces on stderr
//! PREMIUM_DEMO_FORMAT=json PREMIUM_DEMO_SCENARIO=7 RUST_LOG=premium_core=trace \
//!     cargo run -p premium-demo
//! ```

mod config;
mod error;
mod render;
mod scenarios;

use std::io::{self, Write};

use premium_core::{distribute_premiums_with_report, AllocationReport};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{DemoConfig, OutputFormat};
use crate::error::{DemoError, DemoResult};
use crate::render::ScenarioOutput;
use crate::scenarios::Scenario;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = DemoConfig::from_env().map_err(DemoError::from)?;
    run(&config, &mut io::stdout().lock())?;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=premium_core=trace` - Show every floor share
/// - Default: INFO, with DEBUG for the premium crates
///
/// Logs go to stderr so stdout stays a clean report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,premium_core=debug,premium_demo=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run<W: Write>(config: &DemoConfig, out: &mut W) -> DemoResult<()> {
    let selected = select_scenarios(config.scenario)?;
    info!(count = selected.len(), format = %config.format, "Running scenarios");

    let reports = selected
        .iter()
        .map(|scenario| {
            distribute_premiums_with_report(&scenario.products).map_err(|source| {
                DemoError::Allocation {
                    scenario: scenario.number,
                    source,
                }
            })
        })
        .collect::<DemoResult<Vec<AllocationReport>>>()?;

    let outputs: Vec<ScenarioOutput<'_>> = selected
        .iter()
        .zip(&reports)
        .map(|(scenario, report)| ScenarioOutput::new(scenario, report))
        .collect();

    match config.format {
        OutputFormat::Text => {
            writeln!(out, "=== Premium Distribution Scenarios ===")?;
            for output in &outputs {
                writeln!(out)?;
                render::write_text(out, output)?;
            }
        }
        OutputFormat::Json => render::write_json(out, &outputs)?,
    }

    Ok(())
}

fn select_scenarios(number: Option<usize>) -> DemoResult<Vec<Scenario>> {
    let all = scenarios::all();
    let available = all.len();

    match number {
        None => Ok(all),
        Some(n) => all
            .into_iter()
            .find(|s| s.number == n)
            .map(|s| vec![s])
            .ok_or(DemoError::UnknownScenario {
                requested: n,
                available,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(config: &DemoConfig) -> DemoResult<String> {
        let mut buf = Vec::new();
        run(config, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_runs_every_scenario_by_default() {
        let text = run_to_string(&DemoConfig::default()).unwrap();
        assert!(text.starts_with("=== Premium Distribution Scenarios ===\n"));
        assert_eq!(text.matches("---\n").count(), 7);
        assert!(text.contains("Scenario 7: 100 Units over 3 Promotions"));
    }

    #[test]
    fn test_single_scenario_json() {
        let config = DemoConfig {
            format: OutputFormat::Json,
            scenario: Some(5),
        };
        let json: serde_json::Value =
            serde_json::from_str(&run_to_string(&config).unwrap()).unwrap();

        let scenarios = json.as_array().unwrap();
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0]["number"], 5);
        assert_eq!(scenarios[0]["report"]["results"][0]["entries"][0]["promotionCode"], 110);
        assert_eq!(scenarios[0]["report"]["results"][1]["entries"][0]["promotionCode"], 111);
    }

    #[test]
    fn test_unknown_scenario() {
        let config = DemoConfig {
            format: OutputFormat::Text,
            scenario: Some(42),
        };
        assert!(matches!(
            run_to_string(&config),
            Err(DemoError::UnknownScenario {
                requested: 42,
                available: 7
            })
        ));
    }
}
