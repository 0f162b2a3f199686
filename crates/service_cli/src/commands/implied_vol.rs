//! Implied-vol command implementation
//!
//! Inverts an observed market price to the volatility that reproduces it.

use crr_pricing::implied_vol::{implied_volatility, ImpliedVolConfig};
use serde::Serialize;
use tracing::info;

use crate::commands::{MarketArgs, OutputFormat};
use crate::{CliError, Result};

#[derive(Serialize)]
struct ImpliedVolReport {
    implied_volatility: f64,
    target: f64,
    residual: f64,
}

/// Run the implied-vol command
pub fn run(
    market: &MarketArgs,
    target: f64,
    vol_low: f64,
    vol_high: f64,
    tolerance: f64,
    max_iterations: usize,
    format: OutputFormat,
) -> Result<()> {
    if vol_low < 0.0 || vol_high <= vol_low || tolerance <= 0.0 || max_iterations == 0 {
        return Err(CliError::InvalidArgument(format!(
            "solver knobs must satisfy 0 <= vol_low < vol_high, tolerance > 0, \
             max_iterations > 0 (got vol_low={}, vol_high={}, tolerance={}, max_iterations={})",
            vol_low, vol_high, tolerance, max_iterations
        )));
    }

    let params = market.to_params()?;
    let config = ImpliedVolConfig::new(vol_low, vol_high, tolerance, max_iterations);

    info!(
        "Solving implied volatility for target {} in [{}, {}]",
        target, vol_low, vol_high
    );

    let vol = implied_volatility(target, &params, &config)?;

    // Residual of the final estimate, reported so callers can judge a
    // best-effort result returned after iteration exhaustion.
    let residual =
        (crr_pricing::lattice::price(&params.with_volatility(vol)?)? - target).abs();

    match format {
        OutputFormat::Json => {
            let report = ImpliedVolReport {
                implied_volatility: vol,
                target,
                residual,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => {
            println!("Implied volatility: {:.6}", vol);
            println!("Residual price error: {:.2e}", residual);
        }
    }

    Ok(())
}
