//! Greeks command implementation
//!
//! Estimates Delta, Gamma, and Theta by finite differences.

use crr_pricing::greeks::{greeks, BumpConfig};
use serde::Serialize;
use tracing::info;

use crate::commands::{MarketArgs, OutputFormat};
use crate::Result;

#[derive(Serialize)]
struct GreeksOutput {
    price: f64,
    delta: f64,
    gamma: f64,
    theta: f64,
}

/// Run the greeks command
pub fn run(
    market: &MarketArgs,
    spot_bump: Option<f64>,
    time_bump: Option<f64>,
    format: OutputFormat,
) -> Result<()> {
    let params = market.to_params()?;
    let bumps = BumpConfig {
        spot: spot_bump,
        time: time_bump,
    };

    info!("Estimating Greeks by bump-and-reprice");
    let report = greeks(&params, &bumps)?;

    match format {
        OutputFormat::Json => {
            let out = GreeksOutput {
                price: report.price,
                delta: report.delta,
                gamma: report.gamma,
                theta: report.theta,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Table => {
            println!("Price: {:>12.6}", report.price);
            println!("Delta: {:>12.6}", report.delta);
            println!("Gamma: {:>12.6}", report.gamma);
            println!("Theta: {:>12.6}", report.theta);
        }
    }

    Ok(())
}
