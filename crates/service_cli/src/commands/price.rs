//! Price command implementation
//!
//! Computes a single theoretical option price with the lattice pricer.

use serde::Serialize;
use tracing::info;

use crate::commands::{MarketArgs, OutputFormat};
use crate::Result;

#[derive(Serialize)]
struct PriceReport {
    price: f64,
    steps: usize,
}

/// Run the price command
pub fn run(market: &MarketArgs, format: OutputFormat) -> Result<()> {
    let params = market.to_params()?;
    info!(
        "Pricing {:?} {:?} option at {} steps",
        params.exercise(),
        params.payoff(),
        params.steps()
    );

    let price = crr_pricing::lattice::price(&params)?;

    match format {
        OutputFormat::Json => {
            let report = PriceReport {
                price,
                steps: params.steps(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => {
            println!("Price: {:.6}", price);
        }
    }

    Ok(())
}
