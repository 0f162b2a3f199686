//! Converge command implementation
//!
//! Runs the convergence driver and prints the full pricing trail.

use crr_pricing::convergence::{price_with_convergence, ConvergenceConfig};
use serde::Serialize;
use tracing::{info, warn};

use crate::commands::{MarketArgs, OutputFormat};
use crate::{CliError, Result};

#[derive(Serialize)]
struct ConvergeReport {
    price: f64,
    steps: usize,
    converged: bool,
    trail: Vec<(usize, f64)>,
}

/// Run the converge command
#[allow(clippy::too_many_arguments)]
pub fn run(
    market: &MarketArgs,
    n_start: usize,
    n_max: usize,
    tolerance: f64,
    step: usize,
    format: OutputFormat,
) -> Result<()> {
    if n_start == 0 || step == 0 || tolerance <= 0.0 || n_max < n_start + step {
        return Err(CliError::InvalidArgument(format!(
            "convergence knobs must satisfy n_start > 0, step > 0, tolerance > 0, \
             n_max >= n_start + step (got n_start={}, n_max={}, tolerance={}, step={})",
            n_start, n_max, tolerance, step
        )));
    }

    let params = market.to_params()?;
    let config = ConvergenceConfig::new(n_start, n_max, tolerance, step);

    info!(
        "Convergence run from {} to {} steps (increment {}, tolerance {})",
        n_start, n_max, step, tolerance
    );

    let report = price_with_convergence(&params, &config)?;
    if !report.converged {
        warn!("Step cap reached before the tolerance was met");
    }

    match format {
        OutputFormat::Json => {
            let out = ConvergeReport {
                price: report.price,
                steps: report.steps,
                converged: report.converged,
                trail: report.trail,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Table => {
            println!("{:>8}  {:>14}", "steps", "price");
            for (n, price) in &report.trail {
                println!("{:>8}  {:>14.6}", n, price);
            }
            println!();
            println!(
                "Price: {:.6} at {} steps ({})",
                report.price,
                report.steps,
                if report.converged {
                    "converged"
                } else {
                    "step cap reached"
                }
            );
        }
    }

    Ok(())
}
