//! crrpricer CLI - Command Line Operations for Binomial Option Pricing
//!
//! Presentation entry point for the crrpricer engine: it marshals command
//! line text into a validated parameter record, invokes the pricing
//! kernel, and renders the numeric results. All numerical logic lives in
//! `crr_pricing`.
//!
//! # Commands
//!
//! - `crrpricer price` - one theoretical lattice price
//! - `crrpricer converge` - re-price at increasing step counts
//! - `crrpricer implied-vol --target <price>` - bisection for volatility
//! - `crrpricer greeks` - Delta/Gamma/Theta by finite differences

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

use commands::{MarketArgs, OutputFormat};

/// Binomial option pricing CLI
#[derive(Parser)]
#[command(name = "crrpricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(long, value_enum, global = true, default_value = "table")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute one theoretical option price
    Price {
        #[command(flatten)]
        market: MarketArgs,
    },

    /// Re-price at increasing step counts until the price stabilises
    Converge {
        #[command(flatten)]
        market: MarketArgs,

        /// Step count of the first pricing call
        #[arg(long, default_value_t = 50)]
        n_start: usize,

        /// Largest step count to price
        #[arg(long, default_value_t = 2000)]
        n_max: usize,

        /// Absolute tolerance on consecutive price changes
        #[arg(long, default_value_t = 1e-4)]
        tolerance: f64,

        /// Step-count increment between pricing calls
        #[arg(long, default_value_t = 50)]
        step: usize,
    },

    /// Solve for the volatility reproducing a market price
    ImpliedVol {
        #[command(flatten)]
        market: MarketArgs,

        /// Observed market price to invert
        #[arg(long)]
        target: f64,

        /// Lower volatility bound
        #[arg(long, default_value_t = 1e-6)]
        vol_low: f64,

        /// Upper volatility bound
        #[arg(long, default_value_t = 5.0)]
        vol_high: f64,

        /// Absolute price tolerance for early success
        #[arg(long, default_value_t = 1e-6)]
        tolerance: f64,

        /// Maximum bisection iterations
        #[arg(long, default_value_t = 100)]
        max_iterations: usize,
    },

    /// Estimate Delta, Gamma, and Theta by bump-and-reprice
    Greeks {
        #[command(flatten)]
        market: MarketArgs,

        /// Spot bump size (defaults to max(1% of spot, 1e-4))
        #[arg(long)]
        spot_bump: Option<f64>,

        /// Time bump size (defaults to max(1e-4, 0.1% of expiry))
        #[arg(long)]
        time_bump: Option<f64>,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price { market } => commands::price::run(&market, cli.format),
        Commands::Converge {
            market,
            n_start,
            n_max,
            tolerance,
            step,
        } => commands::converge::run(&market, n_start, n_max, tolerance, step, cli.format),
        Commands::ImpliedVol {
            market,
            target,
            vol_low,
            vol_high,
            tolerance,
            max_iterations,
        } => commands::implied_vol::run(
            &market,
            target,
            vol_low,
            vol_high,
            tolerance,
            max_iterations,
            cli.format,
        ),
        Commands::Greeks {
            market,
            spot_bump,
            time_bump,
        } => commands::greeks::run(&market, spot_bump, time_bump, cli.format),
    }
}
