//! CLI command implementations
//!
//! Each submodule implements a specific CLI command; this module holds
//! the argument types shared between them.

pub mod converge;
pub mod greeks;
pub mod implied_vol;
pub mod price;

use clap::{Args, ValueEnum};
use crr_core::types::{ExerciseStyle, PayoffType, PricingParams};

use crate::Result;

/// How results are rendered to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable aligned output
    Table,
    /// Machine-readable JSON
    Json,
}

/// Call/put selector mirrored from the engine's payoff type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PayoffArg {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl From<PayoffArg> for PayoffType {
    fn from(arg: PayoffArg) -> Self {
        match arg {
            PayoffArg::Call => PayoffType::Call,
            PayoffArg::Put => PayoffType::Put,
        }
    }
}

/// Exercise style selector mirrored from the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExerciseArg {
    /// Exercise only at expiry
    European,
    /// Exercise at any time before expiry
    American,
}

impl From<ExerciseArg> for ExerciseStyle {
    fn from(arg: ExerciseArg) -> Self {
        match arg {
            ExerciseArg::European => ExerciseStyle::European,
            ExerciseArg::American => ExerciseStyle::American,
        }
    }
}

/// Market and contract parameters shared by every subcommand.
#[derive(Debug, Args)]
pub struct MarketArgs {
    /// Underlying spot price (S)
    #[arg(long)]
    pub spot: f64,

    /// Strike price (K)
    #[arg(long)]
    pub strike: f64,

    /// Time to expiration in years (T)
    #[arg(long)]
    pub expiry: f64,

    /// Annualised risk-free rate (r)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub rate: f64,

    /// Annualised volatility (sigma)
    #[arg(long)]
    pub volatility: f64,

    /// Continuous dividend yield (q)
    #[arg(long, default_value_t = 0.0)]
    pub dividend_yield: f64,

    /// Number of binomial tree steps (n)
    #[arg(long, default_value_t = 200)]
    pub steps: usize,

    /// Option payoff
    #[arg(long, value_enum, default_value = "call")]
    pub payoff: PayoffArg,

    /// Exercise style
    #[arg(long, value_enum, default_value = "european")]
    pub exercise: ExerciseArg,
}

impl MarketArgs {
    /// Marshals the raw arguments into a validated parameter record.
    pub fn to_params(&self) -> Result<PricingParams<f64>> {
        Ok(PricingParams::new(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            self.dividend_yield,
            self.steps,
            self.payoff.into(),
            self.exercise.into(),
        )?)
    }
}
