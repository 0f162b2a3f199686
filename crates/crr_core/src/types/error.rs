//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: errors from parameter validation and lattice pricing
//! - `ImpliedVolError`: errors from the implied-volatility solver
//!
//! All errors are raised synchronously at the point of detection and
//! propagate to the caller unchanged; no component retries internally or
//! formats error text for display.

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for parameter validation and
/// lattice pricing with the offending values attached.
///
/// # Variants
/// - `InvalidParameter`: a parameter field violates its domain constraint
/// - `DegenerateTree`: up/down factors collapse to a single branch
/// - `ArbitrageViolation`: risk-neutral probability outside `[0, 1]`
///
/// # Examples
/// ```
/// use crr_core::types::PricingError;
///
/// let err = PricingError::InvalidParameter {
///     field: "spot",
///     value: -100.0,
///     constraint: "must be positive",
/// };
/// assert!(format!("{}", err).contains("spot"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// A parameter field violates its stated domain.
    #[error("Invalid parameter {field} = {value}: {constraint}")]
    InvalidParameter {
        /// Name of the violating field
        field: &'static str,
        /// The rejected value
        value: f64,
        /// The constraint that was violated
        constraint: &'static str,
    },

    /// Up and down factors are equal, so the tree has no branching.
    ///
    /// Only reachable with zero volatility. Not recoverable within the
    /// pricer; the caller must increase the step count or the volatility.
    #[error(
        "Degenerate tree: up factor equals down factor (sigma = {volatility}, n = {steps}); \
         increase steps or volatility"
    )]
    DegenerateTree {
        /// The volatility that produced the collapse
        volatility: f64,
        /// The step count in effect
        steps: usize,
    },

    /// Risk-neutral probability fell outside `[0, 1]`.
    ///
    /// Signals an inconsistent rate/dividend/volatility/step-size
    /// combination, not recoverable numeric fuzz. The probability is
    /// never clamped.
    #[error("Arbitrage violation: risk-neutral probability {probability} outside [0, 1]")]
    ArbitrageViolation {
        /// The out-of-bounds probability
        probability: f64,
    },
}

/// Implied-volatility solver errors.
///
/// # Variants
/// - `InvalidTarget`: non-positive target market price
/// - `NotBracketed`: target price outside the achievable range at the
///   configured volatility bounds
/// - `Pricing`: a lattice evaluation inside the solver failed
///
/// # Examples
/// ```
/// use crr_core::types::ImpliedVolError;
///
/// let err = ImpliedVolError::InvalidTarget { target: -1.0 };
/// assert_eq!(format!("{}", err), "Invalid target price: -1 (must be positive)");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ImpliedVolError {
    /// Target market price is not positive.
    #[error("Invalid target price: {target} (must be positive)")]
    InvalidTarget {
        /// The rejected target price
        target: f64,
    },

    /// Target price is not within `[price(vol_low), price(vol_high)]`.
    ///
    /// The bracket check assumes price is monotonically non-decreasing in
    /// volatility over the bracket; the solver does not verify
    /// monotonicity beyond the two endpoint evaluations.
    #[error(
        "Target price {target} not bracketed: achievable range is \
         [{low_price}, {high_price}] at the configured volatility bounds"
    )]
    NotBracketed {
        /// The requested target price
        target: f64,
        /// Model price at the low volatility bound
        low_price: f64,
        /// Model price at the high volatility bound
        high_price: f64,
    },

    /// A lattice pricing call issued by the solver failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}
