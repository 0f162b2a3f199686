//! Implied-volatility solver.
//!
//! Bisects on volatility using the lattice pricer as a black-box
//! valuation function. The solver assumes the option price is
//! monotonically non-decreasing in volatility over the bracket, which
//! holds for vanilla payoffs; beyond the two endpoint evaluations the
//! assumption is not verified.

use crr_core::types::{ImpliedVolError, PricingParams};
use num_traits::Float;

use crate::lattice;

/// Tuning knobs for the implied-volatility bisection.
///
/// # Examples
/// ```
/// use crr_pricing::implied_vol::ImpliedVolConfig;
///
/// let config: ImpliedVolConfig<f64> = ImpliedVolConfig::default();
/// assert_eq!(config.max_iterations, 100);
/// assert_eq!(config.vol_high, 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpliedVolConfig<T: Float> {
    /// Lower volatility bound of the bracket.
    pub vol_low: T,

    /// Upper volatility bound of the bracket.
    pub vol_high: T,

    /// Absolute tolerance on |price(mid) - target| for early success.
    pub tolerance: T,

    /// Maximum bisection iterations before returning the midpoint of the
    /// final interval as a best-effort estimate.
    pub max_iterations: usize,
}

impl<T: Float> Default for ImpliedVolConfig<T> {
    /// Default knobs: bracket `[1e-6, 5]`, tolerance 1e-6, 100 iterations.
    fn default() -> Self {
        Self {
            vol_low: T::from(1e-6).unwrap(),
            vol_high: T::from(5.0).unwrap(),
            tolerance: T::from(1e-6).unwrap(),
            max_iterations: 100,
        }
    }
}

impl<T: Float> ImpliedVolConfig<T> {
    /// Creates a configuration with the given knobs.
    ///
    /// # Panics
    /// Panics if the bracket is empty or inverted, the lower bound is
    /// negative, `tolerance <= 0`, or `max_iterations == 0`.
    pub fn new(vol_low: T, vol_high: T, tolerance: T, max_iterations: usize) -> Self {
        assert!(vol_low >= T::zero(), "vol_low must be non-negative");
        assert!(vol_high > vol_low, "vol_high must exceed vol_low");
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            vol_low,
            vol_high,
            tolerance,
            max_iterations,
        }
    }
}

/// Solves for the volatility reproducing a target market price.
///
/// The volatility field of `params` is ignored; every evaluation prices a
/// copy with the candidate volatility substituted. After the endpoint
/// bracket check, bisection narrows the interval: a midpoint price below
/// the target raises the lower bound, otherwise the upper bound drops to
/// the midpoint. If the iteration budget runs out, the midpoint of the
/// final interval is returned without error; callers needing a guarantee
/// must check the residual themselves.
///
/// # Errors
/// - [`ImpliedVolError::InvalidTarget`] when `target <= 0`
/// - [`ImpliedVolError::NotBracketed`] when the target is outside
///   `[price(vol_low), price(vol_high)]`
/// - [`ImpliedVolError::Pricing`] when a lattice evaluation fails
///
/// # Examples
/// ```
/// use crr_core::types::{ExerciseStyle, PayoffType, PricingParams};
/// use crr_pricing::implied_vol::{implied_volatility, ImpliedVolConfig};
/// use crr_pricing::lattice::price;
///
/// let params = PricingParams::new(
///     100.0_f64, 100.0, 1.0, 0.0, 0.25, 0.0, 100,
///     PayoffType::Call, ExerciseStyle::European,
/// )
/// .unwrap();
///
/// // Round trip: solve back the known volatility from its model price.
/// let target = price(&params).unwrap();
/// let vol = implied_volatility(target, &params, &ImpliedVolConfig::default()).unwrap();
/// assert!((vol - 0.25).abs() < 1e-4);
/// ```
pub fn implied_volatility<T: Float>(
    target: T,
    params: &PricingParams<T>,
    config: &ImpliedVolConfig<T>,
) -> Result<T, ImpliedVolError> {
    if target <= T::zero() {
        return Err(ImpliedVolError::InvalidTarget {
            target: target.to_f64().unwrap_or(f64::NAN),
        });
    }

    let price_at = |vol: T| lattice::price(&params.with_volatility(vol)?);

    let mut low = config.vol_low;
    let mut high = config.vol_high;

    let low_price = price_at(low)?;
    let high_price = price_at(high)?;

    if target < low_price || target > high_price {
        return Err(ImpliedVolError::NotBracketed {
            target: target.to_f64().unwrap_or(f64::NAN),
            low_price: low_price.to_f64().unwrap_or(f64::NAN),
            high_price: high_price.to_f64().unwrap_or(f64::NAN),
        });
    }

    let two = T::from(2.0).unwrap();
    for _ in 0..config.max_iterations {
        let mid = (low + high) / two;
        let mid_price = price_at(mid)?;

        if (mid_price - target).abs() <= config.tolerance {
            return Ok(mid);
        }

        // Price is non-decreasing in volatility over the bracket.
        if mid_price < target {
            low = mid;
        } else {
            high = mid;
        }
    }

    // Iteration budget exhausted: best-effort midpoint, by contract not
    // an error.
    Ok((low + high) / two)
}
