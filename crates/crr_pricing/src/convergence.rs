//! Convergence driver: re-price at increasing step counts.
//!
//! Repeatedly invokes the lattice pricer at a growing number of tree
//! steps, recording each `(steps, price)` pair, until the price change
//! between consecutive step counts falls within tolerance or the step
//! cap is reached. Hitting the cap is a soft degradation reported through
//! [`ConvergenceReport::converged`], not an error.

use crr_core::types::{PricingError, PricingParams};
use num_traits::Float;

use crate::lattice;

/// Tuning knobs for the convergence driver.
///
/// # Examples
/// ```
/// use crr_pricing::convergence::ConvergenceConfig;
///
/// let config: ConvergenceConfig<f64> = ConvergenceConfig::default();
/// assert_eq!(config.n_start, 50);
/// assert_eq!(config.n_max, 2000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceConfig<T: Float> {
    /// Step count of the first pricing call.
    pub n_start: usize,

    /// Largest step count that will be priced.
    pub n_max: usize,

    /// Absolute tolerance on the price change between consecutive
    /// step counts.
    pub tolerance: T,

    /// Step-count increment between consecutive pricing calls.
    pub step: usize,
}

impl<T: Float> Default for ConvergenceConfig<T> {
    /// Default knobs: start at 50 steps, cap at 2000, tolerance 1e-4,
    /// increment 50.
    fn default() -> Self {
        Self {
            n_start: 50,
            n_max: 2000,
            tolerance: T::from(1e-4).unwrap(),
            step: 50,
        }
    }
}

impl<T: Float> ConvergenceConfig<T> {
    /// Creates a configuration with the given knobs.
    ///
    /// # Panics
    /// Panics if `n_start == 0`, `step == 0`, `tolerance <= 0`, or the
    /// cap does not leave room for at least one increment beyond the
    /// starting step count (the driver always prices at least twice).
    pub fn new(n_start: usize, n_max: usize, tolerance: T, step: usize) -> Self {
        assert!(n_start > 0, "n_start must be positive");
        assert!(step > 0, "step must be positive");
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(
            n_max >= n_start + step,
            "n_max must allow at least one increment beyond n_start"
        );
        Self {
            n_start,
            n_max,
            tolerance,
            step,
        }
    }
}

/// Outcome of a convergence run.
///
/// The trail holds every `(steps, price)` pair in insertion order, step
/// counts strictly increasing by the configured increment. It is
/// reporting output only; the driver never re-consumes it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConvergenceReport<T: Float> {
    /// The last computed price.
    pub price: T,

    /// The step count of the last pricing call.
    pub steps: usize,

    /// Every `(steps, price)` pair computed, in increasing step order.
    pub trail: Vec<(usize, T)>,

    /// Whether the tolerance was met before the step cap.
    ///
    /// `false` means the cap was reached first; the price is still the
    /// best available estimate and callers decide how to interpret it.
    pub converged: bool,
}

/// Prices at increasing step counts until the price stabilises.
///
/// Starting at `config.n_start`, prices the parameter set and then
/// re-prices every `config.step` additional tree steps. As soon as two
/// consecutive prices differ by at most `config.tolerance` in absolute
/// value, the run stops and reports convergence. If the cap `config.n_max`
/// is exhausted first, the last price is returned with
/// [`ConvergenceReport::converged`] set to `false`.
///
/// # Errors
/// Propagates any [`PricingError`] raised by the lattice pricer.
///
/// # Examples
/// ```
/// use crr_core::types::{ExerciseStyle, PayoffType, PricingParams};
/// use crr_pricing::convergence::{price_with_convergence, ConvergenceConfig};
///
/// let params = PricingParams::new(
///     100.0_f64, 100.0, 1.0, 0.05, 0.2, 0.0, 200,
///     PayoffType::Call, ExerciseStyle::European,
/// )
/// .unwrap();
///
/// let report = price_with_convergence(&params, &ConvergenceConfig::default()).unwrap();
/// assert_eq!(report.trail[0].0, 50);
/// assert!(report.price > 0.0);
/// ```
pub fn price_with_convergence<T: Float>(
    params: &PricingParams<T>,
    config: &ConvergenceConfig<T>,
) -> Result<ConvergenceReport<T>, PricingError> {
    let mut trail = Vec::new();

    let mut n = config.n_start;
    let mut last = lattice::price(&params.with_steps(n)?)?;
    trail.push((n, last));

    while n + config.step <= config.n_max {
        n += config.step;
        let current = lattice::price(&params.with_steps(n)?)?;
        trail.push((n, current));

        if (current - last).abs() <= config.tolerance {
            return Ok(ConvergenceReport {
                price: current,
                steps: n,
                trail,
                converged: true,
            });
        }
        last = current;
    }

    Ok(ConvergenceReport {
        price: last,
        steps: n,
        trail,
        converged: false,
    })
}
