//! Finite-difference Greeks estimator.
//!
//! Estimates Delta, Gamma, and Theta by central differences: the lattice
//! pricer is re-invoked under perturbed spot and expiry inputs with every
//! other parameter, including the step count, held fixed. Nothing is
//! cached between calls; the four bumped re-pricings are mutually
//! independent and run in parallel.

use crr_core::types::{PricingError, PricingParams};
use num_traits::Float;

use crate::lattice;

/// Optional overrides for the finite-difference step sizes.
///
/// `None` fields fall back to spot- and expiry-relative defaults:
/// `dS = max(0.01 * S, 1e-4)` and `dT = max(1e-4, 0.001 * T)`.
///
/// # Examples
/// ```
/// use crr_pricing::greeks::BumpConfig;
///
/// let defaults: BumpConfig<f64> = BumpConfig::default();
/// assert!(defaults.spot.is_none());
///
/// let custom = BumpConfig { spot: Some(0.5), time: None };
/// assert_eq!(custom.spot, Some(0.5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BumpConfig<T: Float> {
    /// Spot bump dS; `None` selects `max(0.01 * S, 1e-4)`.
    pub spot: Option<T>,

    /// Time bump dT; `None` selects `max(1e-4, 0.001 * T)`.
    pub time: Option<T>,
}

/// Price and finite-difference sensitivities for one parameter set.
///
/// Values may be non-finite when the underlying computation is
/// ill-conditioned (for example a gamma denominator underflowing); the
/// estimator does not repair such results.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GreeksReport<T: Float> {
    /// Unbumped lattice price.
    pub price: T,

    /// Delta: dV/dS by central difference.
    pub delta: T,

    /// Gamma: d²V/dS² by second-order central difference.
    pub gamma: T,

    /// Theta: dV/dT by central difference in the expiry.
    pub theta: T,
}

/// Estimates Delta, Gamma, and Theta by bump-and-reprice.
///
/// Five lattice evaluations are issued: the base price, spot bumped up
/// and down by dS, and expiry bumped up and down by dT (the bumped-down
/// expiry is floored at 1e-8 so it never reaches an invalid non-positive
/// value). All five use the same step count. Then
///
/// - `delta = (up - down) / (2 * dS)`
/// - `gamma = (up - 2 * base + down) / dS²`
/// - `theta = (up_t - down_t) / (2 * dT)`
///
/// # Errors
/// Propagates any [`PricingError`] from the base or bumped evaluations,
/// including validation failures of the bumped parameter copies (a spot
/// bumped below zero, for instance).
///
/// # Examples
/// ```
/// use crr_core::types::{ExerciseStyle, PayoffType, PricingParams};
/// use crr_pricing::greeks::{greeks, BumpConfig};
///
/// let params = PricingParams::new(
///     100.0_f64, 100.0, 1.0, 0.05, 0.2, 0.0, 200,
///     PayoffType::Call, ExerciseStyle::European,
/// )
/// .unwrap();
///
/// let report = greeks(&params, &BumpConfig::default()).unwrap();
/// assert!(report.delta > 0.0 && report.delta < 1.0);
/// ```
pub fn greeks<T>(
    params: &PricingParams<T>,
    bumps: &BumpConfig<T>,
) -> Result<GreeksReport<T>, PricingError>
where
    T: Float + Send + Sync,
{
    let ds = bumps
        .spot
        .unwrap_or_else(|| (T::from(0.01).unwrap() * params.spot()).max(T::from(1e-4).unwrap()));
    let dt = bumps
        .time
        .unwrap_or_else(|| T::from(1e-4).unwrap().max(T::from(0.001).unwrap() * params.expiry()));

    let base = lattice::price(params)?;

    let spot_up = params.with_spot(params.spot() + ds)?;
    let spot_down = params.with_spot(params.spot() - ds)?;
    let expiry_up = params.with_expiry(params.expiry() + dt)?;
    let expiry_down = params.with_expiry((params.expiry() - dt).max(T::from(1e-8).unwrap()))?;

    let ((up, down), (up_t, down_t)) = rayon::join(
        || {
            rayon::join(
                || lattice::price(&spot_up),
                || lattice::price(&spot_down),
            )
        },
        || {
            rayon::join(
                || lattice::price(&expiry_up),
                || lattice::price(&expiry_down),
            )
        },
    );
    let (up, down, up_t, down_t) = (up?, down?, up_t?, down_t?);

    let two = T::from(2.0).unwrap();
    Ok(GreeksReport {
        price: base,
        delta: (up - down) / (two * ds),
        gamma: (up - two * base + down) / (ds * ds),
        theta: (up_t - down_t) / (two * dt),
    })
}
