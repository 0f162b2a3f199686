//! Cox-Ross-Rubinstein binomial lattice pricer.
//!
//! Prices a single European or American vanilla option by backward
//! induction over the recombining CRR tree. Only the current value layer
//! is materialised; node values are overwritten in place from the
//! terminal layer down to the root.

use crr_core::types::{PricingError, PricingParams};
use num_traits::Float;

/// Computes the theoretical option price for a validated parameter set.
///
/// # Algorithm
///
/// 1. `dt = T / n`, `discount = exp(-r * dt)`.
/// 2. Up/down factors `u = exp(sigma * sqrt(dt))` (1 when sigma is zero)
///    and `d = 1 / u`. A collapsed tree (`u == d`) is rejected.
/// 3. Risk-neutral probability `p = (exp((r - q) * dt) - d) / (u - d)`,
///    rejected without clamping when outside `[0, 1]`.
/// 4. Terminal payoffs at `S * u^j * d^(n-j)` for `j` in `0..=n`.
/// 5. Backward induction: each node becomes the discounted expectation of
///    its two children; American nodes additionally take the maximum
///    against their own intrinsic exercise value at `S * u^j * d^(i-j)`.
/// 6. The root value is the price.
///
/// All arithmetic is in the floating-point type `T` (double precision for
/// `f64`); powers are computed directly per node rather than accumulated
/// iteratively.
///
/// # Errors
/// - [`PricingError::DegenerateTree`] when the up and down factors are
///   equal (only reachable with zero volatility)
/// - [`PricingError::ArbitrageViolation`] when the risk-neutral
///   probability falls outside `[0, 1]`
///
/// # Examples
/// ```
/// use crr_core::types::{ExerciseStyle, PayoffType, PricingParams};
/// use crr_pricing::lattice::price;
///
/// let params = PricingParams::new(
///     100.0_f64, 100.0, 1.0, 0.05, 0.2, 0.0, 200,
///     PayoffType::Call, ExerciseStyle::European,
/// )
/// .unwrap();
///
/// let value = price(&params).unwrap();
/// assert!(value > 0.0);
/// ```
pub fn price<T: Float>(params: &PricingParams<T>) -> Result<T, PricingError> {
    let n = params.steps();
    let one = T::one();
    let zero = T::zero();

    let dt = params.expiry() / T::from(n).unwrap();
    let discount = (-params.rate() * dt).exp();

    let u = if params.volatility() > zero {
        (params.volatility() * dt.sqrt()).exp()
    } else {
        one
    };
    let d = one / u;

    if u == d {
        return Err(PricingError::DegenerateTree {
            volatility: params.volatility().to_f64().unwrap_or(f64::NAN),
            steps: n,
        });
    }

    let growth = ((params.rate() - params.dividend_yield()) * dt).exp();
    let p = (growth - d) / (u - d);
    if p < zero || p > one {
        return Err(PricingError::ArbitrageViolation {
            probability: p.to_f64().unwrap_or(f64::NAN),
        });
    }
    let q = one - p;

    let spot = params.spot();
    let strike = params.strike();
    let payoff = params.payoff();
    let american = params.exercise().is_american();

    // Terminal layer: payoff at S * u^j * d^(n-j).
    let mut values: Vec<T> = (0..=n)
        .map(|j| {
            let asset = spot * u.powi(j as i32) * d.powi((n - j) as i32);
            payoff.intrinsic(asset, strike)
        })
        .collect();

    // Backward induction, overwriting the layer in place. values[j] and
    // values[j+1] still hold the next layer when node (i, j) is computed.
    for i in (0..n).rev() {
        for j in 0..=i {
            let continuation = discount * (p * values[j + 1] + q * values[j]);
            values[j] = if american {
                let asset = spot * u.powi(j as i32) * d.powi((i - j) as i32);
                continuation.max(payoff.intrinsic(asset, strike))
            } else {
                continuation
            };
        }
    }

    Ok(values[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crr_core::types::{ExerciseStyle, PayoffType};

    fn params(
        volatility: f64,
        dividend_yield: f64,
        steps: usize,
        payoff: PayoffType,
        exercise: ExerciseStyle,
    ) -> PricingParams<f64> {
        PricingParams::new(
            100.0, 100.0, 1.0, 0.05, volatility, dividend_yield, steps, payoff, exercise,
        )
        .unwrap()
    }

    // ==========================================================
    // Error Condition Tests
    // ==========================================================

    #[test]
    fn test_zero_volatility_degenerate_tree() {
        let p = params(0.0, 0.0, 100, PayoffType::Call, ExerciseStyle::European);
        let err = price(&p).unwrap_err();
        assert!(matches!(err, PricingError::DegenerateTree { steps: 100, .. }));
    }

    #[test]
    fn test_arbitrage_violation_not_clamped() {
        // sigma * sqrt(dt) far below (r - q) * dt pushes p above 1.
        let p = PricingParams::new(
            100.0_f64,
            100.0,
            1.0,
            0.5,
            1e-6,
            0.0,
            100,
            PayoffType::Call,
            ExerciseStyle::European,
        )
        .unwrap();
        match price(&p).unwrap_err() {
            PricingError::ArbitrageViolation { probability } => {
                assert!(probability > 1.0);
            }
            other => panic!("expected ArbitrageViolation, got {:?}", other),
        }
    }

    // ==========================================================
    // Reference Value Tests
    // ==========================================================

    #[test]
    fn test_european_call_reference_scenario() {
        // S=100, K=100, T=1, r=0.05, sigma=0.2, q=0.02, n=200
        let p = params(0.2, 0.02, 200, PayoffType::Call, ExerciseStyle::European);
        let value = price(&p).unwrap();
        assert!(value.is_finite() && value > 0.0);
        assert_relative_eq!(value, 9.217291551565452, epsilon = 1e-6);
    }

    #[test]
    fn test_european_put_reference_scenario() {
        let p = params(0.2, 0.02, 200, PayoffType::Put, ExerciseStyle::European);
        assert_relative_eq!(price(&p).unwrap(), 6.320366670960218, epsilon = 1e-6);
    }

    #[test]
    fn test_single_step_tree() {
        // n=1: exactly one combination step, no intermediate layers.
        // u = e^0.2, d = e^-0.2, p = (e^0.05 - d)/(u - d),
        // price = e^-0.05 * p * (100u - 100).
        let p = params(0.2, 0.0, 1, PayoffType::Call, ExerciseStyle::European);
        let u = 0.2_f64.exp();
        let d = 1.0 / u;
        let prob = (0.05_f64.exp() - d) / (u - d);
        let expected = (-0.05_f64).exp() * prob * (100.0 * u - 100.0);
        assert_relative_eq!(price(&p).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_deep_itm_call_approaches_forward_parity() {
        // Deep ITM European call with q=0 tends to S - K * exp(-rT).
        let p = PricingParams::new(
            300.0_f64,
            100.0,
            1.0,
            0.05,
            0.2,
            0.0,
            2000,
            PayoffType::Call,
            ExerciseStyle::European,
        )
        .unwrap();
        let expected = 300.0 - 100.0 * (-0.05_f64).exp();
        assert_relative_eq!(price(&p).unwrap(), expected, epsilon = 1e-6);
    }

    // ==========================================================
    // Exercise Style Tests
    // ==========================================================

    #[test]
    fn test_american_put_dominates_european_put() {
        let euro = params(0.2, 0.02, 200, PayoffType::Put, ExerciseStyle::European);
        let amer = params(0.2, 0.02, 200, PayoffType::Put, ExerciseStyle::American);
        let euro_price = price(&euro).unwrap();
        let amer_price = price(&amer).unwrap();
        assert!(amer_price >= euro_price);
        // Early exercise is strictly valuable for an ITM-capable put.
        assert!(amer_price > euro_price + 1e-3);
    }

    #[test]
    fn test_american_call_without_dividends_equals_european() {
        // Early exercise of a call on a non-dividend-paying asset is
        // never optimal, so the two prices coincide node for node.
        let euro = params(0.2, 0.0, 200, PayoffType::Call, ExerciseStyle::European);
        let amer = params(0.2, 0.0, 200, PayoffType::Call, ExerciseStyle::American);
        assert_relative_eq!(
            price(&euro).unwrap(),
            price(&amer).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_american_dominates_european_for_calls_with_dividends() {
        let euro = params(0.2, 0.06, 200, PayoffType::Call, ExerciseStyle::European);
        let amer = params(0.2, 0.06, 200, PayoffType::Call, ExerciseStyle::American);
        assert!(price(&amer).unwrap() >= price(&euro).unwrap());
    }

    // ==========================================================
    // Sanity Tests
    // ==========================================================

    #[test]
    fn test_prices_are_non_negative() {
        for payoff in [PayoffType::Call, PayoffType::Put] {
            for exercise in [ExerciseStyle::European, ExerciseStyle::American] {
                let p = params(0.3, 0.01, 50, payoff, exercise);
                assert!(price(&p).unwrap() >= 0.0);
            }
        }
    }

    #[test]
    fn test_otm_option_worth_less_than_atm() {
        let atm = params(0.2, 0.0, 200, PayoffType::Call, ExerciseStyle::European);
        let otm = PricingParams::new(
            100.0_f64,
            140.0,
            1.0,
            0.05,
            0.2,
            0.0,
            200,
            PayoffType::Call,
            ExerciseStyle::European,
        )
        .unwrap();
        assert!(price(&otm).unwrap() < price(&atm).unwrap());
    }
}
