//! Validated pricing parameter record.

use num_traits::Float;

use super::error::PricingError;
use super::exercise::ExerciseStyle;
use super::payoff::PayoffType;

/// Immutable pricing parameter record for the binomial engine.
///
/// Every instance has passed full domain validation; the pricer and the
/// derived procedures (convergence driver, implied-volatility solver,
/// Greeks estimator) can therefore assume well-formed inputs. Perturbed
/// copies for bump-and-reprice are produced with the `with_*` builders,
/// which re-run the full validation rather than mutating in place.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Invariants
/// - `spot > 0`, `strike > 0`, `expiry > 0`
/// - `steps >= 1`
/// - `volatility >= 0`, `dividend_yield >= 0`
/// - `rate` may be any real value (negative rates are allowed)
///
/// # Examples
/// ```
/// use crr_core::types::{ExerciseStyle, PayoffType, PricingParams};
///
/// let params = PricingParams::new(
///     100.0_f64, // spot
///     100.0,     // strike
///     1.0,       // expiry (years)
///     0.05,      // risk-free rate
///     0.2,       // volatility
///     0.0,       // dividend yield
///     200,       // tree steps
///     PayoffType::Call,
///     ExerciseStyle::European,
/// )
/// .unwrap();
///
/// assert_eq!(params.spot(), 100.0);
///
/// // Invalid spot fails fast
/// assert!(PricingParams::new(
///     -1.0_f64, 100.0, 1.0, 0.05, 0.2, 0.0, 200,
///     PayoffType::Call, ExerciseStyle::European,
/// )
/// .is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricingParams<T: Float> {
    /// Current underlying price (S)
    spot: T,
    /// Strike price (K)
    strike: T,
    /// Time to expiration in years (T)
    expiry: T,
    /// Risk-free rate, annualised (r)
    rate: T,
    /// Volatility, annualised (sigma)
    volatility: T,
    /// Continuous dividend yield (q)
    dividend_yield: T,
    /// Number of tree steps (n)
    steps: usize,
    /// Call or put payoff
    payoff: PayoffType,
    /// European or American exercise
    exercise: ExerciseStyle,
}

impl<T: Float> PricingParams<T> {
    /// Creates a validated parameter record.
    ///
    /// Validation runs in a fixed order and reports the first violated
    /// rule: spot positivity, strike positivity, expiry positivity, step
    /// count positivity, volatility non-negativity, dividend-yield
    /// non-negativity. Payoff and exercise membership are enforced by the
    /// enum types. Violations fail fast; values are never clamped.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming the offending field and
    /// the constraint it violated.
    ///
    /// # Examples
    /// ```
    /// use crr_core::types::{ExerciseStyle, PayoffType, PricingError, PricingParams};
    ///
    /// let err = PricingParams::new(
    ///     100.0_f64, 100.0, 0.0, 0.05, 0.2, 0.0, 200,
    ///     PayoffType::Put, ExerciseStyle::American,
    /// )
    /// .unwrap_err();
    ///
    /// assert!(matches!(err, PricingError::InvalidParameter { field: "expiry", .. }));
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        volatility: T,
        dividend_yield: T,
        steps: usize,
        payoff: PayoffType,
        exercise: ExerciseStyle,
    ) -> Result<Self, PricingError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(PricingError::InvalidParameter {
                field: "spot",
                value: spot.to_f64().unwrap_or(f64::NAN),
                constraint: "must be positive",
            });
        }

        if strike <= zero {
            return Err(PricingError::InvalidParameter {
                field: "strike",
                value: strike.to_f64().unwrap_or(f64::NAN),
                constraint: "must be positive",
            });
        }

        if expiry <= zero {
            return Err(PricingError::InvalidParameter {
                field: "expiry",
                value: expiry.to_f64().unwrap_or(f64::NAN),
                constraint: "must be positive",
            });
        }

        if steps == 0 {
            return Err(PricingError::InvalidParameter {
                field: "steps",
                value: 0.0,
                constraint: "must be a positive integer",
            });
        }

        if volatility < zero {
            return Err(PricingError::InvalidParameter {
                field: "volatility",
                value: volatility.to_f64().unwrap_or(f64::NAN),
                constraint: "must be non-negative",
            });
        }

        if dividend_yield < zero {
            return Err(PricingError::InvalidParameter {
                field: "dividend_yield",
                value: dividend_yield.to_f64().unwrap_or(f64::NAN),
                constraint: "must be non-negative",
            });
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            dividend_yield,
            steps,
            payoff,
            exercise,
        })
    }

    /// Returns the underlying spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiration in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the continuous dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> T {
        self.dividend_yield
    }

    /// Returns the number of tree steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the payoff type.
    #[inline]
    pub fn payoff(&self) -> PayoffType {
        self.payoff
    }

    /// Returns the exercise style.
    #[inline]
    pub fn exercise(&self) -> ExerciseStyle {
        self.exercise
    }

    /// Returns a copy with the spot price replaced.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if the new spot is not positive.
    pub fn with_spot(&self, spot: T) -> Result<Self, PricingError> {
        Self::new(
            spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            self.dividend_yield,
            self.steps,
            self.payoff,
            self.exercise,
        )
    }

    /// Returns a copy with the expiry replaced.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if the new expiry is not positive.
    pub fn with_expiry(&self, expiry: T) -> Result<Self, PricingError> {
        Self::new(
            self.spot,
            self.strike,
            expiry,
            self.rate,
            self.volatility,
            self.dividend_yield,
            self.steps,
            self.payoff,
            self.exercise,
        )
    }

    /// Returns a copy with the volatility replaced.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if the new volatility is negative.
    pub fn with_volatility(&self, volatility: T) -> Result<Self, PricingError> {
        Self::new(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            volatility,
            self.dividend_yield,
            self.steps,
            self.payoff,
            self.exercise,
        )
    }

    /// Returns a copy with the step count replaced.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if the new step count is zero.
    pub fn with_steps(&self, steps: usize) -> Result<Self, PricingError> {
        Self::new(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            self.dividend_yield,
            steps,
            self.payoff,
            self.exercise,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> PricingParams<f64> {
        PricingParams::new(
            100.0,
            100.0,
            1.0,
            0.05,
            0.2,
            0.02,
            200,
            PayoffType::Call,
            ExerciseStyle::European,
        )
        .unwrap()
    }

    // ==========================================================
    // Constructor Tests
    // ==========================================================

    #[test]
    fn test_new_valid_parameters() {
        let params = valid();
        assert_eq!(params.spot(), 100.0);
        assert_eq!(params.strike(), 100.0);
        assert_eq!(params.expiry(), 1.0);
        assert_eq!(params.rate(), 0.05);
        assert_eq!(params.volatility(), 0.2);
        assert_eq!(params.dividend_yield(), 0.02);
        assert_eq!(params.steps(), 200);
        assert_eq!(params.payoff(), PayoffType::Call);
        assert_eq!(params.exercise(), ExerciseStyle::European);
    }

    #[test]
    fn test_negative_rate_allowed() {
        let params = PricingParams::new(
            100.0_f64,
            100.0,
            1.0,
            -0.01,
            0.2,
            0.0,
            100,
            PayoffType::Put,
            ExerciseStyle::European,
        );
        assert!(params.is_ok());
    }

    #[test]
    fn test_zero_volatility_allowed_by_validator() {
        // sigma = 0 is a valid parameter set; the lattice pricer itself
        // rejects it later as a degenerate tree.
        let params = PricingParams::new(
            100.0_f64,
            100.0,
            1.0,
            0.05,
            0.0,
            0.0,
            100,
            PayoffType::Call,
            ExerciseStyle::European,
        );
        assert!(params.is_ok());
    }

    fn field_of(err: PricingError) -> &'static str {
        match err {
            PricingError::InvalidParameter { field, .. } => field,
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_spot() {
        let err = PricingParams::new(
            0.0_f64,
            100.0,
            1.0,
            0.05,
            0.2,
            0.0,
            100,
            PayoffType::Call,
            ExerciseStyle::European,
        )
        .unwrap_err();
        assert_eq!(field_of(err), "spot");
    }

    #[test]
    fn test_invalid_strike() {
        let err = PricingParams::new(
            100.0_f64,
            -50.0,
            1.0,
            0.05,
            0.2,
            0.0,
            100,
            PayoffType::Call,
            ExerciseStyle::European,
        )
        .unwrap_err();
        assert_eq!(field_of(err), "strike");
    }

    #[test]
    fn test_invalid_expiry() {
        let err = PricingParams::new(
            100.0_f64,
            100.0,
            -1.0,
            0.05,
            0.2,
            0.0,
            100,
            PayoffType::Call,
            ExerciseStyle::European,
        )
        .unwrap_err();
        assert_eq!(field_of(err), "expiry");
    }

    #[test]
    fn test_invalid_steps() {
        let err = PricingParams::new(
            100.0_f64,
            100.0,
            1.0,
            0.05,
            0.2,
            0.0,
            0,
            PayoffType::Call,
            ExerciseStyle::European,
        )
        .unwrap_err();
        assert_eq!(field_of(err), "steps");
    }

    #[test]
    fn test_invalid_volatility() {
        let err = PricingParams::new(
            100.0_f64,
            100.0,
            1.0,
            0.05,
            -0.2,
            0.0,
            100,
            PayoffType::Call,
            ExerciseStyle::European,
        )
        .unwrap_err();
        assert_eq!(field_of(err), "volatility");
    }

    #[test]
    fn test_invalid_dividend_yield() {
        let err = PricingParams::new(
            100.0_f64,
            100.0,
            1.0,
            0.05,
            0.2,
            -0.01,
            100,
            PayoffType::Call,
            ExerciseStyle::European,
        )
        .unwrap_err();
        assert_eq!(field_of(err), "dividend_yield");
    }

    #[test]
    fn test_first_violation_wins() {
        // Both spot and volatility are invalid; spot is checked first.
        let err = PricingParams::new(
            -1.0_f64,
            100.0,
            1.0,
            0.05,
            -0.2,
            0.0,
            100,
            PayoffType::Call,
            ExerciseStyle::European,
        )
        .unwrap_err();
        assert_eq!(field_of(err), "spot");
    }

    // ==========================================================
    // Builder Tests
    // ==========================================================

    #[test]
    fn test_with_spot() {
        let bumped = valid().with_spot(101.0).unwrap();
        assert_eq!(bumped.spot(), 101.0);
        assert_eq!(bumped.strike(), 100.0);
    }

    #[test]
    fn test_with_spot_revalidates() {
        assert!(valid().with_spot(-1.0).is_err());
    }

    #[test]
    fn test_with_expiry() {
        let bumped = valid().with_expiry(0.5).unwrap();
        assert_eq!(bumped.expiry(), 0.5);
    }

    #[test]
    fn test_with_volatility() {
        let bumped = valid().with_volatility(0.35).unwrap();
        assert_eq!(bumped.volatility(), 0.35);
        assert!(valid().with_volatility(-0.1).is_err());
    }

    #[test]
    fn test_with_steps() {
        let bumped = valid().with_steps(500).unwrap();
        assert_eq!(bumped.steps(), 500);
        assert!(valid().with_steps(0).is_err());
    }

    #[test]
    fn test_builders_leave_original_unchanged() {
        let params = valid();
        let _ = params.with_spot(150.0).unwrap();
        assert_eq!(params.spot(), 100.0);
    }

    // ==========================================================
    // Property Tests
    // ==========================================================

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_in_domain_inputs_always_validate(
                spot in 1e-6..1e6_f64,
                strike in 1e-6..1e6_f64,
                expiry in 1e-6..100.0_f64,
                rate in -0.2..0.2_f64,
                volatility in 0.0..3.0_f64,
                dividend_yield in 0.0..0.2_f64,
                steps in 1..5000_usize,
            ) {
                let params = PricingParams::new(
                    spot, strike, expiry, rate, volatility, dividend_yield,
                    steps, PayoffType::Call, ExerciseStyle::European,
                );
                prop_assert!(params.is_ok());
            }

            #[test]
            fn prop_builders_change_exactly_one_field(
                new_spot in 1e-3..1e4_f64,
                new_vol in 0.0..3.0_f64,
            ) {
                let base = valid();

                let bumped = base.with_spot(new_spot).unwrap();
                prop_assert_eq!(bumped.spot(), new_spot);
                prop_assert_eq!(bumped.strike(), base.strike());
                prop_assert_eq!(bumped.expiry(), base.expiry());
                prop_assert_eq!(bumped.volatility(), base.volatility());
                prop_assert_eq!(bumped.steps(), base.steps());

                let bumped = base.with_volatility(new_vol).unwrap();
                prop_assert_eq!(bumped.volatility(), new_vol);
                prop_assert_eq!(bumped.spot(), base.spot());
            }
        }
    }
}
