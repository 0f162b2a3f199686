//! Payoff type definitions.

use num_traits::Float;

/// Type of option payoff.
///
/// # Variants
/// - `Call`: max(S - K, 0)
/// - `Put`: max(K - S, 0)
///
/// # Examples
/// ```
/// use crr_core::types::PayoffType;
///
/// let call = PayoffType::Call;
/// assert_eq!(call.intrinsic(110.0_f64, 100.0), 10.0);
/// assert_eq!(call.intrinsic(90.0_f64, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PayoffType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl PayoffType {
    /// Evaluates the intrinsic (exercise) value for given spot and strike.
    ///
    /// # Arguments
    /// * `spot` - Current asset price (S)
    /// * `strike` - Strike price (K)
    ///
    /// # Examples
    /// ```
    /// use crr_core::types::PayoffType;
    ///
    /// let put = PayoffType::Put;
    /// assert_eq!(put.intrinsic(90.0_f64, 100.0), 10.0);
    /// ```
    #[inline]
    pub fn intrinsic<T: Float>(&self, spot: T, strike: T) -> T {
        let zero = T::zero();
        match self {
            PayoffType::Call => (spot - strike).max(zero),
            PayoffType::Put => (strike - spot).max(zero),
        }
    }

    /// Returns true for call payoffs.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, PayoffType::Call)
    }

    /// Returns true for put payoffs.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, PayoffType::Put)
    }
}
