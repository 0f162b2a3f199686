//! Option exercise style definitions.

/// Option exercise style.
///
/// Defines when an option may be exercised during its lifetime.
///
/// # Variants
/// - `European`: exercise only at expiry
/// - `American`: exercise at any time before expiry
///
/// # Examples
/// ```
/// use crr_core::types::ExerciseStyle;
///
/// let style = ExerciseStyle::American;
/// assert!(style.is_american());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExerciseStyle {
    /// European style: exercise only at expiry.
    European,

    /// American style: exercise at any time before expiry.
    American,
}

impl ExerciseStyle {
    /// Returns true for European exercise.
    #[inline]
    pub fn is_european(&self) -> bool {
        matches!(self, ExerciseStyle::European)
    }

    /// Returns true for American exercise.
    #[inline]
    pub fn is_american(&self) -> bool {
        matches!(self, ExerciseStyle::American)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(ExerciseStyle::European.is_european());
        assert!(!ExerciseStyle::European.is_american());
        assert!(ExerciseStyle::American.is_american());
        assert!(!ExerciseStyle::American.is_european());
    }
}
