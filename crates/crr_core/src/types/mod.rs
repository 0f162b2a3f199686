//! Core value types for binomial option pricing.
//!
//! This module provides:
//! - [`PricingParams`]: immutable, validated pricing parameter record
//! - [`PayoffType`]: call/put payoff with intrinsic value evaluation
//! - [`ExerciseStyle`]: European/American exercise rights
//! - [`PricingError`] and [`ImpliedVolError`]: structured error types

mod error;
mod exercise;
mod params;
mod payoff;

pub use error::{ImpliedVolError, PricingError};
pub use exercise::ExerciseStyle;
pub use params::PricingParams;
pub use payoff::PayoffType;
