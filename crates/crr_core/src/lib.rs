//! # CRR Core (Foundation Layer)
//!
//! Parameter records, payoff/exercise definitions, and structured error
//! types for the Cox-Ross-Rubinstein binomial pricing engine.
//!
//! This crate provides:
//! - [`types::PricingParams`]: validated, immutable pricing parameter record
//! - [`types::PayoffType`] / [`types::ExerciseStyle`]: option contract terms
//! - [`types::PricingError`] / [`types::ImpliedVolError`]: error taxonomy
//!
//! ## Design Principles
//!
//! - **Fail fast**: invalid parameters are rejected at construction, never
//!   silently clamped
//! - **Immutable records**: parameter variants are produced through
//!   `with_*` builder copies that re-run full validation
//! - **Generic over `T: Float`**: `f64` is the reference instantiation

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;

pub use types::{
    ExerciseStyle, ImpliedVolError, PayoffType, PricingError, PricingParams,
};
