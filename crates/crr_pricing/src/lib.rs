//! # CRR Pricing (Kernel Layer)
//!
//! Cox-Ross-Rubinstein binomial lattice pricing for European and American
//! vanilla options, with three derived procedures built on the same
//! pricer:
//!
//! - [`lattice::price`]: backward induction over the binomial tree
//! - [`convergence::price_with_convergence`]: re-price at increasing step
//!   counts until the price stabilises
//! - [`implied_vol::implied_volatility`]: bisection on volatility against
//!   a target market price
//! - [`greeks::greeks`]: Delta, Gamma, and Theta by central finite
//!   differences
//!
//! ## Design Principles
//!
//! - **Layer-local induction**: only one value buffer is materialised;
//!   the tree is never stored as a 2D structure (O(n) space, O(n²) time)
//! - **No silent repair**: degenerate trees and out-of-range risk-neutral
//!   probabilities are errors, never clamped
//! - **Independent re-pricing**: each derived procedure issues its own
//!   lattice calls; nothing is cached between procedures

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod convergence;
pub mod greeks;
pub mod implied_vol;
pub mod lattice;

pub use convergence::{price_with_convergence, ConvergenceConfig, ConvergenceReport};
pub use greeks::{greeks, BumpConfig, GreeksReport};
pub use implied_vol::{implied_volatility, ImpliedVolConfig};
pub use lattice::price;
