//! # fptower
//!
//! Constant-time arithmetic for the BLS12-377 quadratic extension field
//! `Fp2 = Fp[u] / (u² + 5)`.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! fptower = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `tracing`: Emit trace events from the field arithmetic
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`fptower-params`]: Curve constants (modulus, exponents, sizes)
//! - [`fptower-algorithms`]: `Fp` and `Fp2` arithmetic
//!
//! [`fptower-params`]: params
//! [`fptower-algorithms`]: algorithms

#![cfg_attr(not(feature = "std"), no_std)]

pub use fptower_algorithms as algorithms;
pub use fptower_params as params;

/// Common imports for fptower users
pub mod prelude {
    // Re-export error types
    pub use crate::algorithms::{Error, Result};

    // Field elements and the twist seam
    pub use crate::algorithms::{BaseNonResidueInv, Fp, Fp2, TwistMap};

    // Re-export constant-time utilities
    pub use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
    pub use zeroize::Zeroize;
}
