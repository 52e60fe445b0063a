//! BLS12-377 field arithmetic with constant-time implementation
//!
//! This crate provides the quadratic extension field `Fp2 = Fp[u] / (u² + 5)`
//! over the BLS12-377 base field, the layer every higher tower, pairing and
//! hash-to-curve routine of the curve is built on. Arithmetic is written to
//! run in input-independent time and the crate is usable in both `std` and
//! `no_std` environments.
//!
//! # Example
//!
//! ```
//! use fptower_algorithms::{Fp, Fp2};
//!
//! let x = Fp2 { c0: Fp::one(), c1: Fp::one().double() };
//! assert_eq!(x * x.inverse(), Fp2::one());
//! assert_eq!(x.square(), x * x);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Pairing-friendly field towers
pub mod ec;
pub use ec::bls12_377::{BaseNonResidueInv, Fp, Fp2, TwistMap};
