//! Pairing-friendly curve field arithmetic
//!
//! Field towers are built bottom-up; this module currently provides the
//! BLS12-377 base field and quadratic extension.

pub mod bls12_377;
