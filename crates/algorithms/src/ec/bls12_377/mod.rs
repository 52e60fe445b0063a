//! BLS12-377 base field and its quadratic extension `Fp2 = Fp[u] / (u² + 5)`.
//!
//! This is the bottom of the BLS12-377 pairing tower: the sextic and
//! twelfth-degree extensions, the Miller loop and hash-to-curve all build on
//! the [`Fp2`] operations exported here.
//!
//! **Warning:** Unaudited implementation. Use at your own risk.

mod field;
mod twist;

#[cfg(test)]
mod tests;

// Public API exports (following fptower conventions)
pub use field::fp::Fp;
pub use field::fp2::Fp2;
pub use twist::{BaseNonResidueInv, TwistMap};
