pub mod fp; // Base field
pub mod fp2; // Quadratic extension
pub(crate) mod cbrt; // Fixed-exponent map over fp2
