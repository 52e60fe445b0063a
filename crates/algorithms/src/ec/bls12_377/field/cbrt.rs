//! Exponentiation by the fixed cube-root exponent of BLS12-377 Fp2.
//!
//! The exponent is e = (p + 2) / 9, stored in
//! [`BLS12_377_CBRT_EXP`](fptower_params::pairing::bls12_377::BLS12_377_CBRT_EXP).
//! It is evaluated with a left-to-right sliding window of width 5 over a table
//! of the sixteen odd powers x, x^3, ..., x^31. The window schedule below is
//! derived from e alone, so every call performs the same 370 squarings and
//! 73 multiplications whatever the input.

use super::fp2::Fp2;

/// Number of odd powers kept in the window table
const ODD_POWERS: usize = 16;

/// Leading window of e, the starting power of the accumulator
pub(crate) const CBRT_EXP_LEADING_DIGIT: u8 = 0x17;

/// Remaining windows of e, most significant first: square the accumulator
/// `.0` times, then multiply by x^`.1` (always odd)
pub(crate) const CBRT_EXP_WINDOWS: [(u8, u8); 58] = [
    (3, 0x07), (7, 0x1b), (6, 0x0b), (12, 0x15), (3, 0x01), (9, 0x0f), (5, 0x05), (7, 0x17),
    (5, 0x19), (4, 0x09), (6, 0x13), (8, 0x1f), (12, 0x03), (10, 0x11), (5, 0x1d), (6, 0x1d),
    (5, 0x11), (7, 0x1d), (3, 0x07), (7, 0x15), (4, 0x0f), (5, 0x0f), (7, 0x0b), (6, 0x15),
    (3, 0x03), (8, 0x17), (4, 0x09), (6, 0x1b), (5, 0x15), (7, 0x11), (5, 0x15), (5, 0x05),
    (8, 0x0f), (4, 0x03), (7, 0x0d), (2, 0x01), (9, 0x01), (5, 0x01), (20, 0x05), (7, 0x0f),
    (6, 0x1f), (8, 0x09), (12, 0x15), (6, 0x15), (6, 0x15), (6, 0x15), (6, 0x15), (4, 0x09),
    (10, 0x1d), (5, 0x0d), (6, 0x15), (6, 0x15), (6, 0x15), (6, 0x15), (6, 0x15), (6, 0x15),
    (6, 0x15), (1, 0x01),
];

impl Fp2 {
    /// Computes x^e for e = (p + 2) / 9
    ///
    /// Zero maps to zero and one maps to one. The sequence of squarings and
    /// multiplications is fixed by e, never by `self`.
    pub fn exp_by_cbrt_exp(&self) -> Fp2 {
        // odd[i] = x^(2i + 1)
        let mut odd = [Fp2::zero(); ODD_POWERS];
        let x2 = self.square();
        odd[0] = *self;
        for i in 1..ODD_POWERS {
            odd[i] = odd[i - 1] * x2;
        }

        let mut acc = odd[usize::from(CBRT_EXP_LEADING_DIGIT >> 1)];
        for &(squarings, digit) in CBRT_EXP_WINDOWS.iter() {
            for _ in 0..squarings {
                acc = acc.square();
            }
            acc *= odd[usize::from(digit >> 1)];
        }

        acc
    }
}
