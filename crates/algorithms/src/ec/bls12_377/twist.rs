//! Base field twist maps consumed by [`Fp2::mul_by_twist_coeff`].
//!
//! [`Fp2::mul_by_twist_coeff`]: super::Fp2::mul_by_twist_coeff

use super::Fp;

/// A fixed linear map on the base field used when multiplying an `Fp2`
/// element by a curve twist coefficient
pub trait TwistMap {
    /// Apply the map to one base field element
    fn apply(&self, a: &Fp) -> Fp;
}

/// The BLS12-377 twist map `a ↦ −a/5`
///
/// With this map, [`Fp2::mul_by_twist_coeff`](super::Fp2::mul_by_twist_coeff)
/// multiplies by `1/u`, the G2 twist coefficient of BLS12-377.
#[derive(Clone, Copy, Debug, Default)]
pub struct BaseNonResidueInv;

impl TwistMap for BaseNonResidueInv {
    #[inline]
    fn apply(&self, a: &Fp) -> Fp {
        a.mul_by_nonresidue_inv()
    }
}

impl<F> TwistMap for F
where
    F: Fn(&Fp) -> Fp,
{
    #[inline]
    fn apply(&self, a: &Fp) -> Fp {
        self(a)
    }
}
