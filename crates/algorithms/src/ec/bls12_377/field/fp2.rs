//! Quadratic extension `Fp2 = Fp[u] / (u² + 5)` of the BLS12-377 base field.
//!
//! Elements are written `c0 + c1·u`. Since −5 is a quadratic non-residue
//! modulo p, the norm `c0² + 5·c1²` vanishes only at zero and every non-zero
//! element has a unique inverse.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp::Fp;
use crate::ec::bls12_377::twist::{BaseNonResidueInv, TwistMap};

/// Element `c0 + c1·u` of the quadratic extension, with `u² = −5`
#[derive(Copy, Clone)]
pub struct Fp2 {
    /// Constant coefficient
    pub c0: Fp,
    /// Coefficient of `u`
    pub c1: Fp,
}

impl fmt::Debug for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} + {:?}*u", self.c0, self.c1)
    }
}

impl Default for Fp2 {
    fn default() -> Self {
        Fp2::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp2 {}

impl From<Fp> for Fp2 {
    fn from(f: Fp) -> Fp2 {
        Fp2 {
            c0: f,
            c1: Fp::zero(),
        }
    }
}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp2 {}
impl PartialEq for Fp2 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp2 {
            c0: Fp::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl Fp2 {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp2 {
        Fp2 {
            c0: Fp::zero(),
            c1: Fp::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp2 {
        Fp2 {
            c0: Fp::one(),
            c1: Fp::zero(),
        }
    }

    /// The adjoined element `u`
    #[inline]
    pub const fn u() -> Fp2 {
        Fp2 {
            c0: Fp::zero(),
            c1: Fp::one(),
        }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Create a random element
    pub fn random(mut rng: impl RngCore) -> Fp2 {
        Fp2 {
            c0: Fp::random(&mut rng),
            c1: Fp::random(&mut rng),
        }
    }

    /// Componentwise addition
    #[inline]
    pub const fn add(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: (&self.c0).add(&rhs.c0),
            c1: (&self.c1).add(&rhs.c1),
        }
    }

    /// Componentwise subtraction
    #[inline]
    pub const fn sub(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: (&self.c0).sub(&rhs.c0),
            c1: (&self.c1).sub(&rhs.c1),
        }
    }

    /// Componentwise negation
    #[inline]
    pub const fn neg(&self) -> Fp2 {
        Fp2 {
            c0: (&self.c0).neg(),
            c1: (&self.c1).neg(),
        }
    }

    /// Componentwise doubling
    #[inline]
    pub const fn double(&self) -> Fp2 {
        Fp2 {
            c0: self.c0.double(),
            c1: self.c1.double(),
        }
    }

    /// Karatsuba multiplication, three base field multiplications:
    ///
    /// ```text
    /// t1 = (a0 + a1)(b0 + b1),  t2 = a0·b0,  t3 = a1·b1
    /// c1 = t1 - t2 - t3
    /// c0 = t2 - 5·t3
    /// ```
    pub const fn mul(&self, rhs: &Fp2) -> Fp2 {
        let lhs_sum = (&self.c0).add(&self.c1);
        let rhs_sum = (&rhs.c0).add(&rhs.c1);
        let t1 = (&lhs_sum).mul(&rhs_sum);
        let t2 = (&self.c0).mul(&rhs.c0);
        let t3 = (&self.c1).mul(&rhs.c1);

        Fp2 {
            c0: (&t2).sub(&t3.mul_by_5()),
            c1: (&(&t1).sub(&t2)).sub(&t3),
        }
    }

    /// Complex squaring, two base field multiplications
    ///
    /// With β = u² = −5:
    ///
    /// ```text
    /// v   = a0·a1
    /// c0  = (a0 + a1)(a0 + β·a1) - v - β·v = (a0 + a1)(a0 - 5·a1) + 4·v
    /// c1  = 2·v
    /// ```
    pub const fn square(&self) -> Fp2 {
        let sum = (&self.c0).add(&self.c1);
        let shifted = (&self.c0).sub(&self.c1.mul_by_5());
        let prod = (&sum).mul(&shifted);
        let v2 = (&self.c0).mul(&self.c1).double();

        Fp2 {
            c0: (&prod).add(&v2.double()),
            c1: v2,
        }
    }

    /// Multiply by the non-residue `u`: `(a0 + a1·u)·u = −5·a1 + a0·u`
    #[inline]
    pub const fn mul_by_nonresidue(&self) -> Fp2 {
        Fp2 {
            c0: (&self.c1.mul_by_5()).neg(),
            c1: self.c0,
        }
    }

    /// Multiply by `u⁻¹ = −u/5`: `(a0 + a1·u)·u⁻¹ = a1 − (a0/5)·u`
    #[inline]
    pub const fn mul_by_nonresidue_inv(&self) -> Fp2 {
        Fp2 {
            c0: self.c1,
            c1: (&(&self.c0).mul(&Fp::FIVE_INV)).neg(),
        }
    }

    /// Norm to the base field, `a0² + 5·a1²`
    ///
    /// This is the product of the element with its conjugate.
    #[inline]
    pub const fn norm(&self) -> Fp {
        (&self.c0.square()).add(&self.c1.square().mul_by_5())
    }

    /// Multiplicative inverse through the norm, one base field inversion
    ///
    /// The inverse of zero is zero, matching the base field convention; use
    /// [`Fp2::invert`] when the caller must detect that case.
    pub fn inverse(&self) -> Fp2 {
        let norm_inv = self.norm().invert();

        #[cfg(feature = "tracing")]
        if bool::from(norm_inv.is_none()) {
            tracing::trace!("inverting the zero element of Fp2; result is zero");
        }

        let t = norm_inv.unwrap_or(Fp::zero());
        Fp2 {
            c0: self.c0 * t,
            c1: -(self.c1 * t),
        }
    }

    /// Multiplicative inverse, none for zero
    pub fn invert(&self) -> CtOption<Fp2> {
        CtOption::new(self.inverse(), !self.is_zero())
    }

    /// Multiply by the twist coefficient through an injected base field map:
    /// the result is `a1 + twist(a0)·u`
    pub fn mul_by_twist_coeff<T: TwistMap + ?Sized>(&self, twist: &T) -> Fp2 {
        Fp2 {
            c0: self.c1,
            c1: twist.apply(&self.c0),
        }
    }

    /// Multiply by the BLS12-377 G2 twist coefficient `1/u`
    pub fn mul_by_b_twist_coeff(&self) -> Fp2 {
        self.mul_by_twist_coeff(&BaseNonResidueInv)
    }

    /// Conjugation, `a0 − a1·u`
    #[inline]
    pub const fn conjugate(&self) -> Fp2 {
        Fp2 {
            c0: self.c0,
            c1: (&self.c1).neg(),
        }
    }

    /// Raises this element to p
    ///
    /// `u^p = u·(−5)^((p−1)/2) = −u` because −5 is a non-residue, so this is
    /// conjugation.
    #[inline]
    pub const fn frobenius_map(&self) -> Fp2 {
        self.conjugate()
    }

    /// Multiply both coefficients by a base field element
    #[inline]
    pub const fn mul_by_fp(&self, rhs: &Fp) -> Fp2 {
        Fp2 {
            c0: (&self.c0).mul(rhs),
            c1: (&self.c1).mul(rhs),
        }
    }

    /// Quadratic character in Fp2: 1 for non-zero squares, -1 for non-squares, 0 for zero
    ///
    /// An element of Fp2 is a square exactly when its norm is a square in Fp.
    pub fn legendre(&self) -> i8 {
        self.norm().legendre()
    }

    /// Variable-time exponentiation
    ///
    /// Only the exponent influences the running time.
    pub fn pow_vartime(&self, by: &[u64; 6]) -> Fp2 {
        let mut res = Fp2::one();
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res *= self;
                }
            }
        }
        res
    }
}

impl<'a> Neg for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn neg(self) -> Fp2 { self.neg() }
}

impl Neg for Fp2 {
    type Output = Fp2;
    #[inline]
    fn neg(self) -> Fp2 { -&self }
}

impl<'a, 'b> Sub<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn sub(self, rhs: &'b Fp2) -> Fp2 { self.sub(rhs) }
}

impl<'a, 'b> Add<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn add(self, rhs: &'b Fp2) -> Fp2 { self.add(rhs) }
}

impl<'a, 'b> Mul<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn mul(self, rhs: &'b Fp2) -> Fp2 { self.mul(rhs) }
}

impl<'b> Add<&'b Fp2> for Fp2 {
    type Output = Fp2;
    #[inline]
    fn add(self, rhs: &'b Fp2) -> Fp2 { &self + rhs }
}

impl<'a> Add<Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn add(self, rhs: Fp2) -> Fp2 { self + &rhs }
}

impl Add<Fp2> for Fp2 {
    type Output = Fp2;
    #[inline]
    fn add(self, rhs: Fp2) -> Fp2 { &self + &rhs }
}

impl<'b> Sub<&'b Fp2> for Fp2 {
    type Output = Fp2;
    #[inline]
    fn sub(self, rhs: &'b Fp2) -> Fp2 { &self - rhs }
}

impl<'a> Sub<Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn sub(self, rhs: Fp2) -> Fp2 { self - &rhs }
}

impl Sub<Fp2> for Fp2 {
    type Output = Fp2;
    #[inline]
    fn sub(self, rhs: Fp2) -> Fp2 { &self - &rhs }
}

impl<'b> Mul<&'b Fp2> for Fp2 {
    type Output = Fp2;
    #[inline]
    fn mul(self, rhs: &'b Fp2) -> Fp2 { &self * rhs }
}

impl<'a> Mul<Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn mul(self, rhs: Fp2) -> Fp2 { self * &rhs }
}

impl Mul<Fp2> for Fp2 {
    type Output = Fp2;
    #[inline]
    fn mul(self, rhs: Fp2) -> Fp2 { &self * &rhs }
}

impl SubAssign<Fp2> for Fp2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Fp2) { *self = &*self - &rhs; }
}

impl AddAssign<Fp2> for Fp2 {
    #[inline]
    fn add_assign(&mut self, rhs: Fp2) { *self = &*self + &rhs; }
}

impl MulAssign<Fp2> for Fp2 {
    #[inline]
    fn mul_assign(&mut self, rhs: Fp2) { *self = &*self * &rhs; }
}

impl<'b> SubAssign<&'b Fp2> for Fp2 {
    #[inline]
    fn sub_assign(&mut self, rhs: &'b Fp2) { *self = &*self - rhs; }
}

impl<'b> AddAssign<&'b Fp2> for Fp2 {
    #[inline]
    fn add_assign(&mut self, rhs: &'b Fp2) { *self = &*self + rhs; }
}

impl<'b> MulAssign<&'b Fp2> for Fp2 {
    #[inline]
    fn mul_assign(&mut self, rhs: &'b Fp2) { *self = &*self * rhs; }
}
