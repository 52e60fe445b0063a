//! BLS12-377 base field `GF(p)` where p = 0x01ae3a4617c510eac63b05c06ca1493b1a22d9f300f5138f1ef3622fba094800170b5d44300000008508c00000000001

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use fptower_params::pairing::bls12_377::{
    BLS12_377_FP_SIZE, BLS12_377_MODULUS, BLS12_377_MODULUS_MINUS_ONE_DIV_TWO,
    BLS12_377_MODULUS_MINUS_TWO,
};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::error::{validate, Result};

// ============================================================================
// Arithmetic Helper Functions
// ============================================================================

/// Compute a + b + carry, returning (result, carry)
#[inline(always)]
const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a - (b + borrow), returning (result, borrow)
#[inline(always)]
const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a + (b * c) + carry, returning (result, carry)
#[inline(always)]
const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

// ============================================================================
// Field Constants
// ============================================================================

/// Field modulus p
const MODULUS: [u64; 6] = BLS12_377_MODULUS;

/// Montgomery parameter INV = -(p^{-1} mod 2^64) mod 2^64
const INV: u64 = 0x8508_bfff_ffff_ffff;

/// Montgomery R = 2^384 mod p
const R: Fp = Fp([
    0x02cd_ffff_ffff_ff68,
    0x5140_9f83_7fff_ffb1,
    0x9f7d_b3a9_8a7d_3ff2,
    0x7b4e_97b7_6e7c_6305,
    0x4cf4_95bf_803c_84e8,
    0x008d_6661_e2fd_f49a,
]);

/// Montgomery R^2 = 2^768 mod p
const R2: Fp = Fp([
    0xb786_686c_9400_cd22,
    0x0329_fcaa_b004_31b1,
    0x22a5_f111_62d6_b46d,
    0xbfdf_7d03_827d_c3ac,
    0x837e_92f0_4179_0bf9,
    0x006d_fccb_1e91_4b88,
]);

/// Montgomery R^3 = 2^1152 mod p
const R3: Fp = Fp([
    0x581f_532f_8815_de20,
    0xe50f_4148_be32_9585,
    0x2be8_b118_0449_f513,
    0x6a2a_9516_c804_a20e,
    0x3f72_5407_1359_0cb9,
    0x0106_5ab4_c0e7_dda5,
]);

// ============================================================================
// Field Element Type
// ============================================================================

/// Element in Montgomery form: Fp(a) = aR mod p, with R = 2^384
#[derive(Copy, Clone)]
pub struct Fp(pub(crate) [u64; 6]);

impl Fp {
    /// The non-residue scalar 5
    pub const FIVE: Fp = Fp([
        0x88fd_3fff_ffff_fd07,
        0x7f37_c04d_4fff_fe74,
        0xfe81_201f_fa68_f7bb,
        0x4e66_1ca2_2778_db8c,
        0xba8b_e6fd_148d_4f4f,
        0x0114_c5a3_5730_b618,
    ]);

    /// 5^{-1} mod p
    pub const FIVE_INV: Fp = Fp([
        0x0496_9999_9999_997c,
        0x8916_041d_a666_6657,
        0x9f0f_0c14_e3ba_1330,
        0x60c5_331a_4a10_2373,
        0x7ac6_88f3_708d_21f7,
        0x0174_764b_a6d0_71a7,
    ]);
}

// ============================================================================
// Reduction
// ============================================================================

impl Fp {
    /// Subtracts p once if the value is not already below it
    #[inline]
    const fn subtract_p(&self) -> Fp {
        let mut r = [0u64; 6];
        let mut borrow = 0;
        let mut i = 0;
        while i < 6 {
            let (d, b) = sbb(self.0[i], MODULUS[i], borrow);
            r[i] = d;
            borrow = b;
            i += 1;
        }

        // borrow is all-ones when self < p: keep self in that case
        let mut i = 0;
        while i < 6 {
            r[i] = (self.0[i] & borrow) | (r[i] & !borrow);
            i += 1;
        }

        Fp(r)
    }

    /// Montgomery reduction of a 768-bit product, word by word
    #[inline(always)]
    pub(crate) const fn montgomery_reduce(t: [u64; 12]) -> Fp {
        let mut t = t;
        let mut carry_hi = 0;
        let mut i = 0;
        while i < 6 {
            let k = t[i].wrapping_mul(INV);
            let (_, mut carry) = mac(t[i], k, MODULUS[0], 0);
            let mut j = 1;
            while j < 6 {
                let (r, c) = mac(t[i + j], k, MODULUS[j], carry);
                t[i + j] = r;
                carry = c;
                j += 1;
            }
            let (r, c) = adc(t[i + 6], carry_hi, carry);
            t[i + 6] = r;
            carry_hi = c;
            i += 1;
        }

        (&Fp([t[6], t[7], t[8], t[9], t[10], t[11]])).subtract_p()
    }
}

// ============================================================================
// Core Field Operations
// ============================================================================

impl Fp {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp {
        Fp([0, 0, 0, 0, 0, 0])
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp {
        R
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Fp::zero())
    }

    /// Create from Montgomery limbs without checking canonicity
    pub const fn from_raw_unchecked(v: [u64; 6]) -> Fp {
        Fp(v)
    }

    /// Add two field elements
    #[inline]
    pub const fn add(&self, rhs: &Fp) -> Fp {
        let mut d = [0u64; 6];
        let mut carry = 0;
        let mut i = 0;
        while i < 6 {
            let (r, c) = adc(self.0[i], rhs.0[i], carry);
            d[i] = r;
            carry = c;
            i += 1;
        }

        // 2p < 2^384, the final carry is always zero
        (&Fp(d)).subtract_p()
    }

    /// Double a field element
    #[inline]
    pub const fn double(&self) -> Fp {
        self.add(self)
    }

    /// Subtract two field elements
    #[inline]
    pub const fn sub(&self, rhs: &Fp) -> Fp {
        (&rhs.neg()).add(self)
    }

    /// Negate a field element
    #[inline]
    pub const fn neg(&self) -> Fp {
        let mut d = [0u64; 6];
        let mut borrow = 0;
        let mut i = 0;
        while i < 6 {
            let (r, b) = sbb(MODULUS[i], self.0[i], borrow);
            d[i] = r;
            borrow = b;
            i += 1;
        }

        // -0 must stay 0 rather than become p
        let mask = (((self.0[0] | self.0[1] | self.0[2] | self.0[3] | self.0[4] | self.0[5]) == 0)
            as u64)
            .wrapping_sub(1);

        let mut i = 0;
        while i < 6 {
            d[i] &= mask;
            i += 1;
        }

        Fp(d)
    }

    /// Multiply two field elements (operand scanning, then Montgomery reduction)
    #[inline]
    pub const fn mul(&self, rhs: &Fp) -> Fp {
        let mut t = [0u64; 12];
        let mut i = 0;
        while i < 6 {
            let mut carry = 0;
            let mut j = 0;
            while j < 6 {
                let (r, c) = mac(t[i + j], self.0[i], rhs.0[j], carry);
                t[i + j] = r;
                carry = c;
                j += 1;
            }
            t[i + 6] = carry;
            i += 1;
        }

        Self::montgomery_reduce(t)
    }

    /// Square this element
    ///
    /// Computes the off-diagonal products once, doubles them, then adds the
    /// diagonal squares.
    #[inline]
    pub const fn square(&self) -> Fp {
        let mut t = [0u64; 12];
        let mut i = 0;
        while i < 5 {
            let mut carry = 0;
            let mut j = i + 1;
            while j < 6 {
                let (r, c) = mac(t[i + j], self.0[i], self.0[j], carry);
                t[i + j] = r;
                carry = c;
                j += 1;
            }
            t[i + 6] = carry;
            i += 1;
        }

        let mut k = 11;
        while k > 0 {
            t[k] = (t[k] << 1) | (t[k - 1] >> 63);
            k -= 1;
        }

        let mut carry = 0;
        let mut i = 0;
        while i < 6 {
            let (r, c) = mac(t[2 * i], self.0[i], self.0[i], carry);
            t[2 * i] = r;
            let (r, c) = adc(t[2 * i + 1], 0, c);
            t[2 * i + 1] = r;
            carry = c;
            i += 1;
        }

        Self::montgomery_reduce(t)
    }

    /// Multiply by the small constant 5 using two doublings and an addition
    #[inline]
    pub const fn mul_by_5(&self) -> Fp {
        let quad = self.double().double();
        (&quad).add(self)
    }

    /// Multiply by -1/5, the base field image of the twist map
    #[inline]
    pub const fn mul_by_nonresidue_inv(&self) -> Fp {
        (&self.mul(&Fp::FIVE_INV)).neg()
    }
}

// ============================================================================
// Advanced Field Operations
// ============================================================================

impl Fp {
    /// Variable-time exponentiation
    ///
    /// Only the exponent influences the running time.
    pub fn pow_vartime(&self, by: &[u64; 6]) -> Self {
        let mut res = Self::one();
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

    /// Multiplicative inverse
    ///
    /// Returns none for zero.
    #[inline]
    pub fn invert(&self) -> CtOption<Self> {
        // Fermat's little theorem: a^(p-2)
        let t = self.pow_vartime(&BLS12_377_MODULUS_MINUS_TWO);

        CtOption::new(t, !self.is_zero())
    }

    /// Legendre symbol: 1 for non-zero squares, -1 for non-squares, 0 for zero
    pub fn legendre(&self) -> i8 {
        let s = self.pow_vartime(&BLS12_377_MODULUS_MINUS_ONE_DIV_TWO);
        if bool::from(s.is_zero()) {
            0
        } else if bool::from(s.ct_eq(&Fp::one())) {
            1
        } else {
            -1
        }
    }
}

// ============================================================================
// Serialization
// ============================================================================

impl Fp {
    /// Decode from big-endian bytes
    ///
    /// Returns none unless the encoded integer is below the modulus.
    pub fn from_bytes(bytes: &[u8; BLS12_377_FP_SIZE]) -> CtOption<Fp> {
        let mut tmp = Fp::zero();
        for (i, chunk) in bytes.chunks_exact(8).enumerate() {
            let mut limb = [0u8; 8];
            limb.copy_from_slice(chunk);
            tmp.0[5 - i] = u64::from_be_bytes(limb);
        }

        // Check if < modulus
        let mut borrow = 0;
        for (limb, m) in tmp.0.iter().zip(MODULUS.iter()) {
            borrow = sbb(*limb, *m, borrow).1;
        }

        let is_some = (borrow as u8) & 1;

        // Convert to Montgomery form
        tmp *= &R2;

        CtOption::new(tmp, Choice::from(is_some))
    }

    /// Decode from an untrusted big-endian byte slice
    pub fn deserialize(bytes: &[u8]) -> Result<Fp> {
        validate::length("BLS12-377 Fp", bytes.len(), BLS12_377_FP_SIZE)?;

        let mut buf = [0u8; BLS12_377_FP_SIZE];
        buf.copy_from_slice(bytes);

        let decoded = Fp::from_bytes(&buf);
        let canonical = bool::from(decoded.is_some());
        #[cfg(feature = "tracing")]
        if !canonical {
            tracing::trace!("rejected non-canonical BLS12-377 Fp encoding");
        }
        validate::parameter(canonical, "BLS12-377 Fp", "value is not less than the modulus")?;

        Ok(decoded.unwrap_or(Fp::zero()))
    }

    /// Encode to big-endian bytes
    pub fn to_bytes(self) -> [u8; BLS12_377_FP_SIZE] {
        // Convert from Montgomery form
        let tmp = Fp::montgomery_reduce([
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5],
            0, 0, 0, 0, 0, 0,
        ]);

        let mut res = [0; BLS12_377_FP_SIZE];
        for (chunk, limb) in res.chunks_exact_mut(8).zip(tmp.0.iter().rev()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }

        res
    }

    /// Create a uniformly distributed random field element
    pub fn random(mut rng: impl RngCore) -> Fp {
        let mut bytes = [0u8; 96];
        rng.fill_bytes(&mut bytes);

        let mut limbs = [0u64; 12];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_be_bytes(word);
        }

        Fp::from_u768(limbs)
    }

    /// Reduce a big-endian 768-bit number modulo p
    fn from_u768(limbs: [u64; 12]) -> Fp {
        // Split into two 384-bit halves: d1 * 2^384 + d0
        let d1 = Fp([limbs[5], limbs[4], limbs[3], limbs[2], limbs[1], limbs[0]]);
        let d0 = Fp([limbs[11], limbs[10], limbs[9], limbs[8], limbs[7], limbs[6]]);
        d0 * R2 + d1 * R3
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [0u8; 2 * BLS12_377_FP_SIZE];
        hex::encode_to_slice(self.to_bytes(), &mut buf).map_err(|_| fmt::Error)?;
        let digits = core::str::from_utf8(&buf).map_err(|_| fmt::Error)?;
        write!(f, "0x{}", digits)
    }
}

impl Default for Fp {
    fn default() -> Self {
        Fp::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp {}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
            & self.0[4].ct_eq(&other.0[4])
            & self.0[5].ct_eq(&other.0[5])
    }
}

impl Eq for Fp {}
impl PartialEq for Fp {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut r = [0u64; 6];
        for (i, limb) in r.iter_mut().enumerate() {
            *limb = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        Fp(r)
    }
}

impl<'a> Neg for &'a Fp {
    type Output = Fp;
    #[inline]
    fn neg(self) -> Fp { self.neg() }
}

impl Neg for Fp {
    type Output = Fp;
    #[inline]
    fn neg(self) -> Fp { -&self }
}

impl<'a, 'b> Sub<&'b Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn sub(self, rhs: &'b Fp) -> Fp { self.sub(rhs) }
}

impl<'a, 'b> Add<&'b Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn add(self, rhs: &'b Fp) -> Fp { self.add(rhs) }
}

impl<'a, 'b> Mul<&'b Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn mul(self, rhs: &'b Fp) -> Fp { self.mul(rhs) }
}

impl<'b> Add<&'b Fp> for Fp {
    type Output = Fp;
    #[inline]
    fn add(self, rhs: &'b Fp) -> Fp { &self + rhs }
}

impl<'a> Add<Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn add(self, rhs: Fp) -> Fp { self + &rhs }
}

impl Add<Fp> for Fp {
    type Output = Fp;
    #[inline]
    fn add(self, rhs: Fp) -> Fp { &self + &rhs }
}

impl<'b> Sub<&'b Fp> for Fp {
    type Output = Fp;
    #[inline]
    fn sub(self, rhs: &'b Fp) -> Fp { &self - rhs }
}

impl<'a> Sub<Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn sub(self, rhs: Fp) -> Fp { self - &rhs }
}

impl Sub<Fp> for Fp {
    type Output = Fp;
    #[inline]
    fn sub(self, rhs: Fp) -> Fp { &self - &rhs }
}

impl<'b> Mul<&'b Fp> for Fp {
    type Output = Fp;
    #[inline]
    fn mul(self, rhs: &'b Fp) -> Fp { &self * rhs }
}

impl<'a> Mul<Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn mul(self, rhs: Fp) -> Fp { self * &rhs }
}

impl Mul<Fp> for Fp {
    type Output = Fp;
    #[inline]
    fn mul(self, rhs: Fp) -> Fp { &self * &rhs }
}

impl SubAssign<Fp> for Fp {
    #[inline]
    fn sub_assign(&mut self, rhs: Fp) { *self = &*self - &rhs; }
}

impl AddAssign<Fp> for Fp {
    #[inline]
    fn add_assign(&mut self, rhs: Fp) { *self = &*self + &rhs; }
}

impl MulAssign<Fp> for Fp {
    #[inline]
    fn mul_assign(&mut self, rhs: Fp) { *self = &*self * &rhs; }
}

impl<'b> SubAssign<&'b Fp> for Fp {
    #[inline]
    fn sub_assign(&mut self, rhs: &'b Fp) { *self = &*self - rhs; }
}

impl<'b> AddAssign<&'b Fp> for Fp {
    #[inline]
    fn add_assign(&mut self, rhs: &'b Fp) { *self = &*self + rhs; }
}

impl<'b> MulAssign<&'b Fp> for Fp {
    #[inline]
    fn mul_assign(&mut self, rhs: &'b Fp) { *self = &*self * rhs; }
}
