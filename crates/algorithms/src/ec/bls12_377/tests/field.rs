//! Base field tests for BLS12-377

use super::super::Fp;
use crate::error::Error;

use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Big-endian encoding of p - 1
const P_MINUS_ONE_BYTES: [u8; 48] = [
    1, 174, 58, 70, 23, 197, 16, 234, 198, 59, 5, 192, 108, 161, 73, 59,
    26, 34, 217, 243, 0, 245, 19, 143, 30, 243, 98, 47, 186, 9, 72, 0,
    23, 11, 93, 68, 48, 0, 0, 0, 133, 8, 192, 0, 0, 0, 0, 0,
];

/// Big-endian encoding of p
const P_BYTES: [u8; 48] = [
    1, 174, 58, 70, 23, 197, 16, 234, 198, 59, 5, 192, 108, 161, 73, 59,
    26, 34, 217, 243, 0, 245, 19, 143, 30, 243, 98, 47, 186, 9, 72, 0,
    23, 11, 93, 68, 48, 0, 0, 0, 133, 8, 192, 0, 0, 0, 0, 1,
];

fn fa() -> Fp {
    Fp::from_raw_unchecked([
        0x65d3_c8b2_d918_3585,
        0x0c6a_7844_26d9_3cc4,
        0xbea3_c96b_1e27_1c49,
        0xd2b6_8968_dc1a_d7c2,
        0x133d_c18e_35dd_b8ee,
        0x007f_bfd0_6d99_8716,
    ])
}

fn fb() -> Fp {
    Fp::from_raw_unchecked([
        0xcf03_88f9_b2e1_a00e,
        0xbfa9_cfb3_1951_ac93,
        0x160a_df30_5e8e_0731,
        0x2ecc_0a46_74ba_3413,
        0x1c8a_9e31_ad6c_2d95,
        0x013f_3878_ed28_53ab,
    ])
}

#[test]
fn test_fp_conditional_selection() {
    let a = Fp([1, 2, 3, 4, 5, 6]);
    let b = Fp([7, 8, 9, 10, 11, 12]);

    assert_eq!(
        ConditionallySelectable::conditional_select(&a, &b, Choice::from(0u8)),
        a
    );
    assert_eq!(
        ConditionallySelectable::conditional_select(&a, &b, Choice::from(1u8)),
        b
    );
}

#[test]
fn test_fp_equality() {
    fn is_equal(a: &Fp, b: &Fp) -> bool {
        let eq = a == b;
        let ct_eq = a.ct_eq(b);
        assert_eq!(eq, bool::from(ct_eq));
        eq
    }

    assert!(is_equal(&Fp([1, 2, 3, 4, 5, 6]), &Fp([1, 2, 3, 4, 5, 6])));
    assert!(!is_equal(&Fp([7, 2, 3, 4, 5, 6]), &Fp([1, 2, 3, 4, 5, 6])));
    assert!(!is_equal(&Fp([1, 2, 3, 4, 5, 7]), &Fp([1, 2, 3, 4, 5, 6])));
}

#[test]
fn test_fp_multiplication() {
    let c = Fp::from_raw_unchecked([
        0x3c36_ec56_e971_53d9,
        0xddd3_6e67_3a60_f341,
        0xf8cc_edcd_191e_088a,
        0xa27b_b734_09fb_f862,
        0x73ed_4bef_776d_1dd6,
        0x017b_da65_64bd_9a8e,
    ]);

    assert_eq!(fa() * fb(), c);
    assert_eq!(fb() * fa(), c);
}

#[test]
fn test_fp_squaring() {
    let b = Fp::from_raw_unchecked([
        0xf47d_b1cb_8922_eaf5,
        0x64ff_0b96_a1ef_494a,
        0x9c9d_5de4_9533_d93c,
        0x3292_4e10_4913_099f,
        0x01af_e6d4_9066_b45d,
        0x0176_73bf_f8e8_223c,
    ]);

    assert_eq!(fa().square(), b);
    assert_eq!(fa().square(), fa() * fa());
}

#[test]
fn test_fp_addition() {
    let c = Fp::from_raw_unchecked([
        0xafce_91ac_8bf9_d592,
        0xb508_eab3_102a_e957,
        0xb5bb_466b_c2ab_db7a,
        0xe75f_b9bc_4fdf_f846,
        0x698d_59ff_76a8_9d48,
        0x0010_be03_42fc_c9d6,
    ]);

    assert_eq!(fa() + fb(), c);
}

#[test]
fn test_fp_subtraction() {
    let c = Fp::from_raw_unchecked([
        0x1bd8_ffb9_2636_9578,
        0x63cc_05d5_3d87_9031,
        0xc78c_4c6a_79a2_5d17,
        0xbe0d_5915_6855_b73e,
        0xbcee_291c_f512_d494,
        0x00ee_c19d_9836_4455,
    ]);

    assert_eq!(fa() - fb(), c);
    assert_eq!(c + fb(), fa());
}

#[test]
fn test_fp_negation() {
    let b = Fp::from_raw_unchecked([
        0x1f34_f74d_26e7_ca7c,
        0x0aa0_e500_0926_c33c,
        0x604f_98c4_9be2_2bb7,
        0x476c_508a_24da_3bcc,
        0xb2fd_4432_36c3_904c,
        0x012e_7a75_aa2b_89d4,
    ]);

    assert_eq!(-fa(), b);
    assert_eq!(-Fp::zero(), Fp::zero());
    assert!(bool::from((fa() + b).is_zero()));
}

#[test]
fn test_fp_inversion() {
    let b = Fp::from_raw_unchecked([
        0x100c_d7a7_63c5_6754,
        0x34a3_f017_5f34_6583,
        0x9fb3_feac_0b08_b306,
        0x92a9_ab8c_d001_910a,
        0xb86a_5e93_16b5_8559,
        0x009e_81d3_a42d_d571,
    ]);

    assert_eq!(fa().invert().unwrap(), b);
    assert_eq!(fa() * b, Fp::one());
    assert_eq!(Fp::one().invert().unwrap(), Fp::one());
    assert!(bool::from(Fp::zero().invert().is_none()));
}

#[test]
fn test_fp_small_constants() {
    let two = Fp::from_raw_unchecked([
        0x059b_ffff_ffff_fed0,
        0xa281_3f06_ffff_ff62,
        0x3efb_6753_14fa_7fe4,
        0xf69d_2f6e_dcf8_c60b,
        0x99e9_2b7f_0079_09d0,
        0x011a_ccc3_c5fb_e934,
    ]);
    let five = Fp::from_raw_unchecked([
        0x88fd_3fff_ffff_fd07,
        0x7f37_c04d_4fff_fe74,
        0xfe81_201f_fa68_f7bb,
        0x4e66_1ca2_2778_db8c,
        0xba8b_e6fd_148d_4f4f,
        0x0114_c5a3_5730_b618,
    ]);

    assert_eq!(Fp::one().double(), two);
    assert_eq!(Fp::one().mul_by_5(), five);
    assert_eq!(Fp::FIVE, five);
    assert_eq!(Fp::FIVE * Fp::FIVE_INV, Fp::one());
}

#[test]
fn test_fp_mul_by_5() {
    let b = Fp::from_raw_unchecked([
        0x781a_2b7e_3d79_0b98,
        0x2708_fc10_923e_2fd5,
        0x9a3f_8ce7_dcba_456d,
        0x036d_d519_4b91_233e,
        0x99f9_c206_a0b3_536f,
        0x00d0_84cc_0c3a_9283,
    ]);

    assert_eq!(fa().mul_by_5(), b);
    assert_eq!(fa().mul_by_5(), fa() * Fp::FIVE);
    assert_eq!(Fp::zero().mul_by_5(), Fp::zero());
}

#[test]
fn test_fp_mul_by_nonresidue_inv() {
    let b = Fp::from_raw_unchecked([
        0xeda5_f175_d494_c219,
        0x06bc_0d40_d83a_f3d8,
        0x1973_cbca_7795_7d8b,
        0xe04f_d54c_3ac3_0fdf,
        0x7ea4_db96_ed7a_91e7,
        0x0092_8a8b_f396_8559,
    ]);

    assert_eq!(fa().mul_by_nonresidue_inv(), b);
    assert_eq!(b.mul_by_5(), -fa());
}

#[test]
fn test_fp_legendre() {
    assert_eq!(Fp::zero().legendre(), 0);
    assert_eq!(Fp::one().legendre(), 1);
    assert_eq!((-Fp::one()).legendre(), 1);
    assert_eq!(fa().legendre(), -1);
    assert_eq!(fa().square().legendre(), 1);

    // -5 is a non-residue, so u^2 + 5 is irreducible
    assert_eq!((-Fp::FIVE).legendre(), -1);
}

#[test]
fn test_fp_to_bytes() {
    let expected: [u8; 48] = [
        0, 213, 110, 44, 87, 108, 228, 133, 181, 42, 160, 241, 246, 31, 61, 112,
        233, 80, 87, 66, 39, 65, 61, 21, 184, 255, 19, 144, 99, 180, 0, 162,
        87, 216, 2, 23, 254, 146, 80, 219, 227, 170, 94, 204, 248, 113, 49, 254,
    ];

    assert_eq!(fa().to_bytes(), expected);
    assert_eq!(Fp::from_bytes(&expected).unwrap(), fa());
}

#[test]
fn test_fp_from_bytes() {
    let mut a = fa();

    for _ in 0..100 {
        a = a.square();
        let tmp = a.to_bytes();
        let b = Fp::from_bytes(&tmp).unwrap();
        assert_eq!(a, b);
    }

    // Test edge case: p - 1
    assert_eq!(
        -Fp::one(),
        Fp::from_bytes(&P_MINUS_ONE_BYTES).unwrap()
    );

    // Test invalid: value == p
    assert!(bool::from(
        Fp::from_bytes(&P_BYTES).is_none()
    ));

    assert!(bool::from(Fp::from_bytes(&[0xff; 48]).is_none()));
}

#[test]
fn test_fp_deserialize() {
    let bytes = fa().to_bytes();
    assert_eq!(Fp::deserialize(&bytes).unwrap(), fa());

    match Fp::deserialize(&bytes[..47]) {
        Err(Error::Length { expected, actual, .. }) => {
            assert_eq!(expected, 48);
            assert_eq!(actual, 47);
        }
        other => panic!("Expected Length error, got {:?}", other),
    }

    match Fp::deserialize(&[0xff; 48]) {
        Err(Error::Parameter { name, .. }) => assert_eq!(name, "BLS12-377 Fp"),
        other => panic!("Expected Parameter error, got {:?}", other),
    }
}

#[test]
fn test_fp_random_is_canonical() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x377);

    for _ in 0..32 {
        let a = Fp::random(&mut rng);
        assert_eq!(Fp::from_bytes(&a.to_bytes()).unwrap(), a);
    }
}

#[cfg(feature = "std")]
#[test]
fn test_fp_debug() {
    assert_eq!(
        format!("{:?}", Fp::one()),
        "0x000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001"
    );
}

#[test]
fn test_fp_zeroize() {
    use zeroize::Zeroize;

    let mut a = Fp::one();
    a.zeroize();
    assert!(bool::from(a.is_zero()));
}

const FIVE_FROM_ONE: Fp = Fp::one().mul_by_5();
const FIVE_TIMES_INV: Fp = (&Fp::FIVE).mul(&Fp::FIVE_INV);
const MINUS_ONE_FIFTH: Fp = Fp::one().mul_by_nonresidue_inv();
const FIVE_MINUS_ONE: Fp = (&Fp::FIVE).sub(&Fp::one());

#[test]
fn test_const_evaluation() {
    assert_eq!(FIVE_FROM_ONE, Fp::FIVE);
    assert_eq!(FIVE_TIMES_INV, Fp::one());
    assert_eq!(MINUS_ONE_FIFTH, -Fp::FIVE_INV);
    assert_eq!(FIVE_MINUS_ONE, Fp::one().double().double());
}
