//! Constants for the BLS12-377 base field and its quadratic extension

/// Size of a BLS12-377 base field element in bytes
pub const BLS12_377_FP_SIZE: usize = 48;

/// Base field modulus
/// p = 0x01ae3a4617c510eac63b05c06ca1493b1a22d9f300f5138f1ef3622fba094800170b5d44300000008508c00000000001
pub const BLS12_377_MODULUS: [u64; 6] = [
    0x8508_c000_0000_0001,
    0x170b_5d44_3000_0000,
    0x1ef3_622f_ba09_4800,
    0x1a22_d9f3_00f5_138f,
    0xc63b_05c0_6ca1_493b,
    0x01ae_3a46_17c5_10ea,
];

/// p - 2, the Fermat inversion exponent
pub const BLS12_377_MODULUS_MINUS_TWO: [u64; 6] = [
    0x8508_bfff_ffff_ffff,
    0x170b_5d44_3000_0000,
    0x1ef3_622f_ba09_4800,
    0x1a22_d9f3_00f5_138f,
    0xc63b_05c0_6ca1_493b,
    0x01ae_3a46_17c5_10ea,
];

/// (p - 1) / 2, the Euler criterion exponent
pub const BLS12_377_MODULUS_MINUS_ONE_DIV_TWO: [u64; 6] = [
    0x4284_6000_0000_0000,
    0x0b85_aea2_1800_0000,
    0x8f79_b117_dd04_a400,
    0x8d11_6cf9_807a_89c7,
    0x631d_82e0_3650_a49d,
    0x00d7_1d23_0be2_8875,
];

/// Exponent of the cube-root map over Fp2
/// e = (p + 2) / 9 = 0x2fcd9602a41e52f994c7c00c11ebb13bcafbc5aac5e5ba91a943cc6a010800028f7c2405555555641d6aaaaaaaaaab
pub const BLS12_377_CBRT_EXP: [u64; 6] = [
    0x641d_6aaa_aaaa_aaab,
    0x028f_7c24_0555_5555,
    0x91a9_43cc_6a01_0800,
    0x3bca_fbc5_aac5_e5ba,
    0xf994_c7c0_0c11_ebb1,
    0x002f_cd96_02a4_1e52,
];

/// Bit length of [`BLS12_377_CBRT_EXP`]
pub const BLS12_377_CBRT_EXP_BITS: u32 = 374;
