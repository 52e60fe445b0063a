//! Constant values for fptower field arithmetic
//!
//! This crate holds the curve parameters shared by the arithmetic crates.
//! All integers are stored as little-endian arrays of 64-bit limbs.

#![no_std]

pub mod pairing;
