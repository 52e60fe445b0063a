//! Test suite for the BLS12-377 field tower
//!
//! Known answers were computed independently over the integers and are
//! given here in Montgomery form.

mod field;
