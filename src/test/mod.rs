//! One file per subject under test, mirroring the crate's module layout.

mod round;
mod scalar;
mod sbox;
