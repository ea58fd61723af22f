//! A bitsliced implementation of DES, built to exhaustively search the
//! 56-bit effective key space against a known plaintext/ciphertext pair.
//!
//! The cipher kernel in [`bitslice`] holds one bit of 64 independent DES
//! computations per machine word, so a single pass of bitwise instructions
//! runs 64 decryptions in lockstep. [`driver`] shards the key space into
//! batches of 64 and enumerates them using that kernel.

#[cfg(test)]
mod test;

pub mod bitslice;
pub mod driver;
pub mod error;
pub mod tables;

pub use {driver::Driver, error::PrefixError};
