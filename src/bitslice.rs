//! The bitsliced DES kernel: one 64-bit word holds one bit position across
//! 64 parallel block, key, or half-block computations, so a single bitwise
//! instruction performs 64 independent cipher steps.
//!
//! See the module-level docs of each submodule for the piece of the cipher
//! it implements; [`cipher`] ties them together into a full 16-round
//! automaton.

mod cipher;
mod compare;
mod lanes;
mod round;
mod sbox;
mod zip;

pub use {
    cipher::{des_decrypt_inplace, des_encrypt_inplace},
    compare::compare,
    lanes::{BlockLanes, HalfLanes, KeyLanes, MatchMask},
    round::feistel_round,
    sbox::{s0, s1, s2, s3, s4, s5, s6, s7},
    zip::{zip56, zip64},
};
