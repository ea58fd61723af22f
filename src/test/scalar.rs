//! Single-block reference DES, used only as a cross-validation oracle for
//! the bitsliced kernel under test. It runs the exact same tables
//! ([`crate::tables`]) as [`crate::bitslice`] does, evaluating one bit at a
//! time instead of 64 lanes at once, so a mismatch between this module and
//! [`crate::bitslice::cipher`] can only mean the vectorised kernel diverged
//! from the tables it's built from, not that the tables themselves are
//! wrong.
//!
//! Not part of the crate's public API: a scalar DES reference is ordinary
//! work, kept only for cross-validation in tests.

use crate::tables::{self, SBOX};

fn bit(value: u64, width: u32, index: u8) -> u64 {
    (value >> (width - 1 - index as u32)) & 1
}

/// Masks a raw 64-bit key down to the low 56 bits, matching
/// [`crate::bitslice::zip56`]'s convention of dropping raw bit positions
/// 0..7.
pub(super) fn effective_key(raw_key: u64) -> u64 {
    raw_key & ((1u64 << 56) - 1)
}

/// One Feistel round's 64-bit delta, scalarising
/// [`crate::bitslice::round::feistel_round`] bit by bit: the eight S-box
/// outputs are scattered through [`tables::FEISTEL_OUTPUT_ORDER`] into a
/// 32-bit half first, then that half is written out through the round's
/// block-order table, exactly as [`crate::bitslice::cipher::run_rounds`]
/// does with the 64-lane kernel.
fn feistel_delta(state: u64, key: u64, subkey_order: &[u8; 48], round: usize) -> u64 {
    let (expansion, block_order) = if round % 2 == 0 {
        (&tables::EVEN_EXPANSION, &tables::LEFT_BLOCK_ORDER)
    } else {
        (&tables::ODD_EXPANSION, &tables::RIGHT_BLOCK_ORDER)
    };

    let mut half = 0u32;
    for sbox_num in 0..8 {
        let mut index = 0u64;
        for j in 0..6 {
            let i = sbox_num * 6 + j;
            let e = bit(state, 64, expansion[i]);
            let k = bit(key, 56, subkey_order[i]);
            index = (index << 1) | (e ^ k);
        }
        let nibble = SBOX[sbox_num][index as usize];
        for p in 0..4 {
            if (nibble >> (3 - p)) & 1 == 1 {
                half |= 1u32 << (31 - tables::FEISTEL_OUTPUT_ORDER[sbox_num * 4 + p] as u32);
            }
        }
    }

    let mut delta = 0u64;
    for i in 0..32u8 {
        if (half >> (31 - i)) & 1 == 1 {
            delta |= 1u64 << (63 - block_order[i as usize] as u32);
        }
    }
    delta
}

/// Subkey bit selection in encryption (round 0..15) order, derived the same
/// way [`crate::bitslice::cipher::ENCRYPT_SUBKEY_ORDER`] is.
fn encrypt_subkey_order() -> [[u8; 48]; 16] {
    let mut out = [[0u8; 48]; 16];
    for r in 0..16 {
        out[r] = tables::DECRYPT_SUBKEY_ORDER[15 - r];
    }
    out
}

fn run_rounds(mut state: u64, key: u64, subkeys: &[[u8; 48]; 16]) -> u64 {
    for (round, subkey) in subkeys.iter().enumerate() {
        state ^= feistel_delta(state, key, subkey, round);
    }
    state
}

/// Encrypts `plaintext` under the 56-bit effective `key` (as produced by
/// [`effective_key`]). `plaintext` is assumed already expressed in the
/// IP-fused bit order `crate::tables`'s addressing tables use; no Initial
/// Permutation or its inverse is applied here, matching
/// [`crate::bitslice::cipher`]'s convention.
pub(super) fn encrypt(plaintext: u64, key: u64) -> u64 {
    run_rounds(plaintext, key, &encrypt_subkey_order())
}

/// Decrypts `ciphertext` under the 56-bit effective `key`.
pub(super) fn decrypt(ciphertext: u64, key: u64) -> u64 {
    run_rounds(ciphertext, key, &tables::DECRYPT_SUBKEY_ORDER)
}

/// Scalar lookup for DES S-box `n` (0..8) at a 6-bit input, matching
/// [`crate::bitslice::sbox`]'s bit-sliced version.
pub(super) fn sbox(n: usize, input: u8) -> u8 {
    SBOX[n][input as usize]
}
