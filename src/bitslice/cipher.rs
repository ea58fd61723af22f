//! The 16-round Feistel automaton.
//!
//! Both directions share [`feistel_round`](crate::bitslice::round::feistel_round)
//! and the same expansion tables; only the subkey order differs, per the
//! standard DES property that decryption is encryption run with its subkeys
//! in reverse.
//!
//! `state` is never permuted by this module. The Initial Permutation and its
//! inverse are never run as separate passes here: the whole kernel's calling
//! convention is that plaintext and ciphertext already arrive, via `zip64`,
//! in the IP-fused bit order [`crate::tables`]'s addressing tables assume,
//! and they leave in that same order. The automaton's only job is the 16
//! rounds.

use crate::{
    bitslice::{round::feistel_round, BlockLanes, KeyLanes},
    tables,
};

/// Per-round subkey bit selection in encryption order: round `r` here is
/// [`tables::DECRYPT_SUBKEY_ORDER`]'s round `15 - r`, since DES decryption
/// is encryption with the round order reversed.
pub const ENCRYPT_SUBKEY_ORDER: [[u8; 48]; 16] = reverse_rounds(tables::DECRYPT_SUBKEY_ORDER);

const fn reverse_rounds(input: [[u8; 48]; 16]) -> [[u8; 48]; 16] {
    let mut out = [[0u8; 48]; 16];
    let mut r = 0;
    while r < 16 {
        out[r] = input[15 - r];
        r += 1;
    }
    out
}

/// Encrypts `state` in place under `key`.
pub fn des_encrypt_inplace(state: &mut BlockLanes, key: &KeyLanes) {
    run_rounds(state, key, &ENCRYPT_SUBKEY_ORDER);
}

/// Decrypts `state` in place under `key`.
pub fn des_decrypt_inplace(state: &mut BlockLanes, key: &KeyLanes) {
    run_rounds(state, key, &tables::DECRYPT_SUBKEY_ORDER);
}

/// Runs all 16 rounds of `subkeys` against `state`, XORing each round's
/// [`feistel_round`] output into whichever half that round didn't read from
/// (even rounds write [`tables::LEFT_BLOCK_ORDER`], odd rounds
/// [`tables::RIGHT_BLOCK_ORDER`]) — the "swap halves" step of a textbook
/// Feistel cipher, folded into this alternating write target instead of
/// moved data.
fn run_rounds(state: &mut BlockLanes, key: &KeyLanes, subkeys: &[[u8; 48]; 16]) {
    for round in 0..16 {
        let delta = feistel_round(state, key, subkeys, round);
        let target = if round % 2 == 0 {
            &tables::LEFT_BLOCK_ORDER
        } else {
            &tables::RIGHT_BLOCK_ORDER
        };
        for i in 0..32 {
            state.0[target[i] as usize] ^= delta.0[i];
        }
    }
}
