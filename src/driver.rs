//! Chunked enumeration of the 56-bit effective DES key space.
//!
//! One [`Driver`] batch holds 64 parallel keys that differ only in their low
//! 6 bits (seeded to enumerate 0..64), and [`Driver::advance`] ripples a
//! carry through the rest of the lanes to move every key forward by 64 at
//! once. A prefix fixes the high `56 - CHUNK_BITS` bits identically across
//! all 64 lanes, so one process instance only ever explores its assigned
//! shard of the key space.

use crate::{
    bitslice::{self, BlockLanes, KeyLanes},
    error::PrefixError,
    tables,
};

/// Holds the 56-lane key register for one chunked key-search run.
pub struct Driver {
    keys: KeyLanes,
    prefix_len: usize,
}

impl Driver {
    /// Builds a driver whose key register's low 6 bits enumerate 0..64 and
    /// whose high `56 - chunk_bits` bits are fixed to `prefix` (a string of
    /// `'0'`/`'1'`) across every lane. Fails if `prefix` is not exactly
    /// `56 - chunk_bits` characters of `'0'`/`'1'`.
    pub fn new(prefix: &str, chunk_bits: u32) -> Result<Self, PrefixError> {
        let expected_len = 56 - chunk_bits as usize;
        if prefix.len() != expected_len || !prefix.chars().all(|c| c == '0' || c == '1') {
            return Err(PrefixError {
                expected_len,
                actual_len: prefix.len(),
            });
        }

        let mut keys = [0u64; 56];
        for (i, c) in prefix.chars().enumerate() {
            keys[i] = if c == '1' { u64::MAX } else { 0 };
        }
        keys[50..56].copy_from_slice(&tables::KEY_ENUMERATION_SEED);
        Ok(Driver {
            keys: KeyLanes(keys),
            prefix_len: expected_len,
        })
    }

    /// Advances every one of the 64 parallel keys by 64, by rippling a
    /// carry through the lanes above the chunk's low 6 bits.
    pub fn advance(&mut self) {
        for j in self.prefix_len..56 {
            self.keys.0[j] ^= u64::MAX;
            if self.keys.0[j] != 0 {
                break;
            }
        }
    }

    /// Runs `2^(chunk_bits - 6)` batches of 64 decryptions each against
    /// `plaintext`/`ciphertext` (raw, not yet zipped), calling `on_match`
    /// with each 56-bit candidate key that decrypts `ciphertext` to
    /// `plaintext`.
    pub fn run(&mut self, plaintext: u64, ciphertext: u64, chunk_bits: u32, mut on_match: impl FnMut(u64)) {
        let plaintext_zipped = bitslice::zip64(&[plaintext; 64]);
        let ciphertext_zipped = bitslice::zip64(&[ciphertext; 64]);

        let batches = 1u64 << (chunk_bits - 6);
        for _ in 0..batches {
            let mut candidate = ciphertext_zipped;
            bitslice::des_decrypt_inplace(&mut candidate, &self.keys);

            let mask = bitslice::compare(&candidate, &plaintext_zipped);
            if mask.0 != u64::MAX {
                let key_block = bitslice::unzip64(&BlockLanes(key_lanes_to_block(&self.keys)));
                for lane in mask.matching_lanes() {
                    on_match(key_block[lane]);
                }
            }

            self.advance();
        }
    }
}

/// Re-pads 56 key lanes back out to 64 (zeroing the 8 dropped parity lanes)
/// so the shared [`bitslice::zip64`] transpose can be reused to read
/// individual lanes' key values back out in block-major form. Because the
/// padding lanes are the most-significant ones, each recovered block value
/// already equals the plain 56-bit key with no further shifting.
fn key_lanes_to_block(key: &KeyLanes) -> [u64; 64] {
    let mut padded = [0u64; 64];
    padded[8..64].copy_from_slice(&key.0);
    padded
}
