//! DES S-boxes realised as Boolean gate networks instead of lookup tables.
//!
//! A classical S-box cannot be used directly under bitslicing: all 64 lanes
//! of a [`crate::bitslice::BlockLanes`] have a *different* 6-bit input in the
//! same machine word, so there is no single scalar to index a table with.
//! Each S-box must instead be expressed as a fixed sequence of bitwise AND,
//! OR, XOR and NOT operations closed entirely over lane words.
//!
//! The optimized ~55-gate networks published for this purpose (Matthew
//! Kwan's 1998 DES S-box circuits) are not available source material here.
//! Rather than transcribe a gate sequence from memory with no way to check
//! it bit-for-bit, each S-box below is built from its 64-entry truth table
//! ([`crate::tables::SBOX`]) via recursive Shannon expansion: a binary
//! decision tree over the six input lanes, where each decision is one
//! bitsliced multiplexer `f ^ (c & (t ^ f))`. This costs more gates than
//! Kwan's hand-optimized circuit, but it is correct by construction against
//! the same truth table a scalar implementation would use.

use crate::tables::SBOX;

/// Bitsliced multiplexer: selects `t` where `c` is all-ones, `f` where `c`
/// is all-zero, per lane.
fn mux(c: u64, t: u64, f: u64) -> u64 {
    f ^ (c & (t ^ f))
}

/// Evaluates one output bit of `table` as a function of the six input lanes,
/// by recursively splitting the table on each lane from most to least
/// significant.
fn shannon(table: &[u8], vars: &[u64], bit: u8) -> u64 {
    match vars.split_first() {
        None => {
            if (table[0] >> bit) & 1 == 1 {
                u64::MAX
            } else {
                0
            }
        }
        Some((&c, rest)) => {
            let half = table.len() / 2;
            let f = shannon(&table[..half], rest, bit);
            let t = shannon(&table[half..], rest, bit);
            mux(c, t, f)
        }
    }
}

/// Applies DES S-box `n` (0..8) to six input lanes, producing four output
/// lanes ordered most significant first, matching [`crate::tables::SBOX`]'s
/// nibble convention.
fn apply(n: usize, a: [u64; 6]) -> (u64, u64, u64, u64) {
    let table = &SBOX[n];
    (
        shannon(table, &a, 3),
        shannon(table, &a, 2),
        shannon(table, &a, 1),
        shannon(table, &a, 0),
    )
}

macro_rules! sbox_fn {
    ($name:ident, $n:literal) => {
        /// Bitsliced DES S-box: six input lanes to four output lanes.
        pub fn $name(a0: u64, a1: u64, a2: u64, a3: u64, a4: u64, a5: u64) -> (u64, u64, u64, u64) {
            apply($n, [a0, a1, a2, a3, a4, a5])
        }
    };
}

sbox_fn!(s0, 0);
sbox_fn!(s1, 1);
sbox_fn!(s2, 2);
sbox_fn!(s3, 3);
sbox_fn!(s4, 4);
sbox_fn!(s5, 5);
sbox_fn!(s6, 6);
sbox_fn!(s7, 7);

/// Dispatches to `s0`..`s7` by index, used by the round kernel which loops
/// over all eight boxes.
pub(crate) fn apply_by_index(n: usize, a: [u64; 6]) -> (u64, u64, u64, u64) {
    apply(n, a)
}
