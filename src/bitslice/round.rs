//! One Feistel round, fusing expansion, subkey XOR, and S-box substitution
//! into a single pass over 8 S-boxes, scattering each S-box's four outputs
//! through the Feistel P-permutation into the returned half.

use crate::{
    bitslice::{sbox, BlockLanes, HalfLanes, KeyLanes},
    tables,
};

/// Runs one Feistel round against `state`, XORing each round's key bits
/// (selected by `subkey_order[round]`, picked internally from the 16-row
/// table the caller supplies) with the fused IP+expansion lanes, and
/// substituting through the eight S-boxes.
///
/// `round` selects both which of the two expansion tables applies — even
/// and odd rounds read different (IP-fused, not contiguous) halves of
/// `state` — and which row of `subkey_order` supplies this round's key
/// bits. `subkey_order` is forward (0..16) for encryption and reversed for
/// decryption; the caller picks which to pass, and is responsible for
/// XORing the returned half into the correct target half of `state`. This
/// function only computes the Feistel output, so the same kernel serves
/// both the encryption and decryption automaton in
/// [`crate::bitslice::cipher`].
pub fn feistel_round(state: &BlockLanes, key: &KeyLanes, subkey_order: &[[u8; 48]; 16], round: usize) -> HalfLanes {
    let expansion = if round % 2 == 0 {
        &tables::EVEN_EXPANSION
    } else {
        &tables::ODD_EXPANSION
    };
    let subkey = &subkey_order[round];

    let mut expanded = [0u64; 48];
    for i in 0..48 {
        expanded[i] = state.0[expansion[i] as usize] ^ key.0[subkey[i] as usize];
    }

    let mut half = [0u64; 32];
    for sbox_num in 0..8 {
        let base = sbox_num * 6;
        let inputs = [
            expanded[base],
            expanded[base + 1],
            expanded[base + 2],
            expanded[base + 3],
            expanded[base + 4],
            expanded[base + 5],
        ];
        let (o0, o1, o2, o3) = sbox::apply_by_index(sbox_num, inputs);
        let outs = [o0, o1, o2, o3];
        for (p, out) in outs.into_iter().enumerate() {
            half[tables::FEISTEL_OUTPUT_ORDER[sbox_num * 4 + p] as usize] = out;
        }
    }
    HalfLanes(half)
}
