use {
    crate::bitslice::{BlockLanes, KeyLanes},
    docext::docext,
};

/// Transpose 64 blocks into bit-major form (or back): bit `i` of block `j`
/// becomes bit `j` of lane `i`. Bit 0 is the most significant bit of each
/// word.
///
/// Self-inverse: `zip64(zip64(x)) == x` for any `x`, since transposing a
/// matrix twice returns the original matrix:
///
/// $$
/// \mathrm{zip64}(x)_i = \sum_{j=0}^{63} \mathrm{bit}(x_j, i) \cdot 2^{63-j}
/// $$
#[docext]
pub fn zip64(input: &[u64; 64]) -> BlockLanes {
    let mut output = [0u64; 64];
    for (bitnum, word) in output.iter_mut().enumerate() {
        let mut w = 0u64;
        for (blocknum, &block) in input.iter().enumerate() {
            let bit = (block >> (63 - bitnum)) & 1;
            w |= bit << (63 - blocknum);
        }
        *word = w;
    }
    BlockLanes(output)
}

/// [`zip64`] followed by dropping the 8 DES parity lanes (raw zipped
/// positions 0..7), yielding the 56-lane key representation the cipher
/// kernel works in. Not self-inverse.
pub fn zip56(input: &[u64; 64]) -> KeyLanes {
    let BlockLanes(full) = zip64(input);
    let mut output = [0u64; 56];
    output.copy_from_slice(&full[8..64]);
    KeyLanes(output)
}

/// Inverse of [`zip64`]: recover 64 block-major words from bit-major lanes.
/// Since `zip64` is self-inverse this is the same transform, exposed under
/// its own name for readability at call sites that convert kernel output
/// back to scalar blocks.
pub fn unzip64(lanes: &BlockLanes) -> [u64; 64] {
    zip64(&lanes.0).0
}
