/// 64 parallel 64-bit DES blocks in bit-major form: word `i` holds bit `i`
/// (MSB = bit 0) of each of the 64 blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLanes(pub [u64; 64]);

/// One Feistel half (left or right) of 64 parallel blocks, in the same
/// bit-major convention as [`BlockLanes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfLanes(pub [u64; 32]);

/// 64 parallel 56-bit DES keys (parity bits already removed) in bit-major
/// form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLanes(pub [u64; 56]);

/// Per-lane match indicator produced by [`crate::bitslice::compare`]: bit `i`
/// is 0 exactly when lane `i` matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchMask(pub u64);

impl MatchMask {
    /// Whether every one of the 64 lanes matched.
    pub fn all_match(self) -> bool {
        self.0 == 0
    }

    /// Lane indices (0..64) that matched.
    pub fn matching_lanes(self) -> impl Iterator<Item = usize> {
        (0..64).filter(move |&i| (self.0 >> (63 - i)) & 1 == 0)
    }
}
