use crate::bitslice::{BlockLanes, MatchMask};

/// Compares two bit-major block buffers lane by lane. Bit `i` of the result
/// is 0 exactly when lane `i`'s 64-bit block matched in both `a` and `b`.
pub fn compare(a: &BlockLanes, b: &BlockLanes) -> MatchMask {
    let mut result = 0u64;
    for i in 0..64 {
        result |= a.0[i] ^ b.0[i];
        if result == u64::MAX {
            break;
        }
    }
    MatchMask(result)
}
