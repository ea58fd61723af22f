use crate::bitslice::{s0, s1, s2, s3, s4, s5, s6, s7};

type SboxFn = fn(u64, u64, u64, u64, u64, u64) -> (u64, u64, u64, u64);

const SBOXES: [SboxFn; 8] = [s0, s1, s2, s3, s4, s5, s6, s7];

/// Every S-box's bit-sliced truth table, broadcast to all 64 lanes, must
/// agree with the scalar truth table it's built from, at every one of the
/// 64 possible 6-bit inputs.
#[test]
fn matches_truth_table_exhaustively() {
    for (n, sbox) in SBOXES.into_iter().enumerate() {
        for input in 0u8..64 {
            let bits: [u64; 6] = std::array::from_fn(|i| {
                if (input >> (5 - i)) & 1 == 1 {
                    u64::MAX
                } else {
                    0
                }
            });
            let (o0, o1, o2, o3) = sbox(bits[0], bits[1], bits[2], bits[3], bits[4], bits[5]);

            let expected = super::scalar::sbox(n, input);
            for (bit_index, out) in [o0, o1, o2, o3].into_iter().enumerate() {
                let expected_bit = (expected >> (3 - bit_index)) & 1;
                let got_bit = out & 1;
                assert_eq!(
                    got_bit, expected_bit as u64,
                    "sbox {n} input {input:06b} output bit {bit_index}"
                );
                // Every lane was broadcast the same input, so every lane
                // must agree.
                assert!(out == 0 || out == u64::MAX, "sbox {n} output not uniform across lanes");
            }
        }
    }
}
