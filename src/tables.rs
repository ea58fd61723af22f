//! Compile-time permutation and substitution data for bitsliced DES.
//!
//! Every table here is a fused composition of one or more classical DES
//! permutations (IP, E, P) or literal S-box truth tables, transcribed from a
//! from-scratch bitsliced DES implementation. Fusing permutations at
//! table-build time is what lets the round kernel in [`crate::bitslice::round`]
//! turn each DES step into a single indexed XOR instead of a pass over the
//! block. The Initial Permutation never runs as a separate pass at all: the
//! caller's plaintext/ciphertext are assumed already expressed in this
//! IP-fused bit order, so the cipher automaton in
//! [`crate::bitslice::cipher`] only ever runs the 16 rounds below, with no
//! permutation step before or after them.

/// Initial-permutation positions that end up in the left half of the working
/// state on even rounds. The cipher automaton uses this both to know which
/// raw lanes a round's expansion reads on odd rounds (as the *other* half)
/// and, on even rounds, which raw lanes to XOR a round's Feistel output
/// into.
pub const LEFT_BLOCK_ORDER: [u8; 32] = [
    57, 49, 41, 33, 25, 17, 9, 1, 59, 51, 43, 35, 27, 19, 11, 3, 61, 53, 45, 37, 29, 21, 13, 5, 63,
    55, 47, 39, 31, 23, 15, 7,
];

/// Initial-permutation positions that end up in the right half of the
/// working state on odd rounds; see [`LEFT_BLOCK_ORDER`]'s note on how the
/// cipher automaton uses each.
pub const RIGHT_BLOCK_ORDER: [u8; 32] = [
    56, 48, 40, 32, 24, 16, 8, 0, 58, 50, 42, 34, 26, 18, 10, 2, 60, 52, 44, 36, 28, 20, 12, 4, 62,
    54, 46, 38, 30, 22, 14, 6,
];

/// Feistel expansion E fused with the lane ordering used on even rounds
/// (round 0, 2, 4, ...). Indexed `[sbox * 6 + i]`.
pub const EVEN_EXPANSION: [u8; 48] = [
    6, 56, 48, 40, 32, 24, 32, 24, 16, 8, 0, 58, 0, 58, 50, 42, 34, 26, 34, 26, 18, 10, 2, 60, 2,
    60, 52, 44, 36, 28, 36, 28, 20, 12, 4, 62, 4, 62, 54, 46, 38, 30, 38, 30, 22, 14, 6, 56,
];

/// Feistel expansion E fused with the lane ordering used on odd rounds.
pub const ODD_EXPANSION: [u8; 48] = [
    7, 57, 49, 41, 33, 25, 33, 25, 17, 9, 1, 59, 1, 59, 51, 43, 35, 27, 35, 27, 19, 11, 3, 61, 3,
    61, 53, 45, 37, 29, 37, 29, 21, 13, 5, 63, 5, 63, 55, 47, 39, 31, 39, 31, 23, 15, 7, 57,
];

/// Feistel P-permutation, scattering S-box output bit `4*sbox + p` to this
/// position within a 32-lane half.
pub const FEISTEL_OUTPUT_ORDER: [u8; 32] = [
    8, 16, 22, 30, 12, 27, 1, 17, 23, 15, 29, 5, 25, 19, 9, 0, 7, 13, 24, 2, 3, 28, 10, 18, 31, 11,
    21, 6, 4, 26, 14, 20,
];

/// The eight DES S-boxes, each flattened to 64 entries indexed directly by
/// the 6-bit input (bits ordered MSB to LSB), so that lookup never requires
/// the row/column split a textbook S-box table needs. Used both by the
/// scalar reference cipher in tests and as the truth table the bitsliced
/// gate network in [`crate::bitslice::sbox`] is built from.
pub const SBOX: [[u8; 64]; 8] = [
    [
        14, 0, 4, 15, 13, 7, 1, 4, 2, 14, 15, 2, 11, 13, 8, 1, 3, 10, 10, 6, 6, 12, 12, 11, 5, 9,
        9, 5, 0, 3, 7, 8, 4, 15, 1, 12, 14, 8, 8, 2, 13, 4, 6, 9, 2, 1, 11, 7, 15, 5, 12, 11, 9, 3,
        7, 14, 3, 10, 10, 0, 5, 6, 0, 13,
    ],
    [
        15, 3, 1, 13, 8, 4, 14, 7, 6, 15, 11, 2, 3, 8, 4, 14, 9, 12, 7, 0, 2, 1, 13, 10, 12, 6, 0,
        9, 5, 11, 10, 5, 0, 13, 14, 8, 7, 10, 11, 1, 10, 3, 4, 15, 13, 4, 1, 2, 5, 11, 8, 6, 12, 7,
        6, 12, 9, 0, 3, 5, 2, 14, 15, 9,
    ],
    [
        10, 13, 0, 7, 9, 0, 14, 9, 6, 3, 3, 4, 15, 6, 5, 10, 1, 2, 13, 8, 12, 5, 7, 14, 11, 12, 4,
        11, 2, 15, 8, 1, 13, 1, 6, 10, 4, 13, 9, 0, 8, 6, 15, 9, 3, 8, 0, 7, 11, 4, 1, 15, 2, 14,
        12, 3, 5, 11, 10, 5, 14, 2, 7, 12,
    ],
    [
        7, 13, 13, 8, 14, 11, 3, 5, 0, 6, 6, 15, 9, 0, 10, 3, 1, 4, 2, 7, 8, 2, 5, 12, 11, 1, 12,
        10, 4, 14, 15, 9, 10, 3, 6, 15, 9, 0, 0, 6, 12, 10, 11, 1, 7, 13, 13, 8, 15, 9, 1, 4, 3, 5,
        14, 11, 5, 12, 2, 7, 8, 2, 4, 14,
    ],
    [
        2, 14, 12, 11, 4, 2, 1, 12, 7, 4, 10, 7, 11, 13, 6, 1, 8, 5, 5, 0, 3, 15, 15, 10, 13, 3, 0,
        9, 14, 8, 9, 6, 4, 11, 2, 8, 1, 12, 11, 7, 10, 1, 13, 14, 7, 2, 8, 13, 15, 6, 9, 15, 12, 0,
        5, 9, 6, 10, 3, 4, 0, 5, 14, 3,
    ],
    [
        12, 10, 1, 15, 10, 4, 15, 2, 9, 7, 2, 12, 6, 9, 8, 5, 0, 6, 13, 1, 3, 13, 4, 14, 14, 0, 7,
        11, 5, 3, 11, 8, 9, 4, 14, 3, 15, 2, 5, 12, 2, 9, 8, 5, 12, 15, 3, 10, 7, 11, 0, 14, 4, 1,
        10, 7, 1, 6, 13, 0, 11, 8, 6, 13,
    ],
    [
        4, 13, 11, 0, 2, 11, 14, 7, 15, 4, 0, 9, 8, 1, 13, 10, 3, 14, 12, 3, 9, 5, 7, 12, 5, 2, 10,
        15, 6, 8, 1, 6, 1, 6, 4, 11, 11, 13, 13, 8, 12, 1, 3, 4, 7, 10, 14, 7, 10, 9, 15, 5, 6, 0,
        8, 15, 0, 14, 5, 2, 9, 3, 2, 12,
    ],
    [
        13, 1, 2, 15, 8, 13, 4, 8, 6, 10, 15, 3, 11, 7, 1, 4, 10, 12, 9, 5, 3, 6, 14, 11, 5, 0, 0,
        14, 12, 9, 7, 2, 7, 2, 11, 1, 4, 14, 1, 7, 9, 4, 12, 10, 14, 8, 2, 13, 0, 15, 6, 12, 10, 9,
        13, 0, 15, 3, 3, 5, 5, 6, 8, 11,
    ],
];

/// Per-round 56-bit (parity-free) subkey bit selection, already in
/// decryption order (round 0 here is "subkey 15" of the forward schedule).
/// Encryption order is this table reversed; see
/// [`crate::bitslice::cipher::ENCRYPT_SUBKEY_ORDER`].
pub const DECRYPT_SUBKEY_ORDER: [[u8; 48]; 16] = [
    [
        15, 51, 36, 2, 49, 21, 35, 31, 8, 14, 23, 43, 9, 37, 29, 28, 45, 0, 1, 7, 38, 30, 22, 42,
        26, 4, 41, 54, 39, 10, 48, 33, 11, 53, 27, 32, 5, 25, 40, 3, 20, 24, 46, 19, 18, 6, 55, 34,
    ],
    [
        22, 1, 43, 9, 31, 28, 42, 38, 15, 21, 30, 50, 16, 44, 36, 35, 52, 7, 8, 14, 45, 37, 29, 49,
        33, 11, 48, 6, 46, 17, 55, 40, 18, 5, 34, 39, 12, 32, 47, 10, 27, 4, 53, 26, 25, 13, 3, 41,
    ],
    [
        36, 15, 0, 23, 45, 42, 31, 52, 29, 35, 44, 7, 30, 1, 50, 49, 9, 21, 22, 28, 2, 51, 43, 38,
        47, 25, 3, 20, 5, 4, 10, 54, 32, 19, 48, 53, 26, 46, 6, 24, 41, 18, 12, 40, 39, 27, 17, 55,
    ],
    [
        50, 29, 14, 37, 2, 31, 45, 9, 43, 49, 1, 21, 44, 15, 7, 38, 23, 35, 36, 42, 16, 8, 0, 52,
        6, 39, 17, 34, 19, 18, 24, 13, 46, 33, 3, 12, 40, 5, 20, 11, 55, 32, 26, 54, 53, 41, 4, 10,
    ],
    [
        7, 43, 28, 51, 16, 45, 2, 23, 0, 38, 15, 35, 1, 29, 21, 52, 37, 49, 50, 31, 30, 22, 14, 9,
        20, 53, 4, 48, 33, 32, 11, 27, 5, 47, 17, 26, 54, 19, 34, 25, 10, 46, 40, 13, 12, 55, 18,
        24,
    ],
    [
        21, 0, 42, 8, 30, 2, 16, 37, 14, 52, 29, 49, 15, 43, 35, 9, 51, 38, 7, 45, 44, 36, 28, 23,
        34, 12, 18, 3, 47, 46, 25, 41, 19, 6, 4, 40, 13, 33, 48, 39, 24, 5, 54, 27, 26, 10, 32, 11,
    ],
    [
        35, 14, 31, 22, 44, 16, 30, 51, 28, 9, 43, 38, 29, 0, 49, 23, 8, 52, 21, 2, 1, 50, 42, 37,
        48, 26, 32, 17, 6, 5, 39, 55, 33, 20, 18, 54, 27, 47, 3, 53, 11, 19, 13, 41, 40, 24, 46, 25,
    ],
    [
        49, 28, 45, 36, 1, 30, 44, 8, 42, 23, 0, 52, 43, 14, 38, 37, 22, 9, 35, 16, 15, 7, 31, 51,
        3, 40, 46, 4, 20, 19, 53, 10, 47, 34, 32, 13, 41, 6, 17, 12, 25, 33, 27, 55, 54, 11, 5, 39,
    ],
    [
        31, 35, 52, 43, 8, 37, 51, 15, 49, 30, 7, 2, 50, 21, 45, 44, 29, 16, 42, 23, 22, 14, 38, 1,
        10, 47, 53, 11, 27, 26, 5, 17, 54, 41, 39, 20, 48, 13, 24, 19, 32, 40, 34, 3, 6, 18, 12, 46,
    ],
    [
        45, 49, 9, 0, 22, 51, 8, 29, 38, 44, 21, 16, 7, 35, 2, 1, 43, 30, 31, 37, 36, 28, 52, 15,
        24, 6, 12, 25, 41, 40, 19, 4, 13, 55, 53, 34, 3, 27, 11, 33, 46, 54, 48, 17, 20, 32, 26, 5,
    ],
    [
        2, 38, 23, 14, 36, 8, 22, 43, 52, 1, 35, 30, 21, 49, 16, 15, 0, 44, 45, 51, 50, 42, 9, 29,
        11, 20, 26, 39, 55, 54, 33, 18, 27, 10, 12, 48, 17, 41, 25, 47, 5, 13, 3, 4, 34, 46, 40, 19,
    ],
    [
        16, 52, 37, 28, 50, 22, 36, 0, 9, 15, 49, 44, 35, 38, 30, 29, 14, 1, 2, 8, 7, 31, 23, 43,
        25, 34, 40, 53, 10, 13, 47, 32, 41, 24, 26, 3, 4, 55, 39, 6, 19, 27, 17, 18, 48, 5, 54, 33,
    ],
    [
        30, 9, 51, 42, 7, 36, 50, 14, 23, 29, 38, 1, 49, 52, 44, 43, 28, 15, 16, 22, 21, 45, 37, 0,
        39, 48, 54, 12, 24, 27, 6, 46, 55, 11, 40, 17, 18, 10, 53, 20, 33, 41, 4, 32, 3, 19, 13, 47,
    ],
    [
        44, 23, 8, 31, 21, 50, 7, 28, 37, 43, 52, 15, 38, 9, 1, 0, 42, 29, 30, 36, 35, 2, 51, 14,
        53, 3, 13, 26, 11, 41, 20, 5, 10, 25, 54, 4, 32, 24, 12, 34, 47, 55, 18, 46, 17, 33, 27, 6,
    ],
    [
        1, 37, 22, 45, 35, 7, 21, 42, 51, 0, 9, 29, 52, 23, 15, 14, 31, 43, 44, 50, 49, 16, 8, 28,
        12, 17, 27, 40, 25, 55, 34, 19, 24, 39, 13, 18, 46, 11, 26, 48, 6, 10, 32, 5, 4, 47, 41, 20,
    ],
    [
        8, 44, 29, 52, 42, 14, 28, 49, 1, 7, 16, 36, 2, 30, 22, 21, 38, 50, 51, 0, 31, 23, 15, 35,
        19, 24, 34, 47, 32, 3, 41, 26, 4, 46, 20, 25, 53, 18, 33, 55, 13, 17, 39, 12, 11, 54, 48,
        27,
    ],
];

/// Seed values for key lanes 50..56: the raw zip of the integers 0..64
/// broadcast across the low 6 bits of a 56-lane key register, so a fresh
/// [`crate::driver::Driver`] starts each batch enumerating 64 consecutive
/// keys.
pub const KEY_ENUMERATION_SEED: [u64; 6] = [
    0x0000_0000_ffff_ffff,
    0x0000_ffff_0000_ffff,
    0x00ff_00ff_00ff_00ff,
    0x0f0f_0f0f_0f0f_0f0f,
    0x3333_3333_3333_3333,
    0x5555_5555_5555_5555,
];
