//! Exhaustive DES key search over one chunk of the 56-bit effective key
//! space, given a known plaintext/ciphertext pair.
//!
//! Invocation: a single positional argument, a string of `'0'`/`'1'` of
//! length `56 - CHUNK_BITS`, fixing the high bits of every key this run
//! searches. The remaining `CHUNK_BITS` bits are swept exhaustively.
//! Matching keys are printed to stdout, one per line, as `0x` followed by
//! 14 lowercase hex digits.

use des_bitslice::Driver;

/// Number of low-order key bits this invocation sweeps; the run covers
/// `2^CHUNK_BITS` candidate keys. Must be at least 6, since one batch of the
/// bitsliced kernel always covers 64 = 2^6 keys at a time.
const CHUNK_BITS: u32 = 24;

/// The known plaintext, raw (not yet zipped).
const PLAINTEXT: u64 = 0x0123_4567_89ab_cdef;

/// The ciphertext `PLAINTEXT` is known to encrypt to under the key being
/// searched for. These constants are placeholders only, to give the binary a
/// default that compiles and runs; callers searching for a real unknown key
/// replace both constants with their own known plaintext/ciphertext pair.
const CIPHERTEXT: u64 = 0x85e8_1354_0f0a_b405;

fn main() {
    let prefix = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            eprintln!("usage: main <prefix of {} bits, '0'/'1'>", 56 - CHUNK_BITS);
            std::process::exit(1);
        }
    };

    let mut driver = match Driver::new(&prefix, CHUNK_BITS) {
        Ok(driver) => driver,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    driver.run(PLAINTEXT, CIPHERTEXT, CHUNK_BITS, |key| {
        println!("0x{key:014x}");
    });
}
