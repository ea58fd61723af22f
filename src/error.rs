use std::fmt;

/// The key-space prefix argument was not exactly `56 - CHUNK_BITS` characters
/// of `'0'`/`'1'`.
#[derive(Debug)]
pub struct PrefixError {
    pub expected_len: usize,
    pub actual_len: usize,
}

impl fmt::Display for PrefixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "incorrect argument size: expected {} bits, got {}",
            self.expected_len, self.actual_len
        )
    }
}

impl std::error::Error for PrefixError {}
