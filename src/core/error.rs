use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// `absorb` or `finalize` was called after the digest was produced.
    Finalized,
    /// The message bit length would no longer fit in the 64-bit length field.
    LengthOverflow { total_bytes: u64, additional: usize },
}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashError::Finalized => write!(f, "Invalid State: hash state already finalized"),
            HashError::LengthOverflow { total_bytes, additional } => write!(
                f,
                "Length Overflow: {} + {} bytes exceeds the 64-bit bit-length field",
                total_bytes, additional
            ),
        }
    }
}

impl std::error::Error for HashError {}

impl HashError {
    pub fn length_overflow(total_bytes: u64, additional: usize) -> Self {
        HashError::LengthOverflow { total_bytes, additional }
    }
}
