use std::fmt;

use crate::core::constants::{DIGEST_LEN, HASH_WORDS};

/// A finished SHA-256 digest: the eight final hash words, `h[0]` first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digest([u32; HASH_WORDS]);

impl Digest {
    pub fn from_words(words: [u32; HASH_WORDS]) -> Self {
        Digest(words)
    }

    pub fn words(&self) -> [u32; HASH_WORDS] {
        self.0
    }

    /// Big-endian bytes, most significant byte of `h[0]` first.
    pub fn to_bytes(&self) -> [u8; DIGEST_LEN] {
        let mut out = [0u8; DIGEST_LEN];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    /// 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.0 {
            write!(f, "{:08x}", word)?;
        }
        Ok(())
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(d: Digest) -> Self {
        d.to_bytes()
    }
}

impl From<Digest> for [u32; HASH_WORDS] {
    fn from(d: Digest) -> Self {
        d.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC: [u32; HASH_WORDS] = [
        0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223,
        0xb00361a3, 0x96177a9c, 0xb410ff61, 0xf20015ad,
    ];

    #[test]
    fn hex_is_lowercase_and_zero_padded() {
        let d = Digest::from_words([0, 1, 0xa, 0xff, 0x100, 0xdead_beef, 0x0f0f_0f0f, u32::MAX]);
        let expected = concat!(
            "00000000", "00000001", "0000000a", "000000ff",
            "00000100", "deadbeef", "0f0f0f0f", "ffffffff",
        );
        assert_eq!(d.to_hex(), expected);
        assert_eq!(d.to_hex().len(), 64);
    }

    #[test]
    fn bytes_follow_word_order() {
        let bytes = Digest::from_words(ABC).to_bytes();
        assert_eq!(&bytes[..4], &[0xba, 0x78, 0x16, 0xbf]);
        assert_eq!(&bytes[28..], &[0xf2, 0x00, 0x15, 0xad]);
        let back: [u8; DIGEST_LEN] = Digest::from_words(ABC).into();
        assert_eq!(back, bytes);
    }

    #[test]
    fn display_matches_to_hex() {
        let d = Digest::from_words(ABC);
        assert_eq!(format!("{d}"), "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
        assert_eq!(d.to_hex(), format!("{d}"));
    }
}
