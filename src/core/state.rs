//! Incremental hashing state: block buffering, padding and finalization.
//!
//! A [`Sha256`] is created once, fed any number of chunks through
//! [`Sha256::absorb`], and finalized exactly once. After
//! [`Sha256::finalize`] every further call returns [`HashError::Finalized`].
//! Buffers are embedded in the struct; nothing is heap allocated, and the
//! pending block and running words are wiped when the state is dropped.

use zeroize::Zeroize;

use crate::core::compress::compress;
use crate::core::constants::{BLOCK_LEN, H0, HASH_WORDS, LENGTH_FIELD_LEN};
use crate::core::digest::Digest;
use crate::core::error::HashError;

/// Largest message, in bytes, whose bit length fits the 64-bit length field.
pub const MAX_MESSAGE_BYTES: u64 = u64::MAX / 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Accepting,
    Done,
}

#[derive(Clone, Debug)]
pub struct Sha256 {
    h: [u32; HASH_WORDS],
    pending: [u8; BLOCK_LEN],
    // 0..BLOCK_LEN between calls
    pending_len: usize,
    total_bytes: u64,
    phase: Phase,
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha256 {
    pub fn new() -> Self {
        Sha256 {
            h: H0,
            pending: [0u8; BLOCK_LEN],
            pending_len: 0,
            total_bytes: 0,
            phase: Phase::Accepting,
        }
    }

    /// Bytes absorbed so far.
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    pub fn is_finalized(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Append `data` to the message.
    ///
    /// Any chunking of the same message yields the same digest. On error the
    /// state is left exactly as it was.
    pub fn absorb(&mut self, data: &[u8]) -> Result<(), HashError> {
        if self.phase == Phase::Done {
            return Err(HashError::Finalized);
        }
        let total = u64::try_from(data.len())
            .ok()
            .and_then(|n| self.total_bytes.checked_add(n))
            .filter(|&t| t <= MAX_MESSAGE_BYTES)
            .ok_or_else(|| HashError::length_overflow(self.total_bytes, data.len()))?;
        self.total_bytes = total;

        let mut rest = data;

        // Top up a partially filled block first.
        if self.pending_len > 0 {
            let take = (BLOCK_LEN - self.pending_len).min(rest.len());
            self.pending[self.pending_len..self.pending_len + take].copy_from_slice(&rest[..take]);
            self.pending_len += take;
            rest = &rest[take..];
            if self.pending_len == BLOCK_LEN {
                compress(&mut self.h, &self.pending);
                self.pending_len = 0;
            }
        }

        // Buffer is empty here unless `rest` is, so whole blocks go straight from the input.
        while let Some((block, tail)) = rest.split_first_chunk::<BLOCK_LEN>() {
            compress(&mut self.h, block);
            rest = tail;
        }

        self.pending[self.pending_len..self.pending_len + rest.len()].copy_from_slice(rest);
        self.pending_len += rest.len();
        Ok(())
    }

    /// Pad the message, run the last one or two compressions and return the digest.
    pub fn finalize(&mut self) -> Result<Digest, HashError> {
        if self.phase == Phase::Done {
            return Err(HashError::Finalized);
        }
        let bit_len = self.total_bytes * 8;
        let length_at = BLOCK_LEN - LENGTH_FIELD_LEN;

        self.pending[self.pending_len] = 0x80;
        self.pending_len += 1;

        if self.pending_len > length_at {
            self.pending[self.pending_len..].fill(0);
            compress(&mut self.h, &self.pending);
            self.pending_len = 0;
        }

        self.pending[self.pending_len..length_at].fill(0);
        self.pending[length_at..].copy_from_slice(&bit_len.to_be_bytes());
        compress(&mut self.h, &self.pending);

        self.pending.zeroize();
        self.pending_len = 0;
        self.phase = Phase::Done;
        Ok(Digest::from_words(self.h))
    }
}

impl Drop for Sha256 {
    fn drop(&mut self) {
        self.pending.zeroize();
        self.h.zeroize();
    }
}

/// One-shot digest of `data`.
pub fn sha256(data: &[u8]) -> Result<Digest, HashError> {
    let mut state = Sha256::new();
    state.absorb(data)?;
    state.finalize()
}
