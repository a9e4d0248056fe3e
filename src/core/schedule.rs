//! Message schedule expansion: one 64-byte block into 64 round words.

use crate::core::constants::{BLOCK_LEN, ROUNDS};

#[inline]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Expand `block` into the schedule `W[0..64]`.
///
/// The first 16 words are the block read big-endian; the rest are derived
/// with wrapping `u32` additions.
pub fn expand(block: &[u8; BLOCK_LEN]) -> [u32; ROUNDS] {
    let mut w = [0u32; ROUNDS];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in 16..ROUNDS {
        w[i] = w[i - 16]
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(small_sigma1(w[i - 2]));
    }

    w
}
