//! The SHA-256 compression function.
//!
//! Folds one 64-word message schedule into the running hash state. Every
//! addition is `u32::wrapping_add`; the control flow depends only on the
//! round index, never on the data.

use crate::core::constants::{BLOCK_LEN, HASH_WORDS, K, ROUNDS};
use crate::core::schedule::expand;

#[inline]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline]
fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ (!e & g)
}

#[inline]
fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Run the 64 rounds over an already expanded schedule and add the result
/// back into `state`.
pub fn compress_schedule(state: &mut [u32; HASH_WORDS], w: &[u32; ROUNDS]) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for i in 0..ROUNDS {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(K[i])
            .wrapping_add(w[i]);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (word, reg) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(reg);
    }
}

/// Expand `block` and fold it into `state`.
pub fn compress(state: &mut [u32; HASH_WORDS], block: &[u8; BLOCK_LEN]) {
    let w = expand(block);
    compress_schedule(state, &w);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::H0;

    fn padded_abc() -> [u8; BLOCK_LEN] {
        let mut block = [0u8; BLOCK_LEN];
        block[..3].copy_from_slice(b"abc");
        block[3] = 0x80;
        block[63] = 0x18;
        block
    }

    #[test]
    fn single_block_abc() {
        let mut state = H0;
        compress(&mut state, &padded_abc());
        assert_eq!(
            state,
            [
                0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223,
                0xb00361a3, 0x96177a9c, 0xb410ff61, 0xf20015ad,
            ]
        );
    }

    #[test]
    fn mixing_functions() {
        assert_eq!(ch(0xffff_0000, 0x1234_5678, 0x9abc_def0), 0x1234_def0);
        assert_eq!(maj(0xff00_ff00, 0x0ff0_0ff0, 0x00ff_00ff), 0x0ff0_0ff0);
        assert_eq!(big_sigma0(0), 0);
        assert_eq!(big_sigma1(1), (1u32 << 26) | (1 << 21) | (1 << 7));
    }

    #[test]
    fn compression_is_deterministic_and_state_sensitive() {
        let block = padded_abc();
        let mut first = H0;
        let mut second = H0;
        compress(&mut first, &block);
        compress(&mut second, &block);
        assert_eq!(first, second);

        let mut other = H0;
        other[7] ^= 1;
        compress(&mut other, &block);
        assert_ne!(first, other);
    }

    #[test]
    fn schedule_entry_point_matches_block_entry_point() {
        let block = padded_abc();
        let mut via_block = H0;
        compress(&mut via_block, &block);
        let mut via_schedule = H0;
        compress_schedule(&mut via_schedule, &expand(&block));
        assert_eq!(via_block, via_schedule);
    }
}
