//! Synthetic benchmark input.
//!
//! Produces lowercase ASCII tokens of random length, each followed by a
//! single separator byte while room remains. The same seed always yields
//! the same buffer.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Longest generated token, in bytes.
pub const MAX_TOKEN_LEN: usize = 20;

/// Generate exactly `total_bytes` bytes of `separator`-delimited tokens.
///
/// The last token may be shorter than drawn if the size runs out; no
/// separator is written after it in that case.
pub fn random_buffer(total_bytes: usize, separator: u8, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut buf = Vec::with_capacity(total_bytes);

    while buf.len() < total_bytes {
        let token_len = rng
            .gen_range(1..=MAX_TOKEN_LEN)
            .min(total_bytes - buf.len());
        buf.extend((0..token_len).map(|_| rng.gen_range(b'a'..=b'z')));

        if buf.len() < total_bytes {
            buf.push(separator);
        }
    }

    buf
}
