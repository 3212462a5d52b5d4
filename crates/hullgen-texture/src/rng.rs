//! Deterministic RNG wrapper using PCG32.
//!
//! Every material draws its per-channel noise through this type. A stream is
//! consumed strictly in pixel order (row-major, x innermost) and channel order
//! (R, G, B), so the same seed and traversal always yields the same bytes.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Clone)]
pub struct DeterministicRng {
    inner: Pcg32,
    draws: u64,
}

impl DeterministicRng {
    /// Create a new RNG from a 32-bit seed.
    ///
    /// The seed is expanded to 64 bits by duplicating the bits into both
    /// halves of the PCG32 state seed.
    pub fn new(seed: u32) -> Self {
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
            draws: 0,
        }
    }

    /// Derive a per-texture seed from a group seed using BLAKE3.
    pub fn derive_texture_seed(base_seed: u32, texture_name: &str) -> u32 {
        let mut input = Vec::with_capacity(4 + texture_name.len());
        input.extend_from_slice(&base_seed.to_le_bytes());
        input.extend_from_slice(texture_name.as_bytes());
        let hash = blake3::hash(&input);
        let bytes = hash.as_bytes();
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// Draw a uniform integer offset in `[lo, hi]` (inclusive).
    #[inline]
    pub fn offset(&mut self, lo: i32, hi: i32) -> i32 {
        self.draws += 1;
        self.inner.gen_range(lo..=hi)
    }

    /// Draw a uniform integer offset in `[-spread, spread]`.
    #[inline]
    pub fn jitter(&mut self, spread: i32) -> i32 {
        self.offset(-spread, spread)
    }

    /// Number of offsets drawn so far.
    ///
    /// Counts logical draws, not raw PCG outputs: one `offset` call may
    /// consume several raw values when the range needs rejection sampling.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}
