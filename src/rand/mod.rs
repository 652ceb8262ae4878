//! Default random source: a small mixing generator fed by hardware entropy.
//!
//! Not cryptographically secure. Callers who need reproducible output inject
//! their own seeded [`rand::Rng`] instead.

mod hw;

use rand::RngCore;
use rand::rand_core::impls;
use tracing::trace;
use zeroize::Zeroize;

/// Odd 64-bit multiplier for the state transition (golden ratio).
const MULTIPLIER: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-caller generator. Each instance owns its state, so nothing is shared
/// between threads or calls.
pub struct Rand {
    state: u64,
}

impl Rand {
    #[inline]
    pub fn new() -> Self {
        trace!(source = hw::source_name(), "seeding random source");
        Rand {
            state: hw::entropy(),
        }
    }

    /// Name of the entropy source mixed into every draw.
    pub fn source_name() -> &'static str {
        hw::source_name()
    }
}

impl Default for Rand {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for Rand {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        let ent = hw::entropy();

        // State transition: rotate, multiply, XOR entropy
        self.state = self.state.rotate_left(17).wrapping_mul(MULTIPLIER) ^ ent;

        // SplitMix64 output finalizer
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl Drop for Rand {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}
