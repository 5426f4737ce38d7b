// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;
use tracing::debug;

/// SplitMix64 seed whose expansion is the state of [`Prng::new`].
pub const DEFAULT_SEED: u64 = 0;

/// Replaces an all-zero state, the one fixed point of the recurrence.
const ZERO_STATE_GUARD: u32 = 0x9e37_79b9;

const WORDS: usize = 16;

/// Seeding failures.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SeedError {
    /// Fewer than [`Prng::SEED_SIZE`] bytes were supplied.
    #[error("seed requires {needed} bytes, got {got}")]
    TooShort {
        /// Bytes required.
        needed: usize,
        /// Bytes supplied.
        got: usize,
    },
}

/// Stateful WELL512a pseudo-random number generator.
///
/// * Not cryptographically secure; use only for gameplay/state simulation.
/// * 16 words of state plus a rolling index; [`Prng::bits`] is the only
///   operation that advances it, so every sampling routine is a pure
///   function of the seed and the order of calls.
/// * Matching seeds yield identical sequences across supported platforms.
/// * One owner per instance. Independent streams need independently seeded
///   instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prng {
    state: [u32; WORDS],
    index: usize,
}

const fn splitmix64(state: u64) -> (u64, u64) {
    let next = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = next;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    (next, z ^ (z >> 31))
}

/// Fills the state with eight SplitMix64 outputs, low word first.
#[allow(clippy::cast_possible_truncation)]
const fn expand_seed(seed: u64) -> [u32; WORDS] {
    let mut state = [0u32; WORDS];
    let mut sm = seed;
    let mut i = 0;
    while i < WORDS / 2 {
        let (next, v) = splitmix64(sm);
        sm = next;
        state[2 * i] = v as u32;
        state[2 * i + 1] = (v >> 32) as u32;
        i += 1;
    }
    state
}

const DEFAULT_STATE: [u32; WORDS] = expand_seed(DEFAULT_SEED);

impl Prng {
    /// Number of seed bytes consumed by [`Prng::seed`].
    pub const SEED_SIZE: usize = WORDS * 4;

    /// Generator in the fixed default state (the SplitMix64 expansion of
    /// [`DEFAULT_SEED`]).
    ///
    /// Deterministic, not random: seed before relying on the output for
    /// anything player-visible.
    pub const fn new() -> Self {
        Self {
            state: DEFAULT_STATE,
            index: 0,
        }
    }

    /// Same as [`Prng::SEED_SIZE`].
    pub const fn seed_size() -> usize {
        Self::SEED_SIZE
    }

    /// Constructs a generator seeded from exactly [`Prng::SEED_SIZE`] bytes.
    pub fn from_seed_bytes(bytes: &[u8; Self::SEED_SIZE]) -> Self {
        let mut prng = Self::new();
        prng.seed(bytes);
        prng
    }

    /// Constructs a PRNG from a single 64-bit seed via SplitMix64 expansion.
    pub fn from_seed_u64(seed: u64) -> Self {
        debug!(seed, "prng seeded from u64");
        Self::from_state(expand_seed(seed))
    }

    fn from_state(mut state: [u32; WORDS]) -> Self {
        if state.iter().all(|&w| w == 0) {
            state[0] = ZERO_STATE_GUARD;
        }
        Self { state, index: 0 }
    }

    /// Overwrites the state with `bytes` read as little-endian words and
    /// resets the rolling index.
    ///
    /// An all-zero seed is nudged to a non-zero state; the recurrence would
    /// otherwise emit zeros forever.
    pub fn seed(&mut self, bytes: &[u8; Self::SEED_SIZE]) {
        let mut state = [0u32; WORDS];
        for (word, chunk) in state.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        *self = Self::from_state(state);
        debug!(bytes = Self::SEED_SIZE, "prng reseeded");
    }

    /// Slice form of [`Prng::seed`]. Uses the first [`Prng::SEED_SIZE`]
    /// bytes and ignores the rest.
    ///
    /// # Errors
    /// [`SeedError::TooShort`] when fewer bytes are supplied; the state is
    /// left unchanged.
    pub fn seed_from_slice(&mut self, bytes: &[u8]) -> Result<(), SeedError> {
        let head: &[u8; Self::SEED_SIZE] = bytes
            .get(..Self::SEED_SIZE)
            .and_then(|h| h.try_into().ok())
            .ok_or(SeedError::TooShort {
                needed: Self::SEED_SIZE,
                got: bytes.len(),
            })?;
        self.seed(head);
        Ok(())
    }

    /// Advances the generator one WELL512a step and returns the new word.
    pub fn bits(&mut self) -> u32 {
        let st = &mut self.state;
        let i = self.index;

        let a = st[i];
        let c = st[(i + 13) & 15];
        let b = a ^ c ^ (a << 16) ^ (c << 15);
        let mut c = st[(i + 9) & 15];
        c ^= c >> 11;
        let a = b ^ c;
        st[i] = a;
        let d = a ^ ((a << 5) & 0xda44_2d24);

        let i = (i + 15) & 15;
        let a = st[i];
        st[i] = a ^ b ^ d ^ (a << 2) ^ (b << 18) ^ (c << 28);
        self.index = i;
        st[i]
    }

    /// Returns the next double in `[0, 1)`.
    ///
    /// Concatenates 27 bits of one word with 26 bits of the next so all 53
    /// mantissa bits are random.
    pub fn draw(&mut self) -> f64 {
        let hi = self.bits() >> 5;
        let lo = self.bits() >> 6;
        (f64::from(hi) * 67_108_864.0 + f64::from(lo)) / 9_007_199_254_740_992.0
    }
}

impl Default for Prng {
    fn default() -> Self {
        Self::new()
    }
}
