// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Ranged draws and population sampling on top of [`Prng::bits`].

use tracing::trace;

use crate::Prng;

/// Largest population (and range span) the sampling routines accept: one
/// more than `u32::MAX`. Counters are therefore `u64`.
pub const POPULATION_MAX: u64 = 1 << 32;

/// Largest sample [`Prng::choose`] builds with Floyd's algorithm.
const SPARSE_SAMPLE_MAX: usize = 4096;
/// Floyd's algorithm is used while `sample << shift < population`.
const SPARSE_DENSITY_SHIFT: u32 = 8;

/// Fills `values` with `start, start + 1, …` in order.
///
/// No randomness is involved; this seeds an array for [`Prng::shuffle`].
/// Values wrap past `u32::MAX`.
pub fn sequence(values: &mut [u32], start: u32) {
    let mut next = start;
    for v in values {
        *v = next;
        next = next.wrapping_add(1);
    }
}

impl Prng {
    /// Returns a value uniformly distributed over `[min, max)`.
    ///
    /// Requires `min < max <= POPULATION_MAX`. Scales one word by the span
    /// with a widening multiply and rejects the few low products that would
    /// bias the result. An empty range returns `min` without drawing.
    #[allow(clippy::cast_possible_truncation)]
    pub fn range(&mut self, min: u64, max: u64) -> u32 {
        debug_assert!(
            min <= max && max <= POPULATION_MAX,
            "invalid range: {min}..{max}"
        );
        let span = max.saturating_sub(min).min(POPULATION_MAX);
        if span == 0 {
            return min as u32;
        }
        if span == POPULATION_MAX {
            return self.bits();
        }

        let span32 = span as u32;
        let mut m = u64::from(self.bits()) * span;
        if (m as u32) < span32 {
            let threshold = span32.wrapping_neg() % span32;
            while (m as u32) < threshold {
                m = u64::from(self.bits()) * span;
            }
        }
        (min + (m >> 32)) as u32
    }

    /// Shuffles `values` in place (Knuth–Fisher–Yates).
    ///
    /// Walks from the last index down to 1, swapping each element with a
    /// uniformly chosen one at or below it. Every permutation is equally
    /// likely. Slices longer than [`POPULATION_MAX`] are not supported.
    pub fn shuffle<T>(&mut self, values: &mut [T]) {
        debug_assert!(values.len() as u64 <= POPULATION_MAX);
        for i in (1..values.len()).rev() {
            let j = self.range(0, i as u64 + 1) as usize;
            values.swap(i, j);
        }
    }

    /// Fills `out` with `out.len()` distinct values drawn uniformly from
    /// `[0, population)`, in ascending order.
    ///
    /// Dense samples use selection sampling (Knuth's Algorithm S): each
    /// candidate is taken with probability `needed / remaining`, so the scan
    /// stops as soon as `out` is full and never revisits a value. Small
    /// samples from a much larger population use Floyd's algorithm instead,
    /// which draws exactly `out.len()` times however large the population.
    /// Requires `out.len() <= population <= POPULATION_MAX`.
    pub fn choose(&mut self, population: u64, out: &mut [u32]) {
        debug_assert!(population <= POPULATION_MAX);
        debug_assert!(out.len() as u64 <= population, "sample larger than population");
        trace!(population, sample = out.len(), "choose without replacement");

        let sparse = (out.len() as u64) << SPARSE_DENSITY_SHIFT < population;
        if sparse && out.len() <= SPARSE_SAMPLE_MAX {
            self.choose_sparse(population, out);
        } else {
            self.choose_dense(population, out);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn choose_dense(&mut self, population: u64, out: &mut [u32]) {
        let mut filled = 0;
        let mut candidate: u64 = 0;
        while filled < out.len() && candidate < population {
            let needed = (out.len() - filled) as u64;
            if u64::from(self.range(0, population - candidate)) < needed {
                out[filled] = candidate as u32;
                filled += 1;
            }
            candidate += 1;
        }
    }

    /// Floyd's sampling with `out[..filled]` kept sorted in place.
    ///
    /// Round `j` draws from `[0, j]`; a value already taken is replaced by
    /// `j` itself, which exceeds everything taken so far.
    #[allow(clippy::cast_possible_truncation)]
    fn choose_sparse(&mut self, population: u64, out: &mut [u32]) {
        let first = population - out.len() as u64;
        for (filled, j) in (first..population).enumerate() {
            let drawn = self.range(0, j + 1);
            let (value, at) = match out[..filled].binary_search(&drawn) {
                Ok(_) => (j as u32, filled),
                Err(at) => (drawn, at),
            };
            out.copy_within(at..filled, at + 1);
            out[at] = value;
        }
    }

    /// Fills `out` with independent uniform draws from `[0, population)`,
    /// then sorts them ascending. Repeats are allowed.
    pub fn choose_with_replacement(&mut self, population: u64, out: &mut [u32]) {
        debug_assert!(population > 0 || out.is_empty(), "empty population");
        trace!(population, sample = out.len(), "choose with replacement");

        for slot in out.iter_mut() {
            *slot = self.range(0, population);
        }
        out.sort_unstable();
    }
}
