//! Splittable generator instances
//!
//! One generic engine hosts every draw and control operation; the four
//! concurrency strategies plug in through the [`StateGuard`] capability
//! instead of duplicating the draw logic four times.
//!
//! # Lifecycle
//!
//! Created entropy-seeded or from an explicit `(seed, stream)` pair,
//! mutated in place by every draw and `advance`, copied by `split` /
//! `split_distinct`, no explicit teardown.

mod draws;

use std::sync::atomic::{AtomicU64, Ordering};

use crate::engine::advance::{advance_state, forward_distance};
use crate::engine::{self, OutputPermutation};
use crate::error::PcgError;
use crate::guard::{AtomicGuard, MonitorGuard, RwLockGuard, SingleGuard, StateGuard};

/// Generator whose accesses are serialized by a mutex.
pub type PcgMonitor = Pcg<MonitorGuard>;
/// Generator with concurrent reads and exclusive writes.
pub type PcgRwLock = Pcg<RwLockGuard>;
/// Lock-free generator using optimistic compare-and-swap retry.
pub type PcgAtomic = Pcg<AtomicGuard>;
/// Unsynchronized single-owner generator with eager state timing.
pub type PcgSingle = Pcg<SingleGuard>;

/// Sentinel bit pattern (a quiet NaN) marking the Gaussian spare slot as
/// empty. The polar method only ever caches finite values.
const SPARE_EMPTY: u64 = 0x7FF8_0000_0000_0000;

/// A splittable permuted-congruential generator.
///
/// The guard type parameter selects the concurrency discipline; the
/// output permutation is a runtime tag fixed at construction. Identical
/// `(seed, stream, permutation)` triples produce identical sequences on
/// every guard.
///
/// # Example
/// ```
/// use pcg_streams_rs::{OutputPermutation, PcgMonitor, PcgAtomic};
///
/// let a = PcgMonitor::with_seed(42, 7, OutputPermutation::XshRr);
/// let b = PcgAtomic::with_seed(42, 7, OutputPermutation::XshRr);
/// assert_eq!(a.next_int(), b.next_int());
/// ```
#[derive(Debug)]
pub struct Pcg<G: StateGuard> {
    guard: G,
    inc: u64,
    permutation: OutputPermutation,
    /// One-slot spare cache for the polar Gaussian method, stored as f64
    /// bits. Not designed for concurrent producer/consumer access: a race
    /// may drop or repeat one spare, which is an accepted relaxation.
    gaussian_spare: AtomicU64,
}

impl<G: StateGuard> Pcg<G> {
    /// Create a generator seeded from OS entropy.
    pub fn new(permutation: OutputPermutation) -> Self {
        Self::with_seed(rand::random::<u64>(), rand::random::<u64>(), permutation)
    }

    /// Create a generator from an explicit `(seed, stream)` pair.
    ///
    /// Distinct stream numbers yield distinct, non-interacting sequences;
    /// identical `(seed, stream, permutation)` always reproduce the same
    /// sequence.
    ///
    /// # Example
    /// ```
    /// use pcg_streams_rs::{OutputPermutation, PcgMonitor};
    ///
    /// let a = PcgMonitor::with_seed(1, 0, OutputPermutation::XshRs);
    /// let b = PcgMonitor::with_seed(1, 0, OutputPermutation::XshRs);
    /// assert_eq!(a.next_long(), b.next_long());
    /// ```
    pub fn with_seed(seed: u64, stream: u64, permutation: OutputPermutation) -> Self {
        let inc = engine::stream_increment(stream);
        let mut state = engine::seed_state(seed, inc);
        if G::EAGER {
            // Eager timing: the next state is computed up front and held.
            state = engine::step(state, inc);
        }
        Self::from_parts(state, inc, permutation)
    }

    /// Recreate a generator from a previously observed `(state, inc)`.
    ///
    /// The state is installed verbatim as the visible state of this
    /// variant. Fails when the increment is zero or even, which would
    /// break the full-period guarantee.
    pub fn restore(
        state: u64,
        inc: u64,
        permutation: OutputPermutation,
    ) -> Result<Self, PcgError> {
        if inc & 1 == 0 {
            return Err(PcgError::InvalidIncrement(inc));
        }
        Ok(Self::from_parts(state, inc, permutation))
    }

    fn from_parts(state: u64, inc: u64, permutation: OutputPermutation) -> Self {
        Self {
            guard: G::new(state),
            inc,
            permutation,
            gaussian_spare: AtomicU64::new(SPARE_EMPTY),
        }
    }

    /// Current visible state. For the eager variant this runs one step
    /// ahead of the other variants' state.
    pub fn state(&self) -> u64 {
        self.guard.load()
    }

    /// The stream increment (always odd).
    pub fn increment(&self) -> u64 {
        self.inc
    }

    /// The output permutation fixed at construction.
    pub fn permutation(&self) -> OutputPermutation {
        self.permutation
    }

    /// Whether this generator uses the eager single-owner timing.
    pub fn is_fast(&self) -> bool {
        G::EAGER
    }

    /// Produce one permuted 32-bit word, advancing the state by one step.
    ///
    /// Lock-based and atomic guards permute the post-step state; the
    /// eager guard permutes the value it already holds and steps after.
    /// Both timings emit the same sequence for equal seeding.
    pub(crate) fn next_word(&self) -> u32 {
        let inc = self.inc;
        let (before, after) = self.guard.transition(|s| engine::step(s, inc));
        let exposed = if G::EAGER { before } else { after };
        self.permutation.permute(exposed)
    }

    /// Skip forward (positive) or rewind (negative) by `delta` draws of
    /// the 32-bit primitive, in O(64) work.
    ///
    /// A negative `delta` is reinterpreted as its unsigned 64-bit
    /// two's-complement representative: the full-period map is a
    /// bijection, so rewinding by k equals advancing by 2^64 - k. Only
    /// deterministic draws are exactly undone this way; rejection-based
    /// draws (bounded ints, boundary-inclusive floats, Gaussian) consume
    /// a data-dependent number of steps.
    ///
    /// # Example
    /// ```
    /// use pcg_streams_rs::{OutputPermutation, PcgMonitor};
    ///
    /// let rng = PcgMonitor::with_seed(0, 0, OutputPermutation::XshRr);
    /// let before = rng.state();
    /// rng.advance(1000);
    /// rng.advance(-1000);
    /// assert_eq!(rng.state(), before);
    /// ```
    pub fn advance(&self, delta: i64) {
        let inc = self.inc;
        self.guard
            .transition(|s| advance_state(s, delta as u64, inc));
    }

    /// Fork a state-identical copy.
    ///
    /// The copy shares no mutable storage with the source; the two
    /// sequences stay identical only until either instance is drawn from
    /// or advanced.
    pub fn split(&self) -> Self {
        let child = Self::from_parts(self.guard.load(), self.inc, self.permutation);
        child
            .gaussian_spare
            .store(self.gaussian_spare.load(Ordering::Relaxed), Ordering::Relaxed);
        child
    }

    /// Fork a freshly entropy-seeded generator of the same variant.
    ///
    /// The child's increment differs from the source's with overwhelming
    /// probability, so the two sequences provably never converge.
    pub fn split_distinct(&self) -> Self {
        Self::new(self.permutation)
    }

    /// Signed number of steps separating this generator from `other`.
    ///
    /// Checked entry point: fails with [`PcgError::IncompatibleVariant`]
    /// unless both generators share the concrete variant (same guard
    /// discipline and same output permutation), and with
    /// [`PcgError::IncompatibleStream`] unless the increments are equal.
    ///
    /// # Example
    /// ```
    /// use pcg_streams_rs::{OutputPermutation, PcgMonitor};
    ///
    /// let a = PcgMonitor::with_seed(3, 5, OutputPermutation::XshRr);
    /// let b = a.split();
    /// b.advance(250);
    /// assert_eq!(a.distance(&b), Ok(250));
    /// assert_eq!(b.distance(&a), Ok(-250));
    /// ```
    pub fn distance<H: StateGuard>(&self, other: &Pcg<H>) -> Result<i64, PcgError> {
        if G::KIND != H::KIND || self.permutation != other.permutation {
            return Err(PcgError::IncompatibleVariant);
        }
        self.distance_unsafe(other)
    }

    /// Distance without the variant check, for deliberate
    /// cross-implementation comparisons. Equal increments are still
    /// required: different streams never converge.
    ///
    /// When exactly one side uses the eager timing, the raw state
    /// distance is off by the one step the eager variant runs ahead, and
    /// is corrected here.
    pub fn distance_unsafe<H: StateGuard>(&self, other: &Pcg<H>) -> Result<i64, PcgError> {
        if self.inc != other.inc {
            return Err(PcgError::IncompatibleStream {
                left: self.inc,
                right: other.inc,
            });
        }
        let raw = forward_distance(self.guard.load(), other.state(), self.inc);
        let corrected = if self.is_fast() != other.is_fast() {
            raw.wrapping_sub(1)
        } else {
            raw
        };
        Ok(corrected as i64)
    }

    pub(crate) fn spare_bits(&self) -> u64 {
        self.gaussian_spare.swap(SPARE_EMPTY, Ordering::Relaxed)
    }

    pub(crate) fn store_spare(&self, value: f64) {
        self.gaussian_spare.store(value.to_bits(), Ordering::Relaxed);
    }

    pub(crate) fn spare_is_empty(bits: u64) -> bool {
        bits == SPARE_EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeding_contract() {
        // inc = (stream << 1) | 1; state = step(0, inc) + seed = inc + seed.
        let rng = PcgMonitor::with_seed(100, 7, OutputPermutation::XshRr);
        assert_eq!(rng.increment(), 15);
        assert_eq!(rng.state(), 115);
    }

    #[test]
    fn test_eager_state_is_one_ahead() {
        let plain = PcgMonitor::with_seed(100, 7, OutputPermutation::XshRr);
        let eager = PcgSingle::with_seed(100, 7, OutputPermutation::XshRr);
        plain.advance(1);
        assert_eq!(plain.state(), eager.state());
    }

    #[test]
    fn test_restore_rejects_even_increment() {
        assert_eq!(
            PcgMonitor::restore(1, 4, OutputPermutation::XshRr).unwrap_err(),
            PcgError::InvalidIncrement(4)
        );
        assert_eq!(
            PcgMonitor::restore(1, 0, OutputPermutation::XshRr).unwrap_err(),
            PcgError::InvalidIncrement(0)
        );
    }

    #[test]
    fn test_restore_roundtrips_visible_state() {
        let rng = PcgMonitor::with_seed(42, 7, OutputPermutation::XshRs);
        for _ in 0..10 {
            rng.next_int();
        }
        let copy =
            PcgMonitor::restore(rng.state(), rng.increment(), rng.permutation()).unwrap();
        for _ in 0..10 {
            assert_eq!(copy.next_int(), rng.next_int());
        }
    }

    #[test]
    fn test_is_fast_flag() {
        assert!(!PcgMonitor::with_seed(0, 0, OutputPermutation::XshRr).is_fast());
        assert!(!PcgRwLock::with_seed(0, 0, OutputPermutation::XshRr).is_fast());
        assert!(!PcgAtomic::with_seed(0, 0, OutputPermutation::XshRr).is_fast());
        assert!(PcgSingle::with_seed(0, 0, OutputPermutation::XshRr).is_fast());
    }
}
