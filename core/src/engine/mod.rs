//! Core permuted-congruential engine
//!
//! The state transition is the full-period linear-congruential map
//! `state' = state * MULT64 + inc (mod 2^64)` with an odd increment.
//! Raw LCG state has weak low bits, so an output permutation folds the
//! high bits down before a word is handed out.
//!
//! # Determinism
//!
//! Same `(seed, stream, permutation)` -> same sequence of words. This is
//! CRITICAL for reproducible simulation, splitting and distance
//! reconstruction; every draw in the crate goes through [`step`] and
//! [`OutputPermutation::permute`].

pub mod advance;

/// Shared LCG multiplier, identical for every variant.
pub const MULT64: u64 = 6364136223846793005;

/// Advance the congruential state by exactly one step.
#[inline]
pub(crate) fn step(state: u64, inc: u64) -> u64 {
    state.wrapping_mul(MULT64).wrapping_add(inc)
}

/// Derive the stream increment from a stream number.
///
/// Forcing the lowest bit keeps the increment odd, which the full-period
/// guarantee depends on. Distinct stream numbers map to distinct odd
/// increments and therefore to non-interacting sequences.
#[inline]
pub(crate) fn stream_increment(stream: u64) -> u64 {
    (stream << 1) | 1
}

/// Compute the initial state for `(seed, inc)`.
///
/// Starts from zero, applies one step with the chosen increment, then
/// mixes the seed in additively.
#[inline]
pub(crate) fn seed_state(seed: u64, inc: u64) -> u64 {
    step(0, inc).wrapping_add(seed)
}

/// Output permutation variant
///
/// An immutable tag selected at construction; it never changes afterwards
/// and is part of a generator's concrete identity for the checked distance
/// comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputPermutation {
    /// xorshift-high followed by a random rotate (XSH-RR).
    ///
    /// The top five state bits select the rotation, so every output bit
    /// depends on the statistically strongest part of the state.
    XshRr,

    /// xorshift-high followed by a random shift (XSH-RS).
    XshRs,
}

impl OutputPermutation {
    /// Turn 64 bits of state into a 32-bit output word.
    #[inline]
    pub(crate) fn permute(self, state: u64) -> u32 {
        match self {
            OutputPermutation::XshRr => {
                let shifted = (((state >> 18) ^ state) >> 27) as u32;
                let rotation = (state >> 59) as u32;
                shifted.rotate_right(rotation)
            }
            OutputPermutation::XshRs => {
                let amount = ((state >> 61) as u32) + 22;
                (((state >> 22) ^ state) >> amount) as u32
            }
        }
    }
}
