//! Error types
//!
//! Incompatible-generator conditions (distance across variants or streams)
//! and invalid restore construction are recoverable errors. Argument
//! validation on draws (non-positive bound, out-of-range probability) is a
//! programming error and panics instead.

use thiserror::Error;

/// Errors raised by generator control operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PcgError {
    /// Checked `distance` across two different concrete variants.
    ///
    /// Generators only count as the same variant when both the concurrency
    /// strategy and the output permutation match.
    #[error("generators are of different concrete variants and cannot be compared")]
    IncompatibleVariant,

    /// Distance across two different stream increments.
    ///
    /// Sequences with different increments provably never converge, so no
    /// finite distance exists.
    #[error("generators draw from different streams (increment {left} vs {right})")]
    IncompatibleStream { left: u64, right: u64 },

    /// Restore construction with a zero or even increment, which would
    /// break the full-period guarantee.
    #[error("increment {0} must be odd and nonzero for the full 2^64 period")]
    InvalidIncrement(u64),
}
