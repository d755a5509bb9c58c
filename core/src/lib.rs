//! PCG Streams - Splittable Permuted-Congruential Generators
//!
//! Statistically strong, splittable pseudorandom generators built on a
//! permuted linear-congruential design, exposed under four interchangeable
//! thread-safety disciplines.
//!
//! # Architecture
//!
//! - **engine**: state transition, output permutations, jump-ahead and
//!   distance algorithms
//! - **guard**: the four concurrency strategies around one 64-bit state cell
//! - **generator**: the generic generator and every typed draw
//! - **error**: incompatibility and construction errors
//!
//! # Critical Invariants
//!
//! 1. The stream increment is always odd (full 2^64 period)
//! 2. Equal `(state, inc, permutation)` produce identical infinite sequences
//! 3. The four concurrency strategies are bit-identical under
//!    single-threaded use; they differ only in liveness under contention
//!
//! # Example
//! ```
//! use pcg_streams_rs::{OutputPermutation, PcgMonitor};
//!
//! let rng = PcgMonitor::with_seed(42, 7, OutputPermutation::XshRr);
//! let a = rng.next_int();
//! let b = rng.next_double();
//! assert!((0.0..1.0).contains(&b));
//! ```

// Module declarations
pub mod engine;
pub mod error;
pub mod generator;
pub mod guard;

// Re-exports for convenience
pub use engine::OutputPermutation;
pub use error::PcgError;
pub use generator::{Pcg, PcgAtomic, PcgMonitor, PcgRwLock, PcgSingle};
pub use guard::{AtomicGuard, GuardKind, MonitorGuard, RwLockGuard, SingleGuard, StateGuard};
