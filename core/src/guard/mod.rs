//! Concurrency strategies for the shared state cell
//!
//! The only shared mutable resource in the whole crate is one 64-bit
//! state word. Each strategy guards that word differently:
//!
//! - **monitor**: exclusive critical section for every access
//! - **rwlock**: concurrent reads, exclusive writes
//! - **atomic**: optimistic compare-and-swap retry, never blocks
//! - **single**: no guard at all; `!Sync` restricts it to one owner
//!
//! All four are drop-in equivalent: the draw logic lives once in the
//! generator and only the guard discipline is swapped. Under
//! single-threaded use the four produce bit-identical sequences; the
//! choice affects liveness under contention, never the numbers.

mod atomic;
mod monitor;
mod rwlock;
mod single;

pub use atomic::AtomicGuard;
pub use monitor::MonitorGuard;
pub use rwlock::RwLockGuard;
pub use single::SingleGuard;

/// Discriminant naming each guard discipline.
///
/// Part of a generator's concrete identity: the checked distance
/// comparison refuses generators whose kinds differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardKind {
    Monitor,
    ReadWrite,
    Atomic,
    SingleThread,
}

/// Guarded access to one mutable 64-bit state cell.
///
/// A small capability interface: a guarded read plus a guarded
/// read-modify-write. Every draw and control operation goes through these
/// two entry points and never touches raw state directly.
pub trait StateGuard {
    /// Which discipline this guard implements.
    const KIND: GuardKind;

    /// Whether the owning generator pre-computes its next state ("eager"
    /// timing). The eager guard's visible state runs one step ahead of
    /// the others', which the distance engine corrects for.
    const EAGER: bool = false;

    /// Wrap an initial state value.
    fn new(state: u64) -> Self;

    /// Read the current state.
    fn load(&self) -> u64;

    /// Apply `f` to the current state exactly once, returning the
    /// `(before, after)` pair of the transition that was applied.
    ///
    /// `f` must be pure: the optimistic guard re-evaluates it after a
    /// lost race.
    fn transition<F: Fn(u64) -> u64>(&self, f: F) -> (u64, u64);
}
