//! Optimistic strategy: atomic compare-and-swap with retry.

use std::sync::atomic::{AtomicU64, Ordering};

use super::{GuardKind, StateGuard};

/// Lock-free state cell.
///
/// A transition reads the current value, computes the candidate and
/// publishes it with a compare-and-swap; a lost race re-reads and retries
/// with no backoff. No caller ever blocks, each physical transition is
/// applied exactly once, and which logical caller wins a given transition
/// is unspecified.
#[derive(Debug)]
pub struct AtomicGuard {
    cell: AtomicU64,
}

impl StateGuard for AtomicGuard {
    const KIND: GuardKind = GuardKind::Atomic;

    fn new(state: u64) -> Self {
        Self {
            cell: AtomicU64::new(state),
        }
    }

    fn load(&self) -> u64 {
        self.cell.load(Ordering::Relaxed)
    }

    fn transition<F: Fn(u64) -> u64>(&self, f: F) -> (u64, u64) {
        let mut current = self.cell.load(Ordering::Relaxed);
        loop {
            let next = f(current);
            match self
                .cell
                .compare_exchange_weak(current, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return (current, next),
                Err(observed) => current = observed,
            }
        }
    }
}
