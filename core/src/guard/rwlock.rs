//! Reader/writer strategy: concurrent reads, exclusive writes.

use std::sync::{PoisonError, RwLock};

use super::{GuardKind, StateGuard};

/// Reader/writer-lock-guarded state cell.
///
/// Reads take the shared lock and may interleave freely; transitions take
/// the exclusive lock and are totally ordered relative to each other and
/// to reads.
#[derive(Debug)]
pub struct RwLockGuard {
    cell: RwLock<u64>,
}

impl StateGuard for RwLockGuard {
    const KIND: GuardKind = GuardKind::ReadWrite;

    fn new(state: u64) -> Self {
        Self {
            cell: RwLock::new(state),
        }
    }

    fn load(&self) -> u64 {
        *self.cell.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn transition<F: Fn(u64) -> u64>(&self, f: F) -> (u64, u64) {
        let mut cell = self.cell.write().unwrap_or_else(PoisonError::into_inner);
        let before = *cell;
        let after = f(before);
        *cell = after;
        (before, after)
    }
}
