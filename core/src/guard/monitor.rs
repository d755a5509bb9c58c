//! Monitor strategy: one mutex serializes every read and write.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{GuardKind, StateGuard};

/// Mutex-guarded state cell.
///
/// The simplest safe discipline: reads and read-modify-writes share the
/// same critical section, so all operations are totally ordered.
#[derive(Debug)]
pub struct MonitorGuard {
    cell: Mutex<u64>,
}

impl MonitorGuard {
    fn lock(&self) -> MutexGuard<'_, u64> {
        // State transitions cannot panic, so a poisoned lock still holds
        // a consistent value.
        self.cell.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StateGuard for MonitorGuard {
    const KIND: GuardKind = GuardKind::Monitor;

    fn new(state: u64) -> Self {
        Self {
            cell: Mutex::new(state),
        }
    }

    fn load(&self) -> u64 {
        *self.lock()
    }

    fn transition<F: Fn(u64) -> u64>(&self, f: F) -> (u64, u64) {
        let mut cell = self.lock();
        let before = *cell;
        let after = f(before);
        *cell = after;
        (before, after)
    }
}
