//! Single-owner strategy: no synchronization at all.

use std::cell::Cell;

use super::{GuardKind, StateGuard};

/// Unsynchronized state cell for exclusive single-thread ownership.
///
/// `Cell` is `!Sync`, so sharing a generator built on this guard across
/// threads is rejected at compile time rather than being undefined at
/// runtime. This guard carries the eager timing: the owning generator
/// pre-computes the next state at construction and holds it, so its
/// visible state is always one step ahead of the other strategies'.
#[derive(Debug)]
pub struct SingleGuard {
    cell: Cell<u64>,
}

impl StateGuard for SingleGuard {
    const KIND: GuardKind = GuardKind::SingleThread;
    const EAGER: bool = true;

    fn new(state: u64) -> Self {
        Self {
            cell: Cell::new(state),
        }
    }

    fn load(&self) -> u64 {
        self.cell.get()
    }

    fn transition<F: Fn(u64) -> u64>(&self, f: F) -> (u64, u64) {
        let before = self.cell.get();
        let after = f(before);
        self.cell.set(after);
        (before, after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_is_plain_read_write() {
        let guard = SingleGuard::new(7);
        let (before, after) = guard.transition(|s| s << 1);
        assert_eq!((before, after), (7, 14));
        assert_eq!(guard.load(), 14);
    }
}
