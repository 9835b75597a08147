//! Provides [`LocalLock`] - the lock policy of single-threaded containers.
use parking_lot::lock_api::{GuardNoSend, RawRwLock, RawRwLockRecursive};
use std::cell::Cell;

const UNLOCKED: usize = 0;
const EXCLUSIVE: usize = usize::MAX;

/// A reader/writer "lock" for containers that never leave their thread.
///
/// Never blocks. Tracks borrows the same way [`std::cell::RefCell`] does and panics on a
/// conflicting acquisition, which can only be caused by re-entering a container from inside one
/// of its own callbacks (for example mutating a buffer from an element's `with_mut` closure).
///
/// Contains a [`Cell`], hence `!Sync`: the compiler rejects sharing a container that uses this
/// policy between threads.
#[derive(Debug)]
pub struct LocalLock {
    state: Cell<usize>,
}

impl LocalLock {
    fn acquire_shared(&self) -> bool {
        match self.state.get() {
            EXCLUSIVE => false,
            readers => {
                self.state.set(readers + 1);
                true
            }
        }
    }
}

unsafe impl RawRwLock for LocalLock {
    #[allow(clippy::declare_interior_mutable_const)]
    const INIT: Self = LocalLock {
        state: Cell::new(UNLOCKED),
    };

    type GuardMarker = GuardNoSend;

    fn lock_shared(&self) {
        assert!(
            self.acquire_shared(),
            "container is exclusively locked by the current thread"
        );
    }

    fn try_lock_shared(&self) -> bool {
        self.acquire_shared()
    }

    unsafe fn unlock_shared(&self) {
        debug_assert!(
            self.state.get() != UNLOCKED && self.state.get() != EXCLUSIVE,
            "shared lock is not held"
        );
        self.state.set(self.state.get() - 1);
    }

    fn lock_exclusive(&self) {
        assert!(
            self.try_lock_exclusive(),
            "container is already locked by the current thread"
        );
    }

    fn try_lock_exclusive(&self) -> bool {
        if self.state.get() == UNLOCKED {
            self.state.set(EXCLUSIVE);
            true
        } else {
            false
        }
    }

    unsafe fn unlock_exclusive(&self) {
        debug_assert_eq!(self.state.get(), EXCLUSIVE, "exclusive lock is not held");
        self.state.set(UNLOCKED);
    }

    fn is_locked(&self) -> bool {
        self.state.get() != UNLOCKED
    }

    fn is_locked_exclusive(&self) -> bool {
        self.state.get() == EXCLUSIVE
    }
}

unsafe impl RawRwLockRecursive for LocalLock {
    fn lock_shared_recursive(&self) {
        self.lock_shared();
    }

    fn try_lock_shared_recursive(&self) -> bool {
        self.try_lock_shared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::lock_api::RwLock;

    type LocalRwLock<T> = RwLock<LocalLock, T>;

    #[test]
    fn test_shared_locks_stack() {
        let lock = LocalRwLock::new(5);
        let first = lock.read();
        let second = lock.read_recursive();
        assert_eq!(*first + *second, 10);
        assert!(lock.try_write().is_none());
    }

    #[test]
    fn test_exclusive_excludes_readers() {
        let lock = LocalRwLock::new(5);
        {
            let mut guard = lock.write();
            *guard += 1;
            assert!(lock.try_read().is_none());
        }
        assert_eq!(*lock.read(), 6);
    }

    #[test]
    #[should_panic(expected = "exclusively locked")]
    fn test_reentrant_read_under_write_panics() {
        let lock = LocalRwLock::new(());
        let _guard = lock.write();
        let _ = lock.read();
    }
}
