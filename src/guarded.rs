//! Guarded: state plus its reader/writer lock, owned as one unit.
//!
//! Every container in the crate stores its backing collection in a
//! `Guarded<T>`. Reads take the shared side of the lock, writes take the
//! exclusive side, and every acquisition first registers with the debug
//! reentrancy tracker so a nested entry from the same thread panics
//! instead of deadlocking.

use crate::reentrancy::{self, ReentrancyGuard};
use core::fmt;
use core::ops::{Deref, DerefMut};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub(crate) struct Guarded<T> {
    lock: RwLock<T>,
}

/// Shared access to the guarded state. Other readers may hold one too.
pub(crate) struct Shared<'a, T> {
    // Field order matters: the lock is released before the reentrancy
    // entry is cleared.
    guard: RwLockReadGuard<'a, T>,
    _entry: ReentrancyGuard<'a>,
}

/// Exclusive access to the guarded state.
pub(crate) struct Exclusive<'a, T> {
    guard: RwLockWriteGuard<'a, T>,
    _entry: ReentrancyGuard<'a>,
}

impl<T> Guarded<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            lock: RwLock::new(value),
        }
    }

    /// Acquire the shared side of the lock.
    #[inline]
    pub(crate) fn read(&self) -> Shared<'_, T> {
        let entry = reentrancy::enter(self);
        Shared {
            guard: self.lock.read(),
            _entry: entry,
        }
    }

    /// Acquire the exclusive side of the lock.
    #[inline]
    pub(crate) fn write(&self) -> Exclusive<'_, T> {
        let entry = reentrancy::enter(self);
        Exclusive {
            guard: self.lock.write(),
            _entry: entry,
        }
    }

    /// Direct access through a unique borrow; no locking needed.
    #[inline]
    pub(crate) fn get_mut(&mut self) -> &mut T {
        self.lock.get_mut()
    }

    pub(crate) fn into_inner(self) -> T {
        self.lock.into_inner()
    }
}

impl<T: fmt::Debug> fmt::Debug for Guarded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.read(), f)
    }
}

impl<T> Deref for Shared<'_, T> {
    type Target = T;
    #[inline]
    fn deref(&self) -> &T {
        &self.guard
    }
}

impl<T> Deref for Exclusive<'_, T> {
    type Target = T;
    #[inline]
    fn deref(&self) -> &T {
        &self.guard
    }
}

impl<T> DerefMut for Exclusive<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.guard
    }
}
