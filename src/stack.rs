//! SyncStack: last-in, first-out sequence.

use crate::guarded::Guarded;
use core::fmt;
use core::mem;

/// A thread-safe LIFO stack. The top of the stack is the end of the
/// backing vector.
pub struct SyncStack<T> {
    inner: Guarded<Vec<T>>,
}

impl<T> SyncStack<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Guarded::new(Vec::with_capacity(capacity)),
        }
    }

    pub fn push(&self, value: T) {
        self.inner.write().push(value);
    }

    /// Remove and return the most recently pushed element.
    pub fn pop(&self) -> Option<T> {
        self.inner.write().pop()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Remove every element. Destructors run after the lock is released.
    pub fn clear(&self) {
        let old = mem::take(&mut *self.inner.write());
        log::trace!("SyncStack::clear released {} elements", old.len());
    }

    /// Consume the stack, returning elements bottom first.
    pub fn into_vec(self) -> Vec<T> {
        self.inner.into_inner()
    }
}

impl<T: Clone> SyncStack<T> {
    pub fn peek(&self) -> Option<T> {
        self.inner.read().last().cloned()
    }

    /// Point-in-time copy of the stack, top first.
    pub fn values(&self) -> Vec<T> {
        let guard = self.inner.read();
        log::trace!("SyncStack::values copying {} elements", guard.len());
        guard.iter().rev().cloned().collect()
    }

    pub fn duplicate(&self) -> Self {
        let data = self.inner.read().clone();
        log::trace!("SyncStack::duplicate copied {} elements", data.len());
        Self {
            inner: Guarded::new(data),
        }
    }
}

impl<T: PartialEq> SyncStack<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.inner.read().contains(value)
    }
}

impl<T> Default for SyncStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SyncStack<T> {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

/// Elements are pushed in iteration order; the last one ends on top.
impl<T> FromIterator<T> for SyncStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: Guarded::new(iter.into_iter().collect()),
        }
    }
}

impl<T> Extend<T> for SyncStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.get_mut().extend(iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for SyncStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SyncStack").field(&self.inner).finish()
    }
}
