//! SyncQueue: first-in, first-out sequence.

use crate::guarded::Guarded;
use core::fmt;
use core::mem;
use std::collections::VecDeque;

/// A thread-safe FIFO queue backed by a ring buffer.
///
/// `values` walks the ring buffer in place under the shared lock, so no
/// observer can see the queue transiently drained or reordered.
pub struct SyncQueue<T> {
    inner: Guarded<VecDeque<T>>,
}

impl<T> SyncQueue<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Guarded::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Add `value` at the tail.
    pub fn enqueue(&self, value: T) {
        self.inner.write().push_back(value);
    }

    /// Remove and return the head, or `None` when empty.
    pub fn dequeue(&self) -> Option<T> {
        self.inner.write().pop_front()
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
        log::trace!("SyncQueue::clear released {} elements", old.len());
    }

    pub fn into_inner(self) -> VecDeque<T> {
        self.inner.into_inner()
    }
}

impl<T: Clone> SyncQueue<T> {
    /// Clone of the head without removing it.
    pub fn peek(&self) -> Option<T> {
        self.inner.read().front().cloned()
    }

    /// Point-in-time copy of the queue, head first.
    pub fn values(&self) -> Vec<T> {
        let guard = self.inner.read();
        log::trace!("SyncQueue::values copying {} elements", guard.len());
        guard.iter().cloned().collect()
    }

    pub fn duplicate(&self) -> Self {
        let data = self.inner.read().clone();
        log::trace!("SyncQueue::duplicate copied {} elements", data.len());
        Self {
            inner: Guarded::new(data),
        }
    }
}

impl<T: PartialEq> SyncQueue<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.inner.read().contains(value)
    }
}

impl<T> Default for SyncQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SyncQueue<T> {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

/// Elements are enqueued in iteration order.
impl<T> FromIterator<T> for SyncQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: Guarded::new(iter.into_iter().collect()),
        }
    }
}

impl<T> Extend<T> for SyncQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.get_mut().extend(iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for SyncQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SyncQueue").field(&self.inner).finish()
    }
}
