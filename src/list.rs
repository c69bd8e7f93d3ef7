//! SyncList: growable, index-addressed sequence that starts empty.

use crate::error::OutOfRange;
use crate::guarded::Guarded;
use crate::seq;
use core::fmt;
use core::mem;

/// A thread-safe growable list.
///
/// Shares the index rules of [`SyncArray`](crate::SyncArray) but is born
/// empty and can reserve capacity up front.
pub struct SyncList<T> {
    inner: Guarded<Vec<T>>,
}

impl<T> SyncList<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Guarded::new(Vec::with_capacity(capacity)),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn push(&self, value: T) {
        self.inner.write().push(value);
    }

    pub fn set(&self, index: usize, value: T) -> Result<T, OutOfRange<T>> {
        seq::set_at(&mut self.inner.write(), index, value)
    }

    pub fn insert(&self, index: usize, value: T) -> Result<(), OutOfRange<T>> {
        seq::insert_at(&mut self.inner.write(), index, value)
    }

    pub fn remove(&self, index: usize) -> Option<T> {
        seq::remove_at(&mut self.inner.write(), index)
    }

    /// Remove every element. Destructors run after the lock is released.
    pub fn clear(&self) {
        let old = mem::take(&mut *self.inner.write());
        log::trace!("SyncList::clear released {} elements", old.len());
    }

    pub fn into_vec(self) -> Vec<T> {
        self.inner.into_inner()
    }
}

impl<T: Clone> SyncList<T> {
    pub fn get(&self, index: usize) -> Option<T> {
        self.inner.read().get(index).cloned()
    }

    /// Point-in-time copy of the list in index order.
    pub fn values(&self) -> Vec<T> {
        let guard = self.inner.read();
        log::trace!("SyncList::values copying {} elements", guard.len());
        guard.to_vec()
    }

    pub fn duplicate(&self) -> Self {
        Self::from(self.values())
    }
}

impl<T: PartialEq> SyncList<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.inner.read().iter().any(|v| v == value)
    }
}

impl<T> Default for SyncList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SyncList<T> {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl<T> From<Vec<T>> for SyncList<T> {
    fn from(data: Vec<T>) -> Self {
        Self {
            inner: Guarded::new(data),
        }
    }
}

impl<T> FromIterator<T> for SyncList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Extend<T> for SyncList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.get_mut().extend(iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for SyncList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SyncList").field(&self.inner).finish()
    }
}
