//! SyncArray: pre-sized, growable, index-addressed sequence.

use crate::error::OutOfRange;
use crate::guarded::Guarded;
use crate::seq;
use core::fmt;
use core::mem;

/// A thread-safe array created with a fixed number of default-valued slots.
///
/// Indices `0..len()` are valid for `get`/`set`/`remove`; `insert` also
/// accepts `len()`. Rejected indices leave the array unchanged.
pub struct SyncArray<T> {
    inner: Guarded<Vec<T>>,
}

impl<T: Default> SyncArray<T> {
    /// Create an array of `len` slots, each holding `T::default()`.
    pub fn new(len: usize) -> Self {
        let mut data = Vec::with_capacity(len);
        data.resize_with(len, T::default);
        Self::from_vec(data)
    }
}

impl<T> SyncArray<T> {
    /// Take ownership of `data` as the backing store.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            inner: Guarded::new(data),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Overwrite slot `index`, returning the value it held.
    pub fn set(&self, index: usize, value: T) -> Result<T, OutOfRange<T>> {
        seq::set_at(&mut self.inner.write(), index, value)
    }

    /// Append at the end. Amortized O(1).
    pub fn push(&self, value: T) {
        self.inner.write().push(value);
    }

    /// Insert at `index` (which may equal `len()`), shifting later
    /// elements one slot right.
    pub fn insert(&self, index: usize, value: T) -> Result<(), OutOfRange<T>> {
        seq::insert_at(&mut self.inner.write(), index, value)
    }

    /// Remove and return the element at `index`, shifting later elements
    /// one slot left.
    pub fn remove(&self, index: usize) -> Option<T> {
        seq::remove_at(&mut self.inner.write(), index)
    }

    /// Remove every element. Destructors run after the lock is released.
    pub fn clear(&self) {
        let old = mem::take(&mut *self.inner.write());
        log::trace!("SyncArray::clear released {} elements", old.len());
    }

    pub fn into_vec(self) -> Vec<T> {
        self.inner.into_inner()
    }
}

impl<T: Clone> SyncArray<T> {
    /// Clone of the element at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<T> {
        self.inner.read().get(index).cloned()
    }

    /// Point-in-time copy of every element, in index order.
    pub fn values(&self) -> Vec<T> {
        let values = self.inner.read().clone();
        log::trace!("SyncArray::values copied {} elements", values.len());
        values
    }

    /// Independent array holding a copy of the current contents.
    pub fn duplicate(&self) -> Self {
        Self::from_vec(self.values())
    }
}

impl<T: PartialEq> SyncArray<T> {
    /// True if any element compares equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.inner.read().contains(value)
    }
}

impl<T: Clone> Clone for SyncArray<T> {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl<T> From<Vec<T>> for SyncArray<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T> FromIterator<T> for SyncArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for SyncArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.get_mut().extend(iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for SyncArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SyncArray").field(&self.inner).finish()
    }
}
