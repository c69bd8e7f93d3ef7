//! SyncMap: key-addressed association with unordered enumeration.

use crate::guarded::Guarded;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::mem;
use hashbrown::hash_map::DefaultHashBuilder;
use hashbrown::HashMap;

/// A thread-safe hash map.
///
/// Enumeration order of `keys`, `values` and `entries` is unspecified and
/// may differ between calls.
pub struct SyncMap<K, V, S = DefaultHashBuilder> {
    inner: Guarded<HashMap<K, V, S>>,
}

impl<K, V> SyncMap<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, Default::default())
    }
}

impl<K, V> Default for SyncMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> SyncMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Clone + Default,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            inner: Guarded::new(HashMap::with_hasher(hasher)),
        }
    }

    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            inner: Guarded::new(HashMap::with_capacity_and_hasher(capacity, hasher)),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.read().contains_key(key)
    }

    /// Insert or overwrite. Returns the value previously stored under `key`.
    ///
    /// On overwrite the stored key is kept; the passed-in key is dropped
    /// after the lock is released.
    pub fn set(&self, key: K, value: V) -> Option<V> {
        let (old, _unused_key) = {
            let mut map = self.inner.write();
            match map.get_mut(&key) {
                Some(slot) => (Some(mem::replace(slot, value)), Some(key)),
                None => {
                    map.insert(key, value);
                    (None, None)
                }
            }
        };
        old
    }

    /// Remove `key` if present, returning its value. Absent keys are a no-op.
    /// The stored key is dropped after the lock is released.
    pub fn delete<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let removed = self.inner.write().remove_entry(key);
        removed.map(|(_key, value)| value)
    }

    /// Remove every entry. Destructors run after the lock is released.
    pub fn clear(&self) {
        let old = mem::take(&mut *self.inner.write());
        log::trace!("SyncMap::clear released {} entries", old.len());
    }

    pub fn into_inner(self) -> HashMap<K, V, S> {
        self.inner.into_inner()
    }
}

impl<K, V, S> SyncMap<K, V, S>
where
    K: Eq + Hash,
    V: Clone,
    S: BuildHasher + Clone + Default,
{
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.read().get(key).cloned()
    }

    /// Point-in-time copy of all values.
    pub fn values(&self) -> Vec<V> {
        let guard = self.inner.read();
        log::trace!("SyncMap::values copying {} values", guard.len());
        guard.values().cloned().collect()
    }
}

impl<K, V, S> SyncMap<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Clone + Default,
{
    /// Point-in-time copy of all keys. Each key appears exactly once.
    pub fn keys(&self) -> Vec<K> {
        let guard = self.inner.read();
        log::trace!("SyncMap::keys copying {} keys", guard.len());
        guard.keys().cloned().collect()
    }
}

impl<K, V, S> SyncMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone + Default,
{
    /// Point-in-time copy of all key/value pairs, taken under one lock.
    pub fn entries(&self) -> Vec<(K, V)> {
        let guard = self.inner.read();
        log::trace!("SyncMap::entries copying {} entries", guard.len());
        guard.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Independent map holding a per-entry copy of the current contents.
    pub fn duplicate(&self) -> Self {
        let data = self.inner.read().clone();
        log::trace!("SyncMap::duplicate copied {} entries", data.len());
        Self {
            inner: Guarded::new(data),
        }
    }
}

impl<K, V, S> Clone for SyncMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone + Default,
{
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl<K, V, S> FromIterator<(K, V)> for SyncMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Clone + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: Guarded::new(iter.into_iter().collect()),
        }
    }
}

impl<K, V, S> Extend<(K, V)> for SyncMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Clone + Default,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.inner.get_mut().extend(iter);
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for SyncMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SyncMap").field(&self.inner).finish()
    }
}
